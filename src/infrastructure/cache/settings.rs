//! Cache sizing shared by every named cache

use std::time::Duration;

use moka::future::{Cache, CacheBuilder};

/// Capacity and expiry applied to each underlying moka cache
///
/// Both limits are optional; without them entries live until invalidated.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CacheSettings {
    pub max_capacity: Option<u64>,
    pub time_to_live: Option<Duration>,
}

impl CacheSettings {
    pub fn with_max_capacity(mut self, capacity: u64) -> Self {
        self.max_capacity = Some(capacity);
        self
    }

    pub fn with_time_to_live(mut self, ttl: Duration) -> Self {
        self.time_to_live = Some(ttl);
        self
    }

    pub(super) fn build<K, V>(&self) -> Cache<K, V>
    where
        K: std::hash::Hash + Eq + Send + Sync + 'static,
        V: Clone + Send + Sync + 'static,
    {
        let mut builder: CacheBuilder<K, V, Cache<K, V>> = Cache::builder();

        if let Some(capacity) = self.max_capacity {
            builder = builder.max_capacity(capacity);
        }

        if let Some(ttl) = self.time_to_live {
            builder = builder.time_to_live(ttl);
        }

        builder.build()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_build_applies_limits() {
        let settings = CacheSettings::default()
            .with_max_capacity(10)
            .with_time_to_live(Duration::from_secs(60));

        let cache: Cache<String, String> = settings.build();
        cache.insert("8_2_user1".to_string(), "abcd1234".to_string()).await;

        assert_eq!(cache.policy().max_capacity(), Some(10));
        assert_eq!(cache.policy().time_to_live(), Some(Duration::from_secs(60)));
        assert_eq!(cache.get("8_2_user1").await, Some("abcd1234".to_string()));
    }

    #[test]
    fn test_default_is_unbounded() {
        let cache: Cache<u64, u64> = CacheSettings::default().build();

        assert_eq!(cache.policy().max_capacity(), None);
        assert_eq!(cache.policy().time_to_live(), None);
    }
}
