//! Tag caches

use async_trait::async_trait;
use moka::future::Cache;

use crate::domain::tag::{Tag, TagCache, TagId};
use crate::domain::DomainError;

use super::CacheSettings;

/// moka implementation of TagCache
#[derive(Debug, Clone)]
pub struct MokaTagCache {
    all: Cache<(), Vec<Tag>>,
    by_id: Cache<TagId, Tag>,
}

impl MokaTagCache {
    pub fn new(settings: &CacheSettings) -> Self {
        Self {
            all: settings.build(),
            by_id: settings.build(),
        }
    }
}

impl Default for MokaTagCache {
    fn default() -> Self {
        Self::new(&CacheSettings::default())
    }
}

#[async_trait]
impl TagCache for MokaTagCache {
    async fn get_all_tags(&self) -> Result<Option<Vec<Tag>>, DomainError> {
        Ok(self.all.get(&()).await)
    }

    async fn put_all_tags(&self, tags: Vec<Tag>) -> Result<(), DomainError> {
        self.all.insert((), tags).await;
        Ok(())
    }

    async fn get_tag_by_id(&self, id: TagId) -> Result<Option<Tag>, DomainError> {
        Ok(self.by_id.get(&id).await)
    }

    async fn put_tag_by_id(&self, id: TagId, tag: Tag) -> Result<(), DomainError> {
        self.by_id.insert(id, tag).await;
        Ok(())
    }

    async fn clear_cache(&self) -> Result<(), DomainError> {
        self.all.invalidate_all();
        self.by_id.invalidate_all();
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_clear_cache_drops_everything() {
        let cache = MokaTagCache::default();

        cache.put_all_tags(vec![Tag::with_id(1, "work")]).await.unwrap();
        cache.put_tag_by_id(1, Tag::with_id(1, "work")).await.unwrap();

        assert!(cache.get_all_tags().await.unwrap().is_some());
        assert_eq!(cache.get_tag_by_id(1).await.unwrap(), Some(Tag::with_id(1, "work")));

        cache.clear_cache().await.unwrap();

        assert!(cache.get_all_tags().await.unwrap().is_none());
        assert!(cache.get_tag_by_id(1).await.unwrap().is_none());
    }

    #[tokio::test]
    async fn test_empty_list_is_a_hit() {
        let cache = MokaTagCache::default();

        cache.put_all_tags(Vec::new()).await.unwrap();

        assert_eq!(cache.get_all_tags().await.unwrap(), Some(Vec::new()));
    }
}
