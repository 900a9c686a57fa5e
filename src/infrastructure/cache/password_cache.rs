//! Password caches

use async_trait::async_trait;
use moka::future::Cache;

use crate::domain::password::{Password, PasswordCache, PasswordId};
use crate::domain::DomainError;

use super::CacheSettings;

/// Key of the list-shaped password cache
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
enum CollectionKey {
    All,
    ByTag(String),
}

/// moka implementation of PasswordCache
///
/// Holds four named caches: generated values, bulk results, records by id and
/// record lists. Entries are cloned on read.
#[derive(Debug, Clone)]
pub struct MokaPasswordCache {
    generated: Cache<String, String>,
    bulk: Cache<String, Vec<String>>,
    by_id: Cache<PasswordId, Password>,
    collections: Cache<CollectionKey, Vec<Password>>,
}

impl MokaPasswordCache {
    pub fn new(settings: &CacheSettings) -> Self {
        Self {
            generated: settings.build(),
            bulk: settings.build(),
            by_id: settings.build(),
            collections: settings.build(),
        }
    }
}

impl Default for MokaPasswordCache {
    fn default() -> Self {
        Self::new(&CacheSettings::default())
    }
}

#[async_trait]
impl PasswordCache for MokaPasswordCache {
    async fn get_generated_password(&self, key: &str) -> Result<Option<String>, DomainError> {
        Ok(self.generated.get(key).await)
    }

    async fn put_generated_password(&self, key: &str, value: String) -> Result<(), DomainError> {
        self.generated.insert(key.to_string(), value).await;
        Ok(())
    }

    async fn get_bulk_passwords(&self, key: &str) -> Result<Option<Vec<String>>, DomainError> {
        Ok(self.bulk.get(key).await)
    }

    async fn put_bulk_passwords(&self, key: &str, value: Vec<String>) -> Result<(), DomainError> {
        self.bulk.insert(key.to_string(), value).await;
        Ok(())
    }

    async fn get_password_by_id(&self, id: PasswordId) -> Result<Option<Password>, DomainError> {
        Ok(self.by_id.get(&id).await)
    }

    async fn put_password_by_id(
        &self,
        id: PasswordId,
        password: Password,
    ) -> Result<(), DomainError> {
        self.by_id.insert(id, password).await;
        Ok(())
    }

    async fn get_all_passwords(&self) -> Result<Option<Vec<Password>>, DomainError> {
        Ok(self.collections.get(&CollectionKey::All).await)
    }

    async fn put_all_passwords(&self, passwords: Vec<Password>) -> Result<(), DomainError> {
        self.collections.insert(CollectionKey::All, passwords).await;
        Ok(())
    }

    async fn get_passwords_by_tag(&self, name: &str) -> Result<Option<Vec<Password>>, DomainError> {
        Ok(self
            .collections
            .get(&CollectionKey::ByTag(name.to_string()))
            .await)
    }

    async fn put_passwords_by_tag(
        &self,
        name: &str,
        passwords: Vec<Password>,
    ) -> Result<(), DomainError> {
        self.collections
            .insert(CollectionKey::ByTag(name.to_string()), passwords)
            .await;
        Ok(())
    }

    async fn evict_password(&self, id: PasswordId) -> Result<(), DomainError> {
        self.by_id.invalidate(&id).await;
        Ok(())
    }

    async fn invalidate_collections(&self) -> Result<(), DomainError> {
        self.collections.invalidate_all();
        Ok(())
    }
}
