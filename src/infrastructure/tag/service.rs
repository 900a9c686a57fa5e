//! Tag service

use std::sync::Arc;

use tracing::{debug, info};

use crate::domain::tag::{Tag, TagCache, TagId, TagRepository};
use crate::domain::DomainError;

/// Cache-aside tag lookups; every mutation clears the tag cache
pub struct TagService<R: TagRepository, C: TagCache> {
    repository: Arc<R>,
    cache: Arc<C>,
}

impl<R: TagRepository, C: TagCache> TagService<R, C> {
    pub fn new(repository: Arc<R>, cache: Arc<C>) -> Self {
        Self { repository, cache }
    }

    pub async fn find_all(&self) -> Result<Vec<Tag>, DomainError> {
        if let Some(cached) = self.cache.get_all_tags().await? {
            debug!(count = cached.len(), "Tag list cache hit");
            return Ok(cached);
        }

        let tags = self.repository.find_all().await?;
        self.cache.put_all_tags(tags.clone()).await?;

        Ok(tags)
    }

    pub async fn find_by_id(&self, id: TagId) -> Result<Option<Tag>, DomainError> {
        if let Some(cached) = self.cache.get_tag_by_id(id).await? {
            debug!(id, "Tag cache hit");
            return Ok(Some(cached));
        }

        let found = self.repository.find_by_id(id).await?;

        if let Some(tag) = &found {
            self.cache.put_tag_by_id(id, tag.clone()).await?;
        }

        Ok(found)
    }

    pub async fn create(&self, tag: Tag) -> Result<Tag, DomainError> {
        let saved = self.repository.save(tag).await?;
        self.cache.clear_cache().await?;

        info!(id = ?saved.id(), name = %saved.name(), "Created tag");
        Ok(saved)
    }

    /// Rename a stored tag; an unknown id fails without touching the cache
    pub async fn update(&self, tag: Tag) -> Result<Tag, DomainError> {
        let saved = self.repository.save(tag).await?;
        self.cache.clear_cache().await?;

        info!(id = ?saved.id(), name = %saved.name(), "Updated tag");
        Ok(saved)
    }

    pub async fn delete(&self, id: TagId) -> Result<(), DomainError> {
        self.repository.delete_by_id(id).await?;
        self.cache.clear_cache().await?;

        info!(id, "Deleted tag");
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::tag::{tag_not_found, MockTagCache, MockTagRepository};
    use crate::infrastructure::cache::{CacheSettings, MokaTagCache};
    use crate::infrastructure::tag::InMemoryTagRepository;
    use mockall::predicate::eq;

    fn create_service(
        repository: MockTagRepository,
        cache: MockTagCache,
    ) -> TagService<MockTagRepository, MockTagCache> {
        TagService::new(Arc::new(repository), Arc::new(cache))
    }

    #[tokio::test]
    async fn test_find_all_miss_populates_cache() {
        let mut repository = MockTagRepository::new();
        repository
            .expect_find_all()
            .times(1)
            .returning(|| Ok(vec![Tag::with_id(1, "tag1"), Tag::with_id(2, "tag2")]));

        let mut cache = MockTagCache::new();
        cache.expect_get_all_tags().returning(|| Ok(None));
        cache
            .expect_put_all_tags()
            .withf(|tags| tags.len() == 2)
            .times(1)
            .returning(|_| Ok(()));

        let service = create_service(repository, cache);

        let tags = service.find_all().await.unwrap();
        assert_eq!(tags.len(), 2);
        assert_eq!(tags[0].name(), "tag1");
    }

    #[tokio::test]
    async fn test_find_all_cache_hit_skips_store() {
        let mut repository = MockTagRepository::new();
        repository.expect_find_all().never();

        let mut cache = MockTagCache::new();
        cache
            .expect_get_all_tags()
            .returning(|| Ok(Some(vec![Tag::with_id(1, "cached")])));

        let service = create_service(repository, cache);

        let tags = service.find_all().await.unwrap();
        assert_eq!(tags, vec![Tag::with_id(1, "cached")]);
    }

    #[tokio::test]
    async fn test_find_by_id() {
        let mut repository = MockTagRepository::new();
        repository
            .expect_find_by_id()
            .with(eq(1))
            .returning(|id| Ok(Some(Tag::with_id(id, "tag1"))));
        repository
            .expect_find_by_id()
            .with(eq(2))
            .returning(|_| Ok(None));

        let mut cache = MockTagCache::new();
        cache.expect_get_tag_by_id().returning(|_| Ok(None));
        cache
            .expect_put_tag_by_id()
            .with(eq(1), eq(Tag::with_id(1, "tag1")))
            .times(1)
            .returning(|_, _| Ok(()));

        let service = create_service(repository, cache);

        assert_eq!(service.find_by_id(1).await.unwrap().unwrap().name(), "tag1");
        assert!(service.find_by_id(2).await.unwrap().is_none());
    }

    #[tokio::test]
    async fn test_create_clears_cache() {
        let mut repository = MockTagRepository::new();
        repository
            .expect_save()
            .times(1)
            .returning(|t| Ok(Tag::with_id(1, t.name())));

        let mut cache = MockTagCache::new();
        cache.expect_clear_cache().times(1).returning(|| Ok(()));

        let service = create_service(repository, cache);

        let created = service.create(Tag::new("tag1")).await.unwrap();
        assert_eq!(created.id(), Some(1));
        assert_eq!(created.name(), "tag1");
    }

    #[tokio::test]
    async fn test_update_clears_cache() {
        let mut repository = MockTagRepository::new();
        repository.expect_save().times(1).returning(Ok);

        let mut cache = MockTagCache::new();
        cache.expect_clear_cache().times(1).returning(|| Ok(()));

        let service = create_service(repository, cache);

        let updated = service.update(Tag::with_id(1, "updatedTag")).await.unwrap();
        assert_eq!(updated.name(), "updatedTag");
    }

    #[tokio::test]
    async fn test_delete_clears_cache() {
        let mut repository = MockTagRepository::new();
        repository
            .expect_delete_by_id()
            .with(eq(1))
            .times(1)
            .returning(|_| Ok(()));

        let mut cache = MockTagCache::new();
        cache.expect_clear_cache().times(1).returning(|| Ok(()));

        let service = create_service(repository, cache);

        service.delete(1).await.unwrap();
    }

    #[tokio::test]
    async fn test_failed_save_leaves_cache_untouched() {
        let mut repository = MockTagRepository::new();
        repository
            .expect_save()
            .returning(|_| Err(DomainError::storage("down")));

        let mut cache = MockTagCache::new();
        cache.expect_clear_cache().never();

        let service = create_service(repository, cache);

        assert!(service.create(Tag::new("tag1")).await.is_err());
    }

    #[tokio::test]
    async fn test_list_reflects_mutations() {
        let service = TagService::new(
            Arc::new(InMemoryTagRepository::new()),
            Arc::new(MokaTagCache::new(&CacheSettings::default())),
        );

        assert!(service.find_all().await.unwrap().is_empty());

        let created = service.create(Tag::new("work")).await.unwrap();
        assert_eq!(service.find_all().await.unwrap().len(), 1);

        let id = created.id().unwrap();
        service.update(Tag::with_id(id, "office")).await.unwrap();
        assert_eq!(service.find_by_id(id).await.unwrap().unwrap().name(), "office");

        service.delete(id).await.unwrap();
        assert!(service.find_all().await.unwrap().is_empty());
        assert!(service.find_by_id(id).await.unwrap().is_none());
    }

    #[tokio::test]
    async fn test_update_unknown_id_is_not_found() {
        let mut repository = MockTagRepository::new();
        repository
            .expect_save()
            .times(1)
            .returning(|t| Err(tag_not_found(t.id())));

        let mut cache = MockTagCache::new();
        cache.expect_clear_cache().never();

        let service = create_service(repository, cache);

        let result = service.update(Tag::with_id(99, "ghost")).await;
        assert!(matches!(result, Err(DomainError::NotFound { .. })));
    }

    #[tokio::test]
    async fn test_update_unknown_id_creates_nothing() {
        let service = TagService::new(
            Arc::new(InMemoryTagRepository::new()),
            Arc::new(MokaTagCache::new(&CacheSettings::default())),
        );

        for id in [5, i64::MAX] {
            let result = service.update(Tag::with_id(id, "ghost")).await;
            assert!(matches!(result, Err(DomainError::NotFound { .. })));
        }

        assert!(service.find_all().await.unwrap().is_empty());

        let created = service.create(Tag::new("work")).await.unwrap();
        assert_eq!(created.id(), Some(1));
    }
}
