//! In-memory tag repository implementation

use std::collections::BTreeMap;
use std::sync::atomic::{AtomicI64, Ordering};
use std::sync::Arc;

use async_trait::async_trait;
use tokio::sync::RwLock;

use crate::domain::tag::{tag_not_found, Tag, TagId, TagRepository};
use crate::domain::DomainError;

/// In-memory implementation of TagRepository
#[derive(Debug)]
pub struct InMemoryTagRepository {
    tags: Arc<RwLock<BTreeMap<TagId, Tag>>>,
    next_id: AtomicI64,
}

impl InMemoryTagRepository {
    pub fn new() -> Self {
        Self {
            tags: Arc::new(RwLock::new(BTreeMap::new())),
            next_id: AtomicI64::new(1),
        }
    }

    /// Create a repository with initial tags, assigning ids where missing
    pub fn with_tags(tags: Vec<Tag>) -> Self {
        let next_id = AtomicI64::new(1);
        let mut map = BTreeMap::new();

        for mut tag in tags {
            let id = match tag.id() {
                Some(id) => id,
                None => next_id.fetch_add(1, Ordering::SeqCst),
            };
            next_id.fetch_max(id.saturating_add(1), Ordering::SeqCst);
            tag.set_id(id);
            map.insert(id, tag);
        }

        Self {
            tags: Arc::new(RwLock::new(map)),
            next_id,
        }
    }
}

impl Default for InMemoryTagRepository {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl TagRepository for InMemoryTagRepository {
    async fn save(&self, mut tag: Tag) -> Result<Tag, DomainError> {
        let mut tags = self.tags.write().await;

        let id = match tag.id() {
            Some(id) if tags.contains_key(&id) => id,
            Some(id) => return Err(tag_not_found(Some(id))),
            None => {
                let id = self.next_id.fetch_add(1, Ordering::SeqCst);
                tag.set_id(id);
                id
            }
        };

        tags.insert(id, tag.clone());
        Ok(tag)
    }

    async fn find_by_id(&self, id: TagId) -> Result<Option<Tag>, DomainError> {
        let tags = self.tags.read().await;
        Ok(tags.get(&id).cloned())
    }

    async fn find_all(&self) -> Result<Vec<Tag>, DomainError> {
        let tags = self.tags.read().await;
        Ok(tags.values().cloned().collect())
    }

    async fn delete_by_id(&self, id: TagId) -> Result<(), DomainError> {
        let mut tags = self.tags.write().await;
        tags.remove(&id);
        Ok(())
    }
}
