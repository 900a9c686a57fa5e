//! Tag persistence and cache contracts

use async_trait::async_trait;

#[cfg(test)]
use mockall::automock;

use super::entity::{Tag, TagId};
use crate::domain::DomainError;

/// Error for a tag id with no stored record
pub fn tag_not_found(id: Option<TagId>) -> DomainError {
    match id {
        Some(id) => DomainError::not_found(format!("Tag {} not found", id)),
        None => DomainError::not_found("Tag not found"),
    }
}

/// System-of-record storage for tags
#[cfg_attr(test, automock)]
#[async_trait]
pub trait TagRepository: Send + Sync {
    /// Inserts the tag when it has no id, otherwise renames the stored tag;
    /// an unknown id is `NotFound` and nothing is written
    async fn save(&self, tag: Tag) -> Result<Tag, DomainError>;

    async fn find_by_id(&self, id: TagId) -> Result<Option<Tag>, DomainError>;

    async fn find_all(&self) -> Result<Vec<Tag>, DomainError>;

    /// Deleting an unknown id is not an error
    async fn delete_by_id(&self, id: TagId) -> Result<(), DomainError>;
}

/// Read-through cache for tag lookups
#[cfg_attr(test, automock)]
#[async_trait]
pub trait TagCache: Send + Sync {
    async fn get_all_tags(&self) -> Result<Option<Vec<Tag>>, DomainError>;

    async fn put_all_tags(&self, tags: Vec<Tag>) -> Result<(), DomainError>;

    async fn get_tag_by_id(&self, id: TagId) -> Result<Option<Tag>, DomainError>;

    async fn put_tag_by_id(&self, id: TagId, tag: Tag) -> Result<(), DomainError>;

    /// Drops every tag entry
    async fn clear_cache(&self) -> Result<(), DomainError>;
}
