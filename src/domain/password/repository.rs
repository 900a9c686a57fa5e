//! Password persistence and cache contracts

use async_trait::async_trait;

#[cfg(test)]
use mockall::automock;

use super::entity::{Password, PasswordId};
use crate::domain::DomainError;

/// System-of-record storage for passwords
#[cfg_attr(test, automock)]
#[async_trait]
pub trait PasswordRepository: Send + Sync {
    /// Inserts the password when it has no id, otherwise overwrites by id
    async fn save(&self, password: Password) -> Result<Password, DomainError>;

    async fn find_by_id(&self, id: PasswordId) -> Result<Option<Password>, DomainError>;

    async fn find_all(&self) -> Result<Vec<Password>, DomainError>;

    /// Passwords carrying a tag with the given name
    async fn find_passwords_by_tag_name(&self, name: &str) -> Result<Vec<Password>, DomainError>;

    async fn exists_by_id(&self, id: PasswordId) -> Result<bool, DomainError>;

    /// Deleting an unknown id is not an error
    async fn delete_by_id(&self, id: PasswordId) -> Result<(), DomainError>;
}

/// Cache namespaces used by the password service
///
/// Generation entries (single and batch) are independent from entity
/// snapshots; entity mutations never touch them.
#[cfg_attr(test, automock)]
#[async_trait]
pub trait PasswordCache: Send + Sync {
    async fn get_generated_password(&self, key: &str) -> Result<Option<String>, DomainError>;

    async fn put_generated_password(&self, key: &str, value: String) -> Result<(), DomainError>;

    async fn get_bulk_passwords(&self, key: &str) -> Result<Option<Vec<String>>, DomainError>;

    async fn put_bulk_passwords(&self, key: &str, value: Vec<String>) -> Result<(), DomainError>;

    async fn get_password_by_id(&self, id: PasswordId) -> Result<Option<Password>, DomainError>;

    async fn put_password_by_id(&self, id: PasswordId, password: Password)
        -> Result<(), DomainError>;

    async fn get_all_passwords(&self) -> Result<Option<Vec<Password>>, DomainError>;

    async fn put_all_passwords(&self, passwords: Vec<Password>) -> Result<(), DomainError>;

    async fn get_passwords_by_tag(&self, name: &str) -> Result<Option<Vec<Password>>, DomainError>;

    async fn put_passwords_by_tag(
        &self,
        name: &str,
        passwords: Vec<Password>,
    ) -> Result<(), DomainError>;

    /// Drops the by-id snapshot of one password
    async fn evict_password(&self, id: PasswordId) -> Result<(), DomainError>;

    /// Drops the full-collection and every by-tag snapshot
    async fn invalidate_collections(&self) -> Result<(), DomainError>;
}
