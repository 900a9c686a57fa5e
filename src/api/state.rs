//! Application state for shared services

use std::sync::Arc;

use crate::domain::password::{
    Password, PasswordCache, PasswordGenerationRequest, PasswordId, PasswordRepository,
};
use crate::domain::tag::{Tag, TagCache, TagId, TagRepository};
use crate::domain::DomainError;
use crate::infrastructure::password::{PasswordHasher, PasswordService};
use crate::infrastructure::tag::TagService;

/// Application state containing shared services using dynamic dispatch
#[derive(Clone)]
pub struct AppState {
    pub password_service: Arc<dyn PasswordServiceTrait>,
    pub tag_service: Arc<dyn TagServiceTrait>,
}

impl AppState {
    pub fn new(
        password_service: Arc<dyn PasswordServiceTrait>,
        tag_service: Arc<dyn TagServiceTrait>,
    ) -> Self {
        Self {
            password_service,
            tag_service,
        }
    }
}

/// Trait for password service operations
#[async_trait::async_trait]
pub trait PasswordServiceTrait: Send + Sync {
    async fn generate(
        &self,
        length: i32,
        complexity: i32,
        owner: &str,
    ) -> Result<String, DomainError>;
    async fn generate_bulk(
        &self,
        requests: &[Option<PasswordGenerationRequest>],
    ) -> Result<Vec<String>, DomainError>;
    async fn get(&self, id: PasswordId) -> Result<Option<Password>, DomainError>;
    async fn list(&self) -> Result<Vec<Password>, DomainError>;
    async fn list_by_tag(&self, name: &str) -> Result<Vec<Password>, DomainError>;
    async fn create(&self, password: Password) -> Result<Password, DomainError>;
    async fn update(&self, password: Password) -> Result<Password, DomainError>;
    async fn delete(&self, id: PasswordId) -> Result<(), DomainError>;
}

/// Trait for tag service operations
#[async_trait::async_trait]
pub trait TagServiceTrait: Send + Sync {
    async fn get(&self, id: TagId) -> Result<Option<Tag>, DomainError>;
    async fn list(&self) -> Result<Vec<Tag>, DomainError>;
    async fn create(&self, tag: Tag) -> Result<Tag, DomainError>;
    async fn update(&self, tag: Tag) -> Result<Tag, DomainError>;
    async fn delete(&self, id: TagId) -> Result<(), DomainError>;
}

#[async_trait::async_trait]
impl<R, C, H> PasswordServiceTrait for PasswordService<R, C, H>
where
    R: PasswordRepository + 'static,
    C: PasswordCache + 'static,
    H: PasswordHasher + 'static,
{
    async fn generate(
        &self,
        length: i32,
        complexity: i32,
        owner: &str,
    ) -> Result<String, DomainError> {
        PasswordService::generate_password(self, length, complexity, owner).await
    }

    async fn generate_bulk(
        &self,
        requests: &[Option<PasswordGenerationRequest>],
    ) -> Result<Vec<String>, DomainError> {
        PasswordService::generate_passwords_bulk(self, requests).await
    }

    async fn get(&self, id: PasswordId) -> Result<Option<Password>, DomainError> {
        PasswordService::find_by_id(self, id).await
    }

    async fn list(&self) -> Result<Vec<Password>, DomainError> {
        PasswordService::find_all(self).await
    }

    async fn list_by_tag(&self, name: &str) -> Result<Vec<Password>, DomainError> {
        PasswordService::find_passwords_by_tag_name(self, name).await
    }

    async fn create(&self, password: Password) -> Result<Password, DomainError> {
        PasswordService::create(self, password).await
    }

    async fn update(&self, password: Password) -> Result<Password, DomainError> {
        PasswordService::update(self, password).await
    }

    async fn delete(&self, id: PasswordId) -> Result<(), DomainError> {
        PasswordService::delete(self, id).await
    }
}

#[async_trait::async_trait]
impl<R: TagRepository + 'static, C: TagCache + 'static> TagServiceTrait for TagService<R, C> {
    async fn get(&self, id: TagId) -> Result<Option<Tag>, DomainError> {
        TagService::find_by_id(self, id).await
    }

    async fn list(&self) -> Result<Vec<Tag>, DomainError> {
        TagService::find_all(self).await
    }

    async fn create(&self, tag: Tag) -> Result<Tag, DomainError> {
        TagService::create(self, tag).await
    }

    async fn update(&self, tag: Tag) -> Result<Tag, DomainError> {
        TagService::update(self, tag).await
    }

    async fn delete(&self, id: TagId) -> Result<(), DomainError> {
        TagService::delete(self, id).await
    }
}
