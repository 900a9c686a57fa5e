//! Password service: generation, cache-aside reads and hashed persistence

use std::sync::Arc;

use tracing::{debug, info};

use crate::domain::password::{
    batch_key, generation_key, generator, Password, PasswordCache, PasswordGenerationRequest,
    PasswordId, PasswordRepository,
};
use crate::domain::DomainError;

use super::hasher::PasswordHasher;

const PASSWORD_NOT_FOUND: &str = "Password not found";

/// Orchestrates password generation and CRUD against store and cache
pub struct PasswordService<R: PasswordRepository, C: PasswordCache, H: PasswordHasher> {
    repository: Arc<R>,
    cache: Arc<C>,
    hasher: Arc<H>,
}

impl<R: PasswordRepository, C: PasswordCache, H: PasswordHasher> PasswordService<R, C, H> {
    pub fn new(repository: Arc<R>, cache: Arc<C>, hasher: Arc<H>) -> Self {
        Self {
            repository,
            cache,
            hasher,
        }
    }

    /// Generate a password, reusing the cached value for identical parameters
    ///
    /// A cache hit is returned verbatim without re-validating the parameters.
    pub async fn generate_password(
        &self,
        length: i32,
        complexity: i32,
        owner: &str,
    ) -> Result<String, DomainError> {
        let key = generation_key(length, complexity, owner);

        if let Some(cached) = self.cache.get_generated_password(&key).await? {
            debug!(key = %key, "Generated password cache hit");
            return Ok(cached);
        }

        let password = generator::generate(length, complexity)?;
        self.persist_new(&password, owner).await?;
        self.cache
            .put_generated_password(&key, password.clone())
            .await?;

        info!(owner = %owner, length, complexity, "Generated password");
        Ok(password)
    }

    /// Generate one password per request, in input order
    ///
    /// Missing (`None`) entries are skipped silently, so the output may be
    /// shorter than the input.
    pub async fn generate_passwords_bulk(
        &self,
        requests: &[Option<PasswordGenerationRequest>],
    ) -> Result<Vec<String>, DomainError> {
        let present: Vec<&PasswordGenerationRequest> = requests.iter().flatten().collect();

        if present.is_empty() {
            return Ok(Vec::new());
        }

        for request in &present {
            generator::validate(request.length, request.complexity)?;
        }

        let key = batch_key(present.iter().copied());

        if let Some(cached) = self.cache.get_bulk_passwords(&key).await? {
            debug!(key = %key, "Bulk passwords cache hit");
            return Ok(cached);
        }

        let mut passwords = Vec::with_capacity(present.len());

        for request in present {
            passwords.push(
                self.generate_password(request.length, request.complexity, &request.owner)
                    .await?,
            );
        }

        self.cache.put_bulk_passwords(&key, passwords.clone()).await?;

        Ok(passwords)
    }

    /// Hash and persist a new password record
    pub async fn create(&self, mut password: Password) -> Result<Password, DomainError> {
        let digest = self.hasher.hash(password.password())?;
        password.set_password(digest);

        let saved = self.repository.save(password).await?;
        self.cache.invalidate_collections().await?;

        info!(id = ?saved.id(), owner = %saved.owner(), "Created password");
        Ok(saved)
    }

    /// Re-hash and overwrite an existing record
    pub async fn update(&self, mut password: Password) -> Result<Password, DomainError> {
        let id = password
            .id()
            .ok_or_else(|| DomainError::invalid_argument(PASSWORD_NOT_FOUND))?;

        if !self.repository.exists_by_id(id).await? {
            return Err(DomainError::invalid_argument(PASSWORD_NOT_FOUND));
        }

        let digest = self.hasher.hash(password.password())?;
        password.set_password(digest);

        let saved = self.repository.save(password).await?;
        self.cache.evict_password(id).await?;
        self.cache.invalidate_collections().await?;

        info!(id, "Updated password");
        Ok(saved)
    }

    /// Delete by id; unknown ids are not an error
    pub async fn delete(&self, id: PasswordId) -> Result<(), DomainError> {
        self.repository.delete_by_id(id).await?;
        self.cache.evict_password(id).await?;
        self.cache.invalidate_collections().await?;

        info!(id, "Deleted password");
        Ok(())
    }

    pub async fn find_by_id(&self, id: PasswordId) -> Result<Option<Password>, DomainError> {
        if let Some(cached) = self.cache.get_password_by_id(id).await? {
            debug!(id, "Password cache hit");
            return Ok(Some(cached));
        }

        let found = self.repository.find_by_id(id).await?;

        if let Some(password) = &found {
            self.cache.put_password_by_id(id, password.clone()).await?;
        }

        Ok(found)
    }

    pub async fn find_all(&self) -> Result<Vec<Password>, DomainError> {
        if let Some(cached) = self.cache.get_all_passwords().await? {
            debug!(count = cached.len(), "Password list cache hit");
            return Ok(cached);
        }

        let passwords = self.repository.find_all().await?;
        self.cache.put_all_passwords(passwords.clone()).await?;

        Ok(passwords)
    }

    pub async fn find_passwords_by_tag_name(
        &self,
        name: &str,
    ) -> Result<Vec<Password>, DomainError> {
        if let Some(cached) = self.cache.get_passwords_by_tag(name).await? {
            debug!(tag = %name, "Passwords by tag cache hit");
            return Ok(cached);
        }

        let passwords = self.repository.find_passwords_by_tag_name(name).await?;
        self.cache
            .put_passwords_by_tag(name, passwords.clone())
            .await?;

        Ok(passwords)
    }

    /// Check a plaintext candidate against a stored record
    pub fn matches(&self, plaintext: &str, password: &Password) -> bool {
        self.hasher.matches(plaintext, password.password())
    }

    async fn persist_new(&self, plaintext: &str, owner: &str) -> Result<Password, DomainError> {
        let digest = self.hasher.hash(plaintext)?;
        let saved = self.repository.save(Password::new(digest, owner)).await?;
        self.cache.invalidate_collections().await?;

        Ok(saved)
    }
}
