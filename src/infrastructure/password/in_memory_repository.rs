//! In-memory password repository implementation

use std::collections::BTreeMap;
use std::sync::atomic::{AtomicI64, Ordering};
use std::sync::Arc;

use async_trait::async_trait;
use tokio::sync::RwLock;

use crate::domain::password::{Password, PasswordId, PasswordRepository};
use crate::domain::DomainError;

/// In-memory implementation of PasswordRepository
#[derive(Debug)]
pub struct InMemoryPasswordRepository {
    passwords: Arc<RwLock<BTreeMap<PasswordId, Password>>>,
    next_id: AtomicI64,
}

impl InMemoryPasswordRepository {
    /// Create a new empty repository
    pub fn new() -> Self {
        Self {
            passwords: Arc::new(RwLock::new(BTreeMap::new())),
            next_id: AtomicI64::new(1),
        }
    }
}

impl Default for InMemoryPasswordRepository {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl PasswordRepository for InMemoryPasswordRepository {
    async fn save(&self, mut password: Password) -> Result<Password, DomainError> {
        let mut passwords = self.passwords.write().await;

        let id = match password.id() {
            Some(id) => {
                // Keep the sequence ahead of explicitly assigned ids
                self.next_id.fetch_max(id.saturating_add(1), Ordering::SeqCst);

                if let Some(existing) = passwords.get(&id) {
                    password.set_created_at(existing.created_at());
                }
                id
            }
            None => {
                let id = self.next_id.fetch_add(1, Ordering::SeqCst);
                password.set_id(id);
                id
            }
        };

        passwords.insert(id, password.clone());
        Ok(password)
    }

    async fn find_by_id(&self, id: PasswordId) -> Result<Option<Password>, DomainError> {
        let passwords = self.passwords.read().await;
        Ok(passwords.get(&id).cloned())
    }

    async fn find_all(&self) -> Result<Vec<Password>, DomainError> {
        let passwords = self.passwords.read().await;
        Ok(passwords.values().cloned().collect())
    }

    async fn find_passwords_by_tag_name(&self, name: &str) -> Result<Vec<Password>, DomainError> {
        let passwords = self.passwords.read().await;

        Ok(passwords
            .values()
            .filter(|p| p.has_tag(name))
            .cloned()
            .collect())
    }

    async fn exists_by_id(&self, id: PasswordId) -> Result<bool, DomainError> {
        let passwords = self.passwords.read().await;
        Ok(passwords.contains_key(&id))
    }

    async fn delete_by_id(&self, id: PasswordId) -> Result<(), DomainError> {
        let mut passwords = self.passwords.write().await;
        passwords.remove(&id);
        Ok(())
    }
}
