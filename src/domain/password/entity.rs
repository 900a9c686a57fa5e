//! Password entity and generation request

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::domain::tag::Tag;

/// Identifier assigned by the durable store
pub type PasswordId = i64;

/// A stored password record
///
/// The `password` value holds plaintext only between construction and the
/// service hashing it; anything read back from a store is a one-way hash.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Password {
    id: Option<PasswordId>,
    password: String,
    owner: String,
    #[serde(default)]
    tags: Vec<Tag>,
    created_at: DateTime<Utc>,
}

impl Password {
    /// Create a password that has not been persisted yet
    pub fn new(password: impl Into<String>, owner: impl Into<String>) -> Self {
        Self {
            id: None,
            password: password.into(),
            owner: owner.into(),
            tags: Vec::new(),
            created_at: Utc::now(),
        }
    }

    /// Rebuild a persisted record
    pub fn restore(
        id: PasswordId,
        password: impl Into<String>,
        owner: impl Into<String>,
        tags: Vec<Tag>,
        created_at: DateTime<Utc>,
    ) -> Self {
        Self {
            id: Some(id),
            password: password.into(),
            owner: owner.into(),
            tags,
            created_at,
        }
    }

    /// Builder-style id assignment
    pub fn with_id(mut self, id: PasswordId) -> Self {
        self.id = Some(id);
        self
    }

    /// Builder-style tag assignment
    pub fn with_tags(mut self, tags: Vec<Tag>) -> Self {
        self.tags = tags;
        self
    }

    // Getters

    pub fn id(&self) -> Option<PasswordId> {
        self.id
    }

    pub fn password(&self) -> &str {
        &self.password
    }

    pub fn owner(&self) -> &str {
        &self.owner
    }

    pub fn tags(&self) -> &[Tag] {
        &self.tags
    }

    pub fn created_at(&self) -> DateTime<Utc> {
        self.created_at
    }

    /// Whether any attached tag carries the given name
    pub fn has_tag(&self, name: &str) -> bool {
        self.tags.iter().any(|t| t.name() == name)
    }

    // Mutators

    pub fn set_id(&mut self, id: PasswordId) {
        self.id = Some(id);
    }

    pub fn set_password(&mut self, password: impl Into<String>) {
        self.password = password.into();
    }

    pub fn set_tags(&mut self, tags: Vec<Tag>) {
        self.tags = tags;
    }

    pub fn set_created_at(&mut self, created_at: DateTime<Utc>) {
        self.created_at = created_at;
    }
}

/// Parameters of a single generation request
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PasswordGenerationRequest {
    pub length: i32,
    pub complexity: i32,
    pub owner: String,
}

impl PasswordGenerationRequest {
    pub fn new(length: i32, complexity: i32, owner: impl Into<String>) -> Self {
        Self {
            length,
            complexity,
            owner: owner.into(),
        }
    }
}
