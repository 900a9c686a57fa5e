//! Tag entity

use serde::{Deserialize, Serialize};

/// Identifier assigned by the durable store
pub type TagId = i64;

/// A label that can be attached to passwords and used to filter them
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Tag {
    id: Option<TagId>,
    name: String,
}

impl Tag {
    /// Create a tag that has not been persisted yet
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            id: None,
            name: name.into(),
        }
    }

    /// Create a tag with a known identifier
    pub fn with_id(id: TagId, name: impl Into<String>) -> Self {
        Self {
            id: Some(id),
            name: name.into(),
        }
    }

    pub fn id(&self) -> Option<TagId> {
        self.id
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn set_id(&mut self, id: TagId) {
        self.id = Some(id);
    }

    pub fn set_name(&mut self, name: impl Into<String>) {
        self.name = name.into();
    }
}
