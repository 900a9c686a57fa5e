//! Password domain
//!
//! Entities, the random generator, generation cache keys and the storage and
//! cache contracts consumed by the password service.

mod entity;
pub mod generator;
mod key;
mod repository;

pub use entity::{Password, PasswordGenerationRequest, PasswordId};
pub use generator::Complexity;
pub use key::{batch_key, generation_key};
pub use repository::{PasswordCache, PasswordRepository};

#[cfg(test)]
pub use repository::{MockPasswordCache, MockPasswordRepository};
