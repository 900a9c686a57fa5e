//! Domain layer - Core business logic and entities

pub mod error;
pub mod password;
pub mod tag;

pub use error::DomainError;
pub use password::{
    Complexity, Password, PasswordCache, PasswordGenerationRequest, PasswordId,
    PasswordRepository,
};
pub use tag::{Tag, TagCache, TagId, TagRepository};
