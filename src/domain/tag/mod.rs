//! Tag domain

mod entity;
mod repository;

pub use entity::{Tag, TagId};
pub use repository::{tag_not_found, TagCache, TagRepository};

#[cfg(test)]
pub use repository::{MockTagCache, MockTagRepository};
