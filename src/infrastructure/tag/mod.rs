//! Tag infrastructure

mod in_memory_repository;
mod postgres_repository;
mod service;

pub use in_memory_repository::InMemoryTagRepository;
pub use postgres_repository::PostgresTagRepository;
pub use service::TagService;
