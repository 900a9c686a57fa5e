//! Password infrastructure: hashing, stores and the password service

mod hasher;
mod in_memory_repository;
mod postgres_repository;
mod service;

pub use hasher::{Argon2Hasher, PasswordHasher};
pub use in_memory_repository::InMemoryPasswordRepository;
pub use postgres_repository::PostgresPasswordRepository;
pub use service::PasswordService;

#[cfg(test)]
pub use hasher::MockPasswordHasher;
