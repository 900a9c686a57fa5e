//! Infrastructure layer - stores, caches, hashing and services

pub mod cache;
pub mod logging;
pub mod password;
pub mod storage;
pub mod tag;
