//! Password Generator API
//!
//! Generates random passwords from three character sets and stores hashed
//! password records and tags, with:
//! - Read-through caching of generated values and entity lookups
//! - In-memory or PostgreSQL persistence
//! - Argon2 hashing of every stored value

pub mod api;
pub mod cli;
pub mod config;
pub mod domain;
pub mod infrastructure;

pub use config::AppConfig;

use std::sync::Arc;

use api::state::{AppState, PasswordServiceTrait, TagServiceTrait};
use domain::DomainError;
use infrastructure::{
    cache::{CacheSettings, MokaPasswordCache, MokaTagCache},
    password::{
        Argon2Hasher, InMemoryPasswordRepository, PasswordService, PostgresPasswordRepository,
    },
    storage::{run_storage_migrations, StorageType},
    tag::{InMemoryTagRepository, PostgresTagRepository, TagService},
};
use sqlx::postgres::PgPoolOptions;
use tracing::{info, warn};

/// Create the application state with default configuration
pub async fn create_app_state() -> anyhow::Result<AppState> {
    create_app_state_with_config(&AppConfig::default()).await
}

/// Create the application state with custom configuration
pub async fn create_app_state_with_config(config: &AppConfig) -> anyhow::Result<AppState> {
    let storage_backend = StorageType::from_str(&config.storage.backend).unwrap_or_else(|| {
        warn!(
            backend = %config.storage.backend,
            "Unknown storage backend, falling back to memory"
        );
        StorageType::InMemory
    });

    info!(backend = %storage_backend, "Storage backend selected");

    let cache = config.cache.settings();

    match storage_backend {
        StorageType::InMemory => Ok(create_in_memory_app_state(&cache)),
        StorageType::Postgres => create_postgres_app_state(config, &cache).await,
    }
}

/// Build services over in-memory stores
pub fn create_in_memory_app_state(cache: &CacheSettings) -> AppState {
    let password_service: Arc<dyn PasswordServiceTrait> = Arc::new(PasswordService::new(
        Arc::new(InMemoryPasswordRepository::new()),
        Arc::new(MokaPasswordCache::new(cache)),
        Arc::new(Argon2Hasher::new()),
    ));
    let tag_service: Arc<dyn TagServiceTrait> = Arc::new(TagService::new(
        Arc::new(InMemoryTagRepository::new()),
        Arc::new(MokaTagCache::new(cache)),
    ));

    AppState::new(password_service, tag_service)
}

async fn create_postgres_app_state(
    config: &AppConfig,
    cache: &CacheSettings,
) -> anyhow::Result<AppState> {
    let database_url = config
        .storage
        .database_url
        .clone()
        .or_else(|| std::env::var("DATABASE_URL").ok())
        .ok_or_else(|| {
            DomainError::configuration(
                "storage.database_url or DATABASE_URL is required for the postgres backend",
            )
        })?;

    info!("Connecting to PostgreSQL...");
    let pool = PgPoolOptions::new()
        .max_connections(config.storage.max_connections)
        .connect(&database_url)
        .await
        .map_err(|e| anyhow::anyhow!("Failed to connect to PostgreSQL: {}", e))?;
    info!("PostgreSQL connection established");

    run_storage_migrations(&pool).await?;

    let password_service: Arc<dyn PasswordServiceTrait> = Arc::new(PasswordService::new(
        Arc::new(PostgresPasswordRepository::new(pool.clone())),
        Arc::new(MokaPasswordCache::new(cache)),
        Arc::new(Argon2Hasher::new()),
    ));
    let tag_service: Arc<dyn TagServiceTrait> = Arc::new(TagService::new(
        Arc::new(PostgresTagRepository::new(pool)),
        Arc::new(MokaTagCache::new(cache)),
    ));

    Ok(AppState::new(password_service, tag_service))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_default_config_uses_memory() {
        let state = create_app_state().await.unwrap();

        assert!(state.password_service.list().await.unwrap().is_empty());
        assert!(state.tag_service.list().await.unwrap().is_empty());
    }

    #[tokio::test]
    async fn test_unknown_backend_falls_back_to_memory() {
        let mut config = AppConfig::default();
        config.storage.backend = "cassandra".to_string();

        let state = create_app_state_with_config(&config).await.unwrap();
        assert!(state.tag_service.list().await.unwrap().is_empty());
    }
}
