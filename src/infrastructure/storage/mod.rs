//! Storage infrastructure - backend selection and schema migrations

mod migrations;
mod storage_type;

pub use migrations::{run_storage_migrations, storage_migrations, Migration, PostgresMigrator};
pub use storage_type::StorageType;
