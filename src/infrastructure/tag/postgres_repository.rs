//! PostgreSQL tag repository implementation

use async_trait::async_trait;
use sqlx::postgres::PgRow;
use sqlx::{PgPool, Row};

use crate::domain::tag::{tag_not_found, Tag, TagId, TagRepository};
use crate::domain::DomainError;

/// PostgreSQL implementation of TagRepository
#[derive(Debug, Clone)]
pub struct PostgresTagRepository {
    pool: PgPool,
}

impl PostgresTagRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl TagRepository for PostgresTagRepository {
    async fn save(&self, mut tag: Tag) -> Result<Tag, DomainError> {
        let result = match tag.id() {
            Some(id) => {
                sqlx::query_scalar::<_, i64>("UPDATE tags SET name = $2 WHERE id = $1 RETURNING id")
                    .bind(id)
                    .bind(tag.name())
                    .fetch_optional(&self.pool)
                    .await
            }
            None => {
                sqlx::query_scalar::<_, i64>("INSERT INTO tags (name) VALUES ($1) RETURNING id")
                    .bind(tag.name())
                    .fetch_optional(&self.pool)
                    .await
            }
        };

        let id = result
            .map_err(|e| {
                let msg = e.to_string();

                if msg.contains("duplicate key") || msg.contains("unique constraint") {
                    DomainError::validation(format!("Tag '{}' already exists", tag.name()))
                } else {
                    DomainError::storage(format!("Failed to save tag: {}", e))
                }
            })?
            .ok_or_else(|| tag_not_found(tag.id()))?;

        tag.set_id(id);
        Ok(tag)
    }

    async fn find_by_id(&self, id: TagId) -> Result<Option<Tag>, DomainError> {
        let row = sqlx::query("SELECT id, name FROM tags WHERE id = $1")
            .bind(id)
            .fetch_optional(&self.pool)
            .await
            .map_err(|e| DomainError::storage(format!("Failed to get tag: {}", e)))?;

        row.as_ref().map(row_to_tag).transpose()
    }

    async fn find_all(&self) -> Result<Vec<Tag>, DomainError> {
        let rows = sqlx::query("SELECT id, name FROM tags ORDER BY id")
            .fetch_all(&self.pool)
            .await
            .map_err(|e| DomainError::storage(format!("Failed to list tags: {}", e)))?;

        rows.iter().map(row_to_tag).collect()
    }

    async fn delete_by_id(&self, id: TagId) -> Result<(), DomainError> {
        sqlx::query("DELETE FROM tags WHERE id = $1")
            .bind(id)
            .execute(&self.pool)
            .await
            .map_err(|e| DomainError::storage(format!("Failed to delete tag: {}", e)))?;

        Ok(())
    }
}

fn row_to_tag(row: &PgRow) -> Result<Tag, DomainError> {
    let id: i64 = row
        .try_get("id")
        .map_err(|e| DomainError::storage(format!("Failed to read tag id: {}", e)))?;
    let name: String = row
        .try_get("name")
        .map_err(|e| DomainError::storage(format!("Failed to read tag name: {}", e)))?;

    Ok(Tag::with_id(id, name))
}
