//! PostgreSQL password repository implementation

use std::collections::HashMap;

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use sqlx::postgres::PgRow;
use sqlx::{PgPool, Postgres, Row, Transaction};

use crate::domain::password::{Password, PasswordId, PasswordRepository};
use crate::domain::tag::Tag;
use crate::domain::DomainError;

/// PostgreSQL implementation of PasswordRepository
#[derive(Debug, Clone)]
pub struct PostgresPasswordRepository {
    pool: PgPool,
}

impl PostgresPasswordRepository {
    /// Create a new repository with the given connection pool
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    /// Load the tags of every given password in one query
    async fn load_tags(
        &self,
        ids: &[PasswordId],
    ) -> Result<HashMap<PasswordId, Vec<Tag>>, DomainError> {
        if ids.is_empty() {
            return Ok(HashMap::new());
        }

        let rows = sqlx::query(
            r#"
            SELECT pt.password_id, t.id, t.name
            FROM password_tags pt
            JOIN tags t ON t.id = pt.tag_id
            WHERE pt.password_id = ANY($1)
            ORDER BY t.id
            "#,
        )
        .bind(ids)
        .fetch_all(&self.pool)
        .await
        .map_err(|e| DomainError::storage(format!("Failed to load password tags: {}", e)))?;

        let mut tags: HashMap<PasswordId, Vec<Tag>> = HashMap::new();

        for row in rows {
            let password_id: i64 = get(&row, "password_id")?;
            let tag_id: i64 = get(&row, "id")?;
            let name: String = get(&row, "name")?;
            tags.entry(password_id)
                .or_default()
                .push(Tag::with_id(tag_id, name));
        }

        Ok(tags)
    }

    /// Attach tags to freshly fetched rows, preserving row order
    async fn hydrate(&self, rows: Vec<PgRow>) -> Result<Vec<Password>, DomainError> {
        let mut passwords = Vec::with_capacity(rows.len());

        for row in &rows {
            passwords.push(row_to_password(row)?);
        }

        let ids: Vec<PasswordId> = passwords.iter().filter_map(Password::id).collect();
        let mut tags = self.load_tags(&ids).await?;

        Ok(passwords
            .into_iter()
            .map(|p| {
                let attached = p.id().and_then(|id| tags.remove(&id)).unwrap_or_default();
                p.with_tags(attached)
            })
            .collect())
    }
}

#[async_trait]
impl PasswordRepository for PostgresPasswordRepository {
    async fn save(&self, mut password: Password) -> Result<Password, DomainError> {
        let mut tx = self
            .pool
            .begin()
            .await
            .map_err(|e| DomainError::storage(format!("Failed to begin transaction: {}", e)))?;

        let (id, created_at) = match password.id() {
            Some(id) => sqlx::query_as::<_, (i64, DateTime<Utc>)>(
                r#"
                INSERT INTO passwords (id, password, owner, created_at)
                VALUES ($1, $2, $3, $4)
                ON CONFLICT (id) DO UPDATE
                SET password = EXCLUDED.password, owner = EXCLUDED.owner
                RETURNING id, created_at
                "#,
            )
            .bind(id)
            .bind(password.password())
            .bind(password.owner())
            .bind(password.created_at())
            .fetch_one(&mut *tx)
            .await,
            None => sqlx::query_as::<_, (i64, DateTime<Utc>)>(
                r#"
                INSERT INTO passwords (password, owner, created_at)
                VALUES ($1, $2, $3)
                RETURNING id, created_at
                "#,
            )
            .bind(password.password())
            .bind(password.owner())
            .bind(password.created_at())
            .fetch_one(&mut *tx)
            .await,
        }
        .map_err(|e| DomainError::storage(format!("Failed to save password: {}", e)))?;

        sqlx::query("DELETE FROM password_tags WHERE password_id = $1")
            .bind(id)
            .execute(&mut *tx)
            .await
            .map_err(|e| DomainError::storage(format!("Failed to reset password tags: {}", e)))?;

        let mut tags = Vec::with_capacity(password.tags().len());

        for tag in password.tags() {
            let tag_id = resolve_tag(&mut tx, tag).await?;

            sqlx::query(
                r#"
                INSERT INTO password_tags (password_id, tag_id)
                VALUES ($1, $2)
                ON CONFLICT DO NOTHING
                "#,
            )
            .bind(id)
            .bind(tag_id)
            .execute(&mut *tx)
            .await
            .map_err(|e| DomainError::storage(format!("Failed to link tag: {}", e)))?;

            tags.push(Tag::with_id(tag_id, tag.name()));
        }

        tx.commit()
            .await
            .map_err(|e| DomainError::storage(format!("Failed to commit password: {}", e)))?;

        password.set_id(id);
        password.set_created_at(created_at);
        password.set_tags(tags);
        Ok(password)
    }

    async fn find_by_id(&self, id: PasswordId) -> Result<Option<Password>, DomainError> {
        let row = sqlx::query(
            r#"
            SELECT id, password, owner, created_at
            FROM passwords
            WHERE id = $1
            "#,
        )
        .bind(id)
        .fetch_optional(&self.pool)
        .await
        .map_err(|e| DomainError::storage(format!("Failed to get password: {}", e)))?;

        match row {
            Some(row) => Ok(self.hydrate(vec![row]).await?.pop()),
            None => Ok(None),
        }
    }

    async fn find_all(&self) -> Result<Vec<Password>, DomainError> {
        let rows = sqlx::query(
            r#"
            SELECT id, password, owner, created_at
            FROM passwords
            ORDER BY id
            "#,
        )
        .fetch_all(&self.pool)
        .await
        .map_err(|e| DomainError::storage(format!("Failed to list passwords: {}", e)))?;

        self.hydrate(rows).await
    }

    async fn find_passwords_by_tag_name(&self, name: &str) -> Result<Vec<Password>, DomainError> {
        let rows = sqlx::query(
            r#"
            SELECT p.id, p.password, p.owner, p.created_at
            FROM passwords p
            JOIN password_tags pt ON pt.password_id = p.id
            JOIN tags t ON t.id = pt.tag_id
            WHERE t.name = $1
            ORDER BY p.id
            "#,
        )
        .bind(name)
        .fetch_all(&self.pool)
        .await
        .map_err(|e| DomainError::storage(format!("Failed to list passwords by tag: {}", e)))?;

        self.hydrate(rows).await
    }

    async fn exists_by_id(&self, id: PasswordId) -> Result<bool, DomainError> {
        sqlx::query_scalar("SELECT EXISTS(SELECT 1 FROM passwords WHERE id = $1)")
            .bind(id)
            .fetch_one(&self.pool)
            .await
            .map_err(|e| DomainError::storage(format!("Failed to check password: {}", e)))
    }

    async fn delete_by_id(&self, id: PasswordId) -> Result<(), DomainError> {
        sqlx::query("DELETE FROM passwords WHERE id = $1")
            .bind(id)
            .execute(&self.pool)
            .await
            .map_err(|e| DomainError::storage(format!("Failed to delete password: {}", e)))?;

        Ok(())
    }
}

/// Find a tag by id, else by name, creating it when unknown
async fn resolve_tag(tx: &mut Transaction<'_, Postgres>, tag: &Tag) -> Result<i64, DomainError> {
    if let Some(id) = tag.id() {
        let exists: bool = sqlx::query_scalar("SELECT EXISTS(SELECT 1 FROM tags WHERE id = $1)")
            .bind(id)
            .fetch_one(&mut **tx)
            .await
            .map_err(|e| DomainError::storage(format!("Failed to check tag: {}", e)))?;

        if exists {
            return Ok(id);
        }
    }

    sqlx::query_scalar(
        r#"
        INSERT INTO tags (name) VALUES ($1)
        ON CONFLICT (name) DO UPDATE SET name = EXCLUDED.name
        RETURNING id
        "#,
    )
    .bind(tag.name())
    .fetch_one(&mut **tx)
    .await
    .map_err(|e| DomainError::storage(format!("Failed to resolve tag '{}': {}", tag.name(), e)))
}

fn get<'r, T>(row: &'r PgRow, column: &str) -> Result<T, DomainError>
where
    T: sqlx::Decode<'r, Postgres> + sqlx::Type<Postgres>,
{
    row.try_get(column)
        .map_err(|e| DomainError::storage(format!("Failed to read column '{}': {}", column, e)))
}

fn row_to_password(row: &PgRow) -> Result<Password, DomainError> {
    let id: i64 = get(row, "id")?;
    let password: String = get(row, "password")?;
    let owner: String = get(row, "owner")?;
    let created_at: DateTime<Utc> = get(row, "created_at")?;

    Ok(Password::restore(id, password, owner, Vec::new(), created_at))
}
