//! Password endpoints

use axum::{
    extract::{Path, Query, State},
    http::StatusCode,
};
use serde::{Deserialize, Serialize};
use tracing::debug;
use validator::Validate;

use crate::api::state::AppState;
use crate::api::tags::TagResponse;
use crate::api::types::{ApiError, Json};
use crate::domain::password::{Password, PasswordGenerationRequest, PasswordId};
use crate::domain::tag::Tag;

/// Query of `GET /api/passwords/generate`
#[derive(Debug, Clone, Deserialize)]
pub struct GenerateQuery {
    pub length: i32,
    pub complexity: i32,
    pub owner: String,
}

/// Query of `GET /api/passwords/by-tag`
#[derive(Debug, Clone, Deserialize)]
pub struct ByTagQuery {
    #[serde(rename = "tagName")]
    pub tag_name: String,
}

/// Body of create and update requests; `password` is plaintext
#[derive(Debug, Clone, Deserialize, Validate)]
pub struct PasswordApiRequest {
    #[validate(length(min = 1, message = "password must not be empty"))]
    pub password: String,
    #[validate(length(min = 1, message = "owner must not be empty"))]
    pub owner: String,
    #[serde(default)]
    pub tags: Vec<TagRef>,
}

/// Tag reference inside a password body; resolved by id, else by name
#[derive(Debug, Clone, Deserialize)]
pub struct TagRef {
    #[serde(default)]
    pub id: Option<i64>,
    pub name: String,
}

impl PasswordApiRequest {
    fn into_password(self) -> Password {
        let tags = self
            .tags
            .into_iter()
            .map(|t| match t.id {
                Some(id) => Tag::with_id(id, t.name),
                None => Tag::new(t.name),
            })
            .collect();

        Password::new(self.password, self.owner).with_tags(tags)
    }
}

/// Stored password; `password` is the one-way hash
#[derive(Debug, Clone, Serialize)]
pub struct PasswordResponse {
    pub id: Option<PasswordId>,
    pub password: String,
    pub owner: String,
    pub tags: Vec<TagResponse>,
    pub created_at: String,
}

impl From<&Password> for PasswordResponse {
    fn from(password: &Password) -> Self {
        Self {
            id: password.id(),
            password: password.password().to_string(),
            owner: password.owner().to_string(),
            tags: password.tags().iter().map(TagResponse::from).collect(),
            created_at: password.created_at().to_rfc3339(),
        }
    }
}

fn to_responses(passwords: &[Password]) -> Vec<PasswordResponse> {
    passwords.iter().map(PasswordResponse::from).collect()
}

/// GET /api/passwords/generate
pub async fn generate_password(
    State(state): State<AppState>,
    Query(query): Query<GenerateQuery>,
) -> Result<String, ApiError> {
    debug!(
        length = query.length,
        complexity = query.complexity,
        owner = %query.owner,
        "Generating password"
    );

    let password = state
        .password_service
        .generate(query.length, query.complexity, &query.owner)
        .await?;

    Ok(format!("✅ Пароль для {}: {}", query.owner, password))
}

/// POST /api/passwords/generate-bulk
pub async fn generate_passwords_bulk(
    State(state): State<AppState>,
    Json(requests): Json<Option<Vec<Option<PasswordGenerationRequest>>>>,
) -> Result<Json<Vec<String>>, ApiError> {
    let requests = requests.unwrap_or_default();
    debug!(count = requests.len(), "Generating passwords in bulk");

    let passwords = state.password_service.generate_bulk(&requests).await?;

    Ok(Json(passwords))
}

/// GET /api/passwords
pub async fn list_passwords(
    State(state): State<AppState>,
) -> Result<Json<Vec<PasswordResponse>>, ApiError> {
    debug!("Listing passwords");

    let passwords = state.password_service.list().await?;

    Ok(Json(to_responses(&passwords)))
}

/// GET /api/passwords/by-tag
pub async fn list_passwords_by_tag(
    State(state): State<AppState>,
    Query(query): Query<ByTagQuery>,
) -> Result<Json<Vec<PasswordResponse>>, ApiError> {
    debug!(tag = %query.tag_name, "Listing passwords by tag");

    let passwords = state.password_service.list_by_tag(&query.tag_name).await?;

    Ok(Json(to_responses(&passwords)))
}

/// GET /api/passwords/{id}
pub async fn get_password(
    State(state): State<AppState>,
    Path(id): Path<PasswordId>,
) -> Result<Json<PasswordResponse>, ApiError> {
    debug!(id, "Getting password");

    let password = state
        .password_service
        .get(id)
        .await?
        .ok_or_else(|| ApiError::not_found(format!("Password {} not found", id)))?;

    Ok(Json(PasswordResponse::from(&password)))
}

/// POST /api/passwords
pub async fn create_password(
    State(state): State<AppState>,
    Json(request): Json<PasswordApiRequest>,
) -> Result<Json<PasswordResponse>, ApiError> {
    request.validate()?;
    debug!(owner = %request.owner, "Creating password");

    let created = state
        .password_service
        .create(request.into_password())
        .await?;

    Ok(Json(PasswordResponse::from(&created)))
}

/// PUT /api/passwords/{id}
pub async fn update_password(
    State(state): State<AppState>,
    Path(id): Path<PasswordId>,
    Json(request): Json<PasswordApiRequest>,
) -> Result<Json<PasswordResponse>, ApiError> {
    request.validate()?;
    debug!(id, "Updating password");

    let updated = state
        .password_service
        .update(request.into_password().with_id(id))
        .await?;

    Ok(Json(PasswordResponse::from(&updated)))
}

/// DELETE /api/passwords/{id}
pub async fn delete_password(
    State(state): State<AppState>,
    Path(id): Path<PasswordId>,
) -> Result<StatusCode, ApiError> {
    debug!(id, "Deleting password");

    state.password_service.delete(id).await?;

    Ok(StatusCode::NO_CONTENT)
}
