//! Tag endpoints

use axum::{
    extract::{Path, State},
    http::StatusCode,
};
use serde::{Deserialize, Serialize};
use tracing::debug;
use validator::Validate;

use crate::api::state::AppState;
use crate::api::types::{ApiError, Json};
use crate::domain::tag::{Tag, TagId};

/// Body of tag create and update requests
#[derive(Debug, Clone, Deserialize, Validate)]
pub struct TagApiRequest {
    #[validate(length(min = 1, max = 255, message = "name must be 1-255 characters"))]
    pub name: String,
}

#[derive(Debug, Clone, Serialize)]
pub struct TagResponse {
    pub id: Option<TagId>,
    pub name: String,
}

impl From<&Tag> for TagResponse {
    fn from(tag: &Tag) -> Self {
        Self {
            id: tag.id(),
            name: tag.name().to_string(),
        }
    }
}

/// GET /api/tags
pub async fn list_tags(State(state): State<AppState>) -> Result<Json<Vec<TagResponse>>, ApiError> {
    debug!("Listing tags");

    let tags = state.tag_service.list().await?;

    Ok(Json(tags.iter().map(TagResponse::from).collect()))
}

/// GET /api/tags/{id}
pub async fn get_tag(
    State(state): State<AppState>,
    Path(id): Path<TagId>,
) -> Result<Json<TagResponse>, ApiError> {
    debug!(id, "Getting tag");

    let tag = state
        .tag_service
        .get(id)
        .await?
        .ok_or_else(|| ApiError::not_found(format!("Tag {} not found", id)))?;

    Ok(Json(TagResponse::from(&tag)))
}

/// POST /api/tags
pub async fn create_tag(
    State(state): State<AppState>,
    Json(request): Json<TagApiRequest>,
) -> Result<Json<TagResponse>, ApiError> {
    request.validate()?;
    debug!(name = %request.name, "Creating tag");

    let tag = state.tag_service.create(Tag::new(request.name)).await?;

    Ok(Json(TagResponse::from(&tag)))
}

/// PUT /api/tags/{id}
pub async fn update_tag(
    State(state): State<AppState>,
    Path(id): Path<TagId>,
    Json(request): Json<TagApiRequest>,
) -> Result<Json<TagResponse>, ApiError> {
    request.validate()?;
    debug!(id, name = %request.name, "Updating tag");

    let tag = state
        .tag_service
        .update(Tag::with_id(id, request.name))
        .await?;

    Ok(Json(TagResponse::from(&tag)))
}

/// DELETE /api/tags/{id}
pub async fn delete_tag(
    State(state): State<AppState>,
    Path(id): Path<TagId>,
) -> Result<StatusCode, ApiError> {
    debug!(id, "Deleting tag");

    state.tag_service.delete(id).await?;

    Ok(StatusCode::NO_CONTENT)
}
