//! User Routes - Creator-scoped prompt listing for profiles

use axum::{
    extract::{Path, State},
    http::StatusCode,
    routing::get,
    Json, Router,
};
use uuid::Uuid;

use crate::models::PromptResponse;
use crate::AppState;

/// List a creator's Prompts
#[utoipa::path(
    get,
    path = "/api/users/{id}/posts",
    params(
        ("id" = String, Path, description = "User ID")
    ),
    responses(
        (status = 200, description = "Prompts created by the user", body = Vec<PromptResponse>),
        (status = 500, description = "Internal server error")
    ),
    tag = "User"
)]
pub async fn list_user_prompts(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<Json<Vec<PromptResponse>>, (StatusCode, String)> {
    // Unknown or malformed user ids own nothing
    let Ok(user_id) = Uuid::parse_str(&id) else {
        return Ok(Json(Vec::new()));
    };

    let prompts = state
        .prompt_service
        .list_by_creator(user_id)
        .await
        .map_err(|e| {
            tracing::error!("Failed to fetch prompts for user {}: {}", user_id, e);
            (
                StatusCode::INTERNAL_SERVER_ERROR,
                "Failed to fetch prompts".to_string(),
            )
        })?;

    Ok(Json(prompts.into_iter().map(Into::into).collect()))
}

pub fn router() -> Router<AppState> {
    Router::new().route("/api/users/:id/posts", get(list_user_prompts))
}
