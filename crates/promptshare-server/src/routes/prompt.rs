//! Prompt Routes - Feed and single-prompt management
//!
//! HTTP handlers that delegate to PromptService. Backend failures are
//! logged here and answered with a generic message.

use axum::{
    extract::{rejection::JsonRejection, Path, State},
    http::StatusCode,
    middleware,
    routing::{get, patch, post},
    Json, Router,
};
use uuid::Uuid;

use promptshare::DomainError;

use crate::auth::auth_middleware;
use crate::models::{CreatePromptRequest, PromptResponse, UpdatePromptRequest};
use crate::AppState;

type ApiError = (StatusCode, String);

fn prompt_not_found() -> ApiError {
    (StatusCode::NOT_FOUND, "Prompt not found".to_string())
}

/// Malformed ids can never match a record
fn parse_prompt_id(raw: &str) -> Result<Uuid, ApiError> {
    Uuid::parse_str(raw).map_err(|_| prompt_not_found())
}

/// Unreadable or mistyped bodies are client errors like any other
/// validation failure
fn bad_body(rejection: JsonRejection) -> ApiError {
    (StatusCode::BAD_REQUEST, rejection.body_text())
}

/// Translate a store outcome, hiding backend details behind `failure`
fn map_error(e: DomainError, failure: &str) -> ApiError {
    match e {
        DomainError::NotFound { .. } => prompt_not_found(),
        DomainError::Validation(message) => (StatusCode::BAD_REQUEST, message),
        DomainError::Repository(detail) => {
            tracing::error!("{}: {}", failure, detail);
            (StatusCode::INTERNAL_SERVER_ERROR, failure.to_string())
        }
    }
}

/// List all Prompts
#[utoipa::path(
    get,
    path = "/api/prompt",
    responses(
        (status = 200, description = "All prompts with creators populated", body = Vec<PromptResponse>),
        (status = 500, description = "Internal server error")
    ),
    tag = "Prompt"
)]
pub async fn list_prompts(
    State(state): State<AppState>,
) -> Result<Json<Vec<PromptResponse>>, ApiError> {
    let prompts = state
        .prompt_service
        .list_all()
        .await
        .map_err(|e| map_error(e, "Failed to fetch prompts"))?;

    Ok(Json(prompts.into_iter().map(Into::into).collect()))
}

/// Create new Prompt
#[utoipa::path(
    post,
    path = "/api/prompt/new",
    request_body = CreatePromptRequest,
    responses(
        (status = 201, description = "Prompt created", body = PromptResponse),
        (status = 400, description = "Invalid prompt or tag"),
        (status = 404, description = "Creator not found"),
        (status = 500, description = "Internal server error")
    ),
    tag = "Prompt"
)]
pub async fn create_prompt(
    State(state): State<AppState>,
    payload: Result<Json<CreatePromptRequest>, JsonRejection>,
) -> Result<(StatusCode, Json<PromptResponse>), ApiError> {
    let Json(payload) = payload.map_err(bad_body)?;
    let user_id = payload.user_id;
    let content = payload
        .into_content()
        .map_err(|e| map_error(e, "Failed to create prompt"))?;

    let prompt = state
        .prompt_service
        .create(user_id, content)
        .await
        .map_err(|e| match e {
            DomainError::NotFound { .. } => {
                (StatusCode::NOT_FOUND, "Creator not found".to_string())
            }
            _ => map_error(e, "Failed to create prompt"),
        })?;

    Ok((StatusCode::CREATED, Json(prompt.into())))
}

/// Get Prompt by ID
#[utoipa::path(
    get,
    path = "/api/prompt/{id}",
    params(
        ("id" = String, Path, description = "Prompt ID")
    ),
    responses(
        (status = 200, description = "Prompt found", body = PromptResponse),
        (status = 404, description = "Prompt not found"),
        (status = 500, description = "Internal server error")
    ),
    tag = "Prompt"
)]
pub async fn get_prompt(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<Json<PromptResponse>, ApiError> {
    let id = parse_prompt_id(&id)?;
    let prompt = state
        .prompt_service
        .get_by_id(id)
        .await
        .map_err(|e| map_error(e, "Failed to fetch prompt"))?;

    Ok(Json(prompt.into()))
}

/// Update Prompt body and tag
#[utoipa::path(
    patch,
    path = "/api/prompt/{id}",
    params(
        ("id" = String, Path, description = "Prompt ID")
    ),
    request_body = UpdatePromptRequest,
    responses(
        (status = 200, description = "Prompt updated", body = PromptResponse),
        (status = 400, description = "Invalid prompt or tag"),
        (status = 404, description = "Prompt not found"),
        (status = 500, description = "Internal server error")
    ),
    tag = "Prompt"
)]
pub async fn update_prompt(
    State(state): State<AppState>,
    Path(id): Path<String>,
    payload: Result<Json<UpdatePromptRequest>, JsonRejection>,
) -> Result<Json<PromptResponse>, ApiError> {
    let id = parse_prompt_id(&id)?;
    let Json(payload) = payload.map_err(bad_body)?;
    let content = payload
        .into_content()
        .map_err(|e| map_error(e, "Failed to update prompt"))?;

    let prompt = state
        .prompt_service
        .update(id, content)
        .await
        .map_err(|e| map_error(e, "Failed to update prompt"))?;

    Ok(Json(prompt.into()))
}

/// Delete Prompt
#[utoipa::path(
    delete,
    path = "/api/prompt/{id}",
    params(
        ("id" = String, Path, description = "Prompt ID")
    ),
    responses(
        (status = 200, description = "Prompt deleted successfully", body = String),
        (status = 404, description = "Prompt not found"),
        (status = 500, description = "Internal server error")
    ),
    tag = "Prompt"
)]
pub async fn delete_prompt(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<&'static str, ApiError> {
    let id = parse_prompt_id(&id)?;
    state
        .prompt_service
        .delete(id)
        .await
        .map_err(|e| map_error(e, "Failed to delete prompt"))?;

    Ok("Prompt deleted successfully")
}

pub fn router(state: &AppState) -> Router<AppState> {
    let auth = middleware::from_fn_with_state(state.clone(), auth_middleware);

    Router::new()
        .route("/api/prompt", get(list_prompts))
        .route(
            "/api/prompt/new",
            // "new" is never a prompt id
            post(create_prompt)
                .layer(auth.clone())
                .get(|| async { prompt_not_found() }),
        )
        .route(
            "/api/prompt/:id",
            get(get_prompt).merge(patch(update_prompt).delete(delete_prompt).layer(auth)),
        )
}
