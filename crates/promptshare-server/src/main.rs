use axum::{extract::FromRef, routing::get, Json, Router};
use serde::Serialize;
use sqlx::PgPool;
use std::sync::Arc;
use tower_http::cors::CorsLayer;
use tower_http::trace::TraceLayer;
use utoipa::OpenApi;
use utoipa_swagger_ui::SwaggerUi;

mod adapters;
mod application;
mod auth;
mod models;
mod routes;

use adapters::PgPromptRepository;
use application::PromptService;
use auth::ApiKey;
use promptshare::PromptRepository;

/// Prompt service over whichever store the server was started with
pub type AppPromptService = PromptService<dyn PromptRepository>;

/// Application state shared across all routes
#[derive(Clone)]
pub struct AppState {
    pub prompt_service: Arc<AppPromptService>,
    pub api_key: ApiKey,
}

// Allow the auth middleware to extract only the key
impl FromRef<AppState> for ApiKey {
    fn from_ref(state: &AppState) -> ApiKey {
        state.api_key.clone()
    }
}

#[derive(Serialize)]
struct HealthCheck {
    status: String,
    message: String,
    version: String,
}

async fn health_check() -> Json<HealthCheck> {
    Json(HealthCheck {
        status: "ok".to_string(),
        message: "PromptShare API is running".to_string(),
        version: env!("CARGO_PKG_VERSION").to_string(),
    })
}

/// Build the full router with shared state
pub fn build_router(state: AppState) -> Router {
    // OpenAPI documentation
    let openapi = routes::swagger::ApiDoc::openapi();

    Router::new()
        .merge(SwaggerUi::new("/swagger-ui").url("/api-docs/openapi.json", openapi))
        .route("/health", get(health_check))
        .merge(routes::prompt::router(&state))
        .merge(routes::user::router())
        .layer(TraceLayer::new_for_http())
        .layer(CorsLayer::permissive())
        .with_state(state)
}

#[shuttle_runtime::main]
async fn main(
    #[shuttle_shared_db::Postgres] pool: PgPool,
    #[shuttle_runtime::Secrets] secrets: shuttle_runtime::SecretStore,
) -> shuttle_axum::ShuttleAxum {
    tracing::info!("PromptShare API initializing...");

    let api_key = ApiKey::new(secrets.get("PROMPTSHARE_API_KEY"));
    if api_key.is_enabled() {
        tracing::info!("API key authentication enabled for prompt mutations");
    } else {
        tracing::warn!("No PROMPTSHARE_API_KEY set - authentication disabled");
    }

    // Run migrations
    sqlx::migrate!()
        .run(&pool)
        .await
        .map_err(|e| shuttle_runtime::Error::Database(e.to_string()))?;

    tracing::info!("Database migrations completed");

    let store: Arc<dyn PromptRepository> = Arc::new(PgPromptRepository::new(pool));
    let state = AppState {
        prompt_service: Arc::new(PromptService::new(store)),
        api_key,
    };

    let router = build_router(state);

    tracing::info!("Swagger UI: /swagger-ui");
    tracing::info!("PromptShare API ready");

    Ok(router.into())
}
