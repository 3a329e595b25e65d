//! OpenAPI Documentation
//!
//! Centralized API documentation using utoipa.

use utoipa::OpenApi;

use crate::models::{CreatePromptRequest, CreatorResponse, PromptResponse, UpdatePromptRequest};

#[derive(OpenApi)]
#[openapi(
    paths(
        // Prompt endpoints
        super::prompt::list_prompts,
        super::prompt::create_prompt,
        super::prompt::get_prompt,
        super::prompt::update_prompt,
        super::prompt::delete_prompt,
        // User endpoints
        super::user::list_user_prompts,
    ),
    components(
        schemas(
            PromptResponse,
            CreatorResponse,
            CreatePromptRequest,
            UpdatePromptRequest,
        )
    ),
    tags(
        (name = "Prompt", description = "Shared prompt feed and management"),
        (name = "User", description = "Creator-scoped prompt listing"),
    ),
    info(
        title = "PromptShare API",
        version = "0.1.0",
        description = "Publish, browse and manage tagged text prompts",
        license(name = "MIT"),
    ),
    servers(
        (url = "/", description = "Current server"),
    )
)]
pub struct ApiDoc;
