//! Prompt - Request/Response DTOs

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use uuid::Uuid;

use promptshare::{DomainError, Prompt, PromptContent, User};

/// Creator of a prompt, populated from the user reference
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct CreatorResponse {
    pub id: Uuid,
    pub username: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub email: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub image: Option<String>,
}

/// Prompt response with populated creator
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct PromptResponse {
    pub id: Uuid,
    pub creator: CreatorResponse,
    pub prompt: String,
    pub tag: String,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

/// Update Prompt request. Both fields are required; they are optional
/// here so a missing field surfaces as a validation error.
#[derive(Debug, Deserialize, ToSchema)]
pub struct UpdatePromptRequest {
    pub prompt: Option<String>,
    /// Leading '#' is stripped
    pub tag: Option<String>,
}

/// Create Prompt request
#[derive(Debug, Deserialize, ToSchema)]
pub struct CreatePromptRequest {
    pub user_id: Uuid,
    pub prompt: Option<String>,
    pub tag: Option<String>,
}

impl UpdatePromptRequest {
    pub fn into_content(self) -> Result<PromptContent, DomainError> {
        PromptContent::parse(self.prompt.as_deref(), self.tag.as_deref())
    }
}

impl CreatePromptRequest {
    pub fn into_content(self) -> Result<PromptContent, DomainError> {
        PromptContent::parse(self.prompt.as_deref(), self.tag.as_deref())
    }
}

impl From<User> for CreatorResponse {
    fn from(user: User) -> Self {
        Self {
            id: user.id,
            username: user.username,
            email: user.email,
            image: user.image,
        }
    }
}

impl From<Prompt> for PromptResponse {
    fn from(prompt: Prompt) -> Self {
        Self {
            id: prompt.id,
            creator: prompt.creator.into(),
            prompt: prompt.prompt,
            tag: prompt.tag,
            created_at: prompt.created_at,
            updated_at: prompt.updated_at,
        }
    }
}
