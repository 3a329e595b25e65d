//! User - Prompt creator
//!
//! Users are owned by the external auth provider. Prompts only store the
//! reference; reads resolve it to this record.

use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// User - Resolved creator of a prompt
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct User {
    pub id: Uuid,
    pub username: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub email: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub image: Option<String>,
}

impl User {
    pub fn new(id: Uuid, username: impl Into<String>) -> Self {
        Self {
            id,
            username: username.into(),
            email: None,
            image: None,
        }
    }
}
