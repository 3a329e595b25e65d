//! Prompt - Tagged text shared on the feed
//!
//! Pure domain entity without infrastructure dependencies.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use super::User;
use crate::domain::PromptContent;

/// Prompt - A short text body with a single keyword tag
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Prompt {
    pub id: Uuid,
    /// Creator, populated from the user reference on every read
    pub creator: User,
    pub prompt: String,
    /// Normalized keyword, never starts with '#'
    pub tag: String,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

/// NewPrompt - Validated input for creating a prompt.
/// The store assigns the id and timestamps.
#[derive(Debug, Clone)]
pub struct NewPrompt {
    pub creator_id: Uuid,
    pub content: PromptContent,
}

impl Prompt {
    /// Replace body and tag. Identity and creator never change.
    pub fn apply_content(&mut self, content: PromptContent) {
        let (prompt, tag) = content.into_parts();
        self.prompt = prompt;
        self.tag = tag.into_inner();
        self.updated_at = Utc::now();
    }

    /// Case-insensitive match against creator username, body and tag.
    ///
    /// `needle` must already be lower-cased.
    pub fn matches_lowercase(&self, needle: &str) -> bool {
        self.creator.username.to_lowercase().contains(needle)
            || self.prompt.to_lowercase().contains(needle)
            || self.tag.to_lowercase().contains(needle)
    }
}

impl NewPrompt {
    pub fn new(creator_id: Uuid, content: PromptContent) -> Self {
        Self {
            creator_id,
            content,
        }
    }
}
