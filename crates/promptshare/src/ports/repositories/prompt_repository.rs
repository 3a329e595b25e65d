//! Prompt Repository Port
//!
//! Abstract interface for Prompt persistence operations.
//! Every read resolves the creator reference into a full `User`.

use async_trait::async_trait;
use uuid::Uuid;

use crate::domain::{errors::DomainError, NewPrompt, Prompt, User};

/// Repository interface for Prompt entities
#[async_trait]
pub trait PromptRepository: Send + Sync {
    /// Find a Prompt by ID
    async fn find_by_id(&self, id: Uuid) -> Result<Option<Prompt>, DomainError>;

    /// Find all Prompts, oldest first
    async fn find_all(&self) -> Result<Vec<Prompt>, DomainError>;

    /// Find all Prompts owned by a creator, oldest first
    async fn find_by_creator(&self, creator_id: Uuid) -> Result<Vec<Prompt>, DomainError>;

    /// Resolve a creator reference
    async fn find_creator(&self, user_id: Uuid) -> Result<Option<User>, DomainError>;

    /// Insert a new Prompt; the store assigns id and timestamps
    async fn insert(&self, new_prompt: &NewPrompt) -> Result<Prompt, DomainError>;

    /// Persist body and tag of an existing Prompt.
    /// Returns `None` when the record no longer exists.
    async fn save(&self, prompt: &Prompt) -> Result<Option<Prompt>, DomainError>;

    /// Delete a Prompt by ID
    async fn delete(&self, id: Uuid) -> Result<bool, DomainError>;
}
