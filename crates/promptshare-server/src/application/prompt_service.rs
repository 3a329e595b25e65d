//! Prompt Application Service (Use Case)
//!
//! Orchestrates domain operations for Prompt management.

use std::sync::Arc;
use uuid::Uuid;

use promptshare::{DomainError, NewPrompt, Prompt, PromptContent, PromptRepository};

/// Application service for Prompt operations
pub struct PromptService<R: PromptRepository + ?Sized> {
    repo: Arc<R>,
}

impl<R: PromptRepository + ?Sized> PromptService<R> {
    pub fn new(repo: Arc<R>) -> Self {
        Self { repo }
    }

    /// Get a Prompt by ID with its creator populated
    pub async fn get_by_id(&self, id: Uuid) -> Result<Prompt, DomainError> {
        self.repo
            .find_by_id(id)
            .await?
            .ok_or_else(|| DomainError::not_found("Prompt", id))
    }

    /// Get every Prompt for the feed
    pub async fn list_all(&self) -> Result<Vec<Prompt>, DomainError> {
        self.repo.find_all().await
    }

    /// Get the Prompts owned by one creator
    pub async fn list_by_creator(&self, user_id: Uuid) -> Result<Vec<Prompt>, DomainError> {
        self.repo.find_by_creator(user_id).await
    }

    /// Create a Prompt for an existing creator
    pub async fn create(&self, user_id: Uuid, content: PromptContent) -> Result<Prompt, DomainError> {
        self.repo
            .find_creator(user_id)
            .await?
            .ok_or_else(|| DomainError::not_found("User", user_id))?;

        let created = self.repo.insert(&NewPrompt::new(user_id, content)).await?;

        tracing::info!("Created Prompt: #{} ({})", created.tag, created.id);

        Ok(created)
    }

    /// Replace body and tag of a Prompt
    pub async fn update(&self, id: Uuid, content: PromptContent) -> Result<Prompt, DomainError> {
        let mut current = self
            .repo
            .find_by_id(id)
            .await?
            .ok_or_else(|| DomainError::not_found("Prompt", id))?;

        current.apply_content(content);

        // Deleted between load and save
        let saved = self
            .repo
            .save(&current)
            .await?
            .ok_or_else(|| DomainError::not_found("Prompt", id))?;

        tracing::info!("Updated Prompt: {}", saved.id);

        Ok(saved)
    }

    /// Delete a Prompt permanently
    pub async fn delete(&self, id: Uuid) -> Result<(), DomainError> {
        if !self.repo.delete(id).await? {
            return Err(DomainError::not_found("Prompt", id));
        }

        tracing::info!("Deleted Prompt: {}", id);
        Ok(())
    }
}
