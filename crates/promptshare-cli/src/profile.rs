//! Profile Controller
//!
//! The signed-in creator's own prompts, with edit and delete actions.
//! Local state is reconciled from each call's outcome; nothing is
//! re-fetched after a mutation.

use std::sync::Arc;
use uuid::Uuid;

use promptshare::Prompt;

use crate::api::{ApiError, PromptApi};
use crate::route::Route;
use crate::session::Session;

pub const DELETE_CONFIRMATION: &str = "Are you sure you want to delete this prompt?";

/// Interactive yes/no question
pub trait Confirm {
    fn confirm(&self, message: &str) -> bool;
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DeleteOutcome {
    /// The user said no; nothing was sent
    Declined,
    Deleted,
    /// The call failed; the prompt stays listed
    Failed,
}

pub struct ProfileController<A: PromptApi + ?Sized> {
    api: Arc<A>,
    session: Session,
    posts: Vec<Prompt>,
    /// Creator whose prompts are currently loaded
    loaded_for: Option<Uuid>,
}

impl<A: PromptApi + ?Sized> ProfileController<A> {
    pub fn new(api: Arc<A>, session: Session) -> Self {
        Self {
            api,
            session,
            posts: Vec::new(),
            loaded_for: None,
        }
    }

    /// Fetch the creator's prompts once the session has resolved to a
    /// signed-in user. Returns whether a fetch happened.
    pub async fn load(&mut self) -> bool {
        let Some(user_id) = self.session.authenticated_user_id() else {
            tracing::debug!(
                "Profile fetch suspended (session {:?})",
                self.session.status()
            );
            return false;
        };

        match self.api.list_user_prompts(user_id).await {
            Ok(posts) => {
                self.posts = posts;
                self.loaded_for = Some(user_id);
            }
            Err(e) => tracing::warn!("Failed to fetch prompts for {}: {}", user_id, e),
        }
        true
    }

    /// Auth state changed; fetch if it now names a user not yet loaded
    pub async fn set_session(&mut self, session: Session) -> bool {
        self.session = session;
        match self.session.authenticated_user_id() {
            Some(user_id) if self.loaded_for != Some(user_id) => self.load().await,
            _ => false,
        }
    }

    pub fn posts(&self) -> &[Prompt] {
        &self.posts
    }

    pub fn find(&self, id: Uuid) -> Option<&Prompt> {
        self.posts.iter().find(|p| p.id == id)
    }

    /// Edit opens the update view for the prompt
    pub fn handle_edit(&self, prompt: &Prompt) -> Route {
        Route::UpdatePrompt { id: prompt.id }
    }

    /// Tag clicks outside the feed navigate to the feed filtered by tag
    pub fn handle_tag_click(&self, tag: &str, current: &Route) -> Option<Route> {
        if current.is_feed() {
            return None;
        }
        Some(Route::Feed {
            tag: Some(tag.to_string()),
        })
    }

    /// Confirm, delete, then drop the prompt from the local list
    pub async fn handle_delete(&mut self, id: Uuid, confirm: &dyn Confirm) -> DeleteOutcome {
        if !confirm.confirm(DELETE_CONFIRMATION) {
            return DeleteOutcome::Declined;
        }

        match self.api.delete_prompt(id).await {
            // Already gone on the server counts as deleted
            Ok(()) | Err(ApiError::NotFound) => {
                self.posts.retain(|p| p.id != id);
                DeleteOutcome::Deleted
            }
            Err(e) => {
                tracing::warn!("Failed to delete prompt {}: {}", id, e);
                DeleteOutcome::Failed
            }
        }
    }

    /// Submit the update view; the local copy is replaced on success
    pub async fn submit_update(&mut self, id: Uuid, prompt: &str, tag: &str) -> Option<Prompt> {
        match self.api.update_prompt(id, prompt, tag).await {
            Ok(updated) => {
                if let Some(local) = self.posts.iter_mut().find(|p| p.id == id) {
                    *local = updated.clone();
                }
                Some(updated)
            }
            Err(e) => {
                tracing::warn!("Failed to update prompt {}: {}", id, e);
                None
            }
        }
    }
}
