//! In-memory API double for controller tests

use async_trait::async_trait;
use chrono::Utc;
use parking_lot::Mutex;
use reqwest::StatusCode;
use uuid::Uuid;

use promptshare::{Prompt, PromptContent, User};

use crate::api::{ApiError, PromptApi};

pub fn post(username: &str, prompt: &str, tag: &str) -> Prompt {
    post_by(&User::new(Uuid::new_v4(), username), prompt, tag)
}

pub fn post_by(creator: &User, prompt: &str, tag: &str) -> Prompt {
    let now = Utc::now();
    Prompt {
        id: Uuid::new_v4(),
        creator: creator.clone(),
        prompt: prompt.to_string(),
        tag: tag.to_string(),
        created_at: now,
        updated_at: now,
    }
}

/// Serves a fixed collection and records every call
#[derive(Default)]
pub struct FakeApi {
    prompts: Mutex<Vec<Prompt>>,
    calls: Mutex<Vec<String>>,
    failing: Mutex<bool>,
}

impl FakeApi {
    pub fn with_prompts(prompts: Vec<Prompt>) -> Self {
        Self {
            prompts: Mutex::new(prompts),
            ..Default::default()
        }
    }

    pub fn calls(&self) -> Vec<String> {
        self.calls.lock().clone()
    }

    /// Make every later call answer 500
    pub fn fail_requests(&self, failing: bool) {
        *self.failing.lock() = failing;
    }

    fn record(&self, call: String) -> Result<(), ApiError> {
        self.calls.lock().push(call);
        if *self.failing.lock() {
            return Err(ApiError::Status {
                status: StatusCode::INTERNAL_SERVER_ERROR,
                body: "Failed to fetch prompts".to_string(),
            });
        }
        Ok(())
    }
}

#[async_trait]
impl PromptApi for FakeApi {
    async fn list_prompts(&self) -> Result<Vec<Prompt>, ApiError> {
        self.record("list_prompts".to_string())?;
        Ok(self.prompts.lock().clone())
    }

    async fn list_user_prompts(&self, user_id: Uuid) -> Result<Vec<Prompt>, ApiError> {
        self.record(format!("list_user_prompts {}", user_id))?;
        Ok(self
            .prompts
            .lock()
            .iter()
            .filter(|p| p.creator.id == user_id)
            .cloned()
            .collect())
    }

    async fn get_prompt(&self, id: Uuid) -> Result<Prompt, ApiError> {
        self.record(format!("get_prompt {}", id))?;
        self.prompts
            .lock()
            .iter()
            .find(|p| p.id == id)
            .cloned()
            .ok_or(ApiError::NotFound)
    }

    async fn update_prompt(&self, id: Uuid, prompt: &str, tag: &str) -> Result<Prompt, ApiError> {
        self.record(format!("update_prompt {}", id))?;
        let content =
            PromptContent::parse(Some(prompt), Some(tag)).map_err(|e| ApiError::Status {
                status: StatusCode::BAD_REQUEST,
                body: e.to_string(),
            })?;

        let mut prompts = self.prompts.lock();
        let existing = prompts
            .iter_mut()
            .find(|p| p.id == id)
            .ok_or(ApiError::NotFound)?;
        existing.apply_content(content);
        Ok(existing.clone())
    }

    async fn delete_prompt(&self, id: Uuid) -> Result<(), ApiError> {
        self.record(format!("delete_prompt {}", id))?;
        let mut prompts = self.prompts.lock();
        let before = prompts.len();
        prompts.retain(|p| p.id != id);
        if prompts.len() == before {
            return Err(ApiError::NotFound);
        }
        Ok(())
    }
}
