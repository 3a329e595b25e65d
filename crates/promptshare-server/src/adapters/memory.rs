//! In-memory PromptRepository used by service and router tests

use async_trait::async_trait;
use chrono::Utc;
use parking_lot::Mutex;
use std::collections::HashMap;
use std::sync::atomic::{AtomicBool, Ordering};
use uuid::Uuid;

use promptshare::{DomainError, NewPrompt, Prompt, PromptRepository, User};

#[derive(Default)]
struct Tables {
    users: HashMap<Uuid, User>,
    prompts: Vec<Prompt>,
}

/// Vec-backed store; insertion order doubles as `created_at` order
#[derive(Default)]
pub struct InMemoryPromptRepository {
    tables: Mutex<Tables>,
    /// When set, every call fails like an unreachable backend
    unavailable: AtomicBool,
}

impl InMemoryPromptRepository {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn add_user(&self, username: &str) -> User {
        let user = User::new(Uuid::new_v4(), username);
        self.tables.lock().users.insert(user.id, user.clone());
        user
    }

    pub fn set_unavailable(&self, unavailable: bool) {
        self.unavailable.store(unavailable, Ordering::SeqCst);
    }

    fn check(&self) -> Result<(), DomainError> {
        if self.unavailable.load(Ordering::SeqCst) {
            return Err(DomainError::Repository(
                "connection refused (os error 111)".to_string(),
            ));
        }
        Ok(())
    }
}

#[async_trait]
impl PromptRepository for InMemoryPromptRepository {
    async fn find_by_id(&self, id: Uuid) -> Result<Option<Prompt>, DomainError> {
        self.check()?;
        let tables = self.tables.lock();
        Ok(tables.prompts.iter().find(|p| p.id == id).cloned())
    }

    async fn find_all(&self) -> Result<Vec<Prompt>, DomainError> {
        self.check()?;
        Ok(self.tables.lock().prompts.clone())
    }

    async fn find_by_creator(&self, creator_id: Uuid) -> Result<Vec<Prompt>, DomainError> {
        self.check()?;
        let tables = self.tables.lock();
        Ok(tables
            .prompts
            .iter()
            .filter(|p| p.creator.id == creator_id)
            .cloned()
            .collect())
    }

    async fn find_creator(&self, user_id: Uuid) -> Result<Option<User>, DomainError> {
        self.check()?;
        Ok(self.tables.lock().users.get(&user_id).cloned())
    }

    async fn insert(&self, new_prompt: &NewPrompt) -> Result<Prompt, DomainError> {
        self.check()?;
        let mut tables = self.tables.lock();
        let creator = tables
            .users
            .get(&new_prompt.creator_id)
            .cloned()
            .ok_or_else(|| DomainError::Repository("foreign key violation".to_string()))?;

        let now = Utc::now();
        let prompt = Prompt {
            id: Uuid::new_v4(),
            creator,
            prompt: new_prompt.content.prompt().to_string(),
            tag: new_prompt.content.tag().to_string(),
            created_at: now,
            updated_at: now,
        };
        tables.prompts.push(prompt.clone());
        Ok(prompt)
    }

    async fn save(&self, prompt: &Prompt) -> Result<Option<Prompt>, DomainError> {
        self.check()?;
        let mut tables = self.tables.lock();
        let Some(stored) = tables.prompts.iter_mut().find(|p| p.id == prompt.id) else {
            return Ok(None);
        };
        stored.prompt = prompt.prompt.clone();
        stored.tag = prompt.tag.clone();
        stored.updated_at = Utc::now();
        Ok(Some(stored.clone()))
    }

    async fn delete(&self, id: Uuid) -> Result<bool, DomainError> {
        self.check()?;
        let mut tables = self.tables.lock();
        let before = tables.prompts.len();
        tables.prompts.retain(|p| p.id != id);
        Ok(tables.prompts.len() < before)
    }
}
