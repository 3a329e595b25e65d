//! PromptShare API Routes
//!
//! - /api/prompt - Feed listing and prompt creation
//! - /api/prompt/:id - Single prompt read/update/delete
//! - /api/users/:id/posts - Creator-scoped listing (profile)

pub mod prompt;
pub mod swagger;
pub mod user;
