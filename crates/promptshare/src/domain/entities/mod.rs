//! Domain Entities
//!
//! Pure domain models without infrastructure dependencies.
//! - Prompt: Tagged text shared on the feed
//! - User: Creator referenced by a Prompt (owned by the auth provider)

mod prompt;
mod user;

pub use prompt::*;
pub use user::*;
