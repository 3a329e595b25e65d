//! PromptShare Data Models
//!
//! - Prompt: Tagged text with its populated creator
//! - Creator: The user a prompt references

mod prompt;

pub use prompt::*;
