//! Application Layer (Use Cases)
//!
//! Orchestrates domain operations over the repository ports.

mod prompt_service;

pub use prompt_service::PromptService;
