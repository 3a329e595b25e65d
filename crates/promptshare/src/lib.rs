//! PromptShare Domain Library
//!
//! Core domain types and interfaces for sharing tagged text prompts.
//!
//! # Architecture
//!
//! This crate follows Clean Architecture / Hexagonal Architecture principles:
//!
//! - **Domain Layer** (`domain/`): Pure business entities and logic
//!   - `entities/`: Core domain models (Prompt, User)
//!   - `value_objects/`: Immutable value types (Tag, PromptContent)
//!   - `services/`: Pure domain logic (feed filtering)
//!   - `errors/`: Domain-specific error types
//!
//! - **Ports** (`ports/`): Abstract interfaces (traits)
//!   - `repositories/`: Data access interfaces
//!
//! # Usage
//!
//! ```rust,ignore
//! use promptshare::domain::{Prompt, Tag};
//! use promptshare::ports::PromptRepository;
//! ```

pub mod domain;
pub mod ports;

// Re-export commonly used types
pub use domain::{
    filter_prompts, visible_prompts, DomainError, NewPrompt, Prompt, PromptContent, Tag, User,
};
pub use ports::PromptRepository;
