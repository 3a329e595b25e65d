//! Infrastructure Adapters
//!
//! Implementations of domain ports for external systems.

pub mod postgres;

#[cfg(test)]
pub mod memory;

// Re-exports
pub use postgres::PgPromptRepository;
