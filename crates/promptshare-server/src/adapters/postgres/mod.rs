//! PostgreSQL Repository Implementations

mod prompt_repository;

pub use prompt_repository::PgPromptRepository;
