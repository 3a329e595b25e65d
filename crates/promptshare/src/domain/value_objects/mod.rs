//! Value Objects
//!
//! Immutable objects defined by their attributes rather than identity.

mod prompt_content;
mod tag;

pub use prompt_content::*;
pub use tag::*;
