//! Domain Services
//!
//! Stateless domain logic shared by the server and its clients.

mod prompt_filter;

pub use prompt_filter::*;
