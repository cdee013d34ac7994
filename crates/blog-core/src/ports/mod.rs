//! Ports - trait definitions for external dependencies.
//! These are the "interfaces" that infrastructure must implement.

mod query;
mod repository;

pub use query::{PostFilter, PostUpdate};
pub use repository::PostRepository;
