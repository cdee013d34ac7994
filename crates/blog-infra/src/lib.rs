//! # Blog Infrastructure
//!
//! Concrete implementations of the ports defined in `blog-core`.
//!
//! ## Feature Flags
//!
//! - `full` (default) - All features enabled
//! - `minimal` - No external dependencies, in-memory only
//! - `mongodb` - MongoDB document store via the official driver

pub mod database;
pub mod memory;

pub use database::StoreConfig;
pub use memory::InMemoryPostRepository;

#[cfg(feature = "mongodb")]
pub use database::{MongoPostRepository, MongoStore};
