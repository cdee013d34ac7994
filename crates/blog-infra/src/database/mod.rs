//! Document store connection management and the MongoDB adapter.

mod connections;

#[cfg(feature = "mongodb")]
pub mod entity;
#[cfg(feature = "mongodb")]
mod mongo_repo;
#[cfg(feature = "mongodb")]
pub mod query;

pub use connections::StoreConfig;

#[cfg(feature = "mongodb")]
pub use connections::MongoStore;
#[cfg(feature = "mongodb")]
pub use mongo_repo::MongoPostRepository;

#[cfg(feature = "mongodb")]
#[cfg(test)]
mod tests;
