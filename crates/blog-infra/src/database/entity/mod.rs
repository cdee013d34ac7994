//! BSON document shapes stored in the collection.

pub mod post;
