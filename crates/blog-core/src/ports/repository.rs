use async_trait::async_trait;

use crate::domain::{NewPost, Post};
use crate::error::RepoError;

use super::query::{PostFilter, PostUpdate};

/// Document store client for posts.
///
/// Every method is a single round trip to the store. "Not found" is not an
/// error at this layer: lookups return `None` and deletes report a count.
#[async_trait]
pub trait PostRepository: Send + Sync {
    /// Fetch every document matching the filter, in store order.
    async fn find(&self, filter: PostFilter) -> Result<Vec<Post>, RepoError>;

    /// Fetch the first document matching the filter.
    async fn find_one(&self, filter: PostFilter) -> Result<Option<Post>, RepoError>;

    /// Insert a new document; the store assigns the id.
    async fn insert(&self, post: NewPost) -> Result<Post, RepoError>;

    /// Atomically apply `update` to the first match and return the document
    /// as it is after the update.
    async fn update_one(
        &self,
        filter: PostFilter,
        update: PostUpdate,
    ) -> Result<Option<Post>, RepoError>;

    /// Delete the first match, returning how many documents were removed.
    async fn delete_one(&self, filter: PostFilter) -> Result<u64, RepoError>;

    /// Short backend name, reported by the health endpoint.
    fn backend(&self) -> &'static str;
}
