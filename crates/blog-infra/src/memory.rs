//! In-memory post repository - used when no document store is configured.

use async_trait::async_trait;
use tokio::sync::RwLock;

use blog_core::RepoError;
use blog_core::domain::{NewPost, Post, PostId};
use blog_core::ports::{PostFilter, PostRepository, PostUpdate};

/// In-memory post store using a Vec behind an async RwLock.
///
/// Insertion order is the natural order returned by `find`.
/// Note: Data is lost on process restart.
pub struct InMemoryPostRepository {
    store: RwLock<Vec<Post>>,
}

impl InMemoryPostRepository {
    pub fn new() -> Self {
        Self {
            store: RwLock::new(Vec::new()),
        }
    }
}

impl Default for InMemoryPostRepository {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl PostRepository for InMemoryPostRepository {
    async fn find(&self, filter: PostFilter) -> Result<Vec<Post>, RepoError> {
        let store = self.store.read().await;
        Ok(store.iter().filter(|p| filter.matches(p)).cloned().collect())
    }

    async fn find_one(&self, filter: PostFilter) -> Result<Option<Post>, RepoError> {
        let store = self.store.read().await;
        Ok(store.iter().find(|p| filter.matches(p)).cloned())
    }

    async fn insert(&self, post: NewPost) -> Result<Post, RepoError> {
        let post = post.into_post(PostId::generate());
        self.store.write().await.push(post.clone());
        tracing::debug!(post_id = %post.id, "Inserted post");
        Ok(post)
    }

    async fn update_one(
        &self,
        filter: PostFilter,
        update: PostUpdate,
    ) -> Result<Option<Post>, RepoError> {
        // Single write lock so the read-modify-write is atomic
        let mut store = self.store.write().await;
        Ok(store.iter_mut().find(|p| filter.matches(p)).map(|post| {
            update.apply_to(post);
            post.clone()
        }))
    }

    async fn delete_one(&self, filter: PostFilter) -> Result<u64, RepoError> {
        let mut store = self.store.write().await;
        match store.iter().position(|p| filter.matches(p)) {
            Some(index) => {
                store.remove(index);
                Ok(1)
            }
            None => Ok(0),
        }
    }

    fn backend(&self) -> &'static str {
        "memory"
    }
}
