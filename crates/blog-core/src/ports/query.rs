//! Typed document queries.
//!
//! Handlers describe what to read or write with these values; each store
//! adapter translates them into its own query language.

use chrono::{DateTime, Utc};

use crate::domain::{Post, PostId};

/// Which documents an operation targets.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PostFilter {
    /// Full scan in the store's natural order.
    All,
    /// Single document lookup by id.
    ById(PostId),
}

impl PostFilter {
    pub fn matches(&self, post: &Post) -> bool {
        match self {
            PostFilter::All => true,
            PostFilter::ById(id) => post.id == *id,
        }
    }
}

impl From<PostId> for PostFilter {
    fn from(id: PostId) -> Self {
        PostFilter::ById(id)
    }
}

/// Field-set update. Only the fields named here are written; `id` and
/// `created_at` are not representable and so are never overwritten.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PostUpdate {
    pub title: Option<String>,
    pub content: Option<String>,
    pub updated_at: DateTime<Utc>,
}

impl PostUpdate {
    /// Start an update that only refreshes `updated_at`.
    pub fn at(updated_at: DateTime<Utc>) -> Self {
        Self {
            title: None,
            content: None,
            updated_at,
        }
    }

    pub fn title(mut self, title: impl Into<String>) -> Self {
        self.title = Some(title.into());
        self
    }

    pub fn content(mut self, content: impl Into<String>) -> Self {
        self.content = Some(content.into());
        self
    }

    /// Apply the update to an in-memory post.
    pub fn apply_to(&self, post: &mut Post) {
        if let Some(title) = &self.title {
            post.title = title.clone();
        }
        if let Some(content) = &self.content {
            post.content = content.clone();
        }
        post.updated_at = self.updated_at;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::NewPost;
    use chrono::Duration;

    fn sample() -> Post {
        NewPost::new("A".into(), "B".into()).into_post(PostId::generate())
    }

    #[test]
    fn test_filter_matches() {
        let post = sample();
        assert!(PostFilter::All.matches(&post));
        assert!(PostFilter::ById(post.id).matches(&post));
        assert!(!PostFilter::ById(PostId::generate()).matches(&post));
    }

    #[test]
    fn test_update_keeps_identity_and_creation_time() {
        let mut post = sample();
        let original = post.clone();
        let later = post.updated_at + Duration::seconds(5);

        PostUpdate::at(later).title("C").apply_to(&mut post);

        assert_eq!(post.id, original.id);
        assert_eq!(post.created_at, original.created_at);
        assert_eq!(post.title, "C");
        assert_eq!(post.content, "B");
        assert_eq!(post.updated_at, later);
    }
}
