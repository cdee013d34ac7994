use chrono::{DateTime, SubsecRound, Utc};
use serde::{Deserialize, Serialize};

use super::PostId;

/// Current time truncated to the millisecond precision the store keeps.
pub fn now() -> DateTime<Utc> {
    Utc::now().trunc_subsecs(3)
}

/// Post entity - a persisted blog post.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Post {
    pub id: PostId,
    pub title: String,
    pub content: String,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

/// A post that has not been stored yet and therefore has no id.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewPost {
    pub title: String,
    pub content: String,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl NewPost {
    /// Create a new post stamped with the current time.
    pub fn new(title: String, content: String) -> Self {
        let now = now();
        Self {
            title,
            content,
            created_at: now,
            updated_at: now,
        }
    }

    /// Attach the id assigned by the store.
    pub fn into_post(self, id: PostId) -> Post {
        Post {
            id,
            title: self.title,
            content: self.content,
            created_at: self.created_at,
            updated_at: self.updated_at,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_post_has_equal_timestamps() {
        let draft = NewPost::new("A".into(), "B".into());
        assert_eq!(draft.created_at, draft.updated_at);
        assert_eq!(draft.created_at.timestamp_subsec_nanos() % 1_000_000, 0);
    }

    #[test]
    fn test_post_json_field_names() {
        let id = PostId::parse("507f1f77bcf86cd799439011").unwrap();
        let post = NewPost::new("A".into(), "B".into()).into_post(id);
        let value = serde_json::to_value(&post).unwrap();

        assert_eq!(value["id"], "507f1f77bcf86cd799439011");
        assert_eq!(value["title"], "A");
        assert_eq!(value["content"], "B");
        assert!(value["created_at"].is_string());
        assert!(value["updated_at"].is_string());
    }
}
