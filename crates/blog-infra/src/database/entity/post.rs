//! Post document for MongoDB.

use chrono::{DateTime, Utc};
use mongodb::bson::oid::ObjectId;
use mongodb::bson::serde_helpers::chrono_datetime_as_bson_datetime;
use serde::{Deserialize, Serialize};

use blog_core::RepoError;
use blog_core::domain::{NewPost, Post, PostId};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PostDocument {
    #[serde(rename = "_id", skip_serializing_if = "Option::is_none")]
    pub id: Option<ObjectId>,
    #[serde(default)]
    pub title: String,
    #[serde(default)]
    pub content: String,
    #[serde(with = "chrono_datetime_as_bson_datetime")]
    pub created_at: DateTime<Utc>,
    #[serde(with = "chrono_datetime_as_bson_datetime")]
    pub updated_at: DateTime<Utc>,
}

pub fn object_id(id: PostId) -> ObjectId {
    ObjectId::from_bytes(id.bytes())
}

pub fn post_id(oid: ObjectId) -> PostId {
    PostId::from_bytes(oid.bytes())
}

/// Conversion from a draft to an insertable document; the store fills `_id`.
impl From<NewPost> for PostDocument {
    fn from(post: NewPost) -> Self {
        Self {
            id: None,
            title: post.title,
            content: post.content,
            created_at: post.created_at,
            updated_at: post.updated_at,
        }
    }
}

/// Conversion from a stored document to the domain Post.
impl TryFrom<PostDocument> for Post {
    type Error = RepoError;

    fn try_from(doc: PostDocument) -> Result<Self, Self::Error> {
        let id = doc
            .id
            .ok_or_else(|| RepoError::Decode("document has no _id".to_string()))?;

        Ok(Self {
            id: post_id(id),
            title: doc.title,
            content: doc.content,
            created_at: doc.created_at,
            updated_at: doc.updated_at,
        })
    }
}
