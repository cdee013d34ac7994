//! MongoDB repository implementation.

use async_trait::async_trait;
use futures::TryStreamExt;
use mongodb::Collection;
use mongodb::bson::Bson;
use mongodb::error::{Error as MongoError, ErrorKind};
use mongodb::options::{FindOneAndUpdateOptions, ReturnDocument};

use blog_core::RepoError;
use blog_core::domain::{NewPost, Post};
use blog_core::ports::{PostFilter, PostRepository, PostUpdate};

use super::entity::post::{PostDocument, post_id};
use super::query::{filter_document, update_document};

/// Post repository backed by a single MongoDB collection.
#[derive(Clone)]
pub struct MongoPostRepository {
    collection: Collection<PostDocument>,
}

impl MongoPostRepository {
    pub fn new(collection: Collection<PostDocument>) -> Self {
        Self { collection }
    }
}

fn store_error(err: MongoError) -> RepoError {
    match err.kind.as_ref() {
        ErrorKind::ServerSelection { .. } | ErrorKind::Io(_) => {
            RepoError::Connection(err.to_string())
        }
        ErrorKind::BsonDeserialization(_) => RepoError::Decode(err.to_string()),
        _ => RepoError::Query(err.to_string()),
    }
}

#[async_trait]
impl PostRepository for MongoPostRepository {
    async fn find(&self, filter: PostFilter) -> Result<Vec<Post>, RepoError> {
        tracing::debug!(?filter, "Finding posts");

        let docs: Vec<PostDocument> = self
            .collection
            .find(filter_document(&filter), None)
            .await
            .map_err(store_error)?
            .try_collect()
            .await
            .map_err(store_error)?;

        docs.into_iter().map(Post::try_from).collect()
    }

    async fn find_one(&self, filter: PostFilter) -> Result<Option<Post>, RepoError> {
        tracing::debug!(?filter, "Finding post");

        self.collection
            .find_one(filter_document(&filter), None)
            .await
            .map_err(store_error)?
            .map(Post::try_from)
            .transpose()
    }

    async fn insert(&self, post: NewPost) -> Result<Post, RepoError> {
        let doc = PostDocument::from(post.clone());
        let result = self
            .collection
            .insert_one(&doc, None)
            .await
            .map_err(store_error)?;

        let id = match result.inserted_id {
            Bson::ObjectId(oid) => post_id(oid),
            other => {
                return Err(RepoError::Decode(format!(
                    "store assigned a non-ObjectId _id: {other}"
                )));
            }
        };
        tracing::debug!(post_id = %id, "Inserted post");

        Ok(post.into_post(id))
    }

    async fn update_one(
        &self,
        filter: PostFilter,
        update: PostUpdate,
    ) -> Result<Option<Post>, RepoError> {
        tracing::debug!(?filter, "Updating post");

        let options = FindOneAndUpdateOptions::builder()
            .return_document(ReturnDocument::After)
            .build();

        self.collection
            .find_one_and_update(filter_document(&filter), update_document(&update), options)
            .await
            .map_err(store_error)?
            .map(Post::try_from)
            .transpose()
    }

    async fn delete_one(&self, filter: PostFilter) -> Result<u64, RepoError> {
        tracing::debug!(?filter, "Deleting post");

        let result = self
            .collection
            .delete_one(filter_document(&filter), None)
            .await
            .map_err(store_error)?;

        Ok(result.deleted_count)
    }

    fn backend(&self) -> &'static str {
        "mongodb"
    }
}
