//! Data Transfer Objects - request types for the API.

use serde::{Deserialize, Serialize};

/// Body of `POST /api/posts` and `PUT /api/posts/{id}`.
///
/// Missing fields decode as empty strings. Any `id` or timestamp fields a
/// client sends are ignored; the server owns those.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct PostRequest {
    #[serde(default)]
    pub title: String,
    #[serde(default)]
    pub content: String,
}
