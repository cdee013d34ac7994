//! Domain entities - the core business objects.

mod post;
mod post_id;

pub use post::{NewPost, Post, now};
pub use post_id::PostId;
