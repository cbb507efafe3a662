//! Domain entities - the core business objects.

mod post;

pub use post::{NewPost, Post, PostChanges, PostId, TIMESTAMP_FORMAT};
