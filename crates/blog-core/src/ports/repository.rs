use async_trait::async_trait;

use crate::domain::{NewPost, Post, PostId};
use crate::error::RepoError;
use crate::pagination::PageRequest;

/// Post repository - the persistence collaborator for posts.
#[async_trait]
pub trait PostRepository: Send + Sync {
    /// Fetch one page of posts, newest first.
    ///
    /// A page past the end of the data yields an empty vector.
    async fn list_page(&self, request: PageRequest) -> Result<Vec<Post>, RepoError>;

    /// Find a post by its identifier.
    async fn find_by_id(&self, id: PostId) -> Result<Option<Post>, RepoError>;

    /// Persist a new post, assigning its identifier and creation time.
    async fn create(&self, new_post: NewPost) -> Result<Post, RepoError>;
}
