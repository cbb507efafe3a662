//! Post store - read access to posts for the listing pages.

use std::sync::Arc;

use crate::domain::{Post, PostId};
use crate::error::RepoError;
use crate::pagination::{Page, PageRequest};
use crate::ports::PostRepository;

/// Reads posts through an injected [`PostRepository`].
#[derive(Clone)]
pub struct PostStore {
    repo: Arc<dyn PostRepository>,
}

impl PostStore {
    pub fn new(repo: Arc<dyn PostRepository>) -> Self {
        Self { repo }
    }

    /// Fetch one page of posts, newest first.
    pub async fn list_page(&self, request: PageRequest) -> Result<Page<Post>, RepoError> {
        let mut items = self.repo.list_page(request).await?;
        items.truncate(request.per_page() as usize);
        Ok(Page::new(items, request))
    }

    /// Look up a post by a raw identifier.
    ///
    /// Unparseable and unknown identifiers both yield `Ok(None)`.
    pub async fn find(&self, raw_id: &str) -> Result<Option<Post>, RepoError> {
        match PostId::parse(raw_id) {
            Some(id) => self.repo.find_by_id(id).await,
            None => Ok(None),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::NewPost;
    use async_trait::async_trait;
    use chrono::{Duration, TimeZone, Utc};

    /// Fixed set of posts, kept newest first.
    struct FixedRepository {
        posts: Vec<Post>,
    }

    impl FixedRepository {
        fn with_count(count: i64) -> Self {
            let base = Utc.with_ymd_and_hms(2024, 1, 1, 0, 0, 0).unwrap();
            let mut posts: Vec<Post> = (1..=count)
                .map(|i| {
                    Post::restore(
                        PostId::new(i),
                        format!("Post {i}"),
                        String::new(),
                        base + Duration::minutes(i),
                    )
                })
                .collect();
            posts.reverse();
            Self { posts }
        }
    }

    #[async_trait]
    impl PostRepository for FixedRepository {
        async fn list_page(&self, request: PageRequest) -> Result<Vec<Post>, RepoError> {
            Ok(self
                .posts
                .iter()
                .skip(request.offset() as usize)
                .take(request.per_page() as usize)
                .cloned()
                .collect())
        }

        async fn find_by_id(&self, id: PostId) -> Result<Option<Post>, RepoError> {
            Ok(self.posts.iter().find(|p| p.id() == id).cloned())
        }

        async fn create(&self, _new_post: NewPost) -> Result<Post, RepoError> {
            Err(RepoError::Query("read-only".to_string()))
        }
    }

    struct UnavailableRepository;

    #[async_trait]
    impl PostRepository for UnavailableRepository {
        async fn list_page(&self, _request: PageRequest) -> Result<Vec<Post>, RepoError> {
            Err(RepoError::Connection("refused".to_string()))
        }

        async fn find_by_id(&self, _id: PostId) -> Result<Option<Post>, RepoError> {
            Err(RepoError::Connection("refused".to_string()))
        }

        async fn create(&self, _new_post: NewPost) -> Result<Post, RepoError> {
            Err(RepoError::Connection("refused".to_string()))
        }
    }

    fn store(repo: impl PostRepository + 'static) -> PostStore {
        PostStore::new(Arc::new(repo))
    }

    #[tokio::test]
    async fn test_sixteen_posts_split_over_two_pages() {
        let store = store(FixedRepository::with_count(16));

        let first = store.list_page(PageRequest::new(1)).await.unwrap();
        let ids: Vec<i64> = first.items.iter().map(|p| p.id().value()).collect();
        assert_eq!(ids, (2..=16).rev().collect::<Vec<_>>());
        assert!(first.has_next());

        let second = store.list_page(PageRequest::new(2)).await.unwrap();
        assert_eq!(second.items.len(), 1);
        assert_eq!(second.items[0].id(), PostId::new(1));
        assert!(!second.has_next());
    }

    #[tokio::test]
    async fn test_page_past_the_end_is_empty() {
        let store = store(FixedRepository::with_count(3));
        let page = store.list_page(PageRequest::new(9)).await.unwrap();
        assert!(page.is_empty());
        assert_eq!(page.number, 9);
    }

    #[tokio::test]
    async fn test_find_known_unknown_and_malformed() {
        let store = store(FixedRepository::with_count(3));

        let post = store.find("2").await.unwrap().unwrap();
        assert_eq!(post.title(), "Post 2");

        assert!(store.find("99").await.unwrap().is_none());
        assert!(store.find("not-an-id").await.unwrap().is_none());
    }

    #[tokio::test]
    async fn test_empty_store() {
        let store = store(FixedRepository::with_count(0));
        assert!(store.list_page(PageRequest::default()).await.unwrap().is_empty());
        assert!(store.find("1").await.unwrap().is_none());
    }

    #[tokio::test]
    async fn test_persistence_failure_propagates() {
        let store = store(UnavailableRepository);
        assert!(matches!(
            store.list_page(PageRequest::default()).await,
            Err(RepoError::Connection(_))
        ));
        assert!(store.find("1").await.is_err());
    }

    #[tokio::test]
    async fn test_malformed_id_skips_repository() {
        let store = store(UnavailableRepository);
        assert!(store.find("abc").await.unwrap().is_none());
    }
}
