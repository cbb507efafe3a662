//! In-memory post repository.

use async_trait::async_trait;
use chrono::Utc;
use tokio::sync::RwLock;

use blog_core::domain::{NewPost, Post, PostId};
use blog_core::error::RepoError;
use blog_core::pagination::PageRequest;
use blog_core::ports::PostRepository;

struct Store {
    posts: Vec<Post>,
    next_id: i64,
}

/// Post repository backed by a `Vec` behind an async `RwLock`.
///
/// Fallback when no database is configured. Data is lost on process restart.
pub struct InMemoryPostRepository {
    store: RwLock<Store>,
}

impl InMemoryPostRepository {
    pub fn new() -> Self {
        Self::with_posts(Vec::new())
    }

    /// Start with already stored posts. New ids continue after the highest one.
    pub fn with_posts(posts: Vec<Post>) -> Self {
        let next_id = posts.iter().map(|p| p.id().value()).max().unwrap_or(0) + 1;
        Self {
            store: RwLock::new(Store { posts, next_id }),
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
    async fn list_page(&self, request: PageRequest) -> Result<Vec<Post>, RepoError> {
        let store = self.store.read().await;

        let mut posts: Vec<&Post> = store.posts.iter().collect();
        posts.sort_by(|a, b| {
            b.created_at()
                .cmp(&a.created_at())
                .then_with(|| b.id().cmp(&a.id()))
        });

        let offset = usize::try_from(request.offset()).unwrap_or(usize::MAX);
        Ok(posts
            .into_iter()
            .skip(offset)
            .take(request.per_page() as usize)
            .cloned()
            .collect())
    }

    async fn find_by_id(&self, id: PostId) -> Result<Option<Post>, RepoError> {
        let store = self.store.read().await;
        Ok(store.posts.iter().find(|p| p.id() == id).cloned())
    }

    async fn create(&self, new_post: NewPost) -> Result<Post, RepoError> {
        let mut store = self.store.write().await;

        let id = PostId::new(store.next_id);
        store.next_id += 1;

        let post = Post::restore(id, new_post.title, new_post.body, Utc::now());
        store.posts.push(post.clone());

        tracing::debug!(post_id = %id, "Post stored in memory");
        Ok(post)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{Duration, TimeZone};

    /// Posts 1..=count created one minute apart, oldest first.
    fn posts(count: i64) -> Vec<Post> {
        let base = Utc.with_ymd_and_hms(2024, 3, 5, 14, 30, 0).unwrap();
        (1..=count)
            .map(|i| {
                Post::restore(
                    PostId::new(i),
                    format!("Post {i}"),
                    "Body".to_string(),
                    base + Duration::minutes(i),
                )
            })
            .collect()
    }

    fn ids(posts: &[Post]) -> Vec<i64> {
        posts.iter().map(|p| p.id().value()).collect()
    }

    #[tokio::test]
    async fn test_pages_are_newest_first() {
        let repo = InMemoryPostRepository::with_posts(posts(16));

        let first = repo.list_page(PageRequest::new(1)).await.unwrap();
        assert_eq!(ids(&first), (2..=16).rev().collect::<Vec<_>>());
        assert!(
            first
                .windows(2)
                .all(|w| w[0].created_at() >= w[1].created_at())
        );

        let second = repo.list_page(PageRequest::new(2)).await.unwrap();
        assert_eq!(ids(&second), [1]);

        let third = repo.list_page(PageRequest::new(3)).await.unwrap();
        assert!(third.is_empty());
    }

    #[tokio::test]
    async fn test_equal_timestamps_break_ties_by_id() {
        let at = Utc.with_ymd_and_hms(2024, 3, 5, 14, 30, 0).unwrap();
        let repo = InMemoryPostRepository::with_posts(vec![
            Post::restore(PostId::new(1), "a".into(), String::new(), at),
            Post::restore(PostId::new(2), "b".into(), String::new(), at),
        ]);

        let page = repo.list_page(PageRequest::default()).await.unwrap();
        assert_eq!(ids(&page), [2, 1]);
    }

    #[tokio::test]
    async fn test_create_assigns_ids() {
        let repo = InMemoryPostRepository::with_posts(posts(2));

        let created = repo.create(NewPost::new("Third", "Body")).await.unwrap();
        assert_eq!(created.id(), PostId::new(3));

        let found = repo.find_by_id(PostId::new(3)).await.unwrap();
        assert_eq!(found, Some(created));
    }

    #[tokio::test]
    async fn test_empty_repository() {
        let repo = InMemoryPostRepository::new();
        assert!(repo.list_page(PageRequest::default()).await.unwrap().is_empty());
        assert!(repo.find_by_id(PostId::new(1)).await.unwrap().is_none());
    }

    #[tokio::test]
    async fn test_huge_page_number_is_empty() {
        let repo = InMemoryPostRepository::with_posts(posts(3));
        let page = repo.list_page(PageRequest::new(u64::MAX)).await.unwrap();
        assert!(page.is_empty());
    }
}
