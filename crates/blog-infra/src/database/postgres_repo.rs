//! PostgreSQL repository implementation.

use std::sync::Arc;

use async_trait::async_trait;
use sea_orm::{ActiveModelTrait, DbConn, DbErr, EntityTrait, PaginatorTrait, QueryOrder};

use blog_core::domain::{NewPost, Post, PostId};
use blog_core::error::RepoError;
use blog_core::pagination::PageRequest;
use blog_core::ports::PostRepository;

use super::entity::post::{self, Entity as PostEntity};

/// PostgreSQL post repository.
pub struct PostgresPostRepository {
    pub(crate) db: Arc<DbConn>,
}

impl PostgresPostRepository {
    pub fn new(db: impl Into<Arc<DbConn>>) -> Self {
        Self { db: db.into() }
    }
}

/// Lost or unobtainable connections are reported apart from failed queries.
fn map_db_err(err: DbErr) -> RepoError {
    match err {
        DbErr::Conn(e) => RepoError::Connection(e.to_string()),
        DbErr::ConnectionAcquire(e) => RepoError::Connection(e.to_string()),
        other => RepoError::Query(other.to_string()),
    }
}

#[async_trait]
impl PostRepository for PostgresPostRepository {
    async fn list_page(&self, request: PageRequest) -> Result<Vec<Post>, RepoError> {
        tracing::debug!(
            page = request.number(),
            per_page = request.per_page(),
            "Listing posts"
        );

        let models = PostEntity::find()
            .order_by_desc(post::Column::CreatedAt)
            .order_by_desc(post::Column::Id)
            .paginate(self.db.as_ref(), request.per_page())
            .fetch_page(request.number() - 1)
            .await
            .map_err(map_db_err)?;

        Ok(models.into_iter().map(Into::into).collect())
    }

    async fn find_by_id(&self, id: PostId) -> Result<Option<Post>, RepoError> {
        tracing::debug!(post_id = %id, "Finding post by id");

        let result = PostEntity::find_by_id(id.value())
            .one(self.db.as_ref())
            .await
            .map_err(map_db_err)?;

        Ok(result.map(Into::into))
    }

    async fn create(&self, new_post: NewPost) -> Result<Post, RepoError> {
        let active_model: post::ActiveModel = new_post.into();
        let model = active_model.insert(self.db.as_ref()).await.map_err(map_db_err)?;

        tracing::debug!(post_id = model.id, "Post created");
        Ok(model.into())
    }
}
