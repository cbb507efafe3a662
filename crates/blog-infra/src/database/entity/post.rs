//! Post entity for SeaORM.

use sea_orm::entity::prelude::*;
use sea_orm::{NotSet, Set};

use blog_core::domain::{NewPost, Post, PostId};

#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel)]
#[sea_orm(table_name = "posts")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i64,
    pub title: String,
    #[sea_orm(column_type = "Text")]
    pub body: String,
    pub created_at: DateTimeWithTimeZone,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {}

impl ActiveModelBehavior for ActiveModel {}

/// Conversion from SeaORM Model to Domain Post.
impl From<Model> for Post {
    fn from(model: Model) -> Self {
        Post::restore(
            PostId::new(model.id),
            model.title,
            model.body,
            model.created_at.into(),
        )
    }
}

/// Only the allow-listed fields are set; the database assigns the id.
impl From<NewPost> for ActiveModel {
    fn from(new_post: NewPost) -> Self {
        Self {
            id: NotSet,
            title: Set(new_post.title),
            body: Set(new_post.body),
            created_at: Set(chrono::Utc::now().into()),
        }
    }
}
