//! Askama views and JSON projections of posts.

use actix_web::http::StatusCode;
use actix_web::http::header::ContentType;
use actix_web::HttpResponse;
use askama::Template;

use blog_core::Page;
use blog_core::domain::Post;
use blog_shared::dto::{PostListResponse, PostResponse};

/// Full listing page.
#[derive(Template)]
#[template(path = "posts/index.html")]
pub struct IndexTemplate<'a> {
    pub posts: &'a [Post],
    pub page: u64,
    pub next_page: Option<u64>,
    /// Render a "load more" button instead of page links.
    pub with_button: bool,
    pub listing_path: &'a str,
}

/// Listing rows only, appended to an already loaded listing.
#[derive(Template)]
#[template(path = "posts/_rows.html")]
pub struct RowsFragment<'a> {
    pub posts: &'a [Post],
}

/// Single post page, or its "not found" state.
#[derive(Template)]
#[template(path = "posts/show.html")]
pub struct ShowTemplate<'a> {
    pub post: Option<&'a Post>,
}

/// A single post row.
#[derive(Template)]
#[template(path = "posts/_post.html")]
pub struct PostFragment<'a> {
    pub post: &'a Post,
}

/// HTML response with the given status.
pub fn html(status: StatusCode, body: String) -> HttpResponse {
    HttpResponse::build(status)
        .content_type(ContentType::html())
        .body(body)
}

pub fn post_response(post: &Post) -> PostResponse {
    PostResponse {
        id: post.id().value(),
        title: post.title().to_string(),
        body: post.body().to_string(),
        created_at: post.created_at().to_rfc3339(),
        timestamp: post.timestamp(),
    }
}

pub fn list_response(page: &Page<Post>) -> PostListResponse {
    PostListResponse {
        posts: page.items.iter().map(post_response).collect(),
        page: page.number,
        per_page: page.per_page,
        next_page: page.next_number(),
    }
}
