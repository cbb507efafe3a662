//! Post listing and post page handlers.
//!
//! Every listing variant goes through [`fetch_listing`]; they differ only in
//! how the result is rendered.

use actix_web::http::StatusCode;
use actix_web::http::header::{HeaderName, HeaderValue};
use actix_web::{HttpResponse, web};
use askama::Template;
use serde::Deserialize;

use blog_core::domain::Post;
use blog_core::{Page, PageRequest};
use blog_shared::{ApiResponse, ErrorResponse};

use crate::middleware::error::AppResult;
use crate::negotiate::ResponseShape;
use crate::observability::RequestId;
use crate::state::AppState;
use crate::views::{self, IndexTemplate, PostFragment, RowsFragment, ShowTemplate};

/// Header telling fragment clients which page to ask for next.
pub static NEXT_PAGE_HEADER: &str = "x-next-page";

/// Query parameters of the listing pages.
///
/// `page` is kept raw so malformed values fall back to the first page
/// instead of failing extraction.
#[derive(Debug, Default, Deserialize)]
pub struct ListingQuery {
    pub page: Option<String>,
}

/// Layout of the full listing document.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Listing {
    Paged,
    WithButton,
}

impl Listing {
    fn path(self) -> &'static str {
        match self {
            Listing::Paged => "/posts",
            Listing::WithButton => "/posts/more",
        }
    }
}

/// GET /posts
pub async fn index(
    state: web::Data<AppState>,
    query: web::Query<ListingQuery>,
    shape: ResponseShape,
) -> AppResult<HttpResponse> {
    render_listing(&state, &query, shape, Listing::Paged).await
}

/// GET /posts/more
pub async fn index_with_button(
    state: web::Data<AppState>,
    query: web::Query<ListingQuery>,
    shape: ResponseShape,
) -> AppResult<HttpResponse> {
    render_listing(&state, &query, shape, Listing::WithButton).await
}

/// GET /posts/{id}
pub async fn show(
    state: web::Data<AppState>,
    path: web::Path<String>,
    shape: ResponseShape,
    request_id: RequestId,
) -> AppResult<HttpResponse> {
    let raw_id = path.into_inner();
    let post = state.posts.find(&raw_id).await?;

    if post.is_none() {
        tracing::debug!(post_id = %raw_id, "Post not found");
    }

    match (shape, post) {
        (ResponseShape::Json, Some(post)) => {
            Ok(HttpResponse::Ok().json(ApiResponse::ok(views::post_response(&post))))
        }
        (ResponseShape::Json, None) => Ok(HttpResponse::NotFound().json(
            ErrorResponse::not_found(format!("Post {} not found", raw_id))
                .with_request_id(request_id.as_str()),
        )),
        (ResponseShape::Fragment, Some(post)) => {
            let body = PostFragment { post: &post }.render()?;
            Ok(views::html(StatusCode::OK, body))
        }
        (_, post) => {
            let status = if post.is_some() {
                StatusCode::OK
            } else {
                StatusCode::NOT_FOUND
            };
            let body = ShowTemplate {
                post: post.as_ref(),
            }
            .render()?;
            Ok(views::html(status, body))
        }
    }
}

/// Fetch the requested page of posts, newest first.
async fn fetch_listing(state: &AppState, query: &ListingQuery) -> AppResult<Page<Post>> {
    let request = PageRequest::from_param(query.page.as_deref());
    let page = state.posts.list_page(request).await?;

    tracing::debug!(
        page = page.number,
        count = page.items.len(),
        "Fetched post listing"
    );
    Ok(page)
}

async fn render_listing(
    state: &AppState,
    query: &ListingQuery,
    shape: ResponseShape,
    listing: Listing,
) -> AppResult<HttpResponse> {
    let page = fetch_listing(state, query).await?;

    match shape {
        ResponseShape::Document => {
            let body = IndexTemplate {
                posts: &page.items,
                page: page.number,
                next_page: page.next_number(),
                with_button: listing == Listing::WithButton,
                listing_path: listing.path(),
            }
            .render()?;
            Ok(views::html(StatusCode::OK, body))
        }
        ResponseShape::Fragment => {
            let body = RowsFragment { posts: &page.items }.render()?;
            let mut response = views::html(StatusCode::OK, body);
            if let Some(next) = page.next_number() {
                response.headers_mut().insert(
                    HeaderName::from_static(NEXT_PAGE_HEADER),
                    HeaderValue::from(next),
                );
            }
            Ok(response)
        }
        ResponseShape::Json => {
            Ok(HttpResponse::Ok().json(ApiResponse::ok(views::list_response(&page))))
        }
    }
}
