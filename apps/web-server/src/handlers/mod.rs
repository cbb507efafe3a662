//! HTTP handlers and route configuration.

mod health;
mod posts;

use actix_web::web;

/// Configure all application routes.
pub fn configure_routes(cfg: &mut web::ServiceConfig) {
    cfg.route("/", web::get().to(posts::index))
        .service(
            web::scope("/posts")
                .route("", web::get().to(posts::index))
                .route("/more", web::get().to(posts::index_with_button))
                .route("/{id}", web::get().to(posts::show)),
        )
        .service(web::scope("/api").route("/health", web::get().to(health::health_check)));
}
