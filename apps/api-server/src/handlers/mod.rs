//! HTTP handlers and route configuration.

mod health;
mod posts;

use actix_web::web;

/// Configure all application routes.
pub fn configure_routes(cfg: &mut web::ServiceConfig) {
    cfg.app_data(posts::json_config()).service(
        web::scope("/api")
            .route("/health", web::get().to(health::health_check))
            // Single resource, dispatched on method
            .service(
                web::resource("/trpc/posts")
                    .route(web::get().to(posts::latest_post))
                    .route(web::post().to(posts::create_post))
                    .route(web::put().to(posts::update_post))
                    .route(web::delete().to(posts::delete_post))
                    .default_service(web::to(posts::method_not_allowed)),
            ),
    );
}
