use actix_web::web;

use crate::errors::ApiError;
use crate::handlers::health_handlers::healthz;
use crate::handlers::link_handlers::{create_link, delete_link, get_all_links, get_link};
use crate::handlers::page_handlers::{index, static_asset};
use crate::handlers::redirect_handlers::redirect_to_link;

/// Configure the routes
pub fn init_routes(cfg: &mut web::ServiceConfig) {
    cfg.route("/", web::get().to(index));
    cfg.route("/healthz", web::get().to(healthz));
    cfg.service(
        web::scope("/api/links")
            .route("", web::post().to(create_link))
            .route("", web::get().to(get_all_links))
            .route("/{code}", web::get().to(get_link))
            .route("/{code}", web::delete().to(delete_link)),
    );
    // Asset names always carry an extension and codes are purely
    // alphanumeric, so this must come before the catch-all redirect.
    cfg.route(
        "/{asset:[^/]+\\.[A-Za-z0-9]+}",
        web::get().to(static_asset),
    );
    cfg.route("/{code}", web::get().to(redirect_to_link));
}

/// JSON extractor config that reports bad bodies in the `{error}` envelope.
pub fn json_config() -> web::JsonConfig {
    web::JsonConfig::default().error_handler(|err, _req| {
        log::debug!("Rejected JSON body: {}", err);
        ApiError::Validation(err.to_string()).into()
    })
}
