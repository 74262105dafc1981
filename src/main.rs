mod config;
mod db;
mod errors;
mod handlers;
mod models;
mod routes;
mod state;
mod store;
mod structs;
mod utils;

use std::sync::Arc;

use crate::config::Settings;
use crate::state::app_state::AppState;
use actix_cors::Cors;
use actix_web::{App, HttpServer, http, middleware::Logger, web};
use db::mongodb::get_link_store;
use dotenv::dotenv;
use env_logger::Env;
use routes::{init_routes, json_config};

#[actix_web::main]
async fn main() -> anyhow::Result<()> {
    dotenv().ok();
    env_logger::init_from_env(Env::default().default_filter_or("info"));

    let settings = Settings::from_env()?;

    // Initialize the database connection
    let store = get_link_store(&settings).await?;
    let app_state = web::Data::new(AppState::new(Arc::new(store)));
    let cors_origins = settings.cors_allowed_origins.clone();

    log::info!(
        "Server running on http://{}:{}",
        settings.bind_address,
        settings.port
    );

    HttpServer::new(move || {
        let logger = Logger::new("%a \"%r\" %s %b \"%{Referer}i\" \"%{User-Agent}i\" %D ms");
        App::new()
            .wrap(logger)
            .wrap(build_cors(&cors_origins))
            .app_data(app_state.clone())
            .app_data(json_config())
            .configure(init_routes)
    })
    .bind((settings.bind_address.as_str(), settings.port))?
    .run()
    .await?;

    Ok(())
}

/// Any origin when none are configured, otherwise only the listed ones.
fn build_cors(origins: &[String]) -> Cors {
    let cors = Cors::default()
        .allowed_methods(vec!["GET", "POST", "DELETE"])
        .allowed_headers(vec![http::header::ACCEPT, http::header::CONTENT_TYPE])
        .max_age(3600);

    if origins.is_empty() {
        return cors.allow_any_origin();
    }
    origins
        .iter()
        .fold(cors, |cors, origin| cors.allowed_origin(origin))
}
