use actix_web::{HttpResponse, web};
use rust_embed::Embed;

#[derive(Embed)]
#[folder = "public/"]
struct PublicAssets;

/// Entry page for the link dashboard.
pub async fn index() -> HttpResponse {
    serve_asset("index.html")
}

pub async fn static_asset(path: web::Path<String>) -> HttpResponse {
    serve_asset(&path.into_inner())
}

fn serve_asset(name: &str) -> HttpResponse {
    match PublicAssets::get(name) {
        Some(file) => HttpResponse::Ok()
            .content_type(content_type_for(name))
            .body(file.data.into_owned()),
        None => {
            log::debug!("No public asset named {}", name);
            HttpResponse::NotFound()
                .content_type("text/plain; charset=utf-8")
                .body("Not Found")
        }
    }
}

fn content_type_for(name: &str) -> &'static str {
    match name.rsplit('.').next().unwrap_or_default() {
        "html" => "text/html; charset=utf-8",
        "css" => "text/css; charset=utf-8",
        "js" => "application/javascript; charset=utf-8",
        "json" => "application/json",
        "svg" => "image/svg+xml",
        "png" => "image/png",
        "ico" => "image/x-icon",
        _ => "application/octet-stream",
    }
}
