use actix_web::HttpResponse;

pub const API_VERSION: &str = "1.0";

/// Liveness probe. Does not touch the database.
pub async fn healthz() -> HttpResponse {
    HttpResponse::Ok().json(serde_json::json!({ "ok": true, "version": API_VERSION }))
}

#[cfg(test)]
mod tests {
    use super::*;
    use actix_web::{App, test, web};

    #[actix_web::test]
    async fn reports_ok_and_version() {
        let app = test::init_service(App::new().route("/healthz", web::get().to(healthz))).await;
        let req = test::TestRequest::get().uri("/healthz").to_request();
        let body: serde_json::Value = test::call_and_read_body_json(&app, req).await;
        assert_eq!(body, serde_json::json!({ "ok": true, "version": "1.0" }));
    }
}
