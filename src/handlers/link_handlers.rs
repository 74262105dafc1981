use actix_web::{HttpResponse, web};
use validator::Validate;

use crate::errors::ApiError;
use crate::models::link::Link;
use crate::state::app_state::AppState;
use crate::structs::link_request::{
    CreateLinkRequest, LinkResponse, MessageResponse, validation_message,
};
use crate::utils::code_gen::generate_code;

/// Create a link, generating a code when none is supplied
pub async fn create_link(
    app_state: web::Data<AppState>,
    web::Json(req): web::Json<CreateLinkRequest>,
) -> Result<HttpResponse, ApiError> {
    if let Err(errors) = req.validate() {
        return Err(ApiError::Validation(validation_message(&errors)));
    }

    let (url, code) = req.into_parts();
    let code = code.unwrap_or_else(generate_code);

    // Duplicates are caught by the unique index, not by a lookup first.
    let link = app_state.store.insert(Link::new(code, url)).await?;
    log::info!("Created link {} -> {}", link.code, link.original_url);

    Ok(HttpResponse::Created().json(LinkResponse::from(link)))
}

pub async fn get_all_links(app_state: web::Data<AppState>) -> Result<HttpResponse, ApiError> {
    let links: Vec<LinkResponse> = app_state
        .store
        .list()
        .await?
        .into_iter()
        .map(LinkResponse::from)
        .collect();

    Ok(HttpResponse::Ok().json(links))
}

pub async fn get_link(
    app_state: web::Data<AppState>,
    path: web::Path<String>,
) -> Result<HttpResponse, ApiError> {
    let code = path.into_inner();
    let link = app_state
        .store
        .find_by_code(&code)
        .await?
        .ok_or(ApiError::NotFound)?;

    Ok(HttpResponse::Ok().json(LinkResponse::from(link)))
}

pub async fn delete_link(
    app_state: web::Data<AppState>,
    path: web::Path<String>,
) -> Result<HttpResponse, ApiError> {
    let code = path.into_inner();
    let deleted = app_state
        .store
        .delete_by_code(&code)
        .await?
        .ok_or(ApiError::NotFound)?;
    log::info!("Deleted link {} ({} clicks)", deleted.code, deleted.clicks);

    Ok(HttpResponse::Ok().json(MessageResponse {
        message: "Deleted successfully".to_string(),
    }))
}
