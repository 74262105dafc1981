use actix_web::{HttpResponse, http, web};

use crate::errors::StoreError;
use crate::state::app_state::AppState;
use crate::store::LinkStore;
use crate::utils::location::encode_location;

const NOT_FOUND_PAGE: &str = "<h1>404 - Link Not Found</h1>";

/// Resolve a code, count the visit and send the client on its way.
pub async fn redirect_to_link(
    app_state: web::Data<AppState>,
    path: web::Path<String>,
) -> HttpResponse {
    let code = path.into_inner();

    match resolve_and_count(app_state.store.as_ref(), &code).await {
        Ok(Some(original_url)) => HttpResponse::Found()
            .append_header((http::header::LOCATION, encode_location(&original_url)))
            .finish(),
        Ok(None) => {
            log::warn!("Redirect requested for unknown code {}", code);
            HttpResponse::NotFound()
                .content_type("text/html; charset=utf-8")
                .body(NOT_FOUND_PAGE)
        }
        Err(e) => {
            log::error!("Redirect error for {}: {}", code, e);
            HttpResponse::InternalServerError()
                .content_type("text/plain; charset=utf-8")
                .body("Internal Server Error")
        }
    }
}

/// Looks the code up and, if it exists, bumps its counter by id.
async fn resolve_and_count(
    store: &dyn LinkStore,
    code: &str,
) -> Result<Option<String>, StoreError> {
    let Some(link) = store.find_by_code(code).await? else {
        return Ok(None);
    };

    let id = link
        .id
        .ok_or_else(|| StoreError::Corrupt(format!("link {} has no id", link.code)))?;
    store.record_click(&id).await?;

    Ok(Some(link.original_url))
}
