use actix_web::{HttpRequest, HttpResponse};
use serde_json::json;
use sqlx::PgPool;
use uuid::Uuid;

use sitebloom::common::{MediaError, PageError, PublishError, SectionError, SiteError};
use sitebloom::db;
use sitebloom::models::Site;
use sitebloom::ordering::{self, OrderChange, Ordered, OrderingError};
use sitebloom::services::TokenManager;
use crate::web::forms::ReorderRequest;

pub const TOKEN_HEADER: &str = "X-Site-Token";

pub fn not_found() -> HttpResponse {
    HttpResponse::NotFound().json(json!({ "error": "Not found" }))
}

pub fn bad_request(message: &str) -> HttpResponse {
    HttpResponse::BadRequest().json(json!({ "error": message }))
}

pub fn validation_error(field: &str, reason: &str) -> HttpResponse {
    HttpResponse::BadRequest().json(json!({ "error": reason, "field": field }))
}

pub fn unauthorized() -> HttpResponse {
    HttpResponse::Unauthorized().json(json!({ "error": "Invalid or missing site token" }))
}

pub fn internal_error() -> HttpResponse {
    HttpResponse::InternalServerError().json(json!({ "error": "Internal error" }))
}

pub fn bearer_token(req: &HttpRequest) -> Option<String> {
    req.headers()
        .get(TOKEN_HEADER)
        .and_then(|v| v.to_str().ok())
        .map(str::trim)
        .filter(|s| !s.is_empty())
        .map(str::to_string)
}

/// Load the site and verify the caller's bearer token against its stored
/// hash. Every editor operation goes through here.
pub async fn require_site(
    pool: &PgPool,
    req: &HttpRequest,
    site_id: Uuid,
) -> Result<Site, HttpResponse> {
    let site = match db::sites::get_site(pool, site_id).await {
        Ok(site) => site,
        Err(SiteError::NotFound(_)) => return Err(not_found()),
        Err(e) => {
            log::error!("Failed to load site {}: {}", site_id, e);
            return Err(internal_error());
        }
    };

    let token = bearer_token(req).ok_or_else(unauthorized)?;

    match TokenManager::verify_token(&token, &site.token_hash) {
        Ok(true) => Ok(site),
        Ok(false) => Err(unauthorized()),
        Err(e) => {
            log::error!("Token verification error for site {}: {}", site_id, e);
            Err(internal_error())
        }
    }
}

pub fn site_error_response(e: SiteError) -> HttpResponse {
    match e {
        SiteError::NotFound(_) => not_found(),
        SiteError::Validation { field, reason } => validation_error(field, &reason),
        SiteError::SlugExhausted(_) => {
            HttpResponse::Conflict().json(json!({ "error": e.to_string() }))
        }
        SiteError::Database(err) => {
            log::error!("Database error: {}", err);
            internal_error()
        }
    }
}

pub fn page_error_response(e: PageError) -> HttpResponse {
    match e {
        PageError::NotFound(_) => not_found(),
        PageError::Validation { field, reason } => validation_error(field, &reason),
        PageError::SlugExhausted(_) => {
            HttpResponse::Conflict().json(json!({ "error": e.to_string() }))
        }
        PageError::InvalidOperation(reason) => bad_request(&reason),
        PageError::Database(err) => {
            log::error!("Database error: {}", err);
            internal_error()
        }
    }
}

pub fn section_error_response(e: SectionError) -> HttpResponse {
    match e {
        SectionError::NotFound(_) => not_found(),
        SectionError::Validation { field, reason } => validation_error(field, &reason),
        SectionError::InvalidOperation(reason) => bad_request(&reason),
        SectionError::Database(err) => {
            log::error!("Database error: {}", err);
            internal_error()
        }
    }
}

pub fn publish_error_response(e: PublishError) -> HttpResponse {
    match e {
        PublishError::SiteNotFound(_) => not_found(),
        PublishError::Serialization(err) => {
            log::error!("Snapshot serialization error: {}", err);
            internal_error()
        }
        PublishError::Database(err) => {
            log::error!("Database error: {}", err);
            internal_error()
        }
    }
}

pub fn media_error_response(e: MediaError) -> HttpResponse {
    match e {
        MediaError::NotFound(_) => not_found(),
        MediaError::Validation { field, reason } => validation_error(field, &reason),
        MediaError::Storage(reason) => {
            log::error!("Storage error: {}", reason);
            internal_error()
        }
        MediaError::Database(err) => {
            log::error!("Database error: {}", err);
            internal_error()
        }
    }
}

/// Run the ordering engine for either reorder style. The request must
/// carry exactly one of `direction` (two-value swap) or `targetId` (drag
/// with full renumber).
pub fn compute_reorder(
    items: &[impl Ordered],
    moving_id: Uuid,
    request: &ReorderRequest,
) -> Result<Vec<OrderChange>, HttpResponse> {
    let changes = match (request.direction, request.target_id) {
        (Some(direction), None) => {
            ordering::shift(items, moving_id, direction).map(|pair| pair.to_vec())
        }
        (None, Some(target_id)) => ordering::drag(items, moving_id, target_id),
        _ => {
            return Err(bad_request(
                "Provide exactly one of direction or targetId",
            ))
        }
    };

    changes.map_err(|e| match e {
        OrderingError::InvalidMove => bad_request("Invalid move"),
        OrderingError::UnknownItem(_) => not_found(),
    })
}

pub fn client_ip(req: &HttpRequest) -> String {
    req.connection_info()
        .realip_remote_addr()
        .unwrap_or("unknown")
        .to_string()
}
