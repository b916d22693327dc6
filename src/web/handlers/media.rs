use actix_web::{HttpRequest, HttpResponse, Responder, delete, get, post, web};
use uuid::Uuid;

use sitebloom::common::MediaError;
use sitebloom::db;
use sitebloom::models::{MediaCreate, MediaType};
use sitebloom::services::unique_filename;

use crate::web::forms::MediaUploadQuery;
use crate::web::helpers::{
    internal_error, media_error_response, require_site, validation_error,
};
use crate::web::state::AppState;

/// Raw-body upload. The blob is written first; the record is only created
/// once the write succeeded, so a record always points at a real file.
#[post("/api/sites/{id}/media")]
pub async fn media_upload(
    state: web::Data<AppState>,
    req: HttpRequest,
    path: web::Path<Uuid>,
    query: web::Query<MediaUploadQuery>,
    body: web::Bytes,
) -> impl Responder {
    let site = match require_site(&state.pool, &req, path.into_inner()).await {
        Ok(site) => site,
        Err(resp) => return resp,
    };

    let mime_type = req
        .headers()
        .get("Content-Type")
        .and_then(|v| v.to_str().ok())
        .unwrap_or_default()
        .to_string();

    let Some(kind) = MediaType::from_mime(&mime_type) else {
        return validation_error(
            "contentType",
            "Only image, video, and audio uploads are supported",
        );
    };

    if body.is_empty() {
        return validation_error("body", "Upload is empty");
    }

    let filename = unique_filename(&query.filename);

    let url = match state.blob_store.write(&filename, &body) {
        Ok(url) => url,
        Err(e) => {
            return media_error_response(MediaError::Storage(e.to_string()));
        }
    };

    match db::media::create_media(
        &state.pool,
        &MediaCreate {
            site_id: site.id,
            kind,
            filename,
            url,
            mime_type,
            size_bytes: body.len() as i64,
        },
    )
    .await
    {
        Ok(media) => HttpResponse::Created().json(media),
        Err(e) => media_error_response(e),
    }
}

#[get("/api/sites/{id}/media")]
pub async fn media_list(
    state: web::Data<AppState>,
    req: HttpRequest,
    path: web::Path<Uuid>,
) -> impl Responder {
    let site = match require_site(&state.pool, &req, path.into_inner()).await {
        Ok(site) => site,
        Err(resp) => return resp,
    };

    match db::media::list_media(&state.pool, site.id).await {
        Ok(media) => HttpResponse::Ok().json(media),
        Err(e) => {
            log::error!("Failed to list media for site {}: {}", site.id, e);
            internal_error()
        }
    }
}

/// The record goes unconditionally; the file delete is best-effort since
/// the database is the source of truth for what exists.
#[delete("/api/media/{id}")]
pub async fn media_delete(
    state: web::Data<AppState>,
    req: HttpRequest,
    path: web::Path<Uuid>,
) -> impl Responder {
    let media = match db::media::get_media(&state.pool, path.into_inner()).await {
        Ok(media) => media,
        Err(e) => return media_error_response(e),
    };

    if let Err(resp) = require_site(&state.pool, &req, media.site_id).await {
        return resp;
    }

    let deleted = match db::media::delete_media(&state.pool, media.id).await {
        Ok(deleted) => deleted,
        Err(e) => return media_error_response(e),
    };

    if let Err(e) = state.blob_store.delete(&deleted.filename) {
        log::warn!(
            "Failed to remove blob {:?} for media {}: {}",
            deleted.filename,
            deleted.id,
            e
        );
    }

    HttpResponse::NoContent().finish()
}

pub fn configure(cfg: &mut web::ServiceConfig) {
    cfg.service(media_upload)
        .service(media_list)
        .service(media_delete);
}
