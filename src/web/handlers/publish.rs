use actix_web::{HttpRequest, HttpResponse, Responder, post, web};
use uuid::Uuid;

use sitebloom::db;

use crate::web::forms::PublishResponse;
use crate::web::helpers::{publish_error_response, require_site};
use crate::web::state::AppState;

/// Freeze the live site into its snapshot and flip it public. Repeat
/// publishes replace the snapshot wholesale.
#[post("/api/sites/{id}/publish")]
pub async fn publish_site(
    state: web::Data<AppState>,
    req: HttpRequest,
    path: web::Path<Uuid>,
) -> impl Responder {
    let site = match require_site(&state.pool, &req, path.into_inner()).await {
        Ok(site) => site,
        Err(resp) => return resp,
    };

    match db::publish::publish_site(&state.pool, site.id).await {
        Ok(published) => HttpResponse::Ok().json(PublishResponse {
            is_published: published.is_published,
            published_at: published.published_at,
            public_url: format!("/api/public/{}", site.slug),
        }),
        Err(e) => publish_error_response(e),
    }
}

pub fn configure(cfg: &mut web::ServiceConfig) {
    cfg.service(publish_site);
}
