use actix_web::{HttpRequest, HttpResponse, Responder, get, web};
use std::time::Duration;

use sitebloom::db;
use sitebloom::publish::Snapshot;

use crate::web::forms::PublicSiteResponse;
use crate::web::helpers::{client_ip, internal_error, not_found};
use crate::web::state::AppState;

/// Public serving path. Reads only the snapshot row; never joins back to
/// the live page/section tables. An unpublished site answers exactly like
/// a slug that matches nothing.
#[get("/api/public/{slug}")]
pub async fn public_site(
    state: web::Data<AppState>,
    req: HttpRequest,
    path: web::Path<String>,
) -> impl Responder {
    if !state.rate_limiter.check_rate_limit(
        &format!("public:{}", client_ip(&req)),
        120,
        Duration::from_secs(60),
    ) {
        return HttpResponse::TooManyRequests().finish();
    }

    let slug = path.into_inner();

    let publish_state = match db::publish::get_published_snapshot(&state.pool, &slug).await
    {
        Ok(Some(publish_state)) => publish_state,
        Ok(None) => return not_found(),
        Err(e) => {
            log::error!("Public lookup failed for {:?}: {}", slug, e);
            return internal_error();
        }
    };

    let Some(raw) = publish_state.snapshot_json.as_deref() else {
        // Published flag without a snapshot should not happen; serve 404
        // rather than a broken site.
        log::error!("Published site {} has no snapshot", publish_state.site_id);
        return not_found();
    };

    let snapshot = match Snapshot::from_json(raw) {
        Ok(snapshot) => snapshot,
        Err(e) => {
            log::error!(
                "Unreadable snapshot for site {}: {}",
                publish_state.site_id,
                e
            );
            return internal_error();
        }
    };

    HttpResponse::Ok().json(PublicSiteResponse {
        snapshot,
        published_at: publish_state.published_at,
    })
}

pub fn configure(cfg: &mut web::ServiceConfig) {
    cfg.service(public_site);
}
