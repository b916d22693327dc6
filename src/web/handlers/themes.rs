use actix_web::{HttpRequest, HttpResponse, Responder, get, patch, web};
use uuid::Uuid;

use sitebloom::db;
use sitebloom::models::SiteThemeUpdate;
use sitebloom::themes;

use crate::web::helpers::{require_site, site_error_response, validation_error};
use crate::web::security::validate_hex_color;
use crate::web::state::AppState;

#[get("/api/themes")]
pub async fn themes_list() -> impl Responder {
    HttpResponse::Ok().json(themes::catalog())
}

/// Resolve a family with no site override, for onboarding previews.
/// Unknown families fall back to the default preset rather than erroring.
#[get("/api/themes/{family}")]
pub async fn theme_preview(path: web::Path<String>) -> impl Responder {
    HttpResponse::Ok().json(themes::resolve(&path.into_inner(), None))
}

#[get("/api/sites/{id}/theme")]
pub async fn theme_get(
    state: web::Data<AppState>,
    req: HttpRequest,
    path: web::Path<Uuid>,
) -> impl Responder {
    let site = match require_site(&state.pool, &req, path.into_inner()).await {
        Ok(site) => site,
        Err(resp) => return resp,
    };

    let theme_row = db::sites::get_site_theme(&state.pool, site.id)
        .await
        .ok()
        .flatten();

    HttpResponse::Ok().json(themes::resolve(&site.theme_family, theme_row.as_ref()))
}

/// Field-by-field theme edit. Only fields present in the request change;
/// switching the family elsewhere never clears these overrides.
#[patch("/api/sites/{id}/theme")]
pub async fn theme_update(
    state: web::Data<AppState>,
    req: HttpRequest,
    path: web::Path<Uuid>,
    body: web::Json<SiteThemeUpdate>,
) -> impl Responder {
    let site = match require_site(&state.pool, &req, path.into_inner()).await {
        Ok(site) => site,
        Err(resp) => return resp,
    };

    let update = body.into_inner();

    let colors = [
        ("primaryColor", &update.primary_color),
        ("secondaryColor", &update.secondary_color),
        ("accentColor", &update.accent_color),
        ("backgroundColor", &update.background_color),
        ("textColor", &update.text_color),
        ("mutedColor", &update.muted_color),
    ];

    for (field, value) in colors {
        if let Some(color) = value {
            if !validate_hex_color(color) {
                return validation_error(field, "Expected a hex color like #1a2b3c");
            }
        }
    }

    if update.is_empty() {
        return validation_error("theme", "No fields provided");
    }

    match db::sites::update_site_theme(&state.pool, site.id, &update).await {
        Ok(theme_row) => HttpResponse::Ok()
            .json(themes::resolve(&site.theme_family, Some(&theme_row))),
        Err(e) => site_error_response(e),
    }
}

pub fn configure(cfg: &mut web::ServiceConfig) {
    cfg.service(themes_list)
        .service(theme_preview)
        .service(theme_get)
        .service(theme_update);
}
