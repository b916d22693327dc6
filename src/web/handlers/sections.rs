use actix_web::{HttpRequest, HttpResponse, Responder, delete, patch, post, web};
use uuid::Uuid;

use sitebloom::content::{default_payload, SectionPayload};
use sitebloom::db;
use sitebloom::log_err;
use sitebloom::models::{Section, SectionCreate, Site};

use crate::web::forms::{
    BlocksUpdateRequest, ReorderRequest, ReorderResponse, SectionCreateRequest,
    SectionStylesRequest,
};
use crate::web::helpers::{
    compute_reorder, internal_error, page_error_response, require_site,
    section_error_response,
};
use crate::web::state::AppState;

/// Resolve a section up through its page to the owning site, enforcing the
/// token on the way.
async fn require_section(
    state: &AppState,
    req: &HttpRequest,
    section_id: Uuid,
) -> Result<(Section, Site), HttpResponse> {
    let section = db::sections::get_section(&state.pool, section_id)
        .await
        .map_err(section_error_response)?;

    let page = db::pages::get_page(&state.pool, section.page_id)
        .await
        .map_err(page_error_response)?;

    let site = require_site(&state.pool, req, page.site_id).await?;

    Ok((section, site))
}

/// Parse a stored payload, logging malformed ones (console and the
/// error_logs table) before falling back to empty. The visitor never sees
/// the failure.
fn load_payload(state: &AppState, section: &Section) -> SectionPayload {
    match SectionPayload::parse(&section.data_json) {
        Ok(payload) => payload,
        Err(e) => {
            log::warn!(
                "Malformed payload on section {}: {}; treating as empty",
                section.id,
                e
            );
            log_err!(state.pool, section.id);
            SectionPayload::default()
        }
    }
}

#[post("/api/pages/{id}/sections")]
pub async fn sections_create(
    state: web::Data<AppState>,
    req: HttpRequest,
    path: web::Path<Uuid>,
    body: web::Json<SectionCreateRequest>,
) -> impl Responder {
    let page = match db::pages::get_page(&state.pool, path.into_inner()).await {
        Ok(page) => page,
        Err(e) => return page_error_response(e),
    };

    let site = match require_site(&state.pool, &req, page.site_id).await {
        Ok(site) => site,
        Err(resp) => return resp,
    };

    let position = match db::sections::next_position(&state.pool, page.id).await {
        Ok(position) => position,
        Err(e) => {
            log::error!("Failed to compute section position: {}", e);
            return internal_error();
        }
    };

    let payload = default_payload(&body.kind, &site.name);

    match db::sections::create_section(
        &state.pool,
        &SectionCreate {
            page_id: page.id,
            kind: body.kind.clone(),
            position,
            data_json: SectionPayload::Legacy(payload).to_json(),
        },
    )
    .await
    {
        Ok(section) => HttpResponse::Created().json(section),
        Err(e) => section_error_response(e),
    }
}

/// Replace the block list wholesale. Styles, layout extensions, and
/// unknown payload keys are preserved; this save also makes a read-time
/// migration of a legacy payload permanent.
#[patch("/api/sections/{id}")]
pub async fn sections_update(
    state: web::Data<AppState>,
    req: HttpRequest,
    path: web::Path<Uuid>,
    body: web::Json<BlocksUpdateRequest>,
) -> impl Responder {
    let (section, _site) =
        match require_section(&state, &req, path.into_inner()).await {
            Ok(found) => found,
            Err(resp) => return resp,
        };

    let payload = load_payload(&state, &section);
    let merged = payload.with_blocks(body.into_inner().blocks);
    let data_json = SectionPayload::Migrated(merged).to_json();

    match db::sections::update_section_data(&state.pool, section.id, &data_json).await {
        Ok(updated) => HttpResponse::Ok().json(updated),
        Err(e) => section_error_response(e),
    }
}

/// Update only the per-section style override layer.
#[patch("/api/sections/{id}/styles")]
pub async fn sections_update_styles(
    state: web::Data<AppState>,
    req: HttpRequest,
    path: web::Path<Uuid>,
    body: web::Json<SectionStylesRequest>,
) -> impl Responder {
    let (section, _site) =
        match require_section(&state, &req, path.into_inner()).await {
            Ok(found) => found,
            Err(resp) => return resp,
        };

    let payload = load_payload(&state, &section);
    let data_json = payload
        .with_section_styles(body.into_inner().styles)
        .to_json();

    match db::sections::update_section_data(&state.pool, section.id, &data_json).await {
        Ok(updated) => HttpResponse::Ok().json(updated),
        Err(e) => section_error_response(e),
    }
}

#[delete("/api/sections/{id}")]
pub async fn sections_delete(
    state: web::Data<AppState>,
    req: HttpRequest,
    path: web::Path<Uuid>,
) -> impl Responder {
    let (section, _site) =
        match require_section(&state, &req, path.into_inner()).await {
            Ok(found) => found,
            Err(resp) => return resp,
        };

    match db::sections::delete_section(&state.pool, section.id).await {
        Ok(()) => HttpResponse::NoContent().finish(),
        Err(e) => section_error_response(e),
    }
}

/// Reorder within the owning page's section list.
#[post("/api/sections/{id}/reorder")]
pub async fn sections_reorder(
    state: web::Data<AppState>,
    req: HttpRequest,
    path: web::Path<Uuid>,
    body: web::Json<ReorderRequest>,
) -> impl Responder {
    let (section, _site) =
        match require_section(&state, &req, path.into_inner()).await {
            Ok(found) => found,
            Err(resp) => return resp,
        };

    let siblings = match db::sections::list_sections(&state.pool, section.page_id).await
    {
        Ok(sections) => sections,
        Err(e) => {
            log::error!("Failed to list sections for reorder: {}", e);
            return internal_error();
        }
    };

    let changes = match compute_reorder(&siblings, section.id, &body) {
        Ok(changes) => changes,
        Err(resp) => return resp,
    };

    if let Err(e) = db::sections::apply_reorder(&state.pool, &changes).await {
        log::error!("Failed to persist section reorder: {}", e);
        return internal_error();
    }

    HttpResponse::Ok().json(ReorderResponse { changes })
}

pub fn configure(cfg: &mut web::ServiceConfig) {
    cfg.service(sections_create)
        .service(sections_update)
        .service(sections_update_styles)
        .service(sections_delete)
        .service(sections_reorder);
}
