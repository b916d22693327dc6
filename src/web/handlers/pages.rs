use actix_web::{HttpRequest, HttpResponse, Responder, delete, patch, post, web};
use uuid::Uuid;

use sitebloom::db;
use sitebloom::models::{PageCreate, PageUpdate};

use crate::web::forms::{
    PageCreateRequest, PageUpdateRequest, ReorderRequest, ReorderResponse,
};
use crate::web::helpers::{
    compute_reorder, internal_error, page_error_response, require_site,
    validation_error,
};
use crate::web::state::AppState;

#[post("/api/sites/{id}/pages")]
pub async fn pages_create(
    state: web::Data<AppState>,
    req: HttpRequest,
    path: web::Path<Uuid>,
    body: web::Json<PageCreateRequest>,
) -> impl Responder {
    let site = match require_site(&state.pool, &req, path.into_inner()).await {
        Ok(site) => site,
        Err(resp) => return resp,
    };

    let title = body.title.trim().to_string();
    if title.is_empty() {
        return validation_error("title", "Page title is required");
    }

    let slug = match db::pages::allocate_page_slug(&state.pool, site.id, &title).await {
        Ok(slug) => slug,
        Err(e) => return page_error_response(e),
    };

    let position = match db::pages::next_position(&state.pool, site.id).await {
        Ok(position) => position,
        Err(e) => {
            log::error!("Failed to compute page position: {}", e);
            return internal_error();
        }
    };

    match db::pages::create_page(
        &state.pool,
        &PageCreate {
            site_id: site.id,
            title,
            slug,
            position,
            is_home: false,
            show_in_menu: body.show_in_menu.unwrap_or(true),
        },
    )
    .await
    {
        Ok(page) => HttpResponse::Created().json(page),
        Err(e) => page_error_response(e),
    }
}

#[patch("/api/pages/{id}")]
pub async fn pages_update(
    state: web::Data<AppState>,
    req: HttpRequest,
    path: web::Path<Uuid>,
    body: web::Json<PageUpdateRequest>,
) -> impl Responder {
    let page = match db::pages::get_page(&state.pool, path.into_inner()).await {
        Ok(page) => page,
        Err(e) => return page_error_response(e),
    };

    if let Err(resp) = require_site(&state.pool, &req, page.site_id).await {
        return resp;
    }

    if let Some(title) = &body.title {
        if title.trim().is_empty() {
            return validation_error("title", "Page title cannot be empty");
        }
    }

    let update = PageUpdate {
        title: body.title.as_ref().map(|s| s.trim().to_string()),
        is_home: body.is_home,
        show_in_menu: body.show_in_menu,
    };

    match db::pages::update_page(&state.pool, page.id, &update).await {
        Ok(updated) => HttpResponse::Ok().json(updated),
        Err(e) => page_error_response(e),
    }
}

#[delete("/api/pages/{id}")]
pub async fn pages_delete(
    state: web::Data<AppState>,
    req: HttpRequest,
    path: web::Path<Uuid>,
) -> impl Responder {
    let page = match db::pages::get_page(&state.pool, path.into_inner()).await {
        Ok(page) => page,
        Err(e) => return page_error_response(e),
    };

    if let Err(resp) = require_site(&state.pool, &req, page.site_id).await {
        return resp;
    }

    match db::pages::delete_page(&state.pool, page.id).await {
        Ok(()) => HttpResponse::NoContent().finish(),
        Err(e) => page_error_response(e),
    }
}

/// Reorder within the owning site's page list. The engine's output pairs
/// are persisted in one transaction and echoed back to the caller.
#[post("/api/pages/{id}/reorder")]
pub async fn pages_reorder(
    state: web::Data<AppState>,
    req: HttpRequest,
    path: web::Path<Uuid>,
    body: web::Json<ReorderRequest>,
) -> impl Responder {
    let page = match db::pages::get_page(&state.pool, path.into_inner()).await {
        Ok(page) => page,
        Err(e) => return page_error_response(e),
    };

    if let Err(resp) = require_site(&state.pool, &req, page.site_id).await {
        return resp;
    }

    let siblings = match db::pages::list_pages(&state.pool, page.site_id).await {
        Ok(pages) => pages,
        Err(e) => {
            log::error!("Failed to list pages for reorder: {}", e);
            return internal_error();
        }
    };

    let changes = match compute_reorder(&siblings, page.id, &body) {
        Ok(changes) => changes,
        Err(resp) => return resp,
    };

    if let Err(e) = db::pages::apply_reorder(&state.pool, &changes).await {
        log::error!("Failed to persist page reorder: {}", e);
        return internal_error();
    }

    HttpResponse::Ok().json(ReorderResponse { changes })
}

pub fn configure(cfg: &mut web::ServiceConfig) {
    cfg.service(pages_create)
        .service(pages_update)
        .service(pages_delete)
        .service(pages_reorder);
}
