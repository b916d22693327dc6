use actix_web::{HttpRequest, HttpResponse, Responder, get, patch, post, web};
use std::time::Duration;
use uuid::Uuid;

use sitebloom::content::SectionPayload;
use sitebloom::db;
use sitebloom::models::{PageCreate, SectionCreate, SiteCreate, SiteUpdate};
use sitebloom::services::TokenManager;
use sitebloom::starter;
use sitebloom::themes;

use crate::web::forms::{
    PageWithSections, SiteCreateRequest, SiteCreatedResponse, SiteDetailResponse,
    SiteUpdateRequest,
};
use crate::web::helpers::{
    client_ip, internal_error, page_error_response, require_site,
    section_error_response, site_error_response, validation_error,
};
use crate::web::security::validate_email;
use crate::web::state::AppState;

/// Onboarding: create the site, copy the chosen preset into its theme row,
/// seed the home page with starter sections, and hand the plaintext editor
/// token back exactly once.
#[post("/api/sites")]
pub async fn sites_create(
    state: web::Data<AppState>,
    req: HttpRequest,
    body: web::Json<SiteCreateRequest>,
) -> impl Responder {
    if !state.rate_limiter.check_rate_limit(
        &format!("site_create:{}", client_ip(&req)),
        10,
        Duration::from_secs(3600),
    ) {
        return HttpResponse::TooManyRequests().finish();
    }

    let name = body.name.trim().to_string();
    if name.is_empty() {
        return validation_error("name", "Site name is required");
    }

    let contact_email = body.contact_email.trim().to_string();
    if !validate_email(&contact_email) {
        return validation_error("contactEmail", "Invalid email address");
    }

    let token = TokenManager::generate();
    let token_hash = match TokenManager::hash_token(&token) {
        Ok(hash) => hash,
        Err(e) => {
            log::error!("Token hashing error: {}", e);
            return internal_error();
        }
    };

    let slug = match db::sites::allocate_site_slug(&state.pool, &name).await {
        Ok(slug) => slug,
        Err(e) => return site_error_response(e),
    };

    let site = match db::sites::create_site(
        &state.pool,
        &SiteCreate {
            name: name.clone(),
            slug,
            contact_email,
            goal: body.goal.clone().unwrap_or_default().trim().to_string(),
            theme_family: body.theme_family.trim().to_string(),
            token_hash,
        },
    )
    .await
    {
        Ok(site) => site,
        Err(e) => return site_error_response(e),
    };

    let preset = themes::find_preset(&site.theme_family);
    let theme_row = match db::sites::insert_site_theme(&state.pool, site.id, preset).await
    {
        Ok(theme) => theme,
        Err(e) => {
            log::error!("Failed to create theme for site {}: {}", site.id, e);
            return internal_error();
        }
    };

    let home = match db::pages::create_page(
        &state.pool,
        &PageCreate {
            site_id: site.id,
            title: "Home".to_string(),
            slug: "home".to_string(),
            position: 0,
            is_home: true,
            show_in_menu: true,
        },
    )
    .await
    {
        Ok(page) => page,
        Err(e) => return page_error_response(e),
    };

    let mut sections = Vec::new();
    for generated in
        starter::generate(&site.name, &site.theme_family, &body.selected_sections)
    {
        let created = match db::sections::create_section(
            &state.pool,
            &SectionCreate {
                page_id: home.id,
                kind: generated.kind.clone(),
                position: generated.position,
                data_json: SectionPayload::Legacy(generated.payload).to_json(),
            },
        )
        .await
        {
            Ok(section) => section,
            Err(e) => return section_error_response(e),
        };
        sections.push(created);
    }

    if let Err(e) = db::publish::init_publish_state(&state.pool, site.id).await {
        log::error!("Failed to init publish state for site {}: {}", site.id, e);
        return internal_error();
    }

    let theme = themes::resolve(&site.theme_family, Some(&theme_row));

    HttpResponse::Created().json(SiteCreatedResponse {
        site,
        token,
        theme,
        pages: vec![PageWithSections {
            page: home,
            sections,
        }],
    })
}

#[get("/api/sites/{id}")]
pub async fn sites_get(
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
    let theme = themes::resolve(&site.theme_family, theme_row.as_ref());

    let pages = match db::pages::list_pages(&state.pool, site.id).await {
        Ok(pages) => pages,
        Err(e) => {
            log::error!("Failed to list pages for site {}: {}", site.id, e);
            return internal_error();
        }
    };

    let mut tree = Vec::new();
    for page in pages {
        let sections = db::sections::list_sections(&state.pool, page.id)
            .await
            .unwrap_or_default();
        tree.push(PageWithSections { page, sections });
    }

    HttpResponse::Ok().json(SiteDetailResponse {
        site,
        theme,
        pages: tree,
    })
}

#[patch("/api/sites/{id}")]
pub async fn sites_update(
    state: web::Data<AppState>,
    req: HttpRequest,
    path: web::Path<Uuid>,
    body: web::Json<SiteUpdateRequest>,
) -> impl Responder {
    let site = match require_site(&state.pool, &req, path.into_inner()).await {
        Ok(site) => site,
        Err(resp) => return resp,
    };

    if let Some(name) = &body.name {
        if name.trim().is_empty() {
            return validation_error("name", "Site name cannot be empty");
        }
    }

    if let Some(email) = &body.contact_email {
        if !validate_email(email) {
            return validation_error("contactEmail", "Invalid email address");
        }
    }

    let update = SiteUpdate {
        name: body.name.as_ref().map(|s| s.trim().to_string()),
        contact_email: body.contact_email.as_ref().map(|s| s.trim().to_string()),
        goal: body.goal.clone(),
        theme_family: body.theme_family.as_ref().map(|s| s.trim().to_string()),
    };

    match db::sites::update_site(&state.pool, site.id, &update).await {
        Ok(updated) => HttpResponse::Ok().json(updated),
        Err(e) => site_error_response(e),
    }
}

pub fn configure(cfg: &mut web::ServiceConfig) {
    cfg.service(sites_create)
        .service(sites_get)
        .service(sites_update);
}
