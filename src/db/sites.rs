use sqlx::PgPool;
use uuid::Uuid;

use crate::common::SiteError;
use crate::models::{Site, SiteCreate, SiteTheme, SiteThemeUpdate, SiteUpdate};
use crate::services::slugs;
use crate::themes::ThemePreset;

const SLUG_ATTEMPTS: usize = 50;

pub async fn create_site(pool: &PgPool, data: &SiteCreate) -> Result<Site, SiteError> {
    let result = sqlx::query_as::<_, Site>(
        r#"
        INSERT INTO sites (name, slug, contact_email, goal, theme_family, token_hash)
        VALUES ($1, $2, $3, $4, $5, $6)
        RETURNING *
        "#,
    )
    .bind(&data.name)
    .bind(&data.slug)
    .bind(&data.contact_email)
    .bind(&data.goal)
    .bind(&data.theme_family)
    .bind(&data.token_hash)
    .fetch_one(pool)
    .await;

    match result {
        Ok(site) => Ok(site),
        // Lost the check-then-insert race on the slug.
        Err(e) if super::is_unique_violation(&e) => {
            Err(SiteError::SlugExhausted(data.slug.clone()))
        }
        Err(e) => Err(e.into()),
    }
}

pub async fn get_site(pool: &PgPool, id: Uuid) -> Result<Site, SiteError> {
    sqlx::query_as::<_, Site>(
        r#"
        SELECT *
        FROM sites
        WHERE id = $1
        "#,
    )
    .bind(id)
    .fetch_optional(pool)
    .await?
    .ok_or(SiteError::NotFound(id))
}

pub async fn get_site_by_slug(
    pool: &PgPool,
    slug: &str,
) -> Result<Option<Site>, sqlx::Error> {
    sqlx::query_as::<_, Site>(
        r#"
        SELECT *
        FROM sites
        WHERE slug = $1
        "#,
    )
    .bind(slug)
    .fetch_optional(pool)
    .await
}

pub async fn update_site(
    pool: &PgPool,
    id: Uuid,
    data: &SiteUpdate,
) -> Result<Site, SiteError> {
    sqlx::query_as::<_, Site>(
        r#"
        UPDATE sites
        SET
            name = COALESCE($1, name),
            contact_email = COALESCE($2, contact_email),
            goal = COALESCE($3, goal),
            theme_family = COALESCE($4, theme_family),
            edited_at = now()
        WHERE id = $5
        RETURNING *
        "#,
    )
    .bind(data.name.as_deref())
    .bind(data.contact_email.as_deref())
    .bind(data.goal.as_deref())
    .bind(data.theme_family.as_deref())
    .bind(id)
    .fetch_optional(pool)
    .await?
    .ok_or(SiteError::NotFound(id))
}

/// Walk the candidate sequence until a free slug turns up. The check-then-
/// insert window is narrow but real; the unique constraint on sites.slug is
/// the final arbiter and surfaces as a database error on the insert.
pub async fn allocate_site_slug(pool: &PgPool, name: &str) -> Result<String, SiteError> {
    let base = slugs::slugify(name, "site");

    for candidate in slugs::candidates(&base).take(SLUG_ATTEMPTS) {
        let taken: bool = sqlx::query_scalar(
            r#"SELECT EXISTS(SELECT 1 FROM sites WHERE slug = $1)"#,
        )
        .bind(&candidate)
        .fetch_one(pool)
        .await?;

        if !taken {
            return Ok(candidate);
        }
    }

    Err(SiteError::SlugExhausted(base))
}

/// Copy a preset's values into the site's theme row. Runs once at site
/// creation; afterwards every field is edited independently.
pub async fn insert_site_theme(
    pool: &PgPool,
    site_id: Uuid,
    preset: &ThemePreset,
) -> Result<SiteTheme, sqlx::Error> {
    sqlx::query_as::<_, SiteTheme>(
        r#"
        INSERT INTO site_themes (
            site_id, primary_color, secondary_color, accent_color,
            background_color, text_color, muted_color,
            heading_font, body_font, radius, button_style
        )
        VALUES ($1, $2, $3, $4, $5, $6, $7, $8, $9, $10, $11)
        RETURNING *
        "#,
    )
    .bind(site_id)
    .bind(preset.palette.primary)
    .bind(preset.palette.secondary)
    .bind(preset.palette.accent)
    .bind(preset.palette.background)
    .bind(preset.palette.text)
    .bind(preset.palette.muted)
    .bind(preset.fonts.heading)
    .bind(preset.fonts.body)
    .bind(preset.radius)
    .bind(preset.button_style)
    .fetch_one(pool)
    .await
}

pub async fn get_site_theme(
    pool: &PgPool,
    site_id: Uuid,
) -> Result<Option<SiteTheme>, sqlx::Error> {
    sqlx::query_as::<_, SiteTheme>(
        r#"
        SELECT *
        FROM site_themes
        WHERE site_id = $1
        "#,
    )
    .bind(site_id)
    .fetch_optional(pool)
    .await
}

pub async fn update_site_theme(
    pool: &PgPool,
    site_id: Uuid,
    data: &SiteThemeUpdate,
) -> Result<SiteTheme, SiteError> {
    sqlx::query_as::<_, SiteTheme>(
        r#"
        UPDATE site_themes
        SET
            primary_color = COALESCE($1, primary_color),
            secondary_color = COALESCE($2, secondary_color),
            accent_color = COALESCE($3, accent_color),
            background_color = COALESCE($4, background_color),
            text_color = COALESCE($5, text_color),
            muted_color = COALESCE($6, muted_color),
            heading_font = COALESCE($7, heading_font),
            body_font = COALESCE($8, body_font),
            radius = COALESCE($9, radius),
            button_style = COALESCE($10, button_style),
            edited_at = now()
        WHERE site_id = $11
        RETURNING *
        "#,
    )
    .bind(data.primary_color.as_deref())
    .bind(data.secondary_color.as_deref())
    .bind(data.accent_color.as_deref())
    .bind(data.background_color.as_deref())
    .bind(data.text_color.as_deref())
    .bind(data.muted_color.as_deref())
    .bind(data.heading_font.as_deref())
    .bind(data.body_font.as_deref())
    .bind(data.radius.as_deref())
    .bind(data.button_style)
    .fetch_optional(pool)
    .await?
    .ok_or(SiteError::NotFound(site_id))
}
