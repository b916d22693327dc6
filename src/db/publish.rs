use sqlx::PgPool;
use uuid::Uuid;

use crate::common::PublishError;
use crate::models::{PublishState, Site};
use crate::publish::Snapshot;
use crate::themes;

use super::{pages, sections, sites};

/// Seed the unpublished state row alongside a new site.
pub async fn init_publish_state(pool: &PgPool, site_id: Uuid) -> Result<(), sqlx::Error> {
    sqlx::query(
        r#"
        INSERT INTO publish_states (site_id, is_published)
        VALUES ($1, FALSE)
        ON CONFLICT (site_id) DO NOTHING
        "#,
    )
    .bind(site_id)
    .execute(pool)
    .await?;

    Ok(())
}

pub async fn get_publish_state(
    pool: &PgPool,
    site_id: Uuid,
) -> Result<Option<PublishState>, sqlx::Error> {
    sqlx::query_as::<_, PublishState>(
        r#"
        SELECT *
        FROM publish_states
        WHERE site_id = $1
        "#,
    )
    .bind(site_id)
    .fetch_optional(pool)
    .await
}

/// Freeze the live graph into the site's single publish row.
///
/// The snapshot is assembled fully in memory before the one upsert, so a
/// failure anywhere leaves the previous publish intact; there is no
/// partially written snapshot. Concurrent publishes are last-write-wins.
pub async fn publish_site(pool: &PgPool, site_id: Uuid) -> Result<PublishState, PublishError> {
    let site = sqlx::query_as::<_, Site>(
        r#"
        SELECT *
        FROM sites
        WHERE id = $1
        "#,
    )
    .bind(site_id)
    .fetch_optional(pool)
    .await?
    .ok_or(PublishError::SiteNotFound(site_id))?;

    let theme_row = sites::get_site_theme(pool, site_id).await?;
    let theme = themes::resolve(&site.theme_family, theme_row.as_ref());

    let mut page_tree = Vec::new();
    for page in pages::list_pages(pool, site_id).await? {
        let page_sections = sections::list_sections(pool, page.id).await?;
        page_tree.push((page, page_sections));
    }

    let snapshot = Snapshot::assemble(&site, theme, page_tree);
    let snapshot_json = snapshot.to_json()?;

    let state = sqlx::query_as::<_, PublishState>(
        r#"
        INSERT INTO publish_states (site_id, is_published, published_at, snapshot_json)
        VALUES ($1, TRUE, now(), $2)
        ON CONFLICT (site_id) DO UPDATE
        SET is_published = TRUE,
            published_at = now(),
            snapshot_json = EXCLUDED.snapshot_json
        RETURNING *
        "#,
    )
    .bind(site_id)
    .bind(&snapshot_json)
    .fetch_one(pool)
    .await?;

    Ok(state)
}

/// Public lookup. A site that exists but was never published produces the
/// same `None` as a slug that matches nothing.
pub async fn get_published_snapshot(
    pool: &PgPool,
    slug: &str,
) -> Result<Option<PublishState>, sqlx::Error> {
    sqlx::query_as::<_, PublishState>(
        r#"
        SELECT ps.*
        FROM publish_states ps
        JOIN sites s ON s.id = ps.site_id
        WHERE s.slug = $1 AND ps.is_published
        "#,
    )
    .bind(slug)
    .fetch_optional(pool)
    .await
}
