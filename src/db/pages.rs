use sqlx::PgPool;
use uuid::Uuid;

use crate::common::PageError;
use crate::models::{Page, PageCreate, PageUpdate};
use crate::ordering::OrderChange;
use crate::services::slugs;

const SLUG_ATTEMPTS: usize = 50;

pub async fn create_page(pool: &PgPool, data: &PageCreate) -> Result<Page, PageError> {
    let result = sqlx::query_as::<_, Page>(
        r#"
        INSERT INTO pages (site_id, title, slug, position, is_home, show_in_menu)
        VALUES ($1, $2, $3, $4, $5, $6)
        RETURNING *
        "#,
    )
    .bind(data.site_id)
    .bind(&data.title)
    .bind(&data.slug)
    .bind(data.position)
    .bind(data.is_home)
    .bind(data.show_in_menu)
    .fetch_one(pool)
    .await;

    match result {
        Ok(page) => Ok(page),
        // Lost the check-then-insert race on the per-site slug.
        Err(e) if super::is_unique_violation(&e) => {
            Err(PageError::SlugExhausted(data.slug.clone()))
        }
        Err(e) => Err(e.into()),
    }
}

pub async fn get_page(pool: &PgPool, id: Uuid) -> Result<Page, PageError> {
    sqlx::query_as::<_, Page>(
        r#"
        SELECT *
        FROM pages
        WHERE id = $1
        "#,
    )
    .bind(id)
    .fetch_optional(pool)
    .await?
    .ok_or(PageError::NotFound(id))
}

pub async fn list_pages(pool: &PgPool, site_id: Uuid) -> Result<Vec<Page>, sqlx::Error> {
    sqlx::query_as::<_, Page>(
        r#"
        SELECT *
        FROM pages
        WHERE site_id = $1
        ORDER BY position
        "#,
    )
    .bind(site_id)
    .fetch_all(pool)
    .await
}

/// Partial update. Promoting a page to home clears the flag on its
/// siblings first, inside one transaction, so at most one home page exists
/// per site at any point.
pub async fn update_page(
    pool: &PgPool,
    id: Uuid,
    data: &PageUpdate,
) -> Result<Page, PageError> {
    let mut tx = pool.begin().await?;

    if data.is_home == Some(true) {
        sqlx::query(
            r#"
            UPDATE pages
            SET is_home = FALSE
            WHERE site_id = (SELECT site_id FROM pages WHERE id = $1)
              AND id <> $1
            "#,
        )
        .bind(id)
        .execute(&mut *tx)
        .await?;
    }

    let page = sqlx::query_as::<_, Page>(
        r#"
        UPDATE pages
        SET
            title = COALESCE($1, title),
            is_home = COALESCE($2, is_home),
            show_in_menu = COALESCE($3, show_in_menu),
            edited_at = now()
        WHERE id = $4
        RETURNING *
        "#,
    )
    .bind(data.title.as_deref())
    .bind(data.is_home)
    .bind(data.show_in_menu)
    .bind(id)
    .fetch_optional(&mut *tx)
    .await?
    .ok_or(PageError::NotFound(id))?;

    tx.commit().await?;

    Ok(page)
}

/// Deleting the last remaining page of a site is rejected without
/// touching anything.
pub async fn delete_page(pool: &PgPool, id: Uuid) -> Result<(), PageError> {
    let mut tx = pool.begin().await?;

    let siblings: i64 = sqlx::query_scalar(
        r#"
        SELECT COUNT(*)
        FROM pages
        WHERE site_id = (SELECT site_id FROM pages WHERE id = $1)
        "#,
    )
    .bind(id)
    .fetch_one(&mut *tx)
    .await?;

    if siblings == 0 {
        return Err(PageError::NotFound(id));
    }

    if siblings == 1 {
        return Err(PageError::InvalidOperation(
            "Cannot delete the last page of a site".to_string(),
        ));
    }

    sqlx::query(r#"DELETE FROM pages WHERE id = $1"#)
        .bind(id)
        .execute(&mut *tx)
        .await?;

    tx.commit().await?;

    Ok(())
}

/// Persist the order pairs produced by the ordering engine in one
/// transaction, so a crash cannot leave a half-applied reorder behind.
pub async fn apply_reorder(
    pool: &PgPool,
    changes: &[OrderChange],
) -> Result<(), sqlx::Error> {
    let mut tx = pool.begin().await?;

    for change in changes {
        sqlx::query(
            r#"
            UPDATE pages
            SET position = $1, edited_at = now()
            WHERE id = $2
            "#,
        )
        .bind(change.position)
        .bind(change.id)
        .execute(&mut *tx)
        .await?;
    }

    tx.commit().await
}

pub async fn next_position(pool: &PgPool, site_id: Uuid) -> Result<i32, sqlx::Error> {
    sqlx::query_scalar(
        r#"
        SELECT COALESCE(MAX(position) + 1, 0)
        FROM pages
        WHERE site_id = $1
        "#,
    )
    .bind(site_id)
    .fetch_one(pool)
    .await
}

pub async fn allocate_page_slug(
    pool: &PgPool,
    site_id: Uuid,
    title: &str,
) -> Result<String, PageError> {
    let base = slugs::slugify(title, "page");

    for candidate in slugs::candidates(&base).take(SLUG_ATTEMPTS) {
        let taken: bool = sqlx::query_scalar(
            r#"SELECT EXISTS(SELECT 1 FROM pages WHERE site_id = $1 AND slug = $2)"#,
        )
        .bind(site_id)
        .bind(&candidate)
        .fetch_one(pool)
        .await?;

        if !taken {
            return Ok(candidate);
        }
    }

    Err(PageError::SlugExhausted(base))
}
