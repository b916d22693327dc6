use sqlx::PgPool;
use uuid::Uuid;

use crate::common::SectionError;
use crate::models::{Section, SectionCreate};
use crate::ordering::OrderChange;

pub async fn create_section(
    pool: &PgPool,
    data: &SectionCreate,
) -> Result<Section, SectionError> {
    let section = sqlx::query_as::<_, Section>(
        r#"
        INSERT INTO sections (page_id, kind, position, data_json)
        VALUES ($1, $2, $3, $4)
        RETURNING *
        "#,
    )
    .bind(data.page_id)
    .bind(&data.kind)
    .bind(data.position)
    .bind(&data.data_json)
    .fetch_one(pool)
    .await?;

    Ok(section)
}

pub async fn get_section(pool: &PgPool, id: Uuid) -> Result<Section, SectionError> {
    sqlx::query_as::<_, Section>(
        r#"
        SELECT *
        FROM sections
        WHERE id = $1
        "#,
    )
    .bind(id)
    .fetch_optional(pool)
    .await?
    .ok_or(SectionError::NotFound(id))
}

pub async fn list_sections(
    pool: &PgPool,
    page_id: Uuid,
) -> Result<Vec<Section>, sqlx::Error> {
    sqlx::query_as::<_, Section>(
        r#"
        SELECT *
        FROM sections
        WHERE page_id = $1
        ORDER BY position
        "#,
    )
    .bind(page_id)
    .fetch_all(pool)
    .await
}

/// The payload column is replaced wholesale; merge semantics live in the
/// content layer, which hands a fully merged document down.
pub async fn update_section_data(
    pool: &PgPool,
    id: Uuid,
    data_json: &str,
) -> Result<Section, SectionError> {
    sqlx::query_as::<_, Section>(
        r#"
        UPDATE sections
        SET data_json = $1, edited_at = now()
        WHERE id = $2
        RETURNING *
        "#,
    )
    .bind(data_json)
    .bind(id)
    .fetch_optional(pool)
    .await?
    .ok_or(SectionError::NotFound(id))
}

pub async fn delete_section(pool: &PgPool, id: Uuid) -> Result<(), SectionError> {
    let result = sqlx::query(r#"DELETE FROM sections WHERE id = $1"#)
        .bind(id)
        .execute(pool)
        .await?;

    if result.rows_affected() == 0 {
        return Err(SectionError::NotFound(id));
    }

    Ok(())
}

/// Same transactional discipline as page reorders.
pub async fn apply_reorder(
    pool: &PgPool,
    changes: &[OrderChange],
) -> Result<(), sqlx::Error> {
    let mut tx = pool.begin().await?;

    for change in changes {
        sqlx::query(
            r#"
            UPDATE sections
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

pub async fn next_position(pool: &PgPool, page_id: Uuid) -> Result<i32, sqlx::Error> {
    sqlx::query_scalar(
        r#"
        SELECT COALESCE(MAX(position) + 1, 0)
        FROM sections
        WHERE page_id = $1
        "#,
    )
    .bind(page_id)
    .fetch_one(pool)
    .await
}
