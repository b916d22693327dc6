use sqlx::PgPool;
use uuid::Uuid;

use crate::common::MediaError;
use crate::models::{Media, MediaCreate};

pub async fn create_media(pool: &PgPool, data: &MediaCreate) -> Result<Media, MediaError> {
    let media = sqlx::query_as::<_, Media>(
        r#"
        INSERT INTO media (site_id, kind, filename, url, mime_type, size_bytes)
        VALUES ($1, $2, $3, $4, $5, $6)
        RETURNING *
        "#,
    )
    .bind(data.site_id)
    .bind(data.kind)
    .bind(&data.filename)
    .bind(&data.url)
    .bind(&data.mime_type)
    .bind(data.size_bytes)
    .fetch_one(pool)
    .await?;

    Ok(media)
}

pub async fn get_media(pool: &PgPool, id: Uuid) -> Result<Media, MediaError> {
    sqlx::query_as::<_, Media>(
        r#"
        SELECT *
        FROM media
        WHERE id = $1
        "#,
    )
    .bind(id)
    .fetch_optional(pool)
    .await?
    .ok_or(MediaError::NotFound(id))
}

pub async fn list_media(pool: &PgPool, site_id: Uuid) -> Result<Vec<Media>, sqlx::Error> {
    sqlx::query_as::<_, Media>(
        r#"
        SELECT *
        FROM media
        WHERE site_id = $1
        ORDER BY created_at DESC
        "#,
    )
    .bind(site_id)
    .fetch_all(pool)
    .await
}

/// Record removal is unconditional; the caller attempts the blob delete
/// separately and tolerates its failure.
pub async fn delete_media(pool: &PgPool, id: Uuid) -> Result<Media, MediaError> {
    sqlx::query_as::<_, Media>(
        r#"
        DELETE FROM media
        WHERE id = $1
        RETURNING *
        "#,
    )
    .bind(id)
    .fetch_optional(pool)
    .await?
    .ok_or(MediaError::NotFound(id))
}
