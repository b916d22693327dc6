use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use uuid::Uuid;

#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
#[serde(rename_all = "camelCase")]
pub struct PublishState {
    pub site_id: Uuid,
    pub is_published: bool,
    pub published_at: Option<DateTime<Utc>>,
    pub snapshot_json: Option<String>,
}
