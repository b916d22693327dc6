use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use uuid::Uuid;

use super::SectionType;

#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
#[serde(rename_all = "camelCase")]
pub struct Section {
    pub id: Uuid,
    pub page_id: Uuid,
    pub kind: SectionType,
    pub position: i32,
    pub data_json: String,
    pub created_at: DateTime<Utc>,
    pub edited_at: DateTime<Utc>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SectionCreate {
    pub page_id: Uuid,
    pub kind: SectionType,
    pub position: i32,
    pub data_json: String,
}
