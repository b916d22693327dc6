use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use uuid::Uuid;

#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
#[serde(rename_all = "camelCase")]
pub struct Page {
    pub id: Uuid,
    pub site_id: Uuid,
    pub title: String,
    pub slug: String,
    pub position: i32,
    pub is_home: bool,
    pub show_in_menu: bool,
    pub created_at: DateTime<Utc>,
    pub edited_at: DateTime<Utc>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PageCreate {
    pub site_id: Uuid,
    pub title: String,
    pub slug: String,
    pub position: i32,
    pub is_home: bool,
    pub show_in_menu: bool,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PageUpdate {
    pub title: Option<String>,
    pub is_home: Option<bool>,
    pub show_in_menu: Option<bool>,
}
