use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use uuid::Uuid;

use super::ButtonStyle;

/// Per-site theme override row. Created as a full copy of the chosen
/// preset's values; every field stays independently overridable afterwards.
#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
#[serde(rename_all = "camelCase")]
pub struct SiteTheme {
    pub site_id: Uuid,
    pub primary_color: Option<String>,
    pub secondary_color: Option<String>,
    pub accent_color: Option<String>,
    pub background_color: Option<String>,
    pub text_color: Option<String>,
    pub muted_color: Option<String>,
    pub heading_font: Option<String>,
    pub body_font: Option<String>,
    pub radius: Option<String>,
    pub button_style: Option<ButtonStyle>,
    pub edited_at: DateTime<Utc>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SiteThemeUpdate {
    pub primary_color: Option<String>,
    pub secondary_color: Option<String>,
    pub accent_color: Option<String>,
    pub background_color: Option<String>,
    pub text_color: Option<String>,
    pub muted_color: Option<String>,
    pub heading_font: Option<String>,
    pub body_font: Option<String>,
    pub radius: Option<String>,
    pub button_style: Option<ButtonStyle>,
}

impl SiteThemeUpdate {
    pub fn is_empty(&self) -> bool {
        self.primary_color.is_none()
            && self.secondary_color.is_none()
            && self.accent_color.is_none()
            && self.background_color.is_none()
            && self.text_color.is_none()
            && self.muted_color.is_none()
            && self.heading_font.is_none()
            && self.body_font.is_none()
            && self.radius.is_none()
            && self.button_style.is_none()
    }
}
