use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use sitebloom::models::{
    ContentBlock, Page, Section, SectionStyles, SectionType, Site,
};
use sitebloom::ordering::{Direction, OrderChange};
use sitebloom::publish::Snapshot;
use sitebloom::themes::ComputedTheme;

#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SiteCreateRequest {
    pub name: String,
    pub contact_email: String,
    #[serde(default)]
    pub goal: Option<String>,
    pub theme_family: String,
    #[serde(default)]
    pub selected_sections: Vec<SectionType>,
}

#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SiteUpdateRequest {
    pub name: Option<String>,
    pub contact_email: Option<String>,
    pub goal: Option<String>,
    pub theme_family: Option<String>,
}

#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PageCreateRequest {
    pub title: String,
    #[serde(default)]
    pub show_in_menu: Option<bool>,
}

#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PageUpdateRequest {
    pub title: Option<String>,
    pub is_home: Option<bool>,
    pub show_in_menu: Option<bool>,
}

/// Either a directional move or a drag onto a target; exactly one of the
/// two fields must be present.
#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ReorderRequest {
    #[serde(default)]
    pub direction: Option<Direction>,
    #[serde(default)]
    pub target_id: Option<Uuid>,
}

#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SectionCreateRequest {
    pub kind: SectionType,
}

#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BlocksUpdateRequest {
    pub blocks: Vec<ContentBlock>,
}

/// `styles: null` (or absent) clears the override layer.
#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SectionStylesRequest {
    #[serde(default)]
    pub styles: Option<SectionStyles>,
}

#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MediaUploadQuery {
    pub filename: String,
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PageWithSections {
    #[serde(flatten)]
    pub page: Page,
    pub sections: Vec<Section>,
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SiteCreatedResponse {
    pub site: Site,
    /// Shown exactly once; only the hash is stored.
    pub token: String,
    pub theme: ComputedTheme,
    pub pages: Vec<PageWithSections>,
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SiteDetailResponse {
    pub site: Site,
    pub theme: ComputedTheme,
    pub pages: Vec<PageWithSections>,
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ReorderResponse {
    pub changes: Vec<OrderChange>,
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PublishResponse {
    pub is_published: bool,
    pub published_at: Option<DateTime<Utc>>,
    pub public_url: String,
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PublicSiteResponse {
    pub snapshot: Snapshot,
    pub published_at: Option<DateTime<Utc>>,
}
