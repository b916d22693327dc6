use serde::{Deserialize, Serialize};
use serde_json::Value;
use uuid::Uuid;

use crate::models::{Page, Section, SectionType, Site};
use crate::themes::ComputedTheme;

/// The frozen copy of a site's full content tree written at publish time.
/// Self-contained: public serving never dereferences the live tables.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Snapshot {
    pub site_name: String,
    pub theme_family: String,
    pub theme: ComputedTheme,
    pub pages: Vec<SnapshotPage>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SnapshotPage {
    pub id: Uuid,
    pub title: String,
    pub slug: String,
    pub position: i32,
    pub is_home: bool,
    pub show_in_menu: bool,
    pub sections: Vec<SnapshotSection>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SnapshotSection {
    pub id: Uuid,
    #[serde(rename = "type")]
    pub kind: SectionType,
    pub position: i32,
    pub data: Value,
}

impl Snapshot {
    /// Project the live graph into the minimal public document. Pages and
    /// sections are emitted in position order; sub-entity bookkeeping
    /// (timestamps, foreign keys) is dropped. Builds entirely in memory so
    /// the caller can write it in a single statement.
    pub fn assemble(
        site: &Site,
        theme: ComputedTheme,
        pages: Vec<(Page, Vec<Section>)>,
    ) -> Self {
        let mut ordered = pages;
        ordered.sort_by_key(|(page, _)| page.position);

        let pages = ordered
            .into_iter()
            .map(|(page, mut sections)| {
                sections.sort_by_key(|s| s.position);

                SnapshotPage {
                    id: page.id,
                    title: page.title,
                    slug: page.slug,
                    position: page.position,
                    is_home: page.is_home,
                    show_in_menu: page.show_in_menu,
                    sections: sections
                        .into_iter()
                        .map(|section| SnapshotSection {
                            id: section.id,
                            kind: section.kind,
                            position: section.position,
                            data: parse_data(&section.data_json),
                        })
                        .collect(),
                }
            })
            .collect();

        Self {
            site_name: site.name.clone(),
            theme_family: site.theme_family.clone(),
            theme,
            pages,
        }
    }

    pub fn to_json(&self) -> Result<String, serde_json::Error> {
        serde_json::to_string(self)
    }

    pub fn from_json(raw: &str) -> Result<Self, serde_json::Error> {
        serde_json::from_str(raw)
    }
}

/// Malformed stored payloads become an empty object in the snapshot; the
/// public site must never see the failure.
fn parse_data(raw: &str) -> Value {
    serde_json::from_str(raw).unwrap_or_else(|_| Value::Object(Default::default()))
}
