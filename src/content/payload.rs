use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

use crate::models::{Alignment, ContentBlock, SectionStyles};

/// Flat named fields predating the block model. All optional; unknown keys
/// ride along in `extra` and survive re-serialization.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LegacyPayload {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub subtitle: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub image: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub text: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub content: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub cta_text: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub cta_link: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub contact_email: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub section_styles: Option<SectionStyles>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub content_alignment: Option<Alignment>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub section_images: Option<Vec<String>>,
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

/// Block-model payload. The presence of a `blocks` key is what marks a
/// stored payload as migrated.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MigratedPayload {
    #[serde(default)]
    pub blocks: Vec<ContentBlock>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub section_styles: Option<SectionStyles>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub content_alignment: Option<Alignment>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub section_images: Option<Vec<String>>,
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

/// A section's content payload at the storage boundary. Deserialization
/// goes through [`SectionPayload::parse`]; the shapes are too close for
/// untagged inference (an empty legacy object also satisfies the migrated
/// shape).
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(untagged)]
pub enum SectionPayload {
    Migrated(MigratedPayload),
    Legacy(LegacyPayload),
}

impl Default for SectionPayload {
    fn default() -> Self {
        Self::Legacy(LegacyPayload::default())
    }
}

impl SectionPayload {
    /// Classify and parse a stored payload. A `blocks` key marks the
    /// migrated shape; anything else is read as legacy flat fields.
    pub fn parse(raw: &str) -> Result<Self, serde_json::Error> {
        Self::from_value(serde_json::from_str(raw)?)
    }

    pub fn from_value(value: Value) -> Result<Self, serde_json::Error> {
        let is_migrated = value
            .as_object()
            .is_some_and(|map| map.contains_key("blocks"));

        if is_migrated {
            serde_json::from_value::<MigratedPayload>(value).map(Self::Migrated)
        } else {
            serde_json::from_value::<LegacyPayload>(value).map(Self::Legacy)
        }
    }

    /// Parse, swallowing malformed payloads into the empty payload. The
    /// caller decides whether the failure is worth logging.
    pub fn parse_lenient(raw: &str) -> Self {
        Self::parse(raw).unwrap_or_default()
    }

    pub fn is_migrated(&self) -> bool {
        matches!(self, Self::Migrated(_))
    }

    pub fn section_styles(&self) -> Option<&SectionStyles> {
        match self {
            Self::Migrated(p) => p.section_styles.as_ref(),
            Self::Legacy(p) => p.section_styles.as_ref(),
        }
    }

    pub fn content_alignment(&self) -> Option<Alignment> {
        match self {
            Self::Migrated(p) => p.content_alignment,
            Self::Legacy(p) => p.content_alignment,
        }
    }

    pub fn section_images(&self) -> Option<&[String]> {
        match self {
            Self::Migrated(p) => p.section_images.as_deref(),
            Self::Legacy(p) => p.section_images.as_deref(),
        }
    }

    /// Replace the block list wholesale while merging at the payload level:
    /// styles, layout extensions, and unknown keys carry over unchanged.
    /// Block orders are renumbered to match array position. This is the save
    /// that makes a read-time migration permanent.
    pub fn with_blocks(self, mut blocks: Vec<ContentBlock>) -> MigratedPayload {
        for (i, block) in blocks.iter_mut().enumerate() {
            block.order = i as i32;
        }

        match self {
            Self::Migrated(p) => MigratedPayload { blocks, ..p },
            Self::Legacy(p) => MigratedPayload {
                blocks,
                section_styles: p.section_styles,
                content_alignment: p.content_alignment,
                section_images: p.section_images,
                extra: p.extra,
            },
        }
    }

    /// Replace only the style override layer, leaving content untouched.
    pub fn with_section_styles(self, styles: Option<SectionStyles>) -> Self {
        match self {
            Self::Migrated(p) => Self::Migrated(MigratedPayload {
                section_styles: styles,
                ..p
            }),
            Self::Legacy(p) => Self::Legacy(LegacyPayload {
                section_styles: styles,
                ..p
            }),
        }
    }

    pub fn to_json(&self) -> String {
        serde_json::to_string(self).unwrap_or_else(|_| "{}".to_string())
    }
}

impl From<MigratedPayload> for SectionPayload {
    fn from(p: MigratedPayload) -> Self {
        Self::Migrated(p)
    }
}

impl From<LegacyPayload> for SectionPayload {
    fn from(p: LegacyPayload) -> Self {
        Self::Legacy(p)
    }
}
