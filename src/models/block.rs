use serde::{Deserialize, Serialize};
use uuid::Uuid;

use super::{BlockType, ButtonStyle};

/// Horizontal alignment for title/subtitle blocks. Values written by older
/// builds that no longer parse fall back to left.
#[derive(Debug, Default, Clone, Copy, Eq, PartialEq, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum Alignment {
    #[default]
    Left,
    Center,
    Right,
}

impl Alignment {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Left => "left",
            Self::Center => "center",
            Self::Right => "right",
        }
    }
}

impl From<&str> for Alignment {
    fn from(s: &str) -> Self {
        match s {
            "center" => Self::Center,
            "right" => Self::Right,
            _ => Self::Left,
        }
    }
}

impl From<String> for Alignment {
    fn from(s: String) -> Self {
        Self::from(s.as_str())
    }
}

impl From<Alignment> for String {
    fn from(a: Alignment) -> Self {
        a.as_str().to_string()
    }
}

/// Destination of a button block or legacy call-to-action. Exactly one mode
/// is active at a time.
#[derive(Debug, Clone, Eq, PartialEq, Serialize, Deserialize)]
#[serde(tag = "mode", rename_all = "kebab-case")]
pub enum LinkTarget {
    Url {
        href: String,
    },
    Page {
        #[serde(rename = "pageId")]
        page_id: Uuid,
    },
    Anchor {
        #[serde(rename = "sectionId")]
        section_id: Uuid,
    },
}

#[derive(Debug, Default, Clone, PartialEq, Serialize, Deserialize)]
pub struct BlockSettings {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub alignment: Option<Alignment>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub link: Option<LinkTarget>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub alt: Option<String>,
    #[serde(flatten)]
    pub extra: serde_json::Map<String, serde_json::Value>,
}

impl BlockSettings {
    pub fn link(target: LinkTarget) -> Self {
        Self {
            link: Some(target),
            ..Self::default()
        }
    }
}

/// One ordered content unit inside a migrated section payload.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ContentBlock {
    pub id: Uuid,
    #[serde(rename = "type")]
    pub kind: BlockType,
    pub order: i32,
    #[serde(default)]
    pub content: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub settings: Option<BlockSettings>,
}

impl ContentBlock {
    pub fn new(kind: BlockType, order: i32, content: impl Into<String>) -> Self {
        Self {
            id: Uuid::new_v4(),
            kind,
            order,
            content: content.into(),
            settings: None,
        }
    }

    pub fn with_settings(mut self, settings: BlockSettings) -> Self {
        self.settings = Some(settings);
        self
    }
}

/// Per-section style override layer. Absent fields fall back to the
/// resolved site theme.
#[derive(Debug, Default, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SectionStyles {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub background_color: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub heading_font: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub body_font: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub heading_color: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub text_color: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub button_style: Option<ButtonStyle>,
}
