use serde::Serialize;
use uuid::Uuid;

use crate::models::{Alignment, ButtonStyle, SectionType};

use super::style::SectionStyle;

/// Framework-neutral view tree. The editor preview and the public site
/// consume the same nodes; how they turn into markup is a concern of the
/// embedding frontend, not of this crate.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "node", rename_all = "kebab-case")]
pub enum RenderNode {
    Section {
        id: Uuid,
        kind: SectionType,
        style: SectionStyle,
        alignment: Alignment,
        children: Vec<RenderNode>,
    },
    Heading {
        text: String,
        level: u8,
        alignment: Alignment,
    },
    Paragraph {
        text: String,
    },
    Image {
        src: String,
        alt: Option<String>,
    },
    Video {
        src: String,
    },
    Audio {
        src: String,
    },
    Button {
        label: String,
        link: Option<ResolvedLink>,
        style: ButtonStyle,
    },
    Shape {
        name: String,
    },
    Gallery {
        images: Vec<String>,
    },
    ContactForm {
        email: Option<String>,
    },
    SocialIcons {
        links: Vec<String>,
    },
    /// Editor-only stand-in for a section the renderer has no layout for.
    Placeholder {
        label: String,
    },
}

/// A button destination after link-mode resolution.
#[derive(Debug, Clone, Eq, PartialEq, Serialize)]
#[serde(tag = "kind", rename_all = "kebab-case")]
pub enum ResolvedLink {
    External { href: String },
    Internal { slug: String },
    Anchor { section_id: Uuid },
}
