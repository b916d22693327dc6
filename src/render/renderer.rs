use std::collections::HashMap;

use serde_json::Value;
use uuid::Uuid;

use crate::content::{LegacyPayload, SectionPayload};
use crate::models::{
    Alignment, BlockSettings, BlockType, ContentBlock, LinkTarget, SectionType,
};
use crate::publish::{Snapshot, SnapshotPage};
use crate::themes::ComputedTheme;

use super::style::SectionStyle;
use super::tree::{RenderNode, ResolvedLink};

#[derive(Debug, Clone, Copy, Eq, PartialEq)]
pub enum RenderMode {
    Editor,
    Public,
}

/// Everything a render needs besides the section itself: the mode and the
/// page-id → slug map for resolving internal links.
#[derive(Debug, Clone)]
pub struct RenderContext {
    pub mode: RenderMode,
    pub page_slugs: HashMap<Uuid, String>,
}

impl RenderContext {
    pub fn new(mode: RenderMode, page_slugs: HashMap<Uuid, String>) -> Self {
        Self { mode, page_slugs }
    }

    pub fn for_snapshot(snapshot: &Snapshot, mode: RenderMode) -> Self {
        Self {
            mode,
            page_slugs: snapshot
                .pages
                .iter()
                .map(|p| (p.id, p.slug.clone()))
                .collect(),
        }
    }
}

/// Map one section to its view subtree. Identical for live sections and
/// snapshot sections; `None` means the section produces no output at all
/// (unknown type on the public site).
pub fn render_section(
    section_id: Uuid,
    kind: &SectionType,
    payload: &SectionPayload,
    theme: &ComputedTheme,
    ctx: &RenderContext,
) -> Option<RenderNode> {
    let style = SectionStyle::resolve(payload.section_styles(), theme);
    let alignment = payload.content_alignment().unwrap_or_default();

    let children = match payload {
        // A non-empty block list renders generically; leftover legacy
        // fields in the payload are ignored.
        SectionPayload::Migrated(p) if !p.blocks.is_empty() => {
            let mut blocks = p.blocks.clone();
            blocks.sort_by_key(|b| b.order);
            blocks
                .iter()
                .filter_map(|block| render_block(block, alignment, &style, ctx))
                .collect()
        }
        SectionPayload::Migrated(_) => Vec::new(),
        SectionPayload::Legacy(p) => match legacy_children(kind, p, alignment, &style) {
            Some(children) => children,
            None => match ctx.mode {
                RenderMode::Editor => vec![RenderNode::Placeholder {
                    label: kind.to_string(),
                }],
                RenderMode::Public => return None,
            },
        },
    };

    Some(RenderNode::Section {
        id: section_id,
        kind: kind.clone(),
        style,
        alignment,
        children,
    })
}

/// Render every section of a snapshot page, skipping sections that produce
/// no output.
pub fn render_snapshot_page(
    page: &SnapshotPage,
    theme: &ComputedTheme,
    ctx: &RenderContext,
) -> Vec<RenderNode> {
    page.sections
        .iter()
        .filter_map(|section| {
            let payload = SectionPayload::from_value(section.data.clone())
                .unwrap_or_default();
            render_section(section.id, &section.kind, &payload, theme, ctx)
        })
        .collect()
}

/// One fixed visual mapping per block type; unknown types render nothing.
fn render_block(
    block: &ContentBlock,
    section_alignment: Alignment,
    style: &SectionStyle,
    ctx: &RenderContext,
) -> Option<RenderNode> {
    let settings = block.settings.as_ref();
    let alignment = settings
        .and_then(|s| s.alignment)
        .unwrap_or(section_alignment);

    match block.kind {
        BlockType::Title => Some(RenderNode::Heading {
            text: block.content.clone(),
            level: 1,
            alignment,
        }),
        BlockType::Subtitle => Some(RenderNode::Heading {
            text: block.content.clone(),
            level: 2,
            alignment,
        }),
        BlockType::Text => Some(RenderNode::Paragraph {
            text: block.content.clone(),
        }),
        BlockType::Image => Some(RenderNode::Image {
            src: block.content.clone(),
            alt: settings.and_then(|s| s.alt.clone()),
        }),
        BlockType::Video => Some(RenderNode::Video {
            src: block.content.clone(),
        }),
        BlockType::Audio => Some(RenderNode::Audio {
            src: block.content.clone(),
        }),
        BlockType::Button => Some(RenderNode::Button {
            label: block.content.clone(),
            link: settings
                .and_then(|s| s.link.as_ref())
                .and_then(|link| resolve_link(link, ctx)),
            style: style.button_style,
        }),
        BlockType::Shape => Some(RenderNode::Shape {
            name: block.content.clone(),
        }),
        BlockType::Gallery => Some(RenderNode::Gallery {
            images: string_list(settings, "images"),
        }),
        BlockType::ContactForm => Some(RenderNode::ContactForm {
            email: Some(block.content.clone()).filter(|s| !s.is_empty()),
        }),
        BlockType::SocialIcons => Some(RenderNode::SocialIcons {
            links: string_list(settings, "links"),
        }),
        BlockType::Other(_) => None,
    }
}

/// Exactly one link mode is active per button. Internal page links resolve
/// through the context's slug map; a link to a page that no longer exists
/// resolves to no link at all.
fn resolve_link(link: &LinkTarget, ctx: &RenderContext) -> Option<ResolvedLink> {
    match link {
        LinkTarget::Url { href } => Some(ResolvedLink::External {
            href: href.clone(),
        }),
        LinkTarget::Page { page_id } => {
            ctx.page_slugs
                .get(page_id)
                .map(|slug| ResolvedLink::Internal { slug: slug.clone() })
        }
        LinkTarget::Anchor { section_id } => Some(ResolvedLink::Anchor {
            section_id: *section_id,
        }),
    }
}

/// Bespoke layouts for the pre-block section types. Types without one get
/// `None`, which the caller turns into a placeholder or nothing depending
/// on mode.
fn legacy_children(
    kind: &SectionType,
    payload: &LegacyPayload,
    alignment: Alignment,
    style: &SectionStyle,
) -> Option<Vec<RenderNode>> {
    let mut children = Vec::new();
    let body = || {
        payload
            .text
            .clone()
            .or_else(|| payload.content.clone())
    };

    match kind {
        SectionType::Hero => {
            if let Some(title) = &payload.title {
                children.push(heading(title, 1, alignment));
            }
            if let Some(subtitle) = &payload.subtitle {
                children.push(heading(subtitle, 2, alignment));
            }
            if let Some(image) = &payload.image {
                children.push(RenderNode::Image {
                    src: image.clone(),
                    alt: None,
                });
            }
            if let Some(label) = &payload.cta_text {
                children.push(RenderNode::Button {
                    label: label.clone(),
                    link: payload.cta_link.clone().map(|href| {
                        ResolvedLink::External { href }
                    }),
                    style: style.button_style,
                });
            }
        }
        SectionType::About => {
            if let Some(title) = &payload.title {
                children.push(heading(title, 2, alignment));
            }
            if let Some(image) = &payload.image {
                children.push(RenderNode::Image {
                    src: image.clone(),
                    alt: None,
                });
            }
            if let Some(text) = body() {
                children.push(RenderNode::Paragraph { text });
            }
        }
        SectionType::Services | SectionType::Testimonials => {
            if let Some(title) = &payload.title {
                children.push(heading(title, 2, alignment));
            }
            if let Some(text) = body() {
                children.push(RenderNode::Paragraph { text });
            }
        }
        SectionType::Gallery => {
            if let Some(title) = &payload.title {
                children.push(heading(title, 2, alignment));
            }
            children.push(RenderNode::Gallery {
                images: payload
                    .section_images
                    .clone()
                    .unwrap_or_default(),
            });
        }
        SectionType::Contact => {
            if let Some(title) = &payload.title {
                children.push(heading(title, 2, alignment));
            }
            if let Some(text) = body() {
                children.push(RenderNode::Paragraph { text });
            }
            children.push(RenderNode::ContactForm {
                email: payload.contact_email.clone(),
            });
        }
        SectionType::Footer => {
            if let Some(text) = body() {
                children.push(RenderNode::Paragraph { text });
            }
        }
        _ => return None,
    }

    Some(children)
}

fn heading(text: &str, level: u8, alignment: Alignment) -> RenderNode {
    RenderNode::Heading {
        text: text.to_string(),
        level,
        alignment,
    }
}

fn string_list(settings: Option<&BlockSettings>, key: &str) -> Vec<String> {
    settings
        .and_then(|s| s.extra.get(key))
        .and_then(Value::as_array)
        .map(|items| {
            items
                .iter()
                .filter_map(Value::as_str)
                .map(str::to_string)
                .collect()
        })
        .unwrap_or_default()
}
