use crate::models::{BlockSettings, BlockType, ContentBlock, LinkTarget};

use super::payload::{LegacyPayload, SectionPayload};

/// Produce the ordered block view of a payload.
///
/// Migrated payloads return their own blocks sorted by order; stored order
/// is not trusted. Legacy payloads synthesize blocks in a fixed precedence.
/// Pure and non-persistent: nothing is written back until the next explicit
/// save rewrites the payload in the migrated shape.
pub fn blocks_of(payload: &SectionPayload) -> Vec<ContentBlock> {
    match payload {
        SectionPayload::Migrated(p) => {
            let mut blocks = p.blocks.clone();
            blocks.sort_by_key(|b| b.order);
            blocks
        }
        SectionPayload::Legacy(p) => synthesize(p),
    }
}

/// Legacy field precedence: title, subtitle, image, text/content,
/// call-to-action, contact email. Absent fields produce no block.
fn synthesize(legacy: &LegacyPayload) -> Vec<ContentBlock> {
    let mut blocks = Vec::new();

    if let Some(title) = non_empty(&legacy.title) {
        blocks.push(block(BlockType::Title, blocks.len(), title));
    }

    if let Some(subtitle) = non_empty(&legacy.subtitle) {
        blocks.push(block(BlockType::Subtitle, blocks.len(), subtitle));
    }

    if let Some(image) = non_empty(&legacy.image) {
        blocks.push(block(BlockType::Image, blocks.len(), image));
    }

    if let Some(body) = non_empty(&legacy.text).or_else(|| non_empty(&legacy.content)) {
        blocks.push(block(BlockType::Text, blocks.len(), body));
    }

    if let Some(cta) = non_empty(&legacy.cta_text) {
        let mut button = block(BlockType::Button, blocks.len(), cta);
        if let Some(href) = non_empty(&legacy.cta_link) {
            button.settings = Some(BlockSettings::link(LinkTarget::Url { href }));
        }
        blocks.push(button);
    }

    if let Some(email) = non_empty(&legacy.contact_email) {
        blocks.push(block(
            BlockType::Text,
            blocks.len(),
            format!("Email: {}", email),
        ));
    }

    blocks
}

fn block(kind: BlockType, order: usize, content: impl Into<String>) -> ContentBlock {
    ContentBlock::new(kind, order as i32, content)
}

fn non_empty(field: &Option<String>) -> Option<String> {
    field
        .as_deref()
        .map(str::trim)
        .filter(|s| !s.is_empty())
        .map(str::to_string)
}
