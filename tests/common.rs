use chrono::{DateTime, TimeZone, Utc};
use uuid::Uuid;

use sitebloom::models::*;

pub fn fixed_time() -> DateTime<Utc> {
    Utc.with_ymd_and_hms(2026, 1, 4, 22, 15, 6).unwrap()
}

pub fn make_site(name: &str, theme_family: &str) -> Site {
    Site {
        id: Uuid::new_v4(),
        name: name.to_string(),
        slug: "test-site".to_string(),
        contact_email: "owner@test.com".to_string(),
        goal: "business".to_string(),
        theme_family: theme_family.to_string(),
        token_hash: "$argon2id$test".to_string(),
        created_at: fixed_time(),
        edited_at: fixed_time(),
    }
}

pub fn make_page(site_id: Uuid, title: &str, slug: &str, position: i32) -> Page {
    Page {
        id: Uuid::new_v4(),
        site_id,
        title: title.to_string(),
        slug: slug.to_string(),
        position,
        is_home: position == 0,
        show_in_menu: true,
        created_at: fixed_time(),
        edited_at: fixed_time(),
    }
}

pub fn make_section(
    page_id: Uuid,
    kind: SectionType,
    position: i32,
    data_json: &str,
) -> Section {
    Section {
        id: Uuid::new_v4(),
        page_id,
        kind,
        position,
        data_json: data_json.to_string(),
        created_at: fixed_time(),
        edited_at: fixed_time(),
    }
}

/// A fully populated override row, every field distinct from any preset.
pub fn make_site_theme(site_id: Uuid) -> SiteTheme {
    SiteTheme {
        site_id,
        primary_color: Some("#111111".to_string()),
        secondary_color: Some("#222222".to_string()),
        accent_color: Some("#333333".to_string()),
        background_color: Some("#444444".to_string()),
        text_color: Some("#555555".to_string()),
        muted_color: Some("#666666".to_string()),
        heading_font: Some("Test Heading".to_string()),
        body_font: Some("Test Body".to_string()),
        radius: Some("9rem".to_string()),
        button_style: Some(ButtonStyle::Square),
        edited_at: fixed_time(),
    }
}

pub fn ordered_block(kind: BlockType, order: i32, content: &str) -> ContentBlock {
    ContentBlock::new(kind, order, content)
}
