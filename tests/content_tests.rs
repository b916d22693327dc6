mod common;

#[cfg(test)]
pub mod content_tests {
    use super::common::*;

    use sitebloom::content::{blocks_of, LegacyPayload, SectionPayload};
    use sitebloom::models::{
        Alignment, BlockType, LinkTarget, SectionStyles,
    };

    #[test]
    fn test_parse_classifies_blocks_key_as_migrated() {
        let payload = SectionPayload::parse(r#"{"blocks": []}"#).unwrap();

        assert!(payload.is_migrated());
    }

    #[test]
    fn test_parse_classifies_flat_fields_as_legacy() {
        let payload = SectionPayload::parse(r#"{"title": "T"}"#).unwrap();

        assert!(!payload.is_migrated());
    }

    #[test]
    fn test_parse_lenient_swallows_malformed_json() {
        let payload = SectionPayload::parse_lenient("{not json");

        assert!(!payload.is_migrated());
        assert!(blocks_of(&payload).is_empty());
        assert!(payload.section_styles().is_none());
    }

    #[test]
    fn test_migration_of_legacy_cta_example() {
        let payload = SectionPayload::parse(
            r#"{"title": "T", "subtitle": "S", "ctaText": "Go", "ctaLink": "/x"}"#,
        )
        .unwrap();

        let blocks = blocks_of(&payload);

        assert_eq!(blocks.len(), 3);

        assert_eq!(blocks[0].kind, BlockType::Title);
        assert_eq!(blocks[0].content, "T");
        assert_eq!(blocks[0].order, 0);

        assert_eq!(blocks[1].kind, BlockType::Subtitle);
        assert_eq!(blocks[1].content, "S");
        assert_eq!(blocks[1].order, 1);

        assert_eq!(blocks[2].kind, BlockType::Button);
        assert_eq!(blocks[2].content, "Go");
        assert_eq!(blocks[2].order, 2);
        let link = blocks[2]
            .settings
            .as_ref()
            .and_then(|s| s.link.clone())
            .expect("button carries its link as a setting");
        assert_eq!(
            link,
            LinkTarget::Url {
                href: "/x".to_string()
            }
        );
    }

    #[test]
    fn test_migration_follows_fixed_field_precedence() {
        let payload = SectionPayload::parse(
            r#"{
                "contactEmail": "hi@shop.com",
                "ctaText": "Book",
                "text": "Body",
                "image": "/img/a.png",
                "subtitle": "Sub",
                "title": "Head"
            }"#,
        )
        .unwrap();

        let kinds: Vec<BlockType> =
            blocks_of(&payload).into_iter().map(|b| b.kind).collect();

        assert_eq!(
            kinds,
            vec![
                BlockType::Title,
                BlockType::Subtitle,
                BlockType::Image,
                BlockType::Text,
                BlockType::Button,
                BlockType::Text,
            ]
        );
    }

    #[test]
    fn test_migration_prefixes_contact_email_block() {
        let payload =
            SectionPayload::parse(r#"{"contactEmail": "hi@shop.com"}"#).unwrap();

        let blocks = blocks_of(&payload);

        assert_eq!(blocks.len(), 1);
        assert_eq!(blocks[0].content, "Email: hi@shop.com");
    }

    #[test]
    fn test_migration_prefers_text_over_content_field() {
        let payload =
            SectionPayload::parse(r#"{"text": "new", "content": "old"}"#).unwrap();

        let blocks = blocks_of(&payload);

        assert_eq!(blocks.len(), 1);
        assert_eq!(blocks[0].content, "new");
    }

    #[test]
    fn test_migration_absent_fields_produce_no_blocks() {
        let payload = SectionPayload::parse(r#"{}"#).unwrap();

        assert!(blocks_of(&payload).is_empty());
    }

    #[test]
    fn test_migration_is_idempotent_on_migrated_payloads() {
        // Legacy leftovers sit next to a blocks array; they must be ignored.
        let payload = SectionPayload::parse(
            r#"{
                "title": "stale legacy title",
                "ctaText": "stale",
                "blocks": [
                    {"id": "5c55349a-51f3-4e4f-9d96-35a0b79b04bd", "type": "text", "order": 1, "content": "second"},
                    {"id": "0b57cd75-2276-4774-ba4e-4e5597c3d0f1", "type": "title", "order": 0, "content": "first"}
                ]
            }"#,
        )
        .unwrap();

        let blocks = blocks_of(&payload);

        assert_eq!(blocks.len(), 2);
        assert_eq!(blocks[0].kind, BlockType::Title);
        assert_eq!(blocks[0].content, "first");
        assert_eq!(blocks[1].kind, BlockType::Text);
        assert_eq!(blocks[1].content, "second");
    }

    #[test]
    fn test_with_blocks_renumbers_contiguously() {
        let payload = SectionPayload::parse(r#"{"title": "T"}"#).unwrap();

        let migrated = payload.with_blocks(vec![
            ordered_block(BlockType::Title, 7, "a"),
            ordered_block(BlockType::Text, 3, "b"),
        ]);

        let orders: Vec<i32> = migrated.blocks.iter().map(|b| b.order).collect();
        assert_eq!(orders, vec![0, 1]);
    }

    #[test]
    fn test_with_blocks_preserves_extensions_and_unknown_keys() {
        let payload = SectionPayload::parse(
            r##"{
                "title": "T",
                "sectionStyles": {"backgroundColor": "#abcdef"},
                "contentAlignment": "center",
                "sectionImages": ["/img/a.png"],
                "futureFlag": true
            }"##,
        )
        .unwrap();

        let migrated =
            payload.with_blocks(vec![ordered_block(BlockType::Text, 0, "body")]);

        assert_eq!(
            migrated
                .section_styles
                .as_ref()
                .and_then(|s| s.background_color.as_deref()),
            Some("#abcdef")
        );
        assert_eq!(migrated.content_alignment, Some(Alignment::Center));
        assert_eq!(
            migrated.section_images.as_deref(),
            Some(["/img/a.png".to_string()].as_slice())
        );
        assert_eq!(
            migrated.extra.get("futureFlag"),
            Some(&serde_json::Value::Bool(true))
        );
    }

    #[test]
    fn test_with_blocks_survives_a_save_round_trip() {
        let payload = SectionPayload::parse(r#"{"title": "T", "futureFlag": 3}"#)
            .unwrap();

        let saved = SectionPayload::from(
            payload.with_blocks(vec![ordered_block(BlockType::Title, 0, "T")]),
        )
        .to_json();

        let reloaded = SectionPayload::parse(&saved).unwrap();

        assert!(reloaded.is_migrated());
        assert_eq!(blocks_of(&reloaded).len(), 1);
        match reloaded {
            SectionPayload::Migrated(p) => {
                assert_eq!(
                    p.extra.get("futureFlag"),
                    Some(&serde_json::Value::from(3))
                );
            }
            SectionPayload::Legacy(_) => unreachable!(),
        }
    }

    #[test]
    fn test_with_section_styles_replaces_only_the_override_layer() {
        let payload = SectionPayload::parse(r#"{"title": "T"}"#).unwrap();

        let styled = payload.with_section_styles(Some(SectionStyles {
            heading_color: Some("#ff0000".to_string()),
            ..SectionStyles::default()
        }));

        assert_eq!(
            styled
                .section_styles()
                .and_then(|s| s.heading_color.as_deref()),
            Some("#ff0000")
        );
        // Content is untouched.
        assert_eq!(blocks_of(&styled).len(), 1);

        let cleared = styled.with_section_styles(None);
        assert!(cleared.section_styles().is_none());
    }

    #[test]
    fn test_legacy_default_is_empty() {
        let payload = LegacyPayload::default();

        assert!(blocks_of(&SectionPayload::Legacy(payload)).is_empty());
    }

    #[test]
    fn test_unknown_block_types_survive_parsing() {
        let payload = SectionPayload::parse(
            r#"{"blocks": [
                {"id": "5c55349a-51f3-4e4f-9d96-35a0b79b04bd", "type": "holo-card", "order": 0, "content": "x"}
            ]}"#,
        )
        .unwrap();

        let blocks = blocks_of(&payload);

        assert_eq!(blocks.len(), 1);
        assert_eq!(blocks[0].kind, BlockType::Other("holo-card".to_string()));
    }
}
