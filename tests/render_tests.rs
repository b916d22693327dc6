mod common;

#[cfg(test)]
pub mod render_tests {
    use super::common::*;

    use std::collections::HashMap;

    use sitebloom::content::SectionPayload;
    use sitebloom::models::{
        Alignment, BlockSettings, BlockType, ButtonStyle, LinkTarget,
        SectionStyles, SectionType,
    };
    use sitebloom::render::{
        render_section, RenderContext, RenderMode, RenderNode, ResolvedLink,
        SectionStyle,
    };
    use sitebloom::themes::resolve;
    use uuid::Uuid;

    fn editor_ctx() -> RenderContext {
        RenderContext::new(RenderMode::Editor, HashMap::new())
    }

    fn public_ctx() -> RenderContext {
        RenderContext::new(RenderMode::Public, HashMap::new())
    }

    fn section_children(node: Option<RenderNode>) -> Vec<RenderNode> {
        match node.expect("section should render") {
            RenderNode::Section { children, .. } => children,
            other => panic!("expected a section node, got {:?}", other),
        }
    }

    #[test]
    fn test_style_cascade_override_beats_theme() {
        let theme = resolve("slate", None);
        let overrides = SectionStyles {
            background_color: Some("#bada55".to_string()),
            button_style: Some(ButtonStyle::Pill),
            ..SectionStyles::default()
        };

        let style = SectionStyle::resolve(Some(&overrides), &theme);

        assert_eq!(style.background, "#bada55");
        assert_eq!(style.button_style, ButtonStyle::Pill);
        // Everything the override leaves unset falls back to the theme.
        assert_eq!(style.heading_font, theme.fonts.heading);
        assert_eq!(style.text_color, theme.palette.text);
    }

    #[test]
    fn test_style_cascade_without_override_is_the_theme() {
        let theme = resolve("forest", None);

        let style = SectionStyle::resolve(None, &theme);

        assert_eq!(style.background, theme.palette.background);
        assert_eq!(style.heading_color, theme.palette.primary);
        assert_eq!(style.button_style, theme.button_style);
    }

    #[test]
    fn test_blocks_render_in_order_and_ignore_legacy_fields() {
        let theme = resolve("bloom", None);
        let payload = SectionPayload::parse(
            r#"{
                "title": "stale legacy",
                "blocks": [
                    {"id": "0b57cd75-2276-4774-ba4e-4e5597c3d0f1", "type": "text", "order": 1, "content": "body"},
                    {"id": "5c55349a-51f3-4e4f-9d96-35a0b79b04bd", "type": "title", "order": 0, "content": "Heading"}
                ]
            }"#,
        )
        .unwrap();

        let children = section_children(render_section(
            Uuid::new_v4(),
            &SectionType::Hero,
            &payload,
            &theme,
            &public_ctx(),
        ));

        assert_eq!(children.len(), 2);
        assert!(matches!(
            &children[0],
            RenderNode::Heading { text, level: 1, .. } if text == "Heading"
        ));
        assert!(matches!(
            &children[1],
            RenderNode::Paragraph { text } if text == "body"
        ));
    }

    #[test]
    fn test_unknown_block_types_render_nothing() {
        let theme = resolve("bloom", None);
        let payload = SectionPayload::parse(
            r#"{"blocks": [
                {"id": "5c55349a-51f3-4e4f-9d96-35a0b79b04bd", "type": "holo-card", "order": 0, "content": "x"},
                {"id": "0b57cd75-2276-4774-ba4e-4e5597c3d0f1", "type": "text", "order": 1, "content": "kept"}
            ]}"#,
        )
        .unwrap();

        let children = section_children(render_section(
            Uuid::new_v4(),
            &SectionType::Text,
            &payload,
            &theme,
            &public_ctx(),
        ));

        assert_eq!(children.len(), 1);
    }

    #[test]
    fn test_block_alignment_setting_beats_section_alignment() {
        let theme = resolve("bloom", None);
        let payload = SectionPayload::parse(
            r#"{
                "contentAlignment": "center",
                "blocks": [
                    {"id": "5c55349a-51f3-4e4f-9d96-35a0b79b04bd", "type": "title", "order": 0, "content": "a",
                     "settings": {"alignment": "right"}},
                    {"id": "0b57cd75-2276-4774-ba4e-4e5597c3d0f1", "type": "subtitle", "order": 1, "content": "b"}
                ]
            }"#,
        )
        .unwrap();

        let children = section_children(render_section(
            Uuid::new_v4(),
            &SectionType::Text,
            &payload,
            &theme,
            &public_ctx(),
        ));

        assert!(matches!(
            children[0],
            RenderNode::Heading { alignment: Alignment::Right, .. }
        ));
        assert!(matches!(
            children[1],
            RenderNode::Heading { alignment: Alignment::Center, .. }
        ));
    }

    #[test]
    fn test_button_link_modes_resolve_exclusively() {
        let theme = resolve("bloom", None);
        let page_id = Uuid::new_v4();
        let mut slugs = HashMap::new();
        slugs.insert(page_id, "about".to_string());
        let ctx = RenderContext::new(RenderMode::Public, slugs);

        let mut payload = SectionPayload::parse(r#"{"blocks": []}"#).unwrap();
        let blocks = vec![
            ordered_block(BlockType::Button, 0, "Visit").with_settings(
                BlockSettings::link(LinkTarget::Url {
                    href: "https://example.com".to_string(),
                }),
            ),
            ordered_block(BlockType::Button, 1, "About").with_settings(
                BlockSettings::link(LinkTarget::Page { page_id }),
            ),
            ordered_block(BlockType::Button, 2, "Gone").with_settings(
                BlockSettings::link(LinkTarget::Page {
                    page_id: Uuid::new_v4(),
                }),
            ),
        ];
        payload = SectionPayload::from(payload.with_blocks(blocks));

        let children = section_children(render_section(
            Uuid::new_v4(),
            &SectionType::Text,
            &payload,
            &theme,
            &ctx,
        ));

        assert!(matches!(
            &children[0],
            RenderNode::Button { link: Some(ResolvedLink::External { href }), .. }
                if href == "https://example.com"
        ));
        assert!(matches!(
            &children[1],
            RenderNode::Button { link: Some(ResolvedLink::Internal { slug }), .. }
                if slug == "about"
        ));
        // A link to a deleted page degrades to a plain button.
        assert!(matches!(
            &children[2],
            RenderNode::Button { link: None, .. }
        ));
    }

    #[test]
    fn test_legacy_hero_layout() {
        let theme = resolve("bloom", None);
        let payload = SectionPayload::parse(
            r#"{"title": "Hi", "subtitle": "There", "ctaText": "Go", "ctaLink": "/x"}"#,
        )
        .unwrap();

        let children = section_children(render_section(
            Uuid::new_v4(),
            &SectionType::Hero,
            &payload,
            &theme,
            &public_ctx(),
        ));

        assert_eq!(children.len(), 3);
        assert!(matches!(
            &children[0],
            RenderNode::Heading { level: 1, text, .. } if text == "Hi"
        ));
        assert!(matches!(&children[1], RenderNode::Heading { level: 2, .. }));
        assert!(matches!(
            &children[2],
            RenderNode::Button { link: Some(ResolvedLink::External { href }), .. }
                if href == "/x"
        ));
    }

    #[test]
    fn test_legacy_gallery_uses_section_images() {
        let theme = resolve("sunset", None);
        let payload = SectionPayload::parse(
            r#"{"title": "Work", "sectionImages": ["/a.png", "/b.png"]}"#,
        )
        .unwrap();

        let children = section_children(render_section(
            Uuid::new_v4(),
            &SectionType::Gallery,
            &payload,
            &theme,
            &public_ctx(),
        ));

        assert!(children.iter().any(|node| matches!(
            node,
            RenderNode::Gallery { images } if images.len() == 2
        )));
    }

    #[test]
    fn test_unknown_section_type_is_placeholder_in_editor_and_absent_in_public() {
        let theme = resolve("bloom", None);
        let payload = SectionPayload::parse(r#"{"title": "x"}"#).unwrap();
        let kind = SectionType::Other("mystery".to_string());

        let in_editor = render_section(
            Uuid::new_v4(),
            &kind,
            &payload,
            &theme,
            &editor_ctx(),
        );
        let children = section_children(in_editor);
        assert!(matches!(
            &children[0],
            RenderNode::Placeholder { label } if label == "mystery"
        ));

        let in_public = render_section(
            Uuid::new_v4(),
            &kind,
            &payload,
            &theme,
            &public_ctx(),
        );
        assert!(in_public.is_none());
    }

    #[test]
    fn test_known_type_without_bespoke_layout_behaves_like_unknown() {
        let theme = resolve("bloom", None);
        let payload = SectionPayload::parse(r#"{"text": "x"}"#).unwrap();

        let in_public = render_section(
            Uuid::new_v4(),
            &SectionType::Hours,
            &payload,
            &theme,
            &public_ctx(),
        );

        assert!(in_public.is_none());
    }

    #[test]
    fn test_migrated_empty_blocks_render_an_empty_section() {
        let theme = resolve("bloom", None);
        let payload = SectionPayload::parse(r#"{"blocks": []}"#).unwrap();

        let children = section_children(render_section(
            Uuid::new_v4(),
            &SectionType::Hero,
            &payload,
            &theme,
            &public_ctx(),
        ));

        assert!(children.is_empty());
    }

    #[test]
    fn test_section_node_carries_resolved_style() {
        let theme = resolve("slate", None);
        let payload = SectionPayload::parse(
            r##"{"title": "x", "sectionStyles": {"backgroundColor": "#00ff00"}}"##,
        )
        .unwrap();

        let node = render_section(
            Uuid::new_v4(),
            &SectionType::About,
            &payload,
            &theme,
            &public_ctx(),
        )
        .expect("about renders");

        match node {
            RenderNode::Section { style, .. } => {
                assert_eq!(style.background, "#00ff00");
                assert_eq!(style.body_font, theme.fonts.body);
            }
            other => panic!("expected section, got {:?}", other),
        }
    }
}
