mod common;

#[cfg(test)]
pub mod publish_tests {
    use super::common::*;

    use sitebloom::models::SectionType;
    use sitebloom::publish::Snapshot;
    use sitebloom::themes::resolve;

    #[test]
    fn test_assemble_orders_pages_and_sections_by_position() {
        let site = make_site("Atelier", "bloom");
        let theme = resolve(&site.theme_family, None);

        let page_a = make_page(site.id, "About", "about", 1);
        let page_b = make_page(site.id, "Home", "home", 0);

        let s0 = make_section(page_b.id, SectionType::Footer, 2, "{}");
        let s1 = make_section(page_b.id, SectionType::Hero, 0, "{}");
        let s2 = make_section(page_b.id, SectionType::About, 1, "{}");

        let snapshot = Snapshot::assemble(
            &site,
            theme,
            vec![(page_a.clone(), vec![]), (page_b.clone(), vec![s0, s1, s2])],
        );

        assert_eq!(snapshot.pages.len(), 2);
        assert_eq!(snapshot.pages[0].slug, "home");
        assert_eq!(snapshot.pages[1].slug, "about");

        let kinds: Vec<SectionType> = snapshot.pages[0]
            .sections
            .iter()
            .map(|s| s.kind.clone())
            .collect();
        assert_eq!(
            kinds,
            vec![SectionType::Hero, SectionType::About, SectionType::Footer]
        );
    }

    #[test]
    fn test_assemble_carries_site_and_theme_fields() {
        let site = make_site("Atelier", "harbor");
        let theme = resolve(&site.theme_family, None);

        let snapshot = Snapshot::assemble(&site, theme.clone(), vec![]);

        assert_eq!(snapshot.site_name, "Atelier");
        assert_eq!(snapshot.theme_family, "harbor");
        assert_eq!(snapshot.theme, theme);
    }

    #[test]
    fn test_assemble_parses_section_data_into_the_document() {
        let site = make_site("Atelier", "bloom");
        let theme = resolve(&site.theme_family, None);
        let page = make_page(site.id, "Home", "home", 0);
        let section =
            make_section(page.id, SectionType::Hero, 0, r#"{"title": "Hi"}"#);

        let snapshot =
            Snapshot::assemble(&site, theme, vec![(page, vec![section])]);

        let data = &snapshot.pages[0].sections[0].data;
        assert_eq!(data.get("title").and_then(|v| v.as_str()), Some("Hi"));
    }

    #[test]
    fn test_assemble_replaces_malformed_section_data_with_empty_object() {
        let site = make_site("Atelier", "bloom");
        let theme = resolve(&site.theme_family, None);
        let page = make_page(site.id, "Home", "home", 0);
        let section = make_section(page.id, SectionType::Hero, 0, "{broken");

        let snapshot =
            Snapshot::assemble(&site, theme, vec![(page, vec![section])]);

        let data = &snapshot.pages[0].sections[0].data;
        assert!(data.as_object().is_some_and(|map| map.is_empty()));
    }

    #[test]
    fn test_assemble_drops_sub_entity_bookkeeping() {
        let site = make_site("Atelier", "bloom");
        let theme = resolve(&site.theme_family, None);
        let page = make_page(site.id, "Home", "home", 0);
        let section = make_section(page.id, SectionType::Hero, 0, "{}");

        let snapshot =
            Snapshot::assemble(&site, theme, vec![(page, vec![section])]);
        let json: serde_json::Value =
            serde_json::from_str(&snapshot.to_json().unwrap()).unwrap();

        let page_json = &json["pages"][0];
        assert!(page_json.get("createdAt").is_none());
        assert!(page_json.get("editedAt").is_none());
        assert!(page_json["sections"][0].get("editedAt").is_none());
        assert!(page_json["sections"][0].get("pageId").is_none());
    }

    #[test]
    fn test_snapshot_json_round_trip() {
        let site = make_site("Atelier", "sunset");
        let theme = resolve(&site.theme_family, None);
        let page = make_page(site.id, "Home", "home", 0);
        let section = make_section(
            page.id,
            SectionType::Other("legacy-banner".to_string()),
            0,
            r#"{"title": "Hi"}"#,
        );

        let snapshot =
            Snapshot::assemble(&site, theme, vec![(page, vec![section])]);

        let reloaded = Snapshot::from_json(&snapshot.to_json().unwrap()).unwrap();
        assert_eq!(reloaded, snapshot);
    }
}
