#[cfg(test)]
pub mod starter_tests {
    use sitebloom::models::SectionType;
    use sitebloom::starter::generate;
    use sitebloom::themes::find_preset;

    #[test]
    fn test_generate_unions_selection_with_preset_defaults_in_canonical_order() {
        // Porcelain declares hero/about/contact/footer as its defaults.
        let preset = find_preset("porcelain");
        assert_eq!(
            preset.default_sections.to_vec(),
            vec![
                SectionType::Hero,
                SectionType::About,
                SectionType::Contact,
                SectionType::Footer
            ]
        );

        let sections =
            generate("Atelier", "porcelain", &[SectionType::Gallery]);

        let kinds: Vec<SectionType> =
            sections.iter().map(|s| s.kind.clone()).collect();
        assert_eq!(
            kinds,
            vec![
                SectionType::Hero,
                SectionType::About,
                SectionType::Gallery,
                SectionType::Contact,
                SectionType::Footer,
            ]
        );
    }

    #[test]
    fn test_generate_assigns_contiguous_positions() {
        let sections = generate("Atelier", "forest", &[]);

        let positions: Vec<i32> = sections.iter().map(|s| s.position).collect();
        let expected: Vec<i32> = (0..sections.len() as i32).collect();
        assert_eq!(positions, expected);
    }

    #[test]
    fn test_generate_always_includes_hero_and_footer() {
        for family in ["bloom", "slate", "sunset", "forest", "porcelain", "harbor"] {
            let sections = generate("Atelier", family, &[]);

            assert_eq!(sections.first().map(|s| s.kind.clone()), Some(SectionType::Hero));
            assert_eq!(sections.last().map(|s| s.kind.clone()), Some(SectionType::Footer));
        }
    }

    #[test]
    fn test_generate_drops_types_outside_the_canonical_list() {
        let sections = generate(
            "Atelier",
            "porcelain",
            &[
                SectionType::Text,
                SectionType::ImageText,
                SectionType::Other("sparkle".to_string()),
            ],
        );

        assert!(sections.iter().all(|s| s.kind != SectionType::Text));
        assert!(sections.iter().all(|s| s.kind != SectionType::ImageText));
        assert!(sections
            .iter()
            .all(|s| !matches!(s.kind, SectionType::Other(_))));
    }

    #[test]
    fn test_generate_unknown_family_uses_default_preset_sections() {
        let with_unknown = generate("Atelier", "no-such-family", &[]);
        let with_default = generate("Atelier", "bloom", &[]);

        let kinds = |sections: &[sitebloom::starter::StarterSection]| {
            sections
                .iter()
                .map(|s| s.kind.clone())
                .collect::<Vec<SectionType>>()
        };
        assert_eq!(kinds(&with_unknown), kinds(&with_default));
    }

    #[test]
    fn test_generate_interpolates_site_name_into_generic_hero() {
        let sections = generate("Corner Bakery", "slate", &[]);

        let hero = sections
            .iter()
            .find(|s| s.kind == SectionType::Hero)
            .expect("hero is mandatory");
        assert_eq!(
            hero.payload.title.as_deref(),
            Some("Welcome to Corner Bakery")
        );
    }

    #[test]
    fn test_generate_flagship_preset_overrides_hero_and_about_copy() {
        let sections = generate("Corner Bakery", "bloom", &[]);

        let hero = sections
            .iter()
            .find(|s| s.kind == SectionType::Hero)
            .expect("hero is mandatory");
        assert_eq!(
            hero.payload.title.as_deref(),
            Some("Corner Bakery is in bloom")
        );

        let about = sections
            .iter()
            .find(|s| s.kind == SectionType::About)
            .expect("bloom's defaults include about");
        assert_eq!(about.payload.title.as_deref(), Some("Our story"));

        // Only the flagship carries overrides; slate keeps generic copy.
        let slate_about = generate("Corner Bakery", "slate", &[])
            .into_iter()
            .find(|s| s.kind == SectionType::About)
            .expect("slate's defaults include about");
        assert_eq!(slate_about.payload.title.as_deref(), Some("About us"));
    }

    #[test]
    fn test_generate_footer_carries_site_name() {
        let sections = generate("Corner Bakery", "harbor", &[]);

        let footer = sections
            .iter()
            .find(|s| s.kind == SectionType::Footer)
            .expect("footer is mandatory");
        assert_eq!(footer.payload.text.as_deref(), Some("© Corner Bakery"));
    }
}
