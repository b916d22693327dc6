use crate::content::{default_payload, LegacyPayload};
use crate::models::SectionType;
use crate::themes::find_preset;

/// The fixed sequence starter sections appear in. Types outside this list
/// are never generated, whatever the caller selected.
pub const CANONICAL_SECTIONS: [SectionType; 8] = [
    SectionType::Hero,
    SectionType::About,
    SectionType::Services,
    SectionType::Gallery,
    SectionType::Testimonials,
    SectionType::Hours,
    SectionType::Contact,
    SectionType::Footer,
];

/// The preset whose starter copy differs from the generic defaults.
const FLAGSHIP_PRESET: &str = "bloom";

/// A generated section before persistence: type, payload, order.
#[derive(Debug, Clone, PartialEq)]
pub struct StarterSection {
    pub kind: SectionType,
    pub payload: LegacyPayload,
    pub position: i32,
}

/// Build the initial section list for a new site.
///
/// The type set is the union of the mandatory hero/footer pair, the
/// caller's selection, and the preset's declared defaults; the output
/// follows [`CANONICAL_SECTIONS`] order with contiguous positions.
pub fn generate(
    site_name: &str,
    theme_family: &str,
    selected: &[SectionType],
) -> Vec<StarterSection> {
    let preset = find_preset(theme_family);

    let wanted = |kind: &SectionType| {
        *kind == SectionType::Hero
            || *kind == SectionType::Footer
            || selected.contains(kind)
            || preset.default_sections.contains(kind)
    };

    CANONICAL_SECTIONS
        .iter()
        .filter(|kind| wanted(kind))
        .enumerate()
        .map(|(i, kind)| {
            let mut payload = default_payload(kind, site_name);
            apply_preset_copy(preset.id, kind, site_name, &mut payload);

            StarterSection {
                kind: kind.clone(),
                payload,
                position: i as i32,
            }
        })
        .collect()
}

/// Closed per-preset copy table. Only the flagship preset carries
/// overrides; anything else keeps the generic defaults.
fn apply_preset_copy(
    preset_id: &str,
    kind: &SectionType,
    site_name: &str,
    payload: &mut LegacyPayload,
) {
    if preset_id != FLAGSHIP_PRESET {
        return;
    }

    match kind {
        SectionType::Hero => {
            payload.title = Some(format!("{} is in bloom", site_name));
            payload.subtitle =
                Some("Handmade with care, ready to grow.".to_string());
        }
        SectionType::About => {
            payload.title = Some("Our story".to_string());
            payload.text = Some(
                "Every great garden starts with a single seed. Tell visitors \
                 how yours was planted."
                    .to_string(),
            );
        }
        _ => {}
    }
}
