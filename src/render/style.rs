use serde::Serialize;

use crate::models::{ButtonStyle, SectionStyles};
use crate::themes::ComputedTheme;

/// The visual properties a section actually renders with, after the
/// cascade: section override first, then the resolved site theme. Always
/// fully populated because ComputedTheme is total.
#[derive(Debug, Clone, Eq, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SectionStyle {
    pub background: String,
    pub heading_font: String,
    pub body_font: String,
    pub heading_color: String,
    pub text_color: String,
    pub button_style: ButtonStyle,
    pub radius: String,
    pub accent: String,
}

impl SectionStyle {
    pub fn resolve(
        overrides: Option<&SectionStyles>,
        theme: &ComputedTheme,
    ) -> Self {
        let pick = |field: Option<&String>, fallback: &str| {
            field.cloned().unwrap_or_else(|| fallback.to_string())
        };

        let s = overrides;

        Self {
            background: pick(
                s.and_then(|s| s.background_color.as_ref()),
                &theme.palette.background,
            ),
            heading_font: pick(
                s.and_then(|s| s.heading_font.as_ref()),
                &theme.fonts.heading,
            ),
            body_font: pick(
                s.and_then(|s| s.body_font.as_ref()),
                &theme.fonts.body,
            ),
            heading_color: pick(
                s.and_then(|s| s.heading_color.as_ref()),
                &theme.palette.primary,
            ),
            text_color: pick(
                s.and_then(|s| s.text_color.as_ref()),
                &theme.palette.text,
            ),
            button_style: s
                .and_then(|s| s.button_style)
                .unwrap_or(theme.button_style),
            radius: theme.radius.clone(),
            accent: theme.palette.accent.clone(),
        }
    }
}
