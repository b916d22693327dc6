use serde::{Deserialize, Serialize};

use crate::models::{ButtonStyle, SiteTheme};

use super::catalog::{find_preset, ThemePreset};

pub const CUSTOMIZED_LABEL: &str = "Customized";

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Palette {
    pub primary: String,
    pub secondary: String,
    pub accent: String,
    pub background: String,
    pub text: String,
    pub muted: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FontPair {
    pub heading: String,
    pub body: String,
}

/// The fully resolved theme applied to a render. Every field is populated;
/// resolution never yields a missing value.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ComputedTheme {
    pub name: String,
    pub family: String,
    pub palette: Palette,
    pub fonts: FontPair,
    pub radius: String,
    pub button_style: ButtonStyle,
}

fn from_preset(preset: &ThemePreset) -> ComputedTheme {
    ComputedTheme {
        name: preset.name.to_string(),
        family: preset.id.to_string(),
        palette: Palette {
            primary: preset.palette.primary.to_string(),
            secondary: preset.palette.secondary.to_string(),
            accent: preset.palette.accent.to_string(),
            background: preset.palette.background.to_string(),
            text: preset.palette.text.to_string(),
            muted: preset.palette.muted.to_string(),
        },
        fonts: FontPair {
            heading: preset.fonts.heading.to_string(),
            body: preset.fonts.body.to_string(),
        },
        radius: preset.radius.to_string(),
        button_style: preset.button_style,
    }
}

fn pick(field: &Option<String>, fallback: &str) -> String {
    field
        .as_deref()
        .map(str::to_string)
        .unwrap_or_else(|| fallback.to_string())
}

/// Merge a preset with an optional per-site override. Override fields win
/// field-by-field; anything the override leaves unset falls back to the
/// preset. Unknown families resolve against the default preset.
pub fn resolve(family: &str, overrides: Option<&SiteTheme>) -> ComputedTheme {
    let preset = find_preset(family);

    let Some(theme) = overrides else {
        return from_preset(preset);
    };

    ComputedTheme {
        name: CUSTOMIZED_LABEL.to_string(),
        family: family.to_string(),
        palette: Palette {
            primary: pick(&theme.primary_color, preset.palette.primary),
            secondary: pick(&theme.secondary_color, preset.palette.secondary),
            accent: pick(&theme.accent_color, preset.palette.accent),
            background: pick(&theme.background_color, preset.palette.background),
            text: pick(&theme.text_color, preset.palette.text),
            muted: pick(&theme.muted_color, preset.palette.muted),
        },
        fonts: FontPair {
            heading: pick(&theme.heading_font, preset.fonts.heading),
            body: pick(&theme.body_font, preset.fonts.body),
        },
        radius: pick(&theme.radius, preset.radius),
        button_style: theme.button_style.unwrap_or(preset.button_style),
    }
}
