use serde::Serialize;

use crate::models::{ButtonStyle, SectionType};

/// A named bundle of default visual values. Catalog entries are immutable;
/// ids are unique. The first entry is the designated default preset.
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ThemePreset {
    pub id: &'static str,
    pub name: &'static str,
    pub description: &'static str,
    pub palette: PresetPalette,
    pub fonts: PresetFonts,
    pub radius: &'static str,
    pub button_style: ButtonStyle,
    pub default_sections: &'static [SectionType],
    pub header_style: Option<&'static str>,
}

#[derive(Debug, Serialize)]
pub struct PresetPalette {
    pub primary: &'static str,
    pub secondary: &'static str,
    pub accent: &'static str,
    pub background: &'static str,
    pub text: &'static str,
    pub muted: &'static str,
}

#[derive(Debug, Serialize)]
pub struct PresetFonts {
    pub heading: &'static str,
    pub body: &'static str,
}

static CATALOG: [ThemePreset; 6] = [
    ThemePreset {
        id: "bloom",
        name: "Bloom",
        description: "Warm, friendly default with generous spacing",
        palette: PresetPalette {
            primary: "#7c3aed",
            secondary: "#a78bfa",
            accent: "#f59e0b",
            background: "#fffbf5",
            text: "#1f2937",
            muted: "#9ca3af",
        },
        fonts: PresetFonts {
            heading: "Fraunces",
            body: "Inter",
        },
        radius: "1rem",
        button_style: ButtonStyle::Pill,
        default_sections: &[
            SectionType::Hero,
            SectionType::About,
            SectionType::Services,
            SectionType::Contact,
            SectionType::Footer,
        ],
        header_style: Some("centered"),
    },
    ThemePreset {
        id: "slate",
        name: "Slate",
        description: "Understated and professional",
        palette: PresetPalette {
            primary: "#0f172a",
            secondary: "#334155",
            accent: "#0ea5e9",
            background: "#ffffff",
            text: "#0f172a",
            muted: "#64748b",
        },
        fonts: PresetFonts {
            heading: "Inter",
            body: "Inter",
        },
        radius: "0.25rem",
        button_style: ButtonStyle::Square,
        default_sections: &[
            SectionType::Hero,
            SectionType::About,
            SectionType::Services,
            SectionType::Contact,
            SectionType::Footer,
        ],
        header_style: None,
    },
    ThemePreset {
        id: "sunset",
        name: "Sunset",
        description: "Vivid gradients for creative portfolios",
        palette: PresetPalette {
            primary: "#e11d48",
            secondary: "#fb7185",
            accent: "#fbbf24",
            background: "#fff7ed",
            text: "#27272a",
            muted: "#a1a1aa",
        },
        fonts: PresetFonts {
            heading: "Poppins",
            body: "Nunito",
        },
        radius: "0.75rem",
        button_style: ButtonStyle::Rounded,
        default_sections: &[
            SectionType::Hero,
            SectionType::Gallery,
            SectionType::About,
            SectionType::Contact,
            SectionType::Footer,
        ],
        header_style: Some("overlay"),
    },
    ThemePreset {
        id: "forest",
        name: "Forest",
        description: "Earthy tones for local businesses",
        palette: PresetPalette {
            primary: "#166534",
            secondary: "#4d7c0f",
            accent: "#ca8a04",
            background: "#f7fee7",
            text: "#1c1917",
            muted: "#78716c",
        },
        fonts: PresetFonts {
            heading: "Lora",
            body: "Source Sans 3",
        },
        radius: "0.5rem",
        button_style: ButtonStyle::Rounded,
        default_sections: &[
            SectionType::Hero,
            SectionType::About,
            SectionType::Services,
            SectionType::Hours,
            SectionType::Contact,
            SectionType::Footer,
        ],
        header_style: None,
    },
    ThemePreset {
        id: "porcelain",
        name: "Porcelain",
        description: "Monochrome, typography-first",
        palette: PresetPalette {
            primary: "#18181b",
            secondary: "#3f3f46",
            accent: "#18181b",
            background: "#fafafa",
            text: "#18181b",
            muted: "#a1a1aa",
        },
        fonts: PresetFonts {
            heading: "Playfair Display",
            body: "Georgia",
        },
        radius: "0",
        button_style: ButtonStyle::Square,
        default_sections: &[
            SectionType::Hero,
            SectionType::About,
            SectionType::Contact,
            SectionType::Footer,
        ],
        header_style: Some("minimal"),
    },
    ThemePreset {
        id: "harbor",
        name: "Harbor",
        description: "Cool blues with a calm, coastal feel",
        palette: PresetPalette {
            primary: "#0369a1",
            secondary: "#38bdf8",
            accent: "#f97316",
            background: "#f0f9ff",
            text: "#0c4a6e",
            muted: "#7dd3fc",
        },
        fonts: PresetFonts {
            heading: "Montserrat",
            body: "Open Sans",
        },
        radius: "0.5rem",
        button_style: ButtonStyle::Pill,
        default_sections: &[
            SectionType::Hero,
            SectionType::About,
            SectionType::Testimonials,
            SectionType::Contact,
            SectionType::Footer,
        ],
        header_style: None,
    },
];

pub fn catalog() -> &'static [ThemePreset] {
    &CATALOG
}

pub fn default_preset() -> &'static ThemePreset {
    &CATALOG[0]
}

/// Look a family up in the catalog, falling back to the default preset for
/// unknown families. Total.
pub fn find_preset(family: &str) -> &'static ThemePreset {
    CATALOG
        .iter()
        .find(|p| p.id == family)
        .unwrap_or(default_preset())
}
