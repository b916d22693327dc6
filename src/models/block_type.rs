use serde::{Deserialize, Serialize};

/// Block kinds inside a migrated section payload. Unknown values survive a
/// round trip but render nothing.
#[derive(Debug, Clone, Eq, PartialEq, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum BlockType {
    Title,
    Subtitle,
    Text,
    Image,
    Video,
    Audio,
    Button,
    Shape,
    Gallery,
    ContactForm,
    SocialIcons,
    Other(String),
}

impl BlockType {
    pub fn as_str(&self) -> &str {
        match self {
            Self::Title => "title",
            Self::Subtitle => "subtitle",
            Self::Text => "text",
            Self::Image => "image",
            Self::Video => "video",
            Self::Audio => "audio",
            Self::Button => "button",
            Self::Shape => "shape",
            Self::Gallery => "gallery",
            Self::ContactForm => "contact-form",
            Self::SocialIcons => "social-icons",
            Self::Other(s) => s,
        }
    }
}

impl From<&str> for BlockType {
    fn from(s: &str) -> Self {
        match s {
            "title" => Self::Title,
            "subtitle" => Self::Subtitle,
            "text" => Self::Text,
            "image" => Self::Image,
            "video" => Self::Video,
            "audio" => Self::Audio,
            "button" => Self::Button,
            "shape" => Self::Shape,
            "gallery" => Self::Gallery,
            "contact-form" => Self::ContactForm,
            "social-icons" => Self::SocialIcons,
            other => Self::Other(other.to_string()),
        }
    }
}

impl From<String> for BlockType {
    fn from(s: String) -> Self {
        Self::from(s.as_str())
    }
}

impl From<BlockType> for String {
    fn from(t: BlockType) -> Self {
        t.as_str().to_string()
    }
}

impl std::fmt::Display for BlockType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl PartialEq<&str> for BlockType {
    fn eq(&self, other: &&str) -> bool {
        self.as_str() == *other
    }
}
