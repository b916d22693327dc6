use serde::{Deserialize, Serialize};

/// Section kinds are a closed set, but values persisted by older builds are
/// passed through verbatim rather than rejected.
#[derive(Debug, Clone, Eq, PartialEq, Hash, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum SectionType {
    Hero,
    About,
    Text,
    ImageText,
    Services,
    Gallery,
    Testimonials,
    Contact,
    Footer,
    Hours,
    Other(String),
}

impl SectionType {
    pub fn as_str(&self) -> &str {
        match self {
            Self::Hero => "hero",
            Self::About => "about",
            Self::Text => "text",
            Self::ImageText => "image-text",
            Self::Services => "services",
            Self::Gallery => "gallery",
            Self::Testimonials => "testimonials",
            Self::Contact => "contact",
            Self::Footer => "footer",
            Self::Hours => "hours",
            Self::Other(s) => s,
        }
    }
}

impl From<&str> for SectionType {
    fn from(s: &str) -> Self {
        match s {
            "hero" => Self::Hero,
            "about" => Self::About,
            "text" => Self::Text,
            "image-text" => Self::ImageText,
            "services" => Self::Services,
            "gallery" => Self::Gallery,
            "testimonials" => Self::Testimonials,
            "contact" => Self::Contact,
            "footer" => Self::Footer,
            "hours" => Self::Hours,
            other => Self::Other(other.to_string()),
        }
    }
}

impl From<String> for SectionType {
    fn from(s: String) -> Self {
        Self::from(s.as_str())
    }
}

impl From<SectionType> for String {
    fn from(t: SectionType) -> Self {
        t.as_str().to_string()
    }
}

impl std::fmt::Display for SectionType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl PartialEq<&str> for SectionType {
    fn eq(&self, other: &&str) -> bool {
        self.as_str() == *other
    }
}

impl sqlx::Type<sqlx::Postgres> for SectionType {
    fn type_info() -> sqlx::postgres::PgTypeInfo {
        <String as sqlx::Type<sqlx::Postgres>>::type_info()
    }
}

impl<'q> sqlx::Encode<'q, sqlx::Postgres> for SectionType {
    fn encode_by_ref(
        &self,
        buf: &mut sqlx::postgres::PgArgumentBuffer,
    ) -> Result<sqlx::encode::IsNull, sqlx::error::BoxDynError> {
        <&str as sqlx::Encode<sqlx::Postgres>>::encode_by_ref(&self.as_str(), buf)
    }
}

impl<'r> sqlx::Decode<'r, sqlx::Postgres> for SectionType {
    fn decode(
        value: sqlx::postgres::PgValueRef<'r>,
    ) -> Result<Self, sqlx::error::BoxDynError> {
        let s = <&str as sqlx::Decode<sqlx::Postgres>>::decode(value)?;
        Ok(Self::from(s))
    }
}
