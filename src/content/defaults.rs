use crate::models::SectionType;

use super::payload::LegacyPayload;

/// Placeholder copy for a freshly created section. Written in the legacy
/// flat shape; the read-time migration produces the block view, and the
/// first edit that saves rewrites it in the block shape.
pub fn default_payload(kind: &SectionType, site_name: &str) -> LegacyPayload {
    let mut payload = LegacyPayload::default();

    match kind {
        SectionType::Hero => {
            payload.title = Some(format!("Welcome to {}", site_name));
            payload.subtitle =
                Some("Tell visitors what makes you special.".to_string());
            payload.cta_text = Some("Get in touch".to_string());
            payload.cta_link = Some("#contact".to_string());
        }
        SectionType::About => {
            payload.title = Some("About us".to_string());
            payload.text = Some(
                "Share your story: who you are, what you do, and why you do it."
                    .to_string(),
            );
        }
        SectionType::Text => {
            payload.text = Some("Write something here.".to_string());
        }
        SectionType::ImageText => {
            payload.title = Some("A picture and a story".to_string());
            payload.text =
                Some("Pair an image with a short paragraph.".to_string());
        }
        SectionType::Services => {
            payload.title = Some("What we offer".to_string());
            payload.text = Some(
                "List your services and what clients can expect from each."
                    .to_string(),
            );
        }
        SectionType::Gallery => {
            payload.title = Some("Gallery".to_string());
            payload.section_images = Some(Vec::new());
        }
        SectionType::Testimonials => {
            payload.title = Some("What people say".to_string());
            payload.text = Some(
                "\u{201c}Working with them was a pleasure.\u{201d} — A happy client"
                    .to_string(),
            );
        }
        SectionType::Contact => {
            payload.title = Some("Contact us".to_string());
            payload.text =
                Some("We'd love to hear from you.".to_string());
        }
        SectionType::Footer => {
            payload.text = Some(format!("© {}", site_name));
        }
        SectionType::Hours => {
            payload.title = Some("Opening hours".to_string());
            payload.text = Some("Mon–Fri 9:00–17:00".to_string());
        }
        SectionType::Other(_) => {}
    }

    payload
}
