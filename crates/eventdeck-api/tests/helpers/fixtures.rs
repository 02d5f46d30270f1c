//! Multipart forms and payloads used across tests.

use axum_test::multipart::{MultipartForm, Part};
use eventdeck_core::models::EventFields;
use eventdeck_storage::StagedFile;

/// Smallest byte string that passes for a PNG with the upload checks.
pub fn png_bytes() -> Vec<u8> {
    let mut data = b"\x89PNG\r\n\x1a\n".to_vec();
    data.extend_from_slice(&[0u8; 64]);
    data
}

pub fn png_part(file_name: &str) -> Part {
    Part::bytes(bytes::Bytes::from(png_bytes()))
        .file_name(file_name.to_string())
        .mime_type("image/png")
}

/// All four required text fields plus a link.
pub fn event_text_form() -> MultipartForm {
    MultipartForm::new()
        .add_text("date", "2024-03-01")
        .add_text("heading", "Solidity workshop")
        .add_text("description", "Write and deploy a first contract")
        .add_text("location", "Lab 3")
        .add_text("link", "https://lu.ma/solidity")
}

/// A complete create form with a PNG in the `image` part.
pub fn create_form() -> MultipartForm {
    event_text_form().add_part("image", png_part("poster.png"))
}

/// Fields for a complete event, as the lifecycle service receives them.
pub fn complete_fields() -> EventFields {
    EventFields {
        date: Some("2024-03-01".to_string()),
        heading: Some("Solidity workshop".to_string()),
        description: Some("Write and deploy a first contract".to_string()),
        location: Some("Lab 3".to_string()),
        link: Some("https://lu.ma/solidity".to_string()),
    }
}

/// Stage a small PNG in `dir`, as the multipart reader would.
pub async fn staged_png(dir: &std::path::Path) -> StagedFile {
    StagedFile::stage(dir, "poster.png", "image/png", &png_bytes())
        .await
        .expect("Failed to stage test image")
}
