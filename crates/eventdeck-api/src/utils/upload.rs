//! Multipart parsing and validation for event forms

use axum::extract::multipart::{Field, MultipartError};
use axum::extract::Multipart;
use axum::http::StatusCode;
use eventdeck_core::models::EventFields;
use eventdeck_core::AppError;
use eventdeck_storage::StagedFile;

use crate::state::UploadLimits;

/// Multipart part names that carry the event image.
const IMAGE_FIELDS: [&str; 2] = ["image", "image[]"];

/// Text fields plus the (already staged) image of an event form.
#[derive(Debug, Default)]
pub struct EventForm {
    pub fields: EventFields,
    pub image: Option<StagedFile>,
}

fn multipart_error(context: &str, e: MultipartError) -> AppError {
    if e.status() == StatusCode::PAYLOAD_TOO_LARGE {
        AppError::PayloadTooLarge(format!("{}: {}", context, e.body_text()))
    } else {
        AppError::Validation(format!("{}: {}", context, e.body_text()))
    }
}

/// Read an event form. Only the first image part is kept; later ones are read and
/// discarded. Unknown text fields are ignored.
pub async fn read_event_form(
    mut multipart: Multipart,
    limits: &UploadLimits,
) -> Result<EventForm, AppError> {
    let mut form = EventForm::default();

    while let Some(field) = multipart
        .next_field()
        .await
        .map_err(|e| multipart_error("Failed to read multipart", e))?
    {
        let name = field.name().map(str::to_string).unwrap_or_default();

        if IMAGE_FIELDS.contains(&name.as_str()) {
            if form.image.is_some() {
                tracing::debug!(field = %name, "Ignoring additional image part");
                continue;
            }
            form.image = Some(stage_image(field, limits).await?);
        } else {
            let value = field
                .text()
                .await
                .map_err(|e| multipart_error("Failed to read form field", e))?;
            if !form.fields.set(&name, value) {
                tracing::debug!(field = %name, "Ignoring unknown form field");
            }
        }
    }

    Ok(form)
}

async fn stage_image(field: Field<'_>, limits: &UploadLimits) -> Result<StagedFile, AppError> {
    let filename = sanitize_filename(field.file_name().unwrap_or("upload"))?;
    let content_type = field
        .content_type()
        .unwrap_or("application/octet-stream")
        .to_string();

    let data = field
        .bytes()
        .await
        .map_err(|e| multipart_error("Failed to read file data", e))?;

    if data.is_empty() {
        return Err(AppError::Validation("File is empty".to_string()));
    }
    validate_file_size(data.len(), limits.max_file_size)?;
    validate_file_extension(&filename, &limits.allowed_extensions)?;
    validate_content_type(&content_type, &limits.allowed_content_types)?;

    let staged = StagedFile::stage(&limits.staging_dir, &filename, &content_type, &data).await?;
    Ok(staged)
}

/// Validate file size
pub fn validate_file_size(file_size: usize, max_size: usize) -> Result<(), AppError> {
    if file_size > max_size {
        return Err(AppError::PayloadTooLarge(format!(
            "File size exceeds maximum allowed size of {} MB",
            max_size / 1024 / 1024
        )));
    }
    Ok(())
}

/// Normalize MIME type by stripping parameters (e.g. "image/jpeg; charset=utf-8" -> "image/jpeg").
fn normalize_mime_type(content_type: &str) -> &str {
    content_type
        .split(';')
        .next()
        .map(|s| s.trim())
        .unwrap_or(content_type)
}

/// Validate content type against allowlist. Compares normalized MIME type only.
pub fn validate_content_type(content_type: &str, allowed_types: &[String]) -> Result<(), AppError> {
    let normalized = normalize_mime_type(content_type).to_lowercase();
    if !allowed_types.iter().any(|ct| normalized == ct.to_lowercase()) {
        return Err(AppError::Validation(format!(
            "Invalid content type. Allowed types: {}",
            allowed_types.join(", ")
        )));
    }
    Ok(())
}

/// Validate file extension
pub fn validate_file_extension(
    filename: &str,
    allowed_extensions: &[String],
) -> Result<String, AppError> {
    let extension = match filename.rsplit_once('.') {
        Some((_, ext)) => ext.to_lowercase(),
        None => String::new(),
    };

    if !allowed_extensions.contains(&extension) {
        return Err(AppError::Validation(format!(
            "Invalid file extension. Allowed extensions: {}",
            allowed_extensions.join(", ")
        )));
    }

    Ok(extension)
}

/// Strip directory components and replace unusual characters.
pub fn sanitize_filename(filename: &str) -> Result<String, AppError> {
    const MAX_FILENAME_LENGTH: usize = 255;

    let filename_only = filename
        .rsplit(|c| c == '/' || c == '\\')
        .next()
        .unwrap_or(filename);

    if filename_only.contains("..") {
        return Err(AppError::Validation(
            "Filename contains invalid path traversal".to_string(),
        ));
    }

    let sanitized: String = filename_only
        .chars()
        .take(MAX_FILENAME_LENGTH)
        .map(|c| {
            if c.is_alphanumeric() || c == '.' || c == '-' || c == '_' {
                c
            } else {
                '_'
            }
        })
        .collect();

    if sanitized.trim().is_empty() {
        return Ok("upload".to_string());
    }

    Ok(sanitized)
}
