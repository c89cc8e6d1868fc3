use std::path::Path;

use crate::foundation::error::{GoldenError, GoldenResult};

/// MIME type implied by a file's extension, when it names an image format.
pub fn media_type_for_path(path: &Path) -> Option<&'static str> {
    image::ImageFormat::from_path(path)
        .ok()
        .map(|format| format.to_mime_type())
}

pub fn is_image_media_type(media_type: &str) -> bool {
    media_type
        .trim()
        .to_ascii_lowercase()
        .starts_with("image/")
}

/// Gate for dropped files: anything not declared as `image/*` is refused before decoding.
pub fn admit_dropped(media_type: Option<&str>) -> GoldenResult<()> {
    match media_type {
        Some(mt) if is_image_media_type(mt) => Ok(()),
        Some(mt) => Err(GoldenError::unsupported_media(mt)),
        None => Err(GoldenError::unsupported_media("unknown")),
    }
}

#[cfg(test)]
#[path = "../../tests/unit/assets/media.rs"]
mod tests;
