use std::path::Path;

use tracing::debug;

use crate::error::Result;
use crate::overlay::OverlayImage;

/// File extensions offered by the image picker.
pub const IMAGE_EXTENSIONS: &[&str] = &["png", "jpg", "jpeg", "webp", "bmp", "gif"];

/// Decode an encoded image (format guessed from content) into an overlay image.
pub fn decode_image(bytes: Vec<u8>) -> Result<OverlayImage> {
    let decoded = image::load_from_memory(&bytes)?;
    let rgba = decoded.to_rgba8();
    debug!(
        width = rgba.width(),
        height = rgba.height(),
        bytes = bytes.len(),
        "Decoded image"
    );
    Ok(OverlayImage::new(bytes, rgba))
}

/// Read and decode an image file.
pub fn load_image_file(path: &Path) -> Result<OverlayImage> {
    let bytes = std::fs::read(path)?;
    decode_image(bytes)
}
