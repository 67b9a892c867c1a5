use base64::Engine as _;
use image::ImageEncoder as _;

use crate::{
    foundation::error::{TryonError, TryonResult},
    render::surface::Surface,
};

/// JPEG quality used for composite output (0.95 on a unit scale).
pub const DEFAULT_JPEG_QUALITY: u8 = 95;

/// Encoded composite, handed to the result consumer.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct EncodedImage {
    pub width: u32,
    pub height: u32,
    pub bytes: Vec<u8>,
}

impl EncodedImage {
    pub const MIME: &'static str = "image/jpeg";

    /// Self-contained `data:` URI referencing the encoded bytes.
    pub fn to_data_uri(&self) -> String {
        let b64 = base64::engine::general_purpose::STANDARD.encode(&self.bytes);
        format!("data:{};base64,{b64}", Self::MIME)
    }

    pub fn len(&self) -> usize {
        self.bytes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.bytes.is_empty()
    }
}

/// Download filename in the form `<prefix>-<timestamp>.jpg`.
pub fn download_filename(prefix: &str, timestamp_ms: u128) -> String {
    format!("{prefix}-{timestamp_ms}.jpg")
}

/// Encode the surface as baseline JPEG at `quality` (1..=100).
pub fn encode_jpeg(surface: &Surface, quality: u8) -> TryonResult<EncodedImage> {
    if !(1..=100).contains(&quality) {
        return Err(TryonError::validation("jpeg quality must be in 1..=100"));
    }

    let rgb = surface.to_rgb8();
    let mut bytes = Vec::new();
    image::codecs::jpeg::JpegEncoder::new_with_quality(&mut bytes, quality)
        .write_image(
            &rgb,
            surface.width(),
            surface.height(),
            image::ExtendedColorType::Rgb8,
        )
        .map_err(|e| TryonError::render(format!("encode jpeg: {e}")))?;

    Ok(EncodedImage {
        width: surface.width(),
        height: surface.height(),
        bytes,
    })
}

#[cfg(test)]
#[path = "../../tests/unit/encode/jpeg.rs"]
mod tests;
