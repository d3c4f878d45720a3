//! Image acquisition: decoding files into RGBA buffers for sampling.
//!
//! Decoding goes through the `image` crate; everything downstream works on
//! plain [`RgbaImage`] buffers. [`samples`] bridges those buffers to the
//! extractor's sample type.

use std::path::Path;

use dominant_color::Rgba;
use image::imageops::FilterType;
use image::RgbaImage;

use crate::error::SourceError;

/// Read and decode the image file at `path`.
pub fn open_image(path: &Path) -> Result<RgbaImage, SourceError> {
    let bytes = std::fs::read(path)?;
    decode_bytes(&bytes)
}

/// Decode an encoded image (PNG, JPEG, GIF, ...) from memory.
pub fn decode_bytes(bytes: &[u8]) -> Result<RgbaImage, SourceError> {
    let decoded = image::load_from_memory(bytes)?;
    Ok(decoded.to_rgba8())
}

/// Downscale an image whose longest side exceeds `max_dim`.
///
/// Returns `None` when the image is already within the limit (or the limit
/// is 0, which disables downscaling). Resampling is nearest-neighbor only:
/// every pixel of the result is a pixel of the source, so downscaling can
/// shift vote proportions slightly but can never introduce a color the
/// image does not contain.
pub fn shrink_for_sampling(img: &RgbaImage, max_dim: u32) -> Option<RgbaImage> {
    let (width, height) = img.dimensions();
    let side = width.max(height);
    if max_dim == 0 || side <= max_dim {
        return None;
    }

    let scaled_w = (u64::from(width) * u64::from(max_dim) / u64::from(side)).max(1) as u32;
    let scaled_h = (u64::from(height) * u64::from(max_dim) / u64::from(side)).max(1) as u32;
    tracing::debug!(width, height, scaled_w, scaled_h, "Downscaling for sampling");

    Some(image::imageops::resize(
        img,
        scaled_w,
        scaled_h,
        FilterType::Nearest,
    ))
}

/// Iterate an image's pixels as extractor samples, row-major.
pub fn samples(img: &RgbaImage) -> impl Iterator<Item = Rgba> + '_ {
    img.pixels().map(|px| Rgba::from_bytes(px.0))
}
