//! Common test infrastructure for huespot integration tests.
//!
//! Each test file compiles its own copy of this module, so items may appear
//! unused from the perspective of a single test file even though they're
//! used elsewhere.

#![allow(dead_code)]

use image::{ImageFormat, Rgba, RgbaImage};
use std::io::Cursor;
use std::path::{Path, PathBuf};

/// A single-color image.
pub fn solid(width: u32, height: u32, px: [u8; 4]) -> RgbaImage {
    RgbaImage::from_pixel(width, height, Rgba(px))
}

/// Two vertical bands: `left` for x < split_x, `right` for the rest.
pub fn split(width: u32, height: u32, split_x: u32, left: [u8; 4], right: [u8; 4]) -> RgbaImage {
    RgbaImage::from_fn(width, height, |x, _| {
        if x < split_x {
            Rgba(left)
        } else {
            Rgba(right)
        }
    })
}

/// Encode an image as an in-memory PNG.
pub fn png_bytes(img: &RgbaImage) -> Vec<u8> {
    let mut buf = Cursor::new(Vec::new());
    img.write_to(&mut buf, ImageFormat::Png)
        .expect("PNG encoding should not fail");
    buf.into_inner()
}

/// Save an image as `<dir>/<name>` and return the full path.
pub fn write_png(dir: &Path, name: &str, img: &RgbaImage) -> PathBuf {
    let path = dir.join(name);
    img.save(&path).expect("PNG save should not fail");
    path
}
