//! Huespot - dominant color sampling for raster images.
//!
//! The extraction algorithm lives in the `dominant-color` crate; this crate
//! wires it to images on disk: decoding, per-source memoization, and themed
//! swatch rendering.

pub mod error;
pub mod preview;
pub mod sampler;
pub mod source;
