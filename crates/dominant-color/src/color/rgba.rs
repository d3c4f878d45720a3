//! RGBA pixel sample.

use crate::quantize::quantize_channel;

use super::rgb::Rgb;

/// A single pixel sample with alpha, channels in `0..=255`.
///
/// Samples are ephemeral: they are read, quantized, filtered, and either
/// discarded or counted. Nothing stores them.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Rgba {
    /// Red channel (0..=255)
    pub r: u8,
    /// Green channel (0..=255)
    pub g: u8,
    /// Blue channel (0..=255)
    pub b: u8,
    /// Alpha channel (0 transparent ..= 255 opaque)
    pub a: u8,
}

impl Rgba {
    /// Create a sample from channel values.
    #[inline]
    pub const fn new(r: u8, g: u8, b: u8, a: u8) -> Self {
        Self { r, g, b, a }
    }

    /// Create a fully opaque sample.
    #[inline]
    pub const fn opaque(r: u8, g: u8, b: u8) -> Self {
        Self::new(r, g, b, 255)
    }

    /// Create a sample from a `[R, G, B, A]` byte array.
    ///
    /// # Example
    ///
    /// ```
    /// use dominant_color::Rgba;
    ///
    /// assert_eq!(Rgba::from_bytes([10, 20, 30, 255]), Rgba::new(10, 20, 30, 255));
    /// ```
    #[inline]
    pub fn from_bytes(bytes: [u8; 4]) -> Self {
        Self::new(bytes[0], bytes[1], bytes[2], bytes[3])
    }

    /// Snap all four channels onto the bucket grid.
    ///
    /// Alpha is quantized along with the color channels; the transparency
    /// filter compares the quantized value.
    #[inline]
    pub fn quantized(self) -> Self {
        Self {
            r: quantize_channel(self.r),
            g: quantize_channel(self.g),
            b: quantize_channel(self.b),
            a: quantize_channel(self.a),
        }
    }

    /// The sample's color with alpha dropped.
    #[inline]
    pub fn color(self) -> Rgb {
        Rgb::new(self.r, self.g, self.b)
    }
}
