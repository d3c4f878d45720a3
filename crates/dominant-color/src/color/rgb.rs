//! Opaque RGB color triple.

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// An opaque RGB color.
///
/// Extraction results use this type as the bucket key: every channel of an
/// extracted color is a multiple of 8 in `0..=248`. The type itself is a
/// plain 8-bit triple and does not enforce the grid, so it also serves as a
/// general color value for theming output.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Rgb {
    /// Red channel (0..=255)
    pub r: u8,
    /// Green channel (0..=255)
    pub g: u8,
    /// Blue channel (0..=255)
    pub b: u8,
}

impl Rgb {
    /// Create a color from channel values.
    #[inline]
    pub const fn new(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b }
    }

    /// Convert to a byte array [R, G, B].
    #[inline]
    pub fn to_bytes(self) -> [u8; 3] {
        [self.r, self.g, self.b]
    }

    /// Format as a lowercase `#rrggbb` hex string.
    ///
    /// # Example
    ///
    /// ```
    /// use dominant_color::Rgb;
    ///
    /// assert_eq!(Rgb::new(136, 8, 248).to_hex(), "#8808f8");
    /// ```
    pub fn to_hex(self) -> String {
        format!("#{:02x}{:02x}{:02x}", self.r, self.g, self.b)
    }

    /// Format as a CSS `rgb()` function.
    pub fn css_rgb(self) -> String {
        format!("rgb({}, {}, {})", self.r, self.g, self.b)
    }

    /// Format as a CSS `rgba()` function with the given alpha.
    ///
    /// # Example
    ///
    /// ```
    /// use dominant_color::Rgb;
    ///
    /// assert_eq!(Rgb::new(136, 8, 248).css_rgba(0.5), "rgba(136, 8, 248, 0.5)");
    /// ```
    pub fn css_rgba(self, alpha: f32) -> String {
        format!("rgba({}, {}, {}, {})", self.r, self.g, self.b, alpha)
    }
}
