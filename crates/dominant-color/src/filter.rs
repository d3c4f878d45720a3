//! Admission rules applied between quantization and voting.
//!
//! Raster images are dominated by pixels that say nothing about their
//! subject: transparent padding, black frames, white backgrounds. The
//! [`PixelFilter`] drops those before they can vote.

use crate::color::Rgba;

/// Decides which quantized samples are allowed to vote.
///
/// All three thresholds compare quantized channel values, so quantize first
/// (see [`Rgba::quantized`]). The defaults reproduce the standard
/// extraction behavior:
///
/// - `alpha_cutoff` 40: discard when alpha is at or below it
/// - `black_cutoff` 40: discard when every color channel is at or below it
/// - `white_floor` 216: discard when every color channel is at or above it
///
/// A vivid color with some dark channels passes both color checks: only
/// uniformly dark or uniformly bright samples are dropped.
///
/// # Example
///
/// ```
/// use dominant_color::{PixelFilter, Rgba};
///
/// let filter = PixelFilter::new();
/// assert!(filter.admits(Rgba::opaque(136, 8, 248).quantized()));
/// assert!(!filter.admits(Rgba::opaque(250, 245, 230).quantized())); // near-white
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PixelFilter {
    /// Highest quantized alpha still treated as transparent.
    pub alpha_cutoff: u8,
    /// Highest quantized channel maximum still treated as near-black.
    pub black_cutoff: u8,
    /// Lowest quantized channel minimum already treated as near-white.
    pub white_floor: u8,
}

impl Default for PixelFilter {
    fn default() -> Self {
        Self {
            alpha_cutoff: 40,
            black_cutoff: 40,
            white_floor: 216,
        }
    }
}

impl PixelFilter {
    /// Create a filter with the default thresholds.
    #[inline]
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the transparency cutoff.
    #[inline]
    pub fn alpha_cutoff(mut self, cutoff: u8) -> Self {
        self.alpha_cutoff = cutoff;
        self
    }

    /// Set the near-black cutoff.
    #[inline]
    pub fn black_cutoff(mut self, cutoff: u8) -> Self {
        self.black_cutoff = cutoff;
        self
    }

    /// Set the near-white floor.
    #[inline]
    pub fn white_floor(mut self, floor: u8) -> Self {
        self.white_floor = floor;
        self
    }

    /// True when the (already quantized) sample may vote.
    #[inline]
    pub fn admits(&self, sample: Rgba) -> bool {
        if sample.a <= self.alpha_cutoff {
            return false;
        }
        let brightest = sample.r.max(sample.g).max(sample.b);
        let darkest = sample.r.min(sample.g).min(sample.b);
        brightest > self.black_cutoff && darkest < self.white_floor
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_thresholds() {
        let filter = PixelFilter::default();
        assert_eq!(filter.alpha_cutoff, 40);
        assert_eq!(filter.black_cutoff, 40);
        assert_eq!(filter.white_floor, 216);
    }

    #[test]
    fn test_new_equals_default() {
        assert_eq!(PixelFilter::new(), PixelFilter::default());
    }

    #[test]
    fn test_builder_chaining() {
        let filter = PixelFilter::new()
            .alpha_cutoff(8)
            .black_cutoff(64)
            .white_floor(240);

        assert_eq!(filter.alpha_cutoff, 8);
        assert_eq!(filter.black_cutoff, 64);
        assert_eq!(filter.white_floor, 240);
    }

    #[test]
    fn test_transparency_boundary() {
        let filter = PixelFilter::new();
        // Quantized alpha 40 is out, the next bucket up is in.
        assert!(!filter.admits(Rgba::new(200, 16, 16, 40)));
        assert!(filter.admits(Rgba::new(200, 16, 16, 48)));
        assert!(!filter.admits(Rgba::new(200, 16, 16, 0)));
    }

    #[test]
    fn test_near_black_boundary() {
        let filter = PixelFilter::new();
        // Every channel at or below 40 is near-black.
        assert!(!filter.admits(Rgba::opaque(40, 40, 40)));
        assert!(!filter.admits(Rgba::opaque(40, 8, 0)));
        // One channel above the cutoff rescues the sample.
        assert!(filter.admits(Rgba::opaque(48, 40, 40)));
        assert!(filter.admits(Rgba::opaque(40, 40, 48)));
    }

    #[test]
    fn test_near_white_boundary() {
        let filter = PixelFilter::new();
        // Every channel at or above 216 is near-white.
        assert!(!filter.admits(Rgba::opaque(216, 216, 216)));
        assert!(!filter.admits(Rgba::opaque(248, 232, 216)));
        // One channel below the floor rescues the sample.
        assert!(filter.admits(Rgba::opaque(208, 216, 248)));
    }

    #[test]
    fn test_vivid_colors_with_extreme_channels_pass() {
        let filter = PixelFilter::new();
        // Saturated red: max is bright, min is dark, neither check trips.
        assert!(filter.admits(Rgba::opaque(248, 0, 0)));
        assert!(filter.admits(Rgba::opaque(0, 248, 248)));
    }

    #[test]
    fn test_raised_thresholds_reject_more() {
        let strict = PixelFilter::new().black_cutoff(96).white_floor(160);
        assert!(!strict.admits(Rgba::opaque(88, 88, 88)));
        assert!(!strict.admits(Rgba::opaque(168, 168, 168)));
        assert!(strict.admits(Rgba::opaque(128, 128, 128)));
    }
}
