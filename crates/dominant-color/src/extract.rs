//! Dominant color extraction: the quantize / filter / vote pipeline.
//!
//! [`Extractor`] wires the pieces together behind a fluent builder and is
//! reusable across images. [`dominant_color`] is the one-call convenience
//! for the default configuration.

use crate::color::{Rgb, Rgba};
use crate::error::ExtractError;
use crate::filter::PixelFilter;
use crate::tally::VoteTally;

/// Reusable dominant color extractor.
///
/// Holds the admission filter; [`extract()`](Self::extract) borrows `&self`,
/// so one configured extractor can scan any number of images.
///
/// # Example
///
/// ```
/// use dominant_color::{Extractor, Rgba};
///
/// let extractor = Extractor::new();
/// let pixels = vec![Rgba::opaque(200, 16, 16); 9];
///
/// assert_eq!(
///     extractor.extract(pixels).map(|c| c.to_hex()),
///     Some("#c81010".to_string()),
/// );
/// ```
#[derive(Debug, Clone, Default)]
pub struct Extractor {
    filter: PixelFilter,
}

impl Extractor {
    /// Create an extractor with the default filter thresholds.
    pub fn new() -> Self {
        Self::default()
    }

    /// Replace the whole admission filter.
    #[inline]
    pub fn filter(mut self, filter: PixelFilter) -> Self {
        self.filter = filter;
        self
    }

    /// Set the transparency cutoff on the underlying filter.
    #[inline]
    pub fn alpha_cutoff(mut self, cutoff: u8) -> Self {
        self.filter = self.filter.alpha_cutoff(cutoff);
        self
    }

    /// Set the near-black cutoff on the underlying filter.
    #[inline]
    pub fn black_cutoff(mut self, cutoff: u8) -> Self {
        self.filter = self.filter.black_cutoff(cutoff);
        self
    }

    /// Set the near-white floor on the underlying filter.
    #[inline]
    pub fn white_floor(mut self, floor: u8) -> Self {
        self.filter = self.filter.white_floor(floor);
        self
    }

    /// Scan samples once and report the winning bucket.
    ///
    /// Each sample is quantized, checked against the filter, and counted
    /// toward its bucket; the leader is tracked as votes arrive. Returns
    /// `None` when no sample passes the filter, empty input included; that
    /// is a normal outcome, not an error.
    pub fn extract<I>(&self, pixels: I) -> Option<Rgb>
    where
        I: IntoIterator<Item = Rgba>,
    {
        let mut tally = VoteTally::new();
        for sample in pixels {
            let quantized = sample.quantized();
            if self.filter.admits(quantized) {
                tally.cast(quantized.color());
            }
        }
        tally.leader()
    }

    /// Scan a raw RGBA byte buffer (4 bytes per pixel, row-major).
    pub fn extract_bytes(&self, data: &[u8]) -> Result<Option<Rgb>, ExtractError> {
        if data.len() % 4 != 0 {
            return Err(ExtractError::InvalidPixelData { len: data.len() });
        }
        Ok(self.extract(samples(data)))
    }

    /// Scan a raw RGBA frame, validating the buffer against its dimensions.
    pub fn extract_frame(
        &self,
        data: &[u8],
        width: u32,
        height: u32,
    ) -> Result<Option<Rgb>, ExtractError> {
        let expected = u64::from(width) * u64::from(height) * 4;
        if data.len() as u64 != expected {
            return Err(ExtractError::DimensionMismatch {
                width,
                height,
                expected,
                len: data.len(),
            });
        }
        Ok(self.extract(samples(data)))
    }
}

fn samples(data: &[u8]) -> impl Iterator<Item = Rgba> + '_ {
    data.chunks_exact(4)
        .map(|px| Rgba::new(px[0], px[1], px[2], px[3]))
}

/// Dominant color of a sample slice under the default configuration.
///
/// # Example
///
/// ```
/// use dominant_color::{dominant_color, Rgba};
///
/// let pixels = [Rgba::opaque(96, 160, 32); 5];
/// assert_eq!(dominant_color(&pixels).map(|c| c.to_bytes()), Some([96, 160, 32]));
/// ```
pub fn dominant_color(pixels: &[Rgba]) -> Option<Rgb> {
    Extractor::new().extract(pixels.iter().copied())
}
