//! Channel quantization: snapping 8-bit values onto the bucket grid.
//!
//! Every channel of every sample is snapped to the nearest multiple of
//! [`BUCKET_STEP`] before filtering and voting. This collapses sensor noise
//! and shallow gradients into shared buckets, so visually uniform regions
//! vote together instead of splitting across hundreds of near-identical
//! values.

/// Spacing of the bucket grid. Channels are snapped to multiples of this.
pub const BUCKET_STEP: u8 = 8;

/// Largest bucket value a channel can take.
///
/// Nearest-multiple rounding reaches 256 for inputs `252..=255`, which does
/// not fit in a `u8`; those inputs are clamped into this top bucket. The
/// clamp cannot flip a filter decision: 248 and 256 sit on the same side of
/// both the near-black cutoff (40) and the near-white floor (216).
pub const BUCKET_MAX: u8 = 248;

/// Snap a channel to the nearest multiple of [`BUCKET_STEP`].
///
/// Rounding is half-up: a remainder of exactly 4 rounds to the bucket above
/// (4 becomes 8, 44 becomes 48). Inputs `252..=255` clamp to [`BUCKET_MAX`].
///
/// # Example
///
/// ```
/// use dominant_color::quantize::{quantize_channel, BUCKET_MAX};
///
/// assert_eq!(quantize_channel(0), 0);
/// assert_eq!(quantize_channel(132), 136);
/// assert_eq!(quantize_channel(255), BUCKET_MAX);
/// ```
#[inline]
pub fn quantize_channel(v: u8) -> u8 {
    let snapped = (u16::from(v) + 4) / 8 * 8;
    snapped.min(u16::from(BUCKET_MAX)) as u8
}
