//! Dominant color extraction by quantized pixel voting.
//!
//! This crate reduces an RGBA pixel buffer to the single color that best
//! represents it. There is no clustering and no averaging: pixels vote for
//! coarse color buckets and the bucket with the most votes wins. The result
//! is always a color that actually occurred (in quantized form) in the
//! input, or nothing at all when no pixel qualifies.
//!
//! # Quick Start
//!
//! ```
//! use dominant_color::{dominant_color, Rgba};
//!
//! let mut pixels = vec![Rgba::opaque(200, 0, 0); 100];
//! pixels.extend(vec![Rgba::opaque(0, 200, 0); 10]);
//!
//! assert_eq!(dominant_color(&pixels).map(|c| c.to_bytes()), Some([200, 0, 0]));
//! ```
//!
//! # Algorithm
//!
//! Every sample goes through the same single pass:
//!
//! 1. **Quantize.** Each channel (alpha included) snaps to the nearest
//!    multiple of 8, collapsing noise and shallow gradients into shared
//!    buckets. See [`quantize::quantize_channel`].
//! 2. **Filter.** Samples that are mostly transparent (quantized alpha at
//!    or below 40), near-black (every color channel at or below 40), or
//!    near-white (every color channel at or above 216) are discarded;
//!    backgrounds, borders, and padding would otherwise drown out the
//!    subject. See [`PixelFilter`].
//! 3. **Vote.** Each surviving sample casts one vote for its quantized RGB
//!    bucket; a [`VoteTally`] tracks the leader as the votes arrive.
//!
//! The leader only changes when a bucket's count strictly exceeds the
//! current leading count. Ties therefore go to whichever bucket reached the
//! winning count first, which makes the outcome deterministic for a given
//! sample order, and order-dependent in exactly that one way.
//!
//! # Empty results
//!
//! An image can genuinely have no dominant color, and that is reported as
//! `None` rather than an error:
//!
//! ```
//! use dominant_color::{dominant_color, Rgba};
//!
//! // Fully transparent input has nothing to vote.
//! let pixels = vec![Rgba::new(120, 80, 40, 0); 16];
//! assert_eq!(dominant_color(&pixels), None);
//! ```
//!
//! # Tuning the filters
//!
//! [`Extractor`] is the configurable entry point. The thresholds keep their
//! shape; only the cutoff values move:
//!
//! ```
//! use dominant_color::{Extractor, PixelFilter, Rgba};
//!
//! let extractor = Extractor::new().filter(PixelFilter::new().white_floor(240));
//!
//! // 230 quantizes to 232, which the default filter would discard as
//! // near-white; the raised floor admits it.
//! let pixels = vec![Rgba::opaque(230, 230, 230); 4];
//! assert!(extractor.extract(pixels).is_some());
//! ```
//!
//! # Raw buffers
//!
//! [`Extractor::extract_bytes`] and [`Extractor::extract_frame`] accept raw
//! RGBA byte buffers and validate their shape before scanning. Malformed
//! buffers are the only error case in the crate; see [`ExtractError`].

pub mod color;
pub mod error;
pub mod extract;
pub mod filter;
pub mod quantize;
pub mod tally;

#[cfg(test)]
mod domain_tests;

pub use color::{Rgb, Rgba};
pub use error::ExtractError;
pub use extract::{dominant_color, Extractor};
pub use filter::PixelFilter;
pub use tally::VoteTally;
