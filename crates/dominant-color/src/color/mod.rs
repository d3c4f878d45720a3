//! Color value types.
//!
//! Two plain 8-bit types cover the whole crate: [`Rgba`] for incoming pixel
//! samples and [`Rgb`] for quantized buckets and results.
//!
//! # Example
//!
//! ```
//! use dominant_color::{Rgb, Rgba};
//!
//! // A sample enters with alpha...
//! let sample = Rgba::new(132, 4, 251, 255);
//!
//! // ...and votes as its quantized color.
//! let bucket = sample.quantized().color();
//! assert_eq!(bucket, Rgb::new(136, 8, 248));
//! ```

mod rgb;
mod rgba;

pub use rgb::Rgb;
pub use rgba::Rgba;
