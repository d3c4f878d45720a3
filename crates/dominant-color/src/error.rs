//! Error type for the raw-buffer entry points.

use thiserror::Error;

/// Rejection of a malformed pixel buffer.
///
/// An input with nothing to vote is not an error; the extractor reports it
/// as `Ok(None)`. These variants cover buffers whose shape is wrong before
/// any pixel is looked at.
#[derive(Debug, Error)]
pub enum ExtractError {
    /// Byte length is not a whole number of 4-byte RGBA pixels.
    #[error("Invalid pixel data: {len} bytes is not a whole number of RGBA pixels")]
    InvalidPixelData { len: usize },

    /// Byte length does not match the declared frame dimensions.
    #[error("Dimension mismatch: {width}x{height} expects {expected} bytes, got {len}")]
    DimensionMismatch {
        width: u32,
        height: u32,
        expected: u64,
        len: usize,
    },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_invalid_pixel_data_display() {
        let error = ExtractError::InvalidPixelData { len: 7 };
        assert_eq!(
            error.to_string(),
            "Invalid pixel data: 7 bytes is not a whole number of RGBA pixels"
        );
    }

    #[test]
    fn test_dimension_mismatch_display() {
        let error = ExtractError::DimensionMismatch {
            width: 4,
            height: 2,
            expected: 32,
            len: 24,
        };
        assert_eq!(
            error.to_string(),
            "Dimension mismatch: 4x2 expects 32 bytes, got 24"
        );
    }
}
