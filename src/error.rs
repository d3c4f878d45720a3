use thiserror::Error;

/// Failures while acquiring pixel data from a source.
#[derive(Debug, Error)]
pub enum SourceError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Image decode error: {0}")]
    Decode(#[from] image::ImageError),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_io_error_display() {
        let error = SourceError::from(std::io::Error::new(
            std::io::ErrorKind::NotFound,
            "missing.png",
        ));
        assert_eq!(error.to_string(), "IO error: missing.png");
    }

    #[test]
    fn test_decode_error_display() {
        let error: SourceError = image::load_from_memory(b"not an image")
            .unwrap_err()
            .into();
        assert!(error.to_string().starts_with("Image decode error:"));
    }
}
