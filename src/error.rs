use thiserror::Error;

/// Errors that can occur outside the pure drawing model
#[derive(Debug, Error)]
pub enum SketchpadError {
    /// A drawing surface could not be created
    #[error("Drawing surface unavailable: {0}")]
    SurfaceUnavailable(String),

    #[error("Failed to encode image: {0}")]
    Image(#[from] image::ImageError),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Failed to parse configuration: {0}")]
    Config(#[from] serde_json::Error),

    #[error("Invalid configuration: {0}")]
    InvalidConfig(String),
}

/// Result type for fallible sketchpad operations
pub type SketchpadResult<T> = Result<T, SketchpadError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_messages() {
        let err = SketchpadError::SurfaceUnavailable("0x0 pixels".to_owned());
        assert_eq!(err.to_string(), "Drawing surface unavailable: 0x0 pixels");

        let io = std::io::Error::new(std::io::ErrorKind::NotFound, "missing");
        let err: SketchpadError = io.into();
        assert!(matches!(err, SketchpadError::Io(_)));
    }
}
