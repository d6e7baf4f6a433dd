//! Core error types for the schedule OCR pipeline.
//!
//! Only contract violations surface as errors: a failing recognition engine,
//! an unloadable image, or an invalid configuration. Per-line conditions
//! (low confidence, no time pattern, out-of-range time, empty content) are
//! handled by omission inside the pipeline and never appear here.

use thiserror::Error;

/// Convenience alias for results produced by this crate.
pub type OcrResult<T> = Result<T, OCRError>;

/// Errors that can occur around the schedule OCR pipeline.
#[derive(Error, Debug)]
pub enum OCRError {
    /// Error occurred while loading or decoding an image.
    #[error("image load")]
    ImageLoad(#[from] image::ImageError),

    /// The external recognition engine failed.
    #[error("recognition failed: {context}")]
    Recognition {
        /// Additional context about the engine failure.
        context: String,
        /// The underlying error reported by the engine.
        #[source]
        source: Box<dyn std::error::Error + Send + Sync>,
    },

    /// Error indicating invalid input.
    #[error("invalid input: {message}")]
    InvalidInput {
        /// A message describing the invalid input.
        message: String,
    },

    /// Error indicating a configuration problem.
    #[error("configuration: {message}")]
    ConfigError {
        /// A message describing the configuration error.
        message: String,
    },

    /// IO error.
    #[error("io")]
    Io(#[from] std::io::Error),
}

impl OCRError {
    /// Creates an invalid-input error.
    pub fn invalid_input(message: impl Into<String>) -> Self {
        Self::InvalidInput {
            message: message.into(),
        }
    }

    /// Creates a configuration error with context and details.
    pub fn config_error_detailed(context: impl Into<String>, details: impl Into<String>) -> Self {
        Self::ConfigError {
            message: format!("{}: {}", context.into(), details.into()),
        }
    }

    /// Creates a configuration error for invalid field values.
    pub fn invalid_field(
        field: impl Into<String>,
        expected: impl Into<String>,
        actual: impl Into<String>,
    ) -> Self {
        Self::ConfigError {
            message: format!(
                "invalid value for field '{}': expected {}, got {}",
                field.into(),
                expected.into(),
                actual.into()
            ),
        }
    }

    /// Wraps an error reported by the external recognition engine.
    pub fn recognition_error(
        context: impl Into<String>,
        source: impl std::error::Error + Send + Sync + 'static,
    ) -> Self {
        Self::Recognition {
            context: context.into(),
            source: Box::new(source),
        }
    }
}
