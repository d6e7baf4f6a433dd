//! Configuration for the schedule OCR pipeline.
//!
//! This module provides the recognition mode selector and the tunable
//! parameters of the post-processing stages, together with validation.

use crate::core::errors::OCRError;
use serde::{Deserialize, Serialize};

/// The kind of source material the pipeline is tuned for.
///
/// Handwritten input produces noisier detections, so it uses looser
/// confidence thresholds than printed input.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum RecognitionMode {
    /// No assumption about the source material (printed thresholds apply).
    #[default]
    Auto,
    /// Machine-printed text.
    Printed,
    /// Handwritten text.
    Handwritten,
}

/// Tunable parameters of the post-processing pipeline.
///
/// The two confidence thresholds are context-sensitive: detections whose
/// text contains at least one digit (likely carrying a schedule time) are
/// held to `number_confidence`, everything else to `text_confidence`.
/// Digits are more error-prone on handwritten or low-quality input and
/// tolerate a lower bar, while non-numeric text is filtered more strictly
/// to avoid injecting garbage content.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct PipelineConfig {
    /// Minimum confidence for detections containing at least one digit.
    pub number_confidence: f32,
    /// Minimum confidence for detections without digits.
    pub text_confidence: f32,
    /// Maximum vertical distance (in image pixels) between the top-left
    /// y-coordinates of two detections for them to be clustered onto the
    /// same line.
    ///
    /// This is an absolute pixel distance, not normalized to image scale;
    /// callers must ensure consistent image scaling upstream.
    pub line_y_threshold: f32,
}

impl Default for PipelineConfig {
    fn default() -> Self {
        Self::for_mode(RecognitionMode::Auto)
    }
}

impl PipelineConfig {
    /// Returns the configuration tuned for the given recognition mode.
    pub fn for_mode(mode: RecognitionMode) -> Self {
        let (number_confidence, text_confidence) = match mode {
            RecognitionMode::Handwritten => (0.2, 0.1),
            RecognitionMode::Auto | RecognitionMode::Printed => (0.3, 0.2),
        };
        Self {
            number_confidence,
            text_confidence,
            line_y_threshold: 10.0,
        }
    }

    /// Validates the configuration.
    ///
    /// # Errors
    ///
    /// Returns a `ConfigError` if a confidence threshold falls outside
    /// `[0, 1]` or the line clustering threshold is not strictly positive.
    pub fn validate(&self) -> Result<(), OCRError> {
        for (field, value) in [
            ("number_confidence", self.number_confidence),
            ("text_confidence", self.text_confidence),
        ] {
            if !(0.0..=1.0).contains(&value) || !value.is_finite() {
                return Err(OCRError::invalid_field(
                    field,
                    "a value in [0, 1]",
                    format!("{value}"),
                ));
            }
        }

        if !(self.line_y_threshold > 0.0) || !self.line_y_threshold.is_finite() {
            return Err(OCRError::invalid_field(
                "line_y_threshold",
                "a positive pixel distance",
                format!("{}", self.line_y_threshold),
            ));
        }

        Ok(())
    }
}
