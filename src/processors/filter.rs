//! Confidence-based detection filtering.

use crate::core::config::PipelineConfig;
use crate::domain::Detection;
use tracing::debug;

/// Filters detections by confidence with a context-sensitive threshold.
///
/// A detection whose text contains at least one digit is judged against
/// `number_confidence`; all other detections are judged against the
/// stricter `text_confidence`. The filter preserves input order.
#[derive(Debug, Clone, Copy)]
pub struct ConfidenceFilter {
    /// Threshold for digit-bearing detections.
    pub number_confidence: f32,
    /// Threshold for detections without digits.
    pub text_confidence: f32,
}

impl ConfidenceFilter {
    /// Creates a filter with explicit thresholds.
    pub fn new(number_confidence: f32, text_confidence: f32) -> Self {
        Self {
            number_confidence,
            text_confidence,
        }
    }

    /// Creates a filter from the pipeline configuration.
    pub fn from_config(config: &PipelineConfig) -> Self {
        Self::new(config.number_confidence, config.text_confidence)
    }

    /// Returns the threshold applicable to a detection.
    pub fn threshold_for(&self, detection: &Detection) -> f32 {
        if detection.contains_digit() {
            self.number_confidence
        } else {
            self.text_confidence
        }
    }

    /// Retains the detections that meet their applicable threshold,
    /// preserving input order.
    pub fn filter(&self, detections: Vec<Detection>) -> Vec<Detection> {
        detections
            .into_iter()
            .filter(|detection| {
                let threshold = self.threshold_for(detection);
                let keep = detection.confidence >= threshold;
                if !keep {
                    debug!(
                        target: "sched_ocr::filter",
                        text = %detection.text,
                        confidence = detection.confidence,
                        threshold,
                        "dropping low-confidence detection"
                    );
                }
                keep
            })
            .collect()
    }
}
