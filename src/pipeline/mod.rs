//! The schedule OCR pipeline.
//!
//! This module provides the high-level builder API for wiring an external
//! recognition engine to the deterministic post-processing stages, and the
//! runtime that executes them.
//!
//! # Main APIs
//!
//! - [`ScheduleOcrBuilder`] - configures the engine handle, optional image
//!   preprocessing, and pipeline parameters
//! - [`ScheduleOcr::extract`] - image in, schedule entries out
//! - [`ScheduleOcr::process_detections`] - the pure post-processing core,
//!   usable directly with synthetic detection lists

use crate::core::config::{PipelineConfig, RecognitionMode};
use crate::core::errors::OcrResult;
use crate::core::traits::{ImagePreprocessor, TextRecognizer};
use crate::domain::{Detection, ScheduleEntry};
use crate::processors::{parse_line, sanitize_content, ConfidenceFilter, LineClusterer, TimeMatch};
use image::RgbImage;
use std::sync::Arc;
use tracing::debug;

/// Builder for constructing a schedule OCR pipeline.
///
/// The recognition engine is required; image preprocessing is optional.
/// Thresholds default from the selected [`RecognitionMode`] and can be
/// overridden with an explicit [`PipelineConfig`].
///
/// # Example
///
/// ```no_run
/// # use sched_ocr::core::errors::OcrResult;
/// # use sched_ocr::core::traits::TextRecognizer;
/// # use sched_ocr::domain::Detection;
/// use sched_ocr::pipeline::ScheduleOcrBuilder;
/// use sched_ocr::core::config::RecognitionMode;
///
/// # #[derive(Debug)]
/// # struct Engine;
/// # impl TextRecognizer for Engine {
/// #     fn recognize(&self, _: &image::RgbImage) -> OcrResult<Vec<Detection>> {
/// #         Ok(Vec::new())
/// #     }
/// # }
/// # fn main() -> Result<(), Box<dyn std::error::Error>> {
/// let ocr = ScheduleOcrBuilder::new(Engine)
///     .mode(RecognitionMode::Handwritten)
///     .build()?;
/// # Ok(())
/// # }
/// ```
#[derive(Debug)]
pub struct ScheduleOcrBuilder {
    recognizer: Arc<dyn TextRecognizer>,
    preprocessor: Option<Arc<dyn ImagePreprocessor>>,
    mode: RecognitionMode,
    config: Option<PipelineConfig>,
}

impl ScheduleOcrBuilder {
    /// Creates a builder around a recognition engine handle.
    ///
    /// The handle is expected to be long-lived: initialized once by the
    /// caller and reused across calls, never recreated per image.
    pub fn new(recognizer: impl TextRecognizer + 'static) -> Self {
        Self {
            recognizer: Arc::new(recognizer),
            preprocessor: None,
            mode: RecognitionMode::Auto,
            config: None,
        }
    }

    /// Creates a builder from an already shared engine handle.
    pub fn from_shared(recognizer: Arc<dyn TextRecognizer>) -> Self {
        Self {
            recognizer,
            preprocessor: None,
            mode: RecognitionMode::Auto,
            config: None,
        }
    }

    /// Adds an image preprocessing step ahead of recognition.
    pub fn with_preprocessor(mut self, preprocessor: impl ImagePreprocessor + 'static) -> Self {
        self.preprocessor = Some(Arc::new(preprocessor));
        self
    }

    /// Sets the recognition mode the thresholds default from.
    pub fn mode(mut self, mode: RecognitionMode) -> Self {
        self.mode = mode;
        self
    }

    /// Overrides the pipeline configuration entirely.
    ///
    /// Takes precedence over [`mode`](Self::mode).
    pub fn config(mut self, config: PipelineConfig) -> Self {
        self.config = Some(config);
        self
    }

    /// Builds the pipeline runtime.
    ///
    /// # Errors
    ///
    /// Returns a `ConfigError` if the effective configuration fails
    /// validation.
    pub fn build(self) -> OcrResult<ScheduleOcr> {
        let config = self
            .config
            .unwrap_or_else(|| PipelineConfig::for_mode(self.mode));
        config.validate()?;

        Ok(ScheduleOcr {
            recognizer: self.recognizer,
            preprocessor: self.preprocessor,
            config,
        })
    }
}

/// Runtime for extracting schedule entries from images.
///
/// The post-processing stages hold no state across invocations; a single
/// instance is safe to use concurrently on independent images.
#[derive(Debug)]
pub struct ScheduleOcr {
    recognizer: Arc<dyn TextRecognizer>,
    preprocessor: Option<Arc<dyn ImagePreprocessor>>,
    config: PipelineConfig,
}

impl ScheduleOcr {
    /// Extracts schedule entries from an image.
    ///
    /// Runs the optional preprocessing step, invokes the recognition
    /// engine, and post-processes the resulting detections. An image that
    /// yields no valid lines produces an empty list, not an error.
    ///
    /// # Errors
    ///
    /// Only failures of the external collaborators surface here: a failing
    /// preprocessing step or recognition engine. Per-line conditions are
    /// handled by omission.
    pub fn extract(&self, image: RgbImage) -> OcrResult<Vec<ScheduleEntry>> {
        let image = match &self.preprocessor {
            Some(preprocessor) => preprocessor.preprocess(image)?,
            None => image,
        };

        let detections = self.recognizer.recognize(&image)?;
        debug!(
            target: "sched_ocr::pipeline",
            detections = detections.len(),
            "recognition engine returned detections"
        );

        Ok(self.process_detections(detections))
    }

    /// Returns the effective pipeline configuration.
    pub fn config(&self) -> &PipelineConfig {
        &self.config
    }

    /// Runs the pure post-processing core over a detection list.
    ///
    /// Filtering, line clustering, time parsing, sanitization, and
    /// assembly, in that order. Entries come out in top-to-bottom visual
    /// order regardless of the input collection order. Lines without a
    /// parseable time, with an out-of-bounds time, or with empty sanitized
    /// content are skipped; a single bad line never aborts the rest.
    pub fn process_detections(&self, detections: Vec<Detection>) -> Vec<ScheduleEntry> {
        let filter = ConfidenceFilter::from_config(&self.config);
        let clusterer = LineClusterer::new(self.config.line_y_threshold);

        let filtered = filter.filter(detections);
        let lines = clusterer.cluster(&filtered);

        let mut entries = Vec::with_capacity(lines.len());
        for line in &lines {
            match parse_line(line) {
                TimeMatch::Found {
                    start_time,
                    end_time,
                    remainder,
                } => {
                    let content = sanitize_content(&remainder);
                    if content.is_empty() {
                        debug!(
                            target: "sched_ocr::pipeline",
                            line = %line,
                            "skipping time-only line without content"
                        );
                        continue;
                    }
                    entries.push(ScheduleEntry {
                        start_time,
                        end_time,
                        content,
                    });
                }
                TimeMatch::NoTime => {
                    debug!(
                        target: "sched_ocr::pipeline",
                        line = %line,
                        "skipping line without a time pattern"
                    );
                }
                TimeMatch::OutOfRange { token } => {
                    debug!(
                        target: "sched_ocr::pipeline",
                        line = %line,
                        token = %token,
                        "skipping line with out-of-bounds time"
                    );
                }
            }
        }

        debug!(
            target: "sched_ocr::pipeline",
            lines = lines.len(),
            entries = entries.len(),
            "assembled schedule entries"
        );

        entries
    }
}
