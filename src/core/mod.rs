//! Core building blocks of the schedule OCR pipeline.
//!
//! This module contains the fundamental pieces shared across the pipeline:
//! - Error handling
//! - Configuration management
//! - Traits defining the interfaces to the external recognition engine
//!
//! It also re-exports the commonly used types for convenience.

pub mod config;
pub mod errors;
pub mod traits;

pub use config::{PipelineConfig, RecognitionMode};
pub use errors::{OCRError, OcrResult};
pub use traits::{ImagePreprocessor, TextRecognizer};
