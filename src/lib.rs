//! Schedule extraction from OCR output.
//!
//! This crate turns the raw detections produced by a text recognition engine
//! (bounding box, recognized string, confidence score) into an ordered list of
//! schedule entries, each with a start time, an end time, and free-text
//! content. The recognition engine itself is an external collaborator behind
//! the [`TextRecognizer`](core::traits::TextRecognizer) trait; everything in
//! this crate is deterministic post-processing:
//!
//! 1. Confidence filtering with a looser threshold for digit-bearing text
//! 2. Clustering of spatially adjacent detections into logical lines
//! 3. Time-span extraction and normalization to `HH:MM:SS`
//! 4. Content sanitization down to CJK ideographs and word characters
//! 5. Assembly into schedule entries, skipping lines without both a valid
//!    time and non-empty content
//!
//! # Example
//!
//! ```no_run
//! use sched_ocr::pipeline::ScheduleOcrBuilder;
//! use sched_ocr::core::config::RecognitionMode;
//! # use sched_ocr::core::errors::OcrResult;
//! # use sched_ocr::core::traits::TextRecognizer;
//! # use sched_ocr::domain::Detection;
//! # #[derive(Debug)]
//! # struct Engine;
//! # impl TextRecognizer for Engine {
//! #     fn recognize(&self, _: &image::RgbImage) -> OcrResult<Vec<Detection>> {
//! #         Ok(Vec::new())
//! #     }
//! # }
//! # fn main() -> Result<(), Box<dyn std::error::Error>> {
//! # let engine = Engine;
//! let ocr = ScheduleOcrBuilder::new(engine)
//!     .mode(RecognitionMode::Handwritten)
//!     .build()?;
//!
//! let image = image::RgbImage::new(640, 480);
//! for entry in ocr.extract(image)? {
//!     println!("{} - {} {}", entry.start_time, entry.end_time, entry.content);
//! }
//! # Ok(())
//! # }
//! ```

pub mod core;
pub mod domain;
pub mod pipeline;
pub mod processors;
pub mod utils;

pub use crate::core::config::{PipelineConfig, RecognitionMode};
pub use crate::core::errors::{OCRError, OcrResult};
pub use crate::core::traits::{ImagePreprocessor, TextRecognizer};
pub use crate::domain::{BoundingBox, Detection, Point, ScheduleEntry};
pub use crate::pipeline::{ScheduleOcr, ScheduleOcrBuilder};
