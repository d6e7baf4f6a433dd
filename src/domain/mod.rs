//! Data model of the schedule OCR pipeline.
//!
//! [`Detection`] is the input unit produced by the recognition engine;
//! [`ScheduleEntry`] is the output unit produced by the pipeline.

pub mod detection;
pub mod schedule;

pub use detection::{BoundingBox, Detection, Point};
pub use schedule::ScheduleEntry;
