//! Pure post-processing stages of the pipeline.
//!
//! Each stage is a synchronous transformation with no shared state across
//! invocations: confidence filtering, line clustering, time-span parsing,
//! and content sanitization. The pipeline module composes them in order.

pub mod filter;
pub mod line_cluster;
pub mod sanitize;
pub mod timespan;

pub use filter::ConfidenceFilter;
pub use line_cluster::LineClusterer;
pub use sanitize::sanitize_content;
pub use timespan::{parse_line, TimeMatch};
