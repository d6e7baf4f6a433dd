//! The structured output unit of the pipeline.

use serde::{Deserialize, Serialize};
use std::fmt;

/// A parsed schedule entry.
///
/// An entry is emitted only when its source line carried both a valid time
/// (or time range) and non-empty sanitized content; lines with only one of
/// the two are discarded, not defaulted.
///
/// Serializes to the JSON shape consumed by callers:
/// `{"start_time": "09:00:00", "end_time": "10:30:00", "content": "开会"}`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ScheduleEntry {
    /// Start of the entry, always `HH:MM:SS` with seconds fixed at `00`.
    pub start_time: String,
    /// End of the entry. Equal to `start_time` when the source line carried
    /// a single time rather than a range.
    pub end_time: String,
    /// Descriptive content, restricted to CJK ideographs and word
    /// characters; never empty.
    pub content: String,
}

impl fmt::Display for ScheduleEntry {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} - {} {}", self.start_time, self.end_time, self.content)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn serializes_to_documented_json_shape() {
        let entry = ScheduleEntry {
            start_time: "09:00:00".to_string(),
            end_time: "10:30:00".to_string(),
            content: "开会".to_string(),
        };

        let json = serde_json::to_value(&entry).unwrap();
        assert_eq!(
            json,
            serde_json::json!({
                "start_time": "09:00:00",
                "end_time": "10:30:00",
                "content": "开会"
            })
        );
    }

    #[test]
    fn display_joins_times_and_content() {
        let entry = ScheduleEntry {
            start_time: "14:00:00".to_string(),
            end_time: "14:00:00".to_string(),
            content: "午休".to_string(),
        };
        assert_eq!(entry.to_string(), "14:00:00 - 14:00:00 午休");
    }
}
