//! Time-span extraction and normalization.
//!
//! A merged line is scanned for a time range first, then for a single time.
//! Matched tokens are normalized to the canonical `HH:MM:00` form and
//! validated; everything after the match is the line's residual content.
//! OCR output mixes full-width and half-width punctuation, so both colon
//! forms and a wide set of range separators ("至"/"到" included) are
//! accepted.

use once_cell::sync::Lazy;
use regex::Regex;

/// A time range: two 1-2 digit groups, each optionally followed by a colon
/// (half- or full-width) and more digits, separated by one or more of
/// period, full-width period, whitespace, tilde, full-width tilde, hyphen,
/// em-dash, underscore, or the characters "至"/"到".
static TIME_RANGE_REGEX: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"(\d{1,2}[:：]?\d{1,2})[.。\s~～\-—_至到]+(\d{1,2}[:：]?\d{1,2})")
        .expect("invalid time range regex")
});

/// A single time: one digit group of the same shape as in the range.
static SINGLE_TIME_REGEX: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"(\d{1,2}[:：]?\d{1,2})").expect("invalid single time regex"));

/// Outcome of scanning one merged line for a time expression.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TimeMatch {
    /// A validated time (or time range) was found.
    Found {
        /// Normalized start time, `HH:MM:00`.
        start_time: String,
        /// Normalized end time; equals `start_time` for a single time.
        end_time: String,
        /// The rest of the line after the match, untrimmed of stray
        /// characters (sanitization is a separate stage).
        remainder: String,
    },
    /// The line contains no recognizable time expression.
    NoTime,
    /// A time expression was found but its hour or minute is out of valid
    /// bounds; the line must be skipped, not corrected.
    OutOfRange {
        /// The offending token as matched.
        token: String,
    },
}

/// Scans a merged line for a time range or a single time.
///
/// The range pattern is tried first; the single pattern only applies when
/// no range matches. A range whose times fail validation is an
/// [`TimeMatch::OutOfRange`] skip, it does not fall back to the single
/// pattern.
pub fn parse_line(line: &str) -> TimeMatch {
    if let Some(captures) = TIME_RANGE_REGEX.captures(line) {
        let full = captures.get(0).expect("capture group 0 always present");
        let start_token = &captures[1];
        let end_token = &captures[2];

        let Some(start_time) = normalize_time(start_token) else {
            return TimeMatch::OutOfRange {
                token: start_token.to_string(),
            };
        };
        let Some(end_time) = normalize_time(end_token) else {
            return TimeMatch::OutOfRange {
                token: end_token.to_string(),
            };
        };

        return TimeMatch::Found {
            start_time,
            end_time,
            remainder: line[full.end()..].trim().to_string(),
        };
    }

    if let Some(captures) = SINGLE_TIME_REGEX.captures(line) {
        let full = captures.get(0).expect("capture group 0 always present");
        let token = &captures[1];

        let Some(time) = normalize_time(token) else {
            return TimeMatch::OutOfRange {
                token: token.to_string(),
            };
        };

        return TimeMatch::Found {
            end_time: time.clone(),
            start_time: time,
            remainder: line[full.end()..].trim().to_string(),
        };
    }

    TimeMatch::NoTime
}

/// Normalizes a matched time token to `HH:MM:00`.
///
/// Without a colon, a 1-2 digit token is an hour with minutes forced to
/// `00` (`"9"` becomes `"09:00:00"`); a longer token splits with the last
/// two digits as minutes (`"930"` becomes `"09:30:00"`). With a colon
/// (full-width normalized to half-width), the token splits into hour and
/// minute parts. Hours outside `0..=23` or minutes outside `0..=59` yield
/// `None`.
pub fn normalize_time(token: &str) -> Option<String> {
    let token = token.replace('：', ":");

    let (hour_part, minute_part) = match token.split_once(':') {
        Some((hour, minute)) => (hour.to_string(), minute.to_string()),
        None => {
            // `\d` also matches non-ASCII digits, so split on chars; the
            // integer parse below rejects anything that is not 0-9.
            let chars: Vec<char> = token.chars().collect();
            if chars.len() <= 2 {
                (token, "0".to_string())
            } else {
                let split = chars.len() - 2;
                (
                    chars[..split].iter().collect(),
                    chars[split..].iter().collect(),
                )
            }
        }
    };

    let hour: u32 = hour_part.parse().ok()?;
    let minute: u32 = minute_part.parse().ok()?;
    if hour > 23 || minute > 59 {
        return None;
    }

    Some(format!("{hour:02}:{minute:02}:00"))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn normalize_bare_hour() {
        assert_eq!(normalize_time("9").as_deref(), Some("09:00:00"));
        assert_eq!(normalize_time("23").as_deref(), Some("23:00:00"));
    }

    #[test]
    fn normalize_compact_digits() {
        assert_eq!(normalize_time("930").as_deref(), Some("09:30:00"));
        assert_eq!(normalize_time("1430").as_deref(), Some("14:30:00"));
    }

    #[test]
    fn normalize_with_colon() {
        assert_eq!(normalize_time("23:59").as_deref(), Some("23:59:00"));
        assert_eq!(normalize_time("9:5").as_deref(), Some("09:05:00"));
    }

    #[test]
    fn normalize_full_width_colon() {
        assert_eq!(normalize_time("10：30").as_deref(), Some("10:30:00"));
    }

    #[test]
    fn normalize_rejects_out_of_bounds() {
        assert_eq!(normalize_time("25:00"), None);
        assert_eq!(normalize_time("12:60"), None);
        assert_eq!(normalize_time("2575"), None);
    }

    #[test]
    fn range_with_mixed_punctuation() {
        let result = parse_line("09:00-10：30 开会");
        assert_eq!(
            result,
            TimeMatch::Found {
                start_time: "09:00:00".to_string(),
                end_time: "10:30:00".to_string(),
                remainder: "开会".to_string(),
            }
        );
    }

    #[test]
    fn range_with_cjk_separator() {
        let result = parse_line("9:00至10:00 例会");
        assert_eq!(
            result,
            TimeMatch::Found {
                start_time: "09:00:00".to_string(),
                end_time: "10:00:00".to_string(),
                remainder: "例会".to_string(),
            }
        );
    }

    #[test]
    fn single_time_duplicates_start_into_end() {
        let result = parse_line("14:00午休");
        assert_eq!(
            result,
            TimeMatch::Found {
                start_time: "14:00:00".to_string(),
                end_time: "14:00:00".to_string(),
                remainder: "午休".to_string(),
            }
        );
    }

    #[test]
    fn line_without_digits_has_no_time() {
        assert_eq!(parse_line("备注说明"), TimeMatch::NoTime);
    }

    #[test]
    fn out_of_bounds_time_is_a_skip_not_a_fallback() {
        assert_eq!(
            parse_line("25:00 加班"),
            TimeMatch::OutOfRange {
                token: "25:00".to_string()
            }
        );
        // An invalid range does not fall back to the single pattern.
        assert_eq!(
            parse_line("25:00-26:00 加班"),
            TimeMatch::OutOfRange {
                token: "25:00".to_string()
            }
        );
    }

    #[test]
    fn remainder_is_everything_after_the_match() {
        let result = parse_line("13:00~14:00 项目 评审 123");
        match result {
            TimeMatch::Found { remainder, .. } => assert_eq!(remainder, "项目 评审 123"),
            other => panic!("unexpected outcome: {other:?}"),
        }
    }

    #[test]
    fn parsing_is_independent_per_line() {
        // Same input, same outcome; no state is carried between calls.
        let first = parse_line("09:00-10:00 复盘");
        let second = parse_line("09:00-10:00 复盘");
        assert_eq!(first, second);
    }
}
