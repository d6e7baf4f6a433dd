//! Clustering of detections into logical text lines.

use crate::domain::Detection;

/// Groups spatially adjacent detections into merged line strings.
///
/// Detections are sorted by the y-coordinate of their top-left corner and
/// walked in order. A detection joins the current line when its y-distance
/// to the row anchor is below `y_threshold`; otherwise the buffered line is
/// flushed (fragments sorted by x ascending, trimmed, joined with a single
/// space) and a new line starts.
///
/// The row anchor updates on every detection, not just at line starts, so a
/// dense layout can let a line's vertical span drift beyond the threshold
/// cumulatively. The threshold is an absolute pixel distance; callers must
/// ensure consistent image scaling upstream.
#[derive(Debug, Clone, Copy)]
pub struct LineClusterer {
    /// Maximum vertical distance between top-left y-coordinates for two
    /// detections to share a line.
    pub y_threshold: f32,
}

impl Default for LineClusterer {
    fn default() -> Self {
        Self { y_threshold: 10.0 }
    }
}

impl LineClusterer {
    /// Creates a clusterer with the given vertical threshold.
    pub fn new(y_threshold: f32) -> Self {
        Self { y_threshold }
    }

    /// Clusters detections into merged line strings, top to bottom.
    ///
    /// Detections without corner points carry no usable geometry and are
    /// ignored. A single stray detection far from all others forms its own
    /// one-element line.
    pub fn cluster(&self, detections: &[Detection]) -> Vec<String> {
        let mut positioned: Vec<(f32, f32, &str)> = detections
            .iter()
            .filter_map(|detection| {
                let top_left = detection.bounding_box.top_left()?;
                Some((top_left.x, top_left.y, detection.text.as_str()))
            })
            .collect();

        positioned.sort_by(|a, b| a.1.total_cmp(&b.1));

        let mut lines = Vec::new();
        let mut current_line: Vec<(f32, &str)> = Vec::new();
        let mut last_y: Option<f32> = None;

        for (x, y, text) in positioned {
            match last_y {
                Some(anchor) if (y - anchor).abs() < self.y_threshold => {
                    current_line.push((x, text.trim()));
                }
                _ => {
                    if !current_line.is_empty() {
                        lines.push(Self::merge_line(&mut current_line));
                    }
                    current_line = vec![(x, text.trim())];
                }
            }
            last_y = Some(y);
        }

        if !current_line.is_empty() {
            lines.push(Self::merge_line(&mut current_line));
        }

        lines
    }

    /// Sorts a buffered line by x ascending and joins its fragments with a
    /// single space.
    fn merge_line(fragments: &mut Vec<(f32, &str)>) -> String {
        fragments.sort_by(|a, b| a.0.total_cmp(&b.0));
        fragments
            .iter()
            .map(|(_, text)| *text)
            .collect::<Vec<_>>()
            .join(" ")
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::BoundingBox;

    fn detection_at(x: f32, y: f32, text: &str) -> Detection {
        Detection::new(BoundingBox::from_coords(x, y, x + 40.0, y + 12.0), text, 0.9)
    }

    #[test]
    fn fragments_on_one_row_merge_left_to_right() {
        let clusterer = LineClusterer::default();
        // Out of reading order on purpose.
        let detections = vec![
            detection_at(120.0, 52.0, "开会"),
            detection_at(10.0, 50.0, "9:00"),
        ];
        assert_eq!(clusterer.cluster(&detections), vec!["9:00 开会"]);
    }

    #[test]
    fn rows_split_on_vertical_gap() {
        let clusterer = LineClusterer::default();
        let detections = vec![
            detection_at(10.0, 50.0, "9:00"),
            detection_at(80.0, 53.0, "开会"),
            detection_at(10.0, 90.0, "14:00"),
            detection_at(90.0, 88.0, "午休"),
        ];
        assert_eq!(clusterer.cluster(&detections), vec!["9:00 开会", "14:00 午休"]);
    }

    #[test]
    fn output_is_top_to_bottom_regardless_of_input_order() {
        let clusterer = LineClusterer::default();
        let detections = vec![
            detection_at(10.0, 200.0, "底部"),
            detection_at(10.0, 10.0, "顶部"),
            detection_at(10.0, 100.0, "中间"),
        ];
        assert_eq!(clusterer.cluster(&detections), vec!["顶部", "中间", "底部"]);
    }

    #[test]
    fn stray_detection_forms_its_own_line() {
        let clusterer = LineClusterer::default();
        let detections = vec![
            detection_at(10.0, 10.0, "9:00"),
            detection_at(500.0, 400.0, "备注"),
        ];
        assert_eq!(clusterer.cluster(&detections), vec!["9:00", "备注"]);
    }

    #[test]
    fn fragment_text_is_trimmed_before_joining() {
        let clusterer = LineClusterer::default();
        let detections = vec![
            detection_at(10.0, 50.0, " 9:00 "),
            detection_at(80.0, 50.0, " 开会"),
        ];
        assert_eq!(clusterer.cluster(&detections), vec!["9:00 开会"]);
    }

    #[test]
    fn anchor_updates_on_every_detection() {
        // Each step is below the threshold, so the whole staircase chains
        // into one line even though first and last are 24 pixels apart.
        let clusterer = LineClusterer::new(10.0);
        let detections = vec![
            detection_at(10.0, 10.0, "a"),
            detection_at(20.0, 18.0, "b"),
            detection_at(30.0, 26.0, "c"),
            detection_at(40.0, 34.0, "d"),
        ];
        assert_eq!(clusterer.cluster(&detections), vec!["a b c d"]);
    }

    #[test]
    fn clustering_is_idempotent_on_merged_lines() {
        let clusterer = LineClusterer::default();
        let detections = vec![
            detection_at(10.0, 50.0, "9:00"),
            detection_at(80.0, 52.0, "开会"),
            detection_at(10.0, 90.0, "14:00"),
            detection_at(90.0, 91.0, "午休"),
        ];
        let lines = clusterer.cluster(&detections);

        // Re-run clustering with each merged line as a unit detection at its
        // row's position.
        let reclustered_input: Vec<Detection> = lines
            .iter()
            .enumerate()
            .map(|(i, line)| detection_at(10.0, 50.0 + 40.0 * i as f32, line))
            .collect();
        assert_eq!(clusterer.cluster(&reclustered_input), lines);
    }

    #[test]
    fn detection_without_geometry_is_ignored() {
        let clusterer = LineClusterer::default();
        let detections = vec![
            Detection::new(BoundingBox::new(Vec::new()), "孤儿", 0.9),
            detection_at(10.0, 10.0, "9:00"),
        ];
        assert_eq!(clusterer.cluster(&detections), vec!["9:00"]);
    }
}
