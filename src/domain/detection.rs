//! Geometric primitives and the raw detection type.

use serde::{Deserialize, Serialize};

/// A 2D point in image pixel coordinates.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Point {
    /// X-coordinate of the point.
    pub x: f32,
    /// Y-coordinate of the point.
    pub y: f32,
}

impl Point {
    /// Creates a new point with the given coordinates.
    #[inline]
    pub fn new(x: f32, y: f32) -> Self {
        Self { x, y }
    }
}

/// A bounding box represented by its corner points.
///
/// Detections carry four corners in top-left, top-right, bottom-right,
/// bottom-left order, as reported by the recognition engine.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BoundingBox {
    /// The points that define the bounding box.
    pub points: Vec<Point>,
}

impl BoundingBox {
    /// Creates a new bounding box from a vector of points.
    pub fn new(points: Vec<Point>) -> Self {
        Self { points }
    }

    /// Creates a rectangular bounding box from corner coordinates.
    ///
    /// # Arguments
    ///
    /// * `x1` - The x-coordinate of the top-left corner.
    /// * `y1` - The y-coordinate of the top-left corner.
    /// * `x2` - The x-coordinate of the bottom-right corner.
    /// * `y2` - The y-coordinate of the bottom-right corner.
    pub fn from_coords(x1: f32, y1: f32, x2: f32, y2: f32) -> Self {
        let points = vec![
            Point::new(x1, y1),
            Point::new(x2, y1),
            Point::new(x2, y2),
            Point::new(x1, y2),
        ];
        Self { points }
    }

    /// Returns the top-left corner (the first point), if present.
    ///
    /// Line clustering keys off this corner: its y-coordinate decides row
    /// membership and its x-coordinate decides ordering within a row.
    pub fn top_left(&self) -> Option<Point> {
        self.points.first().copied()
    }
}

/// One recognized text fragment with its geometry and confidence.
///
/// Produced once per image by the recognition engine and consumed
/// immutably by the pipeline; never persisted.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Detection {
    /// The bounding box of the fragment, corner points in
    /// top-left, top-right, bottom-right, bottom-left order.
    pub bounding_box: BoundingBox,
    /// The recognized string, possibly containing stray characters.
    pub text: String,
    /// The confidence score in `[0, 1]`.
    pub confidence: f32,
}

impl Detection {
    /// Creates a new detection.
    pub fn new(bounding_box: BoundingBox, text: impl Into<String>, confidence: f32) -> Self {
        Self {
            bounding_box,
            text: text.into(),
            confidence,
        }
    }

    /// Returns true if the recognized text contains at least one ASCII digit.
    ///
    /// Digit-bearing fragments are the ones likely to carry schedule times
    /// and are filtered with the looser `number_confidence` threshold.
    pub fn contains_digit(&self) -> bool {
        self.text.chars().any(|c| c.is_ascii_digit())
    }
}
