use crate::geometry::Point;
use serde::{Deserialize, Serialize};

/// One continuous visible polyline produced by a calculation pass.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RenderSegment {
    /// At least two points, in workpiece millimeters.
    pub points: Vec<Point>,
    pub color: String,
    pub thickness: f64,
    pub layer_name: String,
    /// Zero-based index of the originating line slot within its layer.
    pub line_index: usize,
}

impl RenderSegment {
    pub fn len(&self) -> usize {
        self.points.len()
    }

    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }

    pub fn first(&self) -> Option<Point> {
        self.points.first().copied()
    }

    pub fn last(&self) -> Option<Point> {
        self.points.last().copied()
    }

    /// Polyline length in millimeters.
    pub fn path_length(&self) -> f64 {
        self.points
            .windows(2)
            .map(|w| w[0].distance_to(w[1]))
            .sum()
    }
}
