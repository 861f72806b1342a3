//! The workpiece ("brut") outline every pattern is clipped to.

use crate::geometry::Point;
use serde::{Deserialize, Serialize};
use std::f64::consts::{FRAC_PI_2, PI, TAU};

/// Outline family of the workpiece.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ShapeKind {
    /// Circle, or an oval when width and height differ.
    Circle,
    /// Axis-aligned rectangle, optionally with rounded corners.
    Rectangle,
}

impl ShapeKind {
    pub fn type_index(&self) -> i64 {
        match self {
            ShapeKind::Circle => 0,
            ShapeKind::Rectangle => 1,
        }
    }

    /// Any index other than 0 is a rectangle.
    pub fn from_type_index(index: i64) -> Self {
        if index == 0 {
            ShapeKind::Circle
        } else {
            ShapeKind::Rectangle
        }
    }
}

/// Dimensions of the workpiece, centred on the origin.
///
/// `corner_radius` is only meaningful for rectangles; use
/// [`ShapeDescriptor::effective_corner_radius`] to read it clamped.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(from = "ShapeRecord", into = "ShapeRecord")]
pub struct ShapeDescriptor {
    pub kind: ShapeKind,
    pub width: f64,
    pub height: f64,
    pub corner_radius: f64,
}

impl Default for ShapeDescriptor {
    fn default() -> Self {
        Self::circle(50.0)
    }
}

impl ShapeDescriptor {
    pub fn circle(diameter: f64) -> Self {
        Self::ellipse(diameter, diameter)
    }

    pub fn ellipse(width: f64, height: f64) -> Self {
        Self {
            kind: ShapeKind::Circle,
            width,
            height,
            corner_radius: 0.0,
        }
    }

    pub fn rectangle(width: f64, height: f64) -> Self {
        Self::rounded_rectangle(width, height, 0.0)
    }

    pub fn rounded_rectangle(width: f64, height: f64, corner_radius: f64) -> Self {
        Self {
            kind: ShapeKind::Rectangle,
            width,
            height,
            corner_radius,
        }
    }

    pub fn half_width(&self) -> f64 {
        self.width / 2.0
    }

    pub fn half_height(&self) -> f64 {
        self.height / 2.0
    }

    pub fn max_dim(&self) -> f64 {
        self.width.max(self.height)
    }

    pub fn diagonal(&self) -> f64 {
        self.width.hypot(self.height)
    }

    /// True for a circle whose width equals its height.
    pub fn is_round(&self) -> bool {
        self.kind == ShapeKind::Circle && (self.width - self.height).abs() < f64::EPSILON
    }

    /// Corner radius clamped to `[0, min(width, height) / 2]`; always 0 for circles.
    pub fn effective_corner_radius(&self) -> f64 {
        match self.kind {
            ShapeKind::Circle => 0.0,
            ShapeKind::Rectangle => {
                let limit = (self.width.min(self.height) / 2.0).max(0.0);
                if self.corner_radius.is_finite() {
                    self.corner_radius.clamp(0.0, limit)
                } else {
                    0.0
                }
            }
        }
    }

    /// Closed polygon approximating the outline, first point repeated at the end.
    ///
    /// `arc_steps` is the number of segments per quarter turn, used for the
    /// ellipse and for each rounded corner.
    pub fn outline(&self, arc_steps: usize) -> Vec<Point> {
        let arc_steps = arc_steps.max(1);
        let hw = self.half_width();
        let hh = self.half_height();
        let mut points = Vec::new();

        match self.kind {
            ShapeKind::Circle => {
                let total = arc_steps * 4;
                for i in 0..total {
                    let a = TAU * i as f64 / total as f64;
                    points.push(Point::new(hw * a.cos(), hh * a.sin()));
                }
            }
            ShapeKind::Rectangle => {
                let r = self.effective_corner_radius();
                if r <= 0.0 {
                    points.push(Point::new(hw, -hh));
                    points.push(Point::new(hw, hh));
                    points.push(Point::new(-hw, hh));
                    points.push(Point::new(-hw, -hh));
                } else {
                    // Corners counter-clockwise from bottom-right, each swept over a quarter turn.
                    let corners = [
                        (Point::new(hw - r, -hh + r), -FRAC_PI_2),
                        (Point::new(hw - r, hh - r), 0.0),
                        (Point::new(-hw + r, hh - r), FRAC_PI_2),
                        (Point::new(-hw + r, -hh + r), PI),
                    ];
                    for (centre, start) in corners {
                        for i in 0..=arc_steps {
                            let a = start + FRAC_PI_2 * i as f64 / arc_steps as f64;
                            points.push(centre + Point::from_angle(a) * r);
                        }
                    }
                }
            }
        }

        if let Some(first) = points.first().copied() {
            points.push(first);
        }
        points
    }
}

/// Persisted form of the shape: `{type_index, dim1, dim2, radius}`.
#[derive(Debug, Clone, Serialize, Deserialize)]
struct ShapeRecord {
    #[serde(default)]
    type_index: i64,
    #[serde(default = "default_dimension")]
    dim1: f64,
    #[serde(default = "default_dimension")]
    dim2: f64,
    #[serde(default)]
    radius: f64,
}

fn default_dimension() -> f64 {
    50.0
}

impl From<ShapeRecord> for ShapeDescriptor {
    fn from(record: ShapeRecord) -> Self {
        let kind = ShapeKind::from_type_index(record.type_index);
        Self {
            kind,
            width: record.dim1,
            height: record.dim2,
            corner_radius: match kind {
                ShapeKind::Circle => 0.0,
                ShapeKind::Rectangle => record.radius,
            },
        }
    }
}

impl From<ShapeDescriptor> for ShapeRecord {
    fn from(shape: ShapeDescriptor) -> Self {
        Self {
            type_index: shape.kind.type_index(),
            dim1: shape.width,
            dim2: shape.height,
            radius: shape.corner_radius,
        }
    }
}
