//! Trajectory library.
//!
//! A trajectory maps progress `t ∈ [0, 1]` along one line to a base
//! position and the unit normal the wave offset is applied along. Every
//! implementation is a pure function of `t` and its [`TrajectoryContext`].

mod centered_fan;
mod concentric;
mod fan;
mod radial;
mod rosette;
mod rounded_square;
mod spiral;
mod straight;

pub use centered_fan::CenteredFan;
pub use concentric::Concentric;
pub use fan::Fan;
pub use radial::Radial;
pub use rosette::Rosette;
pub use rounded_square::RoundedSquare;
pub use spiral::Spiral;
pub use straight::Straight;

use crate::registry::CurveInfo;
use guillochage_core::{ParameterSet, Point};

/// Per-line values computed by the engine and handed to the trajectory.
#[derive(Debug, Clone, Copy)]
pub struct TrajectoryContext<'a> {
    pub line_index: usize,
    /// Number of line slots in the layer, at least 1.
    pub total_lines: usize,
    /// Vertical base of the line for the parallel-line family.
    pub y_base: f64,
    /// Length of the generation path, longer than the workpiece diagonal.
    pub gen_len: f64,
    pub brut_w: f64,
    pub brut_h: f64,
    pub margin_in: f64,
    /// Merged line parameters, for trajectory-specific keys.
    pub params: &'a ParameterSet,
}

impl TrajectoryContext<'_> {
    pub fn lines(&self) -> usize {
        self.total_lines.max(1)
    }

    /// `i / (n - 1)` across the layer, or `None` for a single line.
    pub fn spread(&self) -> Option<f64> {
        let n = self.lines();
        (n > 1).then(|| self.line_index as f64 / (n - 1) as f64)
    }

    /// `i / n`, the share of a full turn used by evenly spaced rays.
    pub fn fraction(&self) -> f64 {
        self.line_index as f64 / self.lines() as f64
    }

    /// Radius interpolated from the inner margin to half the generation length,
    /// or the midpoint of that range for a single line.
    pub fn spread_radius(&self) -> f64 {
        let (min, max) = (self.margin_in, self.gen_len / 2.0);
        match self.spread() {
            Some(progress) => min + progress * (max - min),
            None => (min + max) / 2.0,
        }
    }
}

/// Base position and unit normal at one sample.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TrajectorySample {
    pub position: Point,
    pub normal: Point,
}

impl TrajectorySample {
    pub fn new(position: Point, normal: Point) -> Self {
        Self { position, normal }
    }
}

/// How faithfully a trajectory's normal follows its curve.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NormalKind {
    /// Perpendicular to the tangent.
    Exact,
    /// A cheaper stand-in, e.g. the polar direction for a superellipse.
    Approximate,
}

pub trait Trajectory: Send + Sync {
    fn info(&self) -> CurveInfo;

    fn evaluate(&self, t: f64, ctx: &TrajectoryContext<'_>) -> TrajectorySample;

    /// Parallel-line trajectories have their y replaced by the line's `y_base`.
    fn follows_line_base(&self) -> bool {
        false
    }

    fn normal_kind(&self) -> NormalKind {
        NormalKind::Exact
    }
}

/// Unit normal from a tangent `(dx, dy)`, rotated clockwise; `None` for a zero tangent.
pub(crate) fn normal_from_tangent(tangent: Point) -> Option<Point> {
    Point::new(tangent.y, -tangent.x).normalized()
}
