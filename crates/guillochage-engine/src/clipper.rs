//! Boundary clipper.
//!
//! Splits a polyline into the runs of consecutive points lying inside the
//! workpiece. Where a run enters or leaves the boundary, the crossing point
//! is located by bisection between the inside and the outside sample, and
//! the last inside midpoint is used so every emitted point stays inside.

use guillochage_core::{Point, ShapeDescriptor, ShapeKind};

/// Default number of bisection iterations per crossing.
pub const DEFAULT_BISECTION_STEPS: usize = 12;

/// Relative tolerance on the ellipse equation.
const ELLIPSE_TOLERANCE: f64 = 1e-5;

/// Clip region centred on the origin.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Boundary {
    Ellipse {
        rx: f64,
        ry: f64,
    },
    /// Axis-aligned rectangle; `radius` is the corner radius, 0 for sharp corners.
    Rectangle {
        half_width: f64,
        half_height: f64,
        radius: f64,
    },
}

impl Boundary {
    pub fn from_shape(shape: &ShapeDescriptor) -> Self {
        match shape.kind {
            ShapeKind::Circle => Boundary::Ellipse {
                rx: shape.half_width(),
                ry: shape.half_height(),
            },
            ShapeKind::Rectangle => Boundary::Rectangle {
                half_width: shape.half_width(),
                half_height: shape.half_height(),
                radius: shape.effective_corner_radius(),
            },
        }
    }

    /// Inclusive membership test. Degenerate ellipses contain nothing.
    pub fn contains(&self, p: Point) -> bool {
        match *self {
            Boundary::Ellipse { rx, ry } => {
                let (rx2, ry2) = (rx * rx, ry * ry);
                if rx2 <= 0.0 || ry2 <= 0.0 {
                    return false;
                }
                (p.x * p.x) / rx2 + (p.y * p.y) / ry2 <= 1.0 + ELLIPSE_TOLERANCE
            }
            Boundary::Rectangle {
                half_width,
                half_height,
                radius,
            } => {
                if !(-half_width..=half_width).contains(&p.x)
                    || !(-half_height..=half_height).contains(&p.y)
                {
                    return false;
                }
                if radius <= 0.0 {
                    return true;
                }
                // Symmetric in both axes, so fold everything into the top-right corner.
                let (ax, ay) = (p.x.abs(), p.y.abs());
                let (cx, cy) = (half_width - radius, half_height - radius);
                if ax > cx && ay > cy {
                    let (dx, dy) = (ax - cx, ay - cy);
                    dx * dx + dy * dy <= radius * radius
                } else {
                    true
                }
            }
        }
    }

    /// Boundary crossing on the segment `a`–`b`, one end inside and one outside.
    ///
    /// Returns the inside end of the final bisection interval.
    pub fn crossing(&self, a: Point, b: Point, steps: usize) -> Point {
        let (mut inside, mut outside) = if self.contains(a) { (a, b) } else { (b, a) };
        for _ in 0..steps {
            let mid = inside.midpoint(outside);
            if self.contains(mid) {
                inside = mid;
            } else {
                outside = mid;
            }
        }
        inside
    }
}

/// Polyline clipper bound to one boundary.
#[derive(Debug, Clone, Copy)]
pub struct Clipper {
    boundary: Boundary,
    bisection_steps: usize,
}

impl Clipper {
    pub fn new(boundary: Boundary) -> Self {
        Self {
            boundary,
            bisection_steps: DEFAULT_BISECTION_STEPS,
        }
    }

    pub fn for_shape(shape: &ShapeDescriptor) -> Self {
        Self::new(Boundary::from_shape(shape))
    }

    pub fn with_bisection_steps(mut self, steps: usize) -> Self {
        self.bisection_steps = steps;
        self
    }

    pub fn boundary(&self) -> &Boundary {
        &self.boundary
    }

    /// Visible runs of `points`, in order.
    ///
    /// A run may hold a single point when the polyline only grazes the
    /// boundary; callers drop runs shorter than two points.
    pub fn clip(&self, points: &[Point]) -> Vec<Vec<Point>> {
        let mut segments = Vec::new();
        let Some(&first) = points.first() else {
            return segments;
        };

        let mut current = Vec::new();
        let mut prev = first;
        let mut prev_inside = self.boundary.contains(prev);
        if prev_inside {
            current.push(prev);
        }

        for &curr in &points[1..] {
            let curr_inside = self.boundary.contains(curr);
            match (prev_inside, curr_inside) {
                (true, true) => current.push(curr),
                (true, false) => {
                    current.push(self.boundary.crossing(prev, curr, self.bisection_steps));
                    segments.push(std::mem::take(&mut current));
                }
                (false, true) => {
                    let entry = self.boundary.crossing(curr, prev, self.bisection_steps);
                    current = vec![entry, curr];
                }
                (false, false) => {}
            }
            prev = curr;
            prev_inside = curr_inside;
        }

        if !current.is_empty() {
            segments.push(current);
        }
        segments
    }
}
