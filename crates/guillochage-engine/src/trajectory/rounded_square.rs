use super::{NormalKind, Trajectory, TrajectoryContext, TrajectorySample};
use crate::registry::{CurveCategory, CurveInfo};
use guillochage_core::Point;
use std::f64::consts::TAU;

/// Nested superellipses ("cushion" squares).
///
/// Key: `courbure` (exponent, default 4; 2 is a circle, higher is squarer).
/// The normal is the polar direction, not the true curve normal.
#[derive(Debug, Default, Clone, Copy)]
pub struct RoundedSquare;

const DEFAULT_CURVATURE: f64 = 4.0;

impl Trajectory for RoundedSquare {
    fn info(&self) -> CurveInfo {
        CurveInfo::new(
            "carre_arrondi",
            "Carré Arrondi (Coussin)",
            CurveCategory::Shape,
            "Square path with rounded corners (superellipse)",
        )
        .with_default("courbure", DEFAULT_CURVATURE)
    }

    fn evaluate(&self, t: f64, ctx: &TrajectoryContext<'_>) -> TrajectorySample {
        let scale = ctx.spread_radius();
        let mut n = ctx.params.number("courbure", DEFAULT_CURVATURE);
        if n <= 0.0 {
            n = DEFAULT_CURVATURE;
        }
        let exponent = 2.0 / n;

        let dir = Point::from_angle(t * TAU);
        let x = scale * dir.x.signum() * dir.x.abs().powf(exponent);
        let y = scale * dir.y.signum() * dir.y.abs().powf(exponent);
        TrajectorySample::new(Point::new(x, y), dir)
    }

    fn normal_kind(&self) -> NormalKind {
        NormalKind::Approximate
    }
}
