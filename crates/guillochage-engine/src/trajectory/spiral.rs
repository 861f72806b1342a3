use super::{normal_from_tangent, Trajectory, TrajectoryContext, TrajectorySample};
use crate::registry::{CurveCategory, CurveInfo};
use guillochage_core::Point;
use std::f64::consts::TAU;

/// Archimedean spiral; each line starts at its own angular offset.
///
/// Keys: `tours` (revolutions, default 15), `sens_horaire` (1 or -1, default 1).
#[derive(Debug, Default, Clone, Copy)]
pub struct Spiral;

impl Trajectory for Spiral {
    fn info(&self) -> CurveInfo {
        CurveInfo::new(
            "spirale",
            "Spirale (Colimaçon)",
            CurveCategory::Circular,
            "Continuous Archimedean spiral",
        )
        .with_default("tours", 15.0)
        .with_default("sens_horaire", 1.0)
    }

    fn evaluate(&self, t: f64, ctx: &TrajectoryContext<'_>) -> TrajectorySample {
        let turns = ctx.params.number("tours", 15.0);
        let direction = ctx.params.number("sens_horaire", 1.0);
        let (min, max) = (ctx.margin_in, ctx.gen_len / 2.0);

        let r = min + t * (max - min);
        let theta = t * turns * TAU * direction + ctx.fraction() * TAU;
        let position = Point::from_angle(theta) * r;

        let dr = max - min;
        let dtheta = turns * TAU * direction;
        let (sin, cos) = theta.sin_cos();
        let tangent = Point::new(dr * cos - r * dtheta * sin, dr * sin + r * dtheta * cos);

        let normal = match normal_from_tangent(tangent) {
            Some(n) if n.dot(position) < 0.0 => -n,
            Some(n) => n,
            None => Point::from_angle(theta),
        };
        TrajectorySample::new(position, normal)
    }
}
