use super::{Trajectory, TrajectoryContext, TrajectorySample};
use crate::registry::{CurveCategory, CurveInfo};
use guillochage_core::Point;
use std::f64::consts::TAU;

/// Rays from the inner margin outwards, evenly spread over a full turn.
#[derive(Debug, Default, Clone, Copy)]
pub struct Radial;

impl Trajectory for Radial {
    fn info(&self) -> CurveInfo {
        CurveInfo::new(
            "radial",
            "Radial",
            CurveCategory::Circular,
            "Rays from the centre outwards (sunburst)",
        )
    }

    fn evaluate(&self, t: f64, ctx: &TrajectoryContext<'_>) -> TrajectorySample {
        let angle = ctx.fraction() * TAU;
        let (min, max) = (ctx.margin_in, ctx.gen_len / 2.0);
        let r = min + t * (max - min);
        let dir = Point::from_angle(angle);
        TrajectorySample::new(dir * r, Point::new(-dir.y, dir.x))
    }
}
