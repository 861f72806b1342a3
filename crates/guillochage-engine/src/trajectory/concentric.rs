use super::{Trajectory, TrajectoryContext, TrajectorySample};
use crate::registry::{CurveCategory, CurveInfo};
use std::f64::consts::TAU;

/// Concentric circles growing from the inner margin to half the generation length.
#[derive(Debug, Default, Clone, Copy)]
pub struct Concentric;

impl Trajectory for Concentric {
    fn info(&self) -> CurveInfo {
        CurveInfo::new(
            "concentrique",
            "Concentrique",
            CurveCategory::Circular,
            "Expanding concentric circles (ripples)",
        )
    }

    fn evaluate(&self, t: f64, ctx: &TrajectoryContext<'_>) -> TrajectorySample {
        let r = ctx.spread_radius();
        let dir = guillochage_core::Point::from_angle(t * TAU);
        TrajectorySample::new(dir * r, dir)
    }
}
