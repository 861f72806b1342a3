use super::{Trajectory, TrajectoryContext, TrajectorySample};
use crate::registry::{CurveCategory, CurveInfo};
use guillochage_core::Point;

/// Rays that all start exactly at the bottom-centre point of the workpiece.
///
/// Keys: `angle_debut` / `angle_fin` (degrees, default 45 / 135),
/// `longueur` (ray length, default 100), `decale_y` (pivot shift, default 0).
/// A single line points straight up.
#[derive(Debug, Default, Clone, Copy)]
pub struct CenteredFan;

impl Trajectory for CenteredFan {
    fn info(&self) -> CurveInfo {
        CurveInfo::new(
            "eventail_centre",
            "Eventail Centré (Bas)",
            CurveCategory::Base,
            "Rays all starting at the bottom-centre point",
        )
        .with_default("angle_debut", 45.0)
        .with_default("angle_fin", 135.0)
        .with_default("longueur", 100.0)
        .with_default("decale_y", 0.0)
    }

    fn evaluate(&self, t: f64, ctx: &TrajectoryContext<'_>) -> TrajectorySample {
        let p = ctx.params;
        let start = p.number("angle_debut", 45.0);
        let end = p.number("angle_fin", 135.0);
        let length = p.number("longueur", 100.0);
        let pivot = Point::new(0.0, -ctx.brut_h / 2.0 + p.number("decale_y", 0.0));

        let degrees = match ctx.spread() {
            Some(ratio) => start + ratio * (end - start),
            None => 90.0,
        };
        let dir = Point::from_angle(degrees.to_radians());
        TrajectorySample::new(pivot + dir * (t * length), Point::new(-dir.y, dir.x))
    }
}
