use super::{Trajectory, TrajectoryContext, TrajectorySample};
use crate::registry::{CurveCategory, CurveInfo};
use guillochage_core::Point;

/// Rays from a pivot on the bottom edge of the workpiece, spread between two angles.
///
/// Keys: `pivot_offset_y` (default 0), `angle_debut` / `angle_fin` (degrees,
/// default 45 / 135), `rayon_min` / `rayon_max` (default 10 / 100).
#[derive(Debug, Default, Clone, Copy)]
pub struct Fan;

impl Trajectory for Fan {
    fn info(&self) -> CurveInfo {
        CurveInfo::new(
            "eventail",
            "Eventail (Auto-Centré)",
            CurveCategory::Base,
            "Rays from the bottom of the workpiece (automatic pivot)",
        )
        .with_default("pivot_offset_y", 0.0)
        .with_default("angle_debut", 45.0)
        .with_default("angle_fin", 135.0)
        .with_default("rayon_min", 10.0)
        .with_default("rayon_max", 100.0)
    }

    fn evaluate(&self, t: f64, ctx: &TrajectoryContext<'_>) -> TrajectorySample {
        let p = ctx.params;
        let pivot = Point::new(0.0, -ctx.brut_h / 2.0 + p.number("pivot_offset_y", 0.0));
        let start = p.number("angle_debut", 45.0).to_radians();
        let end = p.number("angle_fin", 135.0).to_radians();
        let r_min = p.number("rayon_min", 10.0);
        let r_max = p.number("rayon_max", 100.0);

        let angle = match ctx.spread() {
            Some(ratio) => start + ratio * (end - start),
            None => (start + end) / 2.0,
        };
        let r = r_min + t * (r_max - r_min);
        let dir = Point::from_angle(angle);
        TrajectorySample::new(pivot + dir * r, Point::new(-dir.y, dir.x))
    }
}
