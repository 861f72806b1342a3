use super::{normal_from_tangent, Trajectory, TrajectoryContext, TrajectorySample};
use crate::registry::{CurveCategory, CurveInfo};
use guillochage_core::Point;
use std::f64::consts::TAU;

/// Lobed concentric rings (flower).
///
/// Keys: `nb_petales` (lobes, default 12), `amplitude` (lobe depth, default 2),
/// `phase` (degrees, default 0), `torsade` (twist across lines, default 0).
#[derive(Debug, Default, Clone, Copy)]
pub struct Rosette;

impl Trajectory for Rosette {
    fn info(&self) -> CurveInfo {
        CurveInfo::new(
            "rosace",
            "Rosace",
            CurveCategory::Circular,
            "Lobed concentric rings (flower)",
        )
        .with_default("nb_petales", 12.0)
        .with_default("amplitude", 2.0)
        .with_default("phase", 0.0)
        .with_default("torsade", 0.0)
    }

    fn evaluate(&self, t: f64, ctx: &TrajectoryContext<'_>) -> TrajectorySample {
        let lobes = ctx.params.number("nb_petales", 12.0);
        let depth = ctx.params.number("amplitude", 2.0);
        let phase = ctx.params.number("phase", 0.0).to_radians();
        let twist = ctx.params.number("torsade", 0.0);

        let r_base = ctx.spread_radius();
        let twist_phase = match ctx.spread() {
            Some(progress) if lobes != 0.0 => progress * twist * (TAU / lobes),
            _ => 0.0,
        };

        let angle = t * TAU;
        let lobe_angle = angle * lobes + phase + twist_phase;
        let r = r_base + depth * lobe_angle.cos();
        let dir = Point::from_angle(angle);
        let position = dir * r;

        let dr = -depth * lobes * lobe_angle.sin();
        let tangent = Point::new(dr * dir.x - r * dir.y, dr * dir.y + r * dir.x);
        let normal = normal_from_tangent(tangent).unwrap_or(dir);
        TrajectorySample::new(position, normal)
    }
}
