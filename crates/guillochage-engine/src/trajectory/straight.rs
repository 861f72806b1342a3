use super::{Trajectory, TrajectoryContext, TrajectorySample};
use crate::registry::{CurveCategory, CurveInfo};
use guillochage_core::Point;

/// Horizontal line spanning the generation length, centred on the origin.
///
/// The engine moves each line to its own `y_base`, producing parallel lines.
#[derive(Debug, Default, Clone, Copy)]
pub struct Straight;

impl Trajectory for Straight {
    fn info(&self) -> CurveInfo {
        CurveInfo::new(
            "ligne_droite",
            "Ligne Droite",
            CurveCategory::Base,
            "Parallel straight lines",
        )
    }

    fn evaluate(&self, t: f64, ctx: &TrajectoryContext<'_>) -> TrajectorySample {
        TrajectorySample::new(
            Point::new((t - 0.5) * ctx.gen_len, 0.0),
            Point::new(0.0, 1.0),
        )
    }

    fn follows_line_base(&self) -> bool {
        true
    }
}
