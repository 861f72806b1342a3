//! Wave library.
//!
//! A wave maps the phase angle of a sample (cycle count and phase already
//! applied) to a unitless offset, usually in `[-1, 1]`. The sampler scales
//! it by the line amplitude.

use crate::registry::{CurveCategory, CurveInfo};
use guillochage_core::ParameterSet;
use std::f64::consts::TAU;

pub trait Wave: Send + Sync {
    fn info(&self) -> CurveInfo;

    fn offset(&self, angle: f64, params: &ParameterSet) -> f64;
}

#[derive(Debug, Default, Clone, Copy)]
pub struct Sine;

impl Wave for Sine {
    fn info(&self) -> CurveInfo {
        CurveInfo::new("sinus", "Sinus", CurveCategory::Wave, "Classic sine wave")
    }

    fn offset(&self, angle: f64, _params: &ParameterSet) -> f64 {
        angle.sin()
    }
}

#[derive(Debug, Default, Clone, Copy)]
pub struct Triangle;

impl Wave for Triangle {
    fn info(&self) -> CurveInfo {
        CurveInfo::new("triangle", "Triangle", CurveCategory::Wave, "Triangle wave")
    }

    fn offset(&self, angle: f64, _params: &ParameterSet) -> f64 {
        let x = angle / TAU;
        2.0 * (2.0 * (x - (x + 0.5).floor())).abs() - 1.0
    }
}

/// Hard square wave, `+1` on the non-negative half of the sine.
#[derive(Debug, Default, Clone, Copy)]
pub struct Square;

impl Wave for Square {
    fn info(&self) -> CurveInfo {
        CurveInfo::new("carre", "Carré", CurveCategory::Wave, "Square wave")
    }

    fn offset(&self, angle: f64, _params: &ParameterSet) -> f64 {
        if angle.sin() >= 0.0 {
            1.0
        } else {
            -1.0
        }
    }
}

/// Successive arcs, `|sin|`.
#[derive(Debug, Default, Clone, Copy)]
pub struct Rebound;

impl Wave for Rebound {
    fn info(&self) -> CurveInfo {
        CurveInfo::new(
            "rebond",
            "Rebond",
            CurveCategory::Wave,
            "Successive arcs (absolute sine)",
        )
    }

    fn offset(&self, angle: f64, _params: &ParameterSet) -> f64 {
        angle.sin().abs()
    }
}

/// Square wave with short linear transitions.
///
/// Key: `douceur`, the share of a cycle used by each transition (default 0.02).
#[derive(Debug, Default, Clone, Copy)]
pub struct SlopedSquare;

const DEFAULT_SOFTNESS: f64 = 0.02;

impl Wave for SlopedSquare {
    fn info(&self) -> CurveInfo {
        CurveInfo::new(
            "carre_pente",
            "Carré (Pente)",
            CurveCategory::Wave,
            "Square wave with steep linear transitions",
        )
        .with_default("douceur", DEFAULT_SOFTNESS)
    }

    fn offset(&self, angle: f64, params: &ParameterSet) -> f64 {
        let softness = params.number("douceur", DEFAULT_SOFTNESS).clamp(1e-6, 0.5);
        let progress = (angle / TAU).rem_euclid(1.0);

        if progress < softness {
            -1.0 + 2.0 * (progress / softness)
        } else if progress < 0.5 {
            1.0
        } else if progress < 0.5 + softness {
            1.0 - 2.0 * ((progress - 0.5) / softness)
        } else {
            -1.0
        }
    }
}

/// No modulation: the line follows its trajectory exactly.
#[derive(Debug, Default, Clone, Copy)]
pub struct Flat;

impl Wave for Flat {
    fn info(&self) -> CurveInfo {
        CurveInfo::new(
            "ligne_droite",
            "Ligne Droite",
            CurveCategory::Wave,
            "No modulation (flat)",
        )
    }

    fn offset(&self, _angle: f64, _params: &ParameterSet) -> f64 {
        0.0
    }
}
