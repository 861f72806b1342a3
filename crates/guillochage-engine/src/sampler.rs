//! Line sampler.
//!
//! Turns one resolved line into a raw polyline: trajectory, wave offset
//! along the normal, rotation, translation and mirroring, in that order.

use crate::registry::CurveRegistry;
use crate::trajectory::TrajectoryContext;
use guillochage_core::{LineParams, Point, ShapeDescriptor};
use std::f64::consts::TAU;

/// Generation length as a multiple of the workpiece diagonal.
pub const DEFAULT_GENERATION_PADDING: f64 = 1.5;

/// Smallest padding that still lets a rotated line cover the workpiece.
pub const MIN_GENERATION_PADDING: f64 = 1.2;

/// Lengths shared by every line of a calculation pass.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct GenerationFrame {
    pub brut_w: f64,
    pub brut_h: f64,
    /// Length of the path each line is generated along.
    pub gen_len: f64,
    pub max_dim: f64,
    /// Distance from the start of the path to the start of the workpiece span.
    pub start_offset: f64,
}

impl GenerationFrame {
    /// Frame for `shape`; `padding` is clamped to at least [`MIN_GENERATION_PADDING`].
    pub fn for_shape(shape: &ShapeDescriptor, padding: f64) -> Self {
        let padding = if padding.is_finite() {
            padding.max(MIN_GENERATION_PADDING)
        } else {
            DEFAULT_GENERATION_PADDING
        };
        let gen_len = shape.diagonal() * padding;
        let max_dim = shape.max_dim();
        Self {
            brut_w: shape.width,
            brut_h: shape.height,
            gen_len,
            max_dim,
            start_offset: (gen_len - max_dim) / 2.0,
        }
    }

    /// Wave phase angle at progress `t`.
    ///
    /// `period` counts cycles across the largest workpiece dimension, measured
    /// from the edge of the workpiece rather than the start of the path, so the
    /// pattern stays anchored when the padding changes. `phase` is in turns.
    pub fn wave_angle(&self, t: f64, period: f64, phase: f64) -> f64 {
        let cycles_per_mm = if self.max_dim > 0.0 {
            period / self.max_dim
        } else {
            0.0
        };
        let distance = t * self.gen_len - self.start_offset;
        distance * cycles_per_mm * TAU + phase * TAU
    }
}

/// Position of a line within its layer.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct LinePlacement {
    pub line_index: usize,
    pub total_lines: usize,
    pub y_base: f64,
}

pub struct LineSampler<'a> {
    registry: &'a CurveRegistry,
    frame: GenerationFrame,
}

impl<'a> LineSampler<'a> {
    pub fn new(registry: &'a CurveRegistry, frame: GenerationFrame) -> Self {
        Self { registry, frame }
    }

    pub fn frame(&self) -> &GenerationFrame {
        &self.frame
    }

    /// Samples `steps + 1` points, `steps` taken from the line's resolution.
    pub fn sample(&self, params: &LineParams, placement: LinePlacement) -> Vec<Point> {
        self.sample_steps(params, placement, params.resolution.steps())
    }

    pub fn sample_steps(
        &self,
        params: &LineParams,
        placement: LinePlacement,
        steps: usize,
    ) -> Vec<Point> {
        let steps = steps.max(1);
        let trajectory = self.registry.trajectory(&params.traj_type);
        let wave = self.registry.wave(&params.wave_type);
        let ctx = TrajectoryContext {
            line_index: placement.line_index,
            total_lines: placement.total_lines.max(1),
            y_base: placement.y_base,
            gen_len: self.frame.gen_len,
            brut_w: self.frame.brut_w,
            brut_h: self.frame.brut_h,
            margin_in: params.margin_in,
            params: &params.merged,
        };
        let on_line_base = trajectory.follows_line_base();
        let rotation = params.rotation.to_radians();
        let translation = Point::new(params.pos_x, params.pos_y);

        let mut points = Vec::with_capacity(steps + 1);
        for j in 0..=steps {
            let t = j as f64 / steps as f64;
            let sample = trajectory.evaluate(t, &ctx);

            let mut base = sample.position;
            if on_line_base {
                base.y = placement.y_base;
            }

            let angle = self.frame.wave_angle(t, params.period, params.phase);
            let offset = wave.offset(angle, &params.merged) * params.amplitude_at(t);

            let mut p = (base + sample.normal * offset).rotated(rotation) + translation;
            if params.mirror_h {
                p.x = -p.x;
            }
            if params.mirror_v {
                p.y = -p.y;
            }
            points.push(p);
        }
        points
    }
}
