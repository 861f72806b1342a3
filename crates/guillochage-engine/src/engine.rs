//! Geometry orchestrator.
//!
//! Walks the layers and their line slots, resolves each drawn line's
//! parameters, samples it and clips it to the workpiece. The engine never
//! mutates its inputs and keeps no state between passes apart from the
//! shared curve registry.

use crate::clipper::{Clipper, DEFAULT_BISECTION_STEPS};
use crate::registry::CurveRegistry;
use crate::sampler::{GenerationFrame, LinePlacement, LineSampler, DEFAULT_GENERATION_PADDING};
use guillochage_core::{
    keys, Layer, LineParams, LineSlot, RenderSegment, Resolution, ShapeDescriptor,
};
use std::borrow::Cow;
use std::sync::Arc;
use tracing::{debug, trace};

/// Tunables of a calculation pass.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct EngineOptions {
    /// Generation length as a multiple of the workpiece diagonal.
    pub generation_padding: f64,
    pub bisection_steps: usize,
    /// Used when a line has no recognizable resolution.
    pub default_resolution: Resolution,
    /// Forces every line to this resolution, e.g. for a high quality export.
    pub resolution_override: Option<Resolution>,
}

impl Default for EngineOptions {
    fn default() -> Self {
        Self {
            generation_padding: DEFAULT_GENERATION_PADDING,
            bisection_steps: DEFAULT_BISECTION_STEPS,
            default_resolution: Resolution::Medium,
            resolution_override: None,
        }
    }
}

/// Vertical base of line `index` out of `count`, spread evenly over `[-h_eff/2, h_eff/2]`.
///
/// A single line sits on the horizontal axis.
pub fn line_y_base(index: usize, count: usize, h_eff: f64) -> f64 {
    if count <= 1 {
        return 0.0;
    }
    let step = h_eff / (count - 1) as f64;
    -h_eff / 2.0 + index as f64 * step
}

#[derive(Debug, Clone)]
pub struct GeometryEngine {
    registry: Arc<CurveRegistry>,
    options: EngineOptions,
}

impl Default for GeometryEngine {
    fn default() -> Self {
        Self::new(Arc::new(CurveRegistry::with_builtins()))
    }
}

impl GeometryEngine {
    pub fn new(registry: Arc<CurveRegistry>) -> Self {
        Self {
            registry,
            options: EngineOptions::default(),
        }
    }

    pub fn with_options(mut self, options: EngineOptions) -> Self {
        self.options = options;
        self
    }

    pub fn registry(&self) -> &CurveRegistry {
        &self.registry
    }

    pub fn options(&self) -> &EngineOptions {
        &self.options
    }

    /// Computes the visible segments of every drawn line, layer by layer.
    pub fn calculate(&self, layers: &[Layer], shape: &ShapeDescriptor) -> Vec<RenderSegment> {
        let frame = GenerationFrame::for_shape(shape, self.options.generation_padding);
        let sampler = LineSampler::new(&self.registry, frame);
        let clipper =
            Clipper::for_shape(shape).with_bisection_steps(self.options.bisection_steps);

        let mut render = Vec::new();
        for layer in layers.iter().filter(|layer| layer.visible) {
            self.calculate_layer(layer, shape, &sampler, &clipper, &mut render);
        }

        debug!(
            layers = layers.len(),
            segments = render.len(),
            gen_len = frame.gen_len,
            "geometry calculated"
        );
        render
    }

    fn calculate_layer(
        &self,
        layer: &Layer,
        shape: &ShapeDescriptor,
        sampler: &LineSampler<'_>,
        clipper: &Clipper,
        render: &mut Vec<RenderSegment>,
    ) {
        let slots: Cow<'_, [LineSlot]> = if layer.lines.is_empty() {
            let count = layer.nb_lines().max(1);
            Cow::Owned((1..=count).map(LineSlot::new).collect())
        } else {
            Cow::Borrowed(&layer.lines)
        };
        let total = slots.len();
        let margin = layer.global.number(keys::MARGIN_IN, 0.0);
        let h_eff = shape.height - 2.0 * margin;

        for (index, slot) in slots.iter().enumerate() {
            if !slot.is_drawn() {
                continue;
            }

            let params = LineParams::resolve(
                &layer.global,
                &slot.overrides,
                self.options.default_resolution,
            );
            let placement = LinePlacement {
                line_index: index,
                total_lines: total,
                y_base: line_y_base(index, total, h_eff),
            };
            let steps = self
                .options
                .resolution_override
                .unwrap_or(params.resolution)
                .steps();

            let raw = sampler.sample_steps(&params, placement, steps);
            let before = render.len();
            render.extend(
                clipper
                    .clip(&raw)
                    .into_iter()
                    .filter(|points| points.len() >= 2)
                    .map(|points| RenderSegment {
                        points,
                        color: layer.color.clone(),
                        thickness: params.thickness,
                        layer_name: layer.name.clone(),
                        line_index: index,
                    }),
            );
            trace!(
                layer = %layer.name,
                line = index,
                traj = %params.traj_type,
                wave = %params.wave_type,
                segments = render.len() - before,
                "line sampled"
            );
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use guillochage_core::{LineStatus, ParameterSet};

    fn straight_layer(n: usize) -> Layer {
        Layer::with_params(
            "Calque 1",
            "#000000",
            ParameterSet::layer_defaults()
                .with(keys::NB_LINES, n)
                .with(keys::AMPLITUDE, 0.0),
        )
    }

    #[test]
    fn test_line_y_base_spacing() {
        assert_eq!(line_y_base(0, 1, 40.0), 0.0);
        assert_eq!(line_y_base(0, 5, 40.0), -20.0);
        assert_eq!(line_y_base(1, 5, 40.0), -10.0);
        assert_eq!(line_y_base(4, 5, 40.0), 20.0);
    }

    #[test]
    fn test_hidden_layer_skipped() {
        let engine = GeometryEngine::default();
        let mut layer = straight_layer(3);
        layer.visible = false;
        assert!(engine
            .calculate(&[layer], &ShapeDescriptor::circle(50.0))
            .is_empty());
    }

    #[test]
    fn test_deleted_and_inactive_lines_keep_spacing() {
        let engine = GeometryEngine::default();
        let mut layer = straight_layer(3);
        layer.lines[0].status = LineStatus::Deleted { was_active: true };
        layer.lines[2].status = LineStatus::Inactive;

        let render = engine.calculate(&[layer], &ShapeDescriptor::rectangle(60.0, 40.0));
        assert_eq!(render.len(), 1);
        assert_eq!(render[0].line_index, 1);
        // middle of three lines stays on the axis
        assert!(render[0].points.iter().all(|p| p.y.abs() < 1e-9));
    }

    #[test]
    fn test_empty_line_list_uses_nb_lines() {
        let engine = GeometryEngine::default();
        let mut layer = straight_layer(4);
        layer.lines.clear();
        let render = engine.calculate(&[layer], &ShapeDescriptor::rectangle(60.0, 40.0));
        assert_eq!(render.len(), 4);
    }

    #[test]
    fn test_segment_carries_layer_style() {
        let engine = GeometryEngine::default();
        let mut layer = straight_layer(2);
        layer.color = "#ff0000".to_string();
        layer
            .update_params(&ParameterSet::new().with(keys::THICKNESS, 0.3), Some(1))
            .unwrap();
        let render = engine.calculate(&[layer], &ShapeDescriptor::rectangle(60.0, 40.0));
        assert_eq!(render.len(), 2);
        assert_eq!(render[0].color, "#ff0000");
        assert_eq!(render[0].thickness, 1.0);
        assert_eq!(render[1].thickness, 0.3);
        assert_eq!(render[1].layer_name, "Calque 1");
    }

    #[test]
    fn test_resolution_override() {
        let options = EngineOptions {
            resolution_override: Some(Resolution::Low),
            ..EngineOptions::default()
        };
        let engine = GeometryEngine::default().with_options(options);
        let layer = straight_layer(1);
        // a rectangle as wide as the generation path would keep every point
        let shape = ShapeDescriptor::rectangle(60.0, 40.0);
        let render = engine.calculate(&[layer], &shape);
        assert_eq!(render.len(), 1);
        assert!(render[0].points.len() <= 202);
        assert!(render[0].points.len() > 50);
    }
}
