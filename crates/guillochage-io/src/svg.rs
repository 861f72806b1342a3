//! SVG export.
//!
//! Writes the rendered segments into a millimeter sized document with the
//! workpiece centred, Y pointing up, and a dashed reference outline.

use crate::error::{ExportError, ExportResult};
use guillochage_core::{RenderSegment, ShapeDescriptor, ShapeKind};
use std::path::Path;
use tracing::info;

/// SVG export options
#[derive(Debug, Clone, PartialEq)]
pub struct SvgOptions {
    /// Blank border around the workpiece, in millimeters.
    pub margin_mm: f64,
    /// Stroke color of the dashed workpiece outline.
    pub outline_color: String,
}

impl Default for SvgOptions {
    fn default() -> Self {
        Self {
            margin_mm: 10.0,
            outline_color: "#ddd".to_string(),
        }
    }
}

pub struct SvgExporter {
    options: SvgOptions,
}

impl Default for SvgExporter {
    fn default() -> Self {
        Self::new(SvgOptions::default())
    }
}

impl SvgExporter {
    pub fn new(options: SvgOptions) -> Self {
        Self { options }
    }

    pub fn options(&self) -> &SvgOptions {
        &self.options
    }

    /// Builds the SVG document. Segments with fewer than two points are skipped.
    pub fn export(&self, segments: &[RenderSegment], shape: &ShapeDescriptor) -> ExportResult<String> {
        let margin = self.options.margin_mm;
        if !margin.is_finite() || margin < 0.0 {
            return Err(ExportError::InvalidOption {
                option: "margin_mm".to_string(),
                reason: format!("must be a non-negative number, got {margin}"),
            });
        }

        let width = shape.width + margin * 2.0;
        let height = shape.height + margin * 2.0;
        let (cx, cy) = (width / 2.0, height / 2.0);

        let mut svg = String::new();
        svg.push_str(&format!(
            "<svg xmlns=\"http://www.w3.org/2000/svg\" width=\"{width}mm\" height=\"{height}mm\" viewBox=\"0 0 {width} {height}\">\n"
        ));
        svg.push_str(&self.outline(shape, cx, cy));

        for segment in segments.iter().filter(|s| s.points.len() >= 2) {
            let d = segment
                .points
                .iter()
                .enumerate()
                .map(|(i, p)| {
                    let cmd = if i == 0 { "M" } else { "L" };
                    format!("{cmd} {:.3} {:.3}", cx + p.x, cy - p.y)
                })
                .collect::<Vec<_>>()
                .join(" ");
            svg.push_str(&format!(
                "<path d=\"{d}\" stroke=\"{}\" stroke-width=\"{}\" fill=\"none\"/>\n",
                segment.color, segment.thickness
            ));
        }

        svg.push_str("</svg>\n");
        Ok(svg)
    }

    /// Exports to `path`.
    pub fn write_to_file(
        &self,
        path: impl AsRef<Path>,
        segments: &[RenderSegment],
        shape: &ShapeDescriptor,
    ) -> ExportResult<()> {
        let path = path.as_ref();
        let svg = self.export(segments, shape)?;
        std::fs::write(path, svg)?;
        info!(path = %path.display(), segments = segments.len(), "SVG exported");
        Ok(())
    }

    fn outline(&self, shape: &ShapeDescriptor, cx: f64, cy: f64) -> String {
        let style = format!(
            "fill=\"none\" stroke=\"{}\" stroke-dasharray=\"2,2\"",
            self.options.outline_color
        );
        let (bw, bh) = (shape.width, shape.height);
        match shape.kind {
            ShapeKind::Circle => format!(
                "<ellipse cx=\"{cx}\" cy=\"{cy}\" rx=\"{}\" ry=\"{}\" {style}/>\n",
                bw / 2.0,
                bh / 2.0
            ),
            ShapeKind::Rectangle => {
                let (x, y) = (cx - bw / 2.0, cy - bh / 2.0);
                let r = shape.effective_corner_radius();
                if r > 0.0 {
                    format!(
                        "<rect x=\"{x}\" y=\"{y}\" width=\"{bw}\" height=\"{bh}\" rx=\"{r}\" ry=\"{r}\" {style}/>\n"
                    )
                } else {
                    format!("<rect x=\"{x}\" y=\"{y}\" width=\"{bw}\" height=\"{bh}\" {style}/>\n")
                }
            }
        }
    }
}
