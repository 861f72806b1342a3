//! DXF export (AutoCAD R12 text format).
//!
//! Segments go to the `Guillochage` layer as 2D polylines; the workpiece
//! outline goes to the `Brut` layer as a circle or as line segments.

use crate::error::{ExportError, ExportResult};
use guillochage_core::{Point, RenderSegment, ShapeDescriptor};
use std::path::Path;
use tracing::info;

/// Layer holding the pattern.
pub const PATTERN_LAYER: &str = "Guillochage";
/// Layer holding the workpiece outline.
pub const OUTLINE_LAYER: &str = "Brut";

/// ACI color of the outline layer (grey).
const OUTLINE_COLOR: u8 = 8;

/// Maps a `#rrggbb` color onto the AutoCAD Color Index.
///
/// Only the pure primaries and black/white have a dedicated index; every
/// other color uses 7, which displays as black or white depending on the
/// background.
pub fn hex_to_aci(hex: &str) -> u8 {
    match hex.trim().to_lowercase().as_str() {
        "#ff0000" => 1,
        "#ffff00" => 2,
        "#00ff00" => 3,
        "#00ffff" => 4,
        "#0000ff" => 5,
        "#ff00ff" => 6,
        _ => 7,
    }
}

/// DXF export options
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct DxfOptions {
    /// Segments per quarter turn when the outline is discretized.
    pub arc_steps: usize,
}

impl Default for DxfOptions {
    fn default() -> Self {
        Self { arc_steps: 12 }
    }
}

pub struct DxfExporter {
    options: DxfOptions,
}

impl Default for DxfExporter {
    fn default() -> Self {
        Self::new(DxfOptions::default())
    }
}

impl DxfExporter {
    pub fn new(options: DxfOptions) -> Self {
        Self { options }
    }

    pub fn options(&self) -> &DxfOptions {
        &self.options
    }

    /// Builds the DXF document. Segments with fewer than two points are skipped.
    pub fn export(&self, segments: &[RenderSegment], shape: &ShapeDescriptor) -> ExportResult<String> {
        if self.options.arc_steps == 0 {
            return Err(ExportError::InvalidOption {
                option: "arc_steps".to_string(),
                reason: "must be at least 1".to_string(),
            });
        }

        let mut dxf = String::new();
        dxf.push_str("0\nSECTION\n2\nHEADER\n9\n$ACADVER\n1\nAC1009\n0\nENDSEC\n");

        dxf.push_str("0\nSECTION\n2\nTABLES\n0\nTABLE\n2\nLAYER\n70\n2\n");
        dxf.push_str(&layer_entry(PATTERN_LAYER, 7));
        dxf.push_str(&layer_entry(OUTLINE_LAYER, OUTLINE_COLOR));
        dxf.push_str("0\nENDTAB\n0\nENDSEC\n");

        dxf.push_str("0\nSECTION\n2\nENTITIES\n");
        for segment in segments.iter().filter(|s| s.points.len() >= 2) {
            dxf.push_str(&format!(
                "0\nPOLYLINE\n8\n{PATTERN_LAYER}\n62\n{}\n66\n1\n10\n0.0\n20\n0.0\n30\n0.0\n",
                hex_to_aci(&segment.color)
            ));
            for p in &segment.points {
                dxf.push_str(&format!(
                    "0\nVERTEX\n8\n{PATTERN_LAYER}\n10\n{:.4}\n20\n{:.4}\n30\n0.0\n",
                    p.x, p.y
                ));
            }
            dxf.push_str("0\nSEQEND\n");
        }
        dxf.push_str(&self.outline(shape));
        dxf.push_str("0\nENDSEC\n0\nEOF\n");

        Ok(dxf)
    }

    /// Exports to `path`.
    pub fn write_to_file(
        &self,
        path: impl AsRef<Path>,
        segments: &[RenderSegment],
        shape: &ShapeDescriptor,
    ) -> ExportResult<()> {
        let path = path.as_ref();
        let dxf = self.export(segments, shape)?;
        std::fs::write(path, dxf)?;
        info!(path = %path.display(), segments = segments.len(), "DXF exported");
        Ok(())
    }

    fn outline(&self, shape: &ShapeDescriptor) -> String {
        if shape.is_round() {
            return format!(
                "0\nCIRCLE\n8\n{OUTLINE_LAYER}\n10\n0.0\n20\n0.0\n30\n0.0\n40\n{:.4}\n",
                shape.half_width()
            );
        }

        shape
            .outline(self.options.arc_steps)
            .windows(2)
            .map(|w| line_entity(w[0], w[1]))
            .collect()
    }
}

fn layer_entry(name: &str, color: u8) -> String {
    format!("0\nLAYER\n2\n{name}\n70\n0\n62\n{color}\n6\nCONTINUOUS\n")
}

fn line_entity(a: Point, b: Point) -> String {
    format!(
        "0\nLINE\n8\n{OUTLINE_LAYER}\n10\n{:.4}\n20\n{:.4}\n30\n0.0\n11\n{:.4}\n21\n{:.4}\n31\n0.0\n",
        a.x, a.y, b.x, b.y
    )
}
