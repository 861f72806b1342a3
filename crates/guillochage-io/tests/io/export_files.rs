use guillochage_core::{keys, Layer, ParameterSet, ShapeDescriptor};
use guillochage_engine::GeometryEngine;
use guillochage_io::{DxfExporter, ProjectFile, SvgExporter, SvgOptions};
use tempfile::TempDir;

fn project() -> ProjectFile {
    let layer = Layer::with_params(
        "Calque 1",
        "#ff0000",
        ParameterSet::layer_defaults()
            .with(keys::NB_LINES, 5)
            .with(keys::RESOLUTION, "Faible"),
    );
    ProjectFile::new(ShapeDescriptor::circle(60.0), vec![layer])
}

#[test]
fn test_render_project_to_svg() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("motif.svg");
    let project = project();
    let segments = GeometryEngine::default().calculate(&project.calques, &project.forme);
    assert!(!segments.is_empty());

    let exporter = SvgExporter::new(SvgOptions {
        margin_mm: 5.0,
        outline_color: "#999".to_string(),
    });
    exporter
        .write_to_file(&path, &segments, &project.forme)
        .unwrap();

    let svg = std::fs::read_to_string(&path).unwrap();
    assert!(svg.contains("width=\"70mm\" height=\"70mm\""));
    assert!(svg.contains("stroke=\"#999\" stroke-dasharray=\"2,2\""));
    assert_eq!(svg.matches("<path ").count(), segments.len());
    assert!(svg.contains("stroke=\"#ff0000\""));
}

#[test]
fn test_render_project_to_dxf() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("motif.dxf");
    let project = project();
    let segments = GeometryEngine::default().calculate(&project.calques, &project.forme);

    DxfExporter::default()
        .write_to_file(&path, &segments, &project.forme)
        .unwrap();

    let dxf = std::fs::read_to_string(&path).unwrap();
    assert_eq!(dxf.matches("0\nPOLYLINE\n").count(), segments.len());
    let vertices: usize = segments.iter().map(|s| s.len()).sum();
    assert_eq!(dxf.matches("0\nVERTEX\n").count(), vertices);
    assert!(dxf.contains("62\n1\n"));
    assert!(dxf.contains("0\nCIRCLE\n8\nBrut\n"));
}

#[test]
fn test_write_into_missing_directory_fails() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("missing").join("motif.svg");
    let result = SvgExporter::default().write_to_file(&path, &[], &ShapeDescriptor::circle(10.0));
    assert!(result.is_err());
}
