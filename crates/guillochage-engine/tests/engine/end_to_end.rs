use guillochage_core::{keys, Layer, ParameterSet, Point, Resolution, ShapeDescriptor};
use guillochage_engine::{
    Boundary, CurveRegistry, EngineOptions, GeometryEngine, MIN_GENERATION_PADDING,
};
use proptest::prelude::*;

fn layer(params: ParameterSet) -> Layer {
    Layer::with_params("Calque 1", "#000000", ParameterSet::layer_defaults().merged_with(&params))
}

#[test]
fn test_single_flat_line_through_circle() {
    let engine = GeometryEngine::default();
    let layer = layer(
        ParameterSet::new()
            .with(keys::NB_LINES, 1)
            .with(keys::TRAJ_TYPE, "ligne_droite")
            .with(keys::WAVE_TYPE, "sinus")
            .with(keys::AMPLITUDE, 0.0),
    );

    let render = engine.calculate(&[layer], &ShapeDescriptor::circle(100.0));
    assert_eq!(render.len(), 1);

    let segment = &render[0];
    assert!(segment.points.iter().all(|p| p.y.abs() < 1e-12));
    let first = segment.first().unwrap();
    let last = segment.last().unwrap();
    assert!((first.x + 50.0).abs() < 1e-3, "start at {}", first.x);
    assert!((last.x - 50.0).abs() < 1e-3, "end at {}", last.x);
    assert!((segment.path_length() - 100.0).abs() < 2e-3);
}

#[test]
fn test_lines_spread_over_effective_height() {
    let engine = GeometryEngine::default();
    let layer = layer(
        ParameterSet::new()
            .with(keys::NB_LINES, 5)
            .with(keys::AMPLITUDE, 0.0)
            .with(keys::MARGIN_IN, 5.0),
    );

    let render = engine.calculate(&[layer], &ShapeDescriptor::rectangle(80.0, 50.0));
    assert_eq!(render.len(), 5);
    let ys: Vec<f64> = render.iter().map(|s| s.points[0].y).collect();
    let expected = [-20.0, -10.0, 0.0, 10.0, 20.0];
    for (y, e) in ys.iter().zip(expected) {
        assert!((y - e).abs() < 1e-9, "{y} != {e}");
    }
}

#[test]
fn test_layers_rendered_in_order() {
    let engine = GeometryEngine::default();
    let flat = ParameterSet::new()
        .with(keys::AMPLITUDE, 0.0)
        .with(keys::MARGIN_IN, 5.0);
    let mut first = layer(flat.clone().with(keys::NB_LINES, 2));
    first.name = "A".to_string();
    let mut second = layer(flat.with(keys::NB_LINES, 3));
    second.name = "B".to_string();
    second.color = "#0000ff".to_string();

    let render = engine.calculate(&[first, second], &ShapeDescriptor::rectangle(100.0, 60.0));
    let names: Vec<&str> = render.iter().map(|s| s.layer_name.as_str()).collect();
    assert_eq!(names, vec!["A", "A", "B", "B", "B"]);
    assert!(render[2..].iter().all(|s| s.color == "#0000ff"));
}

#[test]
fn test_line_override_changes_only_that_line() {
    let engine = GeometryEngine::default();
    let mut layer = layer(
        ParameterSet::new()
            .with(keys::NB_LINES, 3)
            .with(keys::AMPLITUDE, 0.0)
            .with(keys::MARGIN_IN, 5.0),
    );
    layer
        .update_params(&ParameterSet::new().with(keys::POS_Y, -4.0), Some(2))
        .unwrap();

    let render = engine.calculate(&[layer], &ShapeDescriptor::rectangle(100.0, 60.0));
    assert_eq!(render.len(), 3);
    assert!((render[0].points[0].y + 25.0).abs() < 1e-9);
    assert!(render[1].points[0].y.abs() < 1e-9);
    assert_eq!(render[2].line_index, 2);
    assert!((render[2].points[0].y - 21.0).abs() < 1e-9);
}

#[test]
fn test_vertical_mirror_flips_rendered_lines() {
    let engine = GeometryEngine::default();
    let params = ParameterSet::new()
        .with(keys::NB_LINES, 1)
        .with(keys::WAVE_TYPE, "rebond")
        .with(keys::AMPLITUDE, 5.0);
    let plain = engine.calculate(&[layer(params.clone())], &ShapeDescriptor::circle(80.0));
    let mirrored = engine.calculate(
        &[layer(params.with(keys::MIRROR_V, true))],
        &ShapeDescriptor::circle(80.0),
    );

    assert_eq!(plain.len(), mirrored.len());
    for (a, b) in plain.iter().zip(&mirrored) {
        assert_eq!(a.len(), b.len());
        for (p, q) in a.points.iter().zip(&b.points) {
            assert!((p.x - q.x).abs() < 1e-9);
            assert!((p.y + q.y).abs() < 1e-9);
        }
    }
}

#[test]
fn test_every_builtin_trajectory_renders_something() {
    let registry = CurveRegistry::with_builtins();
    let engine = GeometryEngine::default();
    let shape = ShapeDescriptor::circle(100.0);
    for info in registry.trajectories() {
        let layer = layer(
            ParameterSet::new()
                .with(keys::TRAJ_TYPE, info.key.as_str())
                .with(keys::NB_LINES, 6)
                .with(keys::RESOLUTION, "Faible"),
        );
        let render = engine.calculate(&[layer], &shape);
        assert!(!render.is_empty(), "{} rendered nothing", info.key);
        assert!(render.iter().all(|s| s.len() >= 2));
    }
}

#[test]
fn test_oversized_line_count_falls_back() {
    let engine = GeometryEngine::default();
    let mut layer = layer(
        ParameterSet::new()
            .with(keys::NB_LINES, 1e30)
            .with(keys::AMPLITUDE, 0.0)
            .with(keys::MARGIN_IN, 5.0),
    );
    layer.lines.clear();

    let render = engine.calculate(&[layer], &ShapeDescriptor::rectangle(80.0, 50.0));
    assert_eq!(render.len(), 10);
    assert!(render.iter().all(|s| s.line_index < 10));
}

#[test]
fn test_rotated_outer_lines_reach_boundary_at_min_padding() {
    let options = EngineOptions {
        generation_padding: MIN_GENERATION_PADDING,
        resolution_override: Some(Resolution::Low),
        ..EngineOptions::default()
    };
    let engine = GeometryEngine::default().with_options(options);
    let shape = ShapeDescriptor::rectangle(100.0, 60.0);
    let layer = layer(
        ParameterSet::new()
            .with(keys::NB_LINES, 5)
            .with(keys::AMPLITUDE, 0.0)
            .with(keys::MARGIN_IN, 0.0)
            .with(keys::ROTATION, 45.0),
    );

    let render = engine.calculate(&[layer], &shape);
    assert_eq!(render.len(), 5);

    let (hw, hh) = (shape.width / 2.0, shape.height / 2.0);
    // distance to the nearest edge, negative when outside
    let edge_gap = |p: Point| (hw - p.x.abs()).min(hh - p.y.abs());
    for segment in &render {
        for end in [segment.first().unwrap(), segment.last().unwrap()] {
            let gap = edge_gap(end);
            assert!(
                (-1e-9..1e-3).contains(&gap),
                "line {} ends {gap} mm from the edge at {:?}",
                segment.line_index,
                end
            );
        }
    }
}

fn trajectory_names() -> impl Strategy<Value = &'static str> {
    prop::sample::select(vec![
        "ligne_droite",
        "radial",
        "concentrique",
        "spirale",
        "carre_arrondi",
        "rosace",
        "eventail",
        "eventail_centre",
        "no_such_curve",
    ])
}

fn wave_names() -> impl Strategy<Value = &'static str> {
    prop::sample::select(vec![
        "sinus",
        "triangle",
        "carre",
        "rebond",
        "carre_pente",
        "ligne_droite",
    ])
}

fn shapes() -> impl Strategy<Value = ShapeDescriptor> {
    prop_oneof![
        (20.0f64..120.0).prop_map(ShapeDescriptor::circle),
        (20.0f64..120.0, 20.0f64..120.0).prop_map(|(w, h)| ShapeDescriptor::rectangle(w, h)),
        (20.0f64..120.0, 20.0f64..120.0, 0.0f64..40.0)
            .prop_map(|(w, h, r)| ShapeDescriptor::rounded_rectangle(w, h, r)),
    ]
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(48))]

    #[test]
    fn prop_rendered_points_stay_inside(
        shape in shapes(),
        traj in trajectory_names(),
        wave in wave_names(),
        nb_lines in 1usize..6,
        amplitude in 0.0f64..15.0,
        rotation in -180.0f64..180.0,
        pos_x in -20.0f64..20.0,
    ) {
        let options = EngineOptions {
            resolution_override: Some(Resolution::Low),
            ..EngineOptions::default()
        };
        let engine = GeometryEngine::default().with_options(options);
        let layer = layer(
            ParameterSet::new()
                .with(keys::TRAJ_TYPE, traj)
                .with(keys::WAVE_TYPE, wave)
                .with(keys::NB_LINES, nb_lines)
                .with(keys::AMPLITUDE, amplitude)
                .with(keys::ROTATION, rotation)
                .with(keys::POS_X, pos_x),
        );

        let boundary = Boundary::from_shape(&shape);
        let (hw, hh) = (shape.width / 2.0, shape.height / 2.0);
        for segment in engine.calculate(&[layer], &shape) {
            prop_assert!(segment.len() >= 2);
            for p in &segment.points {
                prop_assert!(p.is_finite());
                let inside = match boundary {
                    Boundary::Ellipse { rx, ry } => (p.x / rx).powi(2) + (p.y / ry).powi(2) <= 1.0 + 1e-4,
                    Boundary::Rectangle { .. } => p.x.abs() <= hw + 1e-4 && p.y.abs() <= hh + 1e-4,
                };
                prop_assert!(inside, "{:?} outside {:?} ({traj}/{wave})", p, shape);
            }
        }
    }
}
