use guillochage_core::{Point, ShapeDescriptor};
use guillochage_engine::{Boundary, Clipper};
use proptest::prelude::*;

const EPS: f64 = 1e-4;

fn inside_with_tolerance(shape: &ShapeDescriptor, p: Point) -> bool {
    let hw = shape.width / 2.0;
    let hh = shape.height / 2.0;
    match Boundary::from_shape(shape) {
        Boundary::Ellipse { rx, ry } => (p.x / rx).powi(2) + (p.y / ry).powi(2) <= 1.0 + EPS,
        Boundary::Rectangle { radius, .. } => {
            if p.x.abs() > hw + EPS || p.y.abs() > hh + EPS {
                return false;
            }
            let (cx, cy) = (hw - radius, hh - radius);
            let (ax, ay) = (p.x.abs(), p.y.abs());
            if radius > 0.0 && ax > cx && ay > cy {
                (ax - cx).hypot(ay - cy) <= radius + EPS
            } else {
                true
            }
        }
    }
}

fn shapes() -> impl Strategy<Value = ShapeDescriptor> {
    prop_oneof![
        (10.0f64..120.0, 10.0f64..120.0).prop_map(|(w, h)| ShapeDescriptor::ellipse(w, h)),
        (10.0f64..120.0, 10.0f64..120.0).prop_map(|(w, h)| ShapeDescriptor::rectangle(w, h)),
        (10.0f64..120.0, 10.0f64..120.0, 0.0f64..60.0)
            .prop_map(|(w, h, r)| ShapeDescriptor::rounded_rectangle(w, h, r)),
    ]
}

fn polylines() -> impl Strategy<Value = Vec<Point>> {
    prop::collection::vec((-100.0f64..100.0, -100.0f64..100.0), 0..60)
        .prop_map(|pts| pts.into_iter().map(Point::from).collect())
}

proptest! {
    #[test]
    fn prop_every_clipped_point_is_inside(shape in shapes(), pts in polylines()) {
        let clipper = Clipper::for_shape(&shape);
        for segment in clipper.clip(&pts) {
            for p in segment {
                prop_assert!(inside_with_tolerance(&shape, p), "{:?} outside {:?}", p, shape);
            }
        }
    }

    #[test]
    fn prop_clipping_keeps_every_inside_vertex(shape in shapes(), pts in polylines()) {
        let boundary = Boundary::from_shape(&shape);
        let clipper = Clipper::new(boundary);
        let kept: usize = clipper
            .clip(&pts)
            .iter()
            .map(|segment| segment.iter().filter(|p| pts.contains(p)).count())
            .sum();
        let inside = pts.iter().filter(|p| boundary.contains(**p)).count();
        prop_assert!(kept >= inside);
    }
}

#[test]
fn test_entirely_inside_polyline_is_one_identical_segment() {
    let clipper = Clipper::for_shape(&ShapeDescriptor::rounded_rectangle(100.0, 60.0, 10.0));
    let pts = vec![
        Point::new(-30.0, -10.0),
        Point::new(-10.0, 10.0),
        Point::new(10.0, -10.0),
        Point::new(30.0, 10.0),
    ];
    let segments = clipper.clip(&pts);
    assert_eq!(segments.len(), 1);
    assert_eq!(segments[0], pts);
}

#[test]
fn test_entirely_outside_polyline_is_dropped() {
    let clipper = Clipper::for_shape(&ShapeDescriptor::circle(20.0));
    let pts = vec![Point::new(30.0, 30.0), Point::new(40.0, 35.0), Point::new(50.0, 30.0)];
    assert!(clipper.clip(&pts).is_empty());
}

#[test]
fn test_reference_membership_points() {
    let ellipse = Boundary::from_shape(&ShapeDescriptor::ellipse(100.0, 50.0));
    assert!(!ellipse.contains(Point::new(60.0, 0.0)));
    assert!(ellipse.contains(Point::new(40.0, 0.0)));
    assert!(ellipse.contains(Point::new(50.0, 0.0)));

    let rounded = Boundary::from_shape(&ShapeDescriptor::rounded_rectangle(100.0, 60.0, 10.0));
    assert!(rounded.contains(Point::new(45.0, 25.0)));
    assert!(!rounded.contains(Point::new(49.0, 29.0)));
}
