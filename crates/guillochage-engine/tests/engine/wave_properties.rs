use guillochage_core::ParameterSet;
use guillochage_engine::CurveRegistry;
use proptest::prelude::*;
use std::f64::consts::TAU;

proptest! {
    #[test]
    fn prop_sine_is_periodic(angle in -1000.0f64..1000.0) {
        let registry = CurveRegistry::with_builtins();
        let sine = registry.wave("sinus");
        let params = ParameterSet::new();
        let a = sine.offset(angle, &params);
        let b = sine.offset(angle + TAU, &params);
        prop_assert!((a - b).abs() < 1e-9);
    }

    #[test]
    fn prop_builtin_waves_are_bounded(angle in -1000.0f64..1000.0) {
        let registry = CurveRegistry::with_builtins();
        let params = ParameterSet::new();
        for info in registry.waves() {
            let value = registry.wave(&info.key).offset(angle, &params);
            prop_assert!((-1.0 - 1e-12..=1.0 + 1e-12).contains(&value), "{} gave {}", info.key, value);
        }
    }

    #[test]
    fn prop_triangle_is_periodic(angle in -1000.0f64..1000.0) {
        let registry = CurveRegistry::with_builtins();
        let triangle = registry.wave("triangle");
        let params = ParameterSet::new();
        let a = triangle.offset(angle, &params);
        let b = triangle.offset(angle + TAU, &params);
        prop_assert!((a - b).abs() < 1e-9);
    }
}

#[test]
fn test_unknown_wave_behaves_like_sine() {
    let registry = CurveRegistry::with_builtins();
    let params = ParameterSet::new();
    let unknown = registry.wave("wobble");
    for i in 0..10 {
        let angle = i as f64 * 0.7;
        assert_eq!(unknown.offset(angle, &params), angle.sin());
    }
}
