use guillochage_core::{keys, LineParams, ParamValue, ParameterSet, Resolution};
use proptest::prelude::*;

proptest! {
    #[test]
    fn prop_number_text_matches_parsed(value in -1.0e6f64..1.0e6) {
        let params = ParameterSet::new().with("v", value.to_string());
        prop_assert_eq!(params.number("v", f64::NAN), value);
    }

    #[test]
    fn prop_merge_with_self_is_identity(amp in -50.0f64..50.0, period in 0.0f64..100.0) {
        let set = ParameterSet::new()
            .with(keys::AMPLITUDE, amp)
            .with(keys::PERIOD, period);
        prop_assert_eq!(set.merged_with(&set), set.clone());
    }
}

#[test]
fn test_legacy_project_values() {
    let global: ParameterSet = serde_json::from_str(
        r#"{
            "traj_type": "Ligne Droite",
            "wave_type": "Sinus",
            "nb_lines": 12.0,
            "amplitude": "2,5",
            "resolution": "Haute",
            "flambage": false
        }"#,
    )
    .unwrap();

    let params = LineParams::resolve(&global, &ParameterSet::new(), Resolution::Medium);
    assert_eq!(params.traj_type, "Ligne Droite");
    assert_eq!(params.amplitude, 2.5);
    assert_eq!(params.resolution, Resolution::High);
    assert_eq!(global.count(keys::NB_LINES, 0), 12);
}

#[test]
fn test_param_value_json_roundtrip_keeps_variant() {
    let set = ParameterSet::new()
        .with("b", true)
        .with("n", 3.5)
        .with("t", "rosace");
    let json = serde_json::to_string(&set).unwrap();
    let back: ParameterSet = serde_json::from_str(&json).unwrap();
    assert_eq!(back.get("b"), Some(&ParamValue::Bool(true)));
    assert_eq!(back.get("n"), Some(&ParamValue::Number(3.5)));
    assert_eq!(back.get("t"), Some(&ParamValue::Text("rosace".to_string())));
}
