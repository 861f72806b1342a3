use guillochage_core::{keys, Layer, LayerStack, LineStatus, MirrorAxis, ParameterSet};

#[test]
fn test_override_invariant_survives_editing_session() {
    let mut stack = LayerStack::with_default_layer();
    let layer = stack.get_mut(0).unwrap();

    layer
        .update_params(&ParameterSet::new().with(keys::AMPLITUDE, 4.0), Some(3))
        .unwrap();
    layer
        .update_params(&ParameterSet::new().with(keys::PHASE, 0.25), Some(3))
        .unwrap();
    layer
        .update_params(&ParameterSet::new().with(keys::AMPLITUDE, 4.0), None)
        .unwrap();

    for line in &layer.lines {
        for (key, value) in line.overrides.iter() {
            assert_ne!(layer.global.get(key), Some(value), "key {key} should be pruned");
        }
    }
    assert_eq!(layer.lines[3].overrides.len(), 1);
    assert_eq!(layer.line_params(3).unwrap().number(keys::AMPLITUDE, 0.0), 4.0);
}

#[test]
fn test_soft_deleted_line_keeps_its_slot() {
    let mut layer = Layer::new("Calque 1", "#000000");
    layer.toggle_line_deleted(4).unwrap();
    assert_eq!(layer.line_count(), 12);
    assert_eq!(
        layer.lines[4].status,
        LineStatus::Deleted { was_active: true }
    );

    layer.reset_line(4).unwrap();
    assert_eq!(layer.lines[4].status, LineStatus::Active);
}

#[test]
fn test_copy_paste_lines_between_layers() {
    let mut source = Layer::new("Source", "#000000");
    source
        .update_params(&ParameterSet::new().with(keys::ROTATION, 30.0), Some(0))
        .unwrap();
    let copied = vec![source.lines[0].clone(), source.lines[1].clone()];

    let mut target = Layer::with_params(
        "Target",
        "#ff0000",
        ParameterSet::layer_defaults()
            .with(keys::NB_LINES, 2)
            .with(keys::ROTATION, 30.0),
    );
    target.insert_lines_after(Some(1), &copied).unwrap();

    assert_eq!(target.line_count(), 4);
    assert_eq!(target.nb_lines(), 4);
    // rotation 30 is the target's global value, so the copied override disappears
    assert!(!target.lines[2].has_overrides());
    let ids: Vec<usize> = target.lines.iter().map(|l| l.id).collect();
    assert_eq!(ids, vec![1, 2, 3, 4]);
}

#[test]
fn test_layer_stack_serializes_as_list() {
    let mut stack = LayerStack::with_default_layer();
    stack.mirror_copy(0, MirrorAxis::Vertical).unwrap();
    let json = serde_json::to_value(&stack).unwrap();
    assert!(json.is_array());
    assert_eq!(json.as_array().unwrap().len(), 2);
    assert_eq!(json[1]["data"]["global"]["mirror_v"], true);

    let back: LayerStack = serde_json::from_value(json).unwrap();
    assert_eq!(back.layers(), stack.layers());
}
