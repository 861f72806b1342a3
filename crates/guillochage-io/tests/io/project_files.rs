use guillochage_core::{keys, LayerStack, LineStatus, MirrorAxis, ParameterSet, ShapeDescriptor};
use guillochage_io::{ProjectError, ProjectFile, ProjectHistory};
use tempfile::TempDir;

fn edited_stack() -> LayerStack {
    let mut stack = LayerStack::with_default_layer();
    let layer = stack.get_mut(0).unwrap();
    layer
        .update_params(
            &ParameterSet::new()
                .with(keys::TRAJ_TYPE, "spirale")
                .with(keys::NB_LINES, 4),
            None,
        )
        .unwrap();
    layer
        .update_params(&ParameterSet::new().with(keys::AMPLITUDE, 6.5), Some(2))
        .unwrap();
    layer.toggle_line_deleted(3).unwrap();
    layer.set_line_active(1, false).unwrap();
    stack.mirror_copy(0, MirrorAxis::Vertical).unwrap();
    stack
}

#[test]
fn test_save_and_load_is_lossless() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("motif.guillo");

    let project = ProjectFile::from_stack(
        ShapeDescriptor::rounded_rectangle(90.0, 45.0, 6.0),
        &edited_stack(),
    );
    project.save(&path).unwrap();
    let loaded = ProjectFile::load(&path).unwrap();

    assert_eq!(loaded, project);
    let layer = &loaded.calques[0];
    assert_eq!(layer.line_count(), 4);
    assert_eq!(layer.lines[1].status, LineStatus::Inactive);
    assert!(layer.lines[3].is_deleted());
    assert_eq!(layer.line_params(2).unwrap().number(keys::AMPLITUDE, 0.0), 6.5);
    assert_eq!(loaded.calques[1].name, "Calque 1 (Mir V)");
}

#[test]
fn test_load_missing_file() {
    let dir = TempDir::new().unwrap();
    let err = ProjectFile::load(dir.path().join("absent.guillo")).unwrap_err();
    assert!(matches!(err, ProjectError::Io(_)));
}

#[test]
fn test_legacy_project_loads() {
    let json = r##"{
        "version": "1.0",
        "forme": {"type_index": 1, "dim1": 80, "dim2": 40, "radius": 5},
        "calques": [{
            "name": "Fond",
            "color": "#0000ff",
            "visible": true,
            "locked": false,
            "data": {
                "global": {"traj_type": "Ligne Droite", "nb_lines": 3, "amplitude": "2,5"},
                "lines": [
                    {"id": 1, "is_active": true, "is_deleted": false, "override": {}},
                    {"id": 2, "is_active": false, "is_deleted": false, "override": {"phase": 0.5}},
                    {"id": 3, "is_active": true, "is_deleted": true, "override": {}}
                ]
            }
        }]
    }"##;
    let project = ProjectFile::from_json(json).unwrap();
    assert_eq!(project.forme, ShapeDescriptor::rounded_rectangle(80.0, 40.0, 5.0));
    let layer = &project.calques[0];
    assert_eq!(layer.lines.len(), 3);
    assert!(!layer.lines[0].is_deleted());
    assert_eq!(layer.lines[1].status, LineStatus::Inactive);
    assert!(layer.lines[2].is_deleted());
    assert_eq!(layer.line_params(1).unwrap().number(keys::PHASE, 0.0), 0.5);
    assert_eq!(layer.line_params(0).unwrap().number(keys::AMPLITUDE, 0.0), 2.5);
}

#[test]
fn test_history_tracks_edits() {
    let shape = ShapeDescriptor::circle(60.0);
    let mut stack = LayerStack::with_default_layer();
    let mut history = ProjectHistory::new(ProjectFile::from_stack(shape, &stack));

    stack.add_layer();
    assert!(history.snapshot(ProjectFile::from_stack(shape, &stack)));
    assert!(!history.snapshot(ProjectFile::from_stack(shape, &stack)));

    let restored = history.undo().unwrap().layer_stack();
    assert_eq!(restored.len(), 1);
    let redone = history.redo().unwrap().layer_stack();
    assert_eq!(redone.len(), 2);
}
