//! Integration tests for EditorHarness.
//!
//! Drives the editor headlessly through the same paths the UI uses.

use cubes_editor_lib::fixtures;
use cubes_editor_lib::harness::EditorHarness;
use cubes_editor_lib::state::Dimension;
use cubes_editor_lib::viewport::gizmo::GizmoAxis;
use shared::{Cube, PALETTE};

fn debug_harness() -> EditorHarness {
    let mut h = EditorHarness::new();
    h.set_debug_mode(true);
    h
}

#[test]
fn test_starts_with_six_default_cubes() {
    let h = EditorHarness::new();
    assert_eq!(h.cube_count(), 6);
    assert_eq!(h.cubes()[0].position, [-2.0, 0.5, -1.0]);
    assert!(h.selected().is_none());
    assert!(!h.state().debug_mode());
    assert!(!h.rotation_locked());
    assert_eq!(h.composer().controllers().len(), 6);
}

#[test]
fn test_click_outside_debug_only_recolours() {
    let mut h = EditorHarness::new();
    for index in 0..h.cube_count() {
        let before = h.cubes()[index].clone();
        let others: Vec<Cube> = h
            .cubes()
            .iter()
            .enumerate()
            .filter(|(i, _)| *i != index)
            .map(|(_, c)| c.clone())
            .collect();

        assert!(h.click_cube(index));

        let after = &h.cubes()[index];
        assert!(PALETTE.contains(&after.color.as_str()));
        assert_eq!(after.position, before.position);
        assert_eq!(after.dimensions(), before.dimensions());
        assert!(h.selected().is_none());

        let others_after: Vec<Cube> = h
            .cubes()
            .iter()
            .enumerate()
            .filter(|(i, _)| *i != index)
            .map(|(_, c)| c.clone())
            .collect();
        assert_eq!(others, others_after);
    }
}

#[test]
fn test_click_in_debug_selects() {
    let mut h = debug_harness();
    let colors: Vec<String> = h.cubes().iter().map(|c| c.color.clone()).collect();
    assert!(h.click_cube(2));
    assert_eq!(h.selected(), Some(2));
    assert_eq!(h.draft().cube(), &h.cubes()[2]);
    // Selecting never recolours
    let after: Vec<String> = h.cubes().iter().map(|c| c.color.clone()).collect();
    assert_eq!(colors, after);
    assert_eq!(h.composer().handle_owner(), Some(2));
}

#[test]
fn test_click_missing_cube() {
    let mut h = debug_harness();
    assert!(!h.click_cube(42));
    assert!(h.selected().is_none());
}

#[test]
fn test_background_click_keeps_selection() {
    let mut h = debug_harness();
    h.click_cube(1);
    h.click_background();
    assert_eq!(h.selected(), Some(1));
}

#[test]
fn test_malformed_width_falls_back_to_one() {
    let mut h = debug_harness();
    h.click_cube(2);
    h.set_dimension_text(Dimension::Width, "3");
    assert_eq!(h.draft().cube().width, 3.0);
    h.set_dimension_text(Dimension::Width, "abc");
    assert_eq!(h.draft().cube().width, 1.0);
    assert_eq!(h.draft().dimension_text(Dimension::Width), "abc");
}

#[test]
fn test_apply_reloads_fields_from_stored_cube() {
    let mut h = debug_harness();
    h.click_cube(2);
    h.set_dimension_text(Dimension::Width, "abc");
    h.set_dimension_text(Dimension::Depth, "2.5cm");
    h.set_position_text(0, "x");
    assert!(h.apply());

    assert_eq!(h.cubes()[2].width, 1.0);
    assert_eq!(h.cubes()[2].depth, 2.5);
    assert_eq!(h.draft().dimension_text(Dimension::Width), "1");
    assert_eq!(h.draft().dimension_text(Dimension::Depth), "2.5");
    assert_eq!(h.draft().position_text(0), "2");
    assert_eq!(h.draft().cube(), &h.cubes()[2]);
}

#[test]
fn test_apply_writes_draft() {
    let mut h = debug_harness();
    h.click_cube(1);
    h.set_dimension_text(Dimension::Height, "2.5");
    h.set_color_rgb([0x12, 0x34, 0x56]);
    assert_eq!(h.cubes()[1].height, 1.0, "draft must not leak before apply");

    assert!(h.apply());
    assert_eq!(h.cubes()[1].height, 2.5);
    assert_eq!(h.cubes()[1].color, "#123456");
    // Scale follows the model
    assert_eq!(h.composer().controller(1).unwrap().node().scale.y, 2.5);
}

#[test]
fn test_apply_keeps_typed_position_unclamped() {
    let mut h = debug_harness();
    h.click_cube(0);
    h.set_position_text(0, "12");
    h.set_position_text(1, "-3");
    assert!(h.apply());
    assert_eq!(h.cubes()[0].position, [12.0, -3.0, -1.0]);
}

#[test]
fn test_apply_without_selection() {
    let mut h = debug_harness();
    assert!(!h.apply());
    assert_eq!(h.cubes(), shared::default_cubes().as_slice());
}

#[test]
fn test_reselect_reinitialises_draft() {
    let mut h = debug_harness();
    h.click_cube(0);
    h.set_dimension_text(Dimension::Depth, "4");
    h.set_position_text(2, "3");
    h.click_cube(3);
    assert_eq!(h.draft().cube(), &h.cubes()[3]);
    assert_eq!(h.draft().dimension_text(Dimension::Depth), "1");
}

#[test]
fn test_drag_out_of_bounds_commits_clamped() {
    let mut h = debug_harness();
    h.click_cube(0);
    assert!(h.drag_cube_to(0, [8.0, 0.5, -1.0]));

    let cube = &h.cubes()[0];
    assert_eq!(cube.position, [5.0, 0.5, -1.0]);
    assert_eq!(cube.color, PALETTE[0]);
    assert_eq!(cube.dimensions(), [1.0, 1.0, 1.0]);

    // The mesh snapped back to the boundary and the draft follows the commit
    let live = h.composer().controller(0).unwrap().live_position();
    assert_eq!(live.to_array(), [5.0, 0.5, -1.0]);
    assert_eq!(h.draft().cube().position, [5.0, 0.5, -1.0]);
}

#[test]
fn test_drag_along_axis_snaps() {
    let mut h = debug_harness();
    h.click_cube(4);
    assert!(h.drag_cube_along(4, GizmoAxis::Y, 1.234));
    assert_eq!(h.cubes()[4].position, [0.0, 1.7, 1.0]);
}

#[test]
fn test_drag_requires_selected_debug_cube() {
    let mut h = EditorHarness::new();
    assert!(!h.drag_cube_to(0, [1.0, 1.0, 1.0]));

    h.set_debug_mode(true);
    h.click_cube(1);
    assert!(!h.drag_cube_to(0, [1.0, 1.0, 1.0]));
    assert_eq!(h.cubes()[0].position, [-2.0, 0.5, -1.0]);
}

#[test]
fn test_add_cube() {
    let mut h = EditorHarness::with_seed(11);
    let before = h.cube_count();
    let index = h.add_cube();
    assert_eq!(index, before);
    assert_eq!(h.cube_count(), before + 1);

    let cube = &h.cubes()[index];
    assert_eq!(cube.position[1], 0.5);
    assert!((-5.0..=5.0).contains(&cube.position[0]));
    assert!((-5.0..=5.0).contains(&cube.position[2]));
    assert_eq!(cube.dimensions(), [1.0, 1.0, 1.0]);
    assert!(PALETTE.contains(&cube.color.as_str()));
    assert_eq!(h.composer().controllers().len(), before + 1);
}

#[test]
fn test_delete_selected_clears_selection() {
    let mut h = debug_harness();
    h.click_cube(2);
    let removed = h.delete_selected().unwrap();
    assert_eq!(removed.color, PALETTE[2]);
    assert!(h.selected().is_none());
    assert_eq!(h.cube_count(), 5);
    // Later cubes shift down
    assert_eq!(h.cubes()[2].color, PALETTE[3]);
    assert_eq!(h.composer().handle_owner(), None);
}

#[test]
fn test_delete_hidden_without_selection() {
    let mut h = debug_harness();
    assert!(!h.state().can_edit_selection());
    assert!(h.delete_selected().is_none());
    assert_eq!(h.cube_count(), 6);
}

#[test]
fn test_debug_off_clears_selection() {
    let mut h = debug_harness();
    h.click_cube(5);
    h.set_debug_mode(false);
    assert!(h.selected().is_none());
    assert_eq!(h.composer().handle_owner(), None);
}

#[test]
fn test_debug_axes_helper_added_and_removed() {
    let mut h = EditorHarness::new();
    assert_eq!(h.composer().graph().helper_count(), 0);
    for _ in 0..4 {
        h.set_debug_mode(true);
        assert_eq!(h.composer().graph().helper_count(), 1);
        h.set_debug_mode(false);
        assert_eq!(h.composer().graph().helper_count(), 0);
    }
}

#[test]
fn test_rotation_key_toggles_and_is_consumed() {
    let mut h = EditorHarness::new();
    let leftover = h.press_rotation_key();
    assert!(leftover.is_empty());
    assert!(h.rotation_locked());
    assert!(!h.composer().camera().controls.enable_rotate);
    assert!(h.composer().camera().controls.enable_pan);
    assert!(h.composer().camera().controls.enable_zoom);

    h.press_rotation_key();
    assert!(!h.rotation_locked());
    assert!(h.composer().camera().controls.enable_rotate);
}

#[test]
fn test_save_three_cubes() {
    let cubes = fixtures::cube_row(3);
    let h = EditorHarness::with_cubes(cubes.clone());
    let json = h.save_json().unwrap();

    let value: serde_json::Value = serde_json::from_str(&json).unwrap();
    let items = value.as_array().unwrap();
    assert_eq!(items.len(), 3);
    for item in items {
        let obj = item.as_object().unwrap();
        assert_eq!(obj.len(), 5);
        assert!(obj["width"].is_number());
        assert!(obj["height"].is_number());
        assert!(obj["depth"].is_number());
        assert!(obj["color"].is_string());
        assert_eq!(obj["position"].as_array().unwrap().len(), 3);
    }

    assert_eq!(shared::parse_project_json(&json).unwrap(), cubes);
}

#[test]
fn test_save_project_to_file() {
    let h = EditorHarness::new();
    let path = std::env::temp_dir().join(format!(
        "cubes_editor_harness_{}_{}",
        std::process::id(),
        shared::PROJECT_FILE_NAME
    ));
    h.state().save_project(&path).unwrap();
    let json = std::fs::read_to_string(&path).unwrap();
    let _ = std::fs::remove_file(&path);
    assert_eq!(shared::parse_project_json(&json).unwrap(), h.cubes());
}

#[test]
fn test_sized_cube_drives_mesh_scale_and_survives_drag() {
    let cube = fixtures::sized_cube(2.0, 0.5, 3.0, [0.0, 0.25, 0.0]);
    let mut h = EditorHarness::with_cubes(vec![cube]);
    h.set_debug_mode(true);
    assert!(h.click_cube(0));

    let node = h.composer().controller(0).unwrap().node();
    assert_eq!(node.scale.to_array(), [2.0, 0.5, 3.0]);

    assert!(h.drag_cube_to(0, [1.04, 0.42, -0.96]));
    let moved = &h.cubes()[0];
    assert_eq!(moved.position, [1.0, 0.4, -1.0]);
    assert_eq!(moved.dimensions(), [2.0, 0.5, 3.0]);
    assert_eq!(moved.color, "#ffffff");
}
