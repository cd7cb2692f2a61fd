//! Randomised operation sequences checked against the editor invariants.

use cubes_editor_lib::harness::EditorHarness;
use cubes_editor_lib::viewport::gizmo::GizmoAxis;
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use shared::POSITION_LIMITS;

fn assert_invariants(h: &EditorHarness, step: usize) {
    for (i, cube) in h.cubes().iter().enumerate() {
        assert!(
            POSITION_LIMITS.contains(cube.position),
            "step {step}: cube {i} out of bounds at {:?}",
            cube.position
        );
    }
    if let Some(index) = h.selected() {
        assert!(index < h.cube_count(), "step {step}: dangling selection {index}");
        assert!(h.state().debug_mode(), "step {step}: selection outside debug mode");
    }
    assert_eq!(h.composer().controllers().len(), h.cube_count());
}

#[test]
fn test_random_add_delete_drag_keeps_bounds() {
    for seed in 0..20 {
        let mut ops = StdRng::seed_from_u64(seed);
        let mut h = EditorHarness::with_seed(seed);

        for step in 0..300 {
            match ops.random_range(0..7) {
                0 => {
                    h.add_cube();
                }
                1 => {
                    let enabled = !h.state().debug_mode();
                    h.set_debug_mode(enabled);
                }
                2 | 3 if h.cube_count() > 0 => {
                    let index = ops.random_range(0..h.cube_count());
                    h.click_cube(index);
                }
                4 => {
                    h.delete_selected();
                }
                5 => {
                    if let Some(index) = h.selected() {
                        let raw = [
                            ops.random_range(-20.0..20.0),
                            ops.random_range(-20.0..20.0),
                            ops.random_range(-20.0..20.0),
                        ];
                        assert!(h.drag_cube_to(index, raw));
                    }
                }
                _ => {
                    if let Some(index) = h.selected() {
                        let axis = GizmoAxis::ALL[ops.random_range(0..3)];
                        h.drag_cube_along(index, axis, ops.random_range(-12.0..12.0));
                    }
                }
            }
            assert_invariants(&h, step);
        }
    }
}

#[test]
fn test_delete_selected_always_clears_selection() {
    let mut ops = StdRng::seed_from_u64(99);
    let mut h = EditorHarness::with_seed(99);
    h.set_debug_mode(true);
    for _ in 0..10 {
        h.add_cube();
    }
    while h.cube_count() > 0 {
        let index = ops.random_range(0..h.cube_count());
        h.click_cube(index);
        assert_eq!(h.selected(), Some(index));
        let before = h.cube_count();
        h.delete_selected();
        assert!(h.selected().is_none());
        assert_eq!(h.cube_count(), before - 1);
    }
    assert!(h.delete_selected().is_none());
}

#[test]
fn test_rotation_key_pairs_are_idempotent() {
    let mut h = EditorHarness::new();
    for presses in 1..=8 {
        h.press_rotation_key();
        assert_eq!(h.rotation_locked(), presses % 2 == 1);
    }
    assert!(!h.rotation_locked());
}
