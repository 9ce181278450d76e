// Host-side tests for the frame scheduler state machine.
// The main crate is wasm-only, so we include the pure-Rust modules directly.

#![allow(dead_code)]
mod scene_core {
    pub mod constants {
        include!("../src/core/constants.rs");
    }
    pub mod deform {
        include!("../src/core/deform.rs");
    }
    pub mod input {
        include!("../src/core/input.rs");
    }
    pub mod mesh {
        include!("../src/core/mesh.rs");
    }
    pub mod rig {
        include!("../src/core/rig.rs");
    }
    pub mod sections {
        include!("../src/core/sections.rs");
    }
    pub mod timeline {
        include!("../src/core/timeline.rs");
    }
    pub mod sim {
        include!("../src/core/sim.rs");
    }
}

use glam::Vec3;
use scene_core::constants::PARTICLE_SPIN_RATE;
use scene_core::input::InputEvent;
use scene_core::sim::{section_position, SceneSim};

fn sim() -> SceneSim {
    SceneSim::new(1000.0, 800.0)
}

#[test]
fn section_positions_alternate_and_descend() {
    assert_eq!(section_position(0), Vec3::new(2.0, 0.0, 0.0));
    assert_eq!(section_position(1), Vec3::new(-2.0, -4.0, 0.0));
    assert_eq!(section_position(2), Vec3::new(2.0, -8.0, 0.0));
}

#[test]
fn scroll_across_a_boundary_starts_one_transition() {
    let mut sim = sim();
    sim.handle_event(InputEvent::Scroll { offset_y: 850.0 });
    assert_eq!(sim.current_section(), 1);
    assert_eq!(sim.active_transitions(), 1);
    // Same offset again: no duplicate transition
    sim.handle_event(InputEvent::Scroll { offset_y: 850.0 });
    assert_eq!(sim.active_transitions(), 1);
}

#[test]
fn transition_composes_with_drift() {
    let mut sim = sim();
    // Boundary crossed at elapsed 0; timeline runs 1.5 s
    sim.handle_event(InputEvent::Scroll { offset_y: 850.0 });
    sim.advance(1.0);
    sim.advance(2.0);
    assert_eq!(sim.active_transitions(), 0);
    // Object 1 carries the full transition delta plus two seconds of drift
    let rot = sim.rotations[1];
    assert!((rot.x - (6.0 + 0.2)).abs() < 1e-3, "x = {}", rot.x);
    assert!((rot.y - (3.0 + 0.24)).abs() < 1e-3, "y = {}", rot.y);
    assert!((rot.z - 1.5).abs() < 1e-3, "z = {}", rot.z);
    // Objects without a transition only drifted
    assert!((sim.rotations[0].x - 0.2).abs() < 1e-5);
    assert!((sim.rotations[2].y - 0.24).abs() < 1e-5);
}

#[test]
fn first_frame_at_time_zero_applies_no_drift() {
    let mut sim = sim();
    sim.advance(0.0);
    assert_eq!(sim.rotations[0], Vec3::ZERO);
}

#[test]
fn clock_going_backwards_is_treated_as_zero_dt() {
    let mut sim = sim();
    sim.advance(1.0);
    let before = sim.rotations[0];
    sim.advance(0.5);
    assert_eq!(sim.rotations[0], before, "negative dt applied drift");
}

#[test]
fn drift_accumulates_per_frame() {
    let mut sim = sim();
    sim.advance(0.0);
    sim.advance(1.0);
    for rot in &sim.rotations {
        assert!((rot.x - 0.1).abs() < 1e-6);
        assert!((rot.y - 0.12).abs() < 1e-6);
        assert_eq!(rot.z, 0.0);
    }
}

#[test]
fn particle_spin_uses_absolute_elapsed_time() {
    // The source scales the per-frame increment by absolute elapsed time,
    // not dt; two frames at t=1 and t=2 add (1 + 2) * rate.
    let mut sim = sim();
    sim.advance(1.0);
    sim.advance(2.0);
    let expected = 3.0 * PARTICLE_SPIN_RATE;
    assert!((sim.particle_rotation_y - expected).abs() < 1e-9);
}

#[test]
fn sphere_buffer_is_rewritten_in_place() {
    let mut sim = sim();
    let before = sim.sphere_positions.clone();
    sim.advance(1.0);
    assert_eq!(sim.sphere_positions.len(), before.len());
    assert_ne!(sim.sphere_positions, before);
    // x never changes (deformation only touches y/z)
    for (a, b) in before.iter().zip(sim.sphere_positions.iter()) {
        assert_eq!(a.x, b.x);
    }
}

#[test]
fn events_drain_in_arrival_order() {
    let mut sim = sim();
    let mut queue = vec![
        InputEvent::Resize {
            width: 800.0,
            height: 600.0,
        },
        InputEvent::PointerMove { x: 800.0, y: 300.0 },
        InputEvent::Scroll { offset_y: 850.0 },
    ];
    sim.drain_events(&mut queue);
    assert!(queue.is_empty());
    // Pointer normalized against the resized viewport
    assert!((sim.input.pointer.x - 0.5).abs() < 1e-6);
    assert!(sim.input.pointer.y.abs() < 1e-6);
    // Section computed against the resized height: round(850/600) = 1
    assert_eq!(sim.current_section(), 1);
    assert_eq!(sim.active_transitions(), 1);
}

#[test]
fn scrolling_past_the_last_section_is_safe() {
    let mut sim = sim();
    sim.handle_event(InputEvent::Scroll { offset_y: 1e7 });
    assert_eq!(sim.current_section(), 2);
    assert_eq!(sim.active_transitions(), 1);
    sim.advance(0.5);
    sim.advance(5.0);
    assert_eq!(sim.active_transitions(), 0);
}
