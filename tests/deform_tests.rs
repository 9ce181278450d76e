// Host-side tests for the procedural displacement.
// The main crate is wasm-only, so we include the pure-Rust modules directly.

#![allow(dead_code)]
mod scene_core {
    pub mod constants {
        include!("../src/core/constants.rs");
    }
    pub mod deform {
        include!("../src/core/deform.rs");
    }
}

use glam::Vec3;
use scene_core::deform::{displace, displace_in_place};

#[test]
fn x_channel_never_changes() {
    let samples = [
        Vec3::new(0.0, 0.0, 0.0),
        Vec3::new(1.0, 2.0, 3.0),
        Vec3::new(-4.2, 0.5, 9.9),
        Vec3::new(100.0, -100.0, 0.001),
    ];
    for t in [0.0_f32, 0.5, 10.0, 1234.5] {
        for v in samples {
            assert_eq!(displace(v, t).x, v.x, "x changed at v={v:?} t={t}");
        }
    }
}

#[test]
fn y_and_z_displace_symmetrically() {
    for t in [0.0_f32, 1.0, 7.25, 300.0] {
        for v in [
            Vec3::new(1.0, 2.0, 3.0),
            Vec3::new(-0.3, 0.7, -1.1),
            Vec3::new(5.0, -5.0, 5.0),
        ] {
            let out = displace(v, t);
            let dy = out.y - v.y;
            let dz = out.z - v.z;
            assert!(
                (dy + dz).abs() < 1e-6,
                "y/z displacement asymmetric: dy={dy} dz={dz}"
            );
        }
    }
}

#[test]
fn reference_scenario_at_t_zero() {
    // noise = sin(0.3) + sin(1.0) + sin(2.1)*0.01 ~= 1.1456
    let out = displace(Vec3::new(1.0, 2.0, 3.0), 0.0);
    assert_eq!(out.x, 1.0);
    assert!((out.y - 1.999427).abs() < 1e-4, "y = {}", out.y);
    assert!((out.z - 3.000573).abs() < 1e-4, "z = {}", out.z);
}

#[test]
fn empty_buffer_is_a_noop() {
    let mut empty: Vec<Vec3> = Vec::new();
    displace_in_place(&mut empty, 42.0);
    assert!(empty.is_empty());
}

#[test]
fn in_place_matches_pure_function() {
    let original = vec![Vec3::new(1.0, 2.0, 3.0), Vec3::new(-1.0, 0.0, 0.5)];
    let mut buffer = original.clone();
    displace_in_place(&mut buffer, 2.5);
    for (before, after) in original.iter().zip(buffer.iter()) {
        assert_eq!(*after, displace(*before, 2.5));
    }
}

#[test]
fn displacement_accumulates_across_frames() {
    let mut buffer = vec![Vec3::new(1.0, 2.0, 3.0)];
    displace_in_place(&mut buffer, 1.0);
    let after_one = buffer[0];
    displace_in_place(&mut buffer, 2.0);
    // The second pass starts from the first pass's output, not the base mesh.
    assert_ne!(buffer[0], after_one);
    assert_eq!(buffer[0], displace(after_one, 2.0));
}
