// Procedural displacement for the deformable sphere.
//
// A slow, correlated wobble: three sine terms over position and elapsed time
// collapse to a scalar that is subtracted from y and added to z in equal
// magnitude, leaving x untouched. The buffer is rewritten in place every
// frame, so the wobble accumulates rather than oscillating around a base
// mesh.

use super::constants::DISPLACEMENT_SCALE;
use glam::Vec3;

/// Displace a single vertex position at the given elapsed time (seconds).
#[inline]
pub fn displace(p: Vec3, elapsed: f32) -> Vec3 {
    let noise = (p.x * 0.3 + elapsed * 0.02).sin()
        + (p.y * 0.5 + elapsed * 0.03).sin()
        + (p.z * 0.7 + elapsed * 0.05).sin() * 0.01;
    let d = noise * DISPLACEMENT_SCALE;
    Vec3::new(p.x, p.y - d, p.z + d)
}

/// Displace every vertex of a position buffer in place. Empty buffers are a
/// no-op.
pub fn displace_in_place(positions: &mut [Vec3], elapsed: f32) {
    for p in positions.iter_mut() {
        *p = displace(*p, elapsed);
    }
}
