use glam::Vec3;

// Simulation tuning constants shared by the frame loop and the host-side tests.

// Scene layout
pub const SECTION_COUNT: usize = 3;
pub const OBJECT_SPACING: f32 = 4.0; // vertical distance between sections (world units)
pub const SECTION_X_OFFSETS: [f32; 3] = [2.0, -2.0, 2.0]; // alternating left/right placement

// Particle field
pub const PARTICLE_COUNT: usize = 200;
pub const PARTICLE_SPREAD: f32 = 10.0; // x/z extent of the field
pub const PARTICLE_SPIN_RATE: f32 = 0.00001; // applied against absolute elapsed time, see sim.rs

// Section transition
pub const TRANSITION_DURATION_SEC: f32 = 1.5;
pub const TRANSITION_DELTA: [f32; 3] = [6.0, 3.0, 1.5]; // radians added to x/y/z rotation

// Continuous rotation drift (rad/s)
pub const DRIFT_RATE_X: f32 = 0.1;
pub const DRIFT_RATE_Y: f32 = 0.12;

// Camera rig
pub const PARALLAX_SMOOTHING: f32 = 3.0; // first-order lag rate (1/s)

// Sphere deformation
pub const DISPLACEMENT_SCALE: f32 = 0.0005;

#[inline]
pub fn transition_delta_vec3() -> Vec3 {
    Vec3::new(
        TRANSITION_DELTA[0],
        TRANSITION_DELTA[1],
        TRANSITION_DELTA[2],
    )
}
