// Render-side tuning constants. Simulation constants live in core/constants.rs
// so the host-side tests can reach them without web APIs.

pub const CAMERA_Z: f32 = 6.0;
pub const CAMERA_FOVY_DEG: f32 = 35.0;
pub const CAMERA_ZNEAR: f32 = 0.1;
pub const CAMERA_ZFAR: f32 = 100.0;

// Backing-store pixel ratio cap (matches the usual devicePixelRatio clamp)
pub const MAX_DPR: f64 = 2.0;

// Shared material tint (#ffeded) for meshes and particles
pub const MATERIAL_COLOR: [f32; 4] = [1.0, 0.929, 0.929, 1.0];

// Page background
pub const CLEAR_COLOR: [f64; 4] = [0.11, 0.10, 0.125, 1.0];

// Particle field seed (layout is cosmetic but reproducible)
pub const PARTICLE_SEED: u64 = 7;
