// Camera rig: scroll-driven camera height plus pointer parallax.
//
// The camera itself only moves along y, mapped directly from the scroll
// offset. Its parent group is smoothed toward a pointer-derived target with
// a first-order lag filter (no overshoot, frame-rate independent to first
// order).

use super::constants::{OBJECT_SPACING, PARALLAX_SMOOTHING};
use super::input::InputState;
use glam::{Vec2, Vec3};

#[derive(Clone, Copy, Debug, Default)]
pub struct CameraRig {
    /// Smoothed parallax offset of the camera group.
    pub group_pos: Vec2,
    /// Camera's local y, driven directly by scroll.
    pub camera_y: f32,
}

impl CameraRig {
    /// Per-frame update. `dt <= 0` (first frame, clock anomaly) leaves the
    /// smoothed group untouched; the scroll mapping is recomputed regardless
    /// since it is stateless.
    pub fn update(&mut self, input: &InputState, dt: f32) {
        self.camera_y = (-input.scroll_y / input.viewport_h) * OBJECT_SPACING;

        if dt <= 0.0 {
            return;
        }
        let target = Vec2::new(input.pointer.x, -input.pointer.y);
        // Clamp the blend so a pathological dt (stalled tab) cannot overshoot.
        let alpha = (PARALLAX_SMOOTHING * dt).min(1.0);
        self.group_pos += (target - self.group_pos) * alpha;
    }

    /// World-space camera eye at the given camera distance.
    #[inline]
    pub fn eye(&self, camera_z: f32) -> Vec3 {
        Vec3::new(
            self.group_pos.x,
            self.group_pos.y + self.camera_y,
            camera_z,
        )
    }
}
