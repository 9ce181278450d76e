// The per-frame simulation state machine.
//
// `SceneSim` owns everything the frame loop mutates: the coalesced input
// state, section tracker, camera rig, transition timelines, the three
// section rotations, the deformable sphere buffer, and the particle-field
// spin. The wasm frame loop is a thin wrapper that feeds it wall-clock
// elapsed time and drained DOM events; tests drive it directly with
// synthetic ones.

use super::constants::*;
use super::deform;
use super::input::{InputEvent, InputState};
use super::mesh;
use super::rig::CameraRig;
use super::sections::SectionTracker;
use super::timeline::TimelineManager;
use glam::Vec3;

/// Fixed world position of a section object: alternating x offsets, one
/// section spacing further down per index.
#[inline]
pub fn section_position(index: usize) -> Vec3 {
    Vec3::new(
        SECTION_X_OFFSETS[index % SECTION_X_OFFSETS.len()],
        -OBJECT_SPACING * index as f32,
        0.0,
    )
}

pub struct SceneSim {
    pub input: InputState,
    tracker: SectionTracker,
    pub rig: CameraRig,
    timelines: TimelineManager,
    /// Per-section rotations (euler xyz, radians). Mutated every frame by the
    /// drift and occasionally by transition timelines; both are additive.
    pub rotations: [Vec3; SECTION_COUNT],
    /// The deformable sphere's vertex positions, rewritten in place each
    /// frame. Normals and indices are static and live with the renderer.
    pub sphere_positions: Vec<Vec3>,
    pub particle_rotation_y: f32,
    elapsed: f32,
}

impl SceneSim {
    pub fn new(viewport_w: f32, viewport_h: f32) -> Self {
        Self {
            input: InputState::new(viewport_w, viewport_h),
            tracker: SectionTracker::new(SECTION_COUNT),
            rig: CameraRig::default(),
            timelines: TimelineManager::default(),
            rotations: [Vec3::ZERO; SECTION_COUNT],
            sphere_positions: mesh::uv_sphere(1.0, 64, 64).positions,
            particle_rotation_y: 0.0,
            elapsed: 0.0,
        }
    }

    pub fn current_section(&self) -> usize {
        self.tracker.current()
    }

    pub fn active_transitions(&self) -> usize {
        self.timelines.active_count()
    }

    /// Fold one input event into the state. A scroll event that crosses a
    /// section boundary starts the one-shot transition timeline for the new
    /// section; everything else only updates scalar cells.
    pub fn handle_event(&mut self, ev: InputEvent) {
        self.input.apply(ev);
        if let InputEvent::Scroll { .. } = ev {
            if let Some(section) = self
                .tracker
                .observe(self.input.scroll_y, self.input.viewport_h)
            {
                log::info!("[scroll] section -> {}", section);
                self.timelines.start(
                    section,
                    transition_delta_vec3(),
                    self.elapsed,
                    TRANSITION_DURATION_SEC,
                );
            }
        }
    }

    /// Drain a queue of events in arrival order. Called once per frame,
    /// before `advance`.
    pub fn drain_events(&mut self, events: &mut Vec<InputEvent>) {
        for ev in events.drain(..) {
            self.handle_event(ev);
        }
    }

    /// One frame step at the given elapsed time (monotonic seconds since
    /// loop start). The first frame, or a clock anomaly, yields `dt = 0`:
    /// no drift, no smoothing, never a negative increment.
    pub fn advance(&mut self, elapsed: f32) {
        let dt = (elapsed - self.elapsed).max(0.0);
        self.elapsed = elapsed;

        self.rig.update(&self.input, dt);

        deform::displace_in_place(&mut self.sphere_positions, elapsed);

        for rot in self.rotations.iter_mut() {
            rot.x += dt * DRIFT_RATE_X;
            rot.y += dt * DRIFT_RATE_Y;
        }

        self.timelines.advance(elapsed, &mut self.rotations);

        // Deliberately scaled by absolute elapsed time, not dt: the source
        // behaves this way, so the spin accelerates over the session.
        self.particle_rotation_y += elapsed * PARTICLE_SPIN_RATE;
    }
}
