// A small owned timeline manager driving the one-shot section transitions.
//
// Each timeline adds a fixed rotation delta to one section object over a
// bounded duration with an eased curve. Timelines are advanced from the
// frame loop's absolute elapsed time and removed once complete.
//
// Increments are applied as eased deltas (this frame's eased progress minus
// last frame's) rather than absolute set-points, so the continuous rotation
// drift and overlapping timelines on the same object stay additive. The
// final step clamps progress to 1, which makes the total applied increment
// exactly the configured delta.

use glam::Vec3;
use smallvec::SmallVec;

/// Cubic ease-in-out over [0, 1]: slow start, fast middle, slow end.
#[inline]
pub fn ease_in_out(t: f32) -> f32 {
    let t = t.clamp(0.0, 1.0);
    if t < 0.5 {
        4.0 * t * t * t
    } else {
        let u = -2.0 * t + 2.0;
        1.0 - u * u * u / 2.0
    }
}

#[derive(Clone, Copy, Debug)]
pub struct Timeline {
    pub target: usize,
    pub delta: Vec3,
    pub start_time: f32,
    pub duration: f32,
    applied: f32, // eased progress already applied to the target
}

impl Timeline {
    pub fn new(target: usize, delta: Vec3, start_time: f32, duration: f32) -> Self {
        Self {
            target,
            delta,
            start_time,
            duration,
            applied: 0.0,
        }
    }
}

/// The set of in-flight transition timelines. Usually empty or a single
/// entry; overlaps are allowed and compose additively.
#[derive(Default, Debug)]
pub struct TimelineManager {
    active: SmallVec<[Timeline; 4]>,
}

impl TimelineManager {
    pub fn start(&mut self, target: usize, delta: Vec3, now: f32, duration: f32) {
        self.active
            .push(Timeline::new(target, delta, now, duration));
    }

    pub fn active_count(&self) -> usize {
        self.active.len()
    }

    /// Advance all timelines to the given elapsed time, adding eased rotation
    /// increments to `rotations`. Completed timelines are dropped after their
    /// final (clamped) increment. Targets past the rotation list are skipped.
    pub fn advance(&mut self, now: f32, rotations: &mut [Vec3]) {
        self.active.retain(|tl| {
            let progress = if tl.duration > 0.0 {
                ((now - tl.start_time) / tl.duration).clamp(0.0, 1.0)
            } else {
                1.0
            };
            let eased = ease_in_out(progress);
            if let Some(rot) = rotations.get_mut(tl.target) {
                *rot += tl.delta * (eased - tl.applied);
            }
            tl.applied = eased;
            progress < 1.0
        });
    }
}
