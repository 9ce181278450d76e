// Input events and the per-frame input state.
//
// DOM listeners only push small events into a shared queue; the frame loop
// drains the queue once per frame before its own update logic runs, so
// ordering is deterministic and the simulation can be driven verbatim from
// tests.

use glam::Vec2;

/// One input occurrence, in the order it arrived.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum InputEvent {
    /// Vertical scroll offset in CSS pixels.
    Scroll { offset_y: f32 },
    /// Raw pointer position in CSS pixels (client coordinates).
    PointerMove { x: f32, y: f32 },
    /// New viewport size in CSS pixels.
    Resize { width: f32, height: f32 },
}

/// Coalesced input state as of the last drained event.
#[derive(Clone, Copy, Debug)]
pub struct InputState {
    pub viewport_w: f32,
    pub viewport_h: f32,
    pub scroll_y: f32,
    /// Pointer normalized to roughly [-0.5, 0.5] on each axis.
    pub pointer: Vec2,
}

impl InputState {
    pub fn new(viewport_w: f32, viewport_h: f32) -> Self {
        Self {
            viewport_w: viewport_w.max(1.0),
            viewport_h: viewport_h.max(1.0),
            scroll_y: 0.0,
            pointer: Vec2::ZERO,
        }
    }

    /// Fold one event into the state. Section detection is handled by the
    /// caller (it needs the tracker), so this only updates the scalar cells.
    pub fn apply(&mut self, ev: InputEvent) {
        match ev {
            InputEvent::Scroll { offset_y } => {
                self.scroll_y = offset_y;
            }
            InputEvent::PointerMove { x, y } => {
                self.pointer = Vec2::new(
                    x / self.viewport_w - 0.5,
                    y / self.viewport_h - 0.5,
                );
            }
            InputEvent::Resize { width, height } => {
                self.viewport_w = width.max(1.0);
                self.viewport_h = height.max(1.0);
            }
        }
    }
}
