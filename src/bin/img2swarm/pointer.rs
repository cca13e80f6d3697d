// pointer.rs - Scripted pointer feed
//
// Stands in for mouse-move events: the pointer circles the surface
// center, close enough to cut through a centered image.

use std::f32::consts::TAU;

pub struct Orbit {
    cx: f32,
    cy: f32,
    r: f32,
    period: f32,
}

impl Orbit {
    pub fn new(w: u32, h: u32, period_frames: u32) -> Self {
        Self {
            cx: w as f32 * 0.5,
            cy: h as f32 * 0.5,
            r: w.min(h) as f32 * 0.25,
            period: period_frames.max(1) as f32,
        }
    }

    /// Pointer position at a given frame
    pub fn at(&self, frame: u32) -> (f32, f32) {
        let t = (frame as f32 / self.period) * TAU;
        (self.cx + self.r * t.cos(), self.cy + self.r * t.sin())
    }
}
