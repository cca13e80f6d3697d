// particle.rs - One sampled pixel of the source image
//
// Position is pulled straight toward origin each tick (no spring
// velocity), while velocity only carries pointer kicks and decays.

use super::Repulsion;
use crate::color::Rgb;
use crate::render::Surface;
use crate::sampler::Seed;

#[derive(Debug, Clone, PartialEq)]
pub struct Particle {
    // Rest position, fixed once sampled
    pub origin_x: f32,
    pub origin_y: f32,

    // Current position
    pub x: f32,
    pub y: f32,

    // Drift from pointer kicks
    pub vx: f32,
    pub vy: f32,

    pub color: Rgb,
    pub size: f32,
    pub ease: f32,
    pub friction: f32,
}

impl Particle {
    /// New particle resting at `seed`, currently placed at (x, y)
    pub fn new(seed: Seed, x: f32, y: f32, size: f32, ease: f32, friction: f32) -> Self {
        Self {
            origin_x: seed.x.floor(),
            origin_y: seed.y.floor(),
            x,
            y,
            vx: 0.0,
            vy: 0.0,
            color: seed.color,
            size,
            ease,
            friction,
        }
    }

    /// New particle already sitting on its origin
    pub fn at_rest(seed: Seed, size: f32, ease: f32, friction: f32) -> Self {
        Self::new(seed, seed.x.floor(), seed.y.floor(), size, ease, friction)
    }

    pub fn draw<S: Surface + ?Sized>(&self, surface: &mut S) {
        surface.set_fill(self.color);
        surface.fill_rect(self.x, self.y, self.size, self.size);
    }

    pub fn update(&mut self, field: &Repulsion) {
        let (ix, iy) = field.impulse(self.x, self.y);
        self.vx += ix;
        self.vy += iy;

        self.vx *= self.friction;
        self.vy *= self.friction;
        self.x += self.vx + (self.origin_x - self.x) * self.ease;
        self.y += self.vy + (self.origin_y - self.y) * self.ease;
    }

    /// Jump to (x, y) and drift home at the given ease. Origin is kept.
    pub fn warp(&mut self, x: f32, y: f32, ease: f32) {
        self.x = x;
        self.y = y;
        self.ease = ease;
    }

    pub fn distance_to_origin(&self) -> f32 {
        let dx = self.origin_x - self.x;
        let dy = self.origin_y - self.y;
        (dx * dx + dy * dy).sqrt()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn seed(x: f32, y: f32) -> Seed {
        Seed { x, y, color: Rgb::new(200, 100, 50) }
    }

    #[test]
    fn at_rest_stays_put() {
        let mut p = Particle::at_rest(seed(12.0, 34.0), 2.0, 0.8, 0.95);
        p.update(&Repulsion::new(5000.0));

        assert_eq!((p.x, p.y), (12.0, 34.0));
        assert_eq!((p.vx, p.vy), (0.0, 0.0));
    }

    #[test]
    fn origin_is_floored() {
        let p = Particle::new(seed(3.7, 8.2), 0.0, 0.0, 2.0, 0.8, 0.95);
        assert_eq!((p.origin_x, p.origin_y), (3.0, 8.0));
    }

    #[test]
    fn converges_without_pointer() {
        let mut p = Particle::new(seed(50.0, 50.0), 0.0, 0.0, 2.0, 0.8, 0.95);
        let field = Repulsion::new(5000.0);

        let mut last = p.distance_to_origin();
        for _ in 0..40 {
            p.update(&field);
            let d = p.distance_to_origin();
            assert!(d <= last);
            last = d;
        }
        assert!(last < 1e-3);
    }

    #[test]
    fn ease_step_is_proportional() {
        let mut p = Particle::new(seed(10.0, 0.0), 0.0, 0.0, 2.0, 0.8, 0.95);
        p.update(&Repulsion::new(5000.0));
        assert!((p.x - 8.0).abs() < 1e-5);
        assert_eq!(p.y, 0.0);
    }

    #[test]
    fn pointer_kicks_then_friction_decays() {
        let mut p = Particle::at_rest(seed(10.0, 10.0), 2.0, 0.8, 0.95);
        let mut field = Repulsion::new(5000.0);
        field.point = Some((15.0, 10.0));

        p.update(&field);
        // Pointer to the right: pushed left, impulse -200 decayed once
        assert!((p.vx + 200.0 * 0.95).abs() < 1e-2);
        assert!(p.x < 10.0);

        field.point = None;
        let v0 = p.vx.abs();
        p.update(&field);
        assert!((p.vx.abs() - v0 * 0.95).abs() < 1e-2);
    }

    #[test]
    fn coincident_pointer_keeps_state_finite() {
        let mut p = Particle::at_rest(seed(5.0, 5.0), 2.0, 0.8, 0.95);
        let mut field = Repulsion::new(5000.0);
        field.point = Some((5.0, 5.0));

        for _ in 0..10 {
            p.update(&field);
        }
        assert!(p.x.is_finite() && p.y.is_finite());
        assert!(p.vx.is_finite() && p.vy.is_finite());
    }

    #[test]
    fn warp_keeps_origin() {
        let mut p = Particle::at_rest(seed(4.0, 6.0), 2.0, 0.8, 0.95);
        p.warp(100.0, 200.0, 0.1);
        assert_eq!((p.origin_x, p.origin_y), (4.0, 6.0));
        assert_eq!((p.x, p.y), (100.0, 200.0));
        assert_eq!(p.ease, 0.1);
    }
}
