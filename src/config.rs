// config.rs - Tunable effect parameters
//
// Defaults are the hand-tuned values the effect was designed around.
// Radius is compared against a squared distance, so it is not a length.

use tracing::warn;

pub const DEFAULT_GAP: u32 = 2;
pub const DEFAULT_RADIUS: f32 = 5000.0;
pub const DEFAULT_EASE: f32 = 0.8;
pub const DEFAULT_SCATTER_EASE: f32 = 0.1;
pub const DEFAULT_FRICTION: f32 = 0.95;

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct EffectConfig {
    /// Grid spacing for sampling, also the side length of each particle.
    pub gap: u32,
    /// Repulsion reach and strength (squared-distance units).
    pub repulsion_radius: f32,
    /// Spring-back strength for freshly sampled particles.
    pub ease: f32,
    /// Spring-back strength after a scatter.
    pub scatter_ease: f32,
    /// Per-tick velocity multiplier, strictly inside (0, 1).
    pub friction: f32,
}

impl Default for EffectConfig {
    fn default() -> Self {
        Self {
            gap: DEFAULT_GAP,
            repulsion_radius: DEFAULT_RADIUS,
            ease: DEFAULT_EASE,
            scatter_ease: DEFAULT_SCATTER_EASE,
            friction: DEFAULT_FRICTION,
        }
    }
}

impl EffectConfig {
    pub fn with_gap(mut self, gap: u32) -> Self {
        self.gap = gap;
        self
    }

    pub fn with_radius(mut self, radius: f32) -> Self {
        self.repulsion_radius = radius;
        self
    }

    /// Pull every field back into its usable domain.
    ///
    /// Never fails: a bad value is replaced with the nearest legal one
    /// (or the default when it is not a number) and a warning is logged.
    pub fn validated(mut self) -> Self {
        if self.gap == 0 {
            warn!("gap must be at least 1, using 1");
            self.gap = 1;
        }
        if !self.repulsion_radius.is_finite() || self.repulsion_radius < 0.0 {
            warn!(radius = self.repulsion_radius, "invalid repulsion radius, using default");
            self.repulsion_radius = DEFAULT_RADIUS;
        }
        self.ease = clamp_unit("ease", self.ease, DEFAULT_EASE, f32::EPSILON, 1.0);
        self.scatter_ease =
            clamp_unit("scatter_ease", self.scatter_ease, DEFAULT_SCATTER_EASE, f32::EPSILON, 1.0);
        self.friction =
            clamp_unit("friction", self.friction, DEFAULT_FRICTION, f32::EPSILON, 1.0 - f32::EPSILON);
        self
    }
}

fn clamp_unit(name: &str, v: f32, fallback: f32, lo: f32, hi: f32) -> f32 {
    if !v.is_finite() {
        warn!(field = name, "not a finite number, using default");
        return fallback;
    }
    let c = v.clamp(lo, hi);
    if c != v {
        warn!(field = name, value = v, clamped = c, "out of range, clamped");
    }
    c
}
