// sim/ - Image particle effect
//
// One flat Vec of particles, filled once from the sampler and only
// mutated in place afterwards. Every frame draws all of them, then
// advances all of them against the current pointer.

mod field;
mod particle;

pub use field::{MIN_DISTANCE_SQ, Repulsion};
pub use particle::Particle;

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use tracing::debug;

use crate::config::EffectConfig;
use crate::render::Surface;
use crate::sampler::{self, Seed};

/// Particle effect over a fixed-size surface
pub struct Effect {
    // Surface dimensions
    w: u32,
    h: u32,

    config: EffectConfig,
    particles: Vec<Particle>,
    field: Repulsion,
    rng: StdRng,
}

impl Effect {
    pub fn new(w: u32, h: u32, config: EffectConfig, seed: u64) -> Self {
        let config = config.validated();
        Self {
            w,
            h,
            field: Repulsion::new(config.repulsion_radius),
            config,
            particles: Vec::new(),
            rng: StdRng::seed_from_u64(seed),
        }
    }

    /// Sample a surface-sized RGBA snapshot and build particles from it.
    /// Returns the particle count.
    pub fn init(&mut self, pixels: &[u8]) -> usize {
        let seeds = sampler::sample(pixels, self.w, self.h, self.config.gap);
        self.populate(&seeds);
        self.particles.len()
    }

    /// Replace the particle set. Each particle starts on the top edge at a
    /// random column and assembles toward its origin.
    pub fn populate(&mut self, seeds: &[Seed]) {
        let size = self.config.gap as f32;
        let mut particles = Vec::with_capacity(seeds.len());
        for &seed in seeds {
            let x = self.rand() * self.w as f32;
            particles.push(Particle::new(seed, x, 0.0, size, self.config.ease, self.config.friction));
        }
        self.particles = particles;
    }

    /// Draw every particle at its current position, in scan order
    pub fn draw<S: Surface + ?Sized>(&self, surface: &mut S) {
        for p in &self.particles {
            p.draw(surface);
        }
    }

    pub fn update(&mut self) {
        let field = self.field;
        for p in &mut self.particles {
            p.update(&field);
        }
    }

    /// One animation frame: clear, draw current state, then advance
    pub fn tick<S: Surface + ?Sized>(&mut self, surface: &mut S) {
        surface.clear();
        self.draw(surface);
        self.update();
    }

    /// Throw every particle to a random spot on the surface. They keep
    /// their origins and drift back slowly.
    pub fn scatter(&mut self) {
        let (w, h) = (self.w as f32, self.h as f32);
        let ease = self.config.scatter_ease;
        for i in 0..self.particles.len() {
            let x = self.rand() * w;
            let y = self.rand() * h;
            self.particles[i].warp(x, y, ease);
        }
        debug!(particles = self.particles.len(), ease, "scatter");
    }

    /// Latest pointer position; last write wins
    pub fn set_pointer(&mut self, x: f32, y: f32) {
        self.field.point = Some((x, y));
    }

    /// Forget the pointer, switching repulsion off
    pub fn clear_pointer(&mut self) {
        self.field.point = None;
    }

    pub fn pointer(&self) -> Option<(f32, f32)> {
        self.field.point
    }

    #[inline(always)]
    fn rand(&mut self) -> f32 {
        self.rng.r#gen::<f32>()
    }

    // Accessors
    pub fn particles(&self) -> &[Particle] { &self.particles }
    pub fn len(&self) -> usize { self.particles.len() }
    pub fn is_empty(&self) -> bool { self.particles.is_empty() }
    pub fn config(&self) -> &EffectConfig { &self.config }
    pub fn width(&self) -> u32 { self.w }
    pub fn height(&self) -> u32 { self.h }
}
