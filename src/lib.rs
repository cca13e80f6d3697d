use wasm_bindgen::prelude::*;

// ============================================================================
// PIXEL SWARM - Image rendered as pointer-repelled particles
// ============================================================================
//
// Host loop (JS):
//   ctx.drawImage(img, ox, oy)                  // centered, see centered_offset
//   swarm.init(ctx.getImageData(0, 0, w, h).data)
//   every frame: swarm.tick(); putImageData(output_ptr/output_len)
//   mousemove -> swarm.pointer_move(x, y); button -> swarm.scatter()

pub mod color;
pub mod config;
pub mod render;
pub mod sampler;
pub mod sim;

#[cfg(not(target_arch = "wasm32"))]
pub mod error;

use config::EffectConfig;
use render::Framebuffer;
use sim::Effect;

#[cfg(target_arch = "wasm32")]
#[wasm_bindgen(start)]
pub fn start() {
    console_error_panic_hook::set_once();
    tracing_wasm::set_as_global_default();
}

#[wasm_bindgen]
pub struct PixelSwarm {
    effect: Effect,
    frame: Framebuffer,
}

#[wasm_bindgen]
impl PixelSwarm {
    #[wasm_bindgen(constructor)]
    pub fn new(w: u32, h: u32) -> Self {
        Self::build(w, h, EffectConfig::default())
    }

    /// Same as `new`, with a custom sampling gap and repulsion radius
    pub fn with_params(w: u32, h: u32, gap: u32, radius: f32) -> Self {
        Self::build(w, h, EffectConfig::default().with_gap(gap).with_radius(radius))
    }

    fn build(w: u32, h: u32, config: EffectConfig) -> Self {
        Self {
            effect: Effect::new(w, h, config, entropy_seed()),
            frame: Framebuffer::new(w, h),
        }
    }

    /// Build particles from a `w * h * 4` RGBA snapshot of the surface
    pub fn init(&mut self, pixels: &[u8]) -> usize {
        let n = self.effect.init(pixels);
        tracing::info!(particles = n, "swarm initialized");
        n
    }

    pub fn tick(&mut self) {
        self.effect.tick(&mut self.frame);
    }

    pub fn pointer_move(&mut self, x: f32, y: f32) {
        self.effect.set_pointer(x, y);
    }

    pub fn pointer_leave(&mut self) {
        self.effect.clear_pointer();
    }

    pub fn scatter(&mut self) {
        self.effect.scatter();
    }

    // Accessors for WASM
    pub fn particle_count(&self) -> usize { self.effect.len() }
    pub fn output_ptr(&self) -> *const u8 { self.frame.ptr() }
    pub fn output_len(&self) -> usize { self.frame.len() }
    pub fn width(&self) -> u32 { self.effect.width() }
    pub fn height(&self) -> u32 { self.effect.height() }
}

/// Fresh RNG seed: `Math.random` in the browser, the clock natively
#[cfg(target_arch = "wasm32")]
pub fn entropy_seed() -> u64 {
    (js_sys::Math::random() * u64::MAX as f64) as u64
}

#[cfg(not(target_arch = "wasm32"))]
pub fn entropy_seed() -> u64 {
    std::time::SystemTime::now()
        .duration_since(std::time::UNIX_EPOCH)
        .map(|d| d.as_nanos() as u64)
        .unwrap_or(0xDEADBEEF)
}
