// sampler/ - Turn a pixel snapshot into particle seeds
//
// One coarse grid pass over the whole surface. Each grid cell whose
// pixel has any opacity becomes a seed; everything else is skipped.

mod placement;

pub use placement::*;

use crate::color::Rgb;

/// Where a particle comes to rest, and what color it is
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Seed {
    pub x: f32,
    pub y: f32,
    pub color: Rgb,
}

/// Scan `pixels` (row-major RGBA, `width * height * 4` bytes) every `gap`
/// pixels in both axes.
///
/// Seeds come out in scan order: top to bottom, left to right. A buffer
/// shorter than the surface reads as transparent past its end, and a zero
/// `gap` is treated as 1.
pub fn sample(pixels: &[u8], width: u32, height: u32, gap: u32) -> Vec<Seed> {
    let step = gap.max(1) as usize;
    let (w, h) = (width as usize, height as usize);
    let mut seeds = Vec::new();

    for y in (0..h).step_by(step) {
        for x in (0..w).step_by(step) {
            let idx = (y * w + x) * 4;
            let Some(&[r, g, b, a]) = pixels.get(idx..idx + 4) else {
                continue;
            };
            if a > 0 {
                seeds.push(Seed {
                    x: x as f32,
                    y: y as f32,
                    color: Rgb::new(r, g, b),
                });
            }
        }
    }

    if let Some(first) = seeds.first() {
        tracing::debug!(width, height, gap = step, seeds = seeds.len(), first = %first.color, "sampled surface");
    } else {
        tracing::debug!(width, height, gap = step, "sampled surface, nothing opaque");
    }
    seeds
}
