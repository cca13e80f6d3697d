// render.rs - Drawing surfaces
//
// The effect only ever clears the surface and fills solid squares, so a
// surface is anything that can do those two things. `Framebuffer` is the
// built-in one: a row-major RGBA buffer the host blits to its canvas
// (ImageData in the browser, PNG frames natively).

use crate::color::Rgb;

/// Minimal 2D drawing target, modelled on a canvas context
pub trait Surface {
    fn clear(&mut self);
    fn set_fill(&mut self, color: Rgb);
    fn fill_rect(&mut self, x: f32, y: f32, w: f32, h: f32);
}

pub struct Framebuffer {
    out: Vec<u8>,
    w: u32,
    h: u32,
    fill: [u8; 4],
}

impl Framebuffer {
    pub fn new(w: u32, h: u32) -> Self {
        Self {
            out: vec![0; w as usize * h as usize * 4],
            w,
            h,
            fill: [0, 0, 0, 255],
        }
    }

    pub fn width(&self) -> u32 {
        self.w
    }

    pub fn height(&self) -> u32 {
        self.h
    }

    pub fn pixels(&self) -> &[u8] {
        &self.out
    }

    pub fn ptr(&self) -> *const u8 {
        self.out.as_ptr()
    }

    pub fn len(&self) -> usize {
        self.out.len()
    }

    pub fn is_empty(&self) -> bool {
        self.out.is_empty()
    }

    /// RGBA at (x, y), or None off-surface
    pub fn pixel(&self, x: u32, y: u32) -> Option<[u8; 4]> {
        if x >= self.w || y >= self.h {
            return None;
        }
        let i = (y as usize * self.w as usize + x as usize) * 4;
        Some([self.out[i], self.out[i + 1], self.out[i + 2], self.out[i + 3]])
    }
}

impl Surface for Framebuffer {
    fn clear(&mut self) {
        self.out.fill(0);
    }

    fn set_fill(&mut self, color: Rgb) {
        self.fill = color.to_rgba();
    }

    /// Fills pixels whose top-left corner lies in `[x, x+w) x [y, y+h)`
    /// after rounding, clipped to the surface.
    fn fill_rect(&mut self, x: f32, y: f32, w: f32, h: f32) {
        let (sw, sh) = (self.w as i32, self.h as i32);
        let x0 = (x.round() as i32).clamp(0, sw);
        let y0 = (y.round() as i32).clamp(0, sh);
        let x1 = ((x + w).round() as i32).clamp(0, sw);
        let y1 = ((y + h).round() as i32).clamp(0, sh);
        if x0 >= x1 || y0 >= y1 {
            return;
        }

        let stride = self.w as usize * 4;
        for py in y0 as usize..y1 as usize {
            let row = py * stride;
            for px in x0 as usize..x1 as usize {
                let i = row + px * 4;
                self.out[i..i + 4].copy_from_slice(&self.fill);
            }
        }
    }
}
