// export.rs - Write framebuffer snapshots as PNG

use image::ExtendedColorType;
use pixel_swarm::error::SwarmError;
use pixel_swarm::render::Framebuffer;
use std::path::{Path, PathBuf};

pub fn write_frame(fb: &Framebuffer, dir: &Path, frame: u32) -> Result<PathBuf, SwarmError> {
    let path = dir.join(format!("frame_{:05}.png", frame));
    image::save_buffer(&path, fb.pixels(), fb.width(), fb.height(), ExtendedColorType::Rgba8)?;
    Ok(path)
}
