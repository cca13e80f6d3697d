// placement.rs - Center a source image on the drawing surface
//
// Mirrors what a 2D canvas does before the sampling pass: draw the image
// at an offset onto a transparent surface, then read the whole surface.

/// Top-left corner that centers a `img_w x img_h` image on the surface.
/// Negative when the image is larger than the surface.
pub fn centered_offset(surface_w: u32, surface_h: u32, img_w: u32, img_h: u32) -> (i32, i32) {
    let ox = (surface_w as f32 * 0.5 - img_w as f32 * 0.5).floor() as i32;
    let oy = (surface_h as f32 * 0.5 - img_h as f32 * 0.5).floor() as i32;
    (ox, oy)
}

/// Copy an RGBA image onto a transparent `dst_w x dst_h` surface at
/// `offset`, clipping whatever falls outside.
pub fn compose(
    src: &[u8],
    src_w: u32,
    src_h: u32,
    dst_w: u32,
    dst_h: u32,
    offset: (i32, i32),
) -> Vec<u8> {
    let mut out = vec![0u8; dst_w as usize * dst_h as usize * 4];
    let (ox, oy) = offset;

    for sy in 0..src_h as i32 {
        let dy = sy + oy;
        if dy < 0 || dy >= dst_h as i32 {
            continue;
        }

        // Horizontal overlap of this row with the surface
        let x0 = (-ox).max(0);
        let x1 = (src_w as i32).min(dst_w as i32 - ox);
        if x0 >= x1 {
            continue;
        }

        let s = (sy as usize * src_w as usize + x0 as usize) * 4;
        let d = (dy as usize * dst_w as usize + (x0 + ox) as usize) * 4;
        let n = (x1 - x0) as usize * 4;
        if let Some(row) = src.get(s..s + n) {
            out[d..d + n].copy_from_slice(row);
        }
    }

    out
}

/// Decode an image file and center it on a surface, ready for sampling.
#[cfg(not(target_arch = "wasm32"))]
pub fn load_centered(
    path: &std::path::Path,
    surface_w: u32,
    surface_h: u32,
) -> Result<Vec<u8>, crate::error::SwarmError> {
    let img = image::open(path)?.to_rgba8();
    let (iw, ih) = img.dimensions();
    let offset = centered_offset(surface_w, surface_h, iw, ih);
    tracing::debug!(path = %path.display(), iw, ih, ?offset, "placing image");
    Ok(compose(img.as_raw(), iw, ih, surface_w, surface_h, offset))
}
