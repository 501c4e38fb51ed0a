//! Rayon fallback for the fragment shader: same math, one row per task.

use rayon::prelude::*;

use crate::mandelbrot::{shade_pixel, to_rgba8};
use crate::uniforms::FrameUniforms;

/// Fill an RGBA8 frame buffer (top row first) for the given uniforms.
///
/// `frame` must hold `width * height * 4` bytes; extra trailing bytes are
/// left untouched.
pub fn render_frame(frame: &mut [u8], width: u32, height: u32, uniforms: &FrameUniforms) {
    if width == 0 || height == 0 {
        return;
    }

    let view = uniforms.view();
    let resolution = uniforms.resolution;
    let time = uniforms.time;
    let row_bytes = width as usize * 4;

    frame
        .par_chunks_exact_mut(row_bytes)
        .take(height as usize)
        .enumerate()
        .for_each(|(row, pixels)| {
            // flip to the bottom-left origin the viewport transform expects
            let y = height as f32 - row as f32 - 0.5;
            for (column, pixel) in pixels.chunks_exact_mut(4).enumerate() {
                let color = shade_pixel([column as f32 + 0.5, y], resolution, &view, time);
                pixel.copy_from_slice(&to_rgba8(color));
            }
        });
}
