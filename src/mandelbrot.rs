//! Per-pixel escape-time evaluation: viewport transform, the Mandelbrot
//! iteration and the animated color ramp.
//!
//! Everything here is single precision on purpose so the CPU path matches
//! what the fragment shader in `mandelbrot.wgsl` computes.

use num_complex::Complex32;

use crate::view_state::ViewState;

pub const MAX_ITERATIONS: u32 = 300;
pub const ESCAPE_RADIUS_SQ: f32 = 4.0; // 2.0^2

/// Outcome of iterating a single point.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct IterationResult {
    pub iterations: u32,
    pub escaped: bool,
}

/// Map a pixel position (bottom-left origin) to a point in the complex plane.
///
/// The offset from the screen center is normalized by half the surface
/// height, so one unit of `zoom` always spans the full vertical extent
/// `[-1, 1]` regardless of the window's aspect ratio.
pub fn screen_to_complex(pixel: [f32; 2], resolution: [f32; 2], view: &ViewState) -> Complex32 {
    let scale = 0.5 * view.zoom * resolution[1];
    let re = (pixel[0] - 0.5 * resolution[0]) / scale + view.pan[0];
    let im = (pixel[1] - 0.5 * resolution[1]) / scale + view.pan[1];
    Complex32::new(re, im)
}

/// Smallest `i` with `|z_i| > 2`, or `max_iterations` when the orbit stays
/// bounded that long.
pub fn escape_time(c: Complex32, max_iterations: u32) -> IterationResult {
    let mut z = Complex32::new(0.0, 0.0);

    for i in 0..max_iterations {
        if z.norm_sqr() > ESCAPE_RADIUS_SQ {
            return IterationResult { iterations: i, escaped: true };
        }
        z = z * z + c;
    }

    IterationResult {
        iterations: max_iterations,
        escaped: false,
    }
}

/// Linear RGBA for an iteration count. The blue channel cycles with `time`.
///
/// A zero budget counts as reaching the bound, like a point that never
/// escaped.
pub fn escape_color(iterations: u32, max_iterations: u32, time: f32) -> [f32; 4] {
    let fraction = if max_iterations == 0 {
        1.0
    } else {
        (iterations as f32 / max_iterations as f32).min(1.0)
    };
    // sqrt pushes contrast towards low counts, brightening the boundary
    let t = fraction.sqrt();
    [t, 0.5 * t, 0.5 * (1.0 + (3.0 * t + time).sin()), 1.0]
}

pub fn to_rgba8(color: [f32; 4]) -> [u8; 4] {
    color.map(|channel| (channel.clamp(0.0, 1.0) * 255.0).round() as u8)
}

/// Full per-pixel pipeline: transform, iterate, color.
pub fn shade_pixel(pixel: [f32; 2], resolution: [f32; 2], view: &ViewState, time: f32) -> [f32; 4] {
    let c = screen_to_complex(pixel, resolution, view);
    let result = escape_time(c, MAX_ITERATIONS);
    escape_color(result.iterations, MAX_ITERATIONS, time)
}
