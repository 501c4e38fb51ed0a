//! Real-time Mandelbrot set explorer.
//!
//! Every frame the current [`view_state::ViewState`] is snapshotted into
//! [`uniforms::FrameUniforms`] and handed to one of two evaluation stages: a
//! WGSL fragment shader drawing a full-screen quad, or a rayon loop over the
//! frame buffer. Both run the same transform, iteration and color ramp found
//! in [`mandelbrot`], and both store the ramp values unchanged: the shader
//! picks a decoding entry point when the surface format is sRGB.

pub mod app;
pub mod config;
pub mod cpu_mandelbrot;
pub mod error;
pub mod gpu_mandelbrot;
pub mod mandelbrot;
pub mod uniforms;
pub mod view_state;
