use clap::{Parser, ValueEnum};

use crate::error::ViewerError;
use crate::view_state::{DEFAULT_PAN, DEFAULT_ZOOM, ViewState};

#[derive(Parser, Debug, Clone)]
#[command(name = "apfelshader", version, about = "Real-time Mandelbrot set explorer")]
pub struct Config {
    #[arg(long, default_value_t = 1200)]
    pub width: u32,

    #[arg(long, default_value_t = 1200)]
    pub height: u32,

    #[arg(long, value_enum, default_value_t = RendererMode::Gpu)]
    pub renderer: RendererMode,

    #[arg(long, default_value_t = DEFAULT_PAN[0], allow_hyphen_values = true)]
    pub pan_x: f32,

    #[arg(long, default_value_t = DEFAULT_PAN[1], allow_hyphen_values = true)]
    pub pan_y: f32,

    #[arg(long, default_value_t = DEFAULT_ZOOM)]
    pub zoom: f32,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum RendererMode {
    /// Fragment shader over a full-screen quad
    Gpu,
    /// Rayon parallel loop over the frame buffer
    Cpu,
}

impl Config {
    pub fn initial_view(&self) -> Result<ViewState, ViewerError> {
        ViewState::new([self.pan_x, self.pan_y], self.zoom)
    }
}
