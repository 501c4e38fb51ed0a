use thiserror::Error;

#[derive(Debug, Error)]
pub enum ViewerError {
    #[error("failed to create window: {0}")]
    Window(#[from] winit::error::OsError),

    #[error("pixel surface error: {0}")]
    Surface(#[from] pixels::Error),

    #[error("fractal shader failed to build: {0}")]
    Shader(String),

    #[error("zoom must be within [1e-30, 1e30], got {0}")]
    InvalidZoom(f32),
}
