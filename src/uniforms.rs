use bytemuck::{Pod, Zeroable};

use crate::view_state::ViewState;

/// Everything the per-pixel stage gets to see for one frame.
///
/// Field order matches `FrameUniforms` in `mandelbrot.wgsl`; the trailing
/// padding rounds the struct up to the 16 byte granularity of uniform buffers.
#[repr(C)]
#[derive(Debug, Copy, Clone, PartialEq, Pod, Zeroable)]
pub struct FrameUniforms {
    pub time: f32,
    pub zoom: f32,
    pub resolution: [f32; 2],
    pub pan: [f32; 2],
    _padding: [f32; 2],
}

impl FrameUniforms {
    pub fn new(view: &ViewState, width: u32, height: u32, time: f32) -> Self {
        Self {
            time,
            zoom: view.zoom,
            resolution: [width as f32, height as f32],
            pan: view.pan,
            _padding: [0.0; 2],
        }
    }

    pub fn view(&self) -> ViewState {
        ViewState {
            pan: self.pan,
            zoom: self.zoom,
        }
    }
}
