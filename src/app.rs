use std::time::Instant;

use log::{debug, error, info, warn};
use pixels::{Pixels, SurfaceTexture};
use winit::dpi::LogicalSize;
use winit::event::VirtualKeyCode;
use winit::event_loop::{ControlFlow, EventLoop};
use winit::window::WindowBuilder;
use winit_input_helper::WinitInputHelper;

use crate::config::{Config, RendererMode};
use crate::cpu_mandelbrot;
use crate::error::ViewerError;
use crate::gpu_mandelbrot::GpuMandelbrot;
use crate::uniforms::FrameUniforms;
use crate::view_state::{Navigation, ViewState};

const TITLE: &str = "Mandelbrot Set";

/// Held keys and the command each issues, in the order they are applied.
/// Up/Down only zoom; there is no vertical pan binding.
pub const KEY_BINDINGS: [(VirtualKeyCode, Navigation); 4] = [
    (VirtualKeyCode::Up, Navigation::ZoomIn),
    (VirtualKeyCode::Down, Navigation::ZoomOut),
    (VirtualKeyCode::Left, Navigation::PanLeft),
    (VirtualKeyCode::Right, Navigation::PanRight),
];

/// Commands for the currently held keys, in binding order.
pub fn held_navigation<F>(is_held: F) -> impl Iterator<Item = Navigation>
where
    F: Fn(VirtualKeyCode) -> bool,
{
    KEY_BINDINGS
        .into_iter()
        .filter(move |(key, _)| is_held(*key))
        .map(|(_, nav)| nav)
}

pub fn window_title(view: &ViewState) -> String {
    format!(
        "{TITLE} | zoom {:.3} | pan ({:.5}, {:.5})",
        view.zoom, view.pan[0], view.pan[1]
    )
}

struct Viewer {
    view: ViewState,
    started: Instant,
    width: u32,
    height: u32,
    renderer: RendererMode,
    gpu: GpuMandelbrot,
}

impl Viewer {
    fn new(view: ViewState, renderer: RendererMode, gpu: GpuMandelbrot, width: u32, height: u32) -> Self {
        Self {
            view,
            started: Instant::now(),
            width,
            height,
            renderer,
            gpu,
        }
    }

    fn uniforms(&self) -> FrameUniforms {
        FrameUniforms::new(
            &self.view,
            self.width,
            self.height,
            self.started.elapsed().as_secs_f32(),
        )
    }

    fn resize(&mut self, width: u32, height: u32) {
        self.width = width;
        self.height = height;
    }

    fn toggle_renderer(&mut self) {
        self.renderer = match self.renderer {
            RendererMode::Gpu => RendererMode::Cpu,
            RendererMode::Cpu => RendererMode::Gpu,
        };
        info!("Using {:?} rendering", self.renderer);
    }

    fn render(&self, pixels: &mut Pixels) -> Result<(), pixels::Error> {
        let start_time = Instant::now();
        let uniforms = self.uniforms();

        match self.renderer {
            RendererMode::Gpu => pixels.render_with(|encoder, render_target, context| {
                self.gpu.render(encoder, render_target, context, &uniforms);
                Ok(())
            })?,
            RendererMode::Cpu => {
                cpu_mandelbrot::render_frame(pixels.frame_mut(), self.width, self.height, &uniforms);
                pixels.render()?;
            }
        }

        debug!("{:?} frame took: {:?}", self.renderer, start_time.elapsed());
        Ok(())
    }
}

/// Open the window and run the render loop until it is closed.
///
/// Only returns on setup failure; once the loop is running the process exits
/// from inside winit, with code 1 if a frame could not be rendered.
pub fn run(cfg: Config) -> Result<(), ViewerError> {
    let view = cfg.initial_view()?;

    let event_loop = EventLoop::new();
    let mut input = WinitInputHelper::new();

    let window = {
        let size = LogicalSize::new(cfg.width as f64, cfg.height as f64);
        WindowBuilder::new()
            .with_title(window_title(&view))
            .with_inner_size(size)
            .build(&event_loop)?
    };

    let window_size = window.inner_size();
    let mut pixels = {
        let surface_texture = SurfaceTexture::new(window_size.width, window_size.height, &window);
        Pixels::new(window_size.width, window_size.height, surface_texture)?
    };

    let gpu = GpuMandelbrot::new(&pixels)?;
    let mut viewer = Viewer::new(view, cfg.renderer, gpu, window_size.width, window_size.height);
    info!(
        "{}x{} surface, {:?} rendering (G toggles, arrows navigate)",
        window_size.width, window_size.height, cfg.renderer
    );

    event_loop.run(move |event, _, control_flow| {
        if input.update(&event) {
            if input.key_pressed(VirtualKeyCode::Escape) || input.close_requested() || input.destroyed() {
                info!("Window closed");
                *control_flow = ControlFlow::Exit;
                return;
            }

            if input.key_pressed(VirtualKeyCode::G) {
                viewer.toggle_renderer();
            }

            if let Some(size) = input.window_resized() {
                if size.width == 0 || size.height == 0 {
                    warn!("Ignoring resize to empty surface");
                } else {
                    if let Err(err) = pixels.resize_buffer(size.width, size.height) {
                        error!("pixels.resize_buffer error: {err}");
                        *control_flow = ControlFlow::ExitWithCode(1);
                        return;
                    }
                    if let Err(err) = pixels.resize_surface(size.width, size.height) {
                        error!("pixels.resize_surface error: {err}");
                        *control_flow = ControlFlow::ExitWithCode(1);
                        return;
                    }
                    viewer.resize(size.width, size.height);
                }
            }

            if viewer.view.apply_all(held_navigation(|key| input.key_held(key))) {
                window.set_title(&window_title(&viewer.view));
            }

            if let Err(err) = viewer.render(&mut pixels) {
                error!("pixels.render error: {err}");
                *control_flow = ControlFlow::ExitWithCode(1);
                return;
            }
        }

        *control_flow = ControlFlow::Poll;
    });
}
