use apfelshader::cpu_mandelbrot::render_frame;
use apfelshader::mandelbrot::{
    MAX_ITERATIONS, escape_color, escape_time, screen_to_complex, shade_pixel, to_rgba8,
};
use apfelshader::uniforms::FrameUniforms;
use apfelshader::view_state::ViewState;
use num_complex::Complex32;

fn view(pan: [f32; 2], zoom: f32) -> ViewState {
    ViewState::new(pan, zoom).expect("valid view")
}

// ── Escape-time evaluator ───────────────────────────────────────────────────

#[test]
fn iteration_count_stays_in_bounds() {
    for re in -25..=25 {
        for im in -25..=25 {
            let c = Complex32::new(re as f32 * 0.1, im as f32 * 0.1);
            let r = escape_time(c, MAX_ITERATIONS);
            assert!(r.iterations <= MAX_ITERATIONS, "{c} gave {}", r.iterations);
            assert_eq!(r.escaped, r.iterations < MAX_ITERATIONS);
        }
    }
}

#[test]
fn known_points() {
    assert_eq!(escape_time(Complex32::new(0.0, 0.0), MAX_ITERATIONS).iterations, 300);
    assert_eq!(escape_time(Complex32::new(-0.5, 0.0), MAX_ITERATIONS).iterations, 300);
    // period-2 bulb
    assert_eq!(escape_time(Complex32::new(-1.0, 0.0), MAX_ITERATIONS).iterations, 300);
    assert!(escape_time(Complex32::new(2.0, 2.0), MAX_ITERATIONS).iterations <= 10);
    assert!(escape_time(Complex32::new(1.0, 1.0), MAX_ITERATIONS).iterations <= 2);
}

#[test]
fn first_escape_index_is_exact() {
    // z1 = (2, 2), |z1|^2 = 8
    assert_eq!(escape_time(Complex32::new(2.0, 2.0), MAX_ITERATIONS).iterations, 1);
    // z1 = (1, 1), z2 = (1, 3)
    assert_eq!(escape_time(Complex32::new(1.0, 1.0), MAX_ITERATIONS).iterations, 2);
}

// ── Color mapping ───────────────────────────────────────────────────────────

#[test]
fn color_is_deterministic() {
    for i in [0, 1, 17, 150, 299, 300] {
        for time in [0.0, 0.5, 12.25] {
            assert_eq!(
                escape_color(i, MAX_ITERATIONS, time),
                escape_color(i, MAX_ITERATIONS, time)
            );
        }
    }
}

#[test]
fn inside_points_are_full_red() {
    let color = shade_pixel([400.0, 300.0], [800.0, 600.0], &view([-0.5, 0.0], 1.0), 3.0);
    assert_eq!(color[0], 1.0);
    assert_eq!(color[1], 0.5);
}

#[test]
fn blue_channel_period() {
    let period = 2.0 * std::f32::consts::PI;
    let a = escape_color(75, MAX_ITERATIONS, 1.0);
    let b = escape_color(75, MAX_ITERATIONS, 1.0 + period);
    assert!((a[2] - b[2]).abs() < 1e-5);
}

// ── Viewport transform ──────────────────────────────────────────────────────

#[test]
fn zoom_shrinks_visible_extent() {
    let res = [600.0, 600.0];
    let near = screen_to_complex([600.0, 600.0], res, &view([0.0, 0.0], 1.0));
    let far = screen_to_complex([600.0, 600.0], res, &view([0.0, 0.0], 4.0));
    assert!((near.re - 1.0).abs() < 1e-6 && (near.im - 1.0).abs() < 1e-6);
    assert!((far.re - 0.25).abs() < 1e-6 && (far.im - 0.25).abs() < 1e-6);
}

// ── CPU renderer ────────────────────────────────────────────────────────────

#[test]
fn cpu_frame_is_opaque_and_centered() {
    let (w, h) = (32u32, 24u32);
    let uniforms = FrameUniforms::new(&view([-0.5, 0.0], 1.0), w, h, 0.0);
    let mut frame = vec![0u8; (w * h * 4) as usize];
    render_frame(&mut frame, w, h, &uniforms);

    assert!(frame.chunks_exact(4).all(|px| px[3] == 255));

    let center = ((h / 2 * w + w / 2) * 4) as usize;
    assert_eq!(frame[center], 255);
    assert_eq!(frame[center + 1], 128);
}

#[test]
fn cpu_frame_matches_per_pixel_shading() {
    let (w, h) = (9u32, 7u32);
    let v = view([-0.75, 0.1], 1.3);
    let uniforms = FrameUniforms::new(&v, w, h, 2.0);
    let mut frame = vec![0u8; (w * h * 4) as usize];
    render_frame(&mut frame, w, h, &uniforms);

    for row in 0..h {
        for col in 0..w {
            let p = [col as f32 + 0.5, h as f32 - row as f32 - 0.5];
            let expected = to_rgba8(shade_pixel(p, [w as f32, h as f32], &v, 2.0));
            let i = ((row * w + col) * 4) as usize;
            assert_eq!(&frame[i..i + 4], &expected, "pixel ({col}, {row})");
        }
    }
}
