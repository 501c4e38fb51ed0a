use log::debug;

use crate::error::ViewerError;

/// Multiplicative zoom change per frame a zoom key is held.
pub const ZOOM_STEP: f32 = 1.01;
/// Pan distance per frame at zoom 1; divided by the current zoom.
pub const PAN_STEP: f32 = 0.01;

/// Zoom stays inside this range so the pan step and the viewport scale
/// stay finite. The largest pan step is far below half an ulp of
/// `f32::MAX`, so pan saturates instead of overflowing.
pub const MIN_ZOOM: f32 = 1.0e-30;
pub const MAX_ZOOM: f32 = 1.0e30;

pub const DEFAULT_PAN: [f32; 2] = [-0.5, 0.0];
pub const DEFAULT_ZOOM: f32 = 1.0;

/// A discrete navigation command produced by the input layer.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Navigation {
    ZoomIn,
    ZoomOut,
    PanLeft,
    PanRight,
}

/// Pan and zoom of the visible window into the complex plane.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ViewState {
    pub pan: [f32; 2],
    pub zoom: f32,
}

impl Default for ViewState {
    fn default() -> Self {
        Self {
            pan: DEFAULT_PAN,
            zoom: DEFAULT_ZOOM,
        }
    }
}

impl ViewState {
    pub fn new(pan: [f32; 2], zoom: f32) -> Result<Self, ViewerError> {
        if !(MIN_ZOOM..=MAX_ZOOM).contains(&zoom) {
            return Err(ViewerError::InvalidZoom(zoom));
        }
        Ok(Self { pan, zoom })
    }

    /// Complex-plane distance one pan command moves the view.
    pub fn pan_step(&self) -> f32 {
        PAN_STEP / self.zoom
    }

    pub fn zoom_in(&mut self) {
        self.zoom = (self.zoom * ZOOM_STEP).min(MAX_ZOOM);
    }

    pub fn zoom_out(&mut self) {
        self.zoom = (self.zoom / ZOOM_STEP).max(MIN_ZOOM);
    }

    pub fn apply(&mut self, nav: Navigation) {
        match nav {
            Navigation::ZoomIn => self.zoom_in(),
            Navigation::ZoomOut => self.zoom_out(),
            Navigation::PanLeft => self.pan[0] -= self.pan_step(),
            Navigation::PanRight => self.pan[0] += self.pan_step(),
        }
    }

    /// Apply a frame's worth of commands in order. Returns whether anything moved.
    pub fn apply_all<I>(&mut self, commands: I) -> bool
    where
        I: IntoIterator<Item = Navigation>,
    {
        let before = *self;
        for nav in commands {
            self.apply(nav);
        }

        let changed = before != *self;
        if changed {
            debug!(
                "view: pan=({:.6}, {:.6}) zoom={:.4}",
                self.pan[0], self.pan[1], self.zoom
            );
        }
        changed
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn rejects_non_positive_zoom() {
        assert!(matches!(
            ViewState::new([0.0, 0.0], 0.0),
            Err(ViewerError::InvalidZoom(_))
        ));
        assert!(ViewState::new([0.0, 0.0], -2.0).is_err());
        assert!(ViewState::new([0.0, 0.0], f32::NAN).is_err());
        assert!(ViewState::new([0.0, 0.0], f32::INFINITY).is_err());
        assert!(ViewState::new([3.0, -9.0], 0.001).is_ok());
        assert!(ViewState::new([0.0, 0.0], f32::MAX).is_err());
        assert!(ViewState::new([0.0, 0.0], f32::MIN_POSITIVE).is_err());
    }

    #[test]
    fn up_and_down_never_pan() {
        let mut view = ViewState::default();
        view.apply(Navigation::ZoomIn);
        view.apply(Navigation::ZoomOut);
        assert_eq!(view.pan, DEFAULT_PAN);
    }

    #[test]
    fn apply_all_reports_changes() {
        let mut view = ViewState::default();
        assert!(!view.apply_all([]));
        assert!(view.apply_all([Navigation::PanRight]));
        assert!((view.pan[0] - (DEFAULT_PAN[0] + PAN_STEP)).abs() < 1e-7);
    }

    #[test]
    fn pan_uses_zoom_after_zoom_step() {
        let mut view = ViewState::new([0.0, 0.0], 1.0).unwrap();
        view.apply_all([Navigation::ZoomIn, Navigation::PanRight]);
        assert!((view.pan[0] - PAN_STEP / ZOOM_STEP).abs() < 1e-7);
    }
}
