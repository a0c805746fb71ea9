// Copyright 2025 the Boundless Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Wheel notches to zoom factors.

use boundless_view::{ViewConfig, ViewError, ViewportEngine};
use kurbo::Point;

/// Maps wheel deltas to fixed zoom steps.
///
/// Only the sign of the delta matters: scrolling towards the user (negative
/// `delta_y`) zooms in by `zoom_in_step`, away zooms out by `zoom_out_step`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct WheelZoom {
    zoom_in_step: f64,
    zoom_out_step: f64,
}

impl WheelZoom {
    /// Creates a mapping from explicit steps. Both must be finite and positive.
    pub fn new(zoom_in_step: f64, zoom_out_step: f64) -> Result<Self, ViewError> {
        for step in [zoom_in_step, zoom_out_step] {
            if !step.is_finite() || step <= 0.0 {
                return Err(ViewError::InvalidZoomFactor(step));
            }
        }
        Ok(Self {
            zoom_in_step,
            zoom_out_step,
        })
    }

    /// Creates a mapping from the steps in `config`.
    pub fn from_config(config: &ViewConfig) -> Result<Self, ViewError> {
        Self::new(config.zoom_in_step, config.zoom_out_step)
    }

    /// Zoom factor for a wheel delta, or `None` for a zero or NaN delta.
    #[must_use]
    pub fn factor_for(&self, delta_y: f64) -> Option<f64> {
        if delta_y > 0.0 {
            Some(self.zoom_out_step)
        } else if delta_y < 0.0 {
            Some(self.zoom_in_step)
        } else {
            None
        }
    }

    /// Zooms `engine` at `at` for one wheel event.
    ///
    /// Returns `Ok(false)` when the delta carries no direction.
    pub fn apply(
        &self,
        engine: &mut ViewportEngine,
        at: Point,
        delta_y: f64,
    ) -> Result<bool, ViewError> {
        let Some(factor) = self.factor_for(delta_y) else {
            return Ok(false);
        };
        engine.zoom_at(at, factor)?;
        Ok(true)
    }
}

impl Default for WheelZoom {
    fn default() -> Self {
        let config = ViewConfig::default();
        Self {
            zoom_in_step: config.zoom_in_step,
            zoom_out_step: config.zoom_out_step,
        }
    }
}

#[cfg(test)]
mod tests {
    use boundless_view::{ViewError, ViewportEngine};
    use kurbo::{Point, Size};

    use super::WheelZoom;

    #[test]
    fn direction_selects_step() {
        let wheel = WheelZoom::default();
        assert_eq!(wheel.factor_for(120.0), Some(0.9));
        assert_eq!(wheel.factor_for(-3.0), Some(1.1));
        assert_eq!(wheel.factor_for(0.0), None);
        assert_eq!(wheel.factor_for(f64::NAN), None);
    }

    #[test]
    fn apply_zooms_under_cursor() {
        let mut engine = ViewportEngine::default();
        engine.set_viewport_size(Size::new(800.0, 600.0));
        let wheel = WheelZoom::default();
        let at = Point::new(600.0, 100.0);
        let before = engine.to_world(at);

        assert_eq!(wheel.apply(&mut engine, at, -1.0), Ok(true));
        assert!((engine.scale() - 1.1).abs() < 1e-12);
        let after = engine.to_world(at);
        assert!((after - before).hypot() < 1e-9);

        assert_eq!(wheel.apply(&mut engine, at, 0.0), Ok(false));
        assert!((engine.scale() - 1.1).abs() < 1e-12);
    }

    #[test]
    fn rejects_unusable_steps() {
        assert_eq!(
            WheelZoom::new(1.1, -0.9),
            Err(ViewError::InvalidZoomFactor(-0.9))
        );
        assert!(WheelZoom::new(f64::INFINITY, 0.9).is_err());
    }
}
