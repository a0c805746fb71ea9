// Copyright 2025 the Boundless Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Two-finger pinch: pan with the midpoint, zoom with the finger spread.

use boundless_view::{ViewError, ViewportEngine};
use kurbo::{Point, Vec2};

/// Effect of one pinch update.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PinchStep {
    /// Midpoint movement applied as pan.
    pub pan: Vec2,
    /// Requested zoom factor (before clamping by the engine).
    pub factor: f64,
    /// Midpoint the zoom was anchored at.
    pub anchor: Point,
}

/// Tracks the previous pair of touch points of an active pinch.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct PinchState {
    last: Option<(Point, Point)>,
}

impl PinchState {
    /// Starts a pinch from two touch points.
    pub fn begin(&mut self, a: Point, b: Point) {
        self.last = (a.is_finite() && b.is_finite()).then_some((a, b));
    }

    /// Returns `true` while a pinch is active.
    #[must_use]
    pub fn is_active(&self) -> bool {
        self.last.is_some()
    }

    /// Feeds the current touch points and updates `engine`.
    ///
    /// The world point under the previous midpoint follows the fingers to the
    /// new midpoint and stays there while the view scales by the change in
    /// finger distance. Returns `Ok(None)` when no pinch is active or the input
    /// is unusable (non-finite points, coincident fingers).
    pub fn update(
        &mut self,
        a: Point,
        b: Point,
        engine: &mut ViewportEngine,
    ) -> Result<Option<PinchStep>, ViewError> {
        let Some((last_a, last_b)) = self.last else {
            return Ok(None);
        };
        if !a.is_finite() || !b.is_finite() {
            return Ok(None);
        }

        let last_distance = last_a.distance(last_b);
        let distance = a.distance(b);
        if last_distance <= 0.0 || distance <= 0.0 {
            self.last = Some((a, b));
            return Ok(None);
        }

        let anchor = a.midpoint(b);
        let pan = anchor - last_a.midpoint(last_b);
        let factor = distance / last_distance;

        // Validate through a scratch copy so a rejected zoom leaves no pan behind.
        let mut next = engine.clone();
        next.pan_by(pan.x, pan.y);
        next.zoom_at(anchor, factor)?;
        *engine = next;

        self.last = Some((a, b));
        Ok(Some(PinchStep {
            pan,
            factor,
            anchor,
        }))
    }

    /// Ends the pinch.
    pub fn end(&mut self) {
        self.last = None;
    }
}
