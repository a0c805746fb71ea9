// Copyright 2025 the Boundless Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use kurbo::{Affine, Point, Size, Vec2};

use crate::config::ScaleLimits;
use crate::error::ViewError;

/// Pan offset and uniform scale of the view.
///
/// Content is scaled about the viewport center and then shifted by `pan`,
/// both expressed in screen pixels:
///
/// `screen = center + world * scale + pan`
///
/// This is a plain value; [`ViewportEngine`] owns one and keeps its scale
/// inside the configured limits.
#[derive(Clone, Copy, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ViewportTransform {
    /// Screen-space translation.
    pub pan: Vec2,
    /// Uniform scale factor.
    pub scale: f64,
}

impl ViewportTransform {
    /// No pan, unit scale.
    pub const IDENTITY: Self = Self {
        pan: Vec2::ZERO,
        scale: 1.0,
    };

    /// Creates a transform from its parts.
    #[must_use]
    pub const fn new(pan: Vec2, scale: f64) -> Self {
        Self { pan, scale }
    }

    /// Returns this transform shifted by `delta` screen pixels.
    ///
    /// Panning is unbounded.
    #[must_use]
    pub fn panned(self, delta: Vec2) -> Self {
        Self {
            pan: self.pan + delta,
            scale: self.scale,
        }
    }

    /// Returns this transform zoomed by `factor` around `anchor`.
    ///
    /// The new scale is clamped into `limits`, and the pan is corrected with
    /// the scale change that was actually applied, so the world point under
    /// `anchor` stays under `anchor` even when the request hits a limit.
    /// `center` is the viewport center in screen space.
    pub fn zoomed_at(
        self,
        anchor: Point,
        center: Point,
        factor: f64,
        limits: ScaleLimits,
    ) -> Result<Self, ViewError> {
        if !factor.is_finite() || factor <= 0.0 {
            return Err(ViewError::InvalidZoomFactor(factor));
        }
        if !anchor.is_finite() {
            return Err(ViewError::point(anchor));
        }

        let old_scale = self.scale;
        let requested = old_scale * factor;
        let new_scale = limits.clamp(requested);
        if new_scale != requested {
            tracing::trace!(requested, applied = new_scale, "zoom clamped to scale limits");
        }
        let effective = new_scale / old_scale;

        // Anchor relative to the point that currently maps to world origin.
        let rel = anchor - center - self.pan;
        Ok(Self {
            pan: self.pan - rel * (effective - 1.0),
            scale: new_scale,
        })
    }

    /// Maps a world-space point to screen space.
    #[must_use]
    pub fn to_screen(&self, world: Point, center: Point) -> Point {
        center + world.to_vec2() * self.scale + self.pan
    }

    /// Maps a screen-space point to world space; the inverse of [`to_screen`].
    ///
    /// [`to_screen`]: Self::to_screen
    #[must_use]
    pub fn to_world(&self, screen: Point, center: Point) -> Point {
        ((screen - center - self.pan) / self.scale).to_point()
    }

    /// Affine map from world space to screen space, for renderers.
    #[must_use]
    pub fn to_affine(&self, center: Point) -> Affine {
        Affine::translate(center.to_vec2() + self.pan) * Affine::scale(self.scale)
    }

    /// The same view expressed with the scale origin at the viewport's
    /// top-left corner instead of its center.
    ///
    /// A container-local point `p` lands on screen at `p * scale + pan` under
    /// the returned transform, which is the convention the [`blocks`] module
    /// works in. At unit scale the two forms are identical.
    ///
    /// [`blocks`]: crate::blocks
    #[must_use]
    pub fn origin_anchored(&self, center: Point) -> Self {
        Self {
            pan: self.pan + center.to_vec2() * (1.0 - self.scale),
            scale: self.scale,
        }
    }
}

impl Default for ViewportTransform {
    fn default() -> Self {
        Self::IDENTITY
    }
}

/// Owner of the current [`ViewportTransform`].
///
/// The engine remembers the viewport size so that zooming can anchor relative
/// to the viewport center, and guarantees that the scale stays within its
/// [`ScaleLimits`].
#[derive(Clone, Debug)]
pub struct ViewportEngine {
    transform: ViewportTransform,
    limits: ScaleLimits,
    viewport: Size,
}

impl ViewportEngine {
    /// Creates an engine at its home transform (see [`ViewportEngine::reset`]).
    #[must_use]
    pub fn new(limits: ScaleLimits) -> Self {
        Self {
            transform: home(limits),
            limits,
            viewport: Size::ZERO,
        }
    }

    /// Current transform.
    #[must_use]
    pub fn transform(&self) -> ViewportTransform {
        self.transform
    }

    /// Current scale.
    #[must_use]
    pub fn scale(&self) -> f64 {
        self.transform.scale
    }

    /// Current pan offset in screen pixels.
    #[must_use]
    pub fn pan(&self) -> Vec2 {
        self.transform.pan
    }

    /// Configured scale limits.
    #[must_use]
    pub fn scale_limits(&self) -> ScaleLimits {
        self.limits
    }

    /// Replaces the scale limits.
    ///
    /// If the current scale falls outside the new range it is clamped,
    /// anchored at the viewport center.
    pub fn set_scale_limits(&mut self, limits: ScaleLimits) {
        self.limits = limits;
        if limits.contains(self.transform.scale) {
            return;
        }
        let factor = limits.clamp(self.transform.scale) / self.transform.scale;
        let center = self.viewport_center();
        if let Ok(t) = self.transform.zoomed_at(center, center, factor, limits) {
            self.transform = t;
        }
    }

    /// Size of the viewport in screen pixels.
    #[must_use]
    pub fn viewport_size(&self) -> Size {
        self.viewport
    }

    /// Updates the viewport size. Pan and scale are left as they are.
    pub fn set_viewport_size(&mut self, size: Size) {
        self.viewport = size;
    }

    /// Center of the viewport in screen space.
    #[must_use]
    pub fn viewport_center(&self) -> Point {
        Point::new(self.viewport.width / 2.0, self.viewport.height / 2.0)
    }

    /// Pans by a screen-space delta.
    pub fn pan_by(&mut self, dx: f64, dy: f64) {
        self.transform = self.transform.panned(Vec2::new(dx, dy));
    }

    /// Zooms by `factor` keeping the world point under `screen_point` fixed.
    ///
    /// `factor > 1` zooms in. On error the transform is unchanged.
    pub fn zoom_at(&mut self, screen_point: Point, factor: f64) -> Result<(), ViewError> {
        self.transform =
            self.transform
                .zoomed_at(screen_point, self.viewport_center(), factor, self.limits)?;
        Ok(())
    }

    /// Returns to the home transform: no pan and a scale of 1, clamped into
    /// the limits. With the default limits this is the identity.
    pub fn reset(&mut self) {
        self.transform = home(self.limits);
    }

    /// Maps a world-space point to screen space using the current viewport center.
    #[must_use]
    pub fn to_screen(&self, world: Point) -> Point {
        self.transform.to_screen(world, self.viewport_center())
    }

    /// Maps a screen-space point to world space using the current viewport center.
    #[must_use]
    pub fn to_world(&self, screen: Point) -> Point {
        self.transform.to_world(screen, self.viewport_center())
    }
}

// Zero pan keeps the world origin at the viewport center at any scale.
fn home(limits: ScaleLimits) -> ViewportTransform {
    ViewportTransform::new(Vec2::ZERO, limits.clamp(1.0))
}

impl Default for ViewportEngine {
    fn default() -> Self {
        Self::new(ScaleLimits::default())
    }
}

#[cfg(test)]
mod tests {
    use kurbo::{Point, Size, Vec2};

    use super::{ViewportEngine, ViewportTransform};
    use crate::{ScaleLimits, ViewError};

    fn engine_800x600() -> ViewportEngine {
        let mut engine = ViewportEngine::default();
        engine.set_viewport_size(Size::new(800.0, 600.0));
        engine
    }

    fn assert_point_close(a: Point, b: Point) {
        assert!((a.x - b.x).abs() < 1e-9, "{a:?} != {b:?}");
        assert!((a.y - b.y).abs() < 1e-9, "{a:?} != {b:?}");
    }

    #[test]
    fn world_screen_roundtrip() {
        let t = ViewportTransform::new(Vec2::new(13.0, -7.5), 2.5);
        let center = Point::new(400.0, 300.0);
        let world = Point::new(10.0, -5.0);
        let screen = t.to_screen(world, center);
        assert_point_close(screen, Point::new(438.0, 280.0));
        assert_point_close(t.to_world(screen, center), world);
        assert_point_close(t.to_affine(center) * world, screen);
    }

    #[test]
    fn origin_anchored_form_maps_container_points_identically() {
        let t = ViewportTransform::new(Vec2::new(-40.0, 12.0), 0.5);
        let center = Point::new(400.0, 300.0);
        let tl = t.origin_anchored(center);
        for local in [Point::ZERO, Point::new(800.0, 600.0), Point::new(123.0, -45.0)] {
            // Container-local point to center-relative world point.
            let world = (local - center).to_point();
            let expected = t.to_screen(world, center);
            assert_point_close((local.to_vec2() * tl.scale + tl.pan).to_point(), expected);
        }
        assert_eq!(
            ViewportTransform::new(Vec2::new(3.0, 4.0), 1.0).origin_anchored(center),
            ViewportTransform::new(Vec2::new(3.0, 4.0), 1.0)
        );
    }

    #[test]
    fn center_zoom_keeps_pan() {
        let mut engine = engine_800x600();
        engine.zoom_at(Point::new(400.0, 300.0), 2.0).unwrap();
        assert_eq!(engine.scale(), 2.0);
        assert_eq!(engine.pan(), Vec2::ZERO);
    }

    #[test]
    fn zoom_matches_offset_formula_from_rest() {
        let mut engine = engine_800x600();
        // Anchor 100px right of and 50px above the center.
        engine.zoom_at(Point::new(500.0, 250.0), 2.0).unwrap();
        assert_eq!(engine.pan(), Vec2::new(-100.0, 50.0));
    }

    #[test]
    fn zoom_keeps_anchor_fixed_with_existing_pan() {
        let mut engine = engine_800x600();
        engine.pan_by(-320.0, 145.0);
        engine.zoom_at(Point::new(400.0, 300.0), 1.5).unwrap();

        for anchor in [
            Point::new(0.0, 0.0),
            Point::new(123.0, 456.0),
            Point::new(799.0, 1.0),
        ] {
            for factor in [0.5, 0.9, 1.1, 1.7] {
                let before = engine.to_world(anchor);
                engine.zoom_at(anchor, factor).unwrap();
                assert_point_close(engine.to_world(anchor), before);
            }
        }
    }

    #[test]
    fn clamped_zoom_still_keeps_anchor_fixed() {
        let mut engine = engine_800x600();
        engine.pan_by(40.0, 40.0);
        let anchor = Point::new(120.0, 80.0);
        let before = engine.to_world(anchor);

        // Requests 10x but the limit allows only 4x.
        engine.zoom_at(anchor, 10.0).unwrap();
        assert_eq!(engine.scale(), 4.0);
        assert_point_close(engine.to_world(anchor), before);
    }

    #[test]
    fn repeated_zoom_respects_limits() {
        let mut engine = engine_800x600();
        let anchor = Point::new(10.0, 590.0);
        for _ in 0..100 {
            engine.zoom_at(anchor, 1.1).unwrap();
            assert!(engine.scale() <= ScaleLimits::DEFAULT_MAX);
        }
        assert_eq!(engine.scale(), ScaleLimits::DEFAULT_MAX);
        for _ in 0..100 {
            engine.zoom_at(anchor, 0.9).unwrap();
            assert!(engine.scale() >= ScaleLimits::DEFAULT_MIN);
        }
        assert_eq!(engine.scale(), ScaleLimits::DEFAULT_MIN);
    }

    #[test]
    fn zoom_at_limit_does_not_move_pan() {
        let mut engine = engine_800x600();
        engine.zoom_at(Point::new(400.0, 300.0), 4.0).unwrap();
        let pan = engine.pan();
        engine.zoom_at(Point::new(10.0, 10.0), 2.0).unwrap();
        assert_eq!(engine.pan(), pan);
        assert_eq!(engine.scale(), 4.0);
    }

    #[test]
    fn invalid_zoom_leaves_state_untouched() {
        let mut engine = engine_800x600();
        engine.pan_by(5.0, 6.0);
        let before = engine.transform();

        for factor in [0.0, -1.0, f64::NAN, f64::INFINITY] {
            assert!(matches!(
                engine.zoom_at(Point::new(1.0, 1.0), factor),
                Err(ViewError::InvalidZoomFactor(_))
            ));
        }
        assert!(matches!(
            engine.zoom_at(Point::new(f64::NAN, 1.0), 2.0),
            Err(ViewError::InvalidPoint { y, .. }) if y == 1.0
        ));
        assert_eq!(engine.transform(), before);
    }

    #[test]
    fn pan_is_unbounded_and_reset_restores_identity() {
        let mut engine = engine_800x600();
        engine.pan_by(-1.0e7, 3.0e6);
        engine.zoom_at(Point::new(0.0, 0.0), 2.0).unwrap();
        assert!(engine.pan().x < -1.0e7);

        engine.reset();
        assert_eq!(engine.transform(), ViewportTransform::IDENTITY);
    }

    #[test]
    fn home_scale_respects_limits_that_exclude_one() {
        let limits = ScaleLimits::new(2.0, 8.0).unwrap();
        let mut engine = ViewportEngine::new(limits);
        engine.set_viewport_size(Size::new(800.0, 600.0));
        assert_eq!(engine.scale(), 2.0);
        assert_eq!(engine.pan(), Vec2::ZERO);

        engine.pan_by(30.0, -10.0);
        engine.zoom_at(Point::new(100.0, 100.0), 3.0).unwrap();
        engine.reset();
        assert_eq!(engine.transform(), ViewportTransform::new(Vec2::ZERO, 2.0));
        assert!(limits.contains(engine.scale()));

        let mut below = ViewportEngine::new(ScaleLimits::new(0.1, 0.5).unwrap());
        assert_eq!(below.scale(), 0.5);
        below.reset();
        assert_eq!(below.scale(), 0.5);
    }

    #[test]
    fn narrowing_limits_clamps_about_center() {
        let mut engine = engine_800x600();
        engine.zoom_at(Point::new(100.0, 100.0), 4.0).unwrap();
        let center_world = engine.to_world(engine.viewport_center());

        engine.set_scale_limits(ScaleLimits::new(0.5, 2.0).unwrap());
        assert_eq!(engine.scale(), 2.0);
        assert_point_close(engine.to_world(engine.viewport_center()), center_world);
    }
}
