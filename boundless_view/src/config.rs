// Copyright 2025 the Boundless Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Viewer configuration.

use crate::error::ViewError;

/// Inclusive bounds on the viewport scale.
///
/// Deserialized limits go through the same checks as [`ScaleLimits::new`],
/// and must already be ordered.
#[derive(Clone, Copy, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(try_from = "RawScaleLimits"))]
pub struct ScaleLimits {
    min: f64,
    max: f64,
}

impl ScaleLimits {
    /// Default lower bound.
    pub const DEFAULT_MIN: f64 = 0.25;
    /// Default upper bound.
    pub const DEFAULT_MAX: f64 = 4.0;

    /// Creates limits from two bounds.
    ///
    /// The pair is normalized so that `min <= max`. Both bounds must be finite
    /// and strictly positive.
    pub fn new(min: f64, max: f64) -> Result<Self, ViewError> {
        let valid = |v: f64| v.is_finite() && v > 0.0;
        if !valid(min) || !valid(max) {
            return Err(ViewError::InvalidScaleLimits { min, max });
        }
        let (min, max) = if min <= max { (min, max) } else { (max, min) };
        Ok(Self { min, max })
    }

    /// Lower bound.
    #[must_use]
    pub fn min(&self) -> f64 {
        self.min
    }

    /// Upper bound.
    #[must_use]
    pub fn max(&self) -> f64 {
        self.max
    }

    /// Clamps `scale` into the limits.
    #[must_use]
    pub fn clamp(&self, scale: f64) -> f64 {
        scale.clamp(self.min, self.max)
    }

    /// Returns `true` if `scale` lies inside the limits.
    #[must_use]
    pub fn contains(&self, scale: f64) -> bool {
        (self.min..=self.max).contains(&scale)
    }
}

#[cfg(feature = "serde")]
#[derive(serde::Deserialize)]
struct RawScaleLimits {
    min: f64,
    max: f64,
}

#[cfg(feature = "serde")]
impl TryFrom<RawScaleLimits> for ScaleLimits {
    type Error = ViewError;

    fn try_from(RawScaleLimits { min, max }: RawScaleLimits) -> Result<Self, ViewError> {
        let limits = Self::new(min, max)?;
        if limits.min != min {
            return Err(ViewError::InvalidScaleLimits { min, max });
        }
        Ok(limits)
    }
}

impl Default for ScaleLimits {
    fn default() -> Self {
        Self {
            min: Self::DEFAULT_MIN,
            max: Self::DEFAULT_MAX,
        }
    }
}

/// Space reserved around a viewer frame inside its host window.
#[derive(Clone, Copy, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct FrameMargins {
    /// Total horizontal margin (left + right).
    pub horizontal: f64,
    /// Total vertical margin (top + bottom, including any header).
    pub vertical: f64,
}

impl Default for FrameMargins {
    fn default() -> Self {
        // 20px on each side, plus 80px of instructions above the frame.
        Self {
            horizontal: 40.0,
            vertical: 120.0,
        }
    }
}

/// Tunables for a [`Viewer`](crate::Viewer) and its input handling.
#[derive(Clone, Copy, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct ViewConfig {
    /// Scale bounds enforced by the engine.
    pub scale_limits: ScaleLimits,
    /// Zoom factor applied for one wheel notch towards the user (zoom in).
    pub zoom_in_step: f64,
    /// Zoom factor applied for one wheel notch away from the user (zoom out).
    pub zoom_out_step: f64,
    /// Extra grid lines drawn beyond each viewport edge.
    pub grid_overscan: u32,
    /// Margins used by [`fit_frame`](crate::fit_frame).
    pub frame_margins: FrameMargins,
}

impl ViewConfig {
    /// Checks that the scale limits are ordered and the wheel steps are usable
    /// zoom factors.
    ///
    /// Limits built with [`ScaleLimits::new`] always pass; deserialized ones
    /// may not.
    pub fn validate(&self) -> Result<(), ViewError> {
        let ScaleLimits { min, max } = self.scale_limits;
        if ScaleLimits::new(min, max)? != self.scale_limits {
            return Err(ViewError::InvalidScaleLimits { min, max });
        }
        for step in [self.zoom_in_step, self.zoom_out_step] {
            if !step.is_finite() || step <= 0.0 {
                return Err(ViewError::InvalidZoomFactor(step));
            }
        }
        Ok(())
    }
}

impl Default for ViewConfig {
    fn default() -> Self {
        Self {
            scale_limits: ScaleLimits::default(),
            zoom_in_step: 1.1,
            zoom_out_step: 0.9,
            grid_overscan: 2,
            frame_margins: FrameMargins::default(),
        }
    }
}
