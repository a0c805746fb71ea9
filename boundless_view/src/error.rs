// Copyright 2025 the Boundless Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use kurbo::{Point, Size};

/// Errors reported by layout resolution and the viewport engine.
///
/// Every fallible operation in this crate validates its inputs before touching
/// any state, so an `Err` always means nothing was mutated.
#[derive(Clone, Copy, Debug, PartialEq, thiserror::Error)]
pub enum ViewError {
    /// A size had a non-positive or non-finite component.
    #[error("invalid dimension {width}x{height}: both sides must be finite and positive")]
    InvalidDimension {
        /// Offending width.
        width: f64,
        /// Offending height.
        height: f64,
    },
    /// A zoom factor was zero, negative, or non-finite.
    #[error("invalid zoom factor {0}: must be finite and positive")]
    InvalidZoomFactor(f64),
    /// A zoom anchor had a non-finite coordinate.
    #[error("invalid anchor point ({x}, {y})")]
    InvalidPoint {
        /// Offending x coordinate.
        x: f64,
        /// Offending y coordinate.
        y: f64,
    },
    /// Scale limits were non-finite or non-positive.
    #[error("invalid scale limits [{min}, {max}]")]
    InvalidScaleLimits {
        /// Requested lower bound.
        min: f64,
        /// Requested upper bound.
        max: f64,
    },
}

impl ViewError {
    pub(crate) fn dimension(size: Size) -> Self {
        Self::InvalidDimension {
            width: size.width,
            height: size.height,
        }
    }

    pub(crate) fn point(pt: Point) -> Self {
        Self::InvalidPoint { x: pt.x, y: pt.y }
    }
}

/// Returns `true` if both sides of `size` are finite and strictly positive.
#[must_use]
pub fn is_valid_size(size: Size) -> bool {
    size.width.is_finite() && size.height.is_finite() && size.width > 0.0 && size.height > 0.0
}

pub(crate) fn check_size(size: Size) -> Result<Size, ViewError> {
    if is_valid_size(size) {
        Ok(size)
    } else {
        Err(ViewError::dimension(size))
    }
}

/// Error returned when parsing a block key such as `"3,-1"` fails.
#[derive(Clone, Copy, Debug, PartialEq, Eq, thiserror::Error)]
pub enum ParseBlockCoordinateError {
    /// The key did not contain exactly one `,` separator.
    #[error("block key must have the form `bx,by`")]
    MissingSeparator,
    /// One of the two components was not an integer.
    #[error("block key component is not an integer")]
    InvalidComponent,
}
