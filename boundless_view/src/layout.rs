// Copyright 2025 the Boundless Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use kurbo::{Point, Rect, Size};

use crate::config::FrameMargins;
use crate::error::{ViewError, check_size};

/// Where a source image lands inside its container.
///
/// The display size is also the size of every block in the endless grid
/// around the image.
#[derive(Clone, Copy, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Layout {
    /// Size of the displayed image, in container units.
    pub display_size: Size,
    /// Top-left corner of the displayed image within the container.
    pub offset: Point,
}

impl Layout {
    /// Rectangle covered by the displayed image, in container coordinates.
    #[must_use]
    pub fn display_rect(&self) -> Rect {
        Rect::from_origin_size(self.offset, self.display_size)
    }

    /// Size of one grid block; identical to [`Layout::display_size`].
    #[must_use]
    pub fn block_size(&self) -> Size {
        self.display_size
    }
}

/// Fits an image of `natural` size into `container` with "contain" semantics.
///
/// The result keeps the image aspect ratio, touches the container on at least
/// one axis, and is centered on the other. Both sizes must have finite,
/// strictly positive sides; an image that has not finished loading should not
/// be passed in yet.
///
/// ```
/// use kurbo::{Point, Size};
/// use boundless_view::resolve_layout;
///
/// let layout = resolve_layout(Size::new(1600.0, 1200.0), Size::new(800.0, 800.0)).unwrap();
/// assert_eq!(layout.display_size, Size::new(800.0, 600.0));
/// assert_eq!(layout.offset, Point::new(0.0, 100.0));
/// ```
pub fn resolve_layout(natural: Size, container: Size) -> Result<Layout, ViewError> {
    let natural = check_size(natural)?;
    let container = check_size(container)?;

    let image_aspect = natural.width / natural.height;
    let container_aspect = container.width / container.height;

    let display_size = if container_aspect > image_aspect {
        // Container is relatively wider: pin the height.
        Size::new(container.height * image_aspect, container.height)
    } else {
        Size::new(container.width, container.width / image_aspect)
    };

    let offset = Point::new(
        (container.width - display_size.width) / 2.0,
        (container.height - display_size.height) / 2.0,
    );

    Ok(Layout {
        display_size,
        offset,
    })
}

/// Sizes a viewer frame to the image aspect ratio inside a host window.
///
/// The frame starts as tall as the window allows after `margins`, takes its
/// width from the aspect ratio, and shrinks both sides if that width would not
/// fit horizontally.
pub fn fit_frame(natural: Size, window: Size, margins: FrameMargins) -> Result<Size, ViewError> {
    let natural = check_size(natural)?;
    let available = check_size(Size::new(
        window.width - margins.horizontal,
        window.height - margins.vertical,
    ))?;

    let aspect = natural.width / natural.height;
    let width = (available.height * aspect).min(available.width);
    let height = (width / aspect).min(available.height);
    Ok(Size::new(height * aspect, height))
}
