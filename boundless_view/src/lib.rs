// Copyright 2025 the Boundless Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Boundless View: viewport math for an endless canvas around one image.
//!
//! This crate is the headless core of an image viewer whose view extends
//! past the edges of the image into a grid of same-sized "blocks". It covers:
//! - Layout: fitting the image into its container with "contain" semantics.
//! - Transform: pan and zoom state, with zoom anchored under the cursor and
//!   scale clamped to configurable limits.
//! - Blocks: which neighbor blocks around the image are currently visible.
//!
//! It does **not** fetch images, draw anything, or listen to input. Callers
//! are expected to:
//! - Feed natural image sizes and container sizes into a [`Viewer`] (or call
//!   [`resolve_layout`] directly).
//! - Turn pointer and wheel input into [`ViewportEngine::pan_by`] and
//!   [`ViewportEngine::zoom_at`] calls (see `boundless_gesture`).
//! - Draw the image with [`Viewer::draw_transform`] and placeholders for
//!   [`Viewer::visible_blocks`] (see `boundless_tiles` for request tracking).
//!
//! ## Minimal example
//!
//! ```rust
//! use kurbo::{Point, Size};
//! use boundless_view::{BlockCoordinate, Viewer};
//!
//! let mut viewer = Viewer::default();
//! viewer.set_natural_size(Size::new(1600.0, 1200.0)).unwrap();
//! viewer.set_container_size(Size::new(800.0, 600.0)).unwrap();
//!
//! // The image fills the container exactly, so only the primal block shows.
//! assert!(viewer.visible_blocks().is_empty());
//!
//! // Drag the view left by more than one block width.
//! viewer.engine_mut().pan_by(-900.0, 0.0);
//! assert!(viewer.visible_blocks().contains(&BlockCoordinate::new(1, 0)));
//!
//! // Zoom in under the cursor.
//! viewer.engine_mut().zoom_at(Point::new(100.0, 100.0), 1.1).unwrap();
//! ```
//!
//! ## Coordinate spaces
//!
//! - Screen space: pixels from the viewport's top-left corner.
//! - World space: unscaled display units. [`ViewportTransform::to_screen`]
//!   and [`ViewportTransform::to_world`] scale about the viewport center.
//! - Block math measures world space from the image's top-left corner and
//!   scales about the viewport's top-left corner; see the [`blocks`] module.
//!   [`ViewportTransform::origin_anchored`] converts between the two, and
//!   [`Viewer`] does so for you.
//!
//! This crate is `no_std` and uses `alloc`.

#![no_std]

extern crate alloc;

pub mod blocks;
mod config;
mod error;
mod layout;
mod transform;
mod viewer;

pub use blocks::{
    BlockCoordinate, BlockRange, GridLines, MAX_VISIBLE_BLOCKS, block_range, block_screen_rect,
    grid_lines, visible_blocks,
};
pub use config::{FrameMargins, ScaleLimits, ViewConfig};
pub use error::{ParseBlockCoordinateError, ViewError, is_valid_size};
pub use layout::{Layout, fit_frame, resolve_layout};
pub use transform::{ViewportEngine, ViewportTransform};
pub use viewer::Viewer;
