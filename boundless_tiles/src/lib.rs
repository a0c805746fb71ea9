// Copyright 2025 the Boundless Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Boundless Tiles: request bookkeeping for the blocks around an image.
//!
//! Given the visible block sets produced by `boundless_view` frame after
//! frame, this crate works out what a content backend has to be asked for:
//!
//! - [`VisibilityTracker`]: diff of entered/exited blocks between frames.
//! - [`TileCache`]: per-block state (`Pending`, `Ready`, `Failed`) keyed by
//!   [`BlockCoordinate`](boundless_view::BlockCoordinate).
//! - [`TileScheduler`]: the two combined, issuing at most one
//!   [`TileProvider::request_tile`] per block.
//!
//! The cache lives in memory only and knows nothing about content formats;
//! the provider decides what a tile is.
//!
//! ## Example
//!
//! ```rust
//! use boundless_tiles::{TileProvider, TileScheduler};
//! use boundless_view::BlockCoordinate;
//! use hashbrown::HashSet;
//!
//! #[derive(Default)]
//! struct Queue(Vec<BlockCoordinate>);
//!
//! impl TileProvider for Queue {
//!     fn request_tile(&mut self, coord: BlockCoordinate) {
//!         self.0.push(coord);
//!     }
//! }
//!
//! let mut scheduler = TileScheduler::<String>::new();
//! let mut queue = Queue::default();
//!
//! let visible: HashSet<_> = [BlockCoordinate::new(1, 0)].into_iter().collect();
//! scheduler.sync(&visible, &mut queue);
//! scheduler.sync(&visible, &mut queue);
//! assert_eq!(queue.0, [BlockCoordinate::new(1, 0)]);
//!
//! scheduler.fulfill(BlockCoordinate::new(1, 0), "1,0.png".to_string());
//! assert_eq!(
//!     scheduler.tile(BlockCoordinate::new(1, 0)).map(String::as_str),
//!     Some("1,0.png")
//! );
//! ```
//!
//! This crate is `no_std` and uses `alloc`.

#![no_std]

extern crate alloc;

mod cache;
mod scheduler;
mod tracker;

pub use cache::{TileCache, TileState};
pub use scheduler::{TileProvider, TileScheduler};
pub use tracker::{VisibilityDelta, VisibilityTracker};
