// Copyright 2025 the Boundless Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use boundless_view::{BlockCoordinate, BlockRange};
use hashbrown::HashSet;

use crate::cache::TileCache;
use crate::tracker::{VisibilityDelta, VisibilityTracker};

/// Source of tile content, such as an image generation backend.
///
/// Implementations are expected to answer asynchronously by calling
/// [`TileScheduler::fulfill`] or [`TileScheduler::fail`] later; the
/// scheduler itself never blocks.
pub trait TileProvider {
    /// Asks for the content of `coord`.
    fn request_tile(&mut self, coord: BlockCoordinate);
}

impl<P: TileProvider + ?Sized> TileProvider for &mut P {
    fn request_tile(&mut self, coord: BlockCoordinate) {
        (**self).request_tile(coord);
    }
}

/// Issues one provider request per newly visible, not yet cached block.
#[derive(Clone, Debug)]
pub struct TileScheduler<T> {
    tracker: VisibilityTracker,
    cache: TileCache<T>,
}

impl<T> Default for TileScheduler<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T> TileScheduler<T> {
    /// Creates a scheduler with an empty cache.
    #[must_use]
    pub fn new() -> Self {
        Self {
            tracker: VisibilityTracker::new(),
            cache: TileCache::new(),
        }
    }

    /// Diffs `visible` against the previous frame and requests entered blocks
    /// that have no content and no request in flight.
    ///
    /// Returns the visibility delta so the caller can also fade placeholders
    /// in and out.
    pub fn sync(
        &mut self,
        visible: &HashSet<BlockCoordinate>,
        mut provider: impl TileProvider,
    ) -> VisibilityDelta {
        let delta = self.tracker.update(visible);
        for &coord in &delta.entered {
            if self.cache.request(coord) {
                tracing::trace!(%coord, "requesting tile");
                provider.request_tile(coord);
            }
        }
        delta
    }

    /// Stores content delivered by the provider.
    pub fn fulfill(&mut self, coord: BlockCoordinate, content: T) {
        self.cache.fulfill(coord, content);
    }

    /// Records a failed request; the block is requested again the next time it
    /// enters the view.
    pub fn fail(&mut self, coord: BlockCoordinate) {
        self.cache.fail(coord);
    }

    /// Content for `coord`, if ready.
    #[must_use]
    pub fn tile(&self, coord: BlockCoordinate) -> Option<&T> {
        self.cache.get(coord)
    }

    /// The underlying cache.
    #[must_use]
    pub fn cache(&self) -> &TileCache<T> {
        &self.cache
    }

    /// The underlying visibility tracker.
    #[must_use]
    pub fn tracker(&self) -> &VisibilityTracker {
        &self.tracker
    }

    /// Evicts cached tiles outside `keep`.
    pub fn evict_outside(&mut self, keep: &BlockRange) -> usize {
        self.cache.retain_within(keep)
    }

    /// Forgets everything, e.g. when a different image is loaded.
    pub fn reset(&mut self) {
        self.tracker.clear();
        self.cache.clear();
    }
}
