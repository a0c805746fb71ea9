// Copyright 2025 the Boundless Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Tile cache keyed by block coordinate.

use boundless_view::{BlockCoordinate, BlockRange};
use hashbrown::HashMap;

/// Lifecycle of one tile.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum TileState<T> {
    /// Requested from the provider, no answer yet.
    Pending,
    /// Content delivered.
    Ready(T),
    /// The provider gave up; requesting again retries.
    Failed,
}

impl<T> TileState<T> {
    /// Content, if ready.
    #[must_use]
    pub fn content(&self) -> Option<&T> {
        match self {
            Self::Ready(content) => Some(content),
            Self::Pending | Self::Failed => None,
        }
    }
}

/// Per-block tile content and request state.
///
/// Lookups are by [`BlockCoordinate`] identity: requesting the same block
/// twice issues one request, and delivered content is returned unchanged
/// for as long as the entry is kept.
#[derive(Clone, Debug)]
pub struct TileCache<T> {
    tiles: HashMap<BlockCoordinate, TileState<T>>,
}

impl<T> Default for TileCache<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T> TileCache<T> {
    /// Creates an empty cache.
    #[must_use]
    pub fn new() -> Self {
        Self {
            tiles: HashMap::new(),
        }
    }

    /// Marks `coord` as requested.
    ///
    /// Returns `true` if the caller should actually ask the provider: the
    /// block was unknown or its last request failed. The primal block is never
    /// requested.
    pub fn request(&mut self, coord: BlockCoordinate) -> bool {
        if coord.is_primal() {
            return false;
        }
        match self.tiles.get(&coord) {
            Some(TileState::Pending | TileState::Ready(_)) => false,
            Some(TileState::Failed) | None => {
                self.tiles.insert(coord, TileState::Pending);
                true
            }
        }
    }

    /// Stores delivered content for `coord`, replacing any previous state.
    pub fn fulfill(&mut self, coord: BlockCoordinate, content: T) {
        self.tiles.insert(coord, TileState::Ready(content));
    }

    /// Records that the pending request for `coord` failed.
    ///
    /// Only a `Pending` entry changes. Ready content is kept, and failures for
    /// blocks that were never requested or have been evicted are ignored.
    pub fn fail(&mut self, coord: BlockCoordinate) {
        if let Some(state @ TileState::Pending) = self.tiles.get_mut(&coord) {
            *state = TileState::Failed;
            tracing::debug!(%coord, "tile request failed");
        } else {
            tracing::trace!(%coord, "ignoring failure without a pending request");
        }
    }

    /// State of `coord`, if it was ever requested.
    #[must_use]
    pub fn state(&self, coord: BlockCoordinate) -> Option<&TileState<T>> {
        self.tiles.get(&coord)
    }

    /// Content for `coord`, if ready.
    #[must_use]
    pub fn get(&self, coord: BlockCoordinate) -> Option<&T> {
        self.tiles.get(&coord).and_then(TileState::content)
    }

    /// Drops every entry outside `range`, returning how many were removed.
    pub fn retain_within(&mut self, range: &BlockRange) -> usize {
        let before = self.tiles.len();
        self.tiles.retain(|coord, _| range.contains(*coord));
        before - self.tiles.len()
    }

    /// Number of entries in any state.
    #[must_use]
    pub fn len(&self) -> usize {
        self.tiles.len()
    }

    /// Returns `true` if the cache has no entries.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.tiles.is_empty()
    }

    /// Removes all entries.
    pub fn clear(&mut self) {
        self.tiles.clear();
    }
}
