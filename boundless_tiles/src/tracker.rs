// Copyright 2025 the Boundless Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Visibility tracker: which blocks entered or left view since the last frame.

use alloc::vec::Vec;

use boundless_view::BlockCoordinate;
use hashbrown::HashSet;

/// Blocks that changed visibility between two updates.
///
/// Both lists are in row-major order so downstream requests are issued in a
/// stable order regardless of hash iteration order.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct VisibilityDelta {
    /// Blocks visible now but not before.
    pub entered: Vec<BlockCoordinate>,
    /// Blocks visible before but not now.
    pub exited: Vec<BlockCoordinate>,
}

impl VisibilityDelta {
    /// Returns `true` if nothing changed.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entered.is_empty() && self.exited.is_empty()
    }
}

/// Remembers the last visible set and diffs new sets against it.
///
/// # Example
///
/// ```
/// use boundless_tiles::VisibilityTracker;
/// use boundless_view::BlockCoordinate;
/// use hashbrown::HashSet;
///
/// let mut tracker = VisibilityTracker::new();
/// let first: HashSet<_> = [BlockCoordinate::new(1, 0)].into_iter().collect();
/// let delta = tracker.update(&first);
/// assert_eq!(delta.entered, [BlockCoordinate::new(1, 0)]);
///
/// let second: HashSet<_> = [BlockCoordinate::new(2, 0)].into_iter().collect();
/// let delta = tracker.update(&second);
/// assert_eq!(delta.entered, [BlockCoordinate::new(2, 0)]);
/// assert_eq!(delta.exited, [BlockCoordinate::new(1, 0)]);
/// ```
#[derive(Clone, Debug, Default)]
pub struct VisibilityTracker {
    visible: HashSet<BlockCoordinate>,
    /// Incremented on every update that changed the visible set.
    generation: u64,
}

impl VisibilityTracker {
    /// Creates a tracker with nothing visible.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Blocks visible as of the last update.
    #[must_use]
    pub fn visible(&self) -> &HashSet<BlockCoordinate> {
        &self.visible
    }

    /// Number of updates that changed the visible set.
    #[must_use]
    pub fn generation(&self) -> u64 {
        self.generation
    }

    /// Replaces the visible set and reports the difference.
    pub fn update(&mut self, visible: &HashSet<BlockCoordinate>) -> VisibilityDelta {
        let mut entered: Vec<_> = visible.difference(&self.visible).copied().collect();
        let mut exited: Vec<_> = self.visible.difference(visible).copied().collect();
        entered.sort_unstable_by_key(BlockCoordinate::row_major_key);
        exited.sort_unstable_by_key(BlockCoordinate::row_major_key);

        let delta = VisibilityDelta { entered, exited };
        if !delta.is_empty() {
            self.visible.clone_from(visible);
            self.generation += 1;
            tracing::debug!(
                entered = delta.entered.len(),
                exited = delta.exited.len(),
                generation = self.generation,
                "visible blocks changed"
            );
        }
        delta
    }

    /// Forgets the visible set, e.g. when a new image loads.
    pub fn clear(&mut self) {
        if !self.visible.is_empty() {
            self.visible.clear();
            self.generation += 1;
        }
    }
}
