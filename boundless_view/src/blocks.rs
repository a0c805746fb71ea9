// Copyright 2025 the Boundless Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Block grid around the primal image.
//!
//! The plane around the displayed image is tiled with blocks of exactly the
//! displayed size. Block `(0, 0)` holds the image itself; its neighbors are
//! what a tile provider fills in as the user explores.
//!
//! Block math uses a top-left transform origin: a world point `w`, measured in
//! display units from the image's top-left corner, lands on screen at
//! `pan + (offset + w) * scale`. Transforms from a [`ViewportEngine`] scale
//! about the viewport center instead; convert them with
//! [`ViewportTransform::origin_anchored`] first, as [`Viewer`] does.
//!
//! [`ViewportEngine`]: crate::ViewportEngine
//! [`Viewer`]: crate::Viewer

use alloc::vec::Vec;
use core::fmt;
use core::str::FromStr;

use hashbrown::HashSet;
use kurbo::{Rect, Size};

use crate::error::{ParseBlockCoordinateError, is_valid_size};
use crate::layout::Layout;
use crate::transform::ViewportTransform;

/// Integer position of a block in the grid.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct BlockCoordinate {
    /// Column; negative to the left of the image.
    pub bx: i64,
    /// Row; negative above the image.
    pub by: i64,
}

impl BlockCoordinate {
    /// The block containing the original image.
    pub const PRIMAL: Self = Self { bx: 0, by: 0 };

    /// Creates a coordinate.
    #[must_use]
    pub const fn new(bx: i64, by: i64) -> Self {
        Self { bx, by }
    }

    /// Returns `true` for the block containing the original image.
    #[must_use]
    pub const fn is_primal(&self) -> bool {
        self.bx == 0 && self.by == 0
    }

    /// Row-major ordering key: by row, then by column.
    #[must_use]
    pub const fn row_major_key(&self) -> (i64, i64) {
        (self.by, self.bx)
    }
}

/// Formats as the cache key `bx,by`.
impl fmt::Display for BlockCoordinate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{},{}", self.bx, self.by)
    }
}

impl FromStr for BlockCoordinate {
    type Err = ParseBlockCoordinateError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let (bx, by) = s
            .split_once(',')
            .ok_or(ParseBlockCoordinateError::MissingSeparator)?;
        if by.contains(',') {
            return Err(ParseBlockCoordinateError::MissingSeparator);
        }
        let parse = |part: &str| {
            part.trim()
                .parse::<i64>()
                .map_err(|_| ParseBlockCoordinateError::InvalidComponent)
        };
        Ok(Self::new(parse(bx)?, parse(by)?))
    }
}

/// Half-open rectangle of block coordinates, `[start_x, end_x) × [start_y, end_y)`.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct BlockRange {
    /// First visible column.
    pub start_x: i64,
    /// One past the last visible column.
    pub end_x: i64,
    /// First visible row.
    pub start_y: i64,
    /// One past the last visible row.
    pub end_y: i64,
}

impl BlockRange {
    /// Number of blocks in the range, saturating at `u64::MAX`.
    #[must_use]
    pub fn len(&self) -> u64 {
        let w = self.end_x.saturating_sub(self.start_x).max(0).unsigned_abs();
        let h = self.end_y.saturating_sub(self.start_y).max(0).unsigned_abs();
        w.saturating_mul(h)
    }

    /// Returns `true` if the range holds no blocks.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.start_x >= self.end_x || self.start_y >= self.end_y
    }

    /// Returns `true` if `coord` lies in the range.
    #[must_use]
    pub fn contains(&self, coord: BlockCoordinate) -> bool {
        (self.start_x..self.end_x).contains(&coord.bx)
            && (self.start_y..self.end_y).contains(&coord.by)
    }

    /// Iterates every block in row-major order, the primal block included.
    pub fn iter(&self) -> impl Iterator<Item = BlockCoordinate> + '_ {
        (self.start_y..self.end_y)
            .flat_map(move |by| (self.start_x..self.end_x).map(move |bx| BlockCoordinate { bx, by }))
    }

    /// Iterates the range in row-major order, skipping the primal block.
    pub fn neighbors(&self) -> impl Iterator<Item = BlockCoordinate> + '_ {
        self.iter().filter(|c| !c.is_primal())
    }
}

/// Most blocks [`visible_blocks`] enumerates, and most lines per axis
/// [`grid_lines`] draws.
///
/// Far enough out, a tiny scale or a sliver-shaped image can put billions of
/// blocks on screen. Past this bound both functions return nothing and log a
/// warning; [`block_range`] still reports the true extent.
pub const MAX_VISIBLE_BLOCKS: u64 = 1 << 16;

/// Computes the blocks intersecting the viewport, including the primal block.
///
/// Returns `None` while there is nothing to compute against: a zero or
/// non-finite block size, a viewport without area, or an unusable transform.
#[must_use]
pub fn block_range(
    layout: &Layout,
    transform: &ViewportTransform,
    viewport: Size,
) -> Option<BlockRange> {
    let block = layout.display_size;
    let scale = transform.scale;
    if !is_valid_size(block)
        || !is_valid_size(viewport)
        || !scale.is_finite()
        || scale <= 0.0
        || !transform.pan.is_finite()
        || !layout.offset.is_finite()
    {
        return None;
    }

    // Visible window in world units, origin at the image's top-left corner.
    let left = (-transform.pan.x - layout.offset.x * scale) / scale;
    let top = (-transform.pan.y - layout.offset.y * scale) / scale;
    let right = left + viewport.width / scale;
    let bottom = top + viewport.height / scale;

    Some(BlockRange {
        start_x: floor_to_i64(left / block.width),
        end_x: ceil_to_i64(right / block.width),
        start_y: floor_to_i64(top / block.height),
        end_y: ceil_to_i64(bottom / block.height),
    })
}

/// Returns the neighbor blocks currently visible in the viewport.
///
/// The primal block `(0, 0)` is never part of the result. Degenerate inputs
/// (see [`block_range`]) yield an empty set; they are a normal transient state
/// before the image loads or the container is measured. A range holding more
/// than [`MAX_VISIBLE_BLOCKS`] blocks also yields an empty set.
///
/// ```
/// use kurbo::{Point, Size, Vec2};
/// use boundless_view::{BlockCoordinate, Layout, ViewportTransform, visible_blocks};
///
/// let layout = Layout { display_size: Size::new(800.0, 600.0), offset: Point::ZERO };
/// let transform = ViewportTransform::new(Vec2::new(-900.0, 0.0), 1.0);
/// let visible = visible_blocks(&layout, &transform, Size::new(800.0, 600.0));
/// assert!(visible.contains(&BlockCoordinate::new(1, 0)));
/// assert!(visible.contains(&BlockCoordinate::new(2, 0)));
/// ```
#[must_use]
pub fn visible_blocks(
    layout: &Layout,
    transform: &ViewportTransform,
    viewport: Size,
) -> HashSet<BlockCoordinate> {
    let Some(range) = block_range(layout, transform, viewport) else {
        return HashSet::new();
    };
    if range.len() > MAX_VISIBLE_BLOCKS {
        tracing::warn!(
            blocks = range.len(),
            max = MAX_VISIBLE_BLOCKS,
            "too many visible blocks, skipping enumeration"
        );
        return HashSet::new();
    }
    let visible: HashSet<_> = range.neighbors().collect();
    tracing::debug!(
        block_w = layout.display_size.width,
        block_h = layout.display_size.height,
        visible = visible.len(),
        "visible blocks"
    );
    visible
}

/// Screen rectangle covered by `coord`.
#[must_use]
pub fn block_screen_rect(
    layout: &Layout,
    transform: &ViewportTransform,
    coord: BlockCoordinate,
) -> Rect {
    let scale = transform.scale;
    let block = layout.display_size;
    let x0 = transform.pan.x + (layout.offset.x + coord.bx as f64 * block.width) * scale;
    let y0 = transform.pan.y + (layout.offset.y + coord.by as f64 * block.height) * scale;
    Rect::new(
        x0,
        y0,
        x0 + block.width * scale,
        y0 + block.height * scale,
    )
}

/// Screen positions of block boundaries.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct GridLines {
    /// X coordinates of vertical lines, ascending.
    pub vertical: Vec<f64>,
    /// Y coordinates of horizontal lines, ascending.
    pub horizontal: Vec<f64>,
}

impl GridLines {
    /// Returns `true` if there are no lines to draw.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.vertical.is_empty() && self.horizontal.is_empty()
    }
}

/// Block boundary lines covering the viewport, plus `overscan` extra lines
/// beyond each edge so that lines do not pop in while panning.
///
/// Returns no lines when either axis would need more than
/// [`MAX_VISIBLE_BLOCKS`] of them.
#[must_use]
pub fn grid_lines(
    layout: &Layout,
    transform: &ViewportTransform,
    viewport: Size,
    overscan: u32,
) -> GridLines {
    let Some(range) = block_range(layout, transform, viewport) else {
        return GridLines::default();
    };
    let scale = transform.scale;
    let origin_x = transform.pan.x + layout.offset.x * scale;
    let origin_y = transform.pan.y + layout.offset.y * scale;
    let step_x = layout.display_size.width * scale;
    let step_y = layout.display_size.height * scale;
    let pad = i64::from(overscan);
    let span = |start: i64, end: i64| {
        end.saturating_add(pad)
            .saturating_sub(start.saturating_sub(pad))
            .unsigned_abs()
    };
    let (columns, rows) = (
        span(range.start_x, range.end_x),
        span(range.start_y, range.end_y),
    );
    if columns.max(rows) >= MAX_VISIBLE_BLOCKS {
        tracing::warn!(columns, rows, "too many grid lines, skipping");
        return GridLines::default();
    }

    let lines = |start: i64, end: i64, origin: f64, step: f64| -> Vec<f64> {
        (start.saturating_sub(pad)..=end.saturating_add(pad))
            .map(|i| origin + i as f64 * step)
            .collect()
    };

    GridLines {
        vertical: lines(range.start_x, range.end_x, origin_x, step_x),
        horizontal: lines(range.start_y, range.end_y, origin_y, step_y),
    }
}

#[expect(
    clippy::cast_possible_truncation,
    reason = "float to int casts saturate, which is the intended behavior far from the origin"
)]
fn floor_to_i64(v: f64) -> i64 {
    libm::floor(v) as i64
}

#[expect(
    clippy::cast_possible_truncation,
    reason = "float to int casts saturate, which is the intended behavior far from the origin"
)]
fn ceil_to_i64(v: f64) -> i64 {
    libm::ceil(v) as i64
}
