// Copyright 2025 the Boundless Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use hashbrown::HashSet;
use kurbo::{Affine, Rect, Size};

use crate::blocks::{
    BlockCoordinate, BlockRange, GridLines, block_range, block_screen_rect, grid_lines,
    visible_blocks,
};
use crate::config::ViewConfig;
use crate::error::{ViewError, check_size};
use crate::layout::{Layout, resolve_layout};
use crate::transform::{ViewportEngine, ViewportTransform};

/// One image viewer: sizes in, layout, transform, and visible blocks out.
///
/// The layout is recomputed whenever the natural image size or the container
/// size changes and is never kept across a resize. Until both sizes are known
/// there is no layout and no visible block.
#[derive(Clone, Debug)]
pub struct Viewer {
    config: ViewConfig,
    natural: Option<Size>,
    container: Option<Size>,
    layout: Option<Layout>,
    engine: ViewportEngine,
}

impl Viewer {
    /// Creates a viewer with the given configuration.
    pub fn new(config: ViewConfig) -> Result<Self, ViewError> {
        config.validate()?;
        Ok(Self {
            config,
            natural: None,
            container: None,
            layout: None,
            engine: ViewportEngine::new(config.scale_limits),
        })
    }

    /// Configuration this viewer was built with.
    #[must_use]
    pub fn config(&self) -> &ViewConfig {
        &self.config
    }

    /// Records the natural size of a newly loaded image.
    ///
    /// The transform is kept; call [`ViewportEngine::reset`] through
    /// [`Viewer::engine_mut`] to start the new image from the identity view.
    pub fn set_natural_size(&mut self, natural: Size) -> Result<(), ViewError> {
        self.natural = Some(check_size(natural)?);
        self.refresh_layout()
    }

    /// Records a new container size.
    pub fn set_container_size(&mut self, container: Size) -> Result<(), ViewError> {
        let container = check_size(container)?;
        self.container = Some(container);
        self.engine.set_viewport_size(container);
        self.refresh_layout()
    }

    /// Natural image size, if an image has loaded.
    #[must_use]
    pub fn natural_size(&self) -> Option<Size> {
        self.natural
    }

    /// Container size, if it has been measured.
    #[must_use]
    pub fn container_size(&self) -> Option<Size> {
        self.container
    }

    /// Current layout, once both sizes are known.
    #[must_use]
    pub fn layout(&self) -> Option<Layout> {
        self.layout
    }

    /// The transform engine.
    #[must_use]
    pub fn engine(&self) -> &ViewportEngine {
        &self.engine
    }

    /// Mutable access to the transform engine, for pan and zoom.
    pub fn engine_mut(&mut self) -> &mut ViewportEngine {
        &mut self.engine
    }

    /// Transform from container-local coordinates to screen coordinates.
    ///
    /// Content laid out in the container (the image at [`Layout::offset`],
    /// block placeholders around it) is drawn through this transform; it
    /// scales about the viewport center like the engine does.
    #[must_use]
    pub fn draw_transform(&self) -> Affine {
        let t = self.block_transform();
        Affine::translate(t.pan) * Affine::scale(t.scale)
    }

    /// Screen rectangle of the displayed image, once laid out.
    #[must_use]
    pub fn image_screen_rect(&self) -> Option<Rect> {
        self.block_screen_rect(BlockCoordinate::PRIMAL)
    }

    /// Screen rectangle of any block, once laid out.
    #[must_use]
    pub fn block_screen_rect(&self, coord: BlockCoordinate) -> Option<Rect> {
        let layout = self.layout?;
        Some(block_screen_rect(&layout, &self.block_transform(), coord))
    }

    /// Range of blocks intersecting the container, primal block included.
    #[must_use]
    pub fn block_range(&self) -> Option<BlockRange> {
        let (layout, container) = self.layout.zip(self.container)?;
        block_range(&layout, &self.block_transform(), container)
    }

    /// Neighbor blocks visible in the container.
    #[must_use]
    pub fn visible_blocks(&self) -> HashSet<BlockCoordinate> {
        match self.layout.zip(self.container) {
            Some((layout, container)) => {
                visible_blocks(&layout, &self.block_transform(), container)
            }
            None => HashSet::new(),
        }
    }

    /// Block boundary lines with the configured overscan.
    #[must_use]
    pub fn grid_lines(&self) -> GridLines {
        match self.layout.zip(self.container) {
            Some((layout, container)) => grid_lines(
                &layout,
                &self.block_transform(),
                container,
                self.config.grid_overscan,
            ),
            None => GridLines::default(),
        }
    }

    /// Engine transform re-expressed with a top-left scale origin.
    fn block_transform(&self) -> ViewportTransform {
        self.engine
            .transform()
            .origin_anchored(self.engine.viewport_center())
    }

    fn refresh_layout(&mut self) -> Result<(), ViewError> {
        let (Some(natural), Some(container)) = (self.natural, self.container) else {
            return Ok(());
        };
        let layout = resolve_layout(natural, container)?;
        tracing::debug!(
            width = layout.display_size.width,
            height = layout.display_size.height,
            x = layout.offset.x,
            y = layout.offset.y,
            "layout resolved"
        );
        self.layout = Some(layout);
        Ok(())
    }
}

impl Default for Viewer {
    fn default() -> Self {
        let config = ViewConfig::default();
        Self {
            config,
            natural: None,
            container: None,
            layout: None,
            engine: ViewportEngine::new(config.scale_limits),
        }
    }
}
