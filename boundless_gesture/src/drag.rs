// Copyright 2025 the Boundless Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Drag capture: turn pointer positions into pan deltas.
//!
//! ## Usage
//!
//! 1) On pointer down, call [`DragState::begin`] with the screen position.
//! 2) On each move, call [`DragState::move_to`]; the delta since the previous
//!    position is applied to the engine with [`ViewportEngine::pan_by`].
//! 3) On pointer up or lost capture, call [`DragState::end`]. Nothing of the
//!    session survives it.
//!
//! ## Minimal example
//!
//! ```
//! use kurbo::{Point, Vec2};
//! use boundless_gesture::drag::DragState;
//! use boundless_view::ViewportEngine;
//!
//! let mut engine = ViewportEngine::default();
//! let mut drag = DragState::default();
//!
//! drag.begin(Point::new(10.0, 20.0));
//! assert!(drag.is_dragging());
//!
//! let delta = drag.move_to(Point::new(15.0, 25.0), &mut engine).unwrap();
//! assert_eq!(delta, Vec2::new(5.0, 5.0));
//! assert_eq!(engine.pan(), Vec2::new(5.0, 5.0));
//!
//! assert_eq!(drag.end(), Some(Vec2::new(5.0, 5.0)));
//! assert!(!drag.is_dragging());
//! ```

use boundless_view::ViewportEngine;
use kurbo::{Point, Vec2};

/// A single captured drag, from pointer down to release.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct DragSession {
    start: Point,
    last: Point,
}

impl DragSession {
    /// Starts a session at `at`.
    #[must_use]
    pub fn begin(at: Point) -> Self {
        Self { start: at, last: at }
    }

    /// Position where the drag started.
    #[must_use]
    pub fn start(&self) -> Point {
        self.start
    }

    /// Most recent pointer position.
    #[must_use]
    pub fn last(&self) -> Point {
        self.last
    }

    /// Records a new position and returns the movement since the last one.
    pub fn move_to(&mut self, at: Point) -> Vec2 {
        let delta = at - self.last;
        self.last = at;
        delta
    }

    /// Offset from the start position to the most recent position.
    #[must_use]
    pub fn total_offset(&self) -> Vec2 {
        self.last - self.start
    }

    /// Finishes the session, returning its total offset.
    pub fn end(self) -> Vec2 {
        self.total_offset()
    }
}

/// `Idle → Dragging → Idle` state machine over [`DragSession`].
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub enum DragState {
    /// No pointer is captured.
    #[default]
    Idle,
    /// A pointer is captured and moves pan the view.
    Dragging(DragSession),
}

impl DragState {
    /// Captures the pointer at `at`, replacing any session in progress.
    pub fn begin(&mut self, at: Point) {
        if !at.is_finite() {
            tracing::trace!(x = at.x, y = at.y, "ignoring drag start at non-finite point");
            return;
        }
        *self = Self::Dragging(DragSession::begin(at));
    }

    /// Moves the captured pointer and pans `engine` by the movement.
    ///
    /// Returns the applied delta, or `None` while idle or for a non-finite
    /// position.
    pub fn move_to(&mut self, at: Point, engine: &mut ViewportEngine) -> Option<Vec2> {
        let Self::Dragging(session) = self else {
            return None;
        };
        if !at.is_finite() {
            return None;
        }
        let delta = session.move_to(at);
        engine.pan_by(delta.x, delta.y);
        Some(delta)
    }

    /// Releases the pointer, returning the session's total offset if one was active.
    pub fn end(&mut self) -> Option<Vec2> {
        match core::mem::take(self) {
            Self::Dragging(session) => Some(session.end()),
            Self::Idle => None,
        }
    }

    /// Returns `true` while a pointer is captured.
    #[must_use]
    pub fn is_dragging(&self) -> bool {
        matches!(self, Self::Dragging(_))
    }

    /// The active session, if any.
    #[must_use]
    pub fn session(&self) -> Option<&DragSession> {
        match self {
            Self::Dragging(session) => Some(session),
            Self::Idle => None,
        }
    }
}
