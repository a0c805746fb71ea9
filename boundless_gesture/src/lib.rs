// Copyright 2025 the Boundless Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Boundless Gesture: input state machines for a Boundless viewport.
//!
//! This crate turns normalized input into operations on a
//! [`boundless_view::ViewportEngine`]:
//!
//! - [`drag`]: pointer capture from press to release, producing pan deltas
//! - [`wheel`]: wheel notches mapped to fixed zoom steps
//! - [`pinch`]: two-finger pan and zoom about the finger midpoint
//! - [`PanZoomController`]: routes pointer, wheel, and touch events to the above
//!
//! It does not listen to any event source. Hosts translate their own events
//! into screen-space positions relative to the viewport's top-left corner and
//! call the matching method; every call completes synchronously.
//!
//! ## Example
//!
//! ```rust
//! use kurbo::{Point, Size, Vec2};
//! use boundless_gesture::{PanZoomController, PointerButton};
//! use boundless_view::ViewportEngine;
//!
//! let mut engine = ViewportEngine::default();
//! engine.set_viewport_size(Size::new(800.0, 600.0));
//! let mut input = PanZoomController::default();
//!
//! input.pointer_down(Point::new(100.0, 100.0), PointerButton::Primary);
//! input.pointer_move(Point::new(60.0, 100.0), &mut engine);
//! input.pointer_up();
//! assert_eq!(engine.pan(), Vec2::new(-40.0, 0.0));
//!
//! // Scroll towards the user to zoom in under the cursor.
//! input.wheel(Point::new(400.0, 300.0), -1.0, &mut engine).unwrap();
//! assert!(engine.scale() > 1.0);
//! ```
//!
//! This crate is `no_std`.

#![no_std]

mod controller;
pub mod drag;
pub mod pinch;
pub mod wheel;

pub use controller::{GesturePhase, PanZoomController, PointerButton};
pub use drag::{DragSession, DragState};
pub use pinch::{PinchState, PinchStep};
pub use wheel::WheelZoom;
