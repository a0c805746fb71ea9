// Copyright 2025 the Boundless Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use boundless_view::{ViewConfig, ViewError, ViewportEngine};
use kurbo::{Point, Vec2};

use crate::drag::DragState;
use crate::pinch::PinchState;
use crate::wheel::WheelZoom;

/// Pointer buttons the controller distinguishes.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PointerButton {
    /// Usually the left mouse button.
    Primary,
    /// Usually the right mouse button.
    Secondary,
    /// Usually the wheel button.
    Auxiliary,
}

/// What the active gesture is, as seen from outside.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GesturePhase {
    /// No gesture in progress.
    Idle,
    /// One pointer or finger is panning the view.
    Dragging,
    /// Two fingers are panning and zooming the view.
    Pinching,
}

/// Routes raw pointer, wheel, and touch input into a [`ViewportEngine`].
///
/// Only the primary button drags. A single touch drags, two touches pinch,
/// and any other number of touches ends the active gesture.
#[derive(Debug, Clone, Default)]
pub struct PanZoomController {
    drag: DragState,
    pinch: PinchState,
    wheel: WheelZoom,
}

impl PanZoomController {
    /// Creates a controller using the wheel steps from `config`.
    pub fn new(config: &ViewConfig) -> Result<Self, ViewError> {
        Ok(Self {
            drag: DragState::default(),
            pinch: PinchState::default(),
            wheel: WheelZoom::from_config(config)?,
        })
    }

    /// Current gesture phase.
    #[must_use]
    pub fn phase(&self) -> GesturePhase {
        if self.pinch.is_active() {
            GesturePhase::Pinching
        } else if self.drag.is_dragging() {
            GesturePhase::Dragging
        } else {
            GesturePhase::Idle
        }
    }

    /// Handles a button press. Returns `true` if a drag started.
    pub fn pointer_down(&mut self, at: Point, button: PointerButton) -> bool {
        if button != PointerButton::Primary {
            return false;
        }
        self.pinch.end();
        self.drag.begin(at);
        self.drag.is_dragging()
    }

    /// Handles pointer movement, panning while a drag is active.
    pub fn pointer_move(&mut self, at: Point, engine: &mut ViewportEngine) -> Option<Vec2> {
        self.drag.move_to(at, engine)
    }

    /// Handles button release. Returns the finished drag's total offset.
    pub fn pointer_up(&mut self) -> Option<Vec2> {
        self.drag.end()
    }

    /// Handles loss of pointer capture; behaves like a release.
    pub fn capture_lost(&mut self) {
        self.drag.end();
        self.pinch.end();
    }

    /// Handles a wheel event at `at`. Returns `Ok(true)` if the view zoomed.
    pub fn wheel(
        &mut self,
        at: Point,
        delta_y: f64,
        engine: &mut ViewportEngine,
    ) -> Result<bool, ViewError> {
        self.wheel.apply(engine, at, delta_y)
    }

    /// Handles any touch start, move, or end with the full list of current
    /// touch points.
    pub fn touches(
        &mut self,
        points: &[Point],
        engine: &mut ViewportEngine,
    ) -> Result<GesturePhase, ViewError> {
        match *points {
            [single] => {
                if self.pinch.is_active() {
                    // Lifting one finger of a pinch continues as a drag from here.
                    self.pinch.end();
                    self.drag.begin(single);
                } else if self.drag.is_dragging() {
                    self.drag.move_to(single, engine);
                } else {
                    self.drag.begin(single);
                }
            }
            [a, b] => {
                self.drag.end();
                if self.pinch.is_active() {
                    self.pinch.update(a, b, engine)?;
                } else {
                    self.pinch.begin(a, b);
                }
            }
            _ => {
                self.drag.end();
                self.pinch.end();
            }
        }
        Ok(self.phase())
    }
}

#[cfg(test)]
mod tests {
    use boundless_view::{ViewConfig, ViewportEngine};
    use kurbo::{Point, Size, Vec2};

    use super::{GesturePhase, PanZoomController, PointerButton};

    fn engine() -> ViewportEngine {
        let mut engine = ViewportEngine::default();
        engine.set_viewport_size(Size::new(800.0, 600.0));
        engine
    }

    #[test]
    fn only_primary_button_drags() {
        let mut engine = engine();
        let mut ctl = PanZoomController::default();

        assert!(!ctl.pointer_down(Point::new(1.0, 1.0), PointerButton::Secondary));
        assert_eq!(ctl.pointer_move(Point::new(50.0, 50.0), &mut engine), None);
        assert_eq!(engine.pan(), Vec2::ZERO);

        assert!(ctl.pointer_down(Point::new(1.0, 1.0), PointerButton::Primary));
        ctl.pointer_move(Point::new(21.0, -9.0), &mut engine);
        assert_eq!(engine.pan(), Vec2::new(20.0, -10.0));
        assert_eq!(ctl.pointer_up(), Some(Vec2::new(20.0, -10.0)));
        assert_eq!(ctl.phase(), GesturePhase::Idle);
    }

    #[test]
    fn capture_loss_ends_drag() {
        let mut engine = engine();
        let mut ctl = PanZoomController::default();
        ctl.pointer_down(Point::ZERO, PointerButton::Primary);
        ctl.capture_lost();
        assert_eq!(ctl.pointer_move(Point::new(9.0, 9.0), &mut engine), None);
        assert_eq!(ctl.phase(), GesturePhase::Idle);
    }

    #[test]
    fn wheel_uses_configured_steps() {
        let mut engine = engine();
        let config = ViewConfig {
            zoom_in_step: 2.0,
            zoom_out_step: 0.5,
            ..ViewConfig::default()
        };
        let mut ctl = PanZoomController::new(&config).unwrap();

        assert_eq!(ctl.wheel(Point::new(400.0, 300.0), -100.0, &mut engine), Ok(true));
        assert_eq!(engine.scale(), 2.0);
        assert_eq!(ctl.wheel(Point::new(400.0, 300.0), 100.0, &mut engine), Ok(true));
        assert_eq!(engine.scale(), 1.0);
    }

    #[test]
    fn touch_sequence_moves_through_phases() {
        let mut engine = engine();
        let mut ctl = PanZoomController::default();

        let phase = ctl.touches(&[Point::new(100.0, 100.0)], &mut engine).unwrap();
        assert_eq!(phase, GesturePhase::Dragging);
        ctl.touches(&[Point::new(110.0, 100.0)], &mut engine).unwrap();
        assert_eq!(engine.pan(), Vec2::new(10.0, 0.0));

        let phase = ctl
            .touches(&[Point::new(300.0, 300.0), Point::new(500.0, 300.0)], &mut engine)
            .unwrap();
        assert_eq!(phase, GesturePhase::Pinching);
        ctl.touches(&[Point::new(200.0, 300.0), Point::new(600.0, 300.0)], &mut engine)
            .unwrap();
        assert!((engine.scale() - 2.0).abs() < 1e-12);

        let phase = ctl.touches(&[Point::new(600.0, 300.0)], &mut engine).unwrap();
        assert_eq!(phase, GesturePhase::Dragging);

        let phase = ctl.touches(&[], &mut engine).unwrap();
        assert_eq!(phase, GesturePhase::Idle);
    }
}
