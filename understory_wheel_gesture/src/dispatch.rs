// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Camera command planning: turn a classified gesture into a zoom or a pan.
//!
//! [`plan`] is pure; [`apply`] forwards the result to a [`CanvasCamera`].
//!
//! ## Zoom
//!
//! The zoom divisor is `100 / speed / scale`, with `speed` taken from
//! [`GestureConfig::touchpad_zoom_speed`] for pinches and
//! [`GestureConfig::zoom_speed`] otherwise. When Meta is reported the divisor
//! is multiplied by [`GestureConfig::meta_zoom_correction`]. The new scale is
//! `scale - delta_y / divisor`, anchored at the pointer.
//!
//! ## Pan
//!
//! The view is dragged by the negated delta. A notched wheel with Shift held
//! scrolls horizontally: the vertical delta moves to the x axis.
//!
//! ## Minimal example
//!
//! ```
//! use kurbo::{Point, Vec2};
//! use understory_wheel_gesture::classify::classify;
//! use understory_wheel_gesture::config::GestureConfig;
//! use understory_wheel_gesture::dispatch::{CameraCommand, plan};
//! use understory_wheel_gesture::input::WheelInput;
//!
//! let config = GestureConfig::default();
//! let ev = WheelInput::new(Vec2::new(0.0, 20.0), Point::new(5.0, 5.0));
//! let class = classify(&ev, false, &config);
//! assert_eq!(plan(class, &ev, 1.0, &config), CameraCommand::Pan(Vec2::new(0.0, -20.0)));
//! ```

use kurbo::{Point, Vec2};

use crate::camera::CanvasCamera;
use crate::classify::{Classification, Gesture};
use crate::config::GestureConfig;
use crate::input::WheelInput;

/// A single camera operation.
#[derive(Copy, Clone, Debug, PartialEq)]
pub enum CameraCommand {
    /// Set the scale, keeping `focal` fixed.
    Zoom {
        /// Target scale.
        scale: f64,
        /// Anchor in client coordinates.
        focal: Point,
    },
    /// Drag the view by this delta.
    Pan(Vec2),
}

/// Computes the command for a classified wheel event at the current `scale`.
#[must_use]
pub fn plan(
    class: Classification,
    input: &WheelInput,
    scale: f64,
    config: &GestureConfig,
) -> CameraCommand {
    if class.gesture.is_zoom() {
        let speed = if class.gesture == Gesture::Pinch {
            config.touchpad_zoom_speed
        } else {
            config.zoom_speed
        };
        let mut divisor = 100.0 / speed / scale;
        if input.meta() {
            divisor *= config.meta_zoom_correction;
        }
        CameraCommand::Zoom {
            scale: scale - input.delta.y / divisor,
            focal: input.position,
        }
    } else {
        let mut delta = input.delta;
        if !class.touchpad_native && input.shift() {
            delta = Vec2::new(input.delta.y, 0.0);
        }
        CameraCommand::Pan(-delta)
    }
}

/// Issues `command` to `camera` and marks the canvas as changed.
pub fn apply<C: CanvasCamera + ?Sized>(command: CameraCommand, camera: &mut C) {
    tracing::trace!(?command, "applying camera command");
    match command {
        CameraCommand::Zoom { scale, focal } => camera.change_scale(scale, focal),
        CameraCommand::Pan(delta) => camera.drag_by(delta),
    }
    camera.mark_changed();
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::input::Modifiers;

    fn class(gesture: Gesture, touchpad_native: bool) -> Classification {
        Classification {
            gesture,
            touchpad_native,
        }
    }

    fn wheel(dx: f64, dy: f64) -> WheelInput {
        WheelInput::new(Vec2::new(dx, dy), Point::new(320.0, 240.0))
    }

    fn zoom_scale(cmd: CameraCommand) -> f64 {
        match cmd {
            CameraCommand::Zoom { scale, .. } => scale,
            CameraCommand::Pan(_) => panic!("expected a zoom, got {cmd:?}"),
        }
    }

    #[test]
    fn pan_negates_deltas() {
        let config = GestureConfig::default();
        let cmd = plan(class(Gesture::Pan, true), &wheel(3.0, -8.0), 1.0, &config);
        assert_eq!(cmd, CameraCommand::Pan(Vec2::new(-3.0, 8.0)));
    }

    #[test]
    fn shift_on_mouse_wheel_pans_horizontally() {
        let config = GestureConfig::default();
        let ev = wheel(0.0, 100.0).with_modifiers(Modifiers::SHIFT);
        let cmd = plan(class(Gesture::Pan, false), &ev, 1.0, &config);
        assert_eq!(cmd, CameraCommand::Pan(Vec2::new(-100.0, 0.0)));
    }

    #[test]
    fn shift_on_touchpad_keeps_axes() {
        let config = GestureConfig::default();
        let ev = wheel(2.0, 6.0).with_modifiers(Modifiers::SHIFT);
        let cmd = plan(class(Gesture::Pan, true), &ev, 1.0, &config);
        assert_eq!(cmd, CameraCommand::Pan(Vec2::new(-2.0, -6.0)));
    }

    #[test]
    fn pinch_uses_touchpad_speed() {
        let config = GestureConfig::default().with_touchpad_zoom_speed(2.0);
        // divisor = 100 / 2 / 1 = 50; 1 - 10 / 50 = 0.8
        let cmd = plan(class(Gesture::Pinch, true), &wheel(0.0, 10.0), 1.0, &config);
        assert!((zoom_scale(cmd) - 0.8).abs() < 1e-12, "got {cmd:?}");
    }

    #[test]
    fn modifier_zoom_uses_mouse_speed_and_scale() {
        let config = GestureConfig::default().with_zoom_speed(0.5);
        // divisor = 100 / 0.5 / 2 = 100; 2 - (-50) / 100 = 2.5
        let cmd = plan(class(Gesture::ModifierZoom, false), &wheel(0.0, -50.0), 2.0, &config);
        assert!((zoom_scale(cmd) - 2.5).abs() < 1e-12, "got {cmd:?}");
    }

    #[test]
    fn zoom_anchors_at_pointer() {
        let config = GestureConfig::default();
        let cmd = plan(class(Gesture::ScrollZoom, false), &wheel(0.0, 120.0), 1.0, &config);
        match cmd {
            CameraCommand::Zoom { focal, .. } => assert_eq!(focal, Point::new(320.0, 240.0)),
            CameraCommand::Pan(_) => panic!("expected a zoom, got {cmd:?}"),
        }
    }

    #[test]
    fn zoom_ignores_shift_axis_swap() {
        let config = GestureConfig::default();
        let plain = plan(class(Gesture::ScrollZoom, false), &wheel(0.0, 60.0), 1.0, &config);
        let shifted = plan(
            class(Gesture::ScrollZoom, false),
            &wheel(0.0, 60.0).with_modifiers(Modifiers::SHIFT),
            1.0,
            &config,
        );
        assert_eq!(plain, shifted);
    }

    #[test]
    fn meta_inverts_and_damps_zoom() {
        let config = GestureConfig::default();
        let ev = wheel(0.0, -50.0);
        let plain = zoom_scale(plan(class(Gesture::ModifierZoom, false), &ev, 1.0, &config));
        let meta = zoom_scale(plan(
            class(Gesture::ModifierZoom, false),
            &ev.with_modifiers(Modifiers::META),
            1.0,
            &config,
        ));
        assert!(plain > 1.0);
        assert!(meta < 1.0);
        assert!(((1.0 - meta) - (plain - 1.0) / 2.0).abs() < 1e-12);
    }

    #[derive(Default)]
    struct Recorder {
        zoom: Option<(f64, Point)>,
        drag: Option<Vec2>,
        changed: u32,
    }

    impl CanvasCamera for Recorder {
        fn scale(&self) -> f64 {
            1.0
        }
        fn change_scale(&mut self, scale: f64, focal: Point) {
            self.zoom = Some((scale, focal));
        }
        fn drag_by(&mut self, delta: Vec2) {
            self.drag = Some(delta);
        }
        fn mark_changed(&mut self) {
            self.changed += 1;
        }
        fn drag_enabled(&self) -> bool {
            true
        }
        fn has_graph(&self) -> bool {
            true
        }
    }

    #[test]
    fn apply_forwards_and_marks_changed() {
        let mut cam = Recorder::default();
        apply(CameraCommand::Pan(Vec2::new(1.0, 2.0)), &mut cam);
        assert_eq!(cam.drag, Some(Vec2::new(1.0, 2.0)));
        assert_eq!(cam.changed, 1);

        apply(
            CameraCommand::Zoom {
                scale: 1.5,
                focal: Point::new(4.0, 4.0),
            },
            &mut cam,
        );
        assert_eq!(cam.zoom, Some((1.5, Point::new(4.0, 4.0))));
        assert_eq!(cam.changed, 2);
    }
}
