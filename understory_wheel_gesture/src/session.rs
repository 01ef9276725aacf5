// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! The session controller: one mailbox for every event the gesture logic reads.
//!
//! [`GestureSession`] owns the key state, the panning latch and the
//! configuration for one page/window lifetime. Hosts feed it
//! [`GestureMessage`]s in the order the platform delivers them and act on the
//! returned [`Response`]: suppress the default action, install or remove the
//! pointer-move watch.
//!
//! For wheel messages the session is the first link of a handler chain (see
//! [`crate::handler`]); the caller's fallback handler only sees events the
//! session deferred.
//!
//! ## Minimal example
//!
//! ```
//! use kurbo::{Point, Vec2};
//! use understory_wheel_gesture::camera::CanvasCamera;
//! use understory_wheel_gesture::config::GestureConfig;
//! use understory_wheel_gesture::dispatch::CameraCommand;
//! use understory_wheel_gesture::handler::DeferAll;
//! use understory_wheel_gesture::input::{Key, KeyInput, Modifiers, WheelInput, WheelTarget};
//! use understory_wheel_gesture::session::{GestureMessage, GestureSession};
//!
//! struct View { scale: f64 }
//! impl CanvasCamera for View {
//!     fn scale(&self) -> f64 { self.scale }
//!     fn change_scale(&mut self, scale: f64, _focal: Point) { self.scale = scale; }
//!     fn drag_by(&mut self, _delta: Vec2) {}
//!     fn mark_changed(&mut self) {}
//!     fn drag_enabled(&self) -> bool { true }
//!     fn has_graph(&self) -> bool { true }
//! }
//!
//! let mut session = GestureSession::new(GestureConfig::default()).unwrap();
//! let mut view = View { scale: 1.0 };
//!
//! session.deliver(
//!     GestureMessage::KeyDown(KeyInput::new(Key::Control, Modifiers::CTRL)),
//!     &mut view,
//!     &mut DeferAll,
//! );
//! let wheel = WheelInput::new(Vec2::new(0.0, -50.0), Point::new(100.0, 100.0))
//!     .with_modifiers(Modifiers::CTRL)
//!     .with_target(WheelTarget::canvas());
//! let response = session.deliver(GestureMessage::Wheel(wheel), &mut view, &mut DeferAll);
//!
//! assert!(response.prevent_default);
//! assert!(matches!(response.command, Some(CameraCommand::Zoom { .. })));
//! assert!(view.scale > 1.0);
//! ```

use crate::camera::CanvasCamera;
use crate::classify::{Classification, classify};
use crate::config::{ConfigError, GestureConfig};
use crate::dispatch::{CameraCommand, apply, plan};
use crate::handler::{Chain, WheelGestureHandler, WheelOutcome};
use crate::input::{KeyInput, WheelInput};
use crate::key_state::KeyState;
use crate::panning::{PanLatch, PanMode, PointerWatch};

/// An input event delivered to the session.
#[derive(Copy, Clone, Debug, PartialEq)]
pub enum GestureMessage {
    /// Window keydown.
    KeyDown(KeyInput),
    /// Window keyup.
    KeyUp(KeyInput),
    /// Window lost focus.
    Blur,
    /// Wheel event on the canvas container.
    Wheel(WheelInput),
    /// Pointer moved anywhere on the page.
    PointerMove,
}

/// What the host should do after a message.
#[derive(Copy, Clone, Debug, Default, PartialEq)]
pub struct Response {
    /// Call `preventDefault` on the originating event.
    pub prevent_default: bool,
    /// Install or remove the pointer-move watch.
    pub pointer_watch: Option<PointerWatch>,
    /// The camera command issued, if any.
    pub command: Option<CameraCommand>,
    /// The handler chain's verdict; `None` for non-wheel messages.
    pub outcome: Option<WheelOutcome>,
}

#[derive(Copy, Clone, Debug, Default, PartialEq)]
struct WheelReport {
    command: Option<CameraCommand>,
    watch: Option<PointerWatch>,
}

/// Session-scoped gesture controller.
#[derive(Clone, Debug)]
pub struct GestureSession {
    config: GestureConfig,
    keys: KeyState,
    latch: PanLatch,
    report: WheelReport,
}

impl GestureSession {
    /// Creates a session with nothing held and the latch idle.
    pub fn new(config: GestureConfig) -> Result<Self, ConfigError> {
        config.validate()?;
        Ok(Self {
            config,
            keys: KeyState::new(),
            latch: PanLatch::new(),
            report: WheelReport::default(),
        })
    }

    /// The active configuration.
    #[must_use]
    pub fn config(&self) -> &GestureConfig {
        &self.config
    }

    /// Whether a physical Ctrl-like key is held.
    #[must_use]
    pub fn is_real_ctrl_held(&self) -> bool {
        self.keys.is_real_ctrl_held()
    }

    /// Current panning latch state.
    #[must_use]
    pub fn pan_mode(&self) -> PanMode {
        self.latch.mode()
    }

    /// Whether the host should currently have a pointer-move watch installed.
    #[must_use]
    pub fn is_watching_pointer(&self) -> bool {
        self.latch.is_watching()
    }

    /// Classifies `input` against the current key state without side effects.
    #[must_use]
    pub fn classify(&self, input: &WheelInput) -> Classification {
        classify(input, self.keys.is_real_ctrl_held(), &self.config)
    }

    /// Arms the panning latch, as the canvas's own wheel entry point does.
    ///
    /// Hosts that cannot tag canvas targets on [`WheelInput`] call this from
    /// the canvas's wheel hook instead, and install the returned watch.
    #[must_use = "the host must install the returned pointer-move watch"]
    pub fn arm_panning(&mut self) -> Option<PointerWatch> {
        self.latch.arm()
    }

    /// Processes one message.
    ///
    /// `fallback` receives wheel events the session defers.
    pub fn deliver<C, F>(&mut self, message: GestureMessage, camera: &mut C, fallback: &mut F) -> Response
    where
        C: CanvasCamera + ?Sized,
        F: WheelGestureHandler<C> + ?Sized,
    {
        match message {
            GestureMessage::KeyDown(input) => {
                self.keys.on_key_down(&input);
                Response::default()
            }
            GestureMessage::KeyUp(input) => {
                self.keys.on_key_up(&input);
                Response::default()
            }
            GestureMessage::Blur => {
                self.keys.on_blur();
                Response::default()
            }
            GestureMessage::PointerMove => Response {
                pointer_watch: self.latch.on_pointer_move(),
                ..Response::default()
            },
            GestureMessage::Wheel(input) => self.on_wheel(&input, camera, fallback),
        }
    }

    fn on_wheel<C, F>(&mut self, input: &WheelInput, camera: &mut C, fallback: &mut F) -> Response
    where
        C: CanvasCamera + ?Sized,
        F: WheelGestureHandler<C> + ?Sized,
    {
        let outcome = Chain::new(&mut *self, &mut *fallback).handle(input, camera);
        let report = core::mem::take(&mut self.report);
        let prevent_default = if report.command.is_some() {
            true
        } else {
            // Keep the browser from applying its own page zoom.
            input.ctrl()
        };
        Response {
            prevent_default,
            pointer_watch: report.watch,
            command: report.command,
            outcome: Some(outcome),
        }
    }
}

impl<C: CanvasCamera + ?Sized> WheelGestureHandler<C> for GestureSession {
    fn handle(&mut self, event: &WheelInput, camera: &mut C) -> WheelOutcome {
        // Arming requests the pointer watch even when the event is deferred below.
        self.report = WheelReport {
            command: None,
            watch: self.latch.on_wheel_target(
                &event.target,
                self.config.allow_panning_over_non_scrollable_textareas,
            ),
        };

        if !(camera.has_graph() && camera.drag_enabled() && self.latch.is_active()) {
            tracing::trace!(mode = ?self.latch.mode(), "wheel event deferred");
            return WheelOutcome::Deferred;
        }

        let class = self.classify(event);
        let command = plan(class, event, camera.scale(), &self.config);
        apply(command, camera);
        self.report.command = Some(command);
        WheelOutcome::Handled
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::handler::{DeferAll, from_fn};
    use crate::input::{Key, Modifiers, WheelTarget};
    use kurbo::{Point, Vec2};

    #[derive(Debug)]
    struct Cam {
        scale: f64,
        drag_enabled: bool,
        has_graph: bool,
        drags: u32,
        zooms: u32,
    }

    impl Default for Cam {
        fn default() -> Self {
            Self {
                scale: 1.0,
                drag_enabled: true,
                has_graph: true,
                drags: 0,
                zooms: 0,
            }
        }
    }

    impl CanvasCamera for Cam {
        fn scale(&self) -> f64 {
            self.scale
        }
        fn change_scale(&mut self, scale: f64, _focal: Point) {
            self.scale = scale;
            self.zooms += 1;
        }
        fn drag_by(&mut self, _delta: Vec2) {
            self.drags += 1;
        }
        fn mark_changed(&mut self) {}
        fn drag_enabled(&self) -> bool {
            self.drag_enabled
        }
        fn has_graph(&self) -> bool {
            self.has_graph
        }
    }

    fn session() -> GestureSession {
        GestureSession::new(GestureConfig::default()).unwrap()
    }

    fn canvas_wheel(dy: f64) -> GestureMessage {
        GestureMessage::Wheel(
            WheelInput::new(Vec2::new(0.0, dy), Point::new(50.0, 50.0))
                .with_target(WheelTarget::canvas()),
        )
    }

    #[test]
    fn invalid_config_is_rejected() {
        let err = GestureSession::new(GestureConfig::default().with_zoom_speed(0.0)).unwrap_err();
        assert_eq!(err, ConfigError::ZoomSpeed(0.0));
    }

    #[test]
    fn key_messages_update_state_only() {
        let mut s = session();
        let mut cam = Cam::default();
        let r = s.deliver(
            GestureMessage::KeyDown(KeyInput::new(Key::Control, Modifiers::CTRL)),
            &mut cam,
            &mut DeferAll,
        );
        assert_eq!(r, Response::default());
        assert!(s.is_real_ctrl_held());

        s.deliver(GestureMessage::Blur, &mut cam, &mut DeferAll);
        assert!(!s.is_real_ctrl_held());
    }

    #[test]
    fn canvas_wheel_pans_and_requests_one_watch() {
        let mut s = session();
        let mut cam = Cam::default();

        let first = s.deliver(canvas_wheel(10.0), &mut cam, &mut DeferAll);
        assert_eq!(first.outcome, Some(WheelOutcome::Handled));
        assert_eq!(first.command, Some(CameraCommand::Pan(Vec2::new(0.0, -10.0))));
        assert_eq!(first.pointer_watch, Some(PointerWatch::Install));
        assert!(first.prevent_default);

        let second = s.deliver(canvas_wheel(10.0), &mut cam, &mut DeferAll);
        assert_eq!(second.pointer_watch, None);
        assert_eq!(cam.drags, 2);
    }

    #[test]
    fn disabled_drag_defers_to_fallback() {
        let mut s = session();
        let mut cam = Cam {
            drag_enabled: false,
            ..Cam::default()
        };
        let mut fallback_calls = 0_u32;
        let mut fallback = from_fn(|_: &WheelInput, _: &mut Cam| {
            fallback_calls += 1;
            WheelOutcome::Handled
        });

        let r = s.deliver(canvas_wheel(10.0), &mut cam, &mut fallback);
        assert_eq!(r.outcome, Some(WheelOutcome::Handled));
        assert_eq!(r.command, None);
        assert!(!r.prevent_default);
        drop(fallback);
        assert_eq!(fallback_calls, 1);
        assert_eq!(cam.drags, 0);
    }

    #[test]
    fn deferred_pinch_still_blocks_browser_zoom() {
        let mut s = session();
        let mut cam = Cam {
            has_graph: false,
            ..Cam::default()
        };
        let pinch = WheelInput::new(Vec2::new(0.0, 3.0), Point::ZERO)
            .with_modifiers(Modifiers::CTRL)
            .with_target(WheelTarget::canvas());
        let r = s.deliver(GestureMessage::Wheel(pinch), &mut cam, &mut DeferAll);
        assert_eq!(r.outcome, Some(WheelOutcome::Deferred));
        assert!(r.prevent_default);
        assert_eq!(cam.zooms, 0);
    }

    #[test]
    fn unrelated_targets_defer_while_idle() {
        let mut s = session();
        let mut cam = Cam::default();
        let ev = WheelInput::new(Vec2::new(0.0, 3.0), Point::ZERO);
        let r = s.deliver(GestureMessage::Wheel(ev), &mut cam, &mut DeferAll);
        assert_eq!(r.outcome, Some(WheelOutcome::Deferred));
        assert_eq!(s.pan_mode(), PanMode::Idle);
    }

    #[test]
    fn pointer_move_retires_the_watch() {
        let mut s = session();
        let mut cam = Cam::default();
        s.deliver(canvas_wheel(10.0), &mut cam, &mut DeferAll);
        assert!(s.is_watching_pointer());

        let r = s.deliver(GestureMessage::PointerMove, &mut cam, &mut DeferAll);
        assert_eq!(r.pointer_watch, Some(PointerWatch::Remove));
        assert_eq!(s.pan_mode(), PanMode::Idle);
        assert!(!s.is_watching_pointer());
    }

    #[test]
    fn explicit_arming_lets_other_targets_pan() {
        let mut s = session();
        let mut cam = Cam::default();
        assert_eq!(s.arm_panning(), Some(PointerWatch::Install));
        let ev = WheelInput::new(Vec2::new(0.0, 3.0), Point::ZERO);
        let r = s.deliver(GestureMessage::Wheel(ev), &mut cam, &mut DeferAll);
        assert_eq!(r.outcome, Some(WheelOutcome::Handled));
        assert_eq!(r.pointer_watch, None);
        assert_eq!(cam.drags, 1);
    }

    #[test]
    fn arming_on_a_deferred_event_still_requests_the_watch() {
        let mut s = session();
        let mut cam = Cam {
            has_graph: false,
            ..Cam::default()
        };
        let r = s.deliver(canvas_wheel(10.0), &mut cam, &mut DeferAll);
        assert_eq!(r.outcome, Some(WheelOutcome::Deferred));
        assert_eq!(r.pointer_watch, Some(PointerWatch::Install));
        assert_eq!(s.pan_mode(), PanMode::Override);
        assert!(s.is_watching_pointer());

        let moved = s.deliver(GestureMessage::PointerMove, &mut cam, &mut DeferAll);
        assert_eq!(moved.pointer_watch, Some(PointerWatch::Remove));
        assert_eq!(s.pan_mode(), PanMode::Idle);
    }
}
