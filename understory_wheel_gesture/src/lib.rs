// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Understory Wheel Gesture: tell trackpad pinches, Ctrl+wheel and plain
//! scrolling apart, and turn each into the right camera command.
//!
//! Browsers deliver trackpad pinch-to-zoom as wheel events with `ctrlKey`
//! set, which looks exactly like a user holding Ctrl while turning a mouse
//! wheel. This crate resolves the ambiguity with the physical key state, tells
//! touchpad deltas from notched-wheel deltas, and maps the result onto a
//! canvas camera as either a zoom about the pointer or a drag.
//!
//! The pieces, leaf first:
//!
//! - [`key_state`]: physical Ctrl/Cmd tracking from keydown/keyup/blur.
//! - [`classify`]: [`Gesture`](classify::Gesture) from a wheel event and the key state.
//! - [`panning`]: the panning latch, cleared by the next pointer movement.
//! - [`dispatch`]: the zoom or pan command for a classified event.
//! - [`handler`]: handle-or-defer composition in front of a fallback handler.
//! - [`session`]: [`GestureSession`](session::GestureSession), which owns the
//!   state above and accepts every event through one mailbox.
//!
//! The camera itself stays with the caller behind [`camera::CanvasCamera`].
//! `understory_wheel_gesture_web` wires a session to DOM events on `wasm32`.
//!
//! ## Example
//!
//! ```rust
//! use kurbo::{Point, Vec2};
//! use understory_wheel_gesture::classify::Gesture;
//! use understory_wheel_gesture::config::GestureConfig;
//! use understory_wheel_gesture::input::{Modifiers, WheelInput};
//! use understory_wheel_gesture::session::GestureSession;
//!
//! let session = GestureSession::new(GestureConfig::default()).unwrap();
//!
//! // A pinch: ctrl flag set by the browser, no key actually held.
//! let pinch = WheelInput::new(Vec2::new(0.0, 10.0), Point::new(40.0, 40.0))
//!     .with_modifiers(Modifiers::CTRL)
//!     .with_wheel_delta_y(37.0);
//! assert_eq!(session.classify(&pinch).gesture, Gesture::Pinch);
//!
//! // A two-finger scroll pans.
//! let scroll = WheelInput::new(Vec2::new(3.0, 12.0), Point::new(40.0, 40.0));
//! assert_eq!(session.classify(&scroll).gesture, Gesture::Pan);
//! ```
//!
//! ## Features
//!
//! - `serde`: derive `Serialize`/`Deserialize` for the configuration types.
//!
//! This crate is `no_std` compatible (with `alloc`).

#![no_std]

extern crate alloc;

pub mod camera;
pub mod classify;
pub mod config;
pub mod dispatch;
pub mod handler;
pub mod input;
pub mod key_state;
pub mod panning;
pub mod session;
