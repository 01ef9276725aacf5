// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! DOM bindings for `understory_wheel_gesture`.
//!
//! On `wasm32`, [`install`] attaches a [`GestureSession`] to a canvas page:
//!
//! - window `keydown` / `keyup` / `blur` feed the physical Ctrl tracker,
//! - a non-passive document `wheel` listener blocks two-finger swipe
//!   navigation whenever a wheel event carries horizontal delta,
//! - a non-passive `wheel` listener on the canvas's parent element runs the
//!   session and calls `preventDefault` when it asks to,
//! - a document `pointermove` listener is added and removed on demand to
//!   clear the panning latch.
//!
//! The camera and the fallback wheel handler are supplied by the caller.
//!
//! ```no_run
//! #[cfg(target_arch = "wasm32")]
//! fn attach<C>(
//!     canvas: &web_sys::HtmlCanvasElement,
//!     camera: C,
//! ) -> Result<(), wasm_bindgen::JsValue>
//! where
//!     C: understory_wheel_gesture::camera::CanvasCamera + 'static,
//! {
//!     use understory_wheel_gesture::config::GestureConfig;
//!     use understory_wheel_gesture::handler::DeferAll;
//!     use understory_wheel_gesture::session::GestureSession;
//!
//!     let session = GestureSession::new(GestureConfig::default())
//!         .map_err(|e| wasm_bindgen::JsValue::from_str(&e.to_string()))?;
//!     understory_wheel_gesture_web::install(canvas, session, camera, DeferAll)?.forget();
//!     Ok(())
//! }
//! ```
//!
//! Off the web only the event field conversions in [`convert`] are available.
//!
//! [`GestureSession`]: understory_wheel_gesture::session::GestureSession

#![no_std]

extern crate alloc;

pub mod convert;

#[cfg(target_arch = "wasm32")]
mod dom;

#[cfg(target_arch = "wasm32")]
pub use dom::{GestureListeners, install};
