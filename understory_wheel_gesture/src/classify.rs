// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Gesture classification: pinch vs. modifier zoom vs. scroll zoom vs. pan.
//!
//! A wheel event with the ctrl flag set is ambiguous: it is either a trackpad
//! pinch (the browser synthesizes the flag) or a real Ctrl+wheel. The
//! classifier resolves it with the physical key state from
//! [`KeyState`](crate::key_state::KeyState):
//!
//! | ctrl flag | real ctrl held | scroll zooming && !touchpad | result         |
//! |-----------|----------------|-----------------------------|----------------|
//! | yes       | no             | any                         | `Pinch`        |
//! | any       | yes            | any                         | `ModifierZoom` |
//! | no        | no             | yes                         | `ScrollZoom`   |
//! | no        | no             | no                          | `Pan`          |
//!
//! ## Minimal example
//!
//! ```
//! use kurbo::{Point, Vec2};
//! use understory_wheel_gesture::classify::{Gesture, classify};
//! use understory_wheel_gesture::config::GestureConfig;
//! use understory_wheel_gesture::input::{Modifiers, WheelInput};
//!
//! let config = GestureConfig::default();
//! let pinch = WheelInput::new(Vec2::new(0.0, 10.0), Point::new(200.0, 150.0))
//!     .with_modifiers(Modifiers::CTRL)
//!     .with_wheel_delta_y(37.0);
//!
//! assert_eq!(classify(&pinch, false, &config).gesture, Gesture::Pinch);
//! assert_eq!(classify(&pinch, true, &config).gesture, Gesture::ModifierZoom);
//! ```

use crate::config::{GestureConfig, TouchpadHeuristic};
use crate::input::{DeltaMode, WheelInput};

/// What a wheel event means for the camera.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub enum Gesture {
    /// Trackpad pinch-to-zoom (synthetic ctrl flag, no key held).
    Pinch,
    /// Zoom requested by a physically held Ctrl/Cmd key.
    ModifierZoom,
    /// Plain mouse wheel configured to zoom.
    ScrollZoom,
    /// Translate the view.
    Pan,
}

impl Gesture {
    /// Returns `true` for the zooming variants.
    #[must_use]
    pub fn is_zoom(self) -> bool {
        !matches!(self, Self::Pan)
    }
}

/// Classifier output: the gesture plus the hardware guess it was based on.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub struct Classification {
    /// The classified gesture.
    pub gesture: Gesture,
    /// Whether the deltas look touchpad-native (unquantized).
    pub touchpad_native: bool,
}

/// Returns `true` if the event's deltas look like they came from a touchpad.
#[must_use]
pub fn is_touchpad_native(input: &WheelInput, heuristic: TouchpadHeuristic) -> bool {
    match heuristic {
        TouchpadHeuristic::Quantized { step } => match input.wheel_delta_y {
            Some(raw) => raw.abs() % step != 0.0,
            None => input.delta_mode == DeltaMode::Pixel,
        },
        TouchpadHeuristic::DeltaMode => input.delta_mode == DeltaMode::Pixel,
        TouchpadHeuristic::Fixed(touchpad) => touchpad,
    }
}

/// Classifies a wheel event given whether a real Ctrl-like key is held.
///
/// This is a pure function of its arguments.
#[must_use]
pub fn classify(input: &WheelInput, real_ctrl_held: bool, config: &GestureConfig) -> Classification {
    let touchpad_native = is_touchpad_native(input, config.touchpad_heuristic);
    let pinch = input.ctrl() && !real_ctrl_held;
    let scroll_zoom = config.scroll_zooming && !touchpad_native;

    let gesture = if pinch {
        Gesture::Pinch
    } else if real_ctrl_held {
        Gesture::ModifierZoom
    } else if scroll_zoom {
        Gesture::ScrollZoom
    } else {
        Gesture::Pan
    };

    tracing::trace!(?gesture, touchpad_native, real_ctrl_held, "classified wheel event");
    Classification {
        gesture,
        touchpad_native,
    }
}
