// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Physical Ctrl/Cmd tracking, independent of the flags carried on wheel events.
//!
//! Browsers report trackpad pinches as wheel events with `ctrlKey` set. The
//! only way to tell such a pinch from a real Ctrl+wheel is to know whether a
//! Ctrl (or Meta) key is actually down, which [`KeyState`] derives from the
//! keyboard event stream.
//!
//! ## Minimal example
//!
//! ```
//! use understory_wheel_gesture::input::{Key, KeyInput, Modifiers};
//! use understory_wheel_gesture::key_state::KeyState;
//!
//! let mut keys = KeyState::new();
//! keys.on_key_down(&KeyInput::new(Key::Control, Modifiers::CTRL));
//! assert!(keys.is_real_ctrl_held());
//!
//! // Focus leaves the page while the key is down: never stay stuck.
//! keys.on_blur();
//! assert!(!keys.is_real_ctrl_held());
//! ```

use crate::input::{Key, KeyInput, Modifiers};

/// Tracks whether a real Ctrl-like key is physically held.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq)]
pub struct KeyState {
    real_ctrl_held: bool,
}

impl KeyState {
    /// Creates a tracker with nothing held.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns `true` while a physical Ctrl key (or a Meta chord) is down.
    #[must_use]
    pub fn is_real_ctrl_held(&self) -> bool {
        self.real_ctrl_held
    }

    /// Keydown: Control, or any key pressed with Meta, counts as held.
    pub fn on_key_down(&mut self, input: &KeyInput) {
        if input.key == Key::Control || input.modifiers.contains(Modifiers::META) {
            self.set(true);
        }
    }

    /// Keyup: releasing Control always clears; any other release clears unless
    /// Meta is still reported down.
    pub fn on_key_up(&mut self, input: &KeyInput) {
        if input.key == Key::Control || !input.modifiers.contains(Modifiers::META) {
            self.set(false);
        }
    }

    /// Window blur: the key-up may never arrive, so clear unconditionally.
    pub fn on_blur(&mut self) {
        self.set(false);
    }

    fn set(&mut self, held: bool) {
        if self.real_ctrl_held != held {
            tracing::debug!(held, "real ctrl state changed");
            self.real_ctrl_held = held;
        }
    }
}
