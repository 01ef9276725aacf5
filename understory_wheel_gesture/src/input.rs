// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Input records: the subset of keyboard and wheel events the classifier reads.
//!
//! These types are deliberately small and framework-agnostic. A DOM binding
//! (see `understory_wheel_gesture_web`) or a native windowing layer fills them
//! in from whatever event objects it receives.

use kurbo::{Point, Vec2};

bitflags::bitflags! {
    /// Modifier flags carried on an input event.
    ///
    /// On wheel events these flags are *reported*, not necessarily physical:
    /// browsers set [`Modifiers::CTRL`] on trackpad pinch gestures even when no
    /// key is held.
    #[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Hash)]
    #[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
    pub struct Modifiers: u8 {
        /// Control key (or the synthetic pinch flag on wheel events).
        const CTRL = 1 << 0;
        /// Shift key.
        const SHIFT = 1 << 1;
        /// Alt / Option key.
        const ALT = 1 << 2;
        /// Meta / Command / Windows key.
        const META = 1 << 3;
    }
}

impl Modifiers {
    /// Builds a flag set from the four booleans exposed by DOM events.
    #[must_use]
    pub fn from_flags(ctrl: bool, shift: bool, alt: bool, meta: bool) -> Self {
        let mut m = Self::empty();
        m.set(Self::CTRL, ctrl);
        m.set(Self::SHIFT, shift);
        m.set(Self::ALT, alt);
        m.set(Self::META, meta);
        m
    }
}

/// Logical key identity, reduced to what the key-state tracker cares about.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub enum Key {
    /// The Control key.
    Control,
    /// The Meta / Command key.
    Meta,
    /// Any other key.
    Other,
}

impl Key {
    /// Maps a DOM `KeyboardEvent.key` value.
    #[must_use]
    pub fn from_name(name: &str) -> Self {
        match name {
            "Control" => Self::Control,
            "Meta" | "OS" => Self::Meta,
            _ => Self::Other,
        }
    }
}

/// A keydown or keyup.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub struct KeyInput {
    /// Which key changed.
    pub key: Key,
    /// Modifier state reported on the event itself.
    pub modifiers: Modifiers,
}

impl KeyInput {
    /// Creates a key input.
    #[must_use]
    pub fn new(key: Key, modifiers: Modifiers) -> Self {
        Self { key, modifiers }
    }
}

/// Unit of a wheel delta, mirroring `WheelEvent.deltaMode`.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Hash)]
pub enum DeltaMode {
    /// Deltas are in pixels (`DOM_DELTA_PIXEL`, 0).
    #[default]
    Pixel,
    /// Deltas are in lines (`DOM_DELTA_LINE`, 1).
    Line,
    /// Deltas are in pages (`DOM_DELTA_PAGE`, 2).
    Page,
}

impl DeltaMode {
    /// Maps the raw DOM integer. Unknown values are treated as lines, which
    /// keeps them out of the touchpad (pixel) bucket.
    #[must_use]
    pub fn from_raw(raw: u32) -> Self {
        match raw {
            0 => Self::Pixel,
            2 => Self::Page,
            _ => Self::Line,
        }
    }
}

/// What kind of element a wheel event landed on.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Hash)]
pub enum TargetKind {
    /// The graph canvas itself.
    Canvas,
    /// A `<textarea>` (or another text-input-like element) overlaid on the canvas.
    TextArea,
    /// Anything else.
    #[default]
    Other,
}

/// The element under a wheel event, with the geometry needed to tell whether
/// it can scroll on its own.
#[derive(Copy, Clone, Debug, Default, PartialEq)]
pub struct WheelTarget {
    /// Element classification.
    pub kind: TargetKind,
    /// Rendered (visible) height.
    pub client_height: f64,
    /// Full content height.
    pub scroll_height: f64,
}

impl WheelTarget {
    /// The canvas surface.
    #[must_use]
    pub fn canvas() -> Self {
        Self {
            kind: TargetKind::Canvas,
            ..Self::default()
        }
    }

    /// A text area with the given visible and content heights.
    #[must_use]
    pub fn text_area(client_height: f64, scroll_height: f64) -> Self {
        Self {
            kind: TargetKind::TextArea,
            client_height,
            scroll_height,
        }
    }

    /// Returns `true` if the element has internal overflow to scroll through.
    #[must_use]
    pub fn can_scroll(&self) -> bool {
        self.client_height < self.scroll_height
    }
}

/// A wheel event as seen by the classifier.
#[derive(Copy, Clone, Debug, Default, PartialEq)]
pub struct WheelInput {
    /// `deltaX` / `deltaY`.
    pub delta: Vec2,
    /// Pointer position in client coordinates; used as the zoom focal point.
    pub position: Point,
    /// Reported modifier flags.
    pub modifiers: Modifiers,
    /// Legacy `wheelDeltaY`, when the platform provides it.
    pub wheel_delta_y: Option<f64>,
    /// `deltaMode`.
    pub delta_mode: DeltaMode,
    /// The element the event targets.
    pub target: WheelTarget,
}

impl WheelInput {
    /// Creates a pixel-mode wheel input with no modifiers over an unclassified target.
    #[must_use]
    pub fn new(delta: Vec2, position: Point) -> Self {
        Self {
            delta,
            position,
            ..Self::default()
        }
    }

    /// Sets the reported modifiers.
    #[must_use]
    pub fn with_modifiers(mut self, modifiers: Modifiers) -> Self {
        self.modifiers = modifiers;
        self
    }

    /// Sets the legacy `wheelDeltaY` value.
    #[must_use]
    pub fn with_wheel_delta_y(mut self, wheel_delta_y: f64) -> Self {
        self.wheel_delta_y = Some(wheel_delta_y);
        self
    }

    /// Sets the delta mode.
    #[must_use]
    pub fn with_delta_mode(mut self, delta_mode: DeltaMode) -> Self {
        self.delta_mode = delta_mode;
        self
    }

    /// Sets the target.
    #[must_use]
    pub fn with_target(mut self, target: WheelTarget) -> Self {
        self.target = target;
        self
    }

    /// The reported (possibly synthetic) ctrl flag.
    #[must_use]
    pub fn ctrl(&self) -> bool {
        self.modifiers.contains(Modifiers::CTRL)
    }

    /// The reported shift flag.
    #[must_use]
    pub fn shift(&self) -> bool {
        self.modifiers.contains(Modifiers::SHIFT)
    }

    /// The reported meta flag.
    #[must_use]
    pub fn meta(&self) -> bool {
        self.modifiers.contains(Modifiers::META)
    }
}

/// Returns `true` if the page should suppress the default action of a wheel
/// event with this `delta` to stop two-finger horizontal swipes from
/// navigating back/forward.
///
/// This is independent of classification: any nonzero horizontal delta qualifies.
#[must_use]
pub fn suppresses_swipe_navigation(delta: Vec2) -> bool {
    delta.x != 0.0
}
