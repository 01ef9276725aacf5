// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Plain-data conversions from DOM event fields to gesture inputs.
//!
//! Kept separate from the listener code so the mapping can be tested off the web.

use kurbo::{Point, Vec2};
use understory_wheel_gesture::input::{DeltaMode, Key, KeyInput, Modifiers, WheelInput, WheelTarget};

/// The fields of a DOM `WheelEvent` the gesture logic reads.
#[derive(Copy, Clone, Debug, Default, PartialEq)]
pub struct WheelFields {
    /// `deltaX`.
    pub delta_x: f64,
    /// `deltaY`.
    pub delta_y: f64,
    /// `deltaMode`.
    pub delta_mode: u32,
    /// `clientX`.
    pub client_x: f64,
    /// `clientY`.
    pub client_y: f64,
    /// `ctrlKey`.
    pub ctrl: bool,
    /// `shiftKey`.
    pub shift: bool,
    /// `altKey`.
    pub alt: bool,
    /// `metaKey`.
    pub meta: bool,
    /// Non-standard `wheelDeltaY`, absent on some engines.
    pub wheel_delta_y: Option<f64>,
}

/// Builds a [`WheelInput`] from raw event fields and a resolved target.
#[must_use]
pub fn wheel_input(fields: &WheelFields, target: WheelTarget) -> WheelInput {
    WheelInput {
        delta: Vec2::new(fields.delta_x, fields.delta_y),
        position: Point::new(fields.client_x, fields.client_y),
        modifiers: Modifiers::from_flags(fields.ctrl, fields.shift, fields.alt, fields.meta),
        // Engines without the legacy field report `undefined` or a non-number.
        wheel_delta_y: fields.wheel_delta_y.filter(|v| v.is_finite()),
        delta_mode: DeltaMode::from_raw(fields.delta_mode),
        target,
    }
}

/// Builds a [`KeyInput`] from `KeyboardEvent.key` and its modifier flags.
#[must_use]
pub fn key_input(key: &str, ctrl: bool, shift: bool, alt: bool, meta: bool) -> KeyInput {
    KeyInput::new(
        Key::from_name(key),
        Modifiers::from_flags(ctrl, shift, alt, meta),
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use understory_wheel_gesture::input::TargetKind;

    #[test]
    fn wheel_fields_map_through() {
        let fields = WheelFields {
            delta_x: 1.5,
            delta_y: -4.0,
            delta_mode: 0,
            client_x: 10.0,
            client_y: 20.0,
            ctrl: true,
            meta: true,
            wheel_delta_y: Some(12.0),
            ..WheelFields::default()
        };
        let input = wheel_input(&fields, WheelTarget::canvas());
        assert_eq!(input.delta, Vec2::new(1.5, -4.0));
        assert_eq!(input.position, Point::new(10.0, 20.0));
        assert_eq!(input.modifiers, Modifiers::CTRL | Modifiers::META);
        assert_eq!(input.wheel_delta_y, Some(12.0));
        assert_eq!(input.delta_mode, DeltaMode::Pixel);
        assert_eq!(input.target.kind, TargetKind::Canvas);
    }

    #[test]
    fn non_finite_wheel_delta_is_dropped() {
        let fields = WheelFields {
            wheel_delta_y: Some(f64::NAN),
            delta_mode: 1,
            ..WheelFields::default()
        };
        let input = wheel_input(&fields, WheelTarget::default());
        assert_eq!(input.wheel_delta_y, None);
        assert_eq!(input.delta_mode, DeltaMode::Line);
    }

    #[test]
    fn key_fields_map_through() {
        let ctrl = key_input("Control", true, false, false, false);
        assert_eq!(ctrl.key, Key::Control);
        assert_eq!(ctrl.modifiers, Modifiers::CTRL);

        let chord = key_input("z", false, false, false, true);
        assert_eq!(chord.key, Key::Other);
        assert_eq!(chord.modifiers, Modifiers::META);
    }
}
