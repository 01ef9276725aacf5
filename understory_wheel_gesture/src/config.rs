// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Gesture configuration.
//!
//! Defaults match the behavior users of node-graph canvases expect: the
//! plain wheel pans, Ctrl+wheel zooms slowly, and trackpad pinches zoom at
//! full rate.

use core::fmt;

/// How to decide whether a wheel event came from a touchpad rather than a
/// notched mouse wheel.
///
/// There is no reliable platform signal for this, so the heuristic is
/// configurable.
#[derive(Copy, Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum TouchpadHeuristic {
    /// When the legacy `wheelDeltaY` is present, a touchpad reports magnitudes
    /// that are not exact multiples of `step`; mouse wheels report whole
    /// notches. Without `wheelDeltaY`, fall back to pixel delta mode.
    Quantized {
        /// Size of one mouse-wheel notch in `wheelDeltaY` units.
        step: f64,
    },
    /// Only consult the delta mode: pixel deltas mean touchpad.
    DeltaMode,
    /// Treat every event as touchpad (`true`) or as mouse (`false`).
    Fixed(bool),
}

impl TouchpadHeuristic {
    /// The notch size reported by mainstream browsers.
    pub const WHEEL_NOTCH: f64 = 120.0;
}

impl Default for TouchpadHeuristic {
    fn default() -> Self {
        Self::Quantized {
            step: Self::WHEEL_NOTCH,
        }
    }
}

/// Options for classification and dispatch.
#[derive(Copy, Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct GestureConfig {
    /// When `true`, a plain mouse wheel zooms instead of panning.
    pub scroll_zooming: bool,
    /// Zoom rate for Ctrl+wheel on a mouse.
    pub zoom_speed: f64,
    /// Zoom rate for trackpad pinches.
    pub touchpad_zoom_speed: f64,
    /// Let the wheel pan the canvas while over a text area that has nothing
    /// to scroll.
    pub allow_panning_over_non_scrollable_textareas: bool,
    /// Multiplier applied to the zoom divisor when Meta is reported, which
    /// flips and damps the zoom direction on platforms that invert it.
    pub meta_zoom_correction: f64,
    /// Touchpad detection strategy.
    pub touchpad_heuristic: TouchpadHeuristic,
}

impl Default for GestureConfig {
    fn default() -> Self {
        Self {
            scroll_zooming: false,
            zoom_speed: 0.15,
            touchpad_zoom_speed: 1.0,
            allow_panning_over_non_scrollable_textareas: true,
            meta_zoom_correction: -1.0 / 0.5,
            touchpad_heuristic: TouchpadHeuristic::default(),
        }
    }
}

impl GestureConfig {
    /// Sets [`GestureConfig::scroll_zooming`].
    #[must_use]
    pub fn with_scroll_zooming(mut self, enabled: bool) -> Self {
        self.scroll_zooming = enabled;
        self
    }

    /// Sets [`GestureConfig::zoom_speed`].
    #[must_use]
    pub fn with_zoom_speed(mut self, speed: f64) -> Self {
        self.zoom_speed = speed;
        self
    }

    /// Sets [`GestureConfig::touchpad_zoom_speed`].
    #[must_use]
    pub fn with_touchpad_zoom_speed(mut self, speed: f64) -> Self {
        self.touchpad_zoom_speed = speed;
        self
    }

    /// Sets [`GestureConfig::allow_panning_over_non_scrollable_textareas`].
    #[must_use]
    pub fn with_textarea_panning(mut self, allow: bool) -> Self {
        self.allow_panning_over_non_scrollable_textareas = allow;
        self
    }

    /// Sets [`GestureConfig::meta_zoom_correction`].
    #[must_use]
    pub fn with_meta_zoom_correction(mut self, factor: f64) -> Self {
        self.meta_zoom_correction = factor;
        self
    }

    /// Sets [`GestureConfig::touchpad_heuristic`].
    #[must_use]
    pub fn with_touchpad_heuristic(mut self, heuristic: TouchpadHeuristic) -> Self {
        self.touchpad_heuristic = heuristic;
        self
    }

    /// Checks that every numeric option can be used as a divisor.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if !(self.zoom_speed.is_finite() && self.zoom_speed > 0.0) {
            return Err(ConfigError::ZoomSpeed(self.zoom_speed));
        }
        if !(self.touchpad_zoom_speed.is_finite() && self.touchpad_zoom_speed > 0.0) {
            return Err(ConfigError::TouchpadZoomSpeed(self.touchpad_zoom_speed));
        }
        if !self.meta_zoom_correction.is_finite() || self.meta_zoom_correction == 0.0 {
            return Err(ConfigError::MetaZoomCorrection(self.meta_zoom_correction));
        }
        if let TouchpadHeuristic::Quantized { step } = self.touchpad_heuristic {
            if !(step.is_finite() && step > 0.0) {
                return Err(ConfigError::WheelStep(step));
            }
        }
        Ok(())
    }
}

/// A [`GestureConfig`] value that cannot be used.
#[derive(Copy, Clone, Debug, PartialEq)]
pub enum ConfigError {
    /// `zoom_speed` must be finite and positive.
    ZoomSpeed(f64),
    /// `touchpad_zoom_speed` must be finite and positive.
    TouchpadZoomSpeed(f64),
    /// `meta_zoom_correction` must be finite and nonzero.
    MetaZoomCorrection(f64),
    /// The quantization step must be finite and positive.
    WheelStep(f64),
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::ZoomSpeed(v) => write!(f, "zoom speed must be finite and positive, got {v}"),
            Self::TouchpadZoomSpeed(v) => {
                write!(f, "touchpad zoom speed must be finite and positive, got {v}")
            }
            Self::MetaZoomCorrection(v) => {
                write!(f, "meta zoom correction must be finite and nonzero, got {v}")
            }
            Self::WheelStep(v) => {
                write!(f, "wheel delta step must be finite and positive, got {v}")
            }
        }
    }
}

impl core::error::Error for ConfigError {}
