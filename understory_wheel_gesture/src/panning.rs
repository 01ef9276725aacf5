// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Panning latch: lets wheel input drive the canvas until the pointer moves.
//!
//! ## States
//!
//! - [`PanMode::Idle`]: wheel events over overlaid elements are left alone.
//! - [`PanMode::Override`]: wheel events pan/zoom the canvas, even when they
//!   land on an element that looks scrollable.
//!
//! The latch is armed by wheel events on the canvas itself and by wheel events
//! over a text area with nothing to scroll. It is cleared by the next pointer
//! movement, never by further wheel input.
//!
//! Entering the override also requests a pointer-move watch from the host,
//! whether or not the canvas ends up acting on the event, so the override never
//! outlives the next pointer movement. [`PanLatch::arm`] and
//! [`PanLatch::on_pointer_move`] report when to install and remove that watch;
//! at most one watch exists at a time.
//!
//! ## Minimal example
//!
//! ```
//! use understory_wheel_gesture::input::WheelTarget;
//! use understory_wheel_gesture::panning::{PanLatch, PanMode, PointerWatch};
//!
//! let mut latch = PanLatch::new();
//! let short = WheelTarget::text_area(40.0, 40.0);
//! assert_eq!(latch.on_wheel_target(&short, true), Some(PointerWatch::Install));
//! assert_eq!(latch.mode(), PanMode::Override);
//!
//! // Already watching.
//! assert_eq!(latch.on_wheel_target(&short, true), None);
//!
//! assert_eq!(latch.on_pointer_move(), Some(PointerWatch::Remove));
//! assert_eq!(latch.mode(), PanMode::Idle);
//! ```

use crate::input::{TargetKind, WheelTarget};

/// Latch state.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Hash)]
pub enum PanMode {
    /// Not panning.
    #[default]
    Idle,
    /// Wheel input drives the canvas until the next pointer movement.
    Override,
}

/// A change to the host's pointer-move watch.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub enum PointerWatch {
    /// Start listening for pointer movement.
    Install,
    /// Stop listening for pointer movement.
    Remove,
}

/// Tracks the panning override and its pointer-move watch.
///
/// The override is active exactly while a watch is installed.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq)]
pub struct PanLatch {
    mode: PanMode,
    watching: bool,
}

impl PanLatch {
    /// Creates an idle latch.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Current state.
    #[must_use]
    pub fn mode(&self) -> PanMode {
        self.mode
    }

    /// Returns `true` in [`PanMode::Override`].
    #[must_use]
    pub fn is_active(&self) -> bool {
        self.mode == PanMode::Override
    }

    /// Returns `true` while a pointer-move watch is installed.
    #[must_use]
    pub fn is_watching(&self) -> bool {
        self.watching
    }

    /// Whether a wheel event over `target` arms the latch.
    ///
    /// Canvas targets always qualify. Text areas qualify when
    /// `allow_text_areas` is set and the element has no overflow of its own.
    #[must_use]
    pub fn qualifies(target: &WheelTarget, allow_text_areas: bool) -> bool {
        match target.kind {
            TargetKind::Canvas => true,
            TargetKind::TextArea => allow_text_areas && !target.can_scroll(),
            TargetKind::Other => false,
        }
    }

    /// Enters [`PanMode::Override`].
    ///
    /// Returns [`PointerWatch::Install`] unless a watch is already installed.
    #[must_use = "the host must install the returned pointer-move watch"]
    pub fn arm(&mut self) -> Option<PointerWatch> {
        if self.mode != PanMode::Override {
            tracing::debug!("panning override entered");
            self.mode = PanMode::Override;
        }
        if self.watching {
            None
        } else {
            self.watching = true;
            Some(PointerWatch::Install)
        }
    }

    /// Arms the latch if `target` [qualifies](Self::qualifies).
    ///
    /// Returns the watch request from [`PanLatch::arm`].
    #[must_use = "the host must install the returned pointer-move watch"]
    pub fn on_wheel_target(
        &mut self,
        target: &WheelTarget,
        allow_text_areas: bool,
    ) -> Option<PointerWatch> {
        if Self::qualifies(target, allow_text_areas) {
            self.arm()
        } else {
            None
        }
    }

    /// Handles pointer movement: clears the override and retires the watch.
    ///
    /// With no watch installed the latch is already idle and nothing changes.
    pub fn on_pointer_move(&mut self) -> Option<PointerWatch> {
        if !self.watching {
            return None;
        }
        self.watching = false;
        if self.mode != PanMode::Idle {
            tracing::debug!("panning override cleared by pointer move");
            self.mode = PanMode::Idle;
        }
        Some(PointerWatch::Remove)
    }
}
