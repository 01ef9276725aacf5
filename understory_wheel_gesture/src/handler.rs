// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Wheel handler composition.
//!
//! A [`WheelGestureHandler`] either handles a wheel event or defers it. Handlers
//! compose as a chain of responsibility with [`Chain`]: the first handler runs,
//! and the second only sees events the first deferred.
//!
//! The gesture session is one handler; whatever wheel behavior the canvas had
//! before (zoom-by-default, scroll a list, nothing) is another, placed behind it.
//!
//! ## Minimal example
//!
//! ```
//! use kurbo::{Point, Vec2};
//! use understory_wheel_gesture::handler::{Chain, WheelGestureHandler, WheelOutcome, from_fn};
//! use understory_wheel_gesture::input::WheelInput;
//!
//! let mut seen = 0;
//! let first = from_fn(|ev: &WheelInput, _: &mut ()| {
//!     if ev.delta.y > 0.0 { WheelOutcome::Handled } else { WheelOutcome::Deferred }
//! });
//! let second = from_fn(|_: &WheelInput, _: &mut ()| {
//!     seen += 1;
//!     WheelOutcome::Handled
//! });
//!
//! let mut chain = Chain::new(first, second);
//! let down = WheelInput::new(Vec2::new(0.0, 1.0), Point::ZERO);
//! let up = WheelInput::new(Vec2::new(0.0, -1.0), Point::ZERO);
//! assert_eq!(chain.handle(&down, &mut ()), WheelOutcome::Handled);
//! assert_eq!(chain.handle(&up, &mut ()), WheelOutcome::Handled);
//! drop(chain);
//! assert_eq!(seen, 1);
//! ```

use crate::input::WheelInput;

/// Result of offering a wheel event to a handler.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub enum WheelOutcome {
    /// The handler acted on the event; later handlers do not see it.
    Handled,
    /// The handler declined; the next handler gets a turn.
    Deferred,
}

impl WheelOutcome {
    /// Returns `true` for [`WheelOutcome::Handled`].
    #[must_use]
    pub fn is_handled(self) -> bool {
        self == Self::Handled
    }
}

/// Something that may act on a wheel event with access to a context `C`
/// (usually the camera).
pub trait WheelGestureHandler<C: ?Sized> {
    /// Offers `event` to the handler.
    fn handle(&mut self, event: &WheelInput, cx: &mut C) -> WheelOutcome;
}

impl<C: ?Sized, H: WheelGestureHandler<C> + ?Sized> WheelGestureHandler<C> for &mut H {
    fn handle(&mut self, event: &WheelInput, cx: &mut C) -> WheelOutcome {
        (**self).handle(event, cx)
    }
}

/// Wraps a closure as a handler; see [`from_fn`].
#[derive(Copy, Clone)]
pub struct FromFn<F>(F);

impl<F> core::fmt::Debug for FromFn<F> {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.debug_struct("FromFn").finish_non_exhaustive()
    }
}

/// Creates a handler from a closure.
pub fn from_fn<C: ?Sized, F>(f: F) -> FromFn<F>
where
    F: FnMut(&WheelInput, &mut C) -> WheelOutcome,
{
    FromFn(f)
}

impl<C: ?Sized, F> WheelGestureHandler<C> for FromFn<F>
where
    F: FnMut(&WheelInput, &mut C) -> WheelOutcome,
{
    fn handle(&mut self, event: &WheelInput, cx: &mut C) -> WheelOutcome {
        (self.0)(event, cx)
    }
}

/// A handler that defers everything; the fallback when the canvas had no
/// wheel behavior of its own.
#[derive(Copy, Clone, Debug, Default)]
pub struct DeferAll;

impl<C: ?Sized> WheelGestureHandler<C> for DeferAll {
    fn handle(&mut self, _event: &WheelInput, _cx: &mut C) -> WheelOutcome {
        WheelOutcome::Deferred
    }
}

/// Runs `first`, then `second` if `first` deferred.
#[derive(Clone, Debug, Default)]
pub struct Chain<A, B> {
    first: A,
    second: B,
}

impl<A, B> Chain<A, B> {
    /// Composes two handlers.
    pub fn new(first: A, second: B) -> Self {
        Self { first, second }
    }

    /// Splits the chain back into its parts.
    pub fn into_inner(self) -> (A, B) {
        (self.first, self.second)
    }
}

impl<C: ?Sized, A, B> WheelGestureHandler<C> for Chain<A, B>
where
    A: WheelGestureHandler<C>,
    B: WheelGestureHandler<C>,
{
    fn handle(&mut self, event: &WheelInput, cx: &mut C) -> WheelOutcome {
        match self.first.handle(event, cx) {
            WheelOutcome::Handled => WheelOutcome::Handled,
            WheelOutcome::Deferred => self.second.handle(event, cx),
        }
    }
}
