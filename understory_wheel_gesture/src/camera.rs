// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! The camera seam: what the dispatcher needs from a canvas view state.

use kurbo::{Point, Vec2};

/// A canvas view that can be zoomed about a point and dragged.
///
/// The transform math lives with the implementor; this crate only decides
/// which operation to call and with what arguments.
pub trait CanvasCamera {
    /// Current uniform scale.
    fn scale(&self) -> f64;

    /// Sets the scale, keeping `focal` (client coordinates) fixed on screen.
    fn change_scale(&mut self, scale: f64, focal: Point);

    /// Translates the view by `delta` as a mouse drag would.
    fn drag_by(&mut self, delta: Vec2);

    /// Notifies the canvas that its contents need redrawing.
    fn mark_changed(&mut self);

    /// Whether dragging the canvas is currently permitted.
    fn drag_enabled(&self) -> bool;

    /// Whether a graph is loaded.
    fn has_graph(&self) -> bool;
}
