// Copyright 2026 the Mathview Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

// After you edit the crate's doc comment, run this command, then check README.md for any missing links
// cargo rdme --workspace-project=mathview_event_state --heading-base-level=0

//! Mathview Event State: the gesture contract between a platform and a canvas.
//!
//! Platforms deliver pointer, touch and wheel input in many shapes. This crate
//! fixes one small contract that any of them can be adapted to, and the state
//! needed to interpret it:
//!
//! - [`GestureSink`]: the four entry points a canvas exposes
//!   (`on_gesture_start`, `on_gesture_update`, `on_gesture_end`, `on_scroll`).
//! - [`gesture::GestureState`]: tracks one pan/pinch gesture, accumulating pan
//!   deltas and sanitizing the reported scale.
//! - [`scroll`]: maps wheel deltas through a bounded sigmoid so that large
//!   deltas saturate instead of producing runaway zoom jumps.
//!
//! ## Tracking a gesture
//!
//! ```rust
//! use kurbo::{Point, Vec2};
//! use mathview_event_state::gesture::GestureState;
//!
//! let mut gesture = GestureState::new();
//! gesture.start();
//!
//! let frame = gesture
//!     .update(Point::new(100.0, 80.0), 1.0, Vec2::new(4.0, 0.0))
//!     .unwrap();
//! assert_eq!(frame.pan, Vec2::new(4.0, 0.0));
//!
//! // Pan deltas accumulate; the scale is cumulative already.
//! let frame = gesture
//!     .update(Point::new(100.0, 80.0), 1.5, Vec2::new(1.0, -2.0))
//!     .unwrap();
//! assert_eq!(frame.pan, Vec2::new(5.0, -2.0));
//! assert_eq!(frame.scale, 1.5);
//!
//! gesture.end();
//! assert!(!gesture.is_active());
//! ```
//!
//! ## Wheel input
//!
//! ```rust
//! use mathview_event_state::scroll::scroll_scale;
//!
//! assert_eq!(scroll_scale(0.0), 1.0);
//! assert!(scroll_scale(120.0) > 1.0);
//! assert!(scroll_scale(1e9) < 2.0);
//! ```
//!
//! This crate is `no_std`; enable the `libm` feature when building without
//! `std`.

#![no_std]

pub mod gesture;
pub mod scroll;

use kurbo::{Point, Vec2};

/// The input contract a canvas accepts from a platform gesture layer.
///
/// Positions are in canvas pixels with the origin at the top left and y
/// growing downward.
pub trait GestureSink {
    /// A pan/pinch gesture begins.
    fn on_gesture_start(&mut self);

    /// The gesture moved.
    ///
    /// - `focal`: current focal point (pinch center or pointer position).
    /// - `cumulative_scale`: pinch scale since the gesture started; `1` for a
    ///   plain drag.
    /// - `pan_delta`: pointer movement since the previous update.
    fn on_gesture_update(&mut self, focal: Point, cumulative_scale: f64, pan_delta: Vec2);

    /// The gesture finished.
    fn on_gesture_end(&mut self);

    /// A wheel step; positive `delta_y` zooms in. See [`scroll::scroll_scale`].
    fn on_scroll(&mut self, delta_y: f64, pointer: Point);
}
