// Copyright 2026 the Mathview Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Gesture state helper: accumulate pan deltas and track pinch scale.
//!
//! ## Usage
//!
//! 1) Start a gesture with [`GestureState::start`].
//! 2) On each update, call [`GestureState::update`] with the focal point, the
//!    cumulative scale and the pan delta since the last update. It returns a
//!    [`GestureFrame`] holding everything measured from the gesture start.
//! 3) End the gesture with [`GestureState::end`].
//!
//! Raw platform values are sanitized here: a non‑finite or non‑positive scale
//! keeps the last good scale, and non‑finite pan deltas are dropped.

use kurbo::{Point, Vec2};

/// Everything a gesture has done since it started.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct GestureFrame {
    /// Latest focal point, in pixels.
    pub focal: Point,
    /// Cumulative pinch scale since the start; always finite and positive.
    pub scale: f64,
    /// Total pan since the start, in pixels.
    pub pan: Vec2,
}

/// Tracks a single pan/pinch gesture.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct GestureState {
    active: bool,
    pan: Vec2,
    scale: f64,
    focal: Option<Point>,
}

impl GestureState {
    /// Creates an idle gesture state.
    #[must_use]
    pub fn new() -> Self {
        Self {
            active: false,
            pan: Vec2::ZERO,
            scale: 1.0,
            focal: None,
        }
    }

    /// Starts tracking a new gesture, discarding any previous one.
    pub fn start(&mut self) {
        *self = Self {
            active: true,
            ..Self::new()
        };
    }

    /// Records an update and returns the gesture so far.
    ///
    /// Returns `None` if no gesture is active.
    pub fn update(
        &mut self,
        focal: Point,
        cumulative_scale: f64,
        pan_delta: Vec2,
    ) -> Option<GestureFrame> {
        if !self.active {
            tracing::debug!("gesture update without a start; ignored");
            return None;
        }
        if cumulative_scale.is_finite() && cumulative_scale > 0.0 {
            self.scale = cumulative_scale;
        }
        if pan_delta.is_finite() {
            self.pan += pan_delta;
        }
        if focal.is_finite() {
            self.focal = Some(focal);
        }
        self.frame()
    }

    /// The gesture so far, if one is active and has a focal point.
    #[must_use]
    pub fn frame(&self) -> Option<GestureFrame> {
        if !self.active {
            return None;
        }
        self.focal.map(|focal| GestureFrame {
            focal,
            scale: self.scale,
            pan: self.pan,
        })
    }

    /// Ends the gesture, returning its final frame.
    pub fn end(&mut self) -> Option<GestureFrame> {
        let last = self.frame();
        *self = Self::new();
        last
    }

    /// Returns `true` while a gesture is active.
    #[must_use]
    pub fn is_active(&self) -> bool {
        self.active
    }
}

impl Default for GestureState {
    fn default() -> Self {
        Self::new()
    }
}
