// Copyright 2026 the Mathview Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Wheel delta to zoom factor mapping.

use core::f64::consts::E;

#[cfg(not(feature = "std"))]
use kurbo::common::FloatFuncs as _; // for `powf`

/// Wheel distance, in pixels, over which the sigmoid does most of its work.
pub const SCROLL_SENSITIVITY: f64 = 300.0;

/// Bound on the sigmoid exponent, which keeps `e^x` finite.
pub const MAX_EXPONENT: f64 = 10.0;

/// Maps a wheel delta to a zoom factor in `(0, 2)`.
///
/// `2 / (1 + e^(clamp(-delta_y / 300, -10, 10)))`. A zero delta gives `1`,
/// positive deltas give factors above `1` and negative deltas factors below
/// it. However large the delta, a single event never more than doubles the
/// zoom.
#[must_use]
pub fn scroll_scale(delta_y: f64) -> f64 {
    let exponent = (-delta_y / SCROLL_SENSITIVITY).clamp(-MAX_EXPONENT, MAX_EXPONENT);
    2.0 / (1.0 + E.powf(exponent))
}
