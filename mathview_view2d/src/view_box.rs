// Copyright 2026 the Mathview Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use core::ops::Range;

use kurbo::Rect;

/// A closed interval `[min, max]` on one math axis.
///
/// `min <= max` is the caller's responsibility; it is not checked. A
/// zero‑width interval is legal.
#[derive(Clone, Copy, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Interval {
    /// Lower bound.
    pub min: f64,
    /// Upper bound.
    pub max: f64,
}

impl Interval {
    /// Creates an interval from its bounds.
    #[must_use]
    pub const fn new(min: f64, max: f64) -> Self {
        Self { min, max }
    }

    /// `max - min`.
    #[must_use]
    pub fn span(self) -> f64 {
        self.max - self.min
    }

    /// The midpoint of the interval.
    #[must_use]
    pub fn midpoint(self) -> f64 {
        (self.min + self.max) * 0.5
    }

    /// Extends both ends by `padding`.
    #[must_use]
    pub fn padded(self, padding: f64) -> Self {
        Self::new(self.min - padding, self.max + padding)
    }

    /// An interval of width `span` centered on this interval's midpoint.
    #[must_use]
    pub fn with_span_about_midpoint(self, span: f64) -> Self {
        let mid = self.midpoint();
        let half = span * 0.5;
        Self::new(mid - half, mid + half)
    }

    /// Returns `true` if `value` lies within the closed interval.
    #[must_use]
    pub fn contains(self, value: f64) -> bool {
        self.min <= value && value <= self.max
    }

    /// Returns `true` if both bounds are finite and `min <= max`.
    #[must_use]
    pub fn is_valid(self) -> bool {
        self.min.is_finite() && self.max.is_finite() && self.min <= self.max
    }
}

impl From<(f64, f64)> for Interval {
    fn from((min, max): (f64, f64)) -> Self {
        Self::new(min, max)
    }
}

impl From<Range<f64>> for Interval {
    fn from(range: Range<f64>) -> Self {
        Self::new(range.start, range.end)
    }
}

/// The requested visible region of math space, before aspect correction.
///
/// `padding` is added on both sides of both axes.
#[derive(Clone, Copy, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ViewBox {
    /// Requested horizontal range.
    pub x: Interval,
    /// Requested vertical range.
    pub y: Interval,
    /// Extra margin around both ranges, in math units.
    #[cfg_attr(feature = "serde", serde(default = "ViewBox::default_padding"))]
    pub padding: f64,
}

impl ViewBox {
    /// Padding used by [`ViewBox::new`] and [`ViewBox::default`].
    pub const DEFAULT_PADDING: f64 = 0.5;

    /// Creates a view box with the default padding.
    #[must_use]
    pub fn new(x: impl Into<Interval>, y: impl Into<Interval>) -> Self {
        Self {
            x: x.into(),
            y: y.into(),
            padding: Self::DEFAULT_PADDING,
        }
    }

    /// Returns a copy with the given padding.
    #[must_use]
    pub fn with_padding(self, padding: f64) -> Self {
        Self { padding, ..self }
    }

    /// The requested region with padding applied, as a math‑space rectangle.
    ///
    /// `y0`/`y1` hold the lower and upper math y bounds respectively.
    #[must_use]
    pub fn padded_rect(&self) -> Rect {
        let x = self.x.padded(self.padding);
        let y = self.y.padded(self.padding);
        Rect::new(x.min, y.min, x.max, y.max)
    }

    #[cfg(feature = "serde")]
    fn default_padding() -> f64 {
        Self::DEFAULT_PADDING
    }
}

impl Default for ViewBox {
    /// `x` and `y` both span `[-3, 3]`, with `0.5` padding.
    fn default() -> Self {
        Self::new((-3.0, 3.0), (-3.0, 3.0))
    }
}
