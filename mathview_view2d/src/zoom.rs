// Copyright 2026 the Mathview Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

/// Why a pair of zoom limits was rejected.
#[derive(Clone, Copy, Debug, PartialEq, thiserror::Error)]
pub enum ZoomLimitsError {
    /// One of the limits is NaN or infinite.
    #[error("zoom limits must be finite, got min {min} and max {max}")]
    NotFinite {
        /// The rejected minimum.
        min: f64,
        /// The rejected maximum.
        max: f64,
    },
    /// The minimum is not in `(0, 1]`.
    #[error("minimum zoom must be in (0, 1], got {0}")]
    MinOutOfRange(f64),
    /// The maximum is below `1`.
    #[error("maximum zoom must be at least 1, got {0}")]
    MaxBelowOne(f64),
}

/// Bounds on the cumulative zoom factor of a [`crate::Camera`].
///
/// A zoom of `1` is the unzoomed view, values above `1` magnify. The limits
/// always bracket `1`: `0 < min <= 1 <= max`.
#[derive(Clone, Copy, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(
    feature = "serde",
    serde(try_from = "ZoomLimitsRepr", into = "ZoomLimitsRepr")
)]
pub struct ZoomLimits {
    min: f64,
    max: f64,
}

impl ZoomLimits {
    /// Limits that pin the zoom at `1`, i.e. zooming disabled.
    pub const FIXED: Self = Self { min: 1.0, max: 1.0 };

    /// Validates and creates a pair of limits.
    pub fn new(min: f64, max: f64) -> Result<Self, ZoomLimitsError> {
        if !min.is_finite() || !max.is_finite() {
            return Err(ZoomLimitsError::NotFinite { min, max });
        }
        if min <= 0.0 || min > 1.0 {
            return Err(ZoomLimitsError::MinOutOfRange(min));
        }
        if max < 1.0 {
            return Err(ZoomLimitsError::MaxBelowOne(max));
        }
        Ok(Self { min, max })
    }

    /// Smallest allowed cumulative zoom.
    #[must_use]
    pub fn min(self) -> f64 {
        self.min
    }

    /// Largest allowed cumulative zoom.
    #[must_use]
    pub fn max(self) -> f64 {
        self.max
    }

    /// Returns `true` if no zoom other than `1` is allowed.
    #[must_use]
    pub fn is_fixed(self) -> bool {
        self.min == 1.0 && self.max == 1.0
    }

    /// Returns `true` if `zoom` is within the limits.
    #[must_use]
    pub fn contains(self, zoom: f64) -> bool {
        self.min <= zoom && zoom <= self.max
    }

    /// Clamps `zoom` into the limits.
    #[must_use]
    pub fn clamp(self, zoom: f64) -> f64 {
        zoom.clamp(self.min, self.max)
    }
}

impl Default for ZoomLimits {
    /// `0.5..=5.0`.
    fn default() -> Self {
        Self { min: 0.5, max: 5.0 }
    }
}

#[cfg(feature = "serde")]
#[derive(Clone, Copy, serde::Serialize, serde::Deserialize)]
struct ZoomLimitsRepr {
    min: f64,
    max: f64,
}

#[cfg(feature = "serde")]
impl TryFrom<ZoomLimitsRepr> for ZoomLimits {
    type Error = ZoomLimitsError;

    fn try_from(repr: ZoomLimitsRepr) -> Result<Self, Self::Error> {
        Self::new(repr.min, repr.max)
    }
}

#[cfg(feature = "serde")]
impl From<ZoomLimits> for ZoomLimitsRepr {
    fn from(limits: ZoomLimits) -> Self {
        Self {
            min: limits.min,
            max: limits.max,
        }
    }
}
