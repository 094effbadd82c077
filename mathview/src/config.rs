// Copyright 2026 the Mathview Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Canvas configuration and its validation errors.

use mathview_view2d::{AspectPolicy, Interval, ViewBox, ZoomLimits, ZoomLimitsError};

/// Why a canvas configuration was rejected.
#[derive(Clone, Copy, Debug, PartialEq, thiserror::Error)]
pub enum ConfigError {
    /// The zoom limits are invalid.
    #[error(transparent)]
    ZoomLimits(#[from] ZoomLimitsError),
    /// The view box padding is negative or not finite.
    #[error("view box padding must be finite and non-negative, got {0}")]
    InvalidPadding(f64),
    /// A view box range is not finite or has `min > max`.
    #[error("view box {axis} range must be finite with min <= max, got [{min}, {max}]")]
    InvalidInterval {
        /// `'x'` or `'y'`.
        axis: char,
        /// The rejected lower bound.
        min: f64,
        /// The rejected upper bound.
        max: f64,
    },
}

/// Whether and how far the user may zoom.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "snake_case"))]
pub enum ZoomConfig {
    /// The zoom stays at `1`.
    #[default]
    Disabled,
    /// Zooming within [`ZoomLimits::default`].
    Enabled,
    /// Zooming within custom limits.
    Custom(ZoomLimits),
}

impl ZoomConfig {
    /// Validates a pair of custom limits.
    pub fn custom(min: f64, max: f64) -> Result<Self, ConfigError> {
        Ok(Self::Custom(ZoomLimits::new(min, max)?))
    }

    /// The limits a camera should use.
    #[must_use]
    pub fn limits(self) -> ZoomLimits {
        match self {
            Self::Disabled => ZoomLimits::FIXED,
            Self::Enabled => ZoomLimits::default(),
            Self::Custom(limits) => limits,
        }
    }

    /// Returns `true` unless zooming is disabled.
    #[must_use]
    pub fn is_enabled(self) -> bool {
        !self.limits().is_fixed()
    }
}

/// Interaction options for a [`crate::Canvas`].
///
/// The view box padding lives on [`ViewBox`] itself.
#[derive(Clone, Copy, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct CanvasConfig {
    /// Whether drags pan the view.
    pub pan: bool,
    /// Whether pinches and the wheel zoom the view.
    pub zoom: ZoomConfig,
    /// How the view box is fitted to the canvas aspect ratio.
    pub aspect_policy: AspectPolicy,
}

impl Default for CanvasConfig {
    /// Panning on, zooming off, [`AspectPolicy::Contain`].
    fn default() -> Self {
        Self {
            pan: true,
            zoom: ZoomConfig::Disabled,
            aspect_policy: AspectPolicy::Contain,
        }
    }
}

/// Checks the parts of a view box the resolver cannot cope with.
pub(crate) fn validate_view_box(view_box: &ViewBox) -> Result<(), ConfigError> {
    check_interval('x', view_box.x)?;
    check_interval('y', view_box.y)?;
    if !view_box.padding.is_finite() || view_box.padding < 0.0 {
        return Err(ConfigError::InvalidPadding(view_box.padding));
    }
    Ok(())
}

fn check_interval(axis: char, interval: Interval) -> Result<(), ConfigError> {
    if interval.is_valid() {
        Ok(())
    } else {
        Err(ConfigError::InvalidInterval {
            axis,
            min: interval.min,
            max: interval.max,
        })
    }
}

#[cfg(test)]
mod tests {
    use mathview_view2d::{ViewBox, ZoomLimits, ZoomLimitsError};

    use super::{ConfigError, ZoomConfig, validate_view_box};

    #[test]
    fn zoom_config_limits() {
        assert!(ZoomConfig::Disabled.limits().is_fixed());
        assert!(!ZoomConfig::Disabled.is_enabled());
        assert_eq!(ZoomConfig::Enabled.limits(), ZoomLimits::default());
        let custom = ZoomConfig::custom(0.25, 2.0).unwrap();
        assert_eq!(custom.limits().max(), 2.0);
        assert!(custom.is_enabled());
    }

    #[test]
    fn custom_zoom_rejects_bad_limits() {
        assert_eq!(
            ZoomConfig::custom(2.0, 5.0),
            Err(ConfigError::ZoomLimits(ZoomLimitsError::MinOutOfRange(2.0)))
        );
        let err = ZoomConfig::custom(0.5, 0.9).unwrap_err();
        assert_eq!(err.to_string(), "maximum zoom must be at least 1, got 0.9");
    }

    #[test]
    fn view_box_validation() {
        assert_eq!(validate_view_box(&ViewBox::default()), Ok(()));
        assert_eq!(
            validate_view_box(&ViewBox::default().with_padding(-1.0)),
            Err(ConfigError::InvalidPadding(-1.0))
        );
        assert!(matches!(
            validate_view_box(&ViewBox::new((1.0, 0.0), (0.0, 1.0))),
            Err(ConfigError::InvalidInterval { axis: 'x', .. })
        ));
        assert!(matches!(
            validate_view_box(&ViewBox::new((0.0, 1.0), (0.0, f64::INFINITY))),
            Err(ConfigError::InvalidInterval { axis: 'y', .. })
        ));
    }
}
