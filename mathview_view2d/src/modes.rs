// Copyright 2026 the Mathview Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

/// How the requested view box is reconciled with the canvas aspect ratio.
///
/// Consulted by [`crate::ResolvedViewport::resolve`].
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "snake_case"))]
pub enum AspectPolicy {
    /// Expand the shorter axis of the requested range, about its midpoint, so
    /// that one math unit covers the same number of pixels on both axes.
    ///
    /// The whole requested region stays visible; nothing is cropped.
    #[default]
    Contain,
    /// Use the requested range as is.
    ///
    /// Math units may then be rectangular on screen.
    Stretch,
}
