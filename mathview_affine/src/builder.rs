// Copyright 2026 the Mathview Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use crate::Affine;

/// Fluent accumulator for [`Affine`] transforms.
///
/// Every call composes its primitive *after* what has been accumulated so far,
/// so transforms apply to points in call order:
///
/// ```
/// use kurbo::Point;
/// use mathview_affine::AffineBuilder;
///
/// // Scale first, then translate.
/// let m = AffineBuilder::new().scale(2.0, 2.0).translate(1.0, 0.0).build();
/// assert_eq!(m * Point::new(1.0, 1.0), Point::new(3.0, 2.0));
/// ```
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct AffineBuilder {
    matrix: Affine,
}

impl AffineBuilder {
    /// Creates a builder seeded with the identity.
    #[must_use]
    pub const fn new() -> Self {
        Self {
            matrix: Affine::IDENTITY,
        }
    }

    /// Creates a builder seeded with `matrix`, which applies before anything
    /// added later.
    #[must_use]
    pub const fn from_matrix(matrix: Affine) -> Self {
        Self { matrix }
    }

    /// Appends a translation.
    #[must_use]
    pub fn translate(self, x: f64, y: f64) -> Self {
        self.then(Affine::translate(x, y))
    }

    /// Appends a counter‑clockwise rotation about the origin, in radians.
    #[must_use]
    pub fn rotate(self, angle: f64) -> Self {
        self.then(Affine::rotate(angle))
    }

    /// Appends a scale about the origin.
    #[must_use]
    pub fn scale(self, x: f64, y: f64) -> Self {
        self.then(Affine::scale(x, y))
    }

    /// Appends a shear; see [`Affine::shear`].
    #[must_use]
    pub fn shear(self, x: f64, y: f64) -> Self {
        self.then(Affine::shear(x, y))
    }

    /// Appends an arbitrary matrix.
    #[must_use]
    pub fn then(self, next: Affine) -> Self {
        Self {
            matrix: next * self.matrix,
        }
    }

    /// Returns the accumulated matrix.
    #[must_use]
    pub const fn build(self) -> Affine {
        self.matrix
    }
}

impl From<Affine> for AffineBuilder {
    fn from(matrix: Affine) -> Self {
        Self::from_matrix(matrix)
    }
}
