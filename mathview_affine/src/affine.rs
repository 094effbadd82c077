// Copyright 2026 the Mathview Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use core::hash::{Hash, Hasher};
use core::ops::{Mul, MulAssign};

#[cfg(not(feature = "std"))]
use kurbo::common::FloatFuncs as _; // for `sin_cos`
use kurbo::{Point, Vec2};

/// A 2D affine transform with six coefficients.
///
/// The matrix
///
/// ```text
/// | a  c  tx |
/// | b  d  ty |
/// | 0  0  1  |
/// ```
///
/// maps `(x, y)` to `(a·x + c·y + tx, b·x + d·y + ty)`. This is the same
/// coefficient layout as [`kurbo::Affine`], and the two convert into each
/// other losslessly.
///
/// `Affine` is an immutable value: every operation returns a new matrix.
/// IEEE‑754 semantics propagate unchanged, so non‑finite inputs produce
/// non‑finite outputs rather than panics.
#[derive(Clone, Copy, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Affine {
    /// X scale / rotation component.
    pub a: f64,
    /// Y shear / rotation component.
    pub b: f64,
    /// X shear / rotation component.
    pub c: f64,
    /// Y scale / rotation component.
    pub d: f64,
    /// X translation.
    pub tx: f64,
    /// Y translation.
    pub ty: f64,
}

impl Affine {
    /// The identity transform.
    pub const IDENTITY: Self = Self::new(1.0, 0.0, 0.0, 1.0, 0.0, 0.0);

    /// Creates a matrix from its six coefficients.
    #[must_use]
    pub const fn new(a: f64, b: f64, c: f64, d: f64, tx: f64, ty: f64) -> Self {
        Self { a, b, c, d, tx, ty }
    }

    /// Creates a matrix from coefficients in `[a, b, c, d, tx, ty]` order.
    #[must_use]
    pub const fn from_coeffs(coeffs: [f64; 6]) -> Self {
        let [a, b, c, d, tx, ty] = coeffs;
        Self::new(a, b, c, d, tx, ty)
    }

    /// Returns the coefficients in `[a, b, c, d, tx, ty]` order.
    #[must_use]
    pub const fn coeffs(self) -> [f64; 6] {
        [self.a, self.b, self.c, self.d, self.tx, self.ty]
    }

    /// Returns the identity transform.
    #[must_use]
    pub const fn identity() -> Self {
        Self::IDENTITY
    }

    /// A translation by `(x, y)`.
    #[must_use]
    pub const fn translate(x: f64, y: f64) -> Self {
        Self::new(1.0, 0.0, 0.0, 1.0, x, y)
    }

    /// A non‑uniform scale about the origin.
    #[must_use]
    pub const fn scale(x: f64, y: f64) -> Self {
        Self::new(x, 0.0, 0.0, y, 0.0, 0.0)
    }

    /// A counter‑clockwise rotation about the origin, in radians.
    ///
    /// "Counter‑clockwise" assumes a y‑up coordinate system, as used in math
    /// space.
    #[must_use]
    pub fn rotate(angle: f64) -> Self {
        let (sin, cos) = angle.sin_cos();
        Self::new(cos, sin, -sin, cos, 0.0, 0.0)
    }

    /// A shear mapping `(x, y)` to `(x + sx·y, sy·x + y)`.
    #[must_use]
    pub const fn shear(sx: f64, sy: f64) -> Self {
        Self::new(1.0, sy, sx, 1.0, 0.0, 0.0)
    }

    /// Returns `outer ∘ inner`: the transform that applies `inner` first and
    /// then `outer`.
    ///
    /// This is the same as `outer * inner`.
    #[must_use]
    pub fn compose(outer: Self, inner: Self) -> Self {
        Self {
            a: outer.a * inner.a + outer.c * inner.b,
            b: outer.b * inner.a + outer.d * inner.b,
            c: outer.a * inner.c + outer.c * inner.d,
            d: outer.b * inner.c + outer.d * inner.d,
            tx: outer.a * inner.tx + outer.c * inner.ty + outer.tx,
            ty: outer.b * inner.tx + outer.d * inner.ty + outer.ty,
        }
    }

    /// Returns `self` followed by `next`, i.e. `next ∘ self`.
    #[must_use]
    pub fn then(self, next: Self) -> Self {
        Self::compose(next, self)
    }

    /// The determinant of the linear part, `a·d − b·c`.
    #[must_use]
    pub fn determinant(self) -> f64 {
        self.a * self.d - self.b * self.c
    }

    /// Returns the inverse transform, or `None` if the matrix is singular.
    ///
    /// Only an exactly zero determinant is treated as singular. Nearly
    /// singular matrices invert to very large coefficients.
    #[must_use]
    pub fn invert(self) -> Option<Self> {
        let det = self.determinant();
        if det == 0.0 {
            return None;
        }
        let inv_det = det.recip();
        Some(Self {
            a: self.d * inv_det,
            b: -self.b * inv_det,
            c: -self.c * inv_det,
            d: self.a * inv_det,
            tx: (self.c * self.ty - self.d * self.tx) * inv_det,
            ty: (self.b * self.tx - self.a * self.ty) * inv_det,
        })
    }

    /// Applies the transform to a point.
    #[must_use]
    pub fn apply(self, point: Point) -> Point {
        Point::new(
            self.a * point.x + self.c * point.y + self.tx,
            self.b * point.x + self.d * point.y + self.ty,
        )
    }

    /// Applies only the linear part of the transform to a vector.
    #[must_use]
    pub fn apply_vec(self, v: Vec2) -> Vec2 {
        Vec2::new(self.a * v.x + self.c * v.y, self.b * v.x + self.d * v.y)
    }

    /// The translation component.
    #[must_use]
    pub fn translation(self) -> Vec2 {
        Vec2::new(self.tx, self.ty)
    }

    /// Returns `true` if all coefficients are finite.
    #[must_use]
    pub fn is_finite(self) -> bool {
        self.coeffs().iter().all(|c| c.is_finite())
    }

    /// Returns `true` if every coefficient is within `epsilon` of `other`'s.
    #[must_use]
    pub fn approx_eq(self, other: Self, epsilon: f64) -> bool {
        self.coeffs()
            .iter()
            .zip(other.coeffs())
            .all(|(l, r)| (l - r).abs() <= epsilon)
    }
}

impl Default for Affine {
    fn default() -> Self {
        Self::IDENTITY
    }
}

impl Hash for Affine {
    fn hash<H: Hasher>(&self, state: &mut H) {
        for c in self.coeffs() {
            // `0.0 == -0.0`, so both must hash alike.
            let c = if c == 0.0 { 0.0_f64 } else { c };
            c.to_bits().hash(state);
        }
    }
}

impl Mul for Affine {
    type Output = Self;

    fn mul(self, rhs: Self) -> Self {
        Self::compose(self, rhs)
    }
}

impl MulAssign for Affine {
    fn mul_assign(&mut self, rhs: Self) {
        *self = Self::compose(*self, rhs);
    }
}

impl Mul<Point> for Affine {
    type Output = Point;

    fn mul(self, rhs: Point) -> Point {
        self.apply(rhs)
    }
}

impl From<kurbo::Affine> for Affine {
    fn from(affine: kurbo::Affine) -> Self {
        Self::from_coeffs(affine.as_coeffs())
    }
}

impl From<Affine> for kurbo::Affine {
    fn from(affine: Affine) -> Self {
        Self::new(affine.coeffs())
    }
}
