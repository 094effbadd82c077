// Copyright 2026 the Mathview Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

#[cfg(not(feature = "std"))]
use kurbo::common::FloatFuncs as _; // for `round`
use kurbo::{Point, Rect, Size, Vec2};
use mathview_affine::Affine;

use crate::modes::AspectPolicy;
use crate::view_box::{Interval, ViewBox};

/// Decimal places kept in the math→pixel scale factors.
///
/// Rounding keeps the scale stable from frame to frame when the inputs only
/// differ by floating point noise.
const SCALE_DECIMALS: f64 = 1e5;

/// Returns `true` if a canvas of this size can be resolved.
///
/// Both dimensions must be finite and strictly positive. Callers must not
/// resolve a viewport otherwise; they should render nothing instead.
#[must_use]
pub fn is_drawable_size(size: Size) -> bool {
    size.width.is_finite() && size.height.is_finite() && size.width > 0.0 && size.height > 0.0
}

/// The visible math region of a canvas and its mapping to pixels.
///
/// A `ResolvedViewport` is an immutable snapshot. It is recomputed whenever the
/// view box, canvas size or camera changes, and should not be cached across a
/// camera change.
///
/// Math rectangles store the lower math y bound in `y0` and the upper in `y1`;
/// math y grows upward while pixel rows grow downward.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ResolvedViewport {
    base_rect: Rect,
    math_rect: Rect,
    size: Size,
    math_to_pixel: Affine,
}

impl ResolvedViewport {
    /// Resolves the visible region for a view box, canvas size, aspect policy
    /// and camera matrix.
    ///
    /// 1. The view box is padded on both axes.
    /// 2. Under [`AspectPolicy::Contain`] the relatively shorter axis is grown
    ///    about its midpoint to match the canvas aspect ratio. This gives the
    ///    base rectangle.
    /// 3. The camera matrix is applied to the base rectangle's corners, giving
    ///    the visible math rectangle.
    /// 4. The math→pixel scale is `(width / x_span, -height / y_span)` over the
    ///    visible rectangle, rounded to five decimal places.
    ///
    /// `size` must satisfy [`is_drawable_size`]. Zero‑width spans yield
    /// infinite scale factors.
    #[must_use]
    pub fn resolve(view_box: &ViewBox, size: Size, policy: AspectPolicy, camera: Affine) -> Self {
        debug_assert!(
            is_drawable_size(size),
            "viewport resolved for a non-drawable canvas size {size:?}"
        );

        let mut x = view_box.x.padded(view_box.padding);
        let mut y = view_box.y.padded(view_box.padding);

        if policy == AspectPolicy::Contain {
            let canvas_aspect = size.width / size.height;
            let requested_aspect = x.span() / y.span();
            if requested_aspect > canvas_aspect {
                y = y.with_span_about_midpoint(x.span() / canvas_aspect);
            } else {
                x = x.with_span_about_midpoint(y.span() * canvas_aspect);
            }
        }

        let base_rect = Rect::new(x.min, y.min, x.max, y.max);
        let min = camera * Point::new(x.min, y.min);
        let max = camera * Point::new(x.max, y.max);
        let math_rect = Rect::from_points(min, max);

        let scale_x = round_scale(size.width / math_rect.width());
        let scale_y = round_scale(-size.height / math_rect.height());

        Self {
            base_rect,
            math_rect,
            size,
            math_to_pixel: Affine::scale(scale_x, scale_y),
        }
    }

    /// The aspect‑corrected view box before the camera is applied.
    #[must_use]
    pub fn base_rect(&self) -> Rect {
        self.base_rect
    }

    /// Size of [`ResolvedViewport::base_rect`], the reference used to turn
    /// pixel drags into math distances.
    #[must_use]
    pub fn base_span(&self) -> Size {
        self.base_rect.size()
    }

    /// The visible math rectangle.
    #[must_use]
    pub fn math_rect(&self) -> Rect {
        self.math_rect
    }

    /// Lower‑left corner of the visible region in math space.
    #[must_use]
    pub fn math_min(&self) -> Point {
        Point::new(self.math_rect.x0, self.math_rect.y0)
    }

    /// Upper‑right corner of the visible region in math space.
    #[must_use]
    pub fn math_max(&self) -> Point {
        Point::new(self.math_rect.x1, self.math_rect.y1)
    }

    /// Visible horizontal range.
    #[must_use]
    pub fn x_range(&self) -> Interval {
        Interval::new(self.math_rect.x0, self.math_rect.x1)
    }

    /// Visible vertical range.
    #[must_use]
    pub fn y_range(&self) -> Interval {
        Interval::new(self.math_rect.y0, self.math_rect.y1)
    }

    /// Canvas size in pixels.
    #[must_use]
    pub fn size(&self) -> Size {
        self.size
    }

    /// Canvas width in pixels.
    #[must_use]
    pub fn pixel_width(&self) -> f64 {
        self.size.width
    }

    /// Canvas height in pixels.
    #[must_use]
    pub fn pixel_height(&self) -> f64 {
        self.size.height
    }

    /// Pure scale from math units to pixels. The y factor is negative.
    ///
    /// Screen placement also needs [`ResolvedViewport::pixel_offset`]; see
    /// [`ResolvedViewport::math_to_screen_transform`].
    #[must_use]
    pub fn math_to_pixel(&self) -> Affine {
        self.math_to_pixel
    }

    /// Where the top‑left corner of the visible region lands under
    /// [`ResolvedViewport::math_to_pixel`].
    ///
    /// Subtracting it moves that corner to the screen origin.
    #[must_use]
    pub fn pixel_offset(&self) -> Vec2 {
        (self.math_to_pixel * Point::new(self.math_rect.x0, self.math_rect.y1)).to_vec2()
    }

    /// Full math→screen transform, for renderers.
    #[must_use]
    pub fn math_to_screen_transform(&self) -> Affine {
        let offset = self.pixel_offset();
        Affine::translate(-offset.x, -offset.y) * self.math_to_pixel
    }

    /// Converts a screen point (pixels, y down) into math space.
    #[must_use]
    pub fn screen_to_math(&self, point: Point) -> Point {
        screen_to_math_in(self.math_rect, self.size, point)
    }

    /// Converts a math point into screen space; the inverse of
    /// [`ResolvedViewport::screen_to_math`].
    #[must_use]
    pub fn math_to_screen(&self, point: Point) -> Point {
        let rect = self.math_rect;
        Point::new(
            (point.x - rect.x0) / rect.width() * self.size.width,
            (1.0 - (point.y - rect.y0) / rect.height()) * self.size.height,
        )
    }

    /// Converts a screen point into the base (pre‑camera) frame.
    #[must_use]
    pub fn base_screen_to_math(&self, point: Point) -> Point {
        screen_to_math_in(self.base_rect, self.size, point)
    }

    /// Converts a pixel delta into a math delta using the base span.
    ///
    /// The result does not depend on the camera, so a drag of a given length
    /// always moves the camera by the same amount in its base frame.
    #[must_use]
    pub fn pixel_delta_to_math(&self, delta: Vec2) -> Vec2 {
        let span = self.base_span();
        Vec2::new(
            delta.x / self.size.width * span.width,
            -delta.y / self.size.height * span.height,
        )
    }
}

fn screen_to_math_in(rect: Rect, size: Size, point: Point) -> Point {
    Point::new(
        point.x / size.width * rect.width() + rect.x0,
        (1.0 - point.y / size.height) * rect.height() + rect.y0,
    )
}

fn round_scale(value: f64) -> f64 {
    (value * SCALE_DECIMALS).round() / SCALE_DECIMALS
}
