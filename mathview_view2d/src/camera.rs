// Copyright 2026 the Mathview Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use kurbo::{Point, Vec2};
use mathview_affine::{Affine, AffineBuilder};

use crate::listeners::{ListenerId, Listeners};
use crate::zoom::ZoomLimits;

/// A zoom about a fixed point.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Zoom {
    /// The point that stays put, in the camera's base frame.
    pub at: Point,
    /// Magnification relative to the base zoom; above `1` zooms in.
    ///
    /// Must be positive.
    pub scale: f64,
}

/// A camera update, relative to the camera's base state.
///
/// See [`Camera::move_by`].
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct CameraMove {
    /// Translation of the visible region, in base math units.
    pub pan: Option<Vec2>,
    /// Zoom about a point.
    pub zoom: Option<Zoom>,
}

impl CameraMove {
    /// A pure pan.
    #[must_use]
    pub fn pan(delta: Vec2) -> Self {
        Self {
            pan: Some(delta),
            zoom: None,
        }
    }

    /// A pure zoom about `at`.
    #[must_use]
    pub fn zoom(at: Point, scale: f64) -> Self {
        Self {
            pan: None,
            zoom: Some(Zoom { at, scale }),
        }
    }

    /// Adds a pan to this move.
    #[must_use]
    pub fn with_pan(self, delta: Vec2) -> Self {
        Self {
            pan: Some(delta),
            ..self
        }
    }

    /// Adds a zoom to this move.
    #[must_use]
    pub fn with_zoom(self, at: Point, scale: f64) -> Self {
        Self {
            zoom: Some(Zoom { at, scale }),
            ..self
        }
    }

    /// Returns `true` if the move neither pans nor zooms.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.pan.is_none() && self.zoom.is_none()
    }
}

/// Accumulated pan and zoom of a view.
///
/// The camera matrix maps the base view rectangle (the aspect‑corrected view
/// box, see [`crate::ResolvedViewport`]) onto the rectangle that is actually
/// visible. Zooming in therefore shrinks the rectangle: a cumulative zoom of
/// `z` contributes a scale of `1 / z`.
///
/// A gesture works against a frozen *base* state:
///
/// 1. [`Camera::set_base`] when the gesture starts.
/// 2. [`Camera::move_by`] for every update, with pan and zoom measured from the
///    start of the gesture. Each call recomputes the matrix from the base, so
///    updates never compound with each other.
///
/// Abandoning a gesture needs no cleanup; the last committed matrix stays.
///
/// Listeners registered with [`Camera::subscribe`] run after every change of
/// the matrix.
#[derive(Debug)]
pub struct Camera {
    base: Affine,
    matrix: Affine,
    base_zoom: f64,
    zoom: f64,
    limits: ZoomLimits,
    listeners: Listeners<Affine>,
}

impl Camera {
    /// Creates an identity camera with the given zoom limits.
    #[must_use]
    pub fn new(limits: ZoomLimits) -> Self {
        Self {
            base: Affine::IDENTITY,
            matrix: Affine::IDENTITY,
            base_zoom: 1.0,
            zoom: 1.0,
            limits,
            listeners: Listeners::new(),
        }
    }

    /// The current camera matrix.
    #[must_use]
    pub fn matrix(&self) -> Affine {
        self.matrix
    }

    /// The matrix frozen by the last [`Camera::set_base`].
    #[must_use]
    pub fn base_matrix(&self) -> Affine {
        self.base
    }

    /// The current cumulative zoom.
    #[must_use]
    pub fn zoom(&self) -> f64 {
        self.zoom
    }

    /// The cumulative zoom frozen by the last [`Camera::set_base`].
    #[must_use]
    pub fn base_zoom(&self) -> f64 {
        self.base_zoom
    }

    /// The zoom limits.
    #[must_use]
    pub fn limits(&self) -> ZoomLimits {
        self.limits
    }

    /// Freezes the current state as the base for subsequent moves.
    ///
    /// Idempotent. It does not change the matrix, so it does not notify.
    pub fn set_base(&mut self) {
        self.base = self.matrix;
        self.base_zoom = self.zoom;
    }

    /// Recomputes the camera from its base state.
    ///
    /// The pan is applied first, then the zoom about `zoom.at`. Both are
    /// expressed in the base frame, so a pan of one math unit moves the
    /// visible region by one *base* unit scaled by the base zoom.
    ///
    /// The cumulative zoom is clamped softly: if `base_zoom * scale` would
    /// leave the limits, the factor is reduced so that the cumulative zoom
    /// lands exactly on the crossed limit.
    pub fn move_by(&mut self, camera_move: CameraMove) {
        let mut step = AffineBuilder::new();
        let mut zoom = self.base_zoom;

        if let Some(pan) = camera_move.pan {
            step = step.translate(pan.x, pan.y);
        }
        if let Some(Zoom { at, scale }) = camera_move.zoom {
            debug_assert!(scale > 0.0, "zoom scale must be positive, got {scale}");
            zoom = self.limits.clamp(self.base_zoom * scale);
            let shrink = self.base_zoom / zoom;
            step = step
                .translate(-at.x, -at.y)
                .scale(shrink, shrink)
                .translate(at.x, at.y);
        }

        self.commit(self.base * step.build(), zoom);
    }

    /// Registers a callback that receives the new matrix after each change.
    pub fn subscribe(&mut self, callback: impl FnMut(&Affine) + 'static) -> ListenerId {
        self.listeners.subscribe(callback)
    }

    /// Removes a callback registered with [`Camera::subscribe`].
    pub fn unsubscribe(&mut self, id: ListenerId) -> bool {
        self.listeners.unsubscribe(id)
    }

    fn commit(&mut self, matrix: Affine, zoom: f64) {
        self.zoom = zoom;
        if matrix == self.matrix {
            return;
        }
        self.matrix = matrix;
        tracing::trace!(
            zoom,
            a = matrix.a,
            d = matrix.d,
            tx = matrix.tx,
            ty = matrix.ty,
            "camera moved"
        );
        self.listeners.notify(&matrix);
    }
}

impl Default for Camera {
    /// A camera with zooming disabled.
    fn default() -> Self {
        Self::new(ZoomLimits::FIXED)
    }
}

#[cfg(test)]
mod tests {
    use alloc::rc::Rc;
    use alloc::vec::Vec;
    use core::cell::RefCell;

    use kurbo::{Point, Vec2};
    use mathview_affine::Affine;

    use super::{Camera, CameraMove};
    use crate::ZoomLimits;

    fn near(a: f64, b: f64) -> bool {
        (a - b).abs() < 1e-9
    }

    #[test]
    fn zoom_clamps_to_max() {
        let mut camera = Camera::new(ZoomLimits::new(0.5, 1.5).unwrap());
        camera.set_base();
        camera.move_by(CameraMove::zoom(Point::ORIGIN, 2.0));
        assert_eq!(camera.zoom(), 1.5);
        // The visible rect shrinks by the clamped factor.
        assert!(camera.matrix().approx_eq(Affine::scale(1.0 / 1.5, 1.0 / 1.5), 1e-12));
    }

    #[test]
    fn zoom_clamps_to_min() {
        let mut camera = Camera::new(ZoomLimits::new(0.5, 5.0).unwrap());
        camera.set_base();
        camera.move_by(CameraMove::zoom(Point::ORIGIN, 0.1));
        assert_eq!(camera.zoom(), 0.5);
    }

    #[test]
    fn soft_clamp_across_gestures() {
        let mut camera = Camera::new(ZoomLimits::new(0.5, 4.0).unwrap());
        camera.set_base();
        camera.move_by(CameraMove::zoom(Point::ORIGIN, 3.0));
        assert!(near(camera.zoom(), 3.0));

        // Second gesture: only a factor of 4/3 remains.
        camera.set_base();
        camera.move_by(CameraMove::zoom(Point::ORIGIN, 3.0));
        assert!(near(camera.zoom(), 4.0));
        assert!(near(camera.matrix().a, 0.25));
    }

    #[test]
    fn moves_recompute_from_base() {
        let mut camera = Camera::new(ZoomLimits::default());
        camera.set_base();
        camera.move_by(CameraMove::pan(Vec2::new(1.0, 0.0)));
        camera.move_by(CameraMove::pan(Vec2::new(2.0, 0.0)));
        assert_eq!(camera.matrix(), Affine::translate(2.0, 0.0));

        camera.move_by(CameraMove::zoom(Point::ORIGIN, 2.0));
        camera.move_by(CameraMove::zoom(Point::ORIGIN, 2.0));
        assert_eq!(camera.zoom(), 2.0);
    }

    #[test]
    fn zoom_keeps_focal_point_fixed() {
        let mut camera = Camera::new(ZoomLimits::default());
        let at = Point::new(1.0, -2.0);
        camera.set_base();
        camera.move_by(CameraMove::zoom(at, 2.5));
        let mapped = camera.matrix() * at;
        assert!(near(mapped.x, at.x) && near(mapped.y, at.y));
    }

    #[test]
    fn base_frame_pan_scales_with_base_zoom() {
        let mut camera = Camera::new(ZoomLimits::default());
        camera.set_base();
        camera.move_by(CameraMove::zoom(Point::ORIGIN, 2.0));

        camera.set_base();
        camera.move_by(CameraMove::pan(Vec2::new(1.0, 0.0)));
        // Zoomed in 2x, a base-unit pan moves the visible rect half as far.
        let origin = camera.matrix() * Point::ORIGIN;
        assert!(near(origin.x, 0.5) && near(origin.y, 0.0));
    }

    #[test]
    fn pan_then_zoom_order() {
        let mut camera = Camera::new(ZoomLimits::default());
        camera.set_base();
        camera.move_by(CameraMove::pan(Vec2::new(2.0, 0.0)).with_zoom(Point::ORIGIN, 2.0));
        // Translate first, then halve about the origin.
        let expected = Affine::scale(0.5, 0.5) * Affine::translate(2.0, 0.0);
        assert!(camera.matrix().approx_eq(expected, 1e-12));
    }

    #[test]
    fn fixed_limits_ignore_zoom() {
        let mut camera = Camera::default();
        camera.set_base();
        camera.move_by(CameraMove::zoom(Point::new(3.0, 3.0), 4.0));
        assert_eq!(camera.zoom(), 1.0);
        assert_eq!(camera.matrix(), Affine::IDENTITY);
    }

    #[test]
    fn listeners_see_committed_matrix_only_on_change() {
        let seen = Rc::new(RefCell::new(Vec::new()));
        let mut camera = Camera::new(ZoomLimits::default());
        let sink = Rc::clone(&seen);
        camera.subscribe(move |m| sink.borrow_mut().push(*m));

        camera.set_base();
        assert!(seen.borrow().is_empty(), "set_base must not notify");

        camera.move_by(CameraMove::pan(Vec2::new(1.0, 1.0)));
        camera.move_by(CameraMove::pan(Vec2::new(1.0, 1.0)));
        assert_eq!(*seen.borrow(), [Affine::translate(1.0, 1.0)]);
        assert_eq!(seen.borrow()[0], camera.matrix());
    }

    #[test]
    fn abandoned_gesture_keeps_last_commit() {
        let mut camera = Camera::new(ZoomLimits::default());
        camera.set_base();
        camera.move_by(CameraMove::pan(Vec2::new(0.0, 3.0)));
        // No end event; a new gesture simply starts from the last commit.
        camera.set_base();
        assert_eq!(camera.base_matrix(), Affine::translate(0.0, 3.0));
        camera.move_by(CameraMove::default());
        assert_eq!(camera.matrix(), Affine::translate(0.0, 3.0));
    }
}
