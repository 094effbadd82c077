// Copyright 2026 the Mathview Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! The canvas handle: view box, size, camera and resolved viewport in one place.

use std::cell::Cell;
use std::rc::Rc;

use kurbo::{Point, Size, Vec2};
use mathview_event_state::GestureSink;
use mathview_event_state::gesture::GestureState;
use mathview_event_state::scroll::scroll_scale;
use mathview_view2d::{
    AspectPolicy, Camera, CameraMove, ListenerId, Listeners, ResolvedViewport, ViewBox,
    is_drawable_size,
};

use crate::config::{CanvasConfig, ConfigError, ZoomConfig, validate_view_box};

/// An interactive math canvas.
///
/// A `Canvas` owns the camera and keeps a [`ResolvedViewport`] up to date with
/// it. Every input that affects the viewport (size, view box, aspect policy,
/// camera) recomputes it before the call returns, and subscribers hear about
/// each change.
///
/// Gesture input arrives through [`GestureSink`]:
///
/// - Drags pan the view so that the content follows the pointer one to one,
///   whatever the zoom.
/// - Pinches zoom about the focal point, keeping the math point under it
///   fixed.
/// - Wheel steps zoom about the pointer.
///
/// Until [`Canvas::resize`] gives it a drawable size, a canvas has no viewport
/// and ignores gestures.
#[derive(Debug)]
pub struct Canvas {
    view_box: ViewBox,
    config: CanvasConfig,
    size: Size,
    camera: Camera,
    camera_moved: Rc<Cell<bool>>,
    viewport: Option<ResolvedViewport>,
    gesture: GestureState,
    listeners: Listeners<ResolvedViewport>,
}

impl Canvas {
    /// Creates a canvas without a size.
    ///
    /// Fails if the view box has an invalid range or padding.
    pub fn new(view_box: ViewBox, config: CanvasConfig) -> Result<Self, ConfigError> {
        validate_view_box(&view_box)?;
        let (camera, camera_moved) = watched_camera(config.zoom);
        Ok(Self {
            view_box,
            config,
            size: Size::ZERO,
            camera,
            camera_moved,
            viewport: None,
            gesture: GestureState::new(),
            listeners: Listeners::new(),
        })
    }

    /// The current viewport, or `None` while the size is not drawable.
    #[must_use]
    pub fn viewport(&self) -> Option<&ResolvedViewport> {
        self.viewport.as_ref()
    }

    /// Registers a callback run with each new viewport.
    ///
    /// Callbacks do not run when the canvas loses its drawable size.
    pub fn subscribe(&mut self, callback: impl FnMut(&ResolvedViewport) + 'static) -> ListenerId {
        self.listeners.subscribe(callback)
    }

    /// Removes a callback registered with [`Canvas::subscribe`].
    pub fn unsubscribe(&mut self, id: ListenerId) -> bool {
        self.listeners.unsubscribe(id)
    }

    /// Converts a screen point into math space.
    #[must_use]
    pub fn screen_to_math(&self, point: Point) -> Option<Point> {
        self.viewport.map(|vp| vp.screen_to_math(point))
    }

    /// Converts a math point into screen space.
    #[must_use]
    pub fn math_to_screen(&self, point: Point) -> Option<Point> {
        self.viewport.map(|vp| vp.math_to_screen(point))
    }

    /// Sets the canvas size in pixels.
    pub fn resize(&mut self, size: Size) {
        if size == self.size {
            return;
        }
        tracing::debug!(width = size.width, height = size.height, "canvas resized");
        self.size = size;
        self.refresh();
    }

    /// Replaces the requested view box.
    ///
    /// The camera is kept, so the view box moves under the current pan and
    /// zoom.
    pub fn set_view_box(&mut self, view_box: ViewBox) -> Result<(), ConfigError> {
        validate_view_box(&view_box)?;
        if view_box == self.view_box {
            return Ok(());
        }
        tracing::debug!(?view_box, "view box changed");
        self.view_box = view_box;
        self.refresh();
        Ok(())
    }

    /// Changes how the view box is fitted to the canvas.
    pub fn set_aspect_policy(&mut self, policy: AspectPolicy) {
        if policy == self.config.aspect_policy {
            return;
        }
        self.config.aspect_policy = policy;
        self.refresh();
    }

    /// Changes the zoom configuration.
    ///
    /// If the limits change, the camera is replaced by a fresh identity camera
    /// and any gesture in progress is dropped.
    pub fn set_zoom(&mut self, zoom: ZoomConfig) {
        let limits = zoom.limits();
        self.config.zoom = zoom;
        if limits == self.camera.limits() {
            return;
        }
        tracing::debug!(min = limits.min(), max = limits.max(), "camera recreated");
        (self.camera, self.camera_moved) = watched_camera(zoom);
        self.gesture.end();
        self.refresh();
    }

    /// Enables or disables panning by drag.
    pub fn set_pan_enabled(&mut self, enabled: bool) {
        self.config.pan = enabled;
    }

    /// The camera.
    #[must_use]
    pub fn camera(&self) -> &Camera {
        &self.camera
    }

    /// The configuration.
    #[must_use]
    pub fn config(&self) -> CanvasConfig {
        self.config
    }

    /// The requested view box.
    #[must_use]
    pub fn view_box(&self) -> &ViewBox {
        &self.view_box
    }

    /// The canvas size in pixels.
    #[must_use]
    pub fn size(&self) -> Size {
        self.size
    }

    /// Returns `true` while a pan/pinch gesture is in progress.
    #[must_use]
    pub fn is_gesture_active(&self) -> bool {
        self.gesture.is_active()
    }

    /// The viewport as it was when the camera base was last frozen.
    fn base_viewport(&self) -> Option<ResolvedViewport> {
        is_drawable_size(self.size).then(|| {
            ResolvedViewport::resolve(
                &self.view_box,
                self.size,
                self.config.aspect_policy,
                self.camera.base_matrix(),
            )
        })
    }

    /// Maps a screen point into the camera's base frame, through `viewport`.
    fn base_focal(&self, viewport: &ResolvedViewport, point: Point) -> Option<Point> {
        let Some(inverse) = self.camera.base_matrix().invert() else {
            tracing::debug!(?point, "camera base is not invertible; zoom skipped");
            return None;
        };
        Some(inverse * viewport.screen_to_math(point))
    }

    fn move_camera(&mut self, camera_move: CameraMove) {
        self.camera.move_by(camera_move);
        if self.camera_moved.replace(false) {
            self.refresh();
        }
    }

    fn refresh(&mut self) {
        if !is_drawable_size(self.size) {
            if self.viewport.take().is_some() {
                tracing::debug!(size = ?self.size, "canvas size not drawable; viewport dropped");
            }
            return;
        }
        let viewport = ResolvedViewport::resolve(
            &self.view_box,
            self.size,
            self.config.aspect_policy,
            self.camera.matrix(),
        );
        if self.viewport == Some(viewport) {
            return;
        }
        self.viewport = Some(viewport);
        self.listeners.notify(&viewport);
    }
}

/// A camera for `zoom` together with a flag its listener raises on each move.
fn watched_camera(zoom: ZoomConfig) -> (Camera, Rc<Cell<bool>>) {
    let mut camera = Camera::new(zoom.limits());
    let moved = Rc::new(Cell::new(false));
    let flag = Rc::clone(&moved);
    camera.subscribe(move |_| flag.set(true));
    (camera, moved)
}

impl GestureSink for Canvas {
    fn on_gesture_start(&mut self) {
        tracing::debug!("gesture started");
        self.camera.set_base();
        self.gesture.start();
    }

    fn on_gesture_update(&mut self, focal: Point, cumulative_scale: f64, pan_delta: Vec2) {
        let Some(frame) = self.gesture.update(focal, cumulative_scale, pan_delta) else {
            return;
        };
        let Some(start) = self.base_viewport() else {
            return;
        };
        tracing::trace!(
            focal_x = frame.focal.x,
            focal_y = frame.focal.y,
            scale = frame.scale,
            pan_x = frame.pan.x,
            pan_y = frame.pan.y,
            "gesture update"
        );

        let mut camera_move = CameraMove::default();
        let mut pan = Vec2::ZERO;
        if self.config.pan {
            // Moving the view against the drag makes the content follow it.
            pan = -start.pixel_delta_to_math(frame.pan);
            camera_move = camera_move.with_pan(pan);
        }
        // The zoom applies after the pan, so it must center on the point
        // that lands under the focal pixel once panned.
        if self.config.zoom.is_enabled()
            && frame.scale != 1.0
            && let Some(at) = self.base_focal(&start, frame.focal)
        {
            camera_move = camera_move.with_zoom(at + pan, frame.scale);
        }
        self.move_camera(camera_move);
    }

    fn on_gesture_end(&mut self) {
        if self.gesture.end().is_some() {
            tracing::debug!(zoom = self.camera.zoom(), "gesture ended");
        }
    }

    fn on_scroll(&mut self, delta_y: f64, pointer: Point) {
        if !self.config.zoom.is_enabled() || !delta_y.is_finite() || self.gesture.is_active() {
            return;
        }
        let Some(viewport) = self.viewport else {
            return;
        };
        self.camera.set_base();
        if let Some(at) = self.base_focal(&viewport, pointer) {
            self.move_camera(CameraMove::zoom(at, scroll_scale(delta_y)));
        }
    }
}
