// Copyright 2026 the Mathview Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

// After you edit the crate's doc comment, run this command, then check README.md for any missing links
// cargo rdme --workspace-project=mathview_view2d --heading-base-level=0

//! Mathview View 2D: viewport bounds, camera and coordinate conversion.
//!
//! This crate maps a caller‑defined region of the real plane ("math space")
//! onto a pixel canvas and lets a camera pan and zoom that mapping. It
//! provides:
//! - [`ViewBox`] / [`Interval`]: the requested math region, with padding.
//! - [`AspectPolicy`]: whether the region is grown to keep math units square.
//! - [`ResolvedViewport`]: the visible region for a canvas size and camera,
//!   its math→pixel scale, and screen⇄math conversion.
//! - [`Camera`]: accumulated pan/zoom with a frozen per‑gesture base and soft
//!   zoom limits ([`ZoomLimits`]), plus change [`Listeners`].
//!
//! It does **not** render anything or interpret raw input events; see
//! `mathview_event_state` and `mathview` for the gesture layer and the canvas
//! handle that ties everything together.
//!
//! ## Minimal example
//!
//! ```rust
//! use kurbo::{Point, Size, Vec2};
//! use mathview_view2d::{AspectPolicy, Camera, CameraMove, ResolvedViewport, ViewBox, ZoomLimits};
//!
//! let view_box = ViewBox::default(); // x, y in [-3, 3], padding 0.5
//! let size = Size::new(500.0, 500.0);
//!
//! let mut camera = Camera::new(ZoomLimits::default());
//! let vp = ResolvedViewport::resolve(&view_box, size, AspectPolicy::Contain, camera.matrix());
//! let center = vp.screen_to_math(Point::new(250.0, 250.0));
//! assert!(center.x.abs() < 1e-12 && center.y.abs() < 1e-12);
//!
//! // Zoom in 2x about the origin.
//! camera.set_base();
//! camera.move_by(CameraMove::zoom(Point::ORIGIN, 2.0));
//! let zoomed = ResolvedViewport::resolve(&view_box, size, AspectPolicy::Contain, camera.matrix());
//! assert!((zoomed.math_rect().width() - 3.5).abs() < 1e-12);
//!
//! // Pixel drags convert through the base span, whatever the zoom.
//! let delta = Vec2::new(10.0, 0.0);
//! assert_eq!(vp.pixel_delta_to_math(delta), zoomed.pixel_delta_to_math(delta));
//! ```
//!
//! ## Design notes
//!
//! - The camera matrix maps the base view rectangle onto the visible one, so
//!   a cumulative zoom `z` shows up as a scale of `1 / z`.
//! - Camera moves are expressed in the base (pre‑camera) frame. Combined with
//!   base‑span pixel conversion this keeps dragging 1:1 at any zoom.
//! - Zoom limits clamp softly: an update that would cross a limit is reduced so
//!   the cumulative zoom lands on it.
//!
//! This crate is `no_std` and uses `alloc`.

#![no_std]

extern crate alloc;

mod camera;
mod listeners;
mod modes;
mod view_box;
mod viewport;
mod zoom;

pub use camera::{Camera, CameraMove, Zoom};
pub use listeners::{ListenerId, Listeners};
pub use modes::AspectPolicy;
pub use view_box::{Interval, ViewBox};
pub use viewport::{ResolvedViewport, is_drawable_size};
pub use zoom::{ZoomLimits, ZoomLimitsError};
