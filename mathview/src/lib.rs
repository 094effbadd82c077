// Copyright 2026 the Mathview Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

// After you edit the crate's doc comment, run this command, then check README.md for any missing links
// cargo rdme --workspace-project=mathview --heading-base-level=0

//! Mathview: an interactive pan/zoom canvas for 2D math visualizations.
//!
//! [`Canvas`] ties the lower layers together:
//! - `mathview_affine` for the camera matrix,
//! - `mathview_view2d` for view boxes, the camera and the resolved viewport,
//! - `mathview_event_state` for the gesture contract ([`GestureSink`]).
//!
//! A host forwards its size and input to the canvas and redraws whenever the
//! canvas reports a new [`ResolvedViewport`].
//!
//! ## Example
//!
//! ```rust
//! use std::cell::Cell;
//! use std::rc::Rc;
//!
//! use mathview::kurbo::{Point, Size, Vec2};
//! use mathview::{Canvas, CanvasConfig, GestureSink, ViewBox, ZoomConfig};
//!
//! let config = CanvasConfig { zoom: ZoomConfig::Enabled, ..CanvasConfig::default() };
//! let mut canvas = Canvas::new(ViewBox::default(), config)?;
//!
//! let redraws = Rc::new(Cell::new(0));
//! let counter = Rc::clone(&redraws);
//! canvas.subscribe(move |_| counter.set(counter.get() + 1));
//!
//! canvas.resize(Size::new(500.0, 500.0));
//! let origin = canvas.math_to_screen(Point::ORIGIN).unwrap();
//! assert!((origin.x - 250.0).abs() < 1e-9);
//!
//! // Drag 50 px to the right: the origin follows the pointer.
//! canvas.on_gesture_start();
//! canvas.on_gesture_update(Point::new(250.0, 250.0), 1.0, Vec2::new(50.0, 0.0));
//! canvas.on_gesture_end();
//! let origin = canvas.math_to_screen(Point::ORIGIN).unwrap();
//! assert!((origin.x - 300.0).abs() < 1e-9);
//!
//! assert_eq!(redraws.get(), 2);
//! # Ok::<(), mathview::ConfigError>(())
//! ```
//!
//! This crate requires `std`.

mod canvas;
mod config;

pub use canvas::Canvas;
pub use config::{CanvasConfig, ConfigError, ZoomConfig};

pub use kurbo;
pub use mathview_affine::{Affine, AffineBuilder};
pub use mathview_event_state::GestureSink;
pub use mathview_view2d::{
    AspectPolicy, Camera, CameraMove, Interval, ListenerId, ResolvedViewport, ViewBox, Zoom,
    ZoomLimits, ZoomLimitsError,
};
