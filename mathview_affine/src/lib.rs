// Copyright 2026 the Mathview Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

// After you edit the crate's doc comment, run this command, then check README.md for any missing links
// cargo rdme --workspace-project=mathview_affine --heading-base-level=0

//! Mathview Affine: a small 2D affine matrix value type and a fluent builder.
//!
//! [`Affine`] is a six‑coefficient `2×3` matrix (with an implicit `0 0 1`
//! bottom row). It composes, inverts and maps points in closed form; there is
//! no generic linear‑algebra machinery behind it. [`AffineBuilder`] accumulates
//! primitives so that they apply in call order.
//!
//! ```rust
//! use kurbo::Point;
//! use mathview_affine::{Affine, AffineBuilder};
//!
//! let m = AffineBuilder::new()
//!     .translate(-1.0, -1.0)
//!     .scale(2.0, 2.0)
//!     .translate(1.0, 1.0)
//!     .build();
//!
//! // (1, 1) is the fixed point of the zoom.
//! assert_eq!(m * Point::new(1.0, 1.0), Point::new(1.0, 1.0));
//!
//! let inv = m.invert().unwrap();
//! assert!((inv * m).approx_eq(Affine::IDENTITY, 1e-12));
//!
//! // Singular matrices have no inverse.
//! assert_eq!(Affine::scale(0.0, 1.0).invert(), None);
//! ```
//!
//! Points and vectors are [`kurbo`] types, and [`Affine`] converts to and from
//! [`kurbo::Affine`] so renderers built on Kurbo can consume it directly.
//!
//! This crate is `no_std`.

#![no_std]

mod affine;
mod builder;

pub use affine::Affine;
pub use builder::AffineBuilder;
