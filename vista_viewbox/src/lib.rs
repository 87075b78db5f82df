// Copyright 2026 the Vista Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Vista ViewBox: deterministic `viewBox`-to-viewport fitting.
//!
//! This crate computes the base transform that maps a rectangular content
//! area (an SVG-style `viewBox`) into a fixed viewport, following the SVG
//! viewport-transform rules: independent X/Y scales, an alignment pair, and
//! a meet/slice/none fitting policy. It also models the user-controlled
//! pan/zoom state that composes with that base transform.
//!
//! It does **not** own any gesture handling or constraint logic. Callers are
//! expected to:
//! - Recompute the [`ViewboxTransform`] whenever content rect, viewport
//!   rect, alignment, or fit policy change.
//! - Keep a [`ViewState`] per view and compose it via
//!   [`ViewboxTransform::composed`] to obtain the transform handed to a
//!   renderer.
//! - Layer constraints and gestures on top (see `vista_extent` and
//!   `vista_gesture`).
//!
//! ## Minimal example
//!
//! ```rust
//! use kurbo::Rect;
//! use vista_viewbox::{viewbox_transform, AlignPair, FitPolicy};
//!
//! // A 100x50 viewBox fitted into a 200x200 viewport.
//! let content = Rect::new(0.0, 0.0, 100.0, 50.0);
//! let viewport = Rect::new(0.0, 0.0, 200.0, 200.0);
//!
//! let t = viewbox_transform(content, viewport, AlignPair::default(), FitPolicy::Meet).unwrap();
//! // Meet picks the smaller scale and centers the slack on the tall axis.
//! assert_eq!(t.scale_x, 2.0);
//! assert_eq!(t.scale_y, 2.0);
//! assert_eq!(t.translate_x, 0.0);
//! assert_eq!(t.translate_y, 50.0);
//! ```
//!
//! ## Design notes
//!
//! - The base transform is a pure function of its four inputs; gestures
//!   never feed back into it.
//! - Scales are per-axis in the general case; `Meet` and `Slice` unify them,
//!   `None` unifies them with a re-centering correction.
//! - Degenerate geometry (a rect with no usable area) is a hard error,
//!   never a silently propagated non-finite scale.
//!
//! This crate is `no_std`.

#![no_std]

mod align;
mod transform;

pub use align::{Align, AlignPair};
pub use transform::{
    viewbox_transform, DegenerateGeometry, FitPolicy, RectRole, ViewState, ViewboxTransform,
};
