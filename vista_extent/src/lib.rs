// Copyright 2026 the Vista Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Vista Extent: zoom and pan constraints for `viewBox` views.
//!
//! This crate derives effective view constraints from a user-supplied
//! [`ExtentConfig`] and the current base transform, and clamps proposed
//! pan/zoom states against them. The clamping algorithm is ported from the
//! d3-zoom constraint solver: the proposed transform is inverted to find the
//! viewport's content-space corner, that corner is corrected against the
//! translate extent, and the correction is converted back into viewport
//! offsets.
//!
//! Four combination strategies control how the configured extents interact
//! with the base transform (see [`CombineMode`]): `Static` uses them as
//! given, `Dynamic` additionally recenters when the zoomed-out viewport
//! outgrows the extent, `Union` widens the extent by the slack available at
//! minimum zoom, and `Intersect` raises the minimum zoom so the viewport
//! never outgrows the extent.
//!
//! ## Minimal example
//!
//! ```rust
//! use kurbo::{Rect, Size};
//! use vista_extent::{Constraints, ExtentConfig, ScaleExtent};
//! use vista_viewbox::{ViewState, ViewboxTransform};
//!
//! let config = ExtentConfig {
//!     scale: ScaleExtent::new(0.5, 4.0),
//!     translate: Rect::new(0.0, 0.0, 100.0, 100.0),
//!     ..ExtentConfig::default()
//! };
//! let base = ViewboxTransform::IDENTITY;
//! let viewport = Size::new(100.0, 100.0);
//! let constraints = Constraints::build(&config, &base, viewport);
//!
//! // Panning right past the extent's left edge snaps back.
//! let proposed = ViewState { zoom: 1.0, left: 30.0, top: 0.0 };
//! let clamped = constraints.constrain(proposed, viewport, &base);
//! assert_eq!(clamped.left, 0.0);
//! // Zoom is clamped into the configured range.
//! let proposed = ViewState { zoom: 10.0, left: 0.0, top: 0.0 };
//! assert_eq!(constraints.constrain(proposed, viewport, &base).zoom, 4.0);
//! ```
//!
//! ## Design notes
//!
//! - [`Constraints`] is a derived snapshot: rebuild it whenever the base
//!   transform or the configuration changes.
//! - [`Constraints::constrain`] is idempotent and total over finite inputs;
//!   malformed configuration is resolved to documented defaults up front
//!   rather than failing per event.
//!
//! This crate is `no_std`.

#![no_std]

mod config;
mod constrain;

pub use config::{CombineMode, ExtentConfig, ScaleExtent};
pub use constrain::Constraints;
