// Copyright 2026 the Vista Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Vista Gesture: a gesture-driven controller for `viewBox` views.
//!
//! This crate turns normalized touch, wheel, and release events into pan and
//! zoom transitions over a fitted `viewBox`, routing every proposed state
//! through the extent constrainer when constraints are configured. It is the
//! controller layer on top of `vista_viewbox` (fitting) and `vista_extent`
//! (constraints).
//!
//! It does **not** capture platform events. Callers are expected to:
//! - Normalize native touch/mouse/wheel events into contact-point lists,
//!   wheel deltas, and release signals with monotonic timestamps.
//! - Feed them to [`ViewController::on_touch`],
//!   [`ViewController::on_wheel`], and [`ViewController::on_release`].
//! - Read [`ViewController::transform`] after each event and hand it to the
//!   renderer that draws the content.
//!
//! ## Minimal example
//!
//! ```rust
//! use kurbo::{Point, Rect};
//! use vista_gesture::{ViewConfig, ViewController};
//!
//! // A 100x100 viewBox in a 300x300 viewport fits at scale 3.
//! let config = ViewConfig::new(
//!     Rect::new(0.0, 0.0, 100.0, 100.0),
//!     Rect::new(0.0, 0.0, 300.0, 300.0),
//! );
//! let mut view = ViewController::new(config).unwrap();
//!
//! // A pinch that doubles the contact distance doubles the zoom, keeping
//! // the gesture midpoint fixed on screen.
//! view.on_touch(&[Point::new(125.0, 150.0), Point::new(175.0, 150.0)]);
//! view.on_touch(&[Point::new(100.0, 150.0), Point::new(200.0, 150.0)]);
//!
//! let t = view.transform();
//! assert_eq!(view.view().zoom, 2.0);
//! assert_eq!(t.scale_x, 6.0);
//! ```
//!
//! ## Design notes
//!
//! - The state machine is explicit: exactly one [`Gesture`] variant is
//!   active, transitions take the current state and an event, and there are
//!   no captured mutable closures.
//! - Event handling is synchronous and atomic; there are no internal timers.
//!   Double-tap detection compares externally supplied release timestamps.
//! - Configuration is resolved once at construction (see [`ViewConfig`] for
//!   the defaults), not re-read per event.
//!
//! This crate is `no_std`.

#![no_std]

mod config;
mod controller;
mod gesture;

pub use config::ViewConfig;
pub use controller::{ViewController, ViewDebugInfo};
pub use gesture::Gesture;
