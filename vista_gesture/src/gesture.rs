// Copyright 2026 the Vista Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use kurbo::Point;

/// Transient gesture-tracking state.
///
/// Exactly one variant is active at a time; anchor and start data live
/// inside the variant that needs them and are discarded on the transition
/// back to [`Gesture::Idle`].
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum Gesture {
    /// No gesture in progress.
    Idle,
    /// A single-contact pan.
    Panning {
        /// Contact position when the pan was captured.
        anchor: Point,
        /// Horizontal view offset when the pan was captured.
        start_left: f64,
        /// Vertical view offset when the pan was captured.
        start_top: f64,
    },
    /// A two-contact pinch.
    Pinching {
        /// Midpoint of the two contacts when the pinch was captured.
        anchor: Point,
        /// Contact distance when the pinch was captured.
        start_distance: f64,
        /// Zoom when the pinch was captured.
        start_zoom: f64,
        /// Horizontal view offset when the pinch was captured.
        start_left: f64,
        /// Vertical view offset when the pinch was captured.
        start_top: f64,
    },
}

impl Gesture {
    /// Returns `true` when no gesture is in progress.
    #[must_use]
    pub fn is_idle(&self) -> bool {
        matches!(self, Self::Idle)
    }

    /// Returns `true` while a pan is in progress.
    #[must_use]
    pub fn is_panning(&self) -> bool {
        matches!(self, Self::Panning { .. })
    }

    /// Returns `true` while a pinch is in progress.
    #[must_use]
    pub fn is_pinching(&self) -> bool {
        matches!(self, Self::Pinching { .. })
    }
}
