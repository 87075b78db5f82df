// Copyright 2026 the Vista Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use kurbo::Rect;

use vista_extent::ExtentConfig;
use vista_viewbox::{AlignPair, FitPolicy, ViewState};

/// Configuration for a [`ViewController`](crate::ViewController), resolved
/// once at construction.
///
/// Only the two rectangles are required; everything else defaults:
///
/// | Field | Default | Effect |
/// |---|---|---|
/// | `align` | `Mid`/`Mid` | Slack distribution of the fitted content. |
/// | `fit_policy` | `Meet` | How content scales to fill the viewport. |
/// | `constrain` | `None` | Presence enables constraint enforcement. |
/// | `move_threshold` | `5.0` | Squared displacement admitting a pan. |
/// | `double_tap_threshold` | `None` | Tap spacing (ms) enabling double-tap zoom. |
/// | `double_tap_zoom` | `2.0` | Zoom step per double tap. |
/// | `wheel_zoom` | `1.2` | Zoom step per wheel tick. |
/// | `initial_view` | `{1, 0, 0}` | Seed pan/zoom state. |
/// | `lock` | `false` | Disables gesture admission entirely. |
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ViewConfig {
    /// Content (`viewBox`) rectangle.
    pub content: Rect,
    /// Viewport (element) rectangle.
    pub viewport: Rect,
    /// Per-axis alignment of the fitted content.
    pub align: AlignPair,
    /// Fitting policy.
    pub fit_policy: FitPolicy,
    /// Optional extent constraints; absent means unconstrained.
    pub constrain: Option<ExtentConfig>,
    /// Squared displacement from the initial contact at which a touch
    /// sequence is admitted as a pan.
    pub move_threshold: f64,
    /// Maximum interval in milliseconds between two releases that counts as
    /// a double tap. Double-tap zoom is disabled when absent; when present,
    /// single taps are admitted without any movement.
    pub double_tap_threshold: Option<f64>,
    /// Zoom multiplier applied by a double tap.
    pub double_tap_zoom: f64,
    /// Zoom multiplier applied per wheel tick.
    pub wheel_zoom: f64,
    /// Initial pan/zoom state, constrained on construction when constraints
    /// are enabled.
    pub initial_view: ViewState,
    /// Refuses all gesture admission while set.
    pub lock: bool,
}

impl ViewConfig {
    /// Creates a configuration with the required geometry and every other
    /// field at its documented default.
    #[must_use]
    pub fn new(content: Rect, viewport: Rect) -> Self {
        Self {
            content,
            viewport,
            align: AlignPair::default(),
            fit_policy: FitPolicy::default(),
            constrain: None,
            move_threshold: 5.0,
            double_tap_threshold: None,
            double_tap_zoom: 2.0,
            wheel_zoom: 1.2,
            initial_view: ViewState::default(),
            lock: false,
        }
    }
}
