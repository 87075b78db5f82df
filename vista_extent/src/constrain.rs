// Copyright 2026 the Vista Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use kurbo::{Rect, Size};

use vista_viewbox::{ViewState, ViewboxTransform};

use crate::config::{CombineMode, ExtentConfig, ScaleExtent};

/// Effective view constraints, derived from an [`ExtentConfig`] and the
/// current base transform.
///
/// This is a snapshot: rebuild it whenever the base transform or the
/// configuration changes.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Constraints {
    /// Configured translate-extent size, recorded only in dynamic mode.
    dynamic: Option<Size>,
    scale: ScaleExtent,
    translate: Rect,
}

impl Constraints {
    /// Derives constraints from a configuration and the current base
    /// transform.
    ///
    /// `viewport` is the viewport size in viewport units; the base scales
    /// convert it into content units where the combine strategies operate.
    /// The configuration is sanitized first, so malformed extents resolve to
    /// their defaults rather than failing.
    #[must_use]
    pub fn build(config: &ExtentConfig, base: &ViewboxTransform, viewport: Size) -> Self {
        let config = config.sanitized();
        let extent = config.translate;
        let (ew, eh) = (extent.width(), extent.height());

        // Viewport size in content units at zoom 1.
        let vw = viewport.width / base.scale_x;
        let vh = viewport.height / base.scale_y;

        match config.combine {
            CombineMode::Dynamic => Self {
                dynamic: Some(Size::new(ew, eh)),
                scale: config.scale,
                translate: extent,
            },
            CombineMode::Static => Self {
                dynamic: None,
                scale: config.scale,
                translate: extent,
            },
            CombineMode::Union => {
                // Viewport size in content units at minimum zoom, and the
                // slack left over once the extent is subtracted.
                let max_w = vw / config.scale.min;
                let max_h = vh / config.scale.min;
                let fx = (max_w - ew).max(0.0);
                let fy = (max_h - eh).max(0.0);
                Self {
                    dynamic: None,
                    scale: config.scale,
                    translate: extent.inflate(fx, fy),
                }
            }
            CombineMode::Intersect => {
                // Zoom at which the viewport exactly covers the extent.
                let w_zoom = vw / ew;
                let h_zoom = vh / eh;
                Self {
                    dynamic: None,
                    scale: ScaleExtent::new(
                        config.scale.min.max(w_zoom).max(h_zoom),
                        config.scale.max,
                    ),
                    translate: extent,
                }
            }
        }
    }

    /// Returns the effective zoom range.
    #[must_use]
    pub fn scale(&self) -> ScaleExtent {
        self.scale
    }

    /// Returns the effective translate extent in content space.
    #[must_use]
    pub fn translate(&self) -> Rect {
        self.translate
    }

    /// Returns the recorded extent size when recentering dynamically.
    #[must_use]
    pub fn dynamic(&self) -> Option<Size> {
        self.dynamic
    }

    /// Clamps a proposed view state against these constraints.
    ///
    /// The proposed transform is composed and inverted to find the
    /// viewport's top-left corner in content space; that corner is corrected
    /// per axis against the translate extent and converted back into
    /// viewport offsets. Idempotent: clamping a clamped state is a no-op.
    #[must_use]
    pub fn constrain(
        &self,
        proposed: ViewState,
        viewport: Size,
        base: &ViewboxTransform,
    ) -> ViewState {
        let zoom = self.scale.clamp(proposed.zoom);
        let composed = base.composed(ViewState { zoom, ..proposed });
        let visible = composed.visible_rect(viewport);

        let mut extent = self.translate;
        if let Some(size) = self.dynamic {
            // Free space available once the extent no longer fills the
            // zoomed-out viewport; widening by it lets the view recenter
            // instead of pinning content to a corner.
            let fx = (visible.width() - size.width).max(0.0);
            let fy = (visible.height() - size.height).max(0.0);
            extent = extent.inflate(fx, fy);
        }

        let x = corrected(visible.x0, visible.width(), extent.x0, extent.x1);
        let y = corrected(visible.y0, visible.height(), extent.y0, extent.y1);

        ViewState {
            zoom,
            left: proposed.left + (visible.x0 - x) * composed.scale_x,
            top: proposed.top + (visible.y0 - y) * composed.scale_y,
        }
    }
}

/// Corrects one axis of the viewport's content-space corner.
///
/// `low`/`high` are the two clamp candidates for the corner coordinate. When
/// `high > low` the viewport fits inside the extent with room to spare and
/// the midpoint centers the slack. Otherwise the extent is narrower than the
/// viewport on this axis: keep the candidate nearest the origin, preferring
/// a negative `low`, then a positive `high`, then zero.
fn corrected(corner: f64, size: f64, min: f64, max: f64) -> f64 {
    let low = corner.max(min);
    let high = corner.min(max - size);
    if high > low {
        (low + high) / 2.0
    } else if low < 0.0 {
        low
    } else if high > 0.0 {
        high
    } else {
        0.0
    }
}
