// Copyright 2026 the Vista Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use kurbo::Rect;

/// How the configured extents combine with the base transform when
/// constraints are derived.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Default)]
pub enum CombineMode {
    /// Use the extents as given, but let the view recenter whenever the
    /// zoomed-out viewport is larger than the translate extent.
    #[default]
    Dynamic,
    /// Use the extents exactly as given.
    Static,
    /// Widen the translate extent by the slack available at minimum zoom.
    Union,
    /// Raise the minimum zoom so the viewport never outgrows the extent.
    Intersect,
}

impl CombineMode {
    /// Resolves a mode token, falling back to [`CombineMode::Dynamic`] for
    /// anything unrecognized.
    #[must_use]
    pub fn from_token(token: &str) -> Self {
        match token {
            "static" => Self::Static,
            "union" => Self::Union,
            "intersect" => Self::Intersect,
            _ => Self::Dynamic,
        }
    }
}

/// Allowed range for the zoom multiplier.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ScaleExtent {
    /// Minimum zoom, inclusive.
    pub min: f64,
    /// Maximum zoom, inclusive.
    pub max: f64,
}

impl Default for ScaleExtent {
    fn default() -> Self {
        Self {
            min: 0.0,
            max: f64::INFINITY,
        }
    }
}

impl ScaleExtent {
    /// Creates a scale extent from explicit bounds.
    #[must_use]
    pub const fn new(min: f64, max: f64) -> Self {
        Self { min, max }
    }

    /// Resolves malformed bounds: a NaN bound falls back to its default and
    /// a reversed pair is swapped.
    #[must_use]
    pub fn normalized(self) -> Self {
        let min = if self.min.is_nan() { 0.0 } else { self.min };
        let max = if self.max.is_nan() {
            f64::INFINITY
        } else {
            self.max
        };
        if min <= max {
            Self { min, max }
        } else {
            Self { min: max, max: min }
        }
    }

    /// Clamps a zoom value into this extent.
    ///
    /// The extent must be normalized; see [`ScaleExtent::normalized`].
    #[must_use]
    pub fn clamp(&self, zoom: f64) -> f64 {
        zoom.max(self.min).min(self.max)
    }
}

/// User configuration for view constraints.
///
/// The translate extent is a content-space box; both extents default to
/// unbounded, so an empty configuration only pins the view state to finite
/// arithmetic without restricting it.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ExtentConfig {
    /// How the extents combine with the base transform.
    pub combine: CombineMode,
    /// Allowed zoom range.
    pub scale: ScaleExtent,
    /// Allowed content-space region, as `[[min_x, min_y], [max_x, max_y]]`.
    pub translate: Rect,
}

impl ExtentConfig {
    /// The unbounded translate extent.
    pub const UNBOUNDED_TRANSLATE: Rect = Rect {
        x0: f64::NEG_INFINITY,
        y0: f64::NEG_INFINITY,
        x1: f64::INFINITY,
        y1: f64::INFINITY,
    };

    /// Resolves malformed fields to their documented defaults.
    ///
    /// A translate axis whose bounds are NaN or inverted falls back to
    /// unbounded; the scale extent is normalized. Configuration problems
    /// never fail an update.
    #[must_use]
    pub fn sanitized(self) -> Self {
        let t = self.translate;
        let (x0, x1) = sanitize_axis(t.x0, t.x1);
        let (y0, y1) = sanitize_axis(t.y0, t.y1);
        Self {
            combine: self.combine,
            scale: self.scale.normalized(),
            translate: Rect { x0, y0, x1, y1 },
        }
    }
}

impl Default for ExtentConfig {
    fn default() -> Self {
        Self {
            combine: CombineMode::default(),
            scale: ScaleExtent::default(),
            translate: Self::UNBOUNDED_TRANSLATE,
        }
    }
}

fn sanitize_axis(min: f64, max: f64) -> (f64, f64) {
    if min.is_nan() || max.is_nan() || min > max {
        (f64::NEG_INFINITY, f64::INFINITY)
    } else {
        (min, max)
    }
}
