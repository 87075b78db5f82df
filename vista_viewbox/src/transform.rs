// Copyright 2026 the Vista Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use core::fmt;

use kurbo::{Affine, Point, Rect, Size};

use crate::align::{Align, AlignPair};

/// How the content rectangle is scaled to fill the viewport.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Default)]
pub enum FitPolicy {
    /// Scale uniformly so the whole content is visible; slack is distributed
    /// per the alignment pair.
    #[default]
    Meet,
    /// Scale uniformly so the content covers the whole viewport; overflow is
    /// distributed per the alignment pair.
    Slice,
    /// Scale uniformly by the smaller axis ratio and re-center, ignoring the
    /// alignment pair.
    None,
}

impl FitPolicy {
    /// Resolves a policy token, falling back to [`FitPolicy::Meet`] for
    /// anything unrecognized.
    #[must_use]
    pub fn from_token(token: Option<&str>) -> Self {
        match token {
            Some("slice") => Self::Slice,
            Some("none") => Self::None,
            _ => Self::Meet,
        }
    }
}

/// Which input rectangle of a fit computation was unusable.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum RectRole {
    /// The content (`viewBox`) rectangle.
    Content,
    /// The viewport (element) rectangle.
    Viewport,
}

/// Error returned when a fit computation is given a rectangle with
/// zero, negative, or non-finite extent.
///
/// Fitting such a rectangle would produce a non-finite scale; callers are
/// expected to surface this and keep their last valid transform.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct DegenerateGeometry {
    /// The offending rectangle.
    pub role: RectRole,
}

impl fmt::Display for DegenerateGeometry {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let role = match self.role {
            RectRole::Content => "content",
            RectRole::Viewport => "viewport",
        };
        write!(f, "{role} rectangle has no usable area")
    }
}

impl core::error::Error for DegenerateGeometry {}

/// User-controlled pan/zoom state layered on top of a [`ViewboxTransform`].
///
/// `zoom` is a multiplier on the base scales; `left`/`top` are additive
/// offsets in viewport space applied before the base translation is scaled.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ViewState {
    /// Zoom multiplier, positive.
    pub zoom: f64,
    /// Horizontal offset in viewport units.
    pub left: f64,
    /// Vertical offset in viewport units.
    pub top: f64,
}

impl Default for ViewState {
    fn default() -> Self {
        Self {
            zoom: 1.0,
            left: 0.0,
            top: 0.0,
        }
    }
}

/// An axis-aligned translate-then-scale transform from content space into
/// viewport space.
///
/// Content coordinates map to viewport coordinates as
/// `(x · scale_x + translate_x, y · scale_y + translate_y)`.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ViewboxTransform {
    /// Horizontal translation in viewport units.
    pub translate_x: f64,
    /// Vertical translation in viewport units.
    pub translate_y: f64,
    /// Horizontal scale factor.
    pub scale_x: f64,
    /// Vertical scale factor.
    pub scale_y: f64,
}

impl ViewboxTransform {
    /// The identity transform.
    pub const IDENTITY: Self = Self {
        translate_x: 0.0,
        translate_y: 0.0,
        scale_x: 1.0,
        scale_y: 1.0,
    };

    /// Composes this base transform with a pan/zoom state, producing the
    /// transform a renderer applies to the content:
    /// `translate(left + zoom·tx, top + zoom·ty) ∘ scale(zoom·sx, zoom·sy)`.
    #[must_use]
    pub fn composed(&self, view: ViewState) -> Self {
        Self {
            translate_x: view.left + view.zoom * self.translate_x,
            translate_y: view.top + view.zoom * self.translate_y,
            scale_x: view.zoom * self.scale_x,
            scale_y: view.zoom * self.scale_y,
        }
    }

    /// Maps a content-space point into viewport space.
    #[must_use]
    pub fn apply(&self, pt: Point) -> Point {
        Point::new(
            pt.x * self.scale_x + self.translate_x,
            pt.y * self.scale_y + self.translate_y,
        )
    }

    /// Maps a viewport-space point back into content space.
    #[must_use]
    pub fn unapply(&self, pt: Point) -> Point {
        Point::new(
            (pt.x - self.translate_x) / self.scale_x,
            (pt.y - self.translate_y) / self.scale_y,
        )
    }

    /// Returns the content-space rectangle visible through a viewport of the
    /// given size under this transform.
    #[must_use]
    pub fn visible_rect(&self, viewport: Size) -> Rect {
        Rect::from_origin_size(
            self.unapply(Point::ZERO),
            Size::new(viewport.width / self.scale_x, viewport.height / self.scale_y),
        )
    }

    /// Converts into a [`kurbo::Affine`].
    #[must_use]
    pub fn to_affine(&self) -> Affine {
        Affine::translate((self.translate_x, self.translate_y))
            * Affine::scale_non_uniform(self.scale_x, self.scale_y)
    }
}

/// Computes the base transform fitting `content` into `viewport`.
///
/// This follows the SVG viewport-transform rules: per-axis scales are
/// unified by the fit policy, then slack (or overflow) is distributed along
/// each axis by the alignment pair. [`FitPolicy::None`] takes the smaller
/// axis ratio and re-centers, ignoring alignment.
///
/// # Errors
///
/// Returns [`DegenerateGeometry`] when either rectangle has a zero,
/// negative, or non-finite width or height, or a non-finite origin.
pub fn viewbox_transform(
    content: Rect,
    viewport: Rect,
    align: AlignPair,
    policy: FitPolicy,
) -> Result<ViewboxTransform, DegenerateGeometry> {
    check_rect(content, RectRole::Content)?;
    check_rect(viewport, RectRole::Viewport)?;

    let vb_width = content.width();
    let vb_height = content.height();
    let e_width = viewport.width();
    let e_height = viewport.height();

    let mut scale_x = e_width / vb_width;
    let mut scale_y = e_height / vb_height;
    let mut translate_x = viewport.x0 - content.x0 * scale_x;
    let mut translate_y = viewport.y0 - content.y0 * scale_y;

    match policy {
        FitPolicy::None => {
            let scale = scale_x.min(scale_y);
            scale_x = scale;
            scale_y = scale;
            if scale > 1.0 {
                translate_x -= (e_width / scale - vb_width) / 2.0;
                translate_y -= (e_height / scale - vb_height) / 2.0;
            } else {
                translate_x -= (e_width - vb_width * scale) / 2.0;
                translate_y -= (e_height - vb_height * scale) / 2.0;
            }
        }
        FitPolicy::Meet | FitPolicy::Slice => {
            let scale = if policy == FitPolicy::Meet {
                scale_x.min(scale_y)
            } else {
                scale_x.max(scale_y)
            };
            scale_x = scale;
            scale_y = scale;
            translate_x += match align.x {
                Align::Min => 0.0,
                Align::Mid => (e_width - vb_width * scale_x) / 2.0,
                Align::Max => e_width - vb_width * scale_x,
            };
            translate_y += match align.y {
                Align::Min => 0.0,
                Align::Mid => (e_height - vb_height * scale_y) / 2.0,
                Align::Max => e_height - vb_height * scale_y,
            };
        }
    }

    Ok(ViewboxTransform {
        translate_x,
        translate_y,
        scale_x,
        scale_y,
    })
}

fn check_rect(rect: Rect, role: RectRole) -> Result<(), DegenerateGeometry> {
    if rect.is_finite() && rect.width() > 0.0 && rect.height() > 0.0 {
        Ok(())
    } else {
        Err(DegenerateGeometry { role })
    }
}
