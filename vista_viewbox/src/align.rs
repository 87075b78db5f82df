// Copyright 2026 the Vista Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

/// Alignment of fitted content along one axis.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Default)]
pub enum Align {
    /// Align the content's minimum edge with the viewport's minimum edge.
    Min,
    /// Center the content within the viewport.
    #[default]
    Mid,
    /// Align the content's maximum edge with the viewport's maximum edge.
    Max,
}

/// Per-axis alignment pair used by the fitting transform.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Default)]
pub struct AlignPair {
    /// Horizontal alignment.
    pub x: Align,
    /// Vertical alignment.
    pub y: Align,
}

impl AlignPair {
    /// Creates an alignment pair from explicit per-axis values.
    #[must_use]
    pub const fn new(x: Align, y: Align) -> Self {
        Self { x, y }
    }

    /// Resolves an alignment token into a per-axis pair.
    ///
    /// The short tokens `"min"`/`"start"`, `"mid"`, and `"max"`/`"end"`
    /// apply one alignment to both axes. Any other token is inspected per
    /// axis for SVG-style `xMin`/`xMid`/`xMax` and `YMin`/`YMid`/`YMax`
    /// sub-strings, matched case-insensitively so that both the `xMidYMid`
    /// and `xMidyMid` spellings resolve the vertical axis. An absent token,
    /// or an axis with no recognized sub-string, falls back to [`Align::Mid`];
    /// there is no error path.
    ///
    /// ```
    /// use vista_viewbox::{Align, AlignPair};
    ///
    /// assert_eq!(AlignPair::from_token(None), AlignPair::default());
    /// assert_eq!(
    ///     AlignPair::from_token(Some("start")),
    ///     AlignPair::new(Align::Min, Align::Min)
    /// );
    /// assert_eq!(
    ///     AlignPair::from_token(Some("xMinYMax")),
    ///     AlignPair::new(Align::Min, Align::Max)
    /// );
    /// ```
    #[must_use]
    pub fn from_token(token: Option<&str>) -> Self {
        let Some(token) = token else {
            return Self::default();
        };
        match token {
            "min" | "start" => Self::new(Align::Min, Align::Min),
            "mid" => Self::default(),
            "max" | "end" => Self::new(Align::Max, Align::Max),
            raw => Self::new(axis_align(raw, "xmin", "xmax"), axis_align(raw, "ymin", "ymax")),
        }
    }
}

// A `mid` sub-string and an unrecognized axis both resolve to `Mid`, so only
// the min/max markers need to be searched for.
fn axis_align(token: &str, min: &str, max: &str) -> Align {
    if contains_ignore_case(token, min) {
        Align::Min
    } else if contains_ignore_case(token, max) {
        Align::Max
    } else {
        Align::Mid
    }
}

fn contains_ignore_case(haystack: &str, needle: &str) -> bool {
    haystack
        .as_bytes()
        .windows(needle.len())
        .any(|w| w.eq_ignore_ascii_case(needle.as_bytes()))
}
