// Copyright 2026 the Vista Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use kurbo::{Point, Rect};

use vista_extent::{Constraints, ExtentConfig};
use vista_viewbox::{
    viewbox_transform, AlignPair, DegenerateGeometry, FitPolicy, ViewState, ViewboxTransform,
};

use crate::config::ViewConfig;
use crate::gesture::Gesture;

/// Gesture-driven pan/zoom controller over a fitted `viewBox`.
///
/// The controller owns the base fitting transform, the derived constraints,
/// the user-controlled [`ViewState`], and the transient [`Gesture`] state.
/// Events are handled synchronously: each call reads the current state,
/// computes the next one, and replaces it before returning, so no caller
/// ever observes a partially updated view.
#[derive(Clone, Debug)]
pub struct ViewController {
    content: Rect,
    viewport: Rect,
    align: AlignPair,
    fit_policy: FitPolicy,
    extent: Option<ExtentConfig>,
    move_threshold: f64,
    double_tap_threshold: Option<f64>,
    double_tap_zoom: f64,
    wheel_zoom: f64,
    lock: bool,
    base: ViewboxTransform,
    constraints: Option<Constraints>,
    view: ViewState,
    gesture: Gesture,
    touch_origin: Option<Point>,
    last_release: Option<f64>,
}

impl ViewController {
    /// Creates a controller from a resolved configuration.
    ///
    /// The base transform and constraints are computed up front and the
    /// initial view state is routed through the constrainer when
    /// constraining is enabled.
    ///
    /// # Errors
    ///
    /// Returns [`DegenerateGeometry`] when the configured rectangles cannot
    /// be fitted.
    pub fn new(config: ViewConfig) -> Result<Self, DegenerateGeometry> {
        let base = viewbox_transform(config.content, config.viewport, config.align, config.fit_policy)?;
        let extent = config.constrain.map(ExtentConfig::sanitized);
        let constraints = extent
            .as_ref()
            .map(|e| Constraints::build(e, &base, config.viewport.size()));
        let mut controller = Self {
            content: config.content,
            viewport: config.viewport,
            align: config.align,
            fit_policy: config.fit_policy,
            extent,
            move_threshold: config.move_threshold,
            double_tap_threshold: config.double_tap_threshold,
            double_tap_zoom: config.double_tap_zoom,
            wheel_zoom: config.wheel_zoom,
            lock: config.lock,
            base,
            constraints,
            view: ViewState::default(),
            gesture: Gesture::Idle,
            touch_origin: None,
            last_release: None,
        };
        controller.apply(config.initial_view);
        Ok(controller)
    }

    /// Handles a normalized touch event carrying the current contact points.
    ///
    /// One contact pans, two contacts pinch-zoom; an event with zero or more
    /// than two contacts is ignored entirely, as is everything while locked.
    pub fn on_touch(&mut self, points: &[Point]) {
        if self.lock {
            return;
        }
        match points {
            [p] => self.single_contact(*p),
            [a, b] => self.two_contacts(*a, *b),
            _ => {}
        }
    }

    /// Handles a release with its monotonic timestamp in milliseconds.
    ///
    /// Two releases closer together than the configured double-tap
    /// threshold apply a discrete zoom step anchored at `pos`, inverted
    /// when the event signals an inversion modifier. Every release returns
    /// the gesture state to [`Gesture::Idle`] and records its timestamp.
    pub fn on_release(&mut self, pos: Point, timestamp: f64, invert: bool) {
        if let (Some(threshold), Some(last)) = (self.double_tap_threshold, self.last_release) {
            if !self.lock && timestamp - last < threshold {
                let factor = if invert {
                    self.double_tap_zoom.recip()
                } else {
                    self.double_tap_zoom
                };
                self.zoom_by(factor, pos);
            }
        }
        self.last_release = Some(timestamp);
        self.end_gesture();
    }

    /// Handles a wheel tick anchored at the pointer position.
    ///
    /// A positive `delta_y` applies the configured wheel zoom, a
    /// non-positive one its reciprocal. Pan/pinch tracking is untouched.
    pub fn on_wheel(&mut self, delta_y: f64, pos: Point) {
        let factor = if delta_y > 0.0 {
            self.wheel_zoom
        } else {
            self.wheel_zoom.recip()
        };
        self.zoom_by(factor, pos);
    }

    /// Applies a zoom step anchored at a viewport-space point, so the
    /// content under the anchor keeps its screen position.
    pub fn zoom_by(&mut self, factor: f64, anchor: Point) {
        let ViewState { zoom, left, top } = self.view;
        self.apply(ViewState {
            zoom: zoom * factor,
            left: (left - anchor.x) * factor + anchor.x,
            top: (top - anchor.y) * factor + anchor.y,
        });
    }

    /// Replaces the view state, routing it through the constrainer when
    /// constraining is enabled. `ViewState::default()` restores the fitted
    /// view.
    pub fn reset(&mut self, view: ViewState) {
        self.apply(view);
    }

    /// Abandons any in-progress gesture without touching the view state.
    pub fn cancel(&mut self) {
        self.end_gesture();
    }

    /// Replaces the content and viewport rectangles, recomputing the base
    /// transform and constraints. The view state is preserved; call
    /// [`ViewController::reset`] afterwards to override it.
    ///
    /// # Errors
    ///
    /// Returns [`DegenerateGeometry`] when the new rectangles cannot be
    /// fitted, in which case the previous geometry is retained.
    pub fn set_geometry(&mut self, content: Rect, viewport: Rect) -> Result<(), DegenerateGeometry> {
        self.base = viewbox_transform(content, viewport, self.align, self.fit_policy)?;
        self.content = content;
        self.viewport = viewport;
        self.rebuild_constraints();
        Ok(())
    }

    /// Replaces the alignment and fit policy, recomputing the base
    /// transform and constraints. The view state is preserved.
    ///
    /// # Errors
    ///
    /// Returns [`DegenerateGeometry`] when the current rectangles cannot be
    /// fitted, in which case the previous fit is retained.
    pub fn set_fit(&mut self, align: AlignPair, policy: FitPolicy) -> Result<(), DegenerateGeometry> {
        self.base = viewbox_transform(self.content, self.viewport, align, policy)?;
        self.align = align;
        self.fit_policy = policy;
        self.rebuild_constraints();
        Ok(())
    }

    /// Replaces the extent configuration and rebuilds the constraints.
    /// Passing `None` disables constraint enforcement.
    pub fn set_extent_config(&mut self, config: Option<ExtentConfig>) {
        self.extent = config.map(ExtentConfig::sanitized);
        self.rebuild_constraints();
    }

    /// Sets the gesture-admission lock.
    pub fn set_lock(&mut self, lock: bool) {
        self.lock = lock;
    }

    /// Returns the composed transform to hand to the renderer.
    #[must_use]
    pub fn transform(&self) -> ViewboxTransform {
        self.base.composed(self.view)
    }

    /// Returns the base fitting transform.
    #[must_use]
    pub fn base_transform(&self) -> ViewboxTransform {
        self.base
    }

    /// Returns the current pan/zoom state.
    #[must_use]
    pub fn view(&self) -> ViewState {
        self.view
    }

    /// Returns the current zoom multiplier.
    #[must_use]
    pub fn zoom(&self) -> f64 {
        self.view.zoom
    }

    /// Returns the current gesture state.
    #[must_use]
    pub fn gesture(&self) -> Gesture {
        self.gesture
    }

    /// Returns `true` while a pan is in progress.
    #[must_use]
    pub fn is_panning(&self) -> bool {
        self.gesture.is_panning()
    }

    /// Returns `true` while a pinch is in progress.
    #[must_use]
    pub fn is_pinching(&self) -> bool {
        self.gesture.is_pinching()
    }

    /// Returns the content-space rectangle currently visible through the
    /// viewport.
    #[must_use]
    pub fn visible_content_rect(&self) -> Rect {
        self.transform().visible_rect(self.viewport.size())
    }

    /// Snapshot of the controller state for debugging and inspection.
    #[must_use]
    pub fn debug_info(&self) -> ViewDebugInfo {
        ViewDebugInfo {
            content: self.content,
            viewport: self.viewport,
            base: self.base,
            transform: self.transform(),
            visible_content_rect: self.visible_content_rect(),
            view: self.view,
            gesture: self.gesture,
            constrained: self.constraints.is_some(),
        }
    }

    fn single_contact(&mut self, p: Point) {
        if let Gesture::Panning {
            anchor,
            start_left,
            start_top,
        } = self.gesture
        {
            let delta = p - anchor;
            self.apply(ViewState {
                zoom: self.view.zoom,
                left: start_left + delta.x,
                top: start_top + delta.y,
            });
            return;
        }
        // Entering from idle is gated by admission; a contact left over from
        // a pinch re-captures immediately.
        if self.gesture.is_idle() && !self.admit_single(p) {
            return;
        }
        self.gesture = Gesture::Panning {
            anchor: p,
            start_left: self.view.left,
            start_top: self.view.top,
        };
    }

    fn two_contacts(&mut self, a: Point, b: Point) {
        let distance = (b - a).hypot();
        let mid = a.midpoint(b);
        if let Gesture::Pinching {
            anchor,
            start_distance,
            start_zoom,
            start_left,
            start_top,
        } = self.gesture
        {
            let ratio = distance / start_distance;
            if !ratio.is_finite() {
                return;
            }
            let delta = mid - anchor;
            self.apply(ViewState {
                zoom: start_zoom * ratio,
                left: (start_left + delta.x - mid.x) * ratio + mid.x,
                top: (start_top + delta.y - mid.y) * ratio + mid.y,
            });
        } else {
            self.gesture = Gesture::Pinching {
                anchor: mid,
                start_distance: distance,
                start_zoom: self.view.zoom,
                start_left: self.view.left,
                start_top: self.view.top,
            };
        }
    }

    /// Admission test for a single contact starting from idle: a configured
    /// double-tap threshold admits motionless taps, otherwise the contact
    /// must travel past the move threshold from where the sequence began.
    fn admit_single(&mut self, p: Point) -> bool {
        if self.double_tap_threshold.is_some() {
            return true;
        }
        let origin = *self.touch_origin.get_or_insert(p);
        (p - origin).hypot2() >= self.move_threshold
    }

    fn end_gesture(&mut self) {
        self.gesture = Gesture::Idle;
        self.touch_origin = None;
    }

    fn apply(&mut self, proposed: ViewState) {
        self.view = match &self.constraints {
            Some(c) => c.constrain(proposed, self.viewport.size(), &self.base),
            None => proposed,
        };
    }

    fn rebuild_constraints(&mut self) {
        self.constraints = self
            .extent
            .as_ref()
            .map(|e| Constraints::build(e, &self.base, self.viewport.size()));
    }
}

/// Debug snapshot of a [`ViewController`] state.
#[derive(Clone, Copy, Debug)]
pub struct ViewDebugInfo {
    /// Content (`viewBox`) rectangle.
    pub content: Rect,
    /// Viewport (element) rectangle.
    pub viewport: Rect,
    /// Base fitting transform.
    pub base: ViewboxTransform,
    /// Composed transform currently exposed to the renderer.
    pub transform: ViewboxTransform,
    /// Content-space rectangle visible through the viewport.
    pub visible_content_rect: Rect,
    /// Current pan/zoom state.
    pub view: ViewState,
    /// Current gesture state.
    pub gesture: Gesture,
    /// Whether extent constraints are enabled.
    pub constrained: bool,
}

#[cfg(test)]
mod tests {
    use kurbo::{Point, Rect};

    use vista_extent::{CombineMode, ExtentConfig, ScaleExtent};
    use vista_viewbox::{RectRole, ViewState};

    use super::{ViewConfig, ViewController};

    fn square_config() -> ViewConfig {
        ViewConfig::new(
            Rect::new(0.0, 0.0, 100.0, 100.0),
            Rect::new(0.0, 0.0, 300.0, 300.0),
        )
    }

    fn controller(config: ViewConfig) -> ViewController {
        ViewController::new(config).unwrap()
    }

    #[test]
    fn pinch_doubles_zoom_and_fixes_the_midpoint() {
        let mut view = controller(square_config());
        assert_eq!(view.base_transform().scale_x, 3.0);

        let anchor = Point::new(150.0, 150.0);
        let before = view.transform().unapply(anchor);

        view.on_touch(&[Point::new(125.0, 150.0), Point::new(175.0, 150.0)]);
        assert!(view.is_pinching());
        view.on_touch(&[Point::new(100.0, 150.0), Point::new(200.0, 150.0)]);

        assert_eq!(view.view().zoom, 2.0);
        assert_eq!(view.view().left, -150.0);
        assert_eq!(view.view().top, -150.0);

        let after = view.transform().unapply(anchor);
        assert!((after.x - before.x).abs() < 1e-9);
        assert!((after.y - before.y).abs() < 1e-9);
    }

    #[test]
    fn pan_is_admitted_past_the_move_threshold() {
        let mut view = controller(square_config());

        // First contact and a 1-unit wiggle stay below the threshold.
        view.on_touch(&[Point::new(10.0, 10.0)]);
        assert!(view.gesture().is_idle());
        view.on_touch(&[Point::new(11.0, 10.0)]);
        assert!(view.gesture().is_idle());
        assert_eq!(view.view(), ViewState::default());

        // A 3-4-5 displacement reaches 25 >= 5 and captures the pan.
        view.on_touch(&[Point::new(13.0, 14.0)]);
        assert!(view.is_panning());
        assert_eq!(view.view(), ViewState::default());

        view.on_touch(&[Point::new(23.0, 19.0)]);
        assert_eq!(view.view().left, 10.0);
        assert_eq!(view.view().top, 5.0);

        view.on_release(Point::new(23.0, 19.0), 100.0, false);
        assert!(view.gesture().is_idle());
        assert_eq!(view.view().left, 10.0);
    }

    #[test]
    fn double_tap_threshold_admits_motionless_contacts() {
        let mut config = square_config();
        config.double_tap_threshold = Some(300.0);
        let mut view = controller(config);

        view.on_touch(&[Point::new(50.0, 50.0)]);
        assert!(view.is_panning());
    }

    #[test]
    fn lock_refuses_touch_admission() {
        let mut config = square_config();
        config.lock = true;
        let mut view = controller(config);

        view.on_touch(&[Point::new(10.0, 10.0)]);
        view.on_touch(&[Point::new(90.0, 90.0)]);
        view.on_touch(&[Point::new(20.0, 20.0), Point::new(80.0, 80.0)]);
        assert!(view.gesture().is_idle());
        assert_eq!(view.view(), ViewState::default());

        view.set_lock(false);
        view.on_touch(&[Point::new(20.0, 20.0), Point::new(80.0, 80.0)]);
        assert!(view.is_pinching());
    }

    #[test]
    fn surplus_or_missing_contacts_are_ignored() {
        let mut view = controller(square_config());
        view.on_touch(&[]);
        let three = [
            Point::new(0.0, 0.0),
            Point::new(10.0, 0.0),
            Point::new(0.0, 10.0),
        ];
        view.on_touch(&three);
        assert!(view.gesture().is_idle());
        assert_eq!(view.view(), ViewState::default());
    }

    #[test]
    fn pinch_hands_off_to_pan_when_a_contact_lifts() {
        let mut view = controller(square_config());

        view.on_touch(&[Point::new(100.0, 150.0), Point::new(200.0, 150.0)]);
        view.on_touch(&[Point::new(50.0, 150.0), Point::new(250.0, 150.0)]);
        let zoomed = view.view();
        assert_eq!(zoomed.zoom, 2.0);

        // One finger lifts: the remaining contact re-captures as a pan from
        // the zoomed state, without admission gating.
        view.on_touch(&[Point::new(50.0, 150.0)]);
        assert!(view.is_panning());
        assert_eq!(view.view(), zoomed);

        view.on_touch(&[Point::new(60.0, 140.0)]);
        assert_eq!(view.view().left, zoomed.left + 10.0);
        assert_eq!(view.view().top, zoomed.top - 10.0);
        assert_eq!(view.view().zoom, zoomed.zoom);
    }

    #[test]
    fn wheel_zoom_anchors_at_the_pointer() {
        let mut view = controller(square_config());

        view.on_wheel(10.0, Point::new(100.0, 100.0));
        let v = view.view();
        assert!((v.zoom - 1.2).abs() < 1e-12);
        assert!((v.left - -20.0).abs() < 1e-12);
        assert!((v.top - -20.0).abs() < 1e-12);

        // The opposite tick undoes the zoom.
        view.on_wheel(-10.0, Point::new(100.0, 100.0));
        let v = view.view();
        assert!((v.zoom - 1.0).abs() < 1e-12);
        assert!(v.left.abs() < 1e-12);
        assert!(v.top.abs() < 1e-12);
    }

    #[test]
    fn zoom_by_keeps_the_anchor_point_fixed() {
        let mut view = controller(square_config());
        let anchor = Point::new(210.0, 40.0);

        view.zoom_by(1.7, anchor);
        let before = view.transform().unapply(anchor);
        view.zoom_by(0.45, anchor);
        let after = view.transform().unapply(anchor);

        assert!((after.x - before.x).abs() < 1e-9);
        assert!((after.y - before.y).abs() < 1e-9);
    }

    #[test]
    fn double_tap_zooms_within_the_threshold() {
        let mut config = square_config();
        config.double_tap_threshold = Some(250.0);
        let mut view = controller(config);
        let pos = Point::new(50.0, 50.0);

        // The first release never pairs with anything.
        view.on_release(pos, 1000.0, false);
        assert_eq!(view.view(), ViewState::default());

        view.on_release(pos, 1100.0, false);
        let v = view.view();
        assert_eq!(v.zoom, 2.0);
        assert_eq!(v.left, -50.0);
        assert_eq!(v.top, -50.0);

        // A third release outside the window leaves the view alone.
        view.on_release(pos, 1500.0, false);
        assert_eq!(view.view(), v);
    }

    #[test]
    fn double_tap_at_exactly_the_threshold_does_not_zoom() {
        let mut config = square_config();
        config.double_tap_threshold = Some(250.0);
        let mut view = controller(config);
        let pos = Point::new(50.0, 50.0);

        view.on_release(pos, 1000.0, false);
        view.on_release(pos, 1250.0, false);
        assert_eq!(view.view(), ViewState::default());
    }

    #[test]
    fn inverted_double_tap_zooms_out() {
        let mut config = square_config();
        config.double_tap_threshold = Some(250.0);
        let mut view = controller(config);
        let pos = Point::new(50.0, 50.0);

        view.on_release(pos, 1000.0, false);
        view.on_release(pos, 1100.0, true);
        let v = view.view();
        assert_eq!(v.zoom, 0.5);
        assert_eq!(v.left, 25.0);
        assert_eq!(v.top, 25.0);
    }

    #[test]
    fn cancel_discards_the_gesture_but_not_the_view() {
        let mut view = controller(square_config());

        view.on_touch(&[Point::new(10.0, 10.0)]);
        view.on_touch(&[Point::new(20.0, 20.0)]);
        view.on_touch(&[Point::new(30.0, 25.0)]);
        let panned = view.view();
        assert!(view.is_panning());

        view.cancel();
        assert!(view.gesture().is_idle());
        assert_eq!(view.view(), panned);

        // A fresh sequence is admission-gated again.
        view.on_touch(&[Point::new(30.0, 25.0)]);
        assert!(view.gesture().is_idle());
    }

    #[test]
    fn constrained_controller_clamps_gestures() {
        let mut config = square_config();
        config.constrain = Some(ExtentConfig {
            combine: CombineMode::Static,
            scale: ScaleExtent::new(1.0, 1.0),
            translate: Rect::new(0.0, 0.0, 100.0, 100.0),
        });
        let mut view = controller(config);

        // Zoom is pinned, so wheel ticks cannot change it.
        view.on_wheel(10.0, Point::new(150.0, 150.0));
        assert_eq!(view.zoom(), 1.0);

        // Panning beyond the extent snaps back to it.
        view.on_touch(&[Point::new(10.0, 10.0)]);
        view.on_touch(&[Point::new(60.0, 10.0)]);
        view.on_touch(&[Point::new(80.0, 10.0)]);
        let v = view.view();
        assert_eq!(v.zoom, 1.0);
        assert!(v.left.abs() < 1e-12);
        assert_eq!(v.top, 0.0);
    }

    #[test]
    fn initial_view_is_seeded_and_constrained() {
        let mut config = square_config();
        config.initial_view = ViewState {
            zoom: 10.0,
            left: 0.0,
            top: 0.0,
        };
        config.constrain = Some(ExtentConfig {
            scale: ScaleExtent::new(0.5, 2.0),
            ..ExtentConfig::default()
        });
        let view = controller(config);
        assert_eq!(view.zoom(), 2.0);
    }

    #[test]
    fn reset_restores_the_fitted_view() {
        let mut view = controller(square_config());
        view.on_wheel(10.0, Point::new(70.0, 130.0));
        view.reset(ViewState::default());
        assert_eq!(view.view(), ViewState::default());
        assert_eq!(view.transform(), view.base_transform());
    }

    #[test]
    fn geometry_updates_preserve_the_view_state() {
        let mut view = controller(square_config());
        view.zoom_by(2.0, Point::new(0.0, 0.0));
        let zoomed = view.view();

        view.set_geometry(
            Rect::new(0.0, 0.0, 100.0, 100.0),
            Rect::new(0.0, 0.0, 600.0, 600.0),
        )
        .unwrap();
        assert_eq!(view.base_transform().scale_x, 6.0);
        assert_eq!(view.view(), zoomed);
    }

    #[test]
    fn degenerate_geometry_retains_the_last_valid_fit() {
        let mut view = controller(square_config());
        let base = view.base_transform();

        let err = view
            .set_geometry(Rect::new(0.0, 0.0, 0.0, 100.0), Rect::new(0.0, 0.0, 300.0, 300.0))
            .unwrap_err();
        assert_eq!(err.role, RectRole::Content);
        assert_eq!(view.base_transform(), base);
        assert_eq!(view.visible_content_rect(), Rect::new(0.0, 0.0, 100.0, 100.0));
    }

    #[test]
    fn fit_updates_recompute_the_base_transform() {
        let mut config = square_config();
        config.content = Rect::new(0.0, 0.0, 100.0, 50.0);
        let mut view = controller(config);
        assert_eq!(view.base_transform().scale_x, 3.0);

        use vista_viewbox::{AlignPair, FitPolicy};
        view.set_fit(AlignPair::default(), FitPolicy::Slice).unwrap();
        assert_eq!(view.base_transform().scale_x, 6.0);
    }

    #[test]
    fn debug_info_reflects_the_current_state() {
        let mut view = controller(square_config());
        view.zoom_by(2.0, Point::new(0.0, 0.0));
        let info = view.debug_info();
        assert_eq!(info.viewport, Rect::new(0.0, 0.0, 300.0, 300.0));
        assert_eq!(info.view.zoom, 2.0);
        assert_eq!(info.transform.scale_x, 6.0);
        assert!(!info.constrained);
        assert!(info.gesture.is_idle());
    }
}
