//! Viewport-reveal controller.
//!
//! Decides, for one section and the current viewport geometry, where that
//! section sits on its entrance-animation timeline. The controller is a pure
//! state machine over `(spec, visibility events, time)` - it never touches a
//! rendering host, which is what makes it testable with plain `cargo test`.
//!
//! One controller instance is owned per rendered section. Nothing here is
//! shared or global, so multiple page instances (e.g. in tests) cannot
//! interfere with each other.

use crate::types::{AnimationSpec, VisualState};

/// Viewport-space rectangle.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Rect {
    pub x: f64,
    pub y: f64,
    pub width: f64,
    pub height: f64,
}

impl Rect {
    pub fn new(x: f64, y: f64, width: f64, height: f64) -> Self {
        Self {
            x,
            y,
            width,
            height,
        }
    }

    /// True when the overlap with `other` is strictly positive. Rectangles
    /// that merely touch along an edge do not intersect.
    pub fn intersects(&self, other: &Rect) -> bool {
        self.x < other.x + other.width
            && other.x < self.x + self.width
            && self.y < other.y + other.height
            && other.y < self.y + self.height
    }
}

/// Where a section currently sits on its reveal timeline.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RevealPhase {
    /// Not yet eligible, or eligible but still inside the delay window.
    NotRevealed,
    /// Interpolating from the initial to the target state.
    Revealing,
    /// Settled at the target state.
    Revealed,
}

/// Per-section reveal state machine.
///
/// Visibility changes arrive through [`RevealController::observe`] (geometry)
/// or [`RevealController::set_visible`] (pre-computed). Sampling through
/// [`RevealController::state_at`] is read-only and idempotent: repeated calls
/// with unchanged inputs produce the same answer and mutate nothing.
#[derive(Debug, Clone)]
pub struct RevealController {
    spec: AnimationSpec,
    /// Latched on first visibility. For `trigger_once` specs this never
    /// reverts, so the entrance plays at most once per page load.
    has_triggered: bool,
    /// Time the current animation timeline was anchored, if any. Cleared on
    /// exit only for repeatable specs.
    anchor: Option<f64>,
    visible: bool,
}

impl RevealController {
    pub fn new(spec: AnimationSpec) -> Self {
        Self {
            spec,
            has_triggered: false,
            anchor: None,
            visible: false,
        }
    }

    pub fn spec(&self) -> &AnimationSpec {
        &self.spec
    }

    pub fn has_triggered(&self) -> bool {
        self.has_triggered
    }

    pub fn is_visible(&self) -> bool {
        self.visible
    }

    /// Feed one geometry sample: the section's bounding box and the viewport,
    /// both in the same coordinate space, plus the current time in seconds.
    pub fn observe(&mut self, section: Rect, viewport: Rect, now_seconds: f64) {
        self.set_visible(section.intersects(&viewport), now_seconds);
    }

    /// Feed one visibility sample. Unchanged visibility is a no-op.
    pub fn set_visible(&mut self, visible: bool, now_seconds: f64) {
        if visible == self.visible {
            return;
        }
        self.visible = visible;

        if visible {
            if self.spec.trigger_once() && self.has_triggered {
                // Latched: the first-view timeline stands, later entries are ignored.
                return;
            }
            if self.anchor.is_none() {
                self.anchor = Some(now_seconds);
                self.has_triggered = true;
            }
        } else if !self.spec.trigger_once() {
            // Repeatable sections reset on exit. Leaving before the delay
            // elapsed cancels the pending reveal entirely.
            self.anchor = None;
        }
    }

    pub fn phase_at(&self, now_seconds: f64) -> RevealPhase {
        match self.elapsed_since_delay(now_seconds) {
            None => RevealPhase::NotRevealed,
            Some(elapsed) if elapsed <= 0.0 => RevealPhase::NotRevealed,
            Some(elapsed) if elapsed < f64::from(self.spec.duration_seconds()) => {
                RevealPhase::Revealing
            }
            Some(_) => RevealPhase::Revealed,
        }
    }

    /// Sample the visual state at `now_seconds`. Pure with respect to the
    /// controller: a section that never entered the viewport stays at
    /// `initial` indefinitely.
    pub fn state_at(&self, now_seconds: f64) -> VisualState {
        let Some(elapsed) = self.elapsed_since_delay(now_seconds) else {
            return self.spec.initial();
        };
        if elapsed <= 0.0 {
            return self.spec.initial();
        }
        let duration = f64::from(self.spec.duration_seconds());
        if duration <= 0.0 || elapsed >= duration {
            return self.spec.target();
        }
        let t = (elapsed / duration) as f32;
        self.spec.initial().lerp(&self.spec.target(), t)
    }

    /// Seconds elapsed past the delay window, or `None` when no timeline is
    /// anchored.
    fn elapsed_since_delay(&self, now_seconds: f64) -> Option<f64> {
        self.anchor
            .map(|anchor| now_seconds - anchor - f64::from(self.spec.delay_seconds()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::AnimationSpec;
    use pretty_assertions::assert_eq;

    fn viewport() -> Rect {
        Rect::new(0.0, 0.0, 1280.0, 800.0)
    }

    fn inside() -> Rect {
        Rect::new(100.0, 300.0, 600.0, 200.0)
    }

    fn below_fold() -> Rect {
        Rect::new(100.0, 2400.0, 600.0, 200.0)
    }

    fn fade_once(delay: f32) -> RevealController {
        RevealController::new(AnimationSpec::fade_up(delay).unwrap())
    }

    fn fade_repeat(delay: f32) -> RevealController {
        RevealController::new(AnimationSpec::fade_up(delay).unwrap().repeat_on_reenter())
    }

    #[test]
    fn test_intersection_counts_any_overlap() {
        let vp = viewport();
        // One pixel row poking into the bottom of the viewport.
        let peeking = Rect::new(0.0, 799.0, 400.0, 300.0);
        assert!(peeking.intersects(&vp));
        assert!(!below_fold().intersects(&vp));
    }

    #[test]
    fn test_edge_touching_is_not_intersection() {
        let vp = viewport();
        let touching = Rect::new(0.0, 800.0, 400.0, 300.0);
        assert!(!touching.intersects(&vp));
    }

    #[test]
    fn test_never_visible_stays_initial() {
        let mut ctrl = fade_once(0.1);
        for i in 0..50 {
            ctrl.observe(below_fold(), viewport(), i as f64 * 0.016);
        }
        assert_eq!(ctrl.phase_at(1.0), RevealPhase::NotRevealed);
        assert_eq!(ctrl.state_at(1.0), ctrl.spec().initial());
        assert!(!ctrl.has_triggered());
    }

    #[test]
    fn test_trigger_once_latch_survives_exit_and_reentry() {
        let mut ctrl = fade_once(0.0);
        ctrl.observe(inside(), viewport(), 0.0);
        assert!(ctrl.has_triggered());

        // Scroll away, far past the animation, then back.
        ctrl.observe(below_fold(), viewport(), 5.0);
        assert!(ctrl.has_triggered());
        assert_eq!(ctrl.state_at(5.0), ctrl.spec().target());

        ctrl.observe(inside(), viewport(), 10.0);
        assert!(ctrl.has_triggered());
        // The first-view timeline stands: still fully revealed, no replay.
        assert_eq!(ctrl.phase_at(10.0), RevealPhase::Revealed);
        assert_eq!(ctrl.state_at(10.0), ctrl.spec().target());
    }

    #[test]
    fn test_trigger_once_pending_reveal_fires_after_exit_during_delay() {
        // First-view visibility is latched, not re-checked: leaving during
        // the delay window must not cancel the pending transition.
        let mut ctrl = fade_once(0.5);
        ctrl.observe(inside(), viewport(), 0.0);
        ctrl.observe(below_fold(), viewport(), 0.2);

        assert_eq!(ctrl.phase_at(0.3), RevealPhase::NotRevealed);
        assert_eq!(ctrl.phase_at(0.7), RevealPhase::Revealing);
        assert_eq!(ctrl.state_at(5.0), ctrl.spec().target());
    }

    #[test]
    fn test_repeatable_resets_on_exit_and_replays_on_reentry() {
        let mut ctrl = fade_repeat(0.0);

        ctrl.observe(inside(), viewport(), 0.0);
        assert_eq!(ctrl.state_at(2.0), ctrl.spec().target());

        ctrl.observe(below_fold(), viewport(), 3.0);
        assert_eq!(ctrl.phase_at(3.0), RevealPhase::NotRevealed);
        assert_eq!(ctrl.state_at(3.0), ctrl.spec().initial());

        ctrl.observe(inside(), viewport(), 4.0);
        assert_eq!(ctrl.phase_at(4.4), RevealPhase::Revealing);
        assert_eq!(ctrl.state_at(6.0), ctrl.spec().target());
    }

    #[test]
    fn test_repeatable_exit_during_delay_cancels_pending_reveal() {
        let mut ctrl = fade_repeat(0.1);
        ctrl.observe(inside(), viewport(), 0.0);
        ctrl.observe(below_fold(), viewport(), 0.05);

        // No transition ever starts.
        assert_eq!(ctrl.phase_at(0.2), RevealPhase::NotRevealed);
        assert_eq!(ctrl.state_at(0.2), ctrl.spec().initial());
        assert_eq!(ctrl.state_at(10.0), ctrl.spec().initial());
    }

    #[test]
    fn test_observation_is_idempotent_for_unchanged_geometry() {
        let mut ctrl = fade_once(0.1);
        ctrl.observe(inside(), viewport(), 0.0);
        let snapshot = ctrl.clone();

        // Same geometry a frame later: no state change beyond time flowing.
        ctrl.observe(inside(), viewport(), 0.016);
        assert_eq!(ctrl.has_triggered(), snapshot.has_triggered());
        assert_eq!(ctrl.state_at(0.5), snapshot.state_at(0.5));
        assert_eq!(ctrl.phase_at(0.5), snapshot.phase_at(0.5));
    }

    #[test]
    fn test_delay_then_strictly_increasing_opacity_then_settled() {
        // Scenario from the feature-card timing: delay 0.1s, duration 0.8s,
        // enters the viewport at t=0.
        let mut ctrl = fade_once(0.1);
        ctrl.observe(inside(), viewport(), 0.0);

        assert_eq!(ctrl.state_at(0.0).opacity, 0.0);
        assert_eq!(ctrl.state_at(0.09).opacity, 0.0);

        let mut last = 0.0;
        let mut t = 0.15;
        while t < 0.9 {
            let opacity = ctrl.state_at(t).opacity;
            assert!(
                opacity > last,
                "opacity not strictly increasing at t={t}: {opacity} <= {last}"
            );
            last = opacity;
            t += 0.1;
        }

        assert_eq!(ctrl.state_at(0.9).opacity, 1.0);
        assert_eq!(ctrl.state_at(12.0), ctrl.spec().target());
    }

    #[test]
    fn test_zero_duration_jumps_to_target_after_delay() {
        let spec = AnimationSpec::new(
            crate::types::VisualState::hidden_at(0.0, 20.0),
            crate::types::VisualState::VISIBLE,
            0.2,
            0.0,
            true,
        )
        .unwrap();
        let mut ctrl = RevealController::new(spec);
        ctrl.set_visible(true, 0.0);

        assert_eq!(ctrl.state_at(0.1), ctrl.spec().initial());
        assert_eq!(ctrl.state_at(0.3), ctrl.spec().target());
    }

    #[test]
    fn test_noop_spec_never_moves() {
        let mut ctrl = RevealController::new(AnimationSpec::none());
        ctrl.observe(inside(), viewport(), 0.0);
        assert_eq!(ctrl.state_at(0.0), ctrl.spec().target());
        assert_eq!(ctrl.state_at(9.0), ctrl.spec().target());
    }
}
