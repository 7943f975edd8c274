//! Data model for the presentation page.
//!
//! These types define what the page *is*, separated from how it renders:
//!
//! - **Serializable** - JSON import/export via serde
//! - **Clone-friendly** - Components can take owned copies without borrowing issues
//! - **Validated at construction** - malformed animation parameters are a
//!   build-time bug and are rejected before anything renders
//!
//! # Example
//!
//! ```rust
//! use sentinel_reveal::types::{AnimationSpec, Section, SectionKind};
//!
//! let card = Section {
//!     id: "feature-realtime-detection".into(),
//!     kind: SectionKind::FeatureCard,
//!     title: "Real-time Detection".into(),
//!     body: "Statistical anomaly detection using z-scores.".into(),
//!     items: vec![],
//!     animation: AnimationSpec::fade_up(0.1).unwrap(),
//! };
//! assert_eq!(card.kind, SectionKind::FeatureCard);
//! ```

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Default entrance transition length, in seconds.
pub const DEFAULT_DURATION_SECONDS: f32 = 0.8;

/// How far slide-in sections start from their resting position, in pixels.
pub const SLIDE_DISTANCE_PX: f32 = 20.0;

/// Validation failure for compiled-in animation parameters.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum AnimationError {
    #[error("delay must be finite and non-negative, got {0}")]
    InvalidDelay(f32),
    #[error("duration must be finite and non-negative, got {0}")]
    InvalidDuration(f32),
    #[error("opacity must be within [0, 1], got {0}")]
    InvalidOpacity(f32),
    #[error("offset must be finite, got ({0}, {1})")]
    InvalidOffset(f32, f32),
    #[error("scale must be finite and positive, got {0}")]
    InvalidScale(f32),
}

/// Validation failure for the compiled-in content table.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum ContentError {
    #[error("section `{id}` has a malformed animation spec: {source}")]
    BadAnimation {
        id: String,
        #[source]
        source: AnimationError,
    },
}

/// The closed set of content block variants on the page.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum SectionKind {
    Navigation,
    Hero,
    FeatureCard,
    ProcessStep,
    TokenCard,
    UseCase,
    RoadmapItem,
    CallToAction,
    Footer,
}

/// One self-contained content block: copy plus animation metadata, no markup.
///
/// Sections are built once at startup from the fixed table in
/// [`crate::content`] and never mutated afterwards.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Section {
    /// Stable identifier, also usable as a DOM anchor.
    pub id: String,
    pub kind: SectionKind,
    pub title: String,
    pub body: String,
    /// Bullet points, deliverables, or other per-section list content.
    pub items: Vec<String>,
    pub animation: AnimationSpec,
}

/// A point on the animation timeline: opacity, translation and scale.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct VisualState {
    pub opacity: f32,
    pub offset_x: f32,
    pub offset_y: f32,
    pub scale: f32,
}

impl VisualState {
    /// Fully visible, at rest.
    pub const VISIBLE: Self = Self {
        opacity: 1.0,
        offset_x: 0.0,
        offset_y: 0.0,
        scale: 1.0,
    };

    /// Hidden, displaced by `(dx, dy)` pixels at scale 1.
    pub fn hidden_at(dx: f32, dy: f32) -> Self {
        Self {
            opacity: 0.0,
            offset_x: dx,
            offset_y: dy,
            scale: 1.0,
        }
    }

    /// Hidden, in place, pre-scaled to `scale`.
    pub fn hidden_scaled(scale: f32) -> Self {
        Self {
            opacity: 0.0,
            offset_x: 0.0,
            offset_y: 0.0,
            scale,
        }
    }

    /// Linear interpolation towards `other`. `t` is clamped to `[0, 1]`.
    pub fn lerp(&self, other: &Self, t: f32) -> Self {
        let t = t.clamp(0.0, 1.0);
        let mix = |a: f32, b: f32| a + (b - a) * t;
        Self {
            opacity: mix(self.opacity, other.opacity),
            offset_x: mix(self.offset_x, other.offset_x),
            offset_y: mix(self.offset_y, other.offset_y),
            scale: mix(self.scale, other.scale),
        }
    }

    fn validate(&self) -> Result<(), AnimationError> {
        if !self.opacity.is_finite() || !(0.0..=1.0).contains(&self.opacity) {
            return Err(AnimationError::InvalidOpacity(self.opacity));
        }
        if !self.offset_x.is_finite() || !self.offset_y.is_finite() {
            return Err(AnimationError::InvalidOffset(self.offset_x, self.offset_y));
        }
        if !self.scale.is_finite() || self.scale <= 0.0 {
            return Err(AnimationError::InvalidScale(self.scale));
        }
        Ok(())
    }
}

/// Declares the entrance transition a section undergoes when it first becomes
/// visible: `initial` state, `target` state, timing, and whether the reveal
/// latches after the first trigger.
///
/// Fields are private so every spec in the program went through [`AnimationSpec::new`]
/// and is known valid.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct AnimationSpec {
    initial: VisualState,
    target: VisualState,
    delay_seconds: f32,
    duration_seconds: f32,
    trigger_once: bool,
}

impl AnimationSpec {
    pub fn new(
        initial: VisualState,
        target: VisualState,
        delay_seconds: f32,
        duration_seconds: f32,
        trigger_once: bool,
    ) -> Result<Self, AnimationError> {
        if !delay_seconds.is_finite() || delay_seconds < 0.0 {
            return Err(AnimationError::InvalidDelay(delay_seconds));
        }
        if !duration_seconds.is_finite() || duration_seconds < 0.0 {
            return Err(AnimationError::InvalidDuration(duration_seconds));
        }
        initial.validate()?;
        target.validate()?;
        Ok(Self {
            initial,
            target,
            delay_seconds,
            duration_seconds,
            trigger_once,
        })
    }

    /// No-op spec for static chrome sections (navigation, footer): the
    /// section is already at its resting state and never transitions.
    pub fn none() -> Self {
        Self {
            initial: VisualState::VISIBLE,
            target: VisualState::VISIBLE,
            delay_seconds: 0.0,
            duration_seconds: 0.0,
            trigger_once: true,
        }
    }

    /// Fade in, in place, with no delay. Used by section headings. Plays
    /// once. Infallible because every parameter is a known-valid constant.
    pub fn fade() -> Self {
        Self {
            initial: VisualState {
                opacity: 0.0,
                ..VisualState::VISIBLE
            },
            target: VisualState::VISIBLE,
            delay_seconds: 0.0,
            duration_seconds: DEFAULT_DURATION_SECONDS,
            trigger_once: true,
        }
    }

    /// Fade in while sliding up 20px. Plays once.
    pub fn fade_up(delay_seconds: f32) -> Result<Self, AnimationError> {
        Self::new(
            VisualState::hidden_at(0.0, SLIDE_DISTANCE_PX),
            VisualState::VISIBLE,
            delay_seconds,
            DEFAULT_DURATION_SECONDS,
            true,
        )
    }

    /// Fade in while sliding 20px in from the left. Plays once.
    pub fn slide_in(delay_seconds: f32) -> Result<Self, AnimationError> {
        Self::new(
            VisualState::hidden_at(-SLIDE_DISTANCE_PX, 0.0),
            VisualState::VISIBLE,
            delay_seconds,
            DEFAULT_DURATION_SECONDS,
            true,
        )
    }

    /// Fade in while growing from 95% scale. Plays once.
    pub fn scale_in(delay_seconds: f32) -> Result<Self, AnimationError> {
        Self::new(
            VisualState::hidden_scaled(0.95),
            VisualState::VISIBLE,
            delay_seconds,
            DEFAULT_DURATION_SECONDS,
            true,
        )
    }

    /// Same transition, but re-armed every time the section leaves the
    /// viewport instead of latching after the first reveal.
    pub fn repeat_on_reenter(mut self) -> Self {
        self.trigger_once = false;
        self
    }

    pub fn initial(&self) -> VisualState {
        self.initial
    }

    pub fn target(&self) -> VisualState {
        self.target
    }

    pub fn delay_seconds(&self) -> f32 {
        self.delay_seconds
    }

    pub fn duration_seconds(&self) -> f32 {
        self.duration_seconds
    }

    pub fn trigger_once(&self) -> bool {
        self.trigger_once
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_negative_duration_rejected() {
        let err = AnimationSpec::new(
            VisualState::hidden_at(0.0, 20.0),
            VisualState::VISIBLE,
            0.0,
            -0.5,
            true,
        )
        .unwrap_err();
        assert_eq!(err, AnimationError::InvalidDuration(-0.5));
    }

    #[test]
    fn test_nan_delay_rejected() {
        let err = AnimationSpec::new(
            VisualState::hidden_at(0.0, 20.0),
            VisualState::VISIBLE,
            f32::NAN,
            0.8,
            true,
        )
        .unwrap_err();
        assert!(matches!(err, AnimationError::InvalidDelay(_)));
    }

    #[test]
    fn test_out_of_range_opacity_rejected() {
        let bad = VisualState {
            opacity: 1.5,
            ..VisualState::VISIBLE
        };
        let err = AnimationSpec::new(bad, VisualState::VISIBLE, 0.0, 0.8, true).unwrap_err();
        assert_eq!(err, AnimationError::InvalidOpacity(1.5));
    }

    #[test]
    fn test_zero_scale_rejected() {
        let bad = VisualState {
            scale: 0.0,
            ..VisualState::VISIBLE
        };
        let err = AnimationSpec::new(VisualState::VISIBLE, bad, 0.0, 0.8, true).unwrap_err();
        assert_eq!(err, AnimationError::InvalidScale(0.0));
    }

    #[test]
    fn test_lerp_endpoints_and_midpoint() {
        let from = VisualState::hidden_at(0.0, 20.0);
        let to = VisualState::VISIBLE;

        assert_eq!(from.lerp(&to, 0.0), from);
        assert_eq!(from.lerp(&to, 1.0), to);

        let mid = from.lerp(&to, 0.5);
        assert_eq!(mid.opacity, 0.5);
        assert_eq!(mid.offset_y, 10.0);
    }

    #[test]
    fn test_lerp_clamps_t() {
        let from = VisualState::hidden_at(0.0, 20.0);
        let to = VisualState::VISIBLE;
        assert_eq!(from.lerp(&to, -1.0), from);
        assert_eq!(from.lerp(&to, 2.0), to);
    }

    #[test]
    fn test_fade_spec_changes_opacity_only() {
        let spec = AnimationSpec::fade();
        assert_eq!(spec.initial().opacity, 0.0);
        assert_eq!(spec.initial().offset_x, 0.0);
        assert_eq!(spec.initial().offset_y, 0.0);
        assert_eq!(spec.initial().scale, 1.0);
        assert_eq!(spec.target(), VisualState::VISIBLE);
        assert_eq!(spec.delay_seconds(), 0.0);
        assert!(spec.trigger_once());
    }

    #[test]
    fn test_none_spec_is_at_rest() {
        let spec = AnimationSpec::none();
        assert_eq!(spec.initial(), spec.target());
        assert_eq!(spec.initial(), VisualState::VISIBLE);
    }

    #[test]
    fn test_repeat_on_reenter_clears_latch_flag() {
        let spec = AnimationSpec::fade_up(0.1).unwrap().repeat_on_reenter();
        assert!(!spec.trigger_once());
    }
}
