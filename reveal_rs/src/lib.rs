//! Content model and viewport-reveal engine for the SentinelKarma
//! presentation site.
//!
//! The crate is deliberately host-free: it knows nothing about the DOM, only
//! about sections, animation specs, rectangles and time. The Leptos landing
//! crate feeds it real viewport geometry; tests feed it synthetic geometry.
//!
//! - [`content`] - the fixed, ordered table of page sections (copy as data)
//! - [`types`] - sections, animation specs, visual states, config errors
//! - [`reveal`] - the per-section reveal state machine
//!
//! # Example
//!
//! ```rust
//! use sentinel_reveal::{PageContent, Rect, RevealController, RevealPhase};
//!
//! let content = PageContent::load()?;
//! let mut ctrl = RevealController::new(content.hero.animation);
//!
//! let viewport = Rect::new(0.0, 0.0, 1280.0, 800.0);
//! let hero_box = Rect::new(0.0, 120.0, 1280.0, 600.0);
//! ctrl.observe(hero_box, viewport, 0.0);
//!
//! assert_eq!(ctrl.phase_at(1.0), RevealPhase::Revealed);
//! # Ok::<(), sentinel_reveal::ContentError>(())
//! ```

pub mod content;
pub mod reveal;
pub mod types;

pub use content::PageContent;
pub use reveal::{Rect, RevealController, RevealPhase};
pub use types::{
    AnimationError, AnimationSpec, ContentError, Section, SectionKind, VisualState,
};
