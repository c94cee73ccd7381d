//! Deterministic interaction logic
//!
//! Everything that decides what happens on screen lives here. This module
//! must be pure and deterministic:
//! - Seeded RNG only (callers pass the generator)
//! - No DOM, canvas, or timer dependencies
//! - Layout facts come in as plain rects, decisions go out as plain data

pub mod accept;
pub mod celebrate;
pub mod evasion;
pub mod placement;
pub mod rect;

pub use accept::{Acceptance, CompletionPlan};
pub use celebrate::{ConfettiBurst, ConfettiPiece, HeartSpec, spawn_hearts};
pub use evasion::{EvadeOutcome, EvasionController, accept_label, feedback_message};
pub use placement::{PlacementQuery, corner_fallback, safe_position};
pub use rect::Rect;
