//! The No button's escape logic
//!
//! `EvasionController` owns the interaction state (escape counter, layout
//! flag) and turns each trigger into a full description of the UI mutations
//! it implies. The DOM layer applies outcomes; it never touches the counter
//! itself.

use glam::Vec2;
use rand::Rng;

use super::placement::{PlacementQuery, safe_position};
use crate::consts::{ACCEPT_GROWTH_PER_ESCAPE, ACCEPT_SCALE_CAP_REDUCED, ESCAPE_LIMIT, SAFE_MARGIN};

/// Feedback lines shown under the prompt, cycled per evasion
pub const FEEDBACK_MESSAGES: [&str; 6] = [
    "Come on… really? 😇",
    "Nope, that button is shy 🙈",
    "Think of the dessert 🍰",
    "I'll plan something cute, promise 💕",
    "Ok but… yes is right there 😍",
    "You're really making me beg 😭",
];

/// Yes button labels, escalating then holding at the last entry
pub const ACCEPT_LABELS: [&str; 4] = ["Yes 💖", "Yes!! 💖", "Yesss 😍", "OK YES 💘"];

/// Feedback message for the given evasion count (1-based), cycling forever
pub fn feedback_message(escape_count: u32) -> &'static str {
    debug_assert!(escape_count > 0);
    FEEDBACK_MESSAGES[((escape_count - 1) as usize) % FEEDBACK_MESSAGES.len()]
}

/// Yes button label for the given evasion count (1-based), held at the end
pub fn accept_label(escape_count: u32) -> &'static str {
    debug_assert!(escape_count > 0);
    let index = ((escape_count - 1) as usize).min(ACCEPT_LABELS.len() - 1);
    ACCEPT_LABELS[index]
}

/// Everything one evasion changes on screen
#[derive(Debug, Clone, Copy)]
pub struct EvadeOutcome {
    /// Where the No button goes (viewport top-left)
    pub position: Vec2,
    /// True on the first relocation only: switch the button from flow layout
    /// to free positioning so the coordinates take effect
    pub switch_to_free_layout: bool,
    /// Feedback line to show
    pub feedback: &'static str,
    /// New Yes button label
    pub accept_label: &'static str,
    /// Scale factor for the Yes button
    pub accept_scale: f32,
    /// True when this evasion just hit the limit: hide the No button, show
    /// the only-choice-left note, clear the feedback line
    pub limit_reached: bool,
}

/// Owns the escape counter and relocation flag for the page session
#[derive(Debug)]
pub struct EvasionController {
    escape_count: u32,
    relocated: bool,
    reduced_motion: bool,
}

impl EvasionController {
    pub fn new(reduced_motion: bool) -> Self {
        Self {
            escape_count: 0,
            relocated: false,
            reduced_motion,
        }
    }

    pub fn escape_count(&self) -> u32 {
        self.escape_count
    }

    /// Whether the No button has given up
    pub fn at_limit(&self) -> bool {
        self.escape_count >= ESCAPE_LIMIT
    }

    /// Yes button scale for the current count; capped under reduced motion
    pub fn accept_scale(&self) -> f32 {
        let scale = 1.0 + self.escape_count as f32 * ACCEPT_GROWTH_PER_ESCAPE;
        if self.reduced_motion {
            scale.min(ACCEPT_SCALE_CAP_REDUCED)
        } else {
            scale
        }
    }

    /// One evasion: bump the counter, pick a new spot, escalate the copy.
    ///
    /// Returns `None` once the limit has been reached; stale triggers (late
    /// focus timers, lingering pointer events) land here and do nothing.
    pub fn on_evade<R: Rng>(&mut self, rng: &mut R, layout: &PlacementQuery) -> Option<EvadeOutcome> {
        if self.at_limit() {
            return None;
        }
        self.escape_count += 1;

        let switch_to_free_layout = !self.relocated;
        self.relocated = true;

        let position = safe_position(rng, layout, SAFE_MARGIN);
        let limit_reached = self.at_limit();
        if limit_reached {
            log::info!("no button exhausted after {} escapes", self.escape_count);
        }

        Some(EvadeOutcome {
            position,
            switch_to_free_layout,
            feedback: feedback_message(self.escape_count),
            accept_label: accept_label(self.escape_count),
            accept_scale: self.accept_scale(),
            limit_reached,
        })
    }
}
