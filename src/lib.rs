//! Yes or Yes - a one-page proposal where "No" won't sit still
//!
//! Core modules:
//! - `sim`: Deterministic interaction logic (placement, evasion, celebration)
//! - `settings`: Host preferences (reduced motion)
//!
//! All DOM, event, and canvas glue lives in the wasm module of `main.rs`;
//! everything in the library is testable without a browser.

pub mod settings;
pub mod sim;

pub use settings::Settings;

/// Interaction tuning constants
pub mod consts {
    /// Evasions after which the No button gives up for good
    pub const ESCAPE_LIMIT: u32 = 12;
    /// How long focus must sit on the No button before it flees (ms)
    pub const FOCUS_MOVE_DELAY_MS: i32 = 400;
    /// Minimum gap between the No button and the card/Yes button (px)
    pub const SAFE_MARGIN: f32 = 16.0;
    /// Random placement candidates tried before the corner fallback
    pub const PLACEMENT_ATTEMPTS: u32 = 50;

    /// Yes button growth per evasion (scale factor increment)
    pub const ACCEPT_GROWTH_PER_ESCAPE: f32 = 0.06;
    /// Yes button scale ceiling under reduced motion
    pub const ACCEPT_SCALE_CAP_REDUCED: f32 = 1.15;

    /// Confetti pieces per burst
    pub const CONFETTI_COUNT: usize = 80;
    /// Downward acceleration per frame (px/frame²)
    pub const CONFETTI_GRAVITY: f32 = 0.3;
    /// How far past the bottom edge a piece must fall to count as gone (px)
    pub const CONFETTI_EXIT_MARGIN: f32 = 20.0;

    /// Floating hearts appended to the overlay
    pub const HEART_COUNT: usize = 8;
    /// Maximum randomized animation start delay for a heart (s)
    pub const HEART_DELAY_MAX_SECS: f32 = 2.0;
}
