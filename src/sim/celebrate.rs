//! Celebration effects: confetti burst and floating hearts
//!
//! Both are pure data here. The confetti sim is frame-stepped with an
//! explicit settled predicate so the frame loop's stopping condition is
//! testable without a canvas; velocities are per-frame pixel deltas. Hearts
//! are one-time specs applied to overlay elements whose looping animation is
//! declarative CSS.

use glam::Vec2;
use rand::Rng;

use crate::consts::{
    CONFETTI_COUNT, CONFETTI_EXIT_MARGIN, CONFETTI_GRAVITY, HEART_COUNT, HEART_DELAY_MAX_SECS,
};

/// Confetti fill colors
pub const CONFETTI_PALETTE: [&str; 6] = [
    "#ff6b8a", "#ff9ebb", "#ffc2d4", "#e84d6f", "#c93d5c", "#fff",
];

/// Heart symbols, cycled across the batch
pub const HEART_SYMBOLS: [&str; 5] = ["💕", "💖", "💗", "💘", "💝"];

/// One confetti square
#[derive(Debug, Clone, Copy)]
pub struct ConfettiPiece {
    /// Center position (viewport px)
    pub pos: Vec2,
    /// Per-frame displacement (px/frame)
    pub vel: Vec2,
    pub color: &'static str,
    /// Side length (px)
    pub size: f32,
    /// Degrees
    pub rotation: f32,
    /// Degrees per frame
    pub spin: f32,
}

/// A one-shot burst of confetti launched from the bottom edge
#[derive(Debug)]
pub struct ConfettiBurst {
    pieces: Vec<ConfettiPiece>,
    height: f32,
}

impl ConfettiBurst {
    /// Launch a fresh batch across the bottom of a `width` x `height` surface
    pub fn spawn<R: Rng>(rng: &mut R, width: f32, height: f32) -> Self {
        let pieces = (0..CONFETTI_COUNT)
            .map(|_| ConfettiPiece {
                pos: Vec2::new(rng.random_range(0.0..=width.max(0.0)), height),
                vel: Vec2::new(
                    (rng.random::<f32>() - 0.5) * 6.0,
                    -(rng.random::<f32>() * 12.0 + 6.0),
                ),
                color: CONFETTI_PALETTE[rng.random_range(0..CONFETTI_PALETTE.len())],
                size: rng.random::<f32>() * 8.0 + 4.0,
                rotation: rng.random::<f32>() * 360.0,
                spin: (rng.random::<f32>() - 0.5) * 10.0,
            })
            .collect();
        Self { pieces, height }
    }

    pub fn pieces(&self) -> &[ConfettiPiece] {
        &self.pieces
    }

    /// Advance every piece by one frame: move, pull down, spin
    pub fn step(&mut self) {
        for piece in &mut self.pieces {
            piece.pos += piece.vel;
            piece.vel.y += CONFETTI_GRAVITY;
            piece.rotation += piece.spin;
        }
    }

    /// Termination predicate for the frame loop: every piece has fallen past
    /// the bottom edge by the exit margin
    pub fn settled(&self) -> bool {
        self.pieces
            .iter()
            .all(|p| p.pos.y >= self.height + CONFETTI_EXIT_MARGIN)
    }
}

/// A floating heart to append to the overlay
#[derive(Debug, Clone, Copy)]
pub struct HeartSpec {
    pub symbol: &'static str,
    /// Horizontal position, percent of the overlay
    pub left_pct: f32,
    /// Vertical position, percent of the overlay
    pub top_pct: f32,
    /// Randomized start delay for the CSS loop (s)
    pub delay_secs: f32,
}

/// Specs for the batch of hearts; the elements persist for the session
pub fn spawn_hearts<R: Rng>(rng: &mut R) -> Vec<HeartSpec> {
    (0..HEART_COUNT)
        .map(|i| HeartSpec {
            symbol: HEART_SYMBOLS[i % HEART_SYMBOLS.len()],
            left_pct: rng.random::<f32>() * 100.0,
            top_pct: rng.random::<f32>() * 100.0,
            delay_secs: rng.random::<f32>() * HEART_DELAY_MAX_SECS,
        })
        .collect()
}
