//! Finding somewhere for the No button to run to
//!
//! Bounded random search: draw candidate top-left positions inside the
//! viewport and accept the first one whose rect clears both protected
//! regions (the card and the Yes button, each expanded by the safe margin).
//! If the attempt budget runs out, fall back to a deterministic corner.

use glam::Vec2;
use rand::Rng;

use super::rect::Rect;
use crate::consts::PLACEMENT_ATTEMPTS;

/// Layout facts the placement search needs, captured once per relocation
#[derive(Debug, Clone, Copy)]
pub struct PlacementQuery {
    /// Viewport size in pixels
    pub viewport: Vec2,
    /// Size of the button being placed
    pub decline_size: Vec2,
    /// Bounding box of the prompt card
    pub card: Rect,
    /// Bounding box of the Yes button
    pub accept: Rect,
}

impl PlacementQuery {
    /// Largest valid top-left coordinate per axis (zero when the viewport is
    /// smaller than the button)
    fn max_pos(&self) -> Vec2 {
        (self.viewport - self.decline_size).max(Vec2::ZERO)
    }
}

/// Pick a position for the No button that stays on-screen and clears both
/// protected regions by `margin`.
///
/// Up to [`PLACEMENT_ATTEMPTS`] uniformly random candidates; on exhaustion
/// the result degrades to [`corner_fallback`]. The fallback only weighs the
/// card's position, so in a crowded viewport it can still land on the Yes
/// button.
pub fn safe_position<R: Rng>(rng: &mut R, query: &PlacementQuery, margin: f32) -> Vec2 {
    let max = query.max_pos();
    let card_zone = query.card.expanded(margin);
    let accept_zone = query.accept.expanded(margin);

    for _ in 0..PLACEMENT_ATTEMPTS {
        let candidate = Vec2::new(
            rng.random_range(0.0..=max.x),
            rng.random_range(0.0..=max.y),
        );
        let at = Rect::at(candidate, query.decline_size);
        if !at.overlaps(&card_zone, 0.0) && !at.overlaps(&accept_zone, 0.0) {
            return candidate;
        }
    }

    log::debug!("placement search exhausted, using corner fallback");
    corner_fallback(query, margin)
}

/// Deterministic corner placement for when random search finds nothing
///
/// Per axis: the origin corner when the valid range ends before the card
/// starts, otherwise the far corner pulled in by the margin. Clamped to stay
/// in-bounds.
pub fn corner_fallback(query: &PlacementQuery, margin: f32) -> Vec2 {
    let max = query.max_pos();
    let x = if max.x < query.card.left {
        0.0
    } else {
        query.viewport.x - query.decline_size.x - margin
    };
    let y = if max.y < query.card.top {
        0.0
    } else {
        query.viewport.y - query.decline_size.y - margin
    };
    Vec2::new(x.clamp(0.0, max.x), y.clamp(0.0, max.y))
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;
    use rand_pcg::Pcg32;

    fn roomy_query() -> PlacementQuery {
        PlacementQuery {
            viewport: Vec2::new(1280.0, 800.0),
            decline_size: Vec2::new(120.0, 48.0),
            card: Rect::new(440.0, 250.0, 400.0, 300.0),
            accept: Rect::new(470.0, 460.0, 140.0, 52.0),
        }
    }

    fn clears_both(query: &PlacementQuery, pos: Vec2, margin: f32) -> bool {
        let at = Rect::at(pos, query.decline_size);
        !at.overlaps(&query.card.expanded(margin), 0.0)
            && !at.overlaps(&query.accept.expanded(margin), 0.0)
    }

    #[test]
    fn test_safe_position_clears_protected_regions() {
        let query = roomy_query();
        let mut rng = Pcg32::seed_from_u64(7);

        for _ in 0..200 {
            let pos = safe_position(&mut rng, &query, 16.0);
            assert!(
                clears_both(&query, pos, 16.0) || pos == corner_fallback(&query, 16.0),
                "position {pos:?} overlaps a protected region and is not the fallback"
            );
        }
    }

    #[test]
    fn test_safe_position_stays_in_viewport() {
        let query = roomy_query();
        let mut rng = Pcg32::seed_from_u64(99);

        for _ in 0..200 {
            let pos = safe_position(&mut rng, &query, 16.0);
            assert!(pos.x >= 0.0 && pos.y >= 0.0);
            assert!(pos.x + query.decline_size.x <= query.viewport.x);
            assert!(pos.y + query.decline_size.y <= query.viewport.y);
        }
    }

    #[test]
    fn test_card_filling_viewport_forces_fallback() {
        // Card covers everything: no candidate can succeed
        let query = PlacementQuery {
            viewport: Vec2::new(800.0, 600.0),
            decline_size: Vec2::new(120.0, 48.0),
            card: Rect::new(-50.0, -50.0, 900.0, 700.0),
            accept: Rect::new(300.0, 400.0, 140.0, 52.0),
        };
        let mut rng = Pcg32::seed_from_u64(1);

        let pos = safe_position(&mut rng, &query, 16.0);
        assert_eq!(pos, corner_fallback(&query, 16.0));
    }

    #[test]
    fn test_fallback_in_bounds_even_in_tiny_viewport() {
        // Viewport smaller than the button: fallback clamps to the origin
        let query = PlacementQuery {
            viewport: Vec2::new(100.0, 40.0),
            decline_size: Vec2::new(120.0, 48.0),
            card: Rect::new(0.0, 0.0, 100.0, 40.0),
            accept: Rect::new(10.0, 10.0, 60.0, 20.0),
        };
        assert_eq!(corner_fallback(&query, 16.0), Vec2::ZERO);
    }

    #[test]
    fn test_fallback_prefers_far_corner_when_room_exists() {
        let query = roomy_query();
        let pos = corner_fallback(&query, 16.0);
        assert_eq!(pos.x, query.viewport.x - query.decline_size.x - 16.0);
        assert_eq!(pos.y, query.viewport.y - query.decline_size.y - 16.0);
    }
}

#[cfg(test)]
mod prop_tests {
    use super::*;
    use proptest::prelude::*;
    use rand::SeedableRng;
    use rand_pcg::Pcg32;

    proptest! {
        /// For any layout and margin, the result clears both protected
        /// regions or equals the deterministic fallback.
        #[test]
        fn safe_position_never_overlaps_or_is_fallback(
            seed in any::<u64>(),
            vw in 200.0f32..2000.0,
            vh in 200.0f32..1500.0,
            card_x in 0.0f32..1000.0,
            card_y in 0.0f32..800.0,
            card_w in 50.0f32..600.0,
            card_h in 50.0f32..500.0,
            margin in 0.0f32..32.0,
        ) {
            let query = PlacementQuery {
                viewport: Vec2::new(vw, vh),
                decline_size: Vec2::new(120.0, 48.0),
                card: Rect::new(card_x, card_y, card_w, card_h),
                // Yes button sits along the card's bottom edge
                accept: Rect::new(card_x + 20.0, card_y + card_h - 60.0, 140.0, 52.0),
            };
            let mut rng = Pcg32::seed_from_u64(seed);
            let pos = safe_position(&mut rng, &query, margin);

            let at = Rect::at(pos, query.decline_size);
            let clear = !at.overlaps(&query.card.expanded(margin), 0.0)
                && !at.overlaps(&query.accept.expanded(margin), 0.0);
            prop_assert!(clear || pos == corner_fallback(&query, margin));
        }
    }
}
