//! Catch odds
//!
//! Harder pokemon (higher base experience) are less likely to be caught.

use rand::Rng;

/// Best possible catch chance, in percent.
pub const MAX_CATCH_CHANCE: u32 = 35;

/// Worst possible catch chance, in percent. Nothing is uncatchable.
pub const MIN_CATCH_CHANCE: u32 = 1;

/// Catch chance in percent for a pokemon with `base_experience`.
///
/// Every 10 points of base experience costs one percent, starting from 40
/// and clamped to `MIN_CATCH_CHANCE..=MAX_CATCH_CHANCE`. Unknown experience
/// gets the best odds.
pub fn catch_chance(base_experience: Option<u32>) -> u32 {
    let experience = base_experience.unwrap_or(0);
    40u32
        .saturating_sub(experience / 10)
        .clamp(MIN_CATCH_CHANCE, MAX_CATCH_CHANCE)
}

/// Rolls once against [`catch_chance`].
pub fn attempt_catch<R: Rng>(rng: &mut R, base_experience: Option<u32>) -> bool {
    rng.gen_range(0..100u32) < catch_chance(base_experience)
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    #[test]
    fn test_catch_chance_bounds() {
        assert_eq!(catch_chance(None), MAX_CATCH_CHANCE);
        assert_eq!(catch_chance(Some(0)), MAX_CATCH_CHANCE);
        assert_eq!(catch_chance(Some(40)), MAX_CATCH_CHANCE);
        assert_eq!(catch_chance(Some(112)), 29);
        assert_eq!(catch_chance(Some(390)), MIN_CATCH_CHANCE);
        assert_eq!(catch_chance(Some(608)), MIN_CATCH_CHANCE);
    }

    #[test]
    fn test_catch_chance_is_monotonic() {
        let mut last = catch_chance(Some(0));
        for experience in (0..700).step_by(5) {
            let chance = catch_chance(Some(experience));
            assert!(chance <= last);
            last = chance;
        }
    }

    #[test]
    fn test_attempt_catch_rate_tracks_chance() {
        let mut rng = StdRng::seed_from_u64(7);
        let trials = 10_000;

        let caught = (0..trials)
            .filter(|_| attempt_catch(&mut rng, Some(50)))
            .count();

        // 35% expected
        let rate = caught as f64 / trials as f64;
        assert!((0.30..0.40).contains(&rate), "rate was {rate}");
    }
}
