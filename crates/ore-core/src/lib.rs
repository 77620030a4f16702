//! Dice-pool resolution engine for the One Roll Engine (ORE).
//!
//! Rolls pools of d10s, groups them into matches by face, picks the
//! highest and widest sets, resolves static and dynamic contests, and
//! lets one set gobble another.

pub mod config;
pub mod dice;
pub mod error;
pub mod gobble;
pub mod resolution;

pub use config::PoolConfig;
pub use dice::{Extraction, Match, Pool, extract, highest, widest};
pub use error::{OreError, OreResult};
pub use gobble::{Gobble, GobbleOutcome, gobble_match};
pub use resolution::{
    Contest, ContestMode, DynamicOutcome, PoolInput, Resolution, StaticOutcome, dynamic_contest,
    static_contest,
};

#[cfg(test)]
mod proptests {
    use proptest::prelude::*;
    use rand::SeedableRng;
    use rand::rngs::StdRng;

    use super::*;

    fn faces() -> impl Strategy<Value = Vec<u32>> {
        prop::collection::vec(1u32..=10, 0..30)
    }

    fn is_sorted(pool: &Pool) -> bool {
        pool.values().windows(2).all(|w| w[0] <= w[1])
    }

    proptest! {
        /// Rolled pools are sorted and sized count - penalty, capped at ten
        #[test]
        fn rolled_pools_sorted_and_sized(
            count in 0u32..40,
            penalty in 0u32..10,
            seed in any::<u64>()
        ) {
            let mut rng = StdRng::seed_from_u64(seed);
            let cfg = PoolConfig::default().with_penalty(penalty);
            let pool = Pool::roll(count, &cfg, &mut rng).unwrap();
            let expected = count.saturating_sub(penalty).min(10) as usize;
            prop_assert_eq!(pool.len(), expected);
            prop_assert!(is_sorted(&pool));
        }

        /// Every die is in exactly one match or in the waste
        #[test]
        fn matches_and_waste_partition(values in faces()) {
            let pool = Pool::from_values(values.clone(), &PoolConfig::default()).unwrap();
            let ex = pool.extract();
            let widths: usize = ex.matches.iter().map(Match::width).sum();
            prop_assert_eq!(widths + ex.waste.len(), values.len());
            for set in &ex.matches {
                prop_assert!(set.width() >= 2);
                prop_assert!(!ex.waste.contains(&set.height()));
            }
            prop_assert!(ex.matches.windows(2).all(|w| w[0].height() < w[1].height()));
            prop_assert!(ex.waste.windows(2).all(|w| w[0] < w[1]));
        }

        /// Mutations keep the pool sorted
        #[test]
        fn mutations_keep_sorted(values in faces(), extra in 1u32..=10, seed in any::<u64>()) {
            let mut rng = StdRng::seed_from_u64(seed);
            let mut pool = Pool::from_values(values, &PoolConfig::default()).unwrap();
            if !pool.is_empty() {
                let index = (seed as usize) % pool.len();
                pool.reroll_at(index, &mut rng).unwrap();
                prop_assert!(is_sorted(&pool));
            }
            let pool = pool.append_die(extra).unwrap();
            prop_assert!(is_sorted(&pool));
            let mut joined = pool.concat(&pool);
            prop_assert!(is_sorted(&joined));
            joined.reroll_all(&mut rng).unwrap();
            prop_assert!(is_sorted(&joined));
        }

        /// The widest set is never narrower than any other, nor shorter than an equally wide one
        #[test]
        fn widest_dominates(values in faces()) {
            let pool = Pool::from_values(values, &PoolConfig::default()).unwrap();
            let ex = pool.extract();
            if let Some(wide) = ex.widest() {
                for set in &ex.matches {
                    prop_assert!(set.width() <= wide.width());
                    if set.width() == wide.width() {
                        prop_assert!(set.height() <= wide.height());
                    }
                }
            }
        }

        /// Width-limited rolls never keep a set wider than five
        #[test]
        fn width_limit_holds(count in 0u32..=40, seed in any::<u64>()) {
            let mut rng = StdRng::seed_from_u64(seed);
            let cfg = PoolConfig::default().with_over_ten(true).with_limit_width(true);
            let pool = Pool::roll(count, &cfg, &mut rng).unwrap();
            prop_assert_eq!(pool.len(), count as usize);
            prop_assert!(pool.matches().iter().all(|m| m.width() <= 5));
        }

        /// Gobbling always terminates and never grows either side
        #[test]
        fn gobble_never_grows(mw in 2usize..10, mh in 1u8..=10, gw in 1usize..10, gh in 1u8..=10) {
            let target = Match::new(mw, mh).unwrap();
            let gobble = Gobble::new(gw, gh).unwrap();
            let out = gobble_match(target, gobble);
            let can_act = gw >= mw && gh >= mh;
            prop_assert_eq!(out.consumed, can_act);
            if let Some(left) = out.remaining_match {
                prop_assert!(left.width() <= mw);
            }
            if let Some(left) = out.remaining_gobble {
                prop_assert!(left.width() <= gw);
            }
        }
    }
}
