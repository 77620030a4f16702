//! Contest resolution.
//!
//! Two kinds of contest are resolved from a pool's matches:
//! - **Static**: one pool against a fixed difficulty
//! - **Dynamic**: two pools against each other

pub mod dynamic;
pub mod static_check;

pub use dynamic::{ContestMode, DynamicOutcome, compare, dynamic_contest};
pub use static_check::{DEFAULT_DIFFICULTY, StaticOutcome, check, static_contest};

use rand::Rng;
use serde::{Deserialize, Serialize};

use crate::config::PoolConfig;
use crate::dice::Pool;
use crate::error::OreResult;

/// Either a number of dice still to be rolled, or a pool already rolled.
#[derive(Debug, Clone)]
pub enum PoolInput {
    /// Roll this many dice with default options.
    Count(u32),
    /// Use this pool as it is.
    Pool(Pool),
}

impl PoolInput {
    /// Turn the input into a pool, rolling if needed.
    pub fn into_pool<R: Rng + ?Sized>(self, rng: &mut R) -> OreResult<Pool> {
        match self {
            Self::Count(count) => Pool::roll(count, &PoolConfig::default(), rng),
            Self::Pool(pool) => Ok(pool),
        }
    }
}

impl From<u32> for PoolInput {
    fn from(count: u32) -> Self {
        Self::Count(count)
    }
}

impl From<Pool> for PoolInput {
    fn from(pool: Pool) -> Self {
        Self::Pool(pool)
    }
}

impl From<&Pool> for PoolInput {
    fn from(pool: &Pool) -> Self {
        Self::Pool(pool.clone())
    }
}

/// The result of either kind of contest.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Resolution {
    /// Outcome of a pool against a difficulty.
    Static(StaticOutcome),
    /// Outcome of two opposed pools.
    Dynamic(DynamicOutcome),
}

/// A described, resolved contest.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Contest {
    /// What the contest was about.
    pub description: String,
    /// How it came out.
    pub resolution: Resolution,
}

impl Contest {
    /// Resolve `pool` against `difficulty`.
    pub fn against_difficulty(description: impl Into<String>, pool: &Pool, difficulty: u8) -> Self {
        Self {
            description: description.into(),
            resolution: Resolution::Static(check(pool, difficulty)),
        }
    }

    /// Resolve two pools against each other.
    pub fn opposed(
        description: impl Into<String>,
        first: &Pool,
        second: &Pool,
        mode: ContestMode,
    ) -> Self {
        Self {
            description: description.into(),
            resolution: Resolution::Dynamic(compare(first, second, mode)),
        }
    }

    /// One-line verdict.
    pub fn summary(&self) -> &'static str {
        match self.resolution {
            Resolution::Static(StaticOutcome::Success) => "Success!",
            Resolution::Static(StaticOutcome::Failure) => "Failure!",
            Resolution::Dynamic(DynamicOutcome::Pool1Wins) => "Roll 1 beats Roll 2!",
            Resolution::Dynamic(DynamicOutcome::Pool2Wins) => "Roll 2 beats Roll 1!",
            Resolution::Dynamic(DynamicOutcome::NoContest) => "Neither roll achieved a match.",
        }
    }

    /// Index of the winning pool in an opposed contest.
    pub fn winner(&self) -> Option<usize> {
        match self.resolution {
            Resolution::Dynamic(DynamicOutcome::Pool1Wins) => Some(0),
            Resolution::Dynamic(DynamicOutcome::Pool2Wins) => Some(1),
            _ => None,
        }
    }
}

impl std::fmt::Display for Contest {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}: {}", self.description, self.summary())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;
    use rand::rngs::StdRng;

    fn pool(values: &[u32]) -> Pool {
        Pool::from_values(values.iter().copied(), &PoolConfig::default()).unwrap()
    }

    #[test]
    fn count_input_rolls() {
        let mut rng = StdRng::seed_from_u64(3);
        let p = PoolInput::from(6).into_pool(&mut rng).unwrap();
        assert_eq!(p.len(), 6);
    }

    #[test]
    fn pool_input_passes_through() {
        let mut rng = StdRng::seed_from_u64(3);
        let original = pool(&[2, 2, 9]);
        let p = PoolInput::from(&original).into_pool(&mut rng).unwrap();
        assert_eq!(p.values(), original.values());
    }

    #[test]
    fn static_summary() {
        let c = Contest::against_difficulty("climb", &pool(&[4, 4, 9]), 3);
        assert_eq!(c.summary(), "Success!");
        assert_eq!(c.winner(), None);
        assert_eq!(c.to_string(), "climb: Success!");

        let c = Contest::against_difficulty("climb", &pool(&[4, 4, 9]), 5);
        assert_eq!(c.summary(), "Failure!");
    }

    #[test]
    fn opposed_summary_and_winner() {
        let high = pool(&[8, 8, 1]);
        let low = pool(&[3, 3, 3]);

        let c = Contest::opposed("duel", &high, &low, ContestMode::Height);
        assert_eq!(c.summary(), "Roll 1 beats Roll 2!");
        assert_eq!(c.winner(), Some(0));

        let c = Contest::opposed("duel", &high, &low, ContestMode::Width);
        assert_eq!(c.summary(), "Roll 2 beats Roll 1!");
        assert_eq!(c.winner(), Some(1));

        let c = Contest::opposed("duel", &pool(&[1, 2]), &pool(&[3, 4]), ContestMode::Height);
        assert_eq!(c.summary(), "Neither roll achieved a match.");
        assert_eq!(c.winner(), None);
    }

    #[test]
    fn contest_serializes() {
        let c = Contest::against_difficulty("pick lock", &pool(&[6, 6]), 6);
        let json = serde_json::to_string(&c).unwrap();
        let back: Contest = serde_json::from_str(&json).unwrap();
        assert_eq!(back, c);
    }
}
