//! Dynamic contests: two pools against each other.
//!
//! A pool with a match beats a pool without one. When both have matches,
//! the comparison depends on the [`ContestMode`]:
//! - **Height**: the taller best set wins
//! - **Width**: the wider best set wins; equal widths go to the taller
//!   highest set
//!
//! Any remaining tie goes to the second pool.

use std::cmp::Ordering;

use rand::Rng;
use serde::{Deserialize, Serialize};

use super::PoolInput;
use crate::dice::Pool;
use crate::error::OreResult;

/// Which property of the sets decides an opposed roll.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum ContestMode {
    /// Compare the tallest match of each pool.
    #[default]
    Height,
    /// Compare the widest match of each pool.
    Width,
}

impl ContestMode {
    /// `Width` if `width_wins` is set, otherwise `Height`.
    pub fn from_width_wins(width_wins: bool) -> Self {
        if width_wins { Self::Width } else { Self::Height }
    }
}

/// Outcome of a dynamic contest.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum DynamicOutcome {
    /// The first pool won.
    Pool1Wins,
    /// The second pool won.
    Pool2Wins,
    /// Neither pool rolled a match.
    NoContest,
}

impl std::fmt::Display for DynamicOutcome {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Pool1Wins => write!(f, "Pool 1 wins"),
            Self::Pool2Wins => write!(f, "Pool 2 wins"),
            Self::NoContest => write!(f, "No contest"),
        }
    }
}

/// Compare two already rolled pools.
pub fn compare(first: &Pool, second: &Pool, mode: ContestMode) -> DynamicOutcome {
    let (a, b) = (first.extract(), second.extract());

    let (a_high, b_high) = match (a.highest(), b.highest()) {
        (None, None) => return DynamicOutcome::NoContest,
        (None, Some(_)) => return DynamicOutcome::Pool2Wins,
        (Some(_), None) => return DynamicOutcome::Pool1Wins,
        (Some(x), Some(y)) => (x, y),
    };

    let ordering = match mode {
        ContestMode::Height => a_high.height().cmp(&b_high.height()),
        ContestMode::Width => {
            let a_wide = a.widest().map_or(0, |m| m.width());
            let b_wide = b.widest().map_or(0, |m| m.width());
            a_wide
                .cmp(&b_wide)
                .then(a_high.height().cmp(&b_high.height()))
        }
    };

    match ordering {
        Ordering::Greater => DynamicOutcome::Pool1Wins,
        Ordering::Less | Ordering::Equal => DynamicOutcome::Pool2Wins,
    }
}

/// Roll whichever inputs are counts, then compare.
pub fn dynamic_contest<R: Rng + ?Sized>(
    first: impl Into<PoolInput>,
    second: impl Into<PoolInput>,
    mode: ContestMode,
    rng: &mut R,
) -> OreResult<DynamicOutcome> {
    let first = first.into().into_pool(rng)?;
    let second = second.into().into_pool(rng)?;
    Ok(compare(&first, &second, mode))
}
