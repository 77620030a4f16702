//! Static contests: one pool against a difficulty.
//!
//! The roll succeeds if it has any match whose height reaches the
//! difficulty. Width plays no part.

use rand::Rng;
use serde::{Deserialize, Serialize};

use super::PoolInput;
use crate::dice::Pool;
use crate::error::OreResult;

/// Difficulty used when none is given: any match succeeds.
pub const DEFAULT_DIFFICULTY: u8 = 1;

/// Outcome of a static contest.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum StaticOutcome {
    /// The pool's tallest match reached the difficulty.
    Success,
    /// No match, or every match fell short.
    Failure,
}

impl std::fmt::Display for StaticOutcome {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Success => write!(f, "Success"),
            Self::Failure => write!(f, "Failure"),
        }
    }
}

/// Check an already rolled pool against `difficulty`.
pub fn check(pool: &Pool, difficulty: u8) -> StaticOutcome {
    match pool.highest() {
        Some(set) if set.height() >= difficulty => StaticOutcome::Success,
        _ => StaticOutcome::Failure,
    }
}

/// Roll if needed, then check against `difficulty`.
pub fn static_contest<R: Rng + ?Sized>(
    input: impl Into<PoolInput>,
    difficulty: u8,
    rng: &mut R,
) -> OreResult<StaticOutcome> {
    let pool = input.into().into_pool(rng)?;
    Ok(check(&pool, difficulty))
}
