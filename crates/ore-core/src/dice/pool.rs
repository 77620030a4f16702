//! Dice pool construction, rerolling, and concatenation.

use std::collections::BTreeSet;
use std::iter::Sum;
use std::ops::Add;

use log::{debug, warn};
use rand::Rng;
use serde::Serialize;

use super::matches::{Extraction, Match, extract};
use super::{MAX_DICE, MAX_FACE, check_face, roll_face};
use crate::config::PoolConfig;
use crate::error::{OreError, OreResult};

/// A pool of d10s, always sorted ascending.
///
/// Two pools compare equal when they show the same *set* of faces:
/// `[1, 1, 2]` equals `[1, 2, 2]`. Duplicate counts are ignored on
/// purpose, even though [`Pool::concat`] keeps every die.
#[derive(Debug, Clone, Default, Serialize)]
pub struct Pool {
    dice: Vec<u8>,
    config: PoolConfig,
    dropped: u32,
}

impl Pool {
    /// Number of dice in a roll when no count is given.
    pub const DEFAULT_SIZE: u32 = 4;

    /// Roll `count` dice, less the configured penalty.
    ///
    /// Without `allow_over_ten` the pool is capped at ten dice; the number
    /// of dice dropped is reported by [`Pool::dropped`]. With `limit_width`
    /// dice are rerolled until no match is wider than the configured limit.
    pub fn roll<R: Rng + ?Sized>(count: u32, config: &PoolConfig, rng: &mut R) -> OreResult<Self> {
        let mut size = count.saturating_sub(config.penalty) as usize;
        let mut dropped = 0;

        if !config.allow_over_ten && size > MAX_DICE {
            dropped = (size - MAX_DICE) as u32;
            warn!("too many dice, only rolling {MAX_DICE} ({dropped} dropped)");
            size = MAX_DICE;
        }

        let mut pool = Self {
            dice: (0..size).map(|_| roll_face(rng)).collect(),
            config: config.clone(),
            dropped,
        };
        pool.dice.sort_unstable();

        if pool.config.limit_width {
            pool.enforce_width_limit(rng)?;
        }
        Ok(pool)
    }

    /// Build a pool from literal faces.
    ///
    /// Faces are sorted but otherwise kept as given: no size cap and no
    /// width limiting are applied, though the flags are recorded.
    pub fn from_values<I>(values: I, config: &PoolConfig) -> OreResult<Self>
    where
        I: IntoIterator<Item = u32>,
    {
        let mut dice = values
            .into_iter()
            .map(check_face)
            .collect::<OreResult<Vec<u8>>>()?;
        dice.sort_unstable();
        Ok(Self {
            dice,
            config: config.clone(),
            dropped: 0,
        })
    }

    /// Roll `count` dice and add an expert die set to `value`.
    pub fn roll_with_expert_die<R: Rng + ?Sized>(
        count: u32,
        value: u32,
        rng: &mut R,
    ) -> OreResult<Self> {
        Self::roll(count, &PoolConfig::default(), rng)?.append_die(value)
    }

    /// The faces in ascending order.
    pub fn values(&self) -> &[u8] {
        &self.dice
    }

    /// Number of dice in the pool.
    pub fn len(&self) -> usize {
        self.dice.len()
    }

    /// Returns true if the pool holds no dice.
    pub fn is_empty(&self) -> bool {
        self.dice.is_empty()
    }

    /// The options this pool was built with.
    pub fn config(&self) -> &PoolConfig {
        &self.config
    }

    /// Whether the pool may hold more than ten dice.
    pub fn allow_over_ten(&self) -> bool {
        self.config.allow_over_ten
    }

    /// Whether the pool was rolled with width limiting.
    pub fn limit_width(&self) -> bool {
        self.config.limit_width
    }

    /// Dice dropped by the ten-dice cap when the pool was rolled.
    pub fn dropped(&self) -> u32 {
        self.dropped
    }

    /// Matches and waste of the current faces.
    pub fn extract(&self) -> Extraction {
        extract(self)
    }

    /// All matches, ascending by height.
    pub fn matches(&self) -> Vec<Match> {
        self.extract().matches
    }

    /// Faces that belong to no match.
    pub fn waste(&self) -> Vec<u8> {
        self.extract().waste
    }

    /// The tallest match, if any.
    pub fn highest(&self) -> Option<Match> {
        self.extract().highest()
    }

    /// The widest match, if any.
    pub fn widest(&self) -> Option<Match> {
        self.extract().widest()
    }

    /// Replace the die at `index` with a fresh roll.
    pub fn reroll_at<R: Rng + ?Sized>(&mut self, index: usize, rng: &mut R) -> OreResult<()> {
        let len = self.dice.len();
        let die = self
            .dice
            .get_mut(index)
            .ok_or(OreError::IndexOutOfRange { index, len })?;
        *die = roll_face(rng);
        self.dice.sort_unstable();
        Ok(())
    }

    /// Reroll every die, keeping the pool size and flags.
    pub fn reroll_all<R: Rng + ?Sized>(&mut self, rng: &mut R) -> OreResult<()> {
        for die in &mut self.dice {
            *die = roll_face(rng);
        }
        self.dice.sort_unstable();
        if self.config.limit_width {
            self.enforce_width_limit(rng)?;
        }
        Ok(())
    }

    /// Add a die showing `value`, keeping the pool sorted.
    ///
    /// This is how master and expert dice enter a pool.
    pub fn append_die(mut self, value: u32) -> OreResult<Self> {
        self.push_die(value)?;
        Ok(self)
    }

    /// In-place form of [`Pool::append_die`].
    pub fn push_die(&mut self, value: u32) -> OreResult<()> {
        let face = check_face(value)?;
        let at = self.dice.partition_point(|&d| d <= face);
        self.dice.insert(at, face);
        Ok(())
    }

    /// Combine two pools into a new one holding every die of both.
    ///
    /// The result may go over ten exactly when it holds more than ten dice,
    /// and is width limited if either side was. Width limiting is not
    /// re-applied to the combined dice.
    pub fn concat(&self, other: &Pool) -> Pool {
        let mut dice = Vec::with_capacity(self.len() + other.len());
        dice.extend_from_slice(&self.dice);
        dice.extend_from_slice(&other.dice);
        dice.sort_unstable();

        let config = PoolConfig {
            penalty: 0,
            allow_over_ten: dice.len() > MAX_DICE,
            limit_width: self.config.limit_width || other.config.limit_width,
            max_width: self.config.max_width.min(other.config.max_width),
            max_rerolls: self.config.max_rerolls.max(other.config.max_rerolls),
        };
        Pool {
            dice,
            config,
            dropped: 0,
        }
    }

    fn enforce_width_limit<R: Rng + ?Sized>(&mut self, rng: &mut R) -> OreResult<()> {
        let max_width = self.config.max_width;
        let capacity = usize::from(MAX_FACE) * max_width;
        if self.dice.len() > capacity {
            return Err(OreError::WidthLimitImpossible {
                dice: self.dice.len(),
                max_width,
            });
        }

        let mut attempts = 0;
        while let Some(set) = self.widest().filter(|m| m.width() > max_width) {
            if attempts >= self.config.max_rerolls {
                return Err(OreError::WidthLimitUnresolved { attempts });
            }
            let Some(index) = self.dice.iter().position(|&d| d == set.height()) else {
                break;
            };
            debug!("set {set} too wide, rerolling die {index}");
            self.reroll_at(index, rng)?;
            attempts += 1;
        }
        Ok(())
    }
}

impl PartialEq for Pool {
    fn eq(&self, other: &Self) -> bool {
        let ours: BTreeSet<u8> = self.dice.iter().copied().collect();
        let theirs: BTreeSet<u8> = other.dice.iter().copied().collect();
        ours == theirs
    }
}

impl Eq for Pool {}

impl Add for Pool {
    type Output = Pool;

    fn add(self, other: Pool) -> Pool {
        self.concat(&other)
    }
}

impl Sum for Pool {
    fn sum<I: Iterator<Item = Pool>>(iter: I) -> Pool {
        iter.fold(Pool::default(), |acc, pool| acc + pool)
    }
}

impl std::fmt::Display for Pool {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let ex = self.extract();
        let parts: Vec<String> = ex
            .matches
            .iter()
            .map(Match::to_string)
            .chain(ex.waste.iter().map(u8::to_string))
            .collect();
        write!(f, "[{}]", parts.join(", "))
    }
}
