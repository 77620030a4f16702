//! Gobble dice: one set eroding another.
//!
//! A set can be spent as gobble dice. Each gobble die knocks one die out
//! of a target match, provided the gobble group is at least as wide and
//! at least as high as the target.

use std::str::FromStr;

use log::trace;
use serde::Serialize;

use crate::dice::matches::parse_set;
use crate::dice::{MAX_FACE, MIN_FACE, Match};
use crate::error::{OreError, OreResult};

/// A stack of gobble dice, all showing the same face.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Gobble {
    height: u8,
    dice: Vec<u8>,
}

impl Gobble {
    /// Create `width` gobble dice showing `height`.
    pub fn new(width: usize, height: u8) -> OreResult<Self> {
        if width == 0 || !(MIN_FACE..=MAX_FACE).contains(&height) {
            return Err(OreError::InvalidMatch {
                width,
                height: u32::from(height),
            });
        }
        Ok(Self {
            height,
            dice: vec![height; width],
        })
    }

    /// Gobble dice left.
    pub fn width(&self) -> usize {
        self.dice.len()
    }

    /// The face every gobble die shows.
    pub fn height(&self) -> u8 {
        self.height
    }

    /// The remaining dice.
    pub fn dice(&self) -> &[u8] {
        &self.dice
    }

    /// Spend one gobble die.
    pub fn use_die(&mut self) -> Option<u8> {
        self.dice.pop()
    }

    /// Returns true once every die has been spent.
    pub fn is_spent(&self) -> bool {
        self.dice.is_empty()
    }
}

impl From<Match> for Gobble {
    fn from(set: Match) -> Self {
        Self {
            height: set.height(),
            dice: vec![set.height(); set.width()],
        }
    }
}

impl FromStr for Gobble {
    type Err = OreError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let (width, height) = parse_set(s)?;
        let face = u8::try_from(height).map_err(|_| OreError::InvalidMatch { width, height })?;
        Gobble::new(width, face)
    }
}

impl std::fmt::Display for Gobble {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let dice: Vec<String> = self.dice.iter().map(u8::to_string).collect();
        write!(f, "[{}]", dice.join(", "))
    }
}

/// What is left after gobble dice are thrown at a match.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct GobbleOutcome {
    /// True if the gobble group was wide and high enough to act.
    pub consumed: bool,
    /// The surviving match, `None` if it was broken.
    pub remaining_match: Option<Match>,
    /// Unspent gobble dice, `None` if all were used.
    pub remaining_gobble: Option<Gobble>,
}

/// Knock dice out of `target` with `gobble`.
///
/// Nothing happens unless the gobble group is at least as wide and as high
/// as the target. Otherwise dice are removed one for one until either side
/// runs out.
pub fn gobble_match(target: Match, mut gobble: Gobble) -> GobbleOutcome {
    if target.width() > gobble.width() || target.height() > gobble.height() {
        return GobbleOutcome {
            consumed: false,
            remaining_match: Some(target),
            remaining_gobble: Some(gobble),
        };
    }

    let mut width = target.width();
    while width > 0 && gobble.use_die().is_some() {
        width -= 1;
        trace!("gobbled one die from {target}, {width} left");
    }

    GobbleOutcome {
        consumed: true,
        remaining_match: Match::new(width, target.height()),
        remaining_gobble: (!gobble.is_spent()).then_some(gobble),
    }
}
