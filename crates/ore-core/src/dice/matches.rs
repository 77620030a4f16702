//! Matches, waste, and the highest/widest selection rules.

use std::collections::BTreeMap;
use std::str::FromStr;

use serde::Serialize;

use super::pool::Pool;
use super::{MAX_FACE, MIN_FACE};
use crate::error::{OreError, OreResult};
use crate::gobble::Gobble;

/// A set of dice sharing one face.
///
/// `width` is the number of dice, `height` the shared face. A match is
/// always at least two dice wide; anything narrower is represented as
/// `None` wherever a match may be absent.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub struct Match {
    width: usize,
    height: u8,
}

impl Match {
    /// Build a match, or `None` if the shape is not a valid set.
    pub fn new(width: usize, height: u8) -> Option<Self> {
        let valid = width >= 2 && (MIN_FACE..=MAX_FACE).contains(&height);
        valid.then_some(Self { width, height })
    }

    /// Number of dice in the set.
    pub fn width(&self) -> usize {
        self.width
    }

    /// The face shared by the set.
    pub fn height(&self) -> u8 {
        self.height
    }

    /// Turn this set into gobble dice.
    pub fn to_gobble(&self) -> Gobble {
        Gobble::from(*self)
    }
}

impl std::fmt::Display for Match {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}x{}", self.width, self.height)
    }
}

/// Split `WxH` notation into its two numbers.
pub(crate) fn parse_set(s: &str) -> OreResult<(usize, u32)> {
    let parse_err = || OreError::Parse(s.to_string());
    let (width, height) = s.trim().split_once(['x', 'X']).ok_or_else(parse_err)?;
    let width = width.trim().parse::<usize>().map_err(|_| parse_err())?;
    let height = height.trim().parse::<u32>().map_err(|_| parse_err())?;
    Ok((width, height))
}

impl FromStr for Match {
    type Err = OreError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let (width, height) = parse_set(s)?;
        u8::try_from(height)
            .ok()
            .and_then(|h| Match::new(width, h))
            .ok_or(OreError::InvalidMatch { width, height })
    }
}

/// Matches and waste derived from a pool.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct Extraction {
    /// Sets of two or more equal faces, ascending by height.
    pub matches: Vec<Match>,
    /// Faces that belong to no set, ascending.
    pub waste: Vec<u8>,
}

impl Extraction {
    /// The match with the greatest height.
    pub fn highest(&self) -> Option<Match> {
        highest(&self.matches)
    }

    /// The match with the greatest width, ties going to the taller set.
    pub fn widest(&self) -> Option<Match> {
        widest(&self.matches)
    }

    /// True if the pool produced at least one match.
    pub fn has_match(&self) -> bool {
        !self.matches.is_empty()
    }
}

/// Group a pool's dice into matches and waste.
pub fn extract(pool: &Pool) -> Extraction {
    let mut counts: BTreeMap<u8, usize> = BTreeMap::new();
    for &face in pool.values() {
        *counts.entry(face).or_default() += 1;
    }

    let matches: Vec<Match> = counts
        .iter()
        .filter_map(|(&height, &width)| Match::new(width, height))
        .collect();
    let waste = pool
        .values()
        .iter()
        .copied()
        .filter(|face| counts.get(face) == Some(&1))
        .collect();

    Extraction { matches, waste }
}

/// The match with the greatest height, or `None` for an empty slice.
pub fn highest(matches: &[Match]) -> Option<Match> {
    matches.iter().copied().max_by_key(|m| m.height)
}

/// The match with the greatest width, or `None` for an empty slice.
///
/// When the highest match is as wide as the widest candidate, the highest
/// match is returned. More generally, among equally wide sets the taller
/// one wins, so the result never depends on slice order.
pub fn widest(matches: &[Match]) -> Option<Match> {
    let tallest = highest(matches)?;
    let candidate = matches.iter().copied().max_by_key(|m| (m.width, m.height))?;
    if candidate.width == tallest.width {
        Some(tallest)
    } else {
        Some(candidate)
    }
}
