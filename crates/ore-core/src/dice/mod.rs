//! Ten-sided dice, pools, and match extraction.
//!
//! Every die in the engine is a d10. A [`Pool`] keeps its faces sorted
//! ascending; [`extract`] groups them into [`Match`]es (same-face sets)
//! and waste.

pub mod matches;
pub mod pool;

pub use matches::{Extraction, Match, extract, highest, widest};
pub use pool::Pool;

use rand::Rng;

use crate::error::{OreError, OreResult};

/// Lowest face of a d10.
pub const MIN_FACE: u8 = 1;

/// Highest face of a d10.
pub const MAX_FACE: u8 = 10;

/// Pool size cap unless a pool is allowed to go over ten.
pub const MAX_DICE: usize = 10;

/// Roll a single d10.
pub fn roll_face<R: Rng + ?Sized>(rng: &mut R) -> u8 {
    rng.random_range(MIN_FACE..=MAX_FACE)
}

/// Check that a literal value is a d10 face.
pub fn check_face(value: u32) -> OreResult<u8> {
    u8::try_from(value)
        .ok()
        .filter(|face| (MIN_FACE..=MAX_FACE).contains(face))
        .ok_or(OreError::InvalidFace(value))
}
