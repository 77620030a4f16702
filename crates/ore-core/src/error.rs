//! Error types for the dice-pool engine.

/// Errors that can occur during pool and contest operations.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum OreError {
    /// A reroll targeted a position past the end of the pool.
    #[error("no die at index {index} (pool holds {len} dice)")]
    IndexOutOfRange {
        /// The requested index.
        index: usize,
        /// Number of dice in the pool.
        len: usize,
    },

    /// A literal die value is not a face of a d10.
    #[error("invalid die face {0}: expected a value from 1 to 10")]
    InvalidFace(u32),

    /// A match or gobble group was described with an unusable shape.
    #[error("invalid set {width}x{height}")]
    InvalidMatch {
        /// Requested width.
        width: usize,
        /// Requested height.
        height: u32,
    },

    /// Text could not be read as a `WxH` set.
    #[error("cannot parse '{0}' as WIDTHxHEIGHT")]
    Parse(String),

    /// The width-limit reroll loop ran past its safety bound.
    #[error("width limit still violated after {attempts} rerolls")]
    WidthLimitUnresolved {
        /// Number of rerolls performed before giving up.
        attempts: usize,
    },

    /// No arrangement of faces can keep every match within the width limit.
    #[error("cannot limit {dice} dice to sets of width {max_width} or less")]
    WidthLimitImpossible {
        /// Number of dice in the pool.
        dice: usize,
        /// The configured maximum width.
        max_width: usize,
    },
}

/// Convenience result type for engine operations.
pub type OreResult<T> = Result<T, OreError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn error_messages() {
        let err = OreError::IndexOutOfRange { index: 7, len: 3 };
        assert_eq!(err.to_string(), "no die at index 7 (pool holds 3 dice)");
        assert_eq!(
            OreError::InvalidFace(11).to_string(),
            "invalid die face 11: expected a value from 1 to 10"
        );
        assert_eq!(
            OreError::WidthLimitImpossible {
                dice: 60,
                max_width: 5
            }
            .to_string(),
            "cannot limit 60 dice to sets of width 5 or less"
        );
    }
}
