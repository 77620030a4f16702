//! Construction options for dice pools.

use serde::{Deserialize, Serialize};

/// Widest match a width-limited pool may keep.
pub const DEFAULT_MAX_WIDTH: usize = 5;

/// Safety bound on rerolls performed while enforcing the width limit.
pub const DEFAULT_MAX_REROLLS: usize = 1000;

/// Options applied when a pool is rolled.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PoolConfig {
    /// Dice subtracted from the requested count before rolling.
    pub penalty: u32,
    /// Permit pools larger than ten dice.
    pub allow_over_ten: bool,
    /// Reroll dice until no match is wider than `max_width`.
    pub limit_width: bool,
    /// Maximum match width when `limit_width` is set.
    pub max_width: usize,
    /// Rerolls attempted before width limiting gives up.
    pub max_rerolls: usize,
}

impl Default for PoolConfig {
    fn default() -> Self {
        Self {
            penalty: 0,
            allow_over_ten: false,
            limit_width: false,
            max_width: DEFAULT_MAX_WIDTH,
            max_rerolls: DEFAULT_MAX_REROLLS,
        }
    }
}

impl PoolConfig {
    /// Set the penalty dice.
    pub fn with_penalty(mut self, penalty: u32) -> Self {
        self.penalty = penalty;
        self
    }

    /// Allow or forbid pools over ten dice.
    pub fn with_over_ten(mut self, allow: bool) -> Self {
        self.allow_over_ten = allow;
        self
    }

    /// Enable or disable width limiting.
    pub fn with_limit_width(mut self, limit: bool) -> Self {
        self.limit_width = limit;
        self
    }

    /// Set the maximum match width (at least 1).
    pub fn with_max_width(mut self, max_width: usize) -> Self {
        self.max_width = max_width.max(1);
        self
    }

    /// Set the reroll safety bound.
    pub fn with_max_rerolls(mut self, max_rerolls: usize) -> Self {
        self.max_rerolls = max_rerolls;
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_config() {
        let cfg = PoolConfig::default();
        assert_eq!(cfg.penalty, 0);
        assert!(!cfg.allow_over_ten);
        assert!(!cfg.limit_width);
        assert_eq!(cfg.max_width, 5);
        assert_eq!(cfg.max_rerolls, 1000);
    }

    #[test]
    fn builder_methods() {
        let cfg = PoolConfig::default()
            .with_penalty(3)
            .with_over_ten(true)
            .with_limit_width(true)
            .with_max_rerolls(10);
        assert_eq!(cfg.penalty, 3);
        assert!(cfg.allow_over_ten);
        assert!(cfg.limit_width);
        assert_eq!(cfg.max_rerolls, 10);
    }

    #[test]
    fn max_width_floor() {
        let cfg = PoolConfig::default().with_max_width(0);
        assert_eq!(cfg.max_width, 1);
    }
}
