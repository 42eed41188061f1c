//! Settings for generating a deal

use crate::error::InvalidConfig;
use crate::Value;

pub const DEFAULT_MIN_TARGET: Value = 100;
pub const DEFAULT_MAX_TARGET: Value = 999;
pub const DEFAULT_MAX_SMALL_NUMBER: Value = 10;
pub const DEFAULT_NUM_SMALL_NUMBERS: usize = 6;
pub const MAX_NUM_SMALL_NUMBERS: usize = 10;

/// The ranges a deal is drawn from
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct GameConfig {
    /// The smallest possible target
    pub min_target: Value,
    /// The largest possible target
    pub max_target: Value,
    /// Small numbers are drawn from `1..=max_small_number`
    pub max_small_number: Value,
    /// How many small numbers are dealt, at most `MAX_NUM_SMALL_NUMBERS`
    pub num_small_numbers: usize,
}

impl GameConfig {
    /// Checks the configuration, returning the first problem found
    pub fn validate(&self) -> Result<(), InvalidConfig> {
        if self.max_target < self.min_target || self.min_target < 1 {
            return Err(InvalidConfig::TargetRange);
        }
        if self.num_small_numbers <= 1 {
            return Err(InvalidConfig::TooFewSmallNumbers);
        }
        if self.num_small_numbers > MAX_NUM_SMALL_NUMBERS {
            return Err(InvalidConfig::TooManySmallNumbers);
        }
        if self.max_small_number < 1 {
            return Err(InvalidConfig::SmallNumberRange);
        }
        Ok(())
    }
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            min_target: DEFAULT_MIN_TARGET,
            max_target: DEFAULT_MAX_TARGET,
            max_small_number: DEFAULT_MAX_SMALL_NUMBER,
            num_small_numbers: DEFAULT_NUM_SMALL_NUMBERS,
        }
    }
}
