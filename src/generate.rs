use rand::distributions::{Distribution, Uniform};
use rand::{thread_rng, Rng};

use crate::config::GameConfig;
use crate::error::InvalidConfig;
use crate::Value;

/// A generated target with the small numbers available to reach it
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Deal {
    pub target: Value,
    pub numbers: Vec<Value>,
}

/// Deals a new puzzle using the thread-local random number generator
pub fn generate(config: &GameConfig) -> Result<Deal, InvalidConfig> {
    generate_with_rng(config, &mut thread_rng())
}

/// Deals a new puzzle. The target is drawn uniformly from `min_target..=max_target` and each
/// small number independently from `1..=max_small_number`. Small numbers may repeat.
pub fn generate_with_rng(config: &GameConfig, rng: &mut impl Rng) -> Result<Deal, InvalidConfig> {
    config.validate()?;
    let target = Uniform::new_inclusive(config.min_target, config.max_target).sample(rng);
    let small = Uniform::new_inclusive(1, config.max_small_number);
    let numbers = (0..config.num_small_numbers)
        .map(|_| small.sample(rng))
        .collect::<Vec<_>>();
    debug!("Dealt target {} with numbers {:?}", target, numbers);
    Ok(Deal { target, numbers })
}
