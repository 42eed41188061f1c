use rand::{thread_rng, Rng};

use crate::config::GameConfig;
use crate::error::InvalidConfig;
use crate::generate::generate_with_rng;
use crate::puzzle::Puzzle;

/// Holds the configuration and at most one puzzle in play
#[derive(Clone, Debug)]
pub struct Game {
    config: GameConfig,
    puzzle: Option<Puzzle>,
}

impl Game {
    pub fn new(config: GameConfig) -> Result<Self, InvalidConfig> {
        config.validate()?;
        Ok(Self {
            config,
            puzzle: None,
        })
    }

    pub fn config(&self) -> &GameConfig {
        &self.config
    }

    /// Replaces the configuration used for the next deal. The puzzle in play is not affected.
    pub fn set_config(&mut self, config: GameConfig) -> Result<(), InvalidConfig> {
        config.validate()?;
        self.config = config;
        Ok(())
    }

    /// Deals a new puzzle, replacing the one in play
    pub fn start(&mut self) -> Result<&mut Puzzle, InvalidConfig> {
        self.start_with_rng(&mut thread_rng())
    }

    pub fn start_with_rng(&mut self, rng: &mut impl Rng) -> Result<&mut Puzzle, InvalidConfig> {
        let deal = generate_with_rng(&self.config, rng)?;
        Ok(self.puzzle.insert(Puzzle::from_deal(deal)))
    }

    /// Discards the puzzle in play
    pub fn reset(&mut self) {
        if self.puzzle.take().is_some() {
            debug!("Puzzle discarded");
        }
    }

    pub fn is_active(&self) -> bool {
        self.puzzle.is_some()
    }

    pub fn puzzle(&self) -> Option<&Puzzle> {
        self.puzzle.as_ref()
    }

    pub fn puzzle_mut(&mut self) -> Option<&mut Puzzle> {
        self.puzzle.as_mut()
    }
}
