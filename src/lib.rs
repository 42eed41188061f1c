//! Generate and play Countdown numbers puzzles

#![warn(rust_2018_idioms)]
#![warn(trivial_casts)]
#![warn(trivial_numeric_casts)]
#![warn(unused_qualifications)]

#[macro_use]
extern crate log;

pub use crate::config::GameConfig;
pub use crate::game::Game;
pub use crate::generate::{generate, generate_with_rng, Deal};
pub use crate::puzzle::{Operator, Puzzle, Status, Step};

pub mod config;
pub mod error;
mod game;
mod generate;
pub mod puzzle;

pub type Value = i64;
pub type SlotId = usize;
