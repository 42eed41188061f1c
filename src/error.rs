use std::fmt::{self, Display, Formatter};

use thiserror::Error;

use crate::config::MAX_NUM_SMALL_NUMBERS;
use crate::puzzle::Operator;
use crate::{SlotId, Value};

/// A game configuration that cannot produce a deal
#[derive(Debug, Error, Clone, Copy, PartialEq, Eq)]
pub enum InvalidConfig {
    #[error(
        "Maximum target must be greater than minimum target, and minimum must be at least 1."
    )]
    TargetRange,
    #[error("Number of small numbers must be greater than 1.")]
    TooFewSmallNumbers,
    #[error("Number of small numbers must be at most {}.", MAX_NUM_SMALL_NUMBERS)]
    TooManySmallNumbers,
    #[error("Maximum value for small numbers must be at least 1.")]
    SmallNumberRange,
}

/// A command rejected by a puzzle.
///
/// The puzzle is left as it was, except that a failed operation also clears the selection.
#[derive(Debug, Error, Clone, Copy, PartialEq, Eq)]
pub enum CommandError {
    GameOver,
    SlotOutOfRange(SlotId),
    EmptySlot(SlotId),
    SelectionFull,
    NonIntegralDivision {
        larger: Value,
        smaller: Value,
    },
    Overflow {
        left: Value,
        operator: Operator,
        right: Value,
    },
}

impl CommandError {
    /// true if the command was understood but the arithmetic could not be applied
    pub fn is_failed_operation(&self) -> bool {
        matches!(
            self,
            CommandError::NonIntegralDivision { .. } | CommandError::Overflow { .. }
        )
    }
}

// slots are shown to players starting from 1
impl Display for CommandError {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        match *self {
            CommandError::GameOver => write!(f, "The game is over"),
            CommandError::SlotOutOfRange(slot) => write!(f, "There is no number {}", slot + 1),
            CommandError::EmptySlot(slot) => write!(f, "Number {} has already been used", slot + 1),
            CommandError::SelectionFull => write!(f, "Two numbers are already selected"),
            CommandError::NonIntegralDivision { larger, smaller } => write!(
                f,
                "Division must result in a whole number ({} {} {})",
                larger,
                Operator::Divide.symbol(),
                smaller
            ),
            CommandError::Overflow {
                left,
                operator,
                right,
            } => write!(f, "{} {} {} is too large", left, operator.symbol(), right),
        }
    }
}

#[derive(Debug, Error, Clone, PartialEq, Eq)]
#[error("Unknown operation: \"{}\"", token)]
pub struct ParseOperatorError {
    token: String,
}

impl ParseOperatorError {
    pub(crate) fn new(token: impl Into<String>) -> Self {
        Self {
            token: token.into(),
        }
    }
}
