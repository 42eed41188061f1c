use std::fmt::{self, Display, Formatter};
use std::str::FromStr;

use crate::error::{CommandError, ParseOperatorError};
use crate::Value;

/// The `Operator` enum represents each of the operations that can combine two numbers
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub enum Operator {
    Add,
    Subtract,
    Multiply,
    Divide,
}

impl Operator {
    pub const ALL: [Operator; 4] = [
        Operator::Add,
        Operator::Subtract,
        Operator::Multiply,
        Operator::Divide,
    ];

    /// Retrieve the character shown to players
    pub fn symbol(self) -> char {
        match self {
            Operator::Add => '+',
            Operator::Subtract => '−',
            Operator::Multiply => '×',
            Operator::Divide => '÷',
        }
    }

    /// Retrieve the character that can be typed on a keyboard
    pub fn ascii_symbol(self) -> char {
        match self {
            Operator::Add => '+',
            Operator::Subtract => '-',
            Operator::Multiply => '*',
            Operator::Divide => '/',
        }
    }

    pub fn name(self) -> &'static str {
        match self {
            Operator::Add => "add",
            Operator::Subtract => "subtract",
            Operator::Multiply => "multiply",
            Operator::Divide => "divide",
        }
    }

    /// Retrieve an `Operator` from either of its symbols
    pub fn from_symbol(c: char) -> Option<Operator> {
        let o = match c {
            '+' => Operator::Add,
            '-' | '−' => Operator::Subtract,
            '*' | '×' | 'x' => Operator::Multiply,
            '/' | '÷' => Operator::Divide,
            _ => return None,
        };
        Some(o)
    }

    /// Combines two numbers.
    ///
    /// Subtraction and division always work from the larger number to the smaller one, so
    /// operand order only matters for how the step is displayed. Division must be exact.
    pub fn apply(self, a: Value, b: Value) -> Result<Value, CommandError> {
        let (smaller, larger) = if a <= b { (a, b) } else { (b, a) };
        let result = match self {
            Operator::Add => a.checked_add(b),
            Operator::Subtract => larger.checked_sub(smaller),
            Operator::Multiply => a.checked_mul(b),
            Operator::Divide => {
                if smaller == 0 || larger % smaller != 0 {
                    return Err(CommandError::NonIntegralDivision { larger, smaller });
                }
                Some(larger / smaller)
            }
        };
        result.ok_or(CommandError::Overflow {
            left: a,
            operator: self,
            right: b,
        })
    }
}

impl Display for Operator {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.symbol())
    }
}

impl FromStr for Operator {
    type Err = ParseOperatorError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let mut chars = s.chars();
        if let (Some(c), None) = (chars.next(), chars.next()) {
            if let Some(operator) = Operator::from_symbol(c) {
                return Ok(operator);
            }
        }
        Operator::ALL
            .iter()
            .copied()
            .find(|o| o.name().eq_ignore_ascii_case(s))
            .ok_or_else(|| ParseOperatorError::new(s))
    }
}
