//! Countdown puzzles and the moves that can be made on them

pub use self::operator::Operator;
pub use self::selection::Selection;

use std::fmt::{self, Display, Formatter};

use itertools::Itertools;

use crate::error::CommandError;
use crate::generate::Deal;
use crate::{SlotId, Value};

mod operator;
mod selection;

/// How a puzzle stands after the last move
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Status {
    InProgress,
    /// A number equal to the target was made
    Won,
    /// One number is left and it is not the target
    Lost,
}

impl Status {
    pub fn is_terminal(self) -> bool {
        self != Status::InProgress
    }
}

/// A single applied operation, e.g. `50 + 4 = 54`
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Step {
    /// The first selected number
    pub left: Value,
    pub operator: Operator,
    /// The second selected number
    pub right: Value,
    pub result: Value,
}

impl Display for Step {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} {} {} = {}",
            self.left, self.operator, self.right, self.result
        )
    }
}

/// A puzzle being played
///
/// Each slot holds a number until it is consumed by an operation. Two occupied slots are
/// selected and combined with an operator: the result replaces the lower slot and the higher
/// slot is emptied.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Puzzle {
    target: Value,
    slots: Box<[Option<Value>]>,
    selection: Selection,
    pending_operation: Option<Operator>,
    status: Status,
}

impl Puzzle {
    pub fn new(target: Value, numbers: impl IntoIterator<Item = Value>) -> Self {
        let mut puzzle = Self {
            target,
            slots: numbers.into_iter().map(Some).collect(),
            selection: Selection::default(),
            pending_operation: None,
            status: Status::InProgress,
        };
        puzzle.update_status();
        puzzle
    }

    pub fn from_deal(deal: Deal) -> Self {
        Self::new(deal.target, deal.numbers)
    }

    pub fn target(&self) -> Value {
        self.target
    }

    /// All slots, including the empty ones
    pub fn slots(&self) -> &[Option<Value>] {
        &self.slots
    }

    pub fn slot(&self, slot: SlotId) -> Option<Value> {
        self.slots.get(slot).copied().flatten()
    }

    /// The numbers that are still available
    pub fn numbers(&self) -> impl Iterator<Item = Value> + '_ {
        self.slots.iter().flatten().copied()
    }

    /// The number of occupied slots
    pub fn occupied(&self) -> usize {
        self.numbers().count()
    }

    pub fn selection(&self) -> &Selection {
        &self.selection
    }

    pub fn pending_operation(&self) -> Option<Operator> {
        self.pending_operation
    }

    pub fn status(&self) -> Status {
        self.status
    }

    pub fn is_terminal(&self) -> bool {
        self.status.is_terminal()
    }

    pub fn is_won(&self) -> bool {
        self.status == Status::Won
    }

    /// Selects a slot, or deselects it if it is already selected.
    ///
    /// If this completes a pair while an operation is pending, the pair is evaluated and the
    /// applied step is returned.
    pub fn select_slot(&mut self, slot: SlotId) -> Result<Option<Step>, CommandError> {
        self.check_in_progress()?;
        let value = *self
            .slots
            .get(slot)
            .ok_or(CommandError::SlotOutOfRange(slot))?;
        if self.selection.remove(slot) {
            trace!("Deselected slot {}", slot);
            return Ok(None);
        }
        if value.is_none() {
            return Err(CommandError::EmptySlot(slot));
        }
        if !self.selection.insert(slot) {
            return Err(CommandError::SelectionFull);
        }
        trace!("Selected slot {}", slot);
        match self.pending_operation {
            Some(operator) if self.selection.is_full() => self.evaluate(operator).map(Some),
            _ => Ok(None),
        }
    }

    /// Chooses the operation for the selected pair.
    ///
    /// With two slots selected the operation is applied immediately and the step is returned.
    /// Otherwise it is kept until a pair is selected.
    pub fn choose_operation(&mut self, operator: Operator) -> Result<Option<Step>, CommandError> {
        self.check_in_progress()?;
        self.pending_operation = Some(operator);
        if self.selection.is_full() {
            self.evaluate(operator).map(Some)
        } else {
            Ok(None)
        }
    }

    /// Clears the selection and pending operation. Returns false if there was nothing to clear
    /// or the game is over.
    pub fn deselect_all(&mut self) -> bool {
        if self.is_terminal() || (self.selection.is_empty() && self.pending_operation.is_none()) {
            return false;
        }
        self.clear_selection();
        true
    }

    fn evaluate(&mut self, operator: Operator) -> Result<Step, CommandError> {
        let (a, b) = match self.selection.pair() {
            Some(pair) => pair,
            None => unreachable!("evaluate requires two selected slots"),
        };
        let (left, right) = match (self.slots[a], self.slots[b]) {
            (Some(left), Some(right)) => (left, right),
            _ => unreachable!("selected slots must be occupied"),
        };
        let result = operator.apply(left, right);
        // a failed operation still clears the selection
        self.clear_selection();
        let result = result?;
        let (low, high) = if a < b { (a, b) } else { (b, a) };
        self.slots[low] = Some(result);
        self.slots[high] = None;
        let step = Step {
            left,
            operator,
            right,
            result,
        };
        debug!("Applied {}", step);
        self.update_status();
        Ok(step)
    }

    fn clear_selection(&mut self) {
        self.selection.clear();
        self.pending_operation = None;
    }

    fn check_in_progress(&self) -> Result<(), CommandError> {
        if self.is_terminal() {
            return Err(CommandError::GameOver);
        }
        Ok(())
    }

    fn update_status(&mut self) {
        let target = self.target;
        self.status = if self.numbers().any(|n| n == target) {
            Status::Won
        } else if self.occupied() == 1 {
            Status::Lost
        } else {
            Status::InProgress
        };
        if self.status.is_terminal() {
            info!("Game over ({:?}), target {}", self.status, self.target);
        }
    }
}

/// Renders the board, marking selected numbers with `*`
impl Display for Puzzle {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        writeln!(f, "Target: {}", self.target)?;
        let slots = self
            .slots
            .iter()
            .enumerate()
            .map(|(i, slot)| match slot {
                Some(value) => format!(
                    "[{}] {}{}",
                    i + 1,
                    value,
                    if self.selection.contains(i) { "*" } else { "" }
                ),
                None => format!("[{}] -", i + 1),
            })
            .join("  ");
        write!(f, "{}", slots)?;
        if let Some(operator) = self.pending_operation {
            write!(f, "\nOperation: {}", operator)?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::{Operator, Puzzle, Status, Step};
    use crate::error::CommandError;

    #[test]
    fn add_to_target() {
        let mut puzzle = Puzzle::new(54, vec![50, 4]);
        assert_eq!(puzzle.select_slot(0), Ok(None));
        assert_eq!(puzzle.select_slot(1), Ok(None));
        let step = puzzle.choose_operation(Operator::Add).unwrap().unwrap();
        assert_eq!(
            step,
            Step {
                left: 50,
                operator: Operator::Add,
                right: 4,
                result: 54
            }
        );
        assert_eq!(puzzle.slots(), &[Some(54), None]);
        assert_eq!(puzzle.status(), Status::Won);
        assert!(puzzle.is_won());
    }

    #[test]
    fn single_number_left_is_lost() {
        let mut puzzle = Puzzle::new(100, vec![50, 4]);
        puzzle.select_slot(1).unwrap();
        puzzle.select_slot(0).unwrap();
        puzzle.choose_operation(Operator::Add).unwrap();
        assert_eq!(puzzle.slots(), &[Some(54), None]);
        assert_eq!(puzzle.status(), Status::Lost);
        assert!(puzzle.is_terminal());
        assert!(!puzzle.is_won());
    }

    #[test]
    fn divide_not_whole_is_rejected() {
        let mut puzzle = Puzzle::new(100, vec![3, 5]);
        puzzle.select_slot(0).unwrap();
        puzzle.select_slot(1).unwrap();
        assert_eq!(
            puzzle.choose_operation(Operator::Divide),
            Err(CommandError::NonIntegralDivision {
                larger: 5,
                smaller: 3
            })
        );
        assert_eq!(puzzle.slots(), &[Some(3), Some(5)]);
        assert_eq!(puzzle.occupied(), 2);
        assert!(puzzle.selection().is_empty());
        assert_eq!(puzzle.pending_operation(), None);
        assert_eq!(puzzle.status(), Status::InProgress);
    }

    #[test]
    fn divide_by_zero_is_rejected() {
        let mut puzzle = Puzzle::new(100, vec![7, 7, 9]);
        puzzle.select_slot(0).unwrap();
        puzzle.select_slot(1).unwrap();
        puzzle.choose_operation(Operator::Subtract).unwrap();
        assert_eq!(puzzle.slots(), &[Some(0), None, Some(9)]);
        puzzle.select_slot(2).unwrap();
        puzzle.select_slot(0).unwrap();
        assert!(puzzle.choose_operation(Operator::Divide).is_err());
        assert_eq!(puzzle.slots(), &[Some(0), None, Some(9)]);
    }

    #[test]
    fn result_goes_to_lower_slot() {
        let mut puzzle = Puzzle::new(1000, vec![2, 9, 6, 4]);
        puzzle.select_slot(3).unwrap();
        puzzle.select_slot(1).unwrap();
        let step = puzzle.choose_operation(Operator::Subtract).unwrap().unwrap();
        // operands are shown in the order they were selected
        assert_eq!(step.to_string(), "4 − 9 = 5");
        assert_eq!(puzzle.slots(), &[Some(2), Some(5), Some(6), None]);
        assert_eq!(puzzle.occupied(), 3);
    }

    #[test]
    fn step_keeps_selection_order() {
        let mut puzzle = Puzzle::new(1000, vec![4, 9, 7]);
        puzzle.select_slot(0).unwrap();
        puzzle.select_slot(1).unwrap();
        let step = puzzle.choose_operation(Operator::Subtract).unwrap().unwrap();
        assert_eq!(step.to_string(), "4 − 9 = 5");
        puzzle.select_slot(2).unwrap();
        puzzle.select_slot(0).unwrap();
        let step = puzzle.choose_operation(Operator::Divide);
        assert!(step.is_err());
        puzzle.select_slot(0).unwrap();
        puzzle.select_slot(2).unwrap();
        let step = puzzle.choose_operation(Operator::Multiply).unwrap().unwrap();
        assert_eq!(
            step,
            Step {
                left: 5,
                operator: Operator::Multiply,
                right: 7,
                result: 35
            }
        );
    }

    #[test]
    fn pending_operation_applies_on_pair() {
        let mut puzzle = Puzzle::new(1000, vec![6, 4, 3]);
        assert_eq!(puzzle.choose_operation(Operator::Multiply), Ok(None));
        puzzle.select_slot(0).unwrap();
        assert_eq!(puzzle.pending_operation(), Some(Operator::Multiply));
        let step = puzzle.select_slot(2).unwrap().unwrap();
        assert_eq!(step.result, 18);
        assert_eq!(puzzle.slots(), &[Some(18), Some(4), None]);
        assert_eq!(puzzle.pending_operation(), None);
    }

    #[test]
    fn select_toggles() {
        let mut puzzle = Puzzle::new(1000, vec![1, 2, 3]);
        puzzle.select_slot(0).unwrap();
        puzzle.select_slot(0).unwrap();
        assert!(puzzle.selection().is_empty());
    }

    #[test]
    fn third_selection_rejected() {
        let mut puzzle = Puzzle::new(1000, vec![1, 2, 3]);
        puzzle.select_slot(0).unwrap();
        puzzle.select_slot(1).unwrap();
        assert_eq!(puzzle.select_slot(2), Err(CommandError::SelectionFull));
        assert_eq!(puzzle.selection().pair(), Some((0, 1)));
        // selected slots can still be toggled off
        assert_eq!(puzzle.select_slot(1), Ok(None));
        assert_eq!(puzzle.selection().len(), 1);
    }

    #[test]
    fn invalid_slots() {
        let mut puzzle = Puzzle::new(1000, vec![1, 2, 3]);
        assert_eq!(puzzle.select_slot(3), Err(CommandError::SlotOutOfRange(3)));
        puzzle.select_slot(1).unwrap();
        puzzle.select_slot(2).unwrap();
        puzzle.choose_operation(Operator::Add).unwrap();
        assert_eq!(puzzle.select_slot(2), Err(CommandError::EmptySlot(2)));
        assert!(puzzle.selection().is_empty());
    }

    #[test]
    fn deselect_all() {
        let mut puzzle = Puzzle::new(1000, vec![1, 2, 3]);
        assert!(!puzzle.deselect_all());
        puzzle.select_slot(2).unwrap();
        puzzle.choose_operation(Operator::Add).unwrap();
        assert!(puzzle.deselect_all());
        assert!(puzzle.selection().is_empty());
        assert_eq!(puzzle.pending_operation(), None);
        assert!(!puzzle.deselect_all());
    }

    #[test]
    fn terminal_rejects_commands() {
        let mut puzzle = Puzzle::new(5, vec![2, 3, 8]);
        puzzle.select_slot(0).unwrap();
        puzzle.select_slot(1).unwrap();
        puzzle.choose_operation(Operator::Add).unwrap();
        assert!(puzzle.is_won());
        let before = puzzle.clone();
        assert_eq!(puzzle.select_slot(2), Err(CommandError::GameOver));
        assert_eq!(
            puzzle.choose_operation(Operator::Add),
            Err(CommandError::GameOver)
        );
        assert!(!puzzle.deselect_all());
        assert_eq!(puzzle, before);
    }

    #[test]
    fn target_dealt() {
        let puzzle = Puzzle::new(7, vec![1, 7, 3]);
        assert_eq!(puzzle.status(), Status::Won);
    }

    #[test]
    fn display() {
        let mut puzzle = Puzzle::new(120, vec![10, 12, 5]);
        puzzle.select_slot(1).unwrap();
        puzzle.choose_operation(Operator::Multiply).unwrap();
        assert_eq!(
            puzzle.to_string(),
            "Target: 120\n[1] 10  [2] 12*  [3] 5\nOperation: ×"
        );
    }
}
