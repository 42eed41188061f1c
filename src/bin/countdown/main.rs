#![warn(rust_2018_idioms)]
#![warn(trivial_casts)]
#![warn(trivial_numeric_casts)]
#![warn(unused_qualifications)]

use std::io::{self, BufRead, Write};

use anyhow::Result;
use countdown::error::CommandError;
use countdown::{Game, Puzzle, Status, Value};
use rand::rngs::StdRng;
use rand::SeedableRng;

use crate::command::{parse_line, Command, Move, HELP};
use crate::options::Options;

mod command;
mod options;

fn main() -> Result<()> {
    env_logger::init();
    let options = Options::from_args()?;
    let stdin = io::stdin();
    let stdout = io::stdout();
    let mut session = Session::new(&options, stdin.lock(), stdout.lock())?;
    session.start()?;
    Ok(())
}

enum Flow {
    Continue,
    Quit,
}

/// Plays games read from `input`, writing the board and messages to `output`
struct Session<R, W> {
    game: Game,
    rng: StdRng,
    input: R,
    output: W,
}

impl<R: BufRead, W: Write> Session<R, W> {
    fn new(options: &Options, input: R, output: W) -> Result<Self> {
        let rng = match options.seed() {
            Some(seed) => StdRng::seed_from_u64(seed),
            None => StdRng::from_entropy(),
        };
        Ok(Self {
            game: Game::new(*options.config())?,
            rng,
            input,
            output,
        })
    }

    fn start(&mut self) -> Result<()> {
        writeln!(
            self.output,
            "Use the numbers and +, −, ×, ÷ to reach the target. \
             Each number can only be used once! Type h for help."
        )?;
        self.new_game()?;
        let mut line = String::new();
        loop {
            write!(self.output, "> ")?;
            self.output.flush()?;
            line.clear();
            if self.input.read_line(&mut line)? == 0 {
                writeln!(self.output)?;
                break;
            }
            let commands = match parse_line(&line) {
                Ok(commands) => commands,
                Err(e) => {
                    writeln!(self.output, "{}", e)?;
                    continue;
                }
            };
            if let Flow::Quit = self.run_commands(&commands)? {
                break;
            }
        }
        Ok(())
    }

    fn run_commands(&mut self, commands: &[Command]) -> Result<Flow> {
        let mut changed = false;
        for &command in commands {
            match command {
                Command::Quit => return Ok(Flow::Quit),
                Command::Help => writeln!(self.output, "{}", HELP)?,
                Command::NewGame => {
                    self.game.reset();
                    self.new_game()?;
                    changed = false;
                }
                Command::ShowConfig => self.print_config()?,
                Command::Configure(config) => match self.game.set_config(config) {
                    Ok(()) => writeln!(self.output, "Settings saved for the next game.")?,
                    Err(e) => {
                        writeln!(self.output, "{}", e)?;
                        break;
                    }
                },
                Command::Move(m) => match self.on_move(m)? {
                    Ok(board_changed) => changed |= board_changed,
                    Err(e) => {
                        writeln!(self.output, "{}", e)?;
                        // a failed operation still clears the selection
                        changed |= e.is_failed_operation();
                        break;
                    }
                },
            }
        }
        if changed {
            self.print_puzzle()?;
        }
        Ok(Flow::Continue)
    }

    /// Plays a move on the current puzzle, returning whether the board changed
    fn on_move(&mut self, m: Move) -> Result<Result<bool, CommandError>> {
        let puzzle = match self.game.puzzle_mut() {
            Some(puzzle) => puzzle,
            None => return Ok(Ok(false)),
        };
        let result = match m {
            Move::Select(slot) => puzzle.select_slot(slot),
            Move::Operate(operator) => puzzle.choose_operation(operator),
            Move::Deselect => {
                if puzzle.deselect_all() {
                    return Ok(Ok(true));
                }
                if puzzle.is_terminal() {
                    return Ok(Err(CommandError::GameOver));
                }
                writeln!(self.output, "Nothing to deselect")?;
                return Ok(Ok(false));
            }
        };
        let step = match result {
            Ok(step) => step,
            Err(e) => return Ok(Err(e)),
        };
        if let Some(step) = step {
            let (status, target) = (puzzle.status(), puzzle.target());
            writeln!(self.output, "{}", step)?;
            self.on_status(status, target)?;
        }
        Ok(Ok(true))
    }

    fn new_game(&mut self) -> Result<()> {
        let puzzle = self.game.start_with_rng(&mut self.rng)?;
        let (status, target) = (puzzle.status(), puzzle.target());
        self.print_puzzle()?;
        self.on_status(status, target)
    }

    fn on_status(&mut self, status: Status, target: Value) -> Result<()> {
        match status {
            Status::InProgress => return Ok(()),
            Status::Won => writeln!(
                self.output,
                "Congratulations! You successfully reached the target number {}!",
                target
            )?,
            Status::Lost => writeln!(
                self.output,
                "Game Over. You couldn't reach the target number {}. Better luck next time!",
                target
            )?,
        }
        writeln!(self.output, "Type n for a new game or q to quit.")?;
        Ok(())
    }

    fn print_config(&mut self) -> Result<()> {
        let config = *self.game.config();
        writeln!(
            self.output,
            "Target {} to {}, {} small numbers from 1 to {}",
            config.min_target, config.max_target, config.num_small_numbers, config.max_small_number
        )?;
        Ok(())
    }

    fn print_puzzle(&mut self) -> Result<()> {
        if let Some(puzzle) = self.game.puzzle() {
            print_puzzle(&mut self.output, puzzle)?;
        }
        Ok(())
    }
}

fn print_puzzle(output: &mut impl Write, puzzle: &Puzzle) -> io::Result<()> {
    writeln!(output, "\n{}\n", puzzle)
}
