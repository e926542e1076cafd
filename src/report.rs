use std::io::{self, Write};
use std::time::Duration;

use crossterm::style::Stylize;

use crate::puzzle::{Board, Move};
use crate::search::Outcome;

/// Writes the result lines for `outcome`:
/// `Solved in <k> moves.` plus the move list, or `No solution found.`
pub fn write_outcome<W: Write>(out: &mut W, outcome: &Outcome, color: bool) -> io::Result<()> {
    match outcome {
        Outcome::Solved(solution) => {
            let headline = format!("Solved in {} moves.", solution.len());
            if color {
                writeln!(out, "{}", headline.green().bold())?;
            } else {
                writeln!(out, "{}", headline)?;
            }
            for movement in &solution.moves {
                write!(out, "{} ", movement)?;
            }
            writeln!(out)
        }
        Outcome::Unsolvable | Outcome::Exhausted(_) | Outcome::LimitReached(_) => {
            let headline = "No solution found.";
            if color {
                writeln!(out, "{}", headline.red().bold())
            } else {
                writeln!(out, "{}", headline)
            }
        }
    }
}

/// Prints the start board and the board after each move.
pub fn write_steps<W: Write>(out: &mut W, start: &Board, moves: &[Move]) -> io::Result<()> {
    writeln!(out, "Start:\n{}", start)?;
    let mut board = start.clone();
    for &movement in moves {
        match board.apply(movement) {
            Some(next) => board = next,
            None => break,
        }
        writeln!(out, "{}\n{}", movement, board)?;
    }
    Ok(())
}

/// Seconds with microsecond resolution, e.g. `0.012345`.
pub fn format_elapsed(elapsed: Duration) -> String {
    format!("{:.6}", elapsed.as_micros() as f64 / 1_000_000.0)
}

pub fn write_elapsed<W: Write>(out: &mut W, elapsed: Duration, color: bool) -> io::Result<()> {
    let seconds = format_elapsed(elapsed);
    if color {
        writeln!(out, "Resolved in: {} seconds.", seconds.cyan())
    } else {
        writeln!(out, "Resolved in: {} seconds.", seconds)
    }
}
