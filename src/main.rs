use std::io::{self, Write};
use std::time::Instant;

use anyhow::Context;
use clap::Parser;
use log::{info, warn};

use n_puzzle::config::{init_logging, Cli};
use n_puzzle::input::read_board;
use n_puzzle::report::{write_elapsed, write_outcome, write_steps};
use n_puzzle::Outcome;

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    init_logging();

    let board = read_board(io::stdin().lock())?;
    info!("Read {}x{} board", board.size(), board.size());

    let solver = cli.solver(board.size());
    let color = cli.use_color();
    let mut out = io::stdout().lock();

    let start = Instant::now();
    let outcome = solver.solve(&board).context("Search failed")?;

    match &outcome {
        Outcome::Unsolvable => warn!("Board is not solvable"),
        Outcome::LimitReached(stats) => {
            warn!("Gave up after expanding {} states", stats.expanded)
        }
        _ => {}
    }
    write_outcome(&mut out, &outcome, color)?;
    let elapsed = start.elapsed();

    if cli.show_steps {
        if let Some(solution) = outcome.solution() {
            write_steps(&mut out, &board, &solution.moves)?;
        }
    }
    write_elapsed(&mut out, elapsed, color)?;
    out.flush()?;

    Ok(())
}
