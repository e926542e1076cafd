use std::io::{self, Write};
use std::time::Instant;

use anyhow::Context;
use clap::Parser;

use n_puzzle::config::{init_logging, FixedCli};
use n_puzzle::report::{write_elapsed, write_outcome};
use n_puzzle::{Board, Solver};

fn main() -> anyhow::Result<()> {
    let cli = FixedCli::parse();
    init_logging();

    let board = Board::from_rows(vec![vec![5, 8, 3], vec![1, 0, 4], vec![7, 6, 2]])
        .context("Built-in board is malformed")?;
    let solver = Solver::new(board.size(), cli.strategy);
    let color = cli.use_color();
    let mut out = io::stdout().lock();

    let start = Instant::now();
    let outcome = solver.solve(&board).context("Search failed")?;
    write_outcome(&mut out, &outcome, color)?;
    write_elapsed(&mut out, start.elapsed(), color)?;
    out.flush()?;

    Ok(())
}
