use std::io::IsTerminal;

use clap::Parser;

use crate::search::{Solver, Strategy};

/// Solve an N-puzzle read from standard input: `N`, then `N²` tiles
/// row-major with `0` for the blank.
#[derive(Parser, Debug, Clone)]
#[command(name = "n-puzzle", version)]
pub struct Cli {
    /// Frontier ordering.
    #[arg(long, value_enum, default_value_t = Strategy::BestFirst)]
    pub strategy: Strategy,

    /// Give up after expanding this many states.
    #[arg(long, value_name = "N")]
    pub max_expansions: Option<usize>,

    /// Print the board after every move of the solution.
    #[arg(long)]
    pub show_steps: bool,

    /// Search even when the parity check says the board is unsolvable.
    #[arg(long)]
    pub no_solvability_check: bool,

    /// Never style output.
    #[arg(long)]
    pub no_color: bool,
}

impl Cli {
    pub fn solver(&self, size: usize) -> Solver {
        Solver::new(size, self.strategy)
            .with_solvability_check(!self.no_solvability_check)
            .with_max_expansions(self.max_expansions)
    }

    pub fn use_color(&self) -> bool {
        use_color(self.no_color)
    }
}

/// Solve the built-in 3x3 demo board.
#[derive(Parser, Debug, Clone)]
#[command(name = "fixed", version)]
pub struct FixedCli {
    /// Frontier ordering.
    #[arg(long, value_enum, default_value_t = Strategy::BreadthFirst)]
    pub strategy: Strategy,

    /// Never style output.
    #[arg(long)]
    pub no_color: bool,
}

impl FixedCli {
    pub fn use_color(&self) -> bool {
        use_color(self.no_color)
    }
}

fn use_color(disabled: bool) -> bool {
    !disabled && std::io::stdout().is_terminal()
}

/// Logs go to stderr; `RUST_LOG` overrides the default `warn` filter.
pub fn init_logging() {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn"))
        .format_timestamp_micros()
        .init();
}
