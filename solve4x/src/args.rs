use clap::{ArgAction, Parser};
use solve4x_compute::{
    arithmetic::RoundingPolicy,
    solver::{Mode, SolverOptions, SolverOptionsBuilder},
};

/// Solves and simplifies algebra problems step by step.
///
/// With no input, each line read from stdin is solved; if stdin is a terminal, an interactive
/// prompt is started instead.
#[derive(Debug, Parser)]
#[command(name = "solve4x", version)]
pub struct Args {
    /// The equation or expression to work on, such as `2x+3x=10`.
    pub input: Option<String>,

    /// What to do with the input: `solve`, `simplify` or `factor`. Defaults to `solve` for
    /// equations and `simplify` otherwise.
    #[arg(short, long, value_parser = clap::value_parser!(Mode))]
    pub mode: Option<Mode>,

    /// How to round arithmetic results: `always`, `decimals`, `scientific`, or a number of
    /// decimal places.
    #[arg(short, long, default_value = "decimals", value_parser = clap::value_parser!(RoundingPolicy))]
    pub rounding: RoundingPolicy,

    /// The maximum number of rounds of search before giving up.
    #[arg(long, default_value_t = 25)]
    pub max_rounds: usize,

    /// Expand each round of the search on multiple threads.
    #[arg(long)]
    pub parallel: bool,

    /// Log more about the search to stderr. Repeat for more detail.
    #[arg(short, long, action = ArgAction::Count)]
    pub verbose: u8,
}

impl Args {
    /// Returns the solver options for the given input.
    pub fn options(&self, input: &str) -> SolverOptions {
        let mode = self.mode.unwrap_or(if input.contains('=') {
            Mode::Solve
        } else {
            Mode::Simplify
        });

        SolverOptionsBuilder::new()
            .mode(mode)
            .rounding(self.rounding)
            .max_rounds(self.max_rounds)
            .parallel(self.parallel)
            .build()
    }

    /// Returns the default log filter for the verbosity level.
    pub fn log_filter(&self) -> &'static str {
        match self.verbose {
            0 => "warn",
            1 => "solver=info",
            2 => "solver=debug",
            _ => "solver=trace",
        }
    }
}
