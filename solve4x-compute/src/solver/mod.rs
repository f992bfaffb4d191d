//! The search for a solution.
//!
//! The solver keeps a frontier of [`Solution`]s, starting from the parsed input with no steps.
//! Each round, it checks whether any solution in the frontier is finished for the requested
//! [`Mode`]; if so, the one with the fewest steps wins. Otherwise, every solution is expanded:
//! each algorithm in the roster is scored against every resource of its level, and each
//! algorithm scoring above the threshold is executed and spliced back into the tree, producing a
//! new solution with one more step. The search gives up when the frontier empties or the round
//! cap is reached.
//!
//! ```
//! use solve4x_compute::{arithmetic::RoundingPolicy, solver::{solve, Mode, Outcome}};
//!
//! let Outcome::Solved(solution) = solve("2x+3x", Mode::Simplify, RoundingPolicy::default()).unwrap() else {
//!     panic!("expected a solution");
//! };
//! assert_eq!(solution.current().to_string(), "5x");
//! ```

mod options;
mod solution;
pub mod terminal;

pub use options::{Mode, SolverOptions, SolverOptionsBuilder};
pub use solution::Solution;

use crate::{
    algebra::{parse, Algebra},
    algorithm::{roster, Algorithm, Step},
    arithmetic::RoundingPolicy,
    error::{kind::ModeMismatch, Error},
};
use terminal::is_terminal;
use tracing::{debug, info, trace, warn};

/// Why the solver gave up.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum UnsolvedReason {
    /// No algorithm could do anything more with any solution in the frontier.
    Exhausted,

    /// The round cap was reached.
    RoundCap,
}

/// The result of a search.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Outcome {
    /// A finished solution was found.
    Solved(Solution),

    /// No finished solution was found.
    Unsolved {
        /// The number of rounds of expansion that were performed.
        rounds: usize,

        /// Why the search stopped.
        reason: UnsolvedReason,
    },
}

/// Searches for a solution to a single input.
#[derive(Debug)]
pub struct Solver {
    input: Algebra,
    options: SolverOptions,
    algorithms: Vec<Box<dyn Algorithm>>,
}

impl Solver {
    /// Parses the input and prepares to solve it.
    ///
    /// Fails if the input cannot be parsed, or if it is an equation and the mode is not
    /// [`Mode::Solve`] (or the other way around).
    pub fn new(input: &str, options: SolverOptions) -> Result<Self, Error> {
        let algebra = parse(input)?;
        Self::with_algebra(algebra, options).map_err(|mut err| {
            err.spans = vec![0..input.len()];
            err
        })
    }

    /// Prepares to solve an already-built value.
    pub fn with_algebra(input: Algebra, options: SolverOptions) -> Result<Self, Error> {
        if options.mode.accepts_equation() != input.is_equation() {
            return Err(Error::unspanned(ModeMismatch {
                mode: options.mode.name(),
                equation: input.is_equation(),
            }));
        }

        Ok(Self { input, options, algorithms: roster() })
    }

    /// Replaces the algorithms that the solver tries.
    pub fn with_roster(mut self, algorithms: Vec<Box<dyn Algorithm>>) -> Self {
        self.algorithms = algorithms;
        self
    }

    /// Returns the parsed input.
    pub fn input(&self) -> &Algebra {
        &self.input
    }

    /// Runs the search.
    pub fn run(&self) -> Outcome {
        let mut frontier = vec![Solution::new(self.input.clone())];

        for round in 0..=self.options.max_rounds {
            debug!(target: "solver", round, frontier = frontier.len(), "round_start");

            let finished = frontier
                .iter()
                .filter(|solution| is_terminal(solution.current(), self.options.mode))
                .min_by_key(|solution| solution.steps.len());
            if let Some(solution) = finished {
                info!(target: "solver", round, steps = solution.steps.len(), "solved");
                return Outcome::Solved(solution.clone());
            }

            if frontier.is_empty() {
                return Outcome::Unsolved { rounds: round, reason: UnsolvedReason::Exhausted };
            }

            if round == self.options.max_rounds {
                break;
            }

            frontier = self.expand(&frontier);
        }

        Outcome::Unsolved {
            rounds: self.options.max_rounds,
            reason: UnsolvedReason::RoundCap,
        }
    }

    /// Executes the algorithm on the resource at `path`, and splices the result into `current`.
    fn apply(
        &self,
        algorithm: &dyn Algorithm,
        current: &Algebra,
        path: &[usize],
        resource: &Algebra,
    ) -> Result<Step, Error> {
        let step = algorithm.execute(resource, self.options.rounding)?;
        Ok(Step {
            result: current.replace_at(path, step.result)?,
            ..step
        })
    }

    /// Returns every solution one step away from the given one, in roster order, then resource
    /// order.
    fn expand_solution(&self, solution: &Solution) -> Vec<Solution> {
        let current = solution.current();
        let mut next = Vec::new();

        for algorithm in &self.algorithms {
            for (path, resource) in current.resources(algorithm.level()) {
                let smarts = algorithm.smarts(&resource);
                if smarts <= self.options.threshold {
                    continue;
                }

                match self.apply(algorithm.as_ref(), current, &path, &resource) {
                    Ok(step) => {
                        trace!(target: "solver", algorithm = algorithm.name(), smarts, ?path, "apply");
                        next.push(solution.push(step));
                    },
                    Err(err) => {
                        warn!(target: "solver", algorithm = algorithm.name(), ?path, kind = ?err.kind, "branch_aborted");
                    },
                }
            }
        }

        next
    }

    fn expand_serial(&self, frontier: &[Solution]) -> Vec<Solution> {
        frontier
            .iter()
            .flat_map(|solution| self.expand_solution(solution))
            .collect()
    }

    #[cfg(feature = "parallel")]
    fn expand(&self, frontier: &[Solution]) -> Vec<Solution> {
        use rayon::prelude::*;

        if self.options.parallel {
            // collecting an indexed parallel iterator keeps the frontier order
            frontier
                .par_iter()
                .flat_map_iter(|solution| self.expand_solution(solution))
                .collect()
        } else {
            self.expand_serial(frontier)
        }
    }

    #[cfg(not(feature = "parallel"))]
    fn expand(&self, frontier: &[Solution]) -> Vec<Solution> {
        self.expand_serial(frontier)
    }
}

/// Parses and solves the input with the default options for the given mode and rounding policy.
pub fn solve(input: &str, mode: Mode, rounding: RoundingPolicy) -> Result<Outcome, Error> {
    let options = SolverOptionsBuilder::new()
        .mode(mode)
        .rounding(rounding)
        .build();
    Ok(Solver::new(input, options)?.run())
}
