use crate::arithmetic::RoundingPolicy;
use std::{fmt, str::FromStr};

/// What the solver is asked to do with its input.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Mode {
    /// Solve an equation, until both sides are equal or fully simplified.
    Solve,

    /// Simplify an expression, until it is a constant, a variable, or a first-degree expression
    /// such as `2x+3`.
    ///
    /// This is the default mode.
    #[default]
    Simplify,

    /// Factor an expression, until it is a single term.
    Factor,
}

impl Mode {
    /// Returns the name of this mode, as written on the command line.
    pub fn name(&self) -> &'static str {
        match self {
            Self::Solve => "solve",
            Self::Simplify => "simplify",
            Self::Factor => "factor",
        }
    }

    /// Returns true if this mode works on an equation, rather than an expression.
    pub fn accepts_equation(&self) -> bool {
        matches!(self, Self::Solve)
    }
}

impl fmt::Display for Mode {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Mode {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "solve" => Ok(Self::Solve),
            "simplify" => Ok(Self::Simplify),
            "factor" => Ok(Self::Factor),
            _ => Err(format!("unknown mode `{}`; expected `solve`, `simplify`, or `factor`", s)),
        }
    }
}

/// Options that control the search for a solution.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SolverOptions {
    /// What to do with the input.
    pub mode: Mode,

    /// How arithmetic results are rounded.
    pub rounding: RoundingPolicy,

    /// The maximum number of rounds to expand the frontier before giving up.
    ///
    /// The default is 25.
    pub max_rounds: usize,

    /// Algorithms whose `smarts` for a resource is at or below this value are not executed on
    /// it.
    ///
    /// The default is 3.
    pub threshold: u8,

    /// Whether to expand the solutions of each round on multiple threads.
    ///
    /// The result is the same either way. This option has no effect unless the `parallel`
    /// feature is enabled.
    pub parallel: bool,
}

impl Default for SolverOptions {
    fn default() -> Self {
        Self {
            mode: Mode::default(),
            rounding: RoundingPolicy::default(),
            max_rounds: 25,
            threshold: 3,
            parallel: false,
        }
    }
}

impl SolverOptions {
    /// Wraps the given [`SolverOptions`] into a builder for further customization.
    pub fn into_builder(self) -> SolverOptionsBuilder {
        SolverOptionsBuilder(self)
    }
}

/// Helper struct to build a [`SolverOptions`] struct.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct SolverOptionsBuilder(SolverOptions);

impl SolverOptionsBuilder {
    /// Creates a new builder with the default options.
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the mode. See [`Mode`] for more information.
    pub fn mode(mut self, mode: Mode) -> Self {
        self.0.mode = mode;
        self
    }

    /// Sets the rounding policy. See [`RoundingPolicy`] for more information.
    pub fn rounding(mut self, rounding: RoundingPolicy) -> Self {
        self.0.rounding = rounding;
        self
    }

    /// Sets the maximum number of rounds.
    pub fn max_rounds(mut self, max_rounds: usize) -> Self {
        self.0.max_rounds = max_rounds;
        self
    }

    /// Sets the smarts threshold.
    pub fn threshold(mut self, threshold: u8) -> Self {
        self.0.threshold = threshold;
        self
    }

    /// Sets whether to expand solutions on multiple threads.
    pub fn parallel(mut self, parallel: bool) -> Self {
        self.0.parallel = parallel;
        self
    }

    /// Builds the [`SolverOptions`] struct.
    pub fn build(self) -> SolverOptions {
        self.0
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;
    use super::*;

    #[test]
    fn defaults() {
        let options = SolverOptions::default();
        assert_eq!(options.max_rounds, 25);
        assert_eq!(options.threshold, 3);
        assert_eq!(options.rounding, RoundingPolicy::ForScientificNotationAndDecimals);
    }

    #[test]
    fn builder() {
        let options = SolverOptionsBuilder::new()
            .mode(Mode::Solve)
            .rounding(RoundingPolicy::Custom(2))
            .max_rounds(5)
            .build();
        assert_eq!(options.mode, Mode::Solve);
        assert_eq!(options.rounding, RoundingPolicy::Custom(2));
        assert_eq!(options.max_rounds, 5);
        assert_eq!(options.into_builder().threshold(4).build().threshold, 4);
    }

    #[test]
    fn mode_names() {
        for mode in [Mode::Solve, Mode::Simplify, Mode::Factor] {
            assert_eq!(mode.name().parse::<Mode>(), Ok(mode));
        }
        assert!("expand".parse::<Mode>().is_err());
    }
}
