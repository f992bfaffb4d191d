use crate::algebra::Algebra;
use crate::algorithm::Step;

/// A path through the search: the input, and the steps taken from it so far.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Solution {
    /// The value the search started from.
    pub original: Algebra,

    /// The steps taken, in order. The result of each step is the whole value after that step.
    pub steps: Vec<Step>,
}

impl Solution {
    /// Creates a solution with no steps.
    pub fn new(original: Algebra) -> Self {
        Self { original, steps: Vec::new() }
    }

    /// Returns the value after the last step.
    pub fn current(&self) -> &Algebra {
        self.steps.last().map_or(&self.original, |step| &step.result)
    }

    /// Returns a copy of this solution with one more step.
    pub fn push(&self, step: Step) -> Self {
        let mut steps = Vec::with_capacity(self.steps.len() + 1);
        steps.extend_from_slice(&self.steps);
        steps.push(step);
        Self { original: self.original.clone(), steps }
    }
}
