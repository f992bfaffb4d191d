use super::Particle;

/// An equation: exactly two sides joined by `=`. Equations only appear at the top level.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Equation {
    left: Particle,
    right: Particle,
}

impl Equation {
    pub fn new(left: Particle, right: Particle) -> Self {
        Self { left, right }
    }

    /// Returns the left-hand side.
    pub fn left(&self) -> &Particle {
        &self.left
    }

    /// Returns the right-hand side.
    pub fn right(&self) -> &Particle {
        &self.right
    }
}
