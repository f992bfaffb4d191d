use std::sync::Arc;
use super::{signed_particle, Particle};

/// Factors that are multiplied together, such as `2xy` or `3(x+1)`.
///
/// If the first factor is a numeric constant, it is the term's **coefficient**.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Term {
    sign: bool,
    factors: Arc<[Particle]>,
    exponent: u32,
}

signed_particle!(Term);

impl Term {
    pub fn new(sign: bool, factors: Vec<Particle>, exponent: u32) -> Self {
        Self { sign, factors: factors.into(), exponent }
    }

    /// Returns the factors of this term, coefficient included.
    pub fn factors(&self) -> &[Particle] {
        &self.factors
    }

    /// Returns the coefficient of this term: the first factor, if it is a numeric constant.
    pub fn coefficient(&self) -> Option<&Particle> {
        self.factors.first().filter(|factor| factor.is_constant())
    }

    /// Returns the factors after the coefficient, or every factor if there is no coefficient.
    pub fn variable_factors(&self) -> &[Particle] {
        match self.coefficient() {
            Some(_) => &self.factors[1..],
            None => &self.factors,
        }
    }

    pub(crate) fn with_factors(&self, factors: Vec<Particle>) -> Self {
        Self { factors: factors.into(), ..self.clone() }
    }
}
