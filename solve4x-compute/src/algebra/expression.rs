use std::sync::Arc;
use super::{signed_particle, Particle};

/// Terms that are added together, such as `2x-4`. Each term carries its own sign.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Expression {
    sign: bool,
    terms: Arc<[Particle]>,
    exponent: u32,
}

signed_particle!(Expression);

impl Expression {
    pub fn new(sign: bool, terms: Vec<Particle>, exponent: u32) -> Self {
        Self { sign, terms: terms.into(), exponent }
    }

    /// Returns the terms of this expression.
    pub fn terms(&self) -> &[Particle] {
        &self.terms
    }

    pub(crate) fn with_terms(&self, terms: Vec<Particle>) -> Self {
        Self { terms: terms.into(), ..self.clone() }
    }
}
