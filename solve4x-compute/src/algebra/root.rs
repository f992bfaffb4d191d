use std::sync::Arc;
use super::{signed_particle, Particle};

/// A radical, such as `√(x)` or `√[3](8)`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Root {
    sign: bool,
    index: u32,
    radicand: Arc<Particle>,
    exponent: u32,
}

signed_particle!(Root);

impl Root {
    pub fn new(sign: bool, index: u32, radicand: impl Into<Particle>, exponent: u32) -> Self {
        Self { sign, index, radicand: Arc::new(radicand.into()), exponent }
    }

    /// Returns the index of the radical; `2` for a square root.
    pub fn index(&self) -> u32 {
        self.index
    }

    /// Returns the particle under the radical.
    pub fn radicand(&self) -> &Particle {
        &self.radicand
    }

    pub(crate) fn with_radicand(&self, radicand: Particle) -> Self {
        Self { radicand: Arc::new(radicand), ..self.clone() }
    }
}
