use super::signed_particle;

/// A single-letter variable, such as `x`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Variable {
    sign: bool,
    name: char,
    exponent: u32,
}

signed_particle!(Variable);

impl Variable {
    pub fn new(sign: bool, name: char, exponent: u32) -> Self {
        Self { sign, name, exponent }
    }

    /// Returns the letter naming this variable.
    pub fn name(&self) -> char {
        self.name
    }
}
