use crate::algebra::{Algebra, Particle};
use std::fmt;

/// A piece of an [`Explanation`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Fragment {
    /// Plain text.
    Text(String),

    /// A value referred to by the explanation.
    Algebra(Algebra),

    /// Several particles, written separated by commas.
    List(Vec<Particle>),
}

impl fmt::Display for Fragment {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            Fragment::Text(text) => f.write_str(text),
            Fragment::Algebra(algebra) => algebra.fmt(f),
            Fragment::List(particles) => {
                let mut iter = particles.iter();
                if let Some(first) = iter.next() {
                    write!(f, "{}", first)?;
                    for particle in iter {
                        write!(f, ", {}", particle)?;
                    }
                }
                Ok(())
            },
        }
    }
}

/// A human-readable justification of a step, made of text and references to the values
/// involved.
///
/// Keeping the values as values lets a front-end render them however it likes; the
/// [`Display`](fmt::Display) implementation writes them in the canonical notation.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Explanation {
    fragments: Vec<Fragment>,
}

impl Explanation {
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns the fragments of this explanation, in order.
    pub fn fragments(&self) -> &[Fragment] {
        &self.fragments
    }

    /// Appends text.
    pub fn text(mut self, text: impl Into<String>) -> Self {
        self.fragments.push(Fragment::Text(text.into()));
        self
    }

    /// Appends a reference to a value.
    pub fn algebra(mut self, algebra: impl Into<Algebra>) -> Self {
        self.fragments.push(Fragment::Algebra(algebra.into()));
        self
    }

    /// Appends a list of particles.
    pub fn list(mut self, particles: Vec<Particle>) -> Self {
        self.fragments.push(Fragment::List(particles));
        self
    }
}

impl fmt::Display for Explanation {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        self.fragments.iter().try_for_each(|fragment| fragment.fmt(f))
    }
}
