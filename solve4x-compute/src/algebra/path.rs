//! Locating and replacing sub-trees.
//!
//! A sub-tree is addressed by its [`Path`]: the child indices followed from the top of the tree.
//! In an [`Equation`](super::Equation), index `0` is the left side and `1` is the right side.
//! Replacing a sub-tree rebuilds only the ancestors along the path; every other child is shared
//! with the original tree.

use crate::error::{kind::InvalidSplice, Error};
use super::{Algebra, Equation, Level, Particle};

/// The child indices leading from the top of a tree to one of its sub-trees.
pub type Path = Vec<usize>;

impl Particle {
    /// Returns the direct children of this particle, in path order.
    ///
    /// Numbers, variables and mixed numbers have no children.
    pub fn children(&self) -> Vec<&Particle> {
        match self {
            Particle::Fraction(fraction) => vec![fraction.top(), fraction.bottom()],
            Particle::Term(term) => term.factors().iter().collect(),
            Particle::Expression(expression) => expression.terms().iter().collect(),
            Particle::Root(root) => vec![root.radicand()],
            Particle::Number(_) | Particle::MixedNumber(_) | Particle::Variable(_) => Vec::new(),
        }
    }

    /// Returns a copy of this particle with the child at the given index replaced.
    fn with_child(&self, index: usize, child: Particle) -> Option<Particle> {
        match self {
            Particle::Fraction(fraction) => match index {
                0 => Some(fraction.with_parts(child, fraction.bottom().clone()).into()),
                1 => Some(fraction.with_parts(fraction.top().clone(), child).into()),
                _ => None,
            },
            Particle::Term(term) if index < term.factors().len() => {
                let mut factors = term.factors().to_vec();
                factors[index] = child;
                Some(term.with_factors(factors).into())
            },
            Particle::Expression(expression) if index < expression.terms().len() => {
                let mut terms = expression.terms().to_vec();
                terms[index] = child;
                Some(expression.with_terms(terms).into())
            },
            Particle::Root(root) if index == 0 => Some(root.with_radicand(child).into()),
            _ => None,
        }
    }

    /// Returns the sub-tree at the given path.
    pub fn get(&self, path: &[usize]) -> Option<&Particle> {
        path.iter().try_fold(self, |particle, &index| {
            particle.children().get(index).copied()
        })
    }

    /// Returns a copy of this particle with the sub-tree at the given path replaced.
    fn replace_at(&self, path: &[usize], new: Particle) -> Option<Particle> {
        match path.split_first() {
            None => Some(new),
            Some((&index, rest)) => {
                let child = self.children().get(index).copied()?;
                let child = child.replace_at(rest, new)?;
                self.with_child(index, child)
            },
        }
    }

    /// Returns the path to the first sub-tree in pre-order that is equal to the target.
    fn find(&self, target: &Particle, path: &mut Path) -> bool {
        if self == target {
            return true;
        }

        for (index, child) in self.children().into_iter().enumerate() {
            path.push(index);
            if child.find(target, path) {
                return true;
            }
            path.pop();
        }

        false
    }

    /// Collects every sub-tree of the given level in pre-order, with its path.
    fn collect(&self, level: Level, path: &mut Path, out: &mut Vec<(Path, Algebra)>) {
        if self.level() == level {
            out.push((path.clone(), Algebra::Particle(self.clone())));
        }

        for (index, child) in self.children().into_iter().enumerate() {
            path.push(index);
            child.collect(level, path, out);
            path.pop();
        }
    }
}

impl Algebra {
    /// Returns every sub-tree of the given level, in pre-order, with the path that leads to it.
    ///
    /// These are the resources an algorithm of that level can be executed on.
    pub fn resources(&self, level: Level) -> Vec<(Path, Algebra)> {
        let mut out = Vec::new();
        match self {
            Algebra::Equation(_) if level == Level::Equation => out.push((Vec::new(), self.clone())),
            Algebra::Equation(equation) => {
                for (index, side) in [equation.left(), equation.right()].into_iter().enumerate() {
                    side.collect(level, &mut vec![index], &mut out);
                }
            },
            Algebra::Particle(particle) => particle.collect(level, &mut Vec::new(), &mut out),
        }
        out
    }

    /// Returns the sub-tree at the given path.
    pub fn get(&self, path: &[usize]) -> Option<Algebra> {
        match (self, path.split_first()) {
            (_, None) => Some(self.clone()),
            (Algebra::Equation(equation), Some((&side, rest))) => {
                let side = [equation.left(), equation.right()].get(side).copied()?;
                side.get(rest).cloned().map(Algebra::Particle)
            },
            (Algebra::Particle(particle), Some(_)) => particle.get(path).cloned().map(Algebra::Particle),
        }
    }

    /// Returns a copy of this value with the sub-tree at the given path replaced by `new`.
    ///
    /// Fails if the path does not lead anywhere, or if an equation would end up nested inside
    /// another value.
    pub fn replace_at(&self, path: &[usize], new: Algebra) -> Result<Algebra, Error> {
        let invalid = || Error::unspanned(InvalidSplice {
            path: path.to_vec(),
            algebra: self.to_string(),
        });

        let Some((&first, rest)) = path.split_first() else {
            return Ok(new);
        };
        let Algebra::Particle(new) = new else {
            return Err(invalid());
        };

        match self {
            Algebra::Equation(equation) => {
                let (left, right) = match first {
                    0 => (equation.left().replace_at(rest, new).ok_or_else(invalid)?, equation.right().clone()),
                    1 => (equation.left().clone(), equation.right().replace_at(rest, new).ok_or_else(invalid)?),
                    _ => return Err(invalid()),
                };
                Ok(Algebra::Equation(Equation::new(left, right)))
            },
            Algebra::Particle(particle) => particle
                .replace_at(path, new)
                .map(Algebra::Particle)
                .ok_or_else(invalid),
        }
    }

    /// Returns the path to the first sub-tree, in pre-order, that is structurally equal to the
    /// target.
    pub fn find(&self, target: &Algebra) -> Option<Path> {
        match (self, target) {
            (_, _) if self == target => Some(Vec::new()),
            (Algebra::Equation(equation), Algebra::Particle(target)) => {
                [equation.left(), equation.right()]
                    .into_iter()
                    .enumerate()
                    .find_map(|(index, side)| {
                        let mut path = vec![index];
                        side.find(target, &mut path).then_some(path)
                    })
            },
            (Algebra::Particle(particle), Algebra::Particle(target)) => {
                let mut path = Vec::new();
                particle.find(target, &mut path).then_some(path)
            },
            _ => None,
        }
    }

    /// Returns a copy of this value with the first sub-tree equal to `old` replaced by `new`, or
    /// [`None`] if there is no such sub-tree.
    pub fn replace(&self, old: &Algebra, new: Algebra) -> Option<Algebra> {
        let path = self.find(old)?;
        self.replace_at(&path, new).ok()
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;
    use super::*;
    use super::super::parse;

    fn paths(input: &str, level: Level) -> Vec<(Path, String)> {
        parse(input)
            .unwrap()
            .resources(level)
            .into_iter()
            .map(|(path, algebra)| (path, algebra.to_string()))
            .collect()
    }

    #[test]
    fn resources_in_pre_order() {
        assert_eq!(paths("2xx+3(yy)", Level::Term), vec![
            (vec![0], "2xx".to_string()),
            (vec![1], "3(yy)".to_string()),
            (vec![1, 1], "yy".to_string()),
        ]);
    }

    #[test]
    fn resources_include_root() {
        assert_eq!(paths("x+x", Level::Expression), vec![(vec![], "x+x".to_string())]);
    }

    #[test]
    fn resources_in_equation() {
        assert_eq!(paths("2x+x=3y", Level::Term), vec![
            (vec![0, 0], "2x".to_string()),
            (vec![1], "3y".to_string()),
        ]);
        assert_eq!(paths("2x=3", Level::Equation), vec![(vec![], "2x=3".to_string())]);
        assert_eq!(paths("2x", Level::Equation), vec![]);
    }

    #[test]
    fn replace_at_path() {
        let algebra = parse("2x+(x+x)=4").unwrap();
        let replaced = algebra.replace_at(&[0, 1], parse("2x").unwrap()).unwrap();
        assert_eq!(replaced, parse("2x+2x=4").unwrap());
    }

    #[test]
    fn replace_keeps_siblings() {
        let algebra = parse("x+y+z").unwrap();
        let replaced = algebra.replace_at(&[1], parse("w").unwrap()).unwrap();
        let (Algebra::Particle(Particle::Expression(before)), Algebra::Particle(Particle::Expression(after))) = (&algebra, &replaced) else {
            panic!("expected expressions");
        };
        assert_eq!(before.terms()[0], after.terms()[0]);
        assert_eq!(replaced.to_string(), "x+w+z");
    }

    #[test]
    fn replace_by_value() {
        let algebra = parse("3+(x+x)").unwrap();
        let replaced = algebra.replace(&parse("x+x").unwrap(), parse("2x").unwrap()).unwrap();
        assert_eq!(replaced, parse("3+2x").unwrap());
        assert_eq!(algebra.replace(&parse("y").unwrap(), parse("2x").unwrap()), None);
    }

    #[test]
    fn invalid_splice() {
        let algebra = parse("x+y").unwrap();
        let err = algebra.replace_at(&[5], parse("w").unwrap()).unwrap_err();
        assert!(err.is::<InvalidSplice>());

        let err = algebra.replace_at(&[0], parse("x=1").unwrap()).unwrap_err();
        assert!(err.is::<InvalidSplice>());
    }

    #[test]
    fn get_follows_path() {
        let algebra = parse("2x=3(1)/(4)").unwrap();
        assert_eq!(algebra.get(&[0, 1]), Some(parse("x").unwrap()));
        assert_eq!(algebra.get(&[1]), Some(parse("3(1)/(4)").unwrap()));
        assert_eq!(algebra.get(&[2]), None);
    }
}
