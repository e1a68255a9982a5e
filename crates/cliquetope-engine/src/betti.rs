//! Reduced Betti sequences and their polynomial algebra.
//!
//! A sequence `[b₀, …, b_d]` is read as the polynomial `Σ bᵢ xⁱ`. Joins of
//! complexes multiply polynomials (with one shift per extra factor), wedges
//! add them.

use std::fmt;
use std::iter::Sum;
use std::ops::{Add, Mul};

use serde::Serialize;

/// Reduced Betti numbers with trailing zeros trimmed.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, Serialize)]
#[serde(transparent)]
pub struct BettiSequence(Vec<usize>);

impl BettiSequence {
    /// Wrap reduced Betti numbers.
    #[must_use]
    pub fn new(mut numbers: Vec<usize>) -> Self {
        while numbers.last() == Some(&0) {
            numbers.pop();
        }
        Self(numbers)
    }

    /// Reduce the output of a homology oracle (`b₀` counts components).
    #[must_use]
    pub fn from_unreduced(mut numbers: Vec<usize>) -> Self {
        if let Some(b0) = numbers.first_mut() {
            *b0 = b0.saturating_sub(1);
        }
        Self::new(numbers)
    }

    /// `count · xᵈⁱᵐ`.
    #[must_use]
    pub fn monomial(dimension: usize, count: usize) -> Self {
        let mut numbers = vec![0; dimension + 1];
        numbers[dimension] = count;
        Self::new(numbers)
    }

    #[must_use]
    pub fn as_slice(&self) -> &[usize] {
        &self.0
    }

    /// Rank in `dimension`, zero past the end.
    #[must_use]
    pub fn get(&self, dimension: usize) -> usize {
        self.0.get(dimension).copied().unwrap_or(0)
    }

    #[must_use]
    pub fn is_zero(&self) -> bool {
        self.0.is_empty()
    }

    /// Multiply by `xᵏ`.
    #[must_use]
    pub fn shift(&self, k: usize) -> Self {
        if self.is_zero() {
            return Self::default();
        }
        let mut numbers = vec![0; k];
        numbers.extend_from_slice(&self.0);
        Self(numbers)
    }

    /// Reduced Betti polynomial of the join of `parts`: `xⁿ⁻¹ · ∏ Pᵢ`.
    #[must_use]
    pub fn join(parts: &[Self]) -> Self {
        let Some((first, rest)) = parts.split_first() else {
            return Self::default();
        };
        let product = rest.iter().fold(first.clone(), |acc, p| &acc * p);
        product.shift(rest.len())
    }

    /// Nonzero entries as `(dimension, count)`.
    pub fn nonzero(&self) -> impl Iterator<Item = (usize, usize)> + '_ {
        self.0
            .iter()
            .copied()
            .enumerate()
            .filter(|&(_, count)| count > 0)
    }
}

impl Add for &BettiSequence {
    type Output = BettiSequence;

    fn add(self, rhs: Self) -> BettiSequence {
        let len = self.0.len().max(rhs.0.len());
        BettiSequence::new((0..len).map(|i| self.get(i) + rhs.get(i)).collect())
    }
}

impl Add for BettiSequence {
    type Output = Self;

    fn add(self, rhs: Self) -> Self {
        &self + &rhs
    }
}

impl Mul for &BettiSequence {
    type Output = BettiSequence;

    fn mul(self, rhs: Self) -> BettiSequence {
        if self.is_zero() || rhs.is_zero() {
            return BettiSequence::default();
        }
        let mut numbers = vec![0; self.0.len() + rhs.0.len() - 1];
        for (i, a) in self.0.iter().enumerate() {
            for (j, b) in rhs.0.iter().enumerate() {
                numbers[i + j] += a * b;
            }
        }
        BettiSequence::new(numbers)
    }
}

impl Sum for BettiSequence {
    fn sum<I: Iterator<Item = Self>>(iter: I) -> Self {
        iter.fold(Self::default(), |acc, p| acc + p)
    }
}

impl fmt::Display for BettiSequence {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[")?;
        for (i, b) in self.0.iter().enumerate() {
            if i > 0 {
                write!(f, ", ")?;
            }
            write!(f, "{b}")?;
        }
        write!(f, "]")
    }
}
