//! Gap classification.
//!
//! Symbols never report whether they are gaps. Algorithms instead take a
//! [`GapClassifier`] capability: an alphabet's own gap set
//! ([`GapSet::of`]), a custom set, or any `Fn(&S) -> bool`.

use crate::alphabet::Alphabet;

/// Decides whether a symbol counts as a gap.
pub trait GapClassifier<S> {
    fn is_gap(&self, symbol: &S) -> bool;
}

impl<S, F> GapClassifier<S> for F
where
    F: Fn(&S) -> bool,
{
    fn is_gap(&self, symbol: &S) -> bool {
        self(symbol)
    }
}

/// A fixed set of gap-equivalent symbols.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GapSet<S> {
    gaps: Vec<S>,
}

impl<S> GapSet<S> {
    /// A custom gap set, e.g. treating `N` as missing data alongside `-`.
    pub fn new(gaps: impl IntoIterator<Item = S>) -> Self {
        Self {
            gaps: gaps.into_iter().collect(),
        }
    }

    pub fn symbols(&self) -> &[S] {
        &self.gaps
    }
}

impl<S: Copy> GapSet<S> {
    /// The gap set an alphabet declares.
    pub fn of<A: Alphabet<Symbol = S>>() -> Self {
        Self {
            gaps: A::GAPS.to_vec(),
        }
    }
}

impl<S: PartialEq> GapClassifier<S> for GapSet<S> {
    fn is_gap(&self, symbol: &S) -> bool {
        self.gaps.contains(symbol)
    }
}
