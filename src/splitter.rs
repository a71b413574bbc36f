//! Generic run splitter.
//!
//! Cuts a symbol sequence into maximal runs of gaps and non-gaps. The
//! algorithm is written once for any symbol type: what counts as a gap is
//! supplied as a [`GapClassifier`].
//!
//! ```
//! use typedseq::alphabet::{Alphabet, Dna};
//! use typedseq::splitter::Splitter;
//!
//! let splitter = Splitter::for_alphabet::<Dna>();
//! let runs = splitter.section(&Dna::parse("AG--CT-T").unwrap()).unwrap();
//! let text: Vec<String> = runs.iter().map(|run| Dna::render(run)).collect();
//! assert_eq!(text, ["AG", "--", "CT", "-", "T"]);
//! ```

use crate::alphabet::Alphabet;
use crate::error::{Result, SeqError};
use crate::gaps::{GapClassifier, GapSet};

/// A maximal stretch of symbols sharing the gap classification of its first
/// element.
pub type Run<S> = Vec<S>;

/// Splits `symbols` into maximal runs.
///
/// Concatenating the runs gives back `symbols`; adjacent runs always differ
/// in classification. Fails with [`SeqError::EmptySequence`] on empty input.
pub fn section<S, G>(symbols: &[S], gaps: &G) -> Result<Vec<Run<S>>>
where
    S: Clone,
    G: GapClassifier<S> + ?Sized,
{
    let Some(first) = symbols.first() else {
        return Err(SeqError::EmptySequence);
    };

    let mut runs = Vec::new();
    let mut start = 0;
    let mut in_gap = gaps.is_gap(first);
    for (i, symbol) in symbols.iter().enumerate().skip(1) {
        let gap = gaps.is_gap(symbol);
        if gap != in_gap {
            runs.push(symbols[start..i].to_vec());
            start = i;
            in_gap = gap;
        }
    }
    runs.push(symbols[start..].to_vec());
    Ok(runs)
}

/// Splits many independent sequences, keeping input order.
///
/// Runs on the rayon pool when the `parallel` feature is enabled. If several
/// inputs fail, the error of the first failing input is returned.
pub fn section_all<S, G, R>(sequences: &[R], gaps: &G) -> Result<Vec<Vec<Run<S>>>>
where
    S: Clone + Send,
    G: GapClassifier<S> + Sync + ?Sized,
    R: AsRef<[S]> + Sync,
{
    #[cfg(feature = "parallel")]
    {
        use rayon::prelude::*;
        // Rayon's Result collection may surface any failing item; collect
        // everything first so the reported error follows input order.
        let results: Vec<Result<Vec<Run<S>>>> = sequences
            .par_iter()
            .map(|seq| section(seq.as_ref(), gaps))
            .collect();
        results.into_iter().collect()
    }
    #[cfg(not(feature = "parallel"))]
    {
        sequences.iter().map(|seq| section(seq.as_ref(), gaps)).collect()
    }
}

/// A splitter bound to one gap capability.
#[derive(Debug, Clone)]
pub struct Splitter<G> {
    gaps: G,
}

impl<G> Splitter<G> {
    pub fn new(gaps: G) -> Self {
        Self { gaps }
    }

    pub fn gaps(&self) -> &G {
        &self.gaps
    }

    pub fn section<S: Clone>(&self, symbols: &[S]) -> Result<Vec<Run<S>>>
    where
        G: GapClassifier<S>,
    {
        section(symbols, &self.gaps)
    }
}

impl<S: Copy> Splitter<GapSet<S>> {
    /// A splitter using the gaps declared by alphabet `A`.
    pub fn for_alphabet<A: Alphabet<Symbol = S>>() -> Self {
        Self::new(GapSet::of::<A>())
    }
}
