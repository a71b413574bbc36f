//! Sequence and alignment containers.
//!
//! This module contains the metadata-carrying types:
//! - [`Sequence`]: typed symbols plus identifier and description
//! - [`Alignment`]: equal-length sequences of one alphabet
//!
//! The algorithms in [`crate::splitter`] and [`crate::columns`] never take
//! these types. Strip them to plain symbol lists with
//! [`Sequence::to_list`] / [`Alignment::rows`], and re-wrap results
//! explicitly with [`Sequence::with_symbols`] / [`Alignment::rebuild`].

use std::fmt;
use std::marker::PhantomData;

use tracing::debug;

use crate::alphabet::Alphabet;
use crate::error::{Result, SeqError};
use crate::fasta::Record;

/// A typed sequence with its identifier and description.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Sequence<A: Alphabet> {
    id: String,
    description: String,
    symbols: Vec<A::Symbol>,
    _alphabet: PhantomData<A>,
}

impl<A: Alphabet> Sequence<A> {
    /// Creates a sequence from already typed symbols.
    pub fn new(id: impl Into<String>, description: impl Into<String>, symbols: Vec<A::Symbol>) -> Self {
        Self {
            id: id.into(),
            description: description.into(),
            symbols,
            _alphabet: PhantomData,
        }
    }

    /// Reads raw text with the rules of alphabet `A`.
    ///
    /// # Examples
    ///
    /// ```
    /// use typedseq::alphabet::Dna;
    /// use typedseq::model::Sequence;
    ///
    /// let seq = Sequence::<Dna>::from_text("seq1", "", "ACG-T").unwrap();
    /// assert_eq!(seq.len(), 5);
    /// assert!(Sequence::<Dna>::from_text("seq2", "", "ACNT").is_err());
    /// ```
    pub fn from_text(id: impl Into<String>, description: impl Into<String>, raw: &str) -> Result<Self> {
        Ok(Self::new(id, description, A::parse(raw)?))
    }

    /// Types a record handed over by a reader.
    pub fn from_record(record: Record) -> Result<Self> {
        let symbols = A::parse(&record.raw)?;
        Ok(Self::new(record.id, record.description, symbols))
    }

    pub fn id(&self) -> &str {
        &self.id
    }

    /// Free-form description, empty when the source had none.
    pub fn description(&self) -> &str {
        &self.description
    }

    pub fn symbols(&self) -> &[A::Symbol] {
        &self.symbols
    }

    /// The plain symbol list, without metadata.
    pub fn to_list(&self) -> Vec<A::Symbol> {
        self.symbols.clone()
    }

    pub fn into_symbols(self) -> Vec<A::Symbol> {
        self.symbols
    }

    /// Returns a new sequence with the same identifier and description
    /// attached to a different symbol list.
    pub fn with_symbols(&self, symbols: Vec<A::Symbol>) -> Self {
        Self::new(self.id.clone(), self.description.clone(), symbols)
    }

    /// Returns the length of the sequence.
    pub fn len(&self) -> usize {
        self.symbols.len()
    }

    /// Returns true if the sequence is empty.
    pub fn is_empty(&self) -> bool {
        self.symbols.is_empty()
    }

    /// Renders the symbols as text.
    pub fn to_text(&self) -> String {
        A::render(&self.symbols)
    }
}

impl<A: Alphabet> fmt::Display for Sequence<A> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.to_text())
    }
}

/// Validates that all rows have the same length, returning that length.
pub(crate) fn common_width(lengths: impl IntoIterator<Item = usize>) -> Result<usize> {
    let mut lengths = lengths.into_iter().enumerate();
    let Some((_, expected)) = lengths.next() else {
        return Ok(0);
    };
    for (row, found) in lengths {
        if found != expected {
            return Err(SeqError::DimensionMismatch { row, expected, found });
        }
    }
    Ok(expected)
}

/// Represents an alignment of multiple sequences.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Alignment<A: Alphabet> {
    sequences: Vec<Sequence<A>>,
    width: usize,
}

impl<A: Alphabet> Alignment<A> {
    /// Creates a new alignment, failing if sequence lengths differ.
    pub fn new(sequences: Vec<Sequence<A>>) -> Result<Self> {
        let width = common_width(sequences.iter().map(Sequence::len))?;
        debug!(
            alphabet = A::NAME,
            rows = sequences.len(),
            width,
            "built alignment"
        );
        Ok(Self { sequences, width })
    }

    /// The plain symbol matrix, one row per sequence.
    pub fn rows(&self) -> Vec<Vec<A::Symbol>> {
        self.sequences.iter().map(Sequence::to_list).collect()
    }

    /// Re-wraps rows produced by a matrix operation with this alignment's
    /// identifiers and descriptions, row by row.
    ///
    /// # Examples
    ///
    /// ```
    /// use typedseq::alphabet::Dna;
    /// use typedseq::columns::remove_gapped_columns;
    /// use typedseq::gaps::GapSet;
    /// use typedseq::model::{Alignment, Sequence};
    ///
    /// let alignment = Alignment::new(vec![
    ///     Sequence::<Dna>::from_text("a", "", "AC-T").unwrap(),
    ///     Sequence::<Dna>::from_text("b", "", "ACGT").unwrap(),
    /// ])
    /// .unwrap();
    /// let removal = remove_gapped_columns(&alignment.rows(), 1, &GapSet::of::<Dna>()).unwrap();
    /// let trimmed = alignment.rebuild(removal.rows).unwrap();
    /// assert_eq!(trimmed.get(0).unwrap().id(), "a");
    /// assert_eq!(trimmed.get(0).unwrap().to_text(), "ACT");
    /// ```
    pub fn rebuild(&self, rows: Vec<Vec<A::Symbol>>) -> Result<Self> {
        if rows.len() != self.sequences.len() {
            return Err(SeqError::DimensionMismatch {
                row: rows.len().min(self.sequences.len()),
                expected: self.sequences.len(),
                found: rows.len(),
            });
        }
        let sequences = self
            .sequences
            .iter()
            .zip(rows)
            .map(|(seq, symbols)| seq.with_symbols(symbols))
            .collect();
        Self::new(sequences)
    }

    /// Returns the number of sequences.
    pub fn sequence_count(&self) -> usize {
        self.sequences.len()
    }

    /// Returns the number of columns.
    pub fn width(&self) -> usize {
        self.width
    }

    /// Gets a sequence by index.
    pub fn get(&self, index: usize) -> Option<&Sequence<A>> {
        self.sequences.get(index)
    }

    pub fn sequences(&self) -> &[Sequence<A>] {
        &self.sequences
    }

    pub fn iter(&self) -> impl Iterator<Item = &Sequence<A>> {
        self.sequences.iter()
    }

    /// Returns true if the alignment is empty.
    pub fn is_empty(&self) -> bool {
        self.sequences.is_empty()
    }
}
