//! # typedseq - Typed Biological Sequences
//!
//! Nucleotide, protein and codon sequences as typed symbol lists, with
//! alignment algorithms written once for every symbol type.
//!
//! ## Architecture
//!
//! - `symbol`: value types (`Nucleotide`, `AminoAcid`, `Codon`), each with one gap
//! - `alphabet`: alphabet families tying a symbol type to its gaps and text rules
//! - `genetic_code`: NCBI translation tables, codon construction
//! - `gaps`: gap classification passed to algorithms as a capability
//! - `model`: `Sequence` and `Alignment` containers carrying identifiers
//! - `splitter`: maximal gap / non-gap runs
//! - `columns`: column visiting, sparse column removal, multiple-symbol columns
//! - `fasta`: streaming reader and writer
//!
//! Algorithms take and return plain symbol lists. Metadata is re-attached
//! explicitly by the caller:
//!
//! ```
//! use typedseq::alphabet::Dna;
//! use typedseq::columns::multiple_symbol_columns;
//! use typedseq::fasta::read_sequences;
//! use typedseq::gaps::GapSet;
//! use typedseq::model::Alignment;
//!
//! let input = ">a\nAC-T\n>b\nAG-T\n";
//! let alignment = Alignment::new(read_sequences::<Dna, _>(input.as_bytes()).unwrap()).unwrap();
//! let snps = multiple_symbol_columns(&alignment.rows(), &GapSet::of::<Dna>()).unwrap();
//! assert_eq!(snps, [1]);
//! ```

pub mod alphabet;
pub mod columns;
pub mod error;
pub mod fasta;
pub mod gaps;
pub mod genetic_code;
pub mod model;
pub mod splitter;
pub mod symbol;

pub use error::{Result, SeqError};
