//! Alphabet families.
//!
//! An alphabet is a zero-sized marker type implementing [`Alphabet`]. It ties
//! a symbol type to its gap value(s) and to the rules for reading and
//! writing text. Two alphabets may share a symbol type and differ only in
//! what they accept: [`Dna`] rejects ambiguity codes that [`IupacDna`]
//! allows.

use std::fmt;
use std::hash::Hash;

use crate::error::{Result, SeqError};
use crate::genetic_code::GeneticCode;
use crate::symbol::{AminoAcid, Codon, Nucleotide};

/// A closed family of symbols with a designated gap.
pub trait Alphabet: Clone + fmt::Debug + PartialEq + Eq + Send + Sync + 'static {
    type Symbol: Copy + Eq + Hash + fmt::Debug + Send + Sync + 'static;

    /// Human-readable name (e.g. "DNA"), used in error messages.
    const NAME: &'static str;

    /// The gap of this family.
    const GAP: Self::Symbol;

    /// Every symbol that counts as a gap. Always contains [`Alphabet::GAP`].
    const GAPS: &'static [Self::Symbol];

    /// Reads raw text into symbols.
    fn parse(raw: &str) -> Result<Vec<Self::Symbol>>;

    /// Writes symbols back to text.
    fn render(symbols: &[Self::Symbol]) -> String;
}

/// Parses text one character at a time, reporting the first rejected one.
fn parse_chars<S>(raw: &str, alphabet: &'static str, from_char: impl Fn(char) -> Option<S>) -> Result<Vec<S>> {
    raw.chars()
        .enumerate()
        .map(|(i, c)| from_char(c).ok_or_else(|| SeqError::invalid(alphabet, c.to_string(), i)))
        .collect()
}

fn strict_nucleotide(c: char) -> Option<Nucleotide> {
    Nucleotide::from_char(c).filter(|nt| {
        matches!(
            nt,
            Nucleotide::A | Nucleotide::C | Nucleotide::G | Nucleotide::T | Nucleotide::Gap
        )
    })
}

/// Unambiguous DNA: `ACGT` and `-`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Dna;

impl Alphabet for Dna {
    type Symbol = Nucleotide;
    const NAME: &'static str = "DNA";
    const GAP: Nucleotide = Nucleotide::Gap;
    const GAPS: &'static [Nucleotide] = &[Nucleotide::Gap];

    fn parse(raw: &str) -> Result<Vec<Nucleotide>> {
        parse_chars(raw, Self::NAME, strict_nucleotide)
    }

    fn render(symbols: &[Nucleotide]) -> String {
        symbols.iter().map(|nt| nt.to_char()).collect()
    }
}

/// IUPAC DNA: `ACGTRYSWKMBDHVN`, with `-` or `.` read as gap.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct IupacDna;

impl Alphabet for IupacDna {
    type Symbol = Nucleotide;
    const NAME: &'static str = "IUPAC DNA";
    const GAP: Nucleotide = Nucleotide::Gap;
    const GAPS: &'static [Nucleotide] = &[Nucleotide::Gap];

    fn parse(raw: &str) -> Result<Vec<Nucleotide>> {
        parse_chars(raw, Self::NAME, |c| match c {
            '.' => Some(Nucleotide::Gap),
            _ => Nucleotide::from_char(c),
        })
    }

    fn render(symbols: &[Nucleotide]) -> String {
        symbols.iter().map(|nt| nt.to_char()).collect()
    }
}

/// Protein: the 20 standard residues, `*`, `X` and `-`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Protein;

impl Alphabet for Protein {
    type Symbol = AminoAcid;
    const NAME: &'static str = "protein";
    const GAP: AminoAcid = AminoAcid::Gap;
    const GAPS: &'static [AminoAcid] = &[AminoAcid::Gap];

    fn parse(raw: &str) -> Result<Vec<AminoAcid>> {
        parse_chars(raw, Self::NAME, AminoAcid::from_char)
    }

    fn render(symbols: &[AminoAcid]) -> String {
        symbols.iter().map(|aa| aa.to_char()).collect()
    }
}

/// Codons read from in-frame nucleotide text under the standard code.
///
/// `---` is a codon gap. Text must be unambiguous DNA whose length is a
/// multiple of three, without partial gaps inside a codon. For other
/// genetic codes, parse with [`Dna`] and group with
/// [`GeneticCode::codons`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct CodonDna;

impl Alphabet for CodonDna {
    type Symbol = Codon;
    const NAME: &'static str = "codon";
    const GAP: Codon = Codon::Gap;
    const GAPS: &'static [Codon] = &[Codon::Gap];

    fn parse(raw: &str) -> Result<Vec<Codon>> {
        let nucleotides = parse_chars(raw, Self::NAME, strict_nucleotide)?;
        GeneticCode::standard().codons(&nucleotides)
    }

    fn render(symbols: &[Codon]) -> String {
        symbols.iter().map(|codon| codon.to_string()).collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_dna_parse() {
        let nts = Dna::parse("acGT-").unwrap();
        assert_eq!(
            nts,
            vec![
                Nucleotide::A,
                Nucleotide::C,
                Nucleotide::G,
                Nucleotide::T,
                Nucleotide::Gap
            ]
        );
        assert_eq!(Dna::render(&nts), "ACGT-");
    }

    #[test]
    fn test_dna_rejects_ambiguity() {
        let err = Dna::parse("ACXGT").unwrap_err();
        assert_eq!(err, SeqError::invalid("DNA", "X", 2));
        assert!(Dna::parse("ACNGT").is_err());
    }

    #[test]
    fn test_iupac_accepts_ambiguity() {
        let nts = IupacDna::parse("ACNRY.-").unwrap();
        assert_eq!(nts[2], Nucleotide::N);
        assert_eq!(nts[5], Nucleotide::Gap);
        assert_eq!(IupacDna::render(&nts), "ACNRY--");
        assert!(IupacDna::parse("ACU").is_err());
    }

    #[test]
    fn test_protein_parse() {
        let aas = Protein::parse("MKV*X-").unwrap();
        assert_eq!(aas[0], AminoAcid::Met);
        assert_eq!(aas[3], AminoAcid::Stop);
        assert_eq!(aas[5], AminoAcid::Gap);
        assert_eq!(Protein::render(&aas), "MKV*X-");
        assert_eq!(Protein::parse("MKB").unwrap_err(), SeqError::invalid("protein", "B", 2));
    }

    #[test]
    fn test_codon_parse() {
        let codons = CodonDna::parse("ATG---tgg").unwrap();
        assert_eq!(codons.len(), 3);
        assert_eq!(codons[0].amino_acid(), AminoAcid::Met);
        assert_eq!(codons[1], Codon::Gap);
        assert_eq!(codons[2].amino_acid(), AminoAcid::Trp);
        assert_eq!(CodonDna::render(&codons), "ATG---TGG");
    }

    #[test]
    fn test_codon_parse_errors() {
        assert_eq!(CodonDna::parse("ATGN").unwrap_err(), SeqError::invalid("codon", "N", 3));
        assert_eq!(CodonDna::parse("ATGA-G").unwrap_err(), SeqError::invalid("codon", "A-G", 3));
        assert_eq!(CodonDna::parse("ATGTT").unwrap_err(), SeqError::invalid("codon", "TT", 3));
    }

    #[test]
    fn test_gaps_contain_gap() {
        assert!(Dna::GAPS.contains(&Dna::GAP));
        assert!(IupacDna::GAPS.contains(&IupacDna::GAP));
        assert!(Protein::GAPS.contains(&Protein::GAP));
        assert!(CodonDna::GAPS.contains(&CodonDna::GAP));
    }
}
