//! Symbol value types.
//!
//! Each biological family (nucleotides, amino acids, codons) is a small
//! `Copy` enum with exactly one `Gap` variant. Symbols know how to convert
//! to and from text and nothing else: deciding whether a symbol counts as a
//! gap is left to [`crate::gaps`], so the same value types work unchanged
//! with any gap policy.

use std::fmt;

/// A nucleotide, including the IUPAC ambiguity codes.
///
/// Whether ambiguity codes are accepted when reading text is decided by the
/// alphabet ([`crate::alphabet::Dna`] vs [`crate::alphabet::IupacDna`]).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Nucleotide {
    A,
    C,
    G,
    T,
    /// A or G
    R,
    /// C or T
    Y,
    /// G or C
    S,
    /// A or T
    W,
    /// G or T
    K,
    /// A or C
    M,
    /// not A
    B,
    /// not C
    D,
    /// not G
    H,
    /// not T
    V,
    /// any base
    N,
    Gap,
}

impl Nucleotide {
    /// Parses one character (case-insensitive). `-` is the gap.
    pub fn from_char(c: char) -> Option<Self> {
        let nt = match c.to_ascii_uppercase() {
            'A' => Nucleotide::A,
            'C' => Nucleotide::C,
            'G' => Nucleotide::G,
            'T' => Nucleotide::T,
            'R' => Nucleotide::R,
            'Y' => Nucleotide::Y,
            'S' => Nucleotide::S,
            'W' => Nucleotide::W,
            'K' => Nucleotide::K,
            'M' => Nucleotide::M,
            'B' => Nucleotide::B,
            'D' => Nucleotide::D,
            'H' => Nucleotide::H,
            'V' => Nucleotide::V,
            'N' => Nucleotide::N,
            '-' => Nucleotide::Gap,
            _ => return None,
        };
        Some(nt)
    }

    pub fn to_char(self) -> char {
        match self {
            Nucleotide::A => 'A',
            Nucleotide::C => 'C',
            Nucleotide::G => 'G',
            Nucleotide::T => 'T',
            Nucleotide::R => 'R',
            Nucleotide::Y => 'Y',
            Nucleotide::S => 'S',
            Nucleotide::W => 'W',
            Nucleotide::K => 'K',
            Nucleotide::M => 'M',
            Nucleotide::B => 'B',
            Nucleotide::D => 'D',
            Nucleotide::H => 'H',
            Nucleotide::V => 'V',
            Nucleotide::N => 'N',
            Nucleotide::Gap => '-',
        }
    }
}

impl fmt::Display for Nucleotide {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.to_char())
    }
}

/// An amino acid residue, plus stop, unknown (`X`) and gap.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum AminoAcid {
    Ala,
    Arg,
    Asn,
    Asp,
    Cys,
    Gln,
    Glu,
    Gly,
    His,
    Ile,
    Leu,
    Lys,
    Met,
    Phe,
    Pro,
    Ser,
    Thr,
    Trp,
    Tyr,
    Val,
    Stop,
    Unknown,
    Gap,
}

impl AminoAcid {
    /// Parses a one-letter code (case-insensitive). `*` is stop, `-` the gap.
    pub fn from_char(c: char) -> Option<Self> {
        let aa = match c.to_ascii_uppercase() {
            'A' => AminoAcid::Ala,
            'R' => AminoAcid::Arg,
            'N' => AminoAcid::Asn,
            'D' => AminoAcid::Asp,
            'C' => AminoAcid::Cys,
            'Q' => AminoAcid::Gln,
            'E' => AminoAcid::Glu,
            'G' => AminoAcid::Gly,
            'H' => AminoAcid::His,
            'I' => AminoAcid::Ile,
            'L' => AminoAcid::Leu,
            'K' => AminoAcid::Lys,
            'M' => AminoAcid::Met,
            'F' => AminoAcid::Phe,
            'P' => AminoAcid::Pro,
            'S' => AminoAcid::Ser,
            'T' => AminoAcid::Thr,
            'W' => AminoAcid::Trp,
            'Y' => AminoAcid::Tyr,
            'V' => AminoAcid::Val,
            '*' => AminoAcid::Stop,
            'X' => AminoAcid::Unknown,
            '-' => AminoAcid::Gap,
            _ => return None,
        };
        Some(aa)
    }

    pub fn to_char(self) -> char {
        match self {
            AminoAcid::Ala => 'A',
            AminoAcid::Arg => 'R',
            AminoAcid::Asn => 'N',
            AminoAcid::Asp => 'D',
            AminoAcid::Cys => 'C',
            AminoAcid::Gln => 'Q',
            AminoAcid::Glu => 'E',
            AminoAcid::Gly => 'G',
            AminoAcid::His => 'H',
            AminoAcid::Ile => 'I',
            AminoAcid::Leu => 'L',
            AminoAcid::Lys => 'K',
            AminoAcid::Met => 'M',
            AminoAcid::Phe => 'F',
            AminoAcid::Pro => 'P',
            AminoAcid::Ser => 'S',
            AminoAcid::Thr => 'T',
            AminoAcid::Trp => 'W',
            AminoAcid::Tyr => 'Y',
            AminoAcid::Val => 'V',
            AminoAcid::Stop => '*',
            AminoAcid::Unknown => 'X',
            AminoAcid::Gap => '-',
        }
    }
}

impl fmt::Display for AminoAcid {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.to_char())
    }
}

/// A codon: an amino acid together with the nucleotide triplet coding it.
///
/// Both representations travel with the value, so any algorithm that moves
/// codons around (column filtering, run splitting) keeps the protein and the
/// nucleotide views consistent. Build sense codons through a
/// [`crate::genetic_code::GeneticCode`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Codon {
    Sense {
        amino_acid: AminoAcid,
        triplet: [Nucleotide; 3],
    },
    Gap,
}

impl Codon {
    /// Protein view. A codon gap maps to the amino-acid gap.
    pub fn amino_acid(&self) -> AminoAcid {
        match self {
            Codon::Sense { amino_acid, .. } => *amino_acid,
            Codon::Gap => AminoAcid::Gap,
        }
    }

    /// Nucleotide view. A codon gap maps to three nucleotide gaps.
    pub fn triplet(&self) -> [Nucleotide; 3] {
        match self {
            Codon::Sense { triplet, .. } => *triplet,
            Codon::Gap => [Nucleotide::Gap; 3],
        }
    }
}

impl fmt::Display for Codon {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for nt in self.triplet() {
            write!(f, "{}", nt)?;
        }
        Ok(())
    }
}

/// Projects codons onto their amino acids.
pub fn amino_acids(codons: &[Codon]) -> Vec<AminoAcid> {
    codons.iter().map(Codon::amino_acid).collect()
}

/// Projects codons onto their nucleotides, three per codon.
pub fn nucleotides(codons: &[Codon]) -> Vec<Nucleotide> {
    codons.iter().flat_map(Codon::triplet).collect()
}
