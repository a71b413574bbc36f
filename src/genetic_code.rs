//! Genetic code definitions and codon construction.
//!
//! This module provides:
//! - NCBI genetic code tables (1-33)
//! - Triplet to amino acid translation on typed nucleotides
//! - Construction of [`Codon`] symbols from in-frame nucleotide lists

use std::sync::OnceLock;

use crate::error::{Result, SeqError};
use crate::symbol::{AminoAcid, Codon, Nucleotide};

/// NCBI tables as (id, name, ncbieaa). The 64 amino acids follow NCBI order:
/// TTT, TTC, TTA, TTG, TCT, ... (bases in T, C, A, G order).
const NCBI_TABLES: &[(u8, &str, &str)] = &[
    (1, "Standard",
        "FFLLSSSSYY**CC*WLLLLPPPPHHQQRRRRIIIMTTTTNNKKSSRRVVVVAAAADDEEGGGG"),
    (2, "Vertebrate Mitochondrial",
        "FFLLSSSSYY**CCWWLLLLPPPPHHQQRRRRIIMMTTTTNNKKSS**VVVVAAAADDEEGGGG"),
    (3, "Yeast Mitochondrial",
        "FFLLSSSSYY**CCWWTTTTPPPPHHQQRRRRIIMMTTTTNNKKSSRRVVVVAAAADDEEGGGG"),
    (4, "Mold/Protozoan/Coelenterate Mito...",
        "FFLLSSSSYY**CCWWLLLLPPPPHHQQRRRRIIIMTTTTNNKKSSRRVVVVAAAADDEEGGGG"),
    (5, "Invertebrate Mitochondrial",
        "FFLLSSSSYY**CCWWLLLLPPPPHHQQRRRRIIMMTTTTNNKKSSSSVVVVAAAADDEEGGGG"),
    (6, "Ciliate/Dasycladacean/Hexamita Nuclear",
        "FFLLSSSSYYQQCC*WLLLLPPPPHHQQRRRRIIIMTTTTNNKKSSRRVVVVAAAADDEEGGGG"),
    (9, "Echinoderm/Flatworm Mitochondrial",
        "FFLLSSSSYY**CCWWLLLLPPPPHHQQRRRRIIIMTTTTNNNKSSSSVVVVAAAADDEEGGGG"),
    (10, "Euplotid Nuclear",
        "FFLLSSSSYY**CCCWLLLLPPPPHHQQRRRRIIIMTTTTNNKKSSRRVVVVAAAADDEEGGGG"),
    (11, "Bacterial/Archaeal/Plant Plastid",
        "FFLLSSSSYY**CC*WLLLLPPPPHHQQRRRRIIIMTTTTNNKKSSRRVVVVAAAADDEEGGGG"),
    (12, "Alternative Yeast Nuclear",
        "FFLLSSSSYY**CC*WLLLSPPPPHHQQRRRRIIIMTTTTNNKKSSRRVVVVAAAADDEEGGGG"),
    (13, "Ascidian Mitochondrial",
        "FFLLSSSSYY**CCWWLLLLPPPPHHQQRRRRIIMMTTTTNNKKSSGGVVVVAAAADDEEGGGG"),
    (14, "Alternative Flatworm Mitochondrial",
        "FFLLSSSSYYY*CCWWLLLLPPPPHHQQRRRRIIIMTTTTNNNKSSSSVVVVAAAADDEEGGGG"),
    (15, "Blepharisma Macronuclear",
        "FFLLSSSSYY*QCC*WLLLLPPPPHHQQRRRRIIIMTTTTNNKKSSRRVVVVAAAADDEEGGGG"),
    (16, "Chlorophycean Mitochondrial",
        "FFLLSSSSYY*LCC*WLLLLPPPPHHQQRRRRIIIMTTTTNNKKSSRRVVVVAAAADDEEGGGG"),
    (21, "Trematode Mitochondrial",
        "FFLLSSSSYY**CCWWLLLLPPPPHHQQRRRRIIMMTTTTNNNKSSSSVVVVAAAADDEEGGGG"),
    (22, "Scenedesmus obliquus Mitochondrial",
        "FFLLSS*SYY*LCC*WLLLLPPPPHHQQRRRRIIIMTTTTNNKKSSRRVVVVAAAADDEEGGGG"),
    (23, "Thraustochytrium Mitochondrial",
        "FF*LSSSSYY**CC*WLLLLPPPPHHQQRRRRIIIMTTTTNNKKSSRRVVVVAAAADDEEGGGG"),
    (24, "Rhabdopleuridae Mitochondrial",
        "FFLLSSSSYY**CCWWLLLLPPPPHHQQRRRRIIIMTTTTNNKKSSSKVVVVAAAADDEEGGGG"),
    (25, "Candidate Division SR1/Gracilibacteria",
        "FFLLSSSSYY**CCGWLLLLPPPPHHQQRRRRIIIMTTTTNNKKSSRRVVVVAAAADDEEGGGG"),
    (26, "Pachysolen tannophilus Nuclear",
        "FFLLSSSSYY**CC*WLLLAPPPPHHQQRRRRIIIMTTTTNNKKSSRRVVVVAAAADDEEGGGG"),
    (27, "Karyorelict Nuclear",
        "FFLLSSSSYYQQCCWWLLLLPPPPHHQQRRRRIIIMTTTTNNKKSSRRVVVVAAAADDEEGGGG"),
    (28, "Condylostoma Nuclear",
        "FFLLSSSSYYQQCCWWLLLLPPPPHHQQRRRRIIIMTTTTNNKKSSRRVVVVAAAADDEEGGGG"),
    (29, "Mesodinium Nuclear",
        "FFLLSSSSYYYYCC*WLLLLPPPPHHQQRRRRIIIMTTTTNNKKSSRRVVVVAAAADDEEGGGG"),
    (30, "Peritrich Nuclear",
        "FFLLSSSSYYEECC*WLLLLPPPPHHQQRRRRIIIMTTTTNNKKSSRRVVVVAAAADDEEGGGG"),
    (31, "Blastocrithidia Nuclear",
        "FFLLSSSSYYEECCWWLLLLPPPPHHQQRRRRIIIMTTTTNNKKSSRRVVVVAAAADDEEGGGG"),
    (32, "Balanophoraceae Plastid",
        "FFLLSSSSYY*WCC*WLLLLPPPPHHQQRRRRIIIMTTTTNNKKSSRRVVVVAAAADDEEGGGG"),
    (33, "Cephalodiscidae Mitochondrial",
        "FFLLSSSSYYY*CCWWLLLLPPPPHHQQRRRRIIIMTTTTNNKKSSSKVVVVAAAADDEEGGGG"),
];

/// Position of an unambiguous base in NCBI order, `None` otherwise.
fn base_index(nt: Nucleotide) -> Option<usize> {
    match nt {
        Nucleotide::T => Some(0),
        Nucleotide::C => Some(1),
        Nucleotide::A => Some(2),
        Nucleotide::G => Some(3),
        _ => None,
    }
}

/// A genetic code table for translating codons to amino acids.
#[derive(Debug, Clone)]
pub struct GeneticCode {
    /// NCBI genetic code ID
    pub id: u8,
    /// Name of the genetic code
    pub name: String,
    table: [AminoAcid; 64],
}

impl GeneticCode {
    /// Creates a genetic code from an NCBI `ncbieaa` string.
    fn new(id: u8, name: &str, ncbieaa: &str) -> Self {
        let mut table = [AminoAcid::Unknown; 64];
        for (slot, c) in table.iter_mut().zip(ncbieaa.chars()) {
            *slot = AminoAcid::from_char(c).unwrap_or(AminoAcid::Unknown);
        }
        Self {
            id,
            name: name.to_string(),
            table,
        }
    }

    /// The standard code (NCBI table 1).
    pub fn standard() -> &'static GeneticCode {
        static STANDARD: OnceLock<GeneticCode> = OnceLock::new();
        STANDARD.get_or_init(|| {
            let (id, name, ncbieaa) = NCBI_TABLES[0];
            GeneticCode::new(id, name, ncbieaa)
        })
    }

    /// Translates a triplet. Returns `None` unless all three bases are
    /// unambiguous (A, C, G or T).
    pub fn translate(&self, triplet: [Nucleotide; 3]) -> Option<AminoAcid> {
        let b1 = base_index(triplet[0])?;
        let b2 = base_index(triplet[1])?;
        let b3 = base_index(triplet[2])?;
        Some(self.table[b1 * 16 + b2 * 4 + b3])
    }

    /// Builds a codon symbol.
    ///
    /// # Rules:
    /// - Three gaps give [`Codon::Gap`]
    /// - Three unambiguous bases give a sense codon
    /// - Anything else (partial gap, ambiguity code) gives `None`
    pub fn codon(&self, triplet: [Nucleotide; 3]) -> Option<Codon> {
        if triplet == [Nucleotide::Gap; 3] {
            return Some(Codon::Gap);
        }
        self.translate(triplet).map(|amino_acid| Codon::Sense {
            amino_acid,
            triplet,
        })
    }

    /// Groups an in-frame nucleotide list into codons.
    ///
    /// Fails with `InvalidSymbol` on the first triplet that is not a codon,
    /// or on a trailing fragment shorter than three bases. Positions are
    /// nucleotide offsets.
    pub fn codons(&self, nucleotides: &[Nucleotide]) -> Result<Vec<Codon>> {
        let mut codons = Vec::with_capacity(nucleotides.len() / 3);
        for (i, chunk) in nucleotides.chunks(3).enumerate() {
            let text: String = chunk.iter().map(|n| n.to_char()).collect();
            let codon = match chunk {
                &[a, b, c] => self.codon([a, b, c]),
                _ => None,
            };
            match codon {
                Some(codon) => codons.push(codon),
                None => return Err(SeqError::invalid("codon", text, i * 3)),
            }
        }
        Ok(codons)
    }
}

/// All available genetic codes from NCBI.
pub struct GeneticCodes {
    codes: Vec<GeneticCode>,
}

impl GeneticCodes {
    /// Creates the complete set of NCBI genetic codes.
    pub fn new() -> Self {
        let codes = NCBI_TABLES
            .iter()
            .map(|&(id, name, ncbieaa)| GeneticCode::new(id, name, ncbieaa))
            .collect();
        Self { codes }
    }

    /// Returns all genetic codes.
    pub fn all(&self) -> &[GeneticCode] {
        &self.codes
    }

    /// Gets a genetic code by ID.
    pub fn get(&self, id: u8) -> Option<&GeneticCode> {
        self.codes.iter().find(|c| c.id == id)
    }
}

impl Default for GeneticCodes {
    fn default() -> Self {
        Self::new()
    }
}
