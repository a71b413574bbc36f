//! Column operations on alignment matrices.
//!
//! A matrix is any slice of rows (`&[Vec<S>]`, `&[&[S]]`, ...) with equal
//! lengths. Every operation checks dimensions first and fails with
//! [`SeqError::DimensionMismatch`] before looking at a single column.
//! Results are plain rows and index lists; symbols are moved as whole
//! values, so codons keep both their amino acid and their triplet.

use tracing::debug;

use crate::error::Result;
use crate::gaps::GapClassifier;
use crate::model::common_width;

/// Rows left after a column filter, with the original indices of the
/// columns taken out.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ColumnRemoval<S> {
    pub rows: Vec<Vec<S>>,
    /// Ascending, zero-based column indices in the input matrix.
    pub removed: Vec<usize>,
}

/// Returns the common row length, or the first row breaking it.
pub fn check_dimensions<S, R: AsRef<[S]>>(rows: &[R]) -> Result<usize> {
    common_width(rows.iter().map(|row| row.as_ref().len()))
}

/// Symbols at `index` in row order. `None` when the matrix has no rows or a
/// row is too short. Dimensions are not checked.
pub fn column<S: Clone, R: AsRef<[S]>>(rows: &[R], index: usize) -> Option<Vec<S>> {
    if rows.is_empty() {
        return None;
    }
    rows.iter().map(|row| row.as_ref().get(index).cloned()).collect()
}

/// Calls `predicate` on every column, left to right, and returns the
/// ascending indices of the columns it accepted.
///
/// # Examples
///
/// ```
/// use typedseq::columns::visit_columns;
///
/// let rows = ["ab-".as_bytes(), "ac-".as_bytes()];
/// let conserved = visit_columns(&rows, |col: &[u8]| col.iter().all(|b| *b == col[0])).unwrap();
/// assert_eq!(conserved, [0, 2]);
/// ```
pub fn visit_columns<S, R, F>(rows: &[R], mut predicate: F) -> Result<Vec<usize>>
where
    S: Clone,
    R: AsRef<[S]>,
    F: FnMut(&[S]) -> bool,
{
    let width = check_dimensions(rows)?;
    let mut col = Vec::with_capacity(rows.len());
    let accepted = (0..width)
        .filter(|&i| {
            col.clear();
            col.extend(rows.iter().map(|row| row.as_ref()[i].clone()));
            predicate(&col)
        })
        .collect();
    Ok(accepted)
}

/// Number of gaps in each column.
pub fn gap_counts<S, R, G>(rows: &[R], gaps: &G) -> Result<Vec<usize>>
where
    R: AsRef<[S]>,
    G: GapClassifier<S> + ?Sized,
{
    let width = check_dimensions(rows)?;
    let mut counts = vec![0; width];
    for row in rows {
        for (count, symbol) in counts.iter_mut().zip(row.as_ref()) {
            if gaps.is_gap(symbol) {
                *count += 1;
            }
        }
    }
    Ok(counts)
}

/// Drops the columns at `removed` (ascending) from every row.
fn drop_columns<S: Clone, R: AsRef<[S]>>(rows: &[R], width: usize, removed: Vec<usize>) -> ColumnRemoval<S> {
    let mut keep = vec![true; width];
    for &i in &removed {
        keep[i] = false;
    }
    let rows = rows
        .iter()
        .map(|row| {
            row.as_ref()
                .iter()
                .zip(&keep)
                .filter(|&(_, &kept)| kept)
                .map(|(symbol, _)| symbol.clone())
                .collect()
        })
        .collect();
    ColumnRemoval { rows, removed }
}

/// Removes every column for which `predicate` returns true.
///
/// Decisions are taken on the input matrix only, so the outcome does not
/// depend on evaluation order.
pub fn remove_columns<S, R, F>(rows: &[R], predicate: F) -> Result<ColumnRemoval<S>>
where
    S: Clone,
    R: AsRef<[S]>,
    F: FnMut(&[S]) -> bool,
{
    let width = check_dimensions(rows)?;
    let removed = visit_columns(rows, predicate)?;
    Ok(drop_columns(rows, width, removed))
}

/// Removes columns holding fewer than `min_residues` non-gap symbols.
///
/// With `min_residues = 1` only all-gap columns go, which is what a
/// sub-alignment typically needs after some rows were dropped.
pub fn remove_sparse_columns<S, R, G>(rows: &[R], min_residues: usize, gaps: &G) -> Result<ColumnRemoval<S>>
where
    S: Clone,
    R: AsRef<[S]>,
    G: GapClassifier<S> + ?Sized,
{
    let counts = gap_counts(rows, gaps)?;
    let removed: Vec<usize> = counts
        .iter()
        .enumerate()
        .filter(|&(_, &gap_count)| rows.len() - gap_count < min_residues)
        .map(|(i, _)| i)
        .collect();
    debug!(
        rows = rows.len(),
        width = counts.len(),
        min_residues,
        removed = removed.len(),
        "removed sparse columns"
    );
    Ok(drop_columns(rows, counts.len(), removed))
}

/// Removes columns holding at least `min_gaps` gaps.
///
/// With `min_gaps = 1` any column containing a gap goes.
pub fn remove_gapped_columns<S, R, G>(rows: &[R], min_gaps: usize, gaps: &G) -> Result<ColumnRemoval<S>>
where
    S: Clone,
    R: AsRef<[S]>,
    G: GapClassifier<S> + ?Sized,
{
    let counts = gap_counts(rows, gaps)?;
    let removed: Vec<usize> = counts
        .iter()
        .enumerate()
        .filter(|&(_, &gap_count)| gap_count >= min_gaps)
        .map(|(i, _)| i)
        .collect();
    debug!(
        rows = rows.len(),
        width = counts.len(),
        min_gaps,
        removed = removed.len(),
        "removed gapped columns"
    );
    Ok(drop_columns(rows, counts.len(), removed))
}

/// True when the column holds more than one distinct non-gap symbol.
pub fn has_multiple_symbols<S, G>(column: &[S], gaps: &G) -> bool
where
    S: PartialEq,
    G: GapClassifier<S> + ?Sized,
{
    let mut residues = column.iter().filter(|s| !gaps.is_gap(s));
    match residues.next() {
        Some(first) => residues.any(|s| s != first),
        None => false,
    }
}

/// Indices of the columns with more than one distinct non-gap symbol (SNP
/// columns), ascending.
pub fn multiple_symbol_columns<S, R, G>(rows: &[R], gaps: &G) -> Result<Vec<usize>>
where
    S: Clone + PartialEq,
    R: AsRef<[S]>,
    G: GapClassifier<S> + ?Sized,
{
    let found = visit_columns(rows, |col| has_multiple_symbols(col, gaps))?;
    debug!(rows = rows.len(), found = found.len(), "scanned for multiple-symbol columns");
    Ok(found)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::alphabet::{Alphabet, CodonDna, Dna, Protein};
    use crate::error::SeqError;
    use crate::gaps::GapSet;
    use crate::model::{Alignment, Sequence};
    use crate::symbol::{amino_acids, nucleotides, AminoAcid, Nucleotide};

    fn matrix<A: Alphabet>(rows: &[&str]) -> Vec<Vec<A::Symbol>> {
        rows.iter().map(|row| A::parse(row).unwrap()).collect()
    }

    #[test]
    fn test_remove_sparse_columns_example() {
        let rows = matrix::<Dna>(&["agc--taacg---", "agc---aaca---", "agc---aaca---"]);
        let removal = remove_sparse_columns(&rows, 1, &GapSet::of::<Dna>()).unwrap();
        assert_eq!(removal.removed, vec![3, 4, 10, 11, 12]);
        assert_eq!(Dna::render(&removal.rows[0]), "AGCTAACG");
        assert_eq!(Dna::render(&removal.rows[1]), "AGC-AACA");
    }

    #[test]
    fn test_remove_gapped_columns_any_gap() {
        let rows = matrix::<Dna>(&["agc--taacg---", "agc---aaca---", "agc---aaca---"]);
        let removal = remove_gapped_columns(&rows, 1, &GapSet::of::<Dna>()).unwrap();
        assert_eq!(removal.removed, vec![3, 4, 5, 10, 11, 12]);
        assert_eq!(Dna::render(&removal.rows[0]), "AGCAACG");
        assert_eq!(Dna::render(&removal.rows[2]), "AGCAACA");
    }

    #[test]
    fn test_remove_gapped_columns_threshold() {
        let rows = matrix::<Dna>(&["A-C-", "AT-G", "AT--"]);
        let removal = remove_gapped_columns(&rows, 2, &GapSet::of::<Dna>()).unwrap();
        assert_eq!(removal.removed, vec![2, 3]);
        assert_eq!(Dna::render(&removal.rows[0]), "A-");
        assert_eq!(Dna::render(&removal.rows[2]), "AT");
    }

    #[test]
    fn test_remove_columns_does_not_touch_input() {
        let rows = matrix::<Dna>(&["A-", "C-"]);
        let removal = remove_columns(&rows, |col| col[0] == Nucleotide::A).unwrap();
        assert_eq!(removal.removed, vec![0]);
        assert_eq!(Dna::render(&rows[0]), "A-");
        assert_eq!(Dna::render(&removal.rows[1]), "-");
    }

    #[test]
    fn test_multiple_symbol_columns_example() {
        let rows = matrix::<Dna>(&["ag---ctaacaa", "ag---caaacag", "ag--ccaaacgg"]);
        let gaps = GapSet::of::<Dna>();
        let snps = multiple_symbol_columns(&rows, &gaps).unwrap();
        assert_eq!(snps, vec![6, 10, 11]);
        // Repeated calls give the same answer
        assert_eq!(multiple_symbol_columns(&rows, &gaps).unwrap(), snps);
    }

    #[test]
    fn test_multiple_symbols_through_visit_columns() {
        let rows = matrix::<Protein>(&["MK-V", "MR-V", "M--I"]);
        let gaps = GapSet::of::<Protein>();
        let snps = visit_columns(&rows, |col| has_multiple_symbols(col, &gaps)).unwrap();
        assert_eq!(snps, vec![1, 3]);
    }

    #[test]
    fn test_has_multiple_symbols() {
        let gaps = GapSet::of::<Dna>();
        assert!(!has_multiple_symbols(&Dna::parse("---").unwrap(), &gaps));
        assert!(!has_multiple_symbols(&Dna::parse("A-A").unwrap(), &gaps));
        assert!(has_multiple_symbols(&Dna::parse("A-C").unwrap(), &gaps));
        assert!(!has_multiple_symbols(&[] as &[Nucleotide], &gaps));
    }

    #[test]
    fn test_dimension_mismatch_before_visiting() {
        let rows = matrix::<Dna>(&["ACGT", "AC", "ACGT"]);
        let mut visited = 0;
        let result = visit_columns(&rows, |_| {
            visited += 1;
            true
        });
        assert_eq!(
            result,
            Err(SeqError::DimensionMismatch {
                row: 1,
                expected: 4,
                found: 2
            })
        );
        assert_eq!(visited, 0);

        let gaps = GapSet::of::<Dna>();
        assert!(remove_sparse_columns(&rows, 1, &gaps).is_err());
        assert!(remove_gapped_columns(&rows, 1, &gaps).is_err());
        assert!(multiple_symbol_columns(&rows, &gaps).is_err());
        assert!(gap_counts(&rows, &gaps).is_err());
    }

    #[test]
    fn test_empty_matrix() {
        let rows: Vec<Vec<Nucleotide>> = Vec::new();
        let gaps = GapSet::of::<Dna>();
        assert_eq!(check_dimensions(&rows).unwrap(), 0);
        assert!(multiple_symbol_columns(&rows, &gaps).unwrap().is_empty());
        let removal = remove_gapped_columns(&rows, 1, &gaps).unwrap();
        assert!(removal.rows.is_empty());
        assert!(removal.removed.is_empty());
        assert_eq!(column(&rows, 0), None);
    }

    #[test]
    fn test_column_access() {
        let rows = matrix::<Dna>(&["AC", "GT"]);
        assert_eq!(column(&rows, 1), Some(vec![Nucleotide::C, Nucleotide::T]));
        assert_eq!(column(&rows, 2), None);
    }

    #[test]
    fn test_gap_counts() {
        let rows = matrix::<Dna>(&["A--", "A-C"]);
        assert_eq!(gap_counts(&rows, &GapSet::of::<Dna>()).unwrap(), vec![0, 2, 1]);
    }

    #[test]
    fn test_codon_attributes_survive_filtering() {
        let rows = matrix::<CodonDna>(&["ATG---TGG", "ATG---TGC"]);
        let gaps = GapSet::of::<CodonDna>();
        let removal = remove_sparse_columns(&rows, 1, &gaps).unwrap();
        assert_eq!(removal.removed, vec![1]);

        let second = &removal.rows[1];
        assert_eq!(amino_acids(second), vec![AminoAcid::Met, AminoAcid::Cys]);
        assert_eq!(Dna::render(&nucleotides(second)), "ATGTGC");

        assert_eq!(multiple_symbol_columns(&removal.rows, &gaps).unwrap(), vec![1]);
    }

    #[test]
    fn test_rewrap_with_identifiers() {
        let alignment = Alignment::new(vec![
            Sequence::<Dna>::from_text("s1", "first", "AC--").unwrap(),
            Sequence::<Dna>::from_text("s2", "second", "AG--").unwrap(),
        ])
        .unwrap();
        let removal = remove_sparse_columns(&alignment.rows(), 1, &GapSet::of::<Dna>()).unwrap();
        let trimmed = alignment.rebuild(removal.rows).unwrap();
        assert_eq!(trimmed.width(), 2);
        assert_eq!(trimmed.get(1).unwrap().id(), "s2");
        assert_eq!(trimmed.get(1).unwrap().description(), "second");
        assert_eq!(trimmed.get(1).unwrap().to_text(), "AG");
    }
}

#[cfg(test)]
mod proptests {
    use super::*;
    use crate::alphabet::Dna;
    use crate::gaps::GapSet;
    use crate::symbol::Nucleotide;
    use proptest::prelude::*;

    fn gapped_matrix() -> impl Strategy<Value = Vec<Vec<Nucleotide>>> {
        (1usize..6, 0usize..20).prop_flat_map(|(n_rows, width)| {
            proptest::collection::vec(
                proptest::collection::vec(
                    prop_oneof![
                        Just(Nucleotide::A),
                        Just(Nucleotide::C),
                        Just(Nucleotide::Gap),
                    ],
                    width,
                ),
                n_rows,
            )
        })
    }

    proptest! {
        #[test]
        fn gapped_removal_is_consistent(rows in gapped_matrix(), t in 0usize..5) {
            let gaps = GapSet::of::<Dna>();
            let width = rows[0].len();
            let counts = gap_counts(&rows, &gaps).unwrap();
            let removal = remove_gapped_columns(&rows, t, &gaps).unwrap();
            for row in &removal.rows {
                prop_assert_eq!(row.len(), width - removal.removed.len());
            }
            prop_assert!(removal.removed.windows(2).all(|w| w[0] < w[1]));
            for (i, count) in counts.iter().enumerate() {
                prop_assert_eq!(removal.removed.contains(&i), *count >= t);
            }
        }

        #[test]
        fn sparse_removal_is_consistent(rows in gapped_matrix(), t in 0usize..5) {
            let gaps = GapSet::of::<Dna>();
            let width = rows[0].len();
            let counts = gap_counts(&rows, &gaps).unwrap();
            let removal = remove_sparse_columns(&rows, t, &gaps).unwrap();
            for row in &removal.rows {
                prop_assert_eq!(row.len(), width - removal.removed.len());
            }
            for (i, count) in counts.iter().enumerate() {
                prop_assert_eq!(removal.removed.contains(&i), rows.len() - count < t);
            }
        }

        #[test]
        fn kept_columns_are_unchanged(rows in gapped_matrix(), t in 0usize..5) {
            let removal = remove_gapped_columns(&rows, t, &GapSet::of::<Dna>()).unwrap();
            let kept: Vec<usize> = (0..rows[0].len()).filter(|i| !removal.removed.contains(i)).collect();
            for (new_index, &old_index) in kept.iter().enumerate() {
                prop_assert_eq!(column(&removal.rows, new_index), column(&rows, old_index));
            }
        }
    }
}
