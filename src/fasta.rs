//! FASTA reading and writing.
//!
//! The reader is an iterator over any `BufRead`, yielding one [`Record`] at a
//! time, so large files are never held in memory as a whole. The writer
//! borrows an output stream it did not open and never closes it.
//!
//! ## FASTA Format
//!
//! ```text
//! >sequence_identifier optional description
//! ACGTACGTACGT...
//! >another_sequence
//! TGCATGCATGCA...
//! ```

use std::io::{BufRead, Write};

use thiserror::Error;
use tracing::{debug, trace};

use crate::alphabet::Alphabet;
use crate::error::SeqError;
use crate::model::Sequence;

/// Errors that can occur during FASTA reading and writing.
#[derive(Error, Debug)]
pub enum FastaError {
    #[error("I/O error: {0}")]
    IoError(#[from] std::io::Error),

    #[error("Invalid FASTA format: {0}")]
    InvalidFormat(String),

    #[error("Sequence without header at line {0}")]
    SequenceWithoutHeader(usize),

    #[error("Invalid sequence: {0}")]
    Sequence(#[from] SeqError),
}

/// Result type for FASTA operations.
pub type FastaResult<T> = Result<T, FastaError>;

/// One untyped FASTA entry.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Record {
    pub id: String,
    /// Header text after the identifier, trimmed; empty if absent.
    pub description: String,
    /// Sequence lines concatenated, whitespace removed.
    pub raw: String,
}

/// Streaming FASTA reader.
///
/// # Examples
///
/// ```
/// use typedseq::fasta::FastaReader;
///
/// let input = ">seq1 first\nACGT\nAC\n>seq2\nTT\n";
/// let records: Vec<_> = FastaReader::new(input.as_bytes())
///     .collect::<Result<_, _>>()
///     .unwrap();
/// assert_eq!(records.len(), 2);
/// assert_eq!(records[0].raw, "ACGTAC");
/// assert_eq!(records[0].description, "first");
/// ```
pub struct FastaReader<R> {
    reader: R,
    line: String,
    line_number: usize,
    /// Header of the record being assembled, if any
    pending: Option<(String, String)>,
    done: bool,
}

impl<R: BufRead> FastaReader<R> {
    pub fn new(reader: R) -> Self {
        Self {
            reader,
            line: String::new(),
            line_number: 0,
            pending: None,
            done: false,
        }
    }

    fn parse_header(&self, header: &str) -> FastaResult<(String, String)> {
        // Take everything before the first space as ID
        let header = header.trim();
        let (id, description) = match header.split_once(char::is_whitespace) {
            Some((id, rest)) => (id, rest.trim()),
            None => (header, ""),
        };
        if id.is_empty() {
            return Err(FastaError::InvalidFormat(format!(
                "Empty sequence identifier at line {}",
                self.line_number
            )));
        }
        Ok((id.to_string(), description.to_string()))
    }

    fn next_record(&mut self) -> FastaResult<Option<Record>> {
        let mut raw = String::new();
        loop {
            self.line.clear();
            if self.reader.read_line(&mut self.line)? == 0 {
                // Don't forget the last sequence
                return Ok(self.pending.take().map(|(id, description)| Record { id, description, raw }));
            }
            self.line_number += 1;
            let line = self.line.trim();

            // Skip empty lines
            if line.is_empty() {
                continue;
            }

            if let Some(header) = line.strip_prefix('>') {
                let next = self.parse_header(header)?;
                if let Some((id, description)) = self.pending.replace(next) {
                    return Ok(Some(Record { id, description, raw }));
                }
            } else {
                if self.pending.is_none() {
                    return Err(FastaError::SequenceWithoutHeader(self.line_number));
                }
                raw.extend(line.chars().filter(|c| !c.is_whitespace()));
            }
        }
    }
}

impl<R: BufRead> Iterator for FastaReader<R> {
    type Item = FastaResult<Record>;

    fn next(&mut self) -> Option<Self::Item> {
        if self.done {
            return None;
        }
        match self.next_record() {
            Ok(Some(record)) => {
                trace!(id = %record.id, len = record.raw.len(), "read FASTA record");
                Some(Ok(record))
            }
            Ok(None) => {
                self.done = true;
                None
            }
            Err(e) => {
                self.done = true;
                Some(Err(e))
            }
        }
    }
}

/// Reads every record and types it with alphabet `A`.
///
/// Stops at the first error, whether from the input or from a symbol the
/// alphabet rejects.
pub fn read_sequences<A: Alphabet, R: BufRead>(reader: R) -> FastaResult<Vec<Sequence<A>>> {
    let mut sequences = Vec::new();
    for record in FastaReader::new(reader) {
        sequences.push(Sequence::from_record(record?)?);
    }
    debug!(alphabet = A::NAME, count = sequences.len(), "read FASTA sequences");
    Ok(sequences)
}

/// Writes sequences as FASTA, wrapping sequence lines at `line_width`
/// symbols of text (0 writes each sequence on one line).
pub fn write_fasta<'a, A, W, I>(out: &mut W, sequences: I, line_width: usize) -> FastaResult<()>
where
    A: Alphabet,
    W: Write + ?Sized,
    I: IntoIterator<Item = &'a Sequence<A>>,
{
    for seq in sequences {
        if seq.description().is_empty() {
            writeln!(out, ">{}", seq.id())?;
        } else {
            writeln!(out, ">{} {}", seq.id(), seq.description())?;
        }
        let text = seq.to_text();
        if line_width == 0 || text.len() <= line_width {
            writeln!(out, "{}", text)?;
        } else {
            // Rendered text is ASCII, so byte chunks are char boundaries
            for chunk in text.as_bytes().chunks(line_width) {
                out.write_all(chunk)?;
                out.write_all(b"\n")?;
            }
        }
    }
    Ok(())
}
