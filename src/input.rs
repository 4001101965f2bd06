//! Line-oriented integer input.
//!
//! The input collaborator reads the number sequence before any timing
//! starts. Files carry one integer per line; surrounding whitespace is
//! trimmed, and blank or unparseable lines are skipped silently so the
//! counting core only ever sees well-formed 64-bit integers. An unreadable
//! file is a hard error surfaced to the caller.

use std::fs::File;
use std::io::{self, BufRead, BufReader, Read};
use std::path::Path;

/// Read a number sequence from a file, one integer per line.
///
/// # Errors
///
/// Propagates I/O errors from opening or reading the file. Parse failures
/// are not errors; those lines are skipped.
pub fn read_numbers(path: impl AsRef<Path>) -> io::Result<Vec<i64>> {
    let file = File::open(path)?;
    parse_numbers(BufReader::new(file))
}

/// Parse a number sequence from any buffered reader.
///
/// # Examples
///
/// ```
/// use primescan::input::parse_numbers;
///
/// let text = "17\n  42  \n\nnot-a-number\n-5\n";
/// let numbers = parse_numbers(text.as_bytes())?;
/// assert_eq!(numbers, vec![17, 42, -5]);
/// # Ok::<(), std::io::Error>(())
/// ```
pub fn parse_numbers(reader: impl Read) -> io::Result<Vec<i64>> {
    let mut numbers = Vec::new();
    for line in BufReader::new(reader).lines() {
        let line = line?;
        let trimmed = line.trim();
        if trimmed.is_empty() {
            continue;
        }
        if let Ok(value) = trimmed.parse::<i64>() {
            numbers.push(value);
        }
        // Malformed lines are dropped here so the core never sees them.
    }
    Ok(numbers)
}
