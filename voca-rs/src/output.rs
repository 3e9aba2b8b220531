//! Word list output.

use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::Path;

use crate::error::Result;

/// Writes the words to a text file, one per line.
///
/// The file is created or truncated, every word is followed by a newline,
/// and the buffer is flushed before returning.
pub fn write_wordlist<P: AsRef<Path>>(words: &[String], path: P) -> Result<()> {
    let file = File::create(path)?;
    let mut out = BufWriter::new(file);
    for word in words {
        writeln!(out, "{}", word)?;
    }
    out.flush()?;
    Ok(())
}
