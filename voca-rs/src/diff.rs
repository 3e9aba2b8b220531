//! Vocabulary differencing.
//!
//! Extracts two vocabulary sets and returns the entries present in the
//! source but absent from the target, sorted ascending. Optionally reports
//! the intersection of the two sets to a writer; the report is diagnostic
//! only and never changes the returned difference.

use std::collections::BTreeSet;
use std::io::Write;
use std::path::{Path, PathBuf};

use crate::error::Result;
use crate::xml::{SourceSchema, VocabExtractor};

/// One vocabulary export: where it lives and how to read it.
#[derive(Debug, Clone)]
pub struct VocabSource {
    pub path: PathBuf,
    pub schema: SourceSchema,
}

impl VocabSource {
    /// Creates a source from a path and its schema.
    pub fn new<P: AsRef<Path>>(path: P, schema: SourceSchema) -> Self {
        VocabSource {
            path: path.as_ref().to_path_buf(),
            schema,
        }
    }

    /// Extracts this source's vocabulary set.
    pub fn extract(&self) -> Result<BTreeSet<String>> {
        VocabExtractor::new(self.schema.clone()).extract_file(&self.path)
    }
}

/// Computes the words present in `source` but absent from `target`.
///
/// When `intersection` is given, every word present in both sets is written
/// to it space-separated before the difference is returned. Repeated runs on
/// identical inputs produce identical output: extraction collects into
/// ordered sets, so both the report and the difference come out in ascending
/// order.
pub fn diff(
    source: &VocabSource,
    target: &VocabSource,
    intersection: Option<&mut dyn Write>,
) -> Result<Vec<String>> {
    let source_set = source.extract()?;
    let target_set = target.extract()?;

    if let Some(out) = intersection {
        for word in source_set.intersection(&target_set) {
            write!(out, "{} ", word)?;
        }
        out.flush()?;
    }

    Ok(source_set.difference(&target_set).cloned().collect())
}
