//! XML vocabulary extraction.
//!
//! Dictionary exports are small flat XML documents; extraction streams the
//! document once and collects the text of the configured property child of
//! every matching word unit.

mod extractor;

pub use extractor::{extract_file, extract_str, SourceSchema, VocabExtractor};
