//! voca-transfer - Vocabulary Transfer Between Dictionary Applications
//!
//! This library moves saved words from one dictionary application to
//! another. Dictionary apps export their vocabulary as small XML files but
//! rarely offer an import; the missing words have to be added one by one
//! through the target application's own UI.
//!
//! # Overview
//!
//! The pipeline is linear:
//!
//! 1. Extract the vocabulary set from each export file ([`xml`]).
//! 2. Compute the sorted difference — words saved in the source but missing
//!    from the target ([`diff`]).
//! 3. Optionally write the list to a file ([`output`]) and/or replay it as
//!    simulated keyboard input into the target application ([`input`]).
//!
//! The built-in schemas cover Bing Dict (`WordUnit`/`HeadWord`) and Youdao
//! Dict (`item`/`word`) exports; any flat export with a fixed unit tag and a
//! text-bearing child works through [`SourceSchema::new`].

pub mod constants;
pub mod diff;
pub mod error;
pub mod input;
pub mod output;
pub mod xml;

// Re-export commonly used types
pub use diff::{diff, VocabSource};
pub use error::{Error, Result};
pub use input::{replay, Key, Keyboard, ReplayConfig, ReplayOrder, SystemKeyboard};
pub use output::write_wordlist;
pub use xml::{extract_file, extract_str, SourceSchema, VocabExtractor};
