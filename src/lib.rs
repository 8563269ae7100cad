// SPDX-License-Identifier: PMPL-1.0-or-later

//! Anglicize — attribution stamping and phrase translation for source trees.
//!
//! Walks a directory for files of one extension and rewrites each in place:
//! 1. **Header**: prepends a fixed attribution comment unless the file
//!    already starts with it.
//! 2. **Translate**: replaces known Chinese phrases in block comments, line
//!    comments and whole string literals with their English equivalents from
//!    an ordered dictionary.
//!
//! Files are only written when their content changes.

pub mod discover;
pub mod error;
pub mod header;
pub mod runner;
pub mod translate;
pub mod types;

pub use error::RewriteError;
pub use header::{ensure_header, Marker};
pub use translate::{translate, TranslationTable, Translator};
