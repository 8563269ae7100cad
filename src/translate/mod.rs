// SPDX-License-Identifier: PMPL-1.0-or-later

//! Dictionary-driven translation of comments and string literals.
//!
//! The translator is built once from an ordered [`TranslationTable`]. Every
//! phrase pair expands into five [`Substitution`] rules and the whole list is
//! folded over the file text, so a rule sees the output of every rule before
//! it. When one phrase contains another, whichever comes first in the table
//! wins.

mod rules;
mod table;

pub use rules::{rules_for, RuleKind, Substitution};
pub use table::{PhrasePair, TranslationTable};

use crate::error::{read_utf8, write_text, Result};
use log::{debug, trace};
use std::path::Path;

/// Result of running the rules over a piece of text.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Translation {
    pub content: String,
    pub replacements: usize,
}

impl Translation {
    pub fn changed_from(&self, original: &str) -> bool {
        self.content != original
    }
}

#[derive(Debug, Clone)]
pub struct Translator {
    table: TranslationTable,
    rules: Vec<Substitution>,
}

impl Default for Translator {
    fn default() -> Self {
        Self::new(TranslationTable::builtin())
    }
}

impl Translator {
    pub fn new(table: TranslationTable) -> Self {
        let rules = table
            .pairs()
            .iter()
            .flat_map(|pair| rules_for(&pair.source, &pair.target))
            .collect();
        Self { table, rules }
    }

    pub fn table(&self) -> &TranslationTable {
        &self.table
    }

    pub fn rules(&self) -> &[Substitution] {
        &self.rules
    }

    pub fn apply(&self, content: &str) -> Translation {
        let mut current = content.to_string();
        let mut replacements = 0usize;
        for rule in &self.rules {
            let (next, count) = rule.apply(&current);
            if count > 0 {
                trace!("{}: {} match(es)", rule.kind().label(), count);
                current = next;
                replacements += count;
            }
        }
        Translation {
            content: current,
            replacements,
        }
    }

    /// Translate the file at `path` in place.
    ///
    /// Returns `Ok(true)` only when the content actually changed; a rule that
    /// replaces a phrase with itself does not trigger a write.
    pub fn translate_file(&self, path: &Path) -> Result<bool> {
        self.translate_file_counted(path).map(|(changed, _)| changed)
    }

    /// Like [`Translator::translate_file`] but also reports how many
    /// replacements were made.
    pub fn translate_file_counted(&self, path: &Path) -> Result<(bool, usize)> {
        let original = read_utf8(path)?;
        let translation = self.apply(&original);
        if !translation.changed_from(&original) {
            return Ok((false, 0));
        }
        debug!(
            "{}: {} replacement(s)",
            path.display(),
            translation.replacements
        );
        write_text(path, &translation.content)?;
        Ok((true, translation.replacements))
    }
}

/// Translate `path` with the built-in dictionary.
pub fn translate(path: &Path) -> Result<bool> {
    Translator::default().translate_file(path)
}
