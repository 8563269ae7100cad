// SPDX-License-Identifier: PMPL-1.0-or-later

//! Shared report types for a rewrite run.

use serde::{Deserialize, Serialize};
use std::path::PathBuf;

/// What happened to a single file.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FileOutcome {
    pub path: PathBuf,
    pub header_added: bool,
    pub translated: bool,
    pub replacements: usize,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}

impl FileOutcome {
    pub fn new(path: PathBuf) -> Self {
        Self {
            path,
            header_added: false,
            translated: false,
            replacements: 0,
            error: None,
        }
    }

    pub fn failed(&self) -> bool {
        self.error.is_some()
    }

    pub fn modified(&self) -> bool {
        self.header_added || self.translated
    }
}

/// Summary of a complete run over a source tree.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RunReport {
    pub created_at: String,
    pub root: PathBuf,
    pub extension: String,
    pub files_found: usize,
    pub headers_added: usize,
    pub files_translated: usize,
    pub files_failed: usize,
    pub total_replacements: usize,
    pub outcomes: Vec<FileOutcome>,
    /// Entries below the root the walk could not read.
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub walk_errors: Vec<String>,
}

impl RunReport {
    pub fn from_outcomes(root: PathBuf, extension: String, outcomes: Vec<FileOutcome>) -> Self {
        Self {
            created_at: chrono::Utc::now().to_rfc3339(),
            root,
            extension,
            files_found: outcomes.len(),
            headers_added: outcomes.iter().filter(|o| o.header_added).count(),
            files_translated: outcomes.iter().filter(|o| o.translated).count(),
            files_failed: outcomes.iter().filter(|o| o.failed()).count(),
            total_replacements: outcomes.iter().map(|o| o.replacements).sum(),
            outcomes,
            walk_errors: Vec::new(),
        }
    }

    pub fn failures(&self) -> impl Iterator<Item = &FileOutcome> {
        self.outcomes.iter().filter(|o| o.failed())
    }
}
