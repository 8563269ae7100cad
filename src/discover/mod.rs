// SPDX-License-Identifier: PMPL-1.0-or-later

//! File discovery: recursive walk of a root directory filtered by extension.

use crate::error::{Result, RewriteError};
use log::warn;
use std::path::{Path, PathBuf};
use walkdir::WalkDir;

/// Files found under a root, plus the entries the walk could not read.
#[derive(Debug, Default)]
pub struct Discovery {
    pub files: Vec<PathBuf>,
    pub skipped: Vec<RewriteError>,
}

/// Walk `root` and collect every file whose extension is exactly `extension`.
///
/// The extension may be given with or without its leading dot. Matching is
/// case-sensitive, so `Main.JAVA` is not a `java` file. Symlinks are followed,
/// so a linked file is rewritten through its link. Results are sorted by path.
///
/// Only a missing root fails the walk ([`RewriteError::NotFound`]). Unreadable
/// directories, broken links and link loops below the root are logged and
/// returned in [`Discovery::skipped`].
pub fn discover(root: &Path, extension: &str) -> Result<Discovery> {
    if !root.is_dir() {
        return Err(RewriteError::NotFound {
            path: root.to_path_buf(),
        });
    }

    let wanted = extension.trim_start_matches('.');
    let mut found = Discovery::default();

    for entry in WalkDir::new(root).follow_links(true) {
        let entry = match entry {
            Ok(entry) => entry,
            Err(e) => {
                let path = e.path().unwrap_or(root).to_path_buf();
                let err = RewriteError::io(&path, e.into());
                warn!("skipping {}", err);
                found.skipped.push(err);
                continue;
            }
        };

        if !entry.file_type().is_file() {
            continue;
        }
        if has_extension(entry.path(), wanted) {
            found.files.push(entry.into_path());
        }
    }

    found.files.sort();
    Ok(found)
}

/// Like [`discover`] but only returns the matching paths.
pub fn find_files(root: &Path, extension: &str) -> Result<Vec<PathBuf>> {
    discover(root, extension).map(|found| found.files)
}

fn has_extension(path: &Path, wanted: &str) -> bool {
    path.extension()
        .and_then(|ext| ext.to_str())
        .map(|ext| ext == wanted)
        .unwrap_or(false)
}
