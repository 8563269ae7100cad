// SPDX-License-Identifier: PMPL-1.0-or-later

//! Runner: batch rewrite across a source tree
//!
//! Discovers every file with the configured extension under the root, then
//! stamps the attribution header and translates each one in turn. A file that
//! cannot be decoded or written is recorded and the run moves on; only a
//! missing root stops the batch.

use crate::discover;
use crate::error::RewriteError;
use crate::header::Marker;
use crate::translate::Translator;
use crate::types::{FileOutcome, RunReport};
use anyhow::{anyhow, Context, Result};
use colored::*;
use log::warn;
use std::fs;
use std::path::{Path, PathBuf};

pub const DEFAULT_ROOT: &str = "src/main/java";
pub const DEFAULT_EXTENSION: &str = "java";

/// Configuration for a rewrite run
#[derive(Debug, Clone)]
pub struct RunConfig {
    /// Directory to walk, relative to the working directory
    pub root: PathBuf,
    /// File extension to match, with or without the dot
    pub extension: String,
    /// Print per-file detail after each progress line
    pub verbose: bool,
}

impl Default for RunConfig {
    fn default() -> Self {
        Self {
            root: PathBuf::from(DEFAULT_ROOT),
            extension: DEFAULT_EXTENSION.to_string(),
            verbose: false,
        }
    }
}

pub fn run(config: &RunConfig) -> Result<RunReport> {
    run_with(config, &Marker::default(), &Translator::default())
}

pub fn run_with(config: &RunConfig, marker: &Marker, translator: &Translator) -> Result<RunReport> {
    let found = discover::discover(&config.root, &config.extension)
        .with_context(|| format!("listing {} files", config.extension))?;
    let files = found.files;
    let label = config.extension.trim_start_matches('.').to_string();

    println!("Found {} {} files", files.len(), file_kind(&label));
    for err in &found.skipped {
        eprintln!("  {} {}", "unreadable:".red(), err);
    }

    let mut outcomes = Vec::with_capacity(files.len());
    for file in &files {
        println!("Processing {}...", file.display());
        let outcome = process_file(file, marker, translator)?;
        if let Some(err) = &outcome.error {
            eprintln!("  {} {}", "skipped:".red(), err);
        } else if config.verbose {
            println!(
                "  header: {}  translated: {}  replacements: {}",
                yes_no(outcome.header_added),
                yes_no(outcome.translated),
                outcome.replacements
            );
        }
        outcomes.push(outcome);
    }

    println!("Done!");

    let mut report = RunReport::from_outcomes(config.root.clone(), label, outcomes);
    report.walk_errors = found.skipped.iter().map(ToString::to_string).collect();
    Ok(report)
}

/// `java` -> `Java`, as in "Found 3 Java files".
fn file_kind(extension: &str) -> String {
    let mut chars = extension.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect(),
        None => String::new(),
    }
}

/// Stamp then translate one file. Per-file errors land in the outcome; only a
/// fatal error is returned.
fn process_file(path: &Path, marker: &Marker, translator: &Translator) -> Result<FileOutcome> {
    let mut outcome = FileOutcome::new(path.to_path_buf());

    match marker.ensure(path) {
        Ok(added) => outcome.header_added = added,
        Err(err) => return record_failure(outcome, err),
    }

    match translator.translate_file_counted(path) {
        Ok((changed, replacements)) => {
            outcome.translated = changed;
            outcome.replacements = replacements;
        }
        Err(err) => return record_failure(outcome, err),
    }

    Ok(outcome)
}

fn record_failure(mut outcome: FileOutcome, err: RewriteError) -> Result<FileOutcome> {
    if err.is_fatal() {
        return Err(anyhow!(err));
    }
    warn!("{}", err);
    outcome.error = Some(err.to_string());
    Ok(outcome)
}

fn yes_no(flag: bool) -> ColoredString {
    if flag {
        "yes".green()
    } else {
        "no".normal()
    }
}

/// Print a summary table to the terminal
pub fn print_summary(report: &RunReport) {
    println!("\n{}", "=== REWRITE SUMMARY ===".bold().cyan());
    println!(
        "Root: {}  |  Files: {}  |  Extension: .{}",
        report.root.display(),
        report.files_found,
        report.extension
    );
    println!(
        "Headers added: {}  |  Translated: {}  |  Replacements: {}",
        report.headers_added, report.files_translated, report.total_replacements
    );

    for err in &report.walk_errors {
        println!("  {} {}", "unreadable:".yellow(), err);
    }

    if report.files_failed == 0 {
        println!("{}", "No failures".green());
        return;
    }

    println!("{}", format!("Failed: {}", report.files_failed).bold().red());
    for outcome in report.failures() {
        if let Some(err) = &outcome.error {
            println!("  - {}", err.red());
        }
    }
}

/// Write run report as JSON or YAML, chosen by the file extension
pub fn write_report(report: &RunReport, path: &Path) -> Result<()> {
    if let Some(parent) = path.parent() {
        if !parent.as_os_str().is_empty() {
            fs::create_dir_all(parent)
                .with_context(|| format!("creating report parent directory {}", parent.display()))?;
        }
    }
    let body = match path.extension().and_then(|ext| ext.to_str()) {
        Some("yaml") | Some("yml") => {
            serde_yaml::to_string(report).context("serializing run report")?
        }
        Some("json") | None => {
            serde_json::to_string_pretty(report).context("serializing run report")?
        }
        Some(other) => {
            return Err(anyhow!(
                "report {} must be json/yaml/yml, not .{}",
                path.display(),
                other
            ));
        }
    };
    fs::write(path, body).with_context(|| format!("writing report {}", path.display()))?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::header::GROUP_MARKER;
    use tempfile::TempDir;

    #[test]
    fn process_file_stamps_and_translates() {
        let dir = TempDir::new().expect("tempdir should create");
        let path = dir.path().join("Main.java");
        fs::write(&path, "// 主程序入口\npublic class Main {}\n").expect("file should write");

        let outcome = process_file(&path, &Marker::default(), &Translator::default())
            .expect("processing should succeed");
        assert!(outcome.header_added);
        assert!(outcome.translated);
        assert_eq!(outcome.replacements, 1);

        let body = fs::read_to_string(&path).expect("file should read");
        assert_eq!(
            body,
            format!("{}// Main program entry point\npublic class Main {{}}\n", GROUP_MARKER)
        );
    }

    #[test]
    fn undecodable_file_is_recorded_not_fatal() {
        let dir = TempDir::new().expect("tempdir should create");
        let path = dir.path().join("Bad.java");
        fs::write(&path, [0xff, 0xfe, 0x00]).expect("file should write");

        let outcome = process_file(&path, &Marker::default(), &Translator::default())
            .expect("decode failures stay per-file");
        assert!(outcome.failed());
        assert!(!outcome.header_added);
        assert_eq!(fs::read(&path).expect("file should read"), vec![0xff, 0xfe, 0x00]);
    }

    #[test]
    fn file_kind_capitalises_extension() {
        assert_eq!(file_kind("java"), "Java");
        assert_eq!(file_kind("kt"), "Kt");
        assert_eq!(file_kind(""), "");
    }

    #[test]
    fn write_report_rejects_unknown_extension() {
        let dir = TempDir::new().expect("tempdir should create");
        let report = RunReport::from_outcomes(dir.path().to_path_buf(), "java".to_string(), vec![]);
        assert!(write_report(&report, &dir.path().join("report.txt")).is_err());
    }
}
