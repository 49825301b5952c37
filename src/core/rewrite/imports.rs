//! Import retarget engine: moves packages off `pkg/dot` and onto
//! `internal/domain`.
//!
//! Walks every `.go` file under the listed package directories, swaps the
//! old quoted import path for the new one, and, in files that reference the
//! new import, renames qualified `dot.` references to `domain.`. Files are
//! only written back when their content actually changed.

use crate::error::{Error, Result};
use crate::utils::io;
use serde::Serialize;
use std::path::{Path, PathBuf};

use super::{alias_pattern, replace_literal, rewrite_alias};

// ============================================================================
// Types
// ============================================================================

/// Instructions for retargeting imports across package directories.
#[derive(Debug, Clone)]
pub struct ImportRetarget {
    /// Root-relative package directories to scan.
    pub packages: Vec<String>,
    /// Quoted import path to retire.
    pub from_import: String,
    /// Quoted import path that replaces it.
    pub to_import: String,
    /// Marker that must be present before alias references are rewritten.
    /// Checked after the import swap, so files that already carried the new
    /// import are rewritten too.
    pub gate: String,
    /// Package alias whose qualified references get renamed.
    pub alias_from: String,
    /// Replacement alias.
    pub alias_to: String,
}

/// A file that was modified.
#[derive(Debug, Clone, Serialize)]
pub struct UpdatedFile {
    /// Root-relative path.
    pub file: String,
    /// Import strings plus alias references replaced.
    pub replacements: usize,
}

/// The full result of a retarget run.
#[derive(Debug, Clone, Serialize)]
pub struct RetargetResult {
    /// Files written, in scan order.
    pub updated: Vec<UpdatedFile>,
    /// Files examined across all packages.
    pub files_scanned: usize,
}

// ============================================================================
// Engine
// ============================================================================

/// Retarget imports in every `.go` file under the listed packages.
///
/// Missing package directories are skipped. Read, write, and scan failures
/// abort the run; files already written stay written.
pub fn update_imports(spec: &ImportRetarget, root: &Path) -> Result<RetargetResult> {
    let alias = alias_pattern(&spec.alias_from);

    let mut updated = Vec::new();
    let mut files_scanned = 0;

    for package in &spec.packages {
        let package_dir = root.join(package);
        if !package_dir.is_dir() {
            continue;
        }

        for path in go_files(&package_dir)? {
            files_scanned += 1;

            let relative = path
                .strip_prefix(root)
                .unwrap_or(&path)
                .to_string_lossy()
                .to_string();

            let content = io::read_file(&path, &relative)?;

            let (mut new_content, mut replacements) =
                replace_literal(&content, &spec.from_import, &spec.to_import);

            if new_content.contains(&spec.gate) {
                let (rewritten, count) = rewrite_alias(&alias, &new_content, &spec.alias_to);
                new_content = rewritten;
                replacements += count;
            }

            if new_content != content {
                io::write_file(&path, &new_content, &relative)?;
                log_status!("imports", "Updated {}", relative);
                updated.push(UpdatedFile {
                    file: relative,
                    replacements,
                });
            }
        }
    }

    log_status!("imports", "Updated {} files", updated.len());

    Ok(RetargetResult {
        updated,
        files_scanned,
    })
}

/// Enumerate regular `.go` files under `dir`, recursively, in glob order.
///
/// The directory prefix is escaped, so metacharacters in the path match
/// literally; only the trailing `**/*.go` is pattern syntax.
fn go_files(dir: &Path) -> Result<Vec<PathBuf>> {
    let prefix = glob::Pattern::escape(&dir.display().to_string());
    let pattern = format!("{}/**/*.go", prefix);

    let entries = glob::glob(&pattern).map_err(|e| {
        Error::validation_invalid_argument(
            "root",
            format!("Invalid scan pattern '{}': {}", pattern, e),
        )
    })?;

    let mut files = Vec::new();
    for entry in entries {
        let path = entry.map_err(|e| {
            Error::internal_io(e.to_string(), Some(format!("scan {}", dir.display())))
        })?;
        if path.is_file() {
            files.push(path);
        }
    }

    Ok(files)
}

// ============================================================================
// Tests
// ============================================================================
