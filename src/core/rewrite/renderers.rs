//! Renderer patch engine: re-points a fixed list of files at the public
//! package.
//!
//! Each file gets the `pkg/dot` import inserted next to the `internal/domain`
//! import (when the former is missing and the latter is present), then the
//! re-exported type references are swapped back to the `dot.` alias. Content
//! is written back whether or not anything changed.

use crate::error::Result;
use crate::utils::io;
use serde::Serialize;
use std::path::Path;

use super::replace_literal;

// ============================================================================
// Types
// ============================================================================

/// Conditional insertion of one import line next to another.
#[derive(Debug, Clone)]
pub struct ImportInsertion {
    /// Marker that must be present in the file for the insertion to apply.
    pub requires: String,
    /// Marker that must be absent; present means the file was already patched.
    pub unless: String,
    /// Existing quoted import line the addition is appended after.
    pub anchor: String,
    /// Quoted import line to insert.
    pub addition: String,
}

/// A literal find/replace pair.
#[derive(Debug, Clone)]
pub struct LiteralSwap {
    pub from: String,
    pub to: String,
}

/// Instructions for patching a fixed list of files.
#[derive(Debug, Clone)]
pub struct RendererPatch {
    /// Root-relative paths, processed in order.
    pub files: Vec<String>,
    pub import: ImportInsertion,
    /// Applied to every file, whether or not the import insertion fired.
    pub swaps: Vec<LiteralSwap>,
}

/// Per-file outcome.
#[derive(Debug, Clone, Serialize)]
pub struct PatchedFile {
    /// Root-relative path.
    pub file: String,
    /// Whether the import line was inserted.
    pub import_added: bool,
    /// Literal replacements applied across all swaps.
    pub replacements: usize,
    /// Whether the written content differs from what was read.
    pub changed: bool,
}

/// The full result of a patch run.
#[derive(Debug, Clone, Serialize)]
pub struct PatchResult {
    /// Files that were processed and written.
    pub patched: Vec<PatchedFile>,
    /// Entries from the file list that did not exist on disk.
    pub skipped: Vec<String>,
}

// ============================================================================
// Engine
// ============================================================================

/// Apply the patch to every listed file that exists under `root`.
///
/// Missing files are recorded and skipped; read and write failures abort the
/// run. Every existing file is rewritten in place, even when its content is
/// unchanged.
pub fn apply_patch(spec: &RendererPatch, root: &Path) -> Result<PatchResult> {
    let mut patched = Vec::new();
    let mut skipped = Vec::new();

    for file in &spec.files {
        let path = root.join(file);
        if !path.exists() {
            skipped.push(file.clone());
            continue;
        }

        let content = io::read_file(&path, file)?;

        let mut new_content = content.clone();
        let mut import_added = false;

        if content.contains(&spec.import.requires) && !content.contains(&spec.import.unless) {
            let insertion = format!("{}\n\t{}", spec.import.anchor, spec.import.addition);
            let (inserted, count) = replace_literal(&new_content, &spec.import.anchor, &insertion);
            new_content = inserted;
            import_added = count > 0;
        }

        let mut replacements = 0;
        for swap in &spec.swaps {
            let (swapped, count) = replace_literal(&new_content, &swap.from, &swap.to);
            new_content = swapped;
            replacements += count;
        }

        io::write_file(&path, &new_content, file)?;

        let changed = new_content != content;
        if changed {
            log_status!("renderers", "Patched {}", file);
        }

        patched.push(PatchedFile {
            file: file.clone(),
            import_added,
            replacements,
            changed,
        });
    }

    let changed = patched.iter().filter(|p| p.changed).count();
    log_status!("renderers", "Patched {} of {} files", changed, patched.len());

    Ok(PatchResult { patched, skipped })
}

// ============================================================================
// Tests
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::TempDir;

    fn patch_spec(files: &[&str]) -> RendererPatch {
        RendererPatch {
            files: files.iter().map(|f| f.to_string()).collect(),
            import: ImportInsertion {
                requires: "internal/domain".to_string(),
                unless: "pkg/dot".to_string(),
                anchor: "\"example.com/app/internal/domain\"".to_string(),
                addition: "\"example.com/app/pkg/dot\"".to_string(),
            },
            swaps: vec![
                LiteralSwap {
                    from: "domain.Status".to_string(),
                    to: "dot.Status".to_string(),
                },
                LiteralSwap {
                    from: "domain.PackageInfo".to_string(),
                    to: "dot.PackageInfo".to_string(),
                },
            ],
        }
    }

    const UNPATCHED: &str = "package renderer\n\nimport (\n\t\"fmt\"\n\n\t\"example.com/app/internal/domain\"\n)\n\nfunc render(s domain.Status) {\n\tfmt.Println(s, domain.PackageInfo{})\n}\n";

    const PATCHED: &str = "package renderer\n\nimport (\n\t\"fmt\"\n\n\t\"example.com/app/internal/domain\"\n\t\"example.com/app/pkg/dot\"\n)\n\nfunc render(s dot.Status) {\n\tfmt.Println(s, dot.PackageInfo{})\n}\n";

    #[test]
    fn inserts_import_and_swaps_references() {
        let dir = TempDir::new().unwrap();
        fs::write(dir.path().join("text.go"), UNPATCHED).unwrap();

        let result = apply_patch(&patch_spec(&["text.go"]), dir.path()).unwrap();

        let content = fs::read_to_string(dir.path().join("text.go")).unwrap();
        assert_eq!(content, PATCHED);

        assert_eq!(result.patched.len(), 1);
        assert!(result.patched[0].import_added);
        assert_eq!(result.patched[0].replacements, 2);
        assert!(result.patched[0].changed);
        assert!(result.skipped.is_empty());
    }

    #[test]
    fn never_inserts_a_second_import() {
        let dir = TempDir::new().unwrap();
        fs::write(dir.path().join("text.go"), PATCHED).unwrap();

        let result = apply_patch(&patch_spec(&["text.go"]), dir.path()).unwrap();

        let content = fs::read_to_string(dir.path().join("text.go")).unwrap();
        assert_eq!(
            content.matches("\"example.com/app/pkg/dot\"").count(),
            1,
            "expected exactly one pkg/dot import, got:\n{}",
            content
        );
        assert!(!result.patched[0].import_added);
    }

    #[test]
    fn swaps_apply_even_when_insertion_does_not() {
        let dir = TempDir::new().unwrap();
        // Already imports pkg/dot, so the insertion condition fails.
        let content = "import \"example.com/app/pkg/dot\"\n\nvar s = domain.Status{}\n";
        fs::write(dir.path().join("table.go"), content).unwrap();

        let result = apply_patch(&patch_spec(&["table.go"]), dir.path()).unwrap();

        let updated = fs::read_to_string(dir.path().join("table.go")).unwrap();
        assert!(updated.contains("dot.Status{}"));
        assert!(!updated.contains("domain.Status"));
        assert!(!result.patched[0].import_added);
        assert_eq!(result.patched[0].replacements, 1);
    }

    #[test]
    fn missing_files_are_skipped() {
        let dir = TempDir::new().unwrap();
        fs::write(dir.path().join("real.go"), UNPATCHED).unwrap();

        let result = apply_patch(&patch_spec(&["ghost.go", "real.go"]), dir.path()).unwrap();

        assert_eq!(result.skipped, vec!["ghost.go".to_string()]);
        assert_eq!(result.patched.len(), 1);
        assert_eq!(result.patched[0].file, "real.go");
        assert!(result.patched[0].changed);
    }

    #[test]
    fn unaffected_files_are_written_back_unchanged() {
        let dir = TempDir::new().unwrap();
        let content = "package renderer\n\nfunc noop() {}\n";
        fs::write(dir.path().join("yaml.go"), content).unwrap();

        let result = apply_patch(&patch_spec(&["yaml.go"]), dir.path()).unwrap();

        assert!(!result.patched[0].changed);
        assert_eq!(result.patched[0].replacements, 0);
        assert_eq!(
            fs::read_to_string(dir.path().join("yaml.go")).unwrap(),
            content
        );
    }

    #[test]
    fn second_run_changes_nothing() {
        let dir = TempDir::new().unwrap();
        fs::write(dir.path().join("json.go"), UNPATCHED).unwrap();

        let spec = patch_spec(&["json.go"]);
        apply_patch(&spec, dir.path()).unwrap();
        let after_first = fs::read_to_string(dir.path().join("json.go")).unwrap();

        let result = apply_patch(&spec, dir.path()).unwrap();
        let after_second = fs::read_to_string(dir.path().join("json.go")).unwrap();

        assert_eq!(after_first, after_second);
        assert!(!result.patched[0].import_added);
        assert!(!result.patched[0].changed);
    }

    #[test]
    fn anchor_absence_means_no_insertion() {
        let dir = TempDir::new().unwrap();
        // Mentions internal/domain without the quoted import line itself.
        let content = "// moved to internal/domain\n\nvar s = domain.Status{}\n";
        fs::write(dir.path().join("notes.go"), content).unwrap();

        let result = apply_patch(&patch_spec(&["notes.go"]), dir.path()).unwrap();

        assert!(!result.patched[0].import_added);
        let updated = fs::read_to_string(dir.path().join("notes.go")).unwrap();
        assert!(updated.contains("dot.Status{}"));
    }

    #[test]
    fn insertion_follows_every_anchor_occurrence() {
        let dir = TempDir::new().unwrap();
        // The insertion is textual: each occurrence of the anchor line gets
        // the addition appended after it.
        let content = "import \"example.com/app/internal/domain\"\nimport \"example.com/app/internal/domain\"\n";
        fs::write(dir.path().join("dup.go"), content).unwrap();

        let result = apply_patch(&patch_spec(&["dup.go"]), dir.path()).unwrap();

        let updated = fs::read_to_string(dir.path().join("dup.go")).unwrap();
        assert_eq!(updated.matches("\"example.com/app/pkg/dot\"").count(), 2);
        assert!(result.patched[0].import_added);
    }
}
