//! Built-in migration targets.
//!
//! Everything the renamers touch is fixed at compile time; only the checkout
//! root can be overridden from the CLI. There is no config file.

use crate::rewrite::{ImportInsertion, ImportRetarget, LiteralSwap, RendererPatch};

/// Local checkout of the target codebase.
pub const DOT_ROOT: &str = "/Volumes/Development/dot";

/// Go module path of the target codebase.
const MODULE: &str = "github.com/jamesainslie/dot";

// =============================================================================
// Default value functions (match the migration's hardcoded targets)
// =============================================================================

/// Patch for the CLI renderer files: add the `pkg/dot` import next to the
/// `internal/domain` import and re-point re-exported types at the `dot.`
/// alias.
pub fn renderer_patch() -> RendererPatch {
    RendererPatch {
        files: renderer_files(),
        import: ImportInsertion {
            requires: "internal/domain".to_string(),
            unless: "pkg/dot".to_string(),
            anchor: format!("\"{}/internal/domain\"", MODULE),
            addition: format!("\"{}/pkg/dot\"", MODULE),
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

fn renderer_files() -> Vec<String> {
    [
        "internal/cli/renderer/json.go",
        "internal/cli/renderer/table.go",
        "internal/cli/renderer/text.go",
        "internal/cli/renderer/yaml.go",
        "internal/cli/renderer/text_test.go",
        "internal/cli/renderer/renderer_test.go",
    ]
    .into_iter()
    .map(String::from)
    .collect()
}

/// Retarget for the internal packages: swap `pkg/dot` imports for
/// `internal/domain` and rename qualified `dot.` references to `domain.`.
pub fn import_retarget() -> ImportRetarget {
    ImportRetarget {
        packages: internal_packages(),
        from_import: format!("\"{}/pkg/dot\"", MODULE),
        to_import: format!("\"{}/internal/domain\"", MODULE),
        gate: format!("{}/internal/domain", MODULE),
        alias_from: "dot".to_string(),
        alias_to: "domain".to_string(),
    }
}

// internal/domain is absent on purpose: it is the retarget destination.
fn internal_packages() -> Vec<String> {
    [
        "internal/executor",
        "internal/pipeline",
        "internal/scanner",
        "internal/planner",
        "internal/manifest",
        "internal/config",
        "internal/adapters",
        "internal/ignore",
        "internal/cli",
    ]
    .into_iter()
    .map(String::from)
    .collect()
}
