//! Textual rewrite engines for the dot package-alias migration.
//!
//! Two engines, both plain text with no Go parsing: `renderers` patches a
//! fixed list of CLI renderer files so they import and reference the public
//! `dot` package; `imports` retargets `pkg/dot` imports to `internal/domain`
//! across the internal packages and renames qualified `dot.` references to
//! `domain.`.

mod imports;
mod renderers;

pub use imports::{update_imports, ImportRetarget, RetargetResult, UpdatedFile};
pub use renderers::{
    apply_patch, ImportInsertion, LiteralSwap, PatchResult, PatchedFile, RendererPatch,
};

use regex::Regex;

/// Replace every occurrence of `from` with `to`, returning the new content
/// and the number of occurrences replaced.
pub(crate) fn replace_literal(content: &str, from: &str, to: &str) -> (String, usize) {
    if from.is_empty() {
        return (content.to_string(), 0);
    }

    let count = content.matches(from).count();
    if count == 0 {
        return (content.to_string(), 0);
    }

    (content.replace(from, to), count)
}

/// Compile the qualified-reference pattern for a package alias: the alias at
/// a word boundary, followed by a literal `.`.
pub(crate) fn alias_pattern(alias: &str) -> Regex {
    // Escaped alias always compiles.
    Regex::new(&format!(r"\b{}\.", regex::escape(alias))).unwrap()
}

/// Rewrite every qualified reference matched by `pattern` to use the `to`
/// alias. Purely textual: comments and string literals are rewritten too.
pub(crate) fn rewrite_alias(pattern: &Regex, content: &str, to: &str) -> (String, usize) {
    let count = pattern.find_iter(content).count();
    if count == 0 {
        return (content.to_string(), 0);
    }

    let replacement = format!("{}.", to);
    let rewritten = pattern
        .replace_all(content, regex::NoExpand(&replacement))
        .into_owned();

    (rewritten, count)
}
