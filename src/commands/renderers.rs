use clap::{Args, Subcommand};
use serde::Serialize;
use std::path::Path;

use realias::defaults;
use realias::rewrite;

use crate::commands::CmdResult;

#[derive(Args)]
pub struct RenderersArgs {
    #[command(subcommand)]
    command: RenderersCommand,
}

#[derive(Subcommand)]
enum RenderersCommand {
    /// Re-point the CLI renderer files at the public dot package
    Fix {
        /// Checkout root of the target codebase
        #[arg(long)]
        root: Option<String>,
    },
}

pub fn run(
    args: RenderersArgs,
    _global: &crate::commands::GlobalArgs,
) -> CmdResult<RenderersOutput> {
    match args.command {
        RenderersCommand::Fix { root } => run_fix(root.as_deref()),
    }
}

#[derive(Serialize)]
#[serde(tag = "command")]
pub enum RenderersOutput {
    #[serde(rename = "renderers.fix")]
    Fix {
        root: String,
        patched: Vec<PatchSummary>,
        skipped: Vec<String>,
        total_patched: usize,
        total_changed: usize,
    },
}

#[derive(Serialize)]
pub struct PatchSummary {
    pub file: String,
    pub import_added: bool,
    pub replacements: usize,
    pub changed: bool,
}

fn run_fix(root: Option<&str>) -> CmdResult<RenderersOutput> {
    let root = root.unwrap_or(defaults::DOT_ROOT).to_string();
    let spec = defaults::renderer_patch();

    let result = rewrite::apply_patch(&spec, Path::new(&root))?;

    let total_patched = result.patched.len();
    let total_changed = result.patched.iter().filter(|p| p.changed).count();

    Ok((
        RenderersOutput::Fix {
            root,
            patched: result
                .patched
                .into_iter()
                .map(|p| PatchSummary {
                    file: p.file,
                    import_added: p.import_added,
                    replacements: p.replacements,
                    changed: p.changed,
                })
                .collect(),
            skipped: result.skipped,
            total_patched,
            total_changed,
        },
        0,
    ))
}
