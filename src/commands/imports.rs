use clap::{Args, Subcommand};
use serde::Serialize;
use std::path::Path;

use realias::defaults;
use realias::rewrite;

use crate::commands::CmdResult;

#[derive(Args)]
pub struct ImportsArgs {
    #[command(subcommand)]
    command: ImportsCommand,
}

#[derive(Subcommand)]
enum ImportsCommand {
    /// Retarget pkg/dot imports to internal/domain across the internal packages
    Update {
        /// Checkout root of the target codebase
        #[arg(long)]
        root: Option<String>,
    },
}

pub fn run(args: ImportsArgs, _global: &crate::commands::GlobalArgs) -> CmdResult<ImportsOutput> {
    match args.command {
        ImportsCommand::Update { root } => run_update(root.as_deref()),
    }
}

#[derive(Serialize)]
#[serde(tag = "command")]
pub enum ImportsOutput {
    #[serde(rename = "imports.update")]
    Update {
        root: String,
        updated: Vec<UpdateSummary>,
        total_updated: usize,
        files_scanned: usize,
    },
}

#[derive(Serialize)]
pub struct UpdateSummary {
    pub file: String,
    pub replacements: usize,
}

fn run_update(root: Option<&str>) -> CmdResult<ImportsOutput> {
    let root = root.unwrap_or(defaults::DOT_ROOT).to_string();
    let spec = defaults::import_retarget();

    let result = rewrite::update_imports(&spec, Path::new(&root))?;

    let total_updated = result.updated.len();

    Ok((
        ImportsOutput::Update {
            root,
            updated: result
                .updated
                .into_iter()
                .map(|u| UpdateSummary {
                    file: u.file,
                    replacements: u.replacements,
                })
                .collect(),
            total_updated,
            files_scanned: result.files_scanned,
        },
        0,
    ))
}
