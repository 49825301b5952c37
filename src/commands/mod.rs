pub type CmdResult<T> = realias::Result<(T, i32)>;

pub(crate) struct GlobalArgs {}

pub mod imports;
pub mod renderers;

/// Dispatch a command to its handler and map result to JSON.
macro_rules! dispatch {
    ($args:expr, $global:expr, $module:ident) => {
        crate::output::map_cmd_result_to_json($module::run($args, $global))
    };
}

pub(crate) fn run_json(
    command: crate::Commands,
    global: &GlobalArgs,
) -> (realias::Result<serde_json::Value>, i32) {
    crate::tty::status("realias is working...");

    match command {
        crate::Commands::Renderers(args) => dispatch!(args, global, renderers),
        crate::Commands::Imports(args) => dispatch!(args, global, imports),
    }
}
