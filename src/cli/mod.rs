pub mod args;
pub mod commands;
pub mod context;
pub mod errors;
pub mod output;
pub mod registry;
mod shell;
pub mod ui;

pub use context::{CliMode, ShellContext};
pub use errors::{CliError, CommandError, CommandResult};
pub use shell::run_cli;
