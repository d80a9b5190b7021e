use crate::cli::context::ShellContext;
use crate::cli::errors::{CommandError, CommandResult};
use crate::cli::output::{self, OutputPreferences};
use crate::cli::registry::CommandEntry;
use crate::config::Config;
use crate::utils::build_info;

pub(crate) fn definitions() -> Vec<CommandEntry> {
    vec![
        CommandEntry::new("version", "Show build metadata", "version", cmd_version),
        CommandEntry::new(
            "help",
            "Show available commands",
            "help [command]",
            cmd_help,
        ),
        CommandEntry::new(
            "config",
            "Show or change preferences",
            "config [show | set <key> <value> | path]",
            cmd_config,
        ),
        CommandEntry::new("exit", "Exit the shell", "exit", cmd_exit),
    ]
}

fn cmd_version(_context: &mut ShellContext, _args: &[&str]) -> CommandResult {
    let meta = build_info::current();
    output::section(format!("Pantry Core {}", meta.version));
    output::info(format!("  Build hash : {} ({})", meta.git_hash, meta.git_status));
    output::info(format!("  Built at   : {}", meta.timestamp));
    output::info(format!("  Target     : {}", meta.target));
    output::info(format!("  Profile    : {}", meta.profile));
    output::info(format!("  Rustc      : {}", meta.rustc));
    Ok(())
}

fn cmd_help(context: &mut ShellContext, args: &[&str]) -> CommandResult {
    if let Some(name) = args.first() {
        match context.registry.get(&name.to_lowercase()) {
            Some(entry) => {
                output::section(entry.name);
                output::info(entry.description);
                output::info(format!("Usage: {}", entry.usage));
            }
            None => context.suggest_command(name),
        }
        return Ok(());
    }

    output::section("Commands");
    let entries = context.registry.list();
    let width = entries.iter().map(|entry| entry.name.len()).max().unwrap_or(0);
    for entry in entries {
        output::info(format!("  {:<width$}  {}", entry.name, entry.description));
    }
    output::hint("Type `help <command>` for usage.");
    Ok(())
}

fn cmd_config(context: &mut ShellContext, args: &[&str]) -> CommandResult {
    match args {
        [] | ["show"] => {
            output::section("Preferences");
            let entries = context.config.entries();
            let width = entries.iter().map(|(key, _)| key.len()).max().unwrap_or(0);
            for (key, value) in entries {
                output::info(format!("  {:<width$}  {}", key, value));
            }
            Ok(())
        }
        ["path"] => {
            match context.config_manager() {
                Some(manager) => output::info(manager.path().display()),
                None => output::warning("No config directory is available."),
            }
            Ok(())
        }
        ["set", key, value] => {
            let mut updated = context.config.clone();
            updated.set(key, value)?;
            context.config = updated;
            output::set_preferences(OutputPreferences::from(&context.config));
            if context.save_config()? {
                output::success(format!("{} set to {}.", key, value));
            } else {
                output::warning(format!("{} set to {} for this session only.", key, value));
            }
            Ok(())
        }
        _ => Err(CommandError::InvalidArguments(format!(
            "usage: config [show | set <key> <value> | path]; keys: {}",
            Config::KEYS.join(", ")
        ))),
    }
}

fn cmd_exit(_context: &mut ShellContext, _args: &[&str]) -> CommandResult {
    Err(CommandError::ExitRequested)
}
