use crate::cli::args::Args;
use crate::cli::context::ShellContext;
use crate::cli::errors::{CommandError, CommandResult};
use crate::cli::output;
use crate::cli::registry::CommandEntry;
use crate::cli::ui::formatting::short_id;
use crate::cli::ui::table::{Table, TableColumn};
use crate::domain::{Displayable, FridgeRecord};

const USAGE: &str = "fridge [list | add <name> [--section S]... | remove <id>]";

pub(crate) fn definitions() -> Vec<CommandEntry> {
    vec![CommandEntry::new(
        "fridge",
        "Manage fridges and their sections",
        USAGE,
        cmd_fridge,
    )]
}

fn cmd_fridge(context: &mut ShellContext, args: &[&str]) -> CommandResult {
    let Some((action, rest)) = args.split_first() else {
        return list(context);
    };
    match action.to_lowercase().as_str() {
        "list" => list(context),
        "add" => add(context, rest),
        "remove" => remove(context, rest),
        other => Err(CommandError::InvalidArguments(format!(
            "unknown fridge action `{}`; usage: {}",
            other, USAGE
        ))),
    }
}

fn list(context: &ShellContext) -> CommandResult {
    let fridges = context.ledger.fridges();
    output::section("Fridges");
    if fridges.is_empty() {
        output::info("No fridges yet. Add one with `fridge add <name>`.");
        return Ok(());
    }
    let mut table = Table::new(vec![
        TableColumn::left("ID"),
        TableColumn::left("Name"),
        TableColumn::left("Sections"),
    ]);
    for fridge in &fridges {
        table.push_row(vec![
            short_id(fridge.id),
            fridge.name.clone(),
            fridge.sections.join(", "),
        ]);
    }
    output::info(table.render());
    Ok(())
}

fn add(context: &mut ShellContext, args: &[&str]) -> CommandResult {
    let args = Args::parse(args, &["section"])?;
    let name = args.positional().join(" ");
    let sections = args.values("section");
    let fridge = if sections.is_empty() {
        context
            .ledger
            .add_fridge(&name, FridgeRecord::default_sections())?
    } else {
        context.ledger.add_fridge(&name, sections)?
    };
    output::success(format!(
        "Added fridge {} [{}]",
        fridge.display_label(),
        short_id(fridge.id)
    ));
    Ok(())
}

fn remove(context: &mut ShellContext, args: &[&str]) -> CommandResult {
    let token = args
        .first()
        .ok_or_else(|| CommandError::InvalidArguments(format!("usage: {}", USAGE)))?;
    let id = context.resolve_fridge(token)?;
    match context.ledger.remove_fridge(id) {
        Some(fridge) => output::success(format!("Removed fridge {}.", fridge.name)),
        None => output::warning("Nothing removed."),
    }
    Ok(())
}
