use std::str::FromStr;

use crate::cli::args::Args;
use crate::cli::context::ShellContext;
use crate::cli::errors::{CommandError, CommandResult};
use crate::cli::output;
use crate::cli::registry::CommandEntry;
use crate::cli::ui::formatting::{checked_cell, dday_cell, name_cell, short_id};
use crate::cli::ui::table::{Table, TableColumn};
use crate::core::dates::{badge_label, days_until, dday_label, format_date, parse_date};
use crate::core::views::{annotate, expiring_within, ExpiryEntry, IngredientQuery};
use crate::domain::{IngredientPatch, StorageFilter, StorageLocation};

/// Expiration shift applied by `bump` without an explicit day count.
const DEFAULT_BUMP_DAYS: i64 = 5;

pub(crate) fn definitions() -> Vec<CommandEntry> {
    vec![
        CommandEntry::new(
            "add",
            "Add an ingredient",
            "add <name> [--storage S] [--expires YYYY-MM-DD | --bought YYYY-MM-DD] [--tag T]...",
            cmd_add,
        ),
        CommandEntry::new(
            "list",
            "List ingredients, soonest-expiring first",
            "list [all|refrigerated|frozen|ambient] [--query TEXT] [--order urgency|added]",
            cmd_list,
        ),
        CommandEntry::new(
            "filter",
            "Select the storage tab used by list and add",
            "filter <all|refrigerated|frozen|ambient>",
            cmd_filter,
        ),
        CommandEntry::new(
            "edit",
            "Change fields of an ingredient",
            "edit <id> [--name N] [--storage S] [--expires YYYY-MM-DD] [--tag T]...",
            cmd_edit,
        ),
        CommandEntry::new("remove", "Delete an ingredient", "remove <id>", cmd_remove),
        CommandEntry::new(
            "bump",
            "Push an expiration back (5 days by default)",
            "bump <id> [days]",
            cmd_bump,
        ),
        CommandEntry::new("check", "Toggle the checked mark", "check <id>", cmd_check),
        CommandEntry::new(
            "expiring",
            "Show ingredients expiring soon",
            "expiring [days]",
            cmd_expiring,
        ),
    ]
}

fn parse_storage(value: &str) -> Result<StorageLocation, CommandError> {
    StorageLocation::from_str(value).map_err(CommandError::from)
}

fn required_id<'a>(args: &Args<'a>, usage: &str) -> Result<&'a str, CommandError> {
    args.first()
        .ok_or_else(|| CommandError::InvalidArguments(format!("usage: {}", usage)))
}

fn cmd_add(context: &mut ShellContext, args: &[&str]) -> CommandResult {
    let args = Args::parse(args, &["storage", "expires", "bought", "tag"])?;
    let name = args.positional().join(" ");
    let storage = match args.value("storage") {
        Some(value) => parse_storage(value)?,
        None => context.filter.location_or(context.config.default_storage),
    };

    let record = match (args.value("expires"), args.value("bought")) {
        (Some(_), Some(_)) => {
            return Err(CommandError::InvalidArguments(
                "use either --expires or --bought, not both".into(),
            ))
        }
        (Some(expires), None) => context.ledger.add_from_str(&name, storage, expires)?,
        (None, bought) => {
            let purchased_on = match bought {
                Some(value) => parse_date(value)?,
                None => context.today(),
            };
            let shelf_life = context.config.default_shelf_life_days;
            context
                .ledger
                .add_purchased(&name, storage, purchased_on, shelf_life)?
        }
    };

    let tags = args.values("tag");
    if !tags.is_empty() {
        let patch = IngredientPatch {
            tags: Some(tags.iter().map(|tag| tag.to_string()).collect()),
            ..IngredientPatch::default()
        };
        context.ledger.update(record.id, &patch)?;
    }

    let days_left = days_until(record.expires_on, context.today());
    output::success(format!(
        "Added {} ({}), expires {} ({}) [{}]",
        record.name,
        record.storage.label_ko(),
        format_date(record.expires_on),
        dday_label(days_left),
        short_id(record.id)
    ));
    Ok(())
}

fn cmd_list(context: &mut ShellContext, args: &[&str]) -> CommandResult {
    let args = Args::parse(args, &["query", "order"])?;
    let storage = match args.first() {
        Some(value) => StorageFilter::from_str(value)?,
        None => context.filter,
    };
    let today = context.today();
    let mut query = IngredientQuery::new(storage).matching(args.value("query").unwrap_or(""));
    match args.value("order").unwrap_or("urgency") {
        "urgency" => query = query.by_urgency(today),
        "added" => {}
        other => {
            return Err(CommandError::InvalidArguments(format!(
                "unknown order `{}`; expected urgency or added",
                other
            )))
        }
    }

    let records = query.apply(context.ledger.ingredients());
    output::section(format!("Ingredients ({})", storage));
    if records.is_empty() {
        output::info("No ingredients.");
        return Ok(());
    }
    let entries = annotate(&records, today, context.config.urgency_threshold_days);
    output::info(ingredient_table(&entries).render());
    Ok(())
}

fn ingredient_table(entries: &[ExpiryEntry]) -> Table {
    let mut table = Table::new(vec![
        TableColumn::left("ID"),
        TableColumn::left("Item").max_width(24),
        TableColumn::right("D-day"),
        TableColumn::left("Expires"),
        TableColumn::left("Storage"),
        TableColumn::left("✓"),
    ]);
    for entry in entries {
        let record = &entry.record;
        table.push_row(vec![
            short_id(record.id),
            name_cell(record),
            dday_cell(entry),
            format_date(record.expires_on),
            record.storage.label_ko().to_string(),
            checked_cell(record.checked),
        ]);
    }
    table
}

fn cmd_filter(context: &mut ShellContext, args: &[&str]) -> CommandResult {
    let Some(value) = args.first() else {
        output::info(format!("Current storage tab: {}", context.filter));
        return Ok(());
    };
    context.filter = StorageFilter::from_str(value)?;
    output::success(format!("Storage tab set to {}.", context.filter));
    Ok(())
}

fn cmd_edit(context: &mut ShellContext, args: &[&str]) -> CommandResult {
    let args = Args::parse(args, &["name", "storage", "expires", "tag"])?;
    let token = required_id(&args, "edit <id> [--name N] [--storage S] [--expires YYYY-MM-DD]")?;
    let record = context.resolve_ingredient(token)?;

    let tags = args.values("tag");
    let patch = IngredientPatch {
        name: args.value("name").map(str::to_string),
        storage: args.value("storage").map(parse_storage).transpose()?,
        expires_on: args.value("expires").map(parse_date).transpose()?,
        checked: None,
        tags: (!tags.is_empty()).then(|| tags.iter().map(|tag| tag.to_string()).collect()),
    };
    if patch.is_empty() {
        return Err(CommandError::InvalidArguments(
            "nothing to change; pass --name, --storage, --expires or --tag".into(),
        ));
    }

    context.ledger.update(record.id, &patch)?;
    output::success(format!("Updated {} [{}].", record.name, short_id(record.id)));
    Ok(())
}

fn cmd_remove(context: &mut ShellContext, args: &[&str]) -> CommandResult {
    let args = Args::parse(args, &[])?;
    let token = required_id(&args, "remove <id>")?;
    let record = context.resolve_ingredient(token)?;
    match context.ledger.remove(record.id) {
        Some(removed) => output::success(format!("Removed {}.", removed.name)),
        None => output::warning("Nothing removed."),
    }
    Ok(())
}

fn cmd_bump(context: &mut ShellContext, args: &[&str]) -> CommandResult {
    let args = Args::parse(args, &[])?;
    let token = required_id(&args, "bump <id> [days]")?;
    let days = match args.positional().get(1) {
        Some(value) => value.parse::<i64>().map_err(|_| {
            CommandError::InvalidArguments(format!("`{}` is not a whole number of days", value))
        })?,
        None => DEFAULT_BUMP_DAYS,
    };
    let record = context.resolve_ingredient(token)?;
    context.ledger.bump_expiration(record.id, days)?;
    if let Some(updated) = context.ledger.get(record.id) {
        output::success(format!(
            "{} now expires {} ({:+} days).",
            updated.name,
            format_date(updated.expires_on),
            days
        ));
    }
    Ok(())
}

fn cmd_check(context: &mut ShellContext, args: &[&str]) -> CommandResult {
    let args = Args::parse(args, &[])?;
    let token = required_id(&args, "check <id>")?;
    let record = context.resolve_ingredient(token)?;
    context.ledger.toggle_checked(record.id);
    let state = if record.checked { "unchecked" } else { "checked" };
    output::success(format!("{} {}.", record.name, state));
    Ok(())
}

fn cmd_expiring(context: &mut ShellContext, args: &[&str]) -> CommandResult {
    let days = match args.first() {
        Some(value) => value.parse::<i64>().map_err(|_| {
            CommandError::InvalidArguments(format!("`{}` is not a whole number of days", value))
        })?,
        None => context.config.urgency_threshold_days,
    };
    let entries = expiring_within(context.ledger.ingredients(), context.today(), days);
    output::section(format!("Expiring within {} days", days));
    if entries.is_empty() {
        output::info("Nothing is about to expire.");
        return Ok(());
    }
    for entry in &entries {
        output::info(format!(
            "  {:<6} {} ({})",
            badge_label(entry.days_left),
            name_cell(&entry.record),
            entry.record.storage.label_ko()
        ));
    }
    Ok(())
}
