use std::str::FromStr;

use crate::cli::args::Args;
use crate::cli::context::ShellContext;
use crate::cli::errors::{CommandError, CommandResult};
use crate::cli::output;
use crate::cli::registry::CommandEntry;
use crate::cli::ui::table::{Table, TableColumn};
use crate::core::dates::{format_date, parse_date};
use crate::core::recipes::{recipe_availability, recipe_view, RecipeTab};
use crate::domain::{Displayable, Recipe};

pub(crate) fn definitions() -> Vec<CommandEntry> {
    vec![
        CommandEntry::new(
            "recipes",
            "Browse recipes",
            "recipes [recipes|recommended|log] [--query TEXT]",
            cmd_recipes,
        ),
        CommandEntry::new(
            "recipe",
            "Show a recipe with its ingredient checklist",
            "recipe <id>",
            cmd_recipe,
        ),
        CommandEntry::new(
            "cook",
            "Record that a recipe was cooked",
            "cook <id> [YYYY-MM-DD]",
            cmd_cook,
        ),
    ]
}

fn cmd_recipes(context: &mut ShellContext, args: &[&str]) -> CommandResult {
    let args = Args::parse(args, &["query"])?;
    let tab = match args.first() {
        Some(value) => RecipeTab::from_str(value)?,
        None => RecipeTab::default(),
    };
    let log = context.ledger.cooking_log();
    let recipes = recipe_view(
        &context.catalog,
        tab,
        &log,
        args.value("query").unwrap_or(""),
    );

    output::section(format!("Recipes ({})", tab));
    if recipes.is_empty() {
        output::info("No recipes.");
        return Ok(());
    }
    let mut table = Table::new(vec![
        TableColumn::left("ID"),
        TableColumn::left("Title").max_width(20),
        TableColumn::right("Rating"),
        TableColumn::right("Minutes"),
        TableColumn::left("Tags"),
    ]);
    for recipe in &recipes {
        table.push_row(vec![
            recipe.id.clone(),
            recipe.title.clone(),
            format!("{:.1}", recipe.rating),
            recipe.cook_minutes.to_string(),
            recipe.tags.join(", "),
        ]);
    }
    output::info(table.render());
    Ok(())
}

fn lookup<'a>(context: &'a ShellContext, id: Option<&&str>) -> Result<&'a Recipe, CommandError> {
    let id = id.ok_or_else(|| CommandError::InvalidArguments("a recipe id is required".into()))?;
    context
        .catalog
        .get(id)
        .ok_or_else(|| CommandError::Message(format!("unknown recipe `{}`", id)))
}

fn cmd_recipe(context: &mut ShellContext, args: &[&str]) -> CommandResult {
    let recipe = lookup(context, args.first())?;
    output::section(recipe.display_label());
    output::info(&recipe.description);
    if !recipe.tags.is_empty() {
        output::info(format!("Tags: {}", recipe.tags.join(", ")));
    }

    output::info("\nIngredients:");
    for line in recipe_availability(recipe, context.ledger.ingredients()) {
        let mark = if line.available { "있음" } else { "없음" };
        output::info(format!("  - {} ({})", line.name, mark));
    }

    output::info("\nSteps:");
    for (index, step) in recipe.steps.iter().enumerate() {
        output::info(format!("  {}. {}", index + 1, step));
    }
    Ok(())
}

fn cmd_cook(context: &mut ShellContext, args: &[&str]) -> CommandResult {
    let recipe_id = lookup(context, args.first())?.id.clone();
    let cooked_on = match args.get(1) {
        Some(value) => parse_date(value)?,
        None => context.today(),
    };
    let entry = context.ledger.log_cooking(&recipe_id, cooked_on)?;
    output::success(format!(
        "Logged {} on {}.",
        entry.recipe_id,
        format_date(entry.cooked_on)
    ));
    Ok(())
}
