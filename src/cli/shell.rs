use std::{
    borrow::Cow,
    io::{self, BufRead},
};

use rustyline::{
    completion::{Completer, Pair},
    error::ReadlineError,
    highlight::Highlighter,
    hint::Hinter,
    history::DefaultHistory,
    validate::{ValidationContext, ValidationResult, Validator},
    Cmd, Context as ReadlineContext, Editor, Helper, KeyEvent,
};
use shell_words::split;

use crate::cli::context::{CliMode, LoopControl, ShellContext};
use crate::cli::errors::{CliError, CommandError};
use crate::cli::output;
use crate::domain::StorageLocation;

/// Reads commands from stdin without prompts when set.
pub const SCRIPT_ENV: &str = "PANTRY_CORE_CLI_SCRIPT";

/// Commands whose first argument is a storage location.
const STORAGE_COMMANDS: [&str; 2] = ["list", "filter"];
/// Commands whose first argument is a recipe id.
const RECIPE_COMMANDS: [&str; 2] = ["recipe", "cook"];

pub fn run_cli() -> Result<(), CliError> {
    let mode = if std::env::var_os(SCRIPT_ENV).is_some() {
        CliMode::Script
    } else {
        CliMode::Interactive
    };

    let mut context = ShellContext::new(mode)?;

    match mode {
        CliMode::Interactive => run_interactive(&mut context),
        CliMode::Script => run_script(&mut context),
    }
}

fn run_interactive(context: &mut ShellContext) -> Result<(), CliError> {
    let mut editor = Editor::<CommandHelper, DefaultHistory>::new()?;
    let recipe_ids = context
        .catalog
        .all()
        .iter()
        .map(|recipe| recipe.id.clone())
        .collect();
    editor.set_helper(Some(CommandHelper::new(context.command_names(), recipe_ids)));
    editor.bind_sequence(KeyEvent::from('?'), Cmd::Complete);

    output::info("Pantry Core. Type `help` for commands.");
    loop {
        if !context.running {
            break;
        }
        let prompt = context.prompt();
        match editor.readline(&prompt) {
            Ok(line) => {
                let trimmed = line.trim();
                if trimmed.is_empty() {
                    continue;
                }

                editor.add_history_entry(trimmed).ok();

                match handle_line(context, trimmed) {
                    Ok(LoopControl::Continue) => {}
                    Ok(LoopControl::Exit) => break,
                    Err(err) => context.report_error(err)?,
                }
            }
            Err(ReadlineError::Interrupted) => {
                if context.confirm_exit()? {
                    break;
                }
            }
            Err(ReadlineError::Eof) => {
                output::info("Exiting shell.");
                break;
            }
            Err(err) => return Err(err.into()),
        }
    }

    Ok(())
}

fn run_script(context: &mut ShellContext) -> Result<(), CliError> {
    let stdin = io::stdin();
    for line in stdin.lock().lines() {
        if !context.running {
            break;
        }
        let line = line?;
        match handle_line(context, &line) {
            Ok(LoopControl::Continue) => {}
            Ok(LoopControl::Exit) => break,
            Err(err) => context.report_error(err)?,
        }
    }
    Ok(())
}

fn handle_line(context: &mut ShellContext, line: &str) -> Result<LoopControl, CommandError> {
    let trimmed = line.trim();
    if trimmed.is_empty() || trimmed.starts_with('#') {
        return Ok(LoopControl::Continue);
    }

    let tokens = match parse_command_line(trimmed) {
        Ok(tokens) => tokens,
        Err(err) => {
            output::warning(err);
            return Ok(LoopControl::Continue);
        }
    };
    let Some((raw, rest)) = tokens.split_first() else {
        return Ok(LoopControl::Continue);
    };

    let command = raw.to_lowercase();
    let args: Vec<&str> = rest.iter().map(String::as_str).collect();
    tracing::debug!(%command, "dispatching");

    match context.dispatch(&command, raw, &args) {
        Ok(LoopControl::Exit) => {
            context.running = false;
            Ok(LoopControl::Exit)
        }
        other => other,
    }
}

pub(crate) fn parse_command_line(input: &str) -> Result<Vec<String>, shell_words::ParseError> {
    split(input)
}

struct CommandHelper {
    commands: Vec<String>,
    recipe_ids: Vec<String>,
}

impl CommandHelper {
    fn new(names: Vec<&'static str>, recipe_ids: Vec<String>) -> Self {
        let mut commands: Vec<String> = names
            .into_iter()
            .map(|name| name.to_ascii_lowercase())
            .collect();
        commands.sort();
        commands.dedup();
        Self {
            commands,
            recipe_ids,
        }
    }

    /// Candidates for the word being typed, given the words before it.
    fn candidates(&self, before: &[&str], needle: &str) -> Vec<String> {
        let pool: Vec<String> = match before {
            [] => self.commands.clone(),
            [command] if STORAGE_COMMANDS.contains(command) => std::iter::once("all".to_string())
                .chain(StorageLocation::ALL.iter().map(|location| location.to_string()))
                .collect(),
            [command] if RECIPE_COMMANDS.contains(command) => self.recipe_ids.clone(),
            [command] if *command == "help" => self.commands.clone(),
            _ => Vec::new(),
        };
        let needle = needle.to_ascii_lowercase();
        pool.into_iter()
            .filter(|candidate| candidate.starts_with(&needle))
            .collect()
    }
}

impl Helper for CommandHelper {}

impl Completer for CommandHelper {
    type Candidate = Pair;

    fn complete(
        &self,
        line: &str,
        pos: usize,
        _ctx: &ReadlineContext<'_>,
    ) -> rustyline::Result<(usize, Vec<Pair>)> {
        let prefix = &line[..pos];
        let start = prefix
            .rfind(char::is_whitespace)
            .map(|idx| idx + 1)
            .unwrap_or(0);
        let before: Vec<&str> = prefix[..start].split_whitespace().collect();

        let candidates = self
            .candidates(&before, &prefix[start..])
            .into_iter()
            .map(|name| Pair {
                display: name.clone(),
                replacement: name,
            })
            .collect();
        Ok((start, candidates))
    }
}

impl Hinter for CommandHelper {
    type Hint = String;
}

impl Highlighter for CommandHelper {
    fn highlight<'l>(&self, line: &'l str, _pos: usize) -> Cow<'l, str> {
        Cow::Borrowed(line)
    }
}

impl Validator for CommandHelper {
    fn validate(&self, ctx: &mut ValidationContext) -> rustyline::Result<ValidationResult> {
        let _ = ctx;
        Ok(ValidationResult::Valid(None))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn helper() -> CommandHelper {
        CommandHelper::new(
            vec!["list", "add", "recipe", "cook", "help"],
            vec!["kimchi-jjigae".into(), "cream-pasta".into()],
        )
    }

    #[test]
    fn completes_commands_then_arguments() {
        let helper = helper();
        assert_eq!(helper.candidates(&[], "li"), ["list"]);
        assert_eq!(helper.candidates(&["list"], "fr"), ["frozen"]);
        assert_eq!(helper.candidates(&["cook"], "k"), ["kimchi-jjigae"]);
        assert!(helper.candidates(&["add", "milk"], "").is_empty());
    }

    #[test]
    fn parse_keeps_quoted_words_together() {
        let tokens = parse_command_line("add \"대파 한 단\" --tag vegetable").unwrap();
        assert_eq!(tokens, ["add", "대파 한 단", "--tag", "vegetable"]);
        assert!(parse_command_line("add \"unterminated").is_err());
    }
}
