use std::env;

use chrono::NaiveDate;
use dialoguer::{theme::ColorfulTheme, Confirm};
use uuid::Uuid;

use crate::cli::commands;
use crate::cli::errors::{CliError, CommandError};
use crate::cli::output::{self, OutputPreferences};
use crate::cli::registry::CommandRegistry;
use crate::config::{Config, ConfigManager};
use crate::core::dates::parse_date;
use crate::core::{Clock, FixedClock, SystemClock};
use crate::domain::{IngredientRecord, StorageFilter};
use crate::ledger::{Ledger, RecipeCatalog};

/// Pins "today" for the whole session, as `YYYY-MM-DD`.
pub const TODAY_ENV: &str = "PANTRY_CORE_TODAY";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CliMode {
    Interactive,
    Script,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum LoopControl {
    Continue,
    Exit,
}

pub struct ShellContext {
    pub mode: CliMode,
    pub registry: CommandRegistry,
    pub ledger: Ledger,
    pub catalog: RecipeCatalog,
    pub config: Config,
    config_manager: Option<ConfigManager>,
    clock: Box<dyn Clock>,
    /// Storage tab applied by `list` and used as the default for `add`.
    pub filter: StorageFilter,
    pub running: bool,
}

impl ShellContext {
    pub fn new(mode: CliMode) -> Result<Self, CliError> {
        let config_manager = match ConfigManager::new() {
            Ok(manager) => Some(manager),
            Err(err) => {
                tracing::warn!(error = %err, "config directory unavailable; settings will not persist");
                None
            }
        };
        let config = match config_manager.as_ref().map(ConfigManager::load) {
            Some(Ok(config)) => config,
            Some(Err(err)) => {
                output::warning(format!("Ignoring unreadable config: {}", err));
                Config::default()
            }
            None => Config::default(),
        };

        let clock: Box<dyn Clock> = match env::var(TODAY_ENV) {
            Ok(value) if !value.trim().is_empty() => Box::new(FixedClock(parse_date(&value)?)),
            _ => Box::new(SystemClock),
        };

        let ledger = if config.load_sample_data {
            Ledger::with_sample_data(clock.today())?
        } else {
            Ledger::default()
        };

        Ok(Self::with_parts(mode, ledger, config, config_manager, clock))
    }

    pub(crate) fn with_parts(
        mode: CliMode,
        ledger: Ledger,
        config: Config,
        config_manager: Option<ConfigManager>,
        clock: Box<dyn Clock>,
    ) -> Self {
        output::set_preferences(OutputPreferences::from(&config));
        let mut registry = CommandRegistry::new();
        commands::register_all(&mut registry);
        Self {
            mode,
            registry,
            ledger,
            catalog: RecipeCatalog::seeded(),
            config,
            config_manager,
            clock,
            filter: StorageFilter::All,
            running: true,
        }
    }

    pub fn today(&self) -> NaiveDate {
        self.clock.today()
    }

    pub fn prompt(&self) -> String {
        format!("pantry [{}]> ", self.filter)
    }

    pub fn command_names(&self) -> Vec<&'static str> {
        self.registry.names().collect()
    }

    pub(crate) fn dispatch(
        &mut self,
        command: &str,
        raw: &str,
        args: &[&str],
    ) -> Result<LoopControl, CommandError> {
        if let Some(handler) = self.registry.handler(command) {
            match handler(self, args) {
                Ok(()) => Ok(LoopControl::Continue),
                Err(CommandError::ExitRequested) => Ok(LoopControl::Exit),
                Err(err) => Err(err),
            }
        } else {
            self.suggest_command(raw);
            Ok(LoopControl::Continue)
        }
    }

    pub(crate) fn suggest_command(&self, input: &str) {
        output::warning(format!(
            "Unknown command `{}`. Type `help` to see available commands.",
            input
        ));
        if let Some(best) = self.registry.suggest(&input.to_lowercase()) {
            output::info(format!("Suggestion: `{}`?", best));
        }
    }

    pub(crate) fn confirm_exit(&self) -> Result<bool, CliError> {
        if self.mode == CliMode::Script {
            return Ok(true);
        }
        Ok(Confirm::with_theme(&ColorfulTheme::default())
            .with_prompt("Exit shell?")
            .default(false)
            .interact()?)
    }

    pub(crate) fn report_error(&self, err: CommandError) -> Result<(), CliError> {
        match err {
            CommandError::ExitRequested => Ok(()),
            CommandError::InvalidArguments(message) => {
                output::error(message);
                output::hint("Use `help <command>` for usage details.");
                Ok(())
            }
            other => {
                output::error(other);
                Ok(())
            }
        }
    }

    /// Finds the ingredient whose id starts with `token`.
    pub(crate) fn resolve_ingredient(&self, token: &str) -> Result<IngredientRecord, CommandError> {
        let id = unique_match(self.ledger.ingredient_ids_with_prefix(token), token, "ingredient")?;
        self.ledger
            .get(id)
            .cloned()
            .ok_or_else(|| CommandError::Message(format!("no ingredient matches `{}`", token)))
    }

    pub(crate) fn resolve_fridge(&self, token: &str) -> Result<Uuid, CommandError> {
        unique_match(self.ledger.fridge_ids_with_prefix(token), token, "fridge")
    }

    /// Persists the current config. Without a config directory the change lasts for the session.
    pub(crate) fn save_config(&self) -> Result<bool, CommandError> {
        let Some(manager) = &self.config_manager else {
            return Ok(false);
        };
        manager.save(&self.config)?;
        Ok(true)
    }

    pub(crate) fn config_manager(&self) -> Option<&ConfigManager> {
        self.config_manager.as_ref()
    }

    #[cfg(test)]
    pub(crate) fn process_line(&mut self, line: &str) -> Result<LoopControl, CommandError> {
        let tokens = crate::cli::shell::parse_command_line(line)
            .map_err(|err| CommandError::InvalidArguments(err.to_string()))?;
        let Some((first, rest)) = tokens.split_first() else {
            return Ok(LoopControl::Continue);
        };
        let args: Vec<&str> = rest.iter().map(String::as_str).collect();
        self.dispatch(&first.to_lowercase(), first, &args)
    }
}

fn unique_match(matches: Vec<Uuid>, token: &str, kind: &str) -> Result<Uuid, CommandError> {
    match matches.as_slice() {
        [id] => Ok(*id),
        [] => Err(CommandError::Message(format!(
            "no {} matches `{}`",
            kind, token
        ))),
        _ => Err(CommandError::InvalidArguments(format!(
            "`{}` matches {} {}s; type more of the id",
            token,
            matches.len(),
            kind
        ))),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn context() -> ShellContext {
        let today = NaiveDate::from_ymd_opt(2025, 12, 30).unwrap();
        let ledger = Ledger::with_sample_data(today).unwrap();
        let config = Config {
            ui_color_enabled: false,
            ..Config::default()
        };
        ShellContext::with_parts(
            CliMode::Script,
            ledger,
            config,
            None,
            Box::new(FixedClock(today)),
        )
    }

    #[test]
    fn add_then_remove_restores_ledger() {
        let mut ctx = context();
        let before = ctx.ledger.list();
        ctx.process_line("add 두부 --expires 2026-01-02").unwrap();
        assert_eq!(ctx.ledger.len(), before.len() + 1);
        let added = ctx.ledger.list()[0].clone();
        assert_eq!(added.name, "두부");

        let prefix = added.id.to_string()[..8].to_string();
        ctx.process_line(&format!("remove {}", prefix)).unwrap();
        assert_eq!(ctx.ledger.list(), before);
    }

    #[test]
    fn add_without_date_uses_shelf_life() {
        let mut ctx = context();
        ctx.process_line("add \"대파 한 단\" --storage 실온").unwrap();
        let added = &ctx.ledger.list()[0];
        assert_eq!(added.name, "대파 한 단");
        assert_eq!(added.expires_on, NaiveDate::from_ymd_opt(2026, 1, 6).unwrap());
    }

    #[test]
    fn invalid_date_leaves_ledger_unchanged() {
        let mut ctx = context();
        let before = ctx.ledger.len();
        assert!(ctx.process_line("add 두부 --expires 2026-13-40").is_err());
        assert!(ctx.process_line("add \"  \" --expires 2026-01-02").is_err());
        assert_eq!(ctx.ledger.len(), before);
    }

    #[test]
    fn bump_defaults_to_five_days() {
        let mut ctx = context();
        let milk = ctx.ledger.list()[1].clone();
        assert_eq!(milk.name, "우유");
        let prefix = milk.id.to_string()[..8].to_string();
        ctx.process_line(&format!("bump {}", prefix)).unwrap();
        let bumped = ctx.ledger.get(milk.id).unwrap();
        assert_eq!(bumped.expires_on, NaiveDate::from_ymd_opt(2026, 1, 7).unwrap());
    }

    #[test]
    fn unknown_command_and_exit() {
        let mut ctx = context();
        assert_eq!(ctx.process_line("lsit").unwrap(), LoopControl::Continue);
        assert_eq!(ctx.process_line("exit").unwrap(), LoopControl::Exit);
    }

    #[test]
    fn unknown_prefix_is_reported() {
        let ctx = context();
        assert!(matches!(
            ctx.resolve_ingredient("zzzz"),
            Err(CommandError::Message(_))
        ));
    }
}
