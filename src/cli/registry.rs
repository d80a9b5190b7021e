use std::collections::HashMap;

use strsim::levenshtein;

use crate::cli::context::ShellContext;
use crate::cli::errors::CommandResult;

pub type CommandHandler = fn(&mut ShellContext, &[&str]) -> CommandResult;

/// Longest edit distance still offered as a suggestion.
const MAX_SUGGESTION_DISTANCE: usize = 3;

pub struct CommandEntry {
    pub name: &'static str,
    pub description: &'static str,
    pub usage: &'static str,
    pub handler: CommandHandler,
}

impl CommandEntry {
    pub const fn new(
        name: &'static str,
        description: &'static str,
        usage: &'static str,
        handler: CommandHandler,
    ) -> Self {
        Self {
            name,
            description,
            usage,
            handler,
        }
    }
}

#[derive(Default)]
pub struct CommandRegistry {
    commands: HashMap<&'static str, CommandEntry>,
    order: Vec<&'static str>,
}

impl CommandRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn register(&mut self, entry: CommandEntry) {
        let name = entry.name;
        if self.commands.insert(name, entry).is_none() {
            self.order.push(name);
        }
    }

    pub fn get(&self, name: &str) -> Option<&CommandEntry> {
        self.commands.get(name)
    }

    /// Entries in registration order.
    pub fn list(&self) -> Vec<&CommandEntry> {
        self.order
            .iter()
            .filter_map(|name| self.commands.get(name))
            .collect()
    }

    pub fn names(&self) -> impl Iterator<Item = &'static str> + '_ {
        self.order.iter().copied()
    }

    pub fn handler(&self, name: &str) -> Option<CommandHandler> {
        self.commands.get(name).map(|entry| entry.handler)
    }

    /// Closest registered name to a mistyped command, if any is close enough.
    pub fn suggest(&self, input: &str) -> Option<&'static str> {
        self.names()
            .map(|name| (levenshtein(name, input), name))
            .filter(|(distance, _)| *distance <= MAX_SUGGESTION_DISTANCE)
            .min_by_key(|(distance, _)| *distance)
            .map(|(_, name)| name)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn noop(_: &mut ShellContext, _: &[&str]) -> CommandResult {
        Ok(())
    }

    #[test]
    fn suggests_nearest_command() {
        let mut registry = CommandRegistry::new();
        registry.register(CommandEntry::new("list", "", "", noop));
        registry.register(CommandEntry::new("remove", "", "", noop));
        assert_eq!(registry.suggest("lsit"), Some("list"));
        assert_eq!(registry.suggest("zzzzzzzz"), None);
        assert_eq!(registry.names().collect::<Vec<_>>(), ["list", "remove"]);
    }
}
