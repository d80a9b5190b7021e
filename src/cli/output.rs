use colored::Colorize;
use std::fmt;
use std::sync::{OnceLock, RwLock};

use crate::config::{Config, Theme};

/// Message categories used by the CLI output helpers.
#[derive(Clone, Copy, PartialEq, Eq)]
pub enum MessageKind {
    Info,
    Success,
    Warning,
    Error,
    Hint,
    Section,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct OutputPreferences {
    pub color_enabled: bool,
    /// Text-only output: no glyphs, ASCII rules.
    pub plain_mode: bool,
}

impl Default for OutputPreferences {
    fn default() -> Self {
        Self {
            color_enabled: true,
            plain_mode: false,
        }
    }
}

impl From<&Config> for OutputPreferences {
    fn from(config: &Config) -> Self {
        Self {
            color_enabled: config.ui_color_enabled,
            plain_mode: config.theme == Theme::Plain,
        }
    }
}

static PREFERENCES: OnceLock<RwLock<OutputPreferences>> = OnceLock::new();

pub fn set_preferences(prefs: OutputPreferences) {
    colored::control::set_override(prefs.color_enabled);
    let lock = PREFERENCES.get_or_init(|| RwLock::new(OutputPreferences::default()));
    if let Ok(mut guard) = lock.write() {
        *guard = prefs;
    }
}

pub fn current_preferences() -> OutputPreferences {
    PREFERENCES
        .get_or_init(|| RwLock::new(OutputPreferences::default()))
        .read()
        .map(|guard| *guard)
        .unwrap_or_default()
}

fn label(kind: MessageKind, plain: bool) -> &'static str {
    match (kind, plain) {
        (MessageKind::Success, false) => "✔",
        (MessageKind::Warning, false) => "⚠",
        (MessageKind::Error, false) => "✖",
        (MessageKind::Success, true) => "OK:",
        (MessageKind::Warning, true) => "WARNING:",
        (MessageKind::Error, true) => "ERROR:",
        (MessageKind::Hint, _) => "hint:",
        (MessageKind::Info, _) | (MessageKind::Section, _) => "",
    }
}

fn apply_style(kind: MessageKind, message: impl fmt::Display, prefs: &OutputPreferences) -> String {
    let text = message.to_string();
    let formatted = match kind {
        MessageKind::Section => format!("=== {} ===", text.trim()),
        _ => match label(kind, prefs.plain_mode) {
            "" => text,
            prefix => format!("{prefix} {text}"),
        },
    };

    match kind {
        MessageKind::Success => formatted.bright_green().to_string(),
        MessageKind::Warning => formatted.bright_yellow().to_string(),
        MessageKind::Error => formatted.bright_red().to_string(),
        MessageKind::Hint => formatted.dimmed().to_string(),
        MessageKind::Section => formatted.bold().to_string(),
        MessageKind::Info => formatted,
    }
}

pub fn print(kind: MessageKind, message: impl fmt::Display) {
    let formatted = apply_style(kind, message, &current_preferences());
    match kind {
        MessageKind::Section => println!("\n{}", formatted),
        _ => println!("{}", formatted),
    }
}

pub fn info(message: impl fmt::Display) {
    print(MessageKind::Info, message);
}

pub fn success(message: impl fmt::Display) {
    print(MessageKind::Success, message);
}

pub fn warning(message: impl fmt::Display) {
    print(MessageKind::Warning, message);
}

pub fn error(message: impl fmt::Display) {
    print(MessageKind::Error, message);
}

pub fn hint(message: impl fmt::Display) {
    print(MessageKind::Hint, message);
}

pub fn section(title: impl fmt::Display) {
    print(MessageKind::Section, title);
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn plain_mode_uses_word_labels() {
        colored::control::set_override(false);
        let prefs = OutputPreferences {
            color_enabled: false,
            plain_mode: true,
        };
        assert_eq!(
            apply_style(MessageKind::Error, "boom", &prefs),
            "ERROR: boom"
        );
        assert_eq!(apply_style(MessageKind::Info, "hello", &prefs), "hello");
        assert_eq!(
            apply_style(MessageKind::Section, " Fridges ", &prefs),
            "=== Fridges ==="
        );
    }
}
