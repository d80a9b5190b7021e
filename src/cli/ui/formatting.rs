use colored::Colorize;
use uuid::Uuid;

use crate::cli::output::current_preferences;
use crate::core::dates::dday_label;
use crate::core::views::ExpiryEntry;
use crate::domain::{IngredientRecord, Urgency};

/// Glyph per ingredient tag. The first tag with an entry wins.
const TAG_GLYPHS: &[(&str, &str)] = &[
    ("meat", "🥩"),
    ("fish", "🐟"),
    ("dairy", "🥛"),
    ("egg", "🥚"),
    ("vegetable", "🥬"),
    ("fruit", "🍎"),
    ("grain", "🌾"),
    ("sauce", "🫙"),
];

const DEFAULT_GLYPH: &str = "🍽";

pub fn glyph_for(tags: &[String]) -> &'static str {
    tags.iter()
        .find_map(|tag| {
            TAG_GLYPHS
                .iter()
                .find(|(key, _)| *key == tag.as_str())
                .map(|(_, glyph)| *glyph)
        })
        .unwrap_or(DEFAULT_GLYPH)
}

/// Name cell: glyph prefix in the iconic theme, bare name otherwise.
pub fn name_cell(record: &IngredientRecord) -> String {
    if current_preferences().plain_mode {
        record.name.clone()
    } else {
        format!("{} {}", glyph_for(&record.tags), record.name)
    }
}

/// D-day label colored by urgency.
pub fn dday_cell(entry: &ExpiryEntry) -> String {
    let label = dday_label(entry.days_left);
    match entry.urgency {
        Urgency::Expired | Urgency::DueToday => label.bright_red().bold().to_string(),
        Urgency::Soon => label.bright_yellow().to_string(),
        Urgency::Fresh => label,
    }
}

pub fn checked_cell(checked: bool) -> String {
    match (checked, current_preferences().plain_mode) {
        (true, true) => "x".into(),
        (true, false) => "☑".into(),
        (false, true) => " ".into(),
        (false, false) => "☐".into(),
    }
}

/// First eight hex digits of an id, enough to address it in commands.
pub fn short_id(id: Uuid) -> String {
    let mut short = id.hyphenated().to_string();
    short.truncate(8);
    short
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn glyph_lookup_uses_first_known_tag() {
        let tags = vec!["organic".to_string(), "dairy".to_string(), "meat".to_string()];
        assert_eq!(glyph_for(&tags), "🥛");
        assert_eq!(glyph_for(&[]), DEFAULT_GLYPH);
    }

    #[test]
    fn short_id_is_prefix_of_hyphenated_form() {
        let id = Uuid::new_v4();
        assert!(id.to_string().starts_with(&short_id(id)));
        assert_eq!(short_id(id).len(), 8);
    }
}
