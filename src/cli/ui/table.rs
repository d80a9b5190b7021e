use crate::cli::output::current_preferences;

/// Describes how a column should align its contents.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Alignment {
    Left,
    Right,
}

/// Specifies the configuration for a single column in the rendered table.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct TableColumn {
    pub header: String,
    pub max_width: Option<usize>,
    pub alignment: Alignment,
}

impl TableColumn {
    pub fn left(header: impl Into<String>) -> Self {
        Self {
            header: header.into(),
            max_width: None,
            alignment: Alignment::Left,
        }
    }

    pub fn right(header: impl Into<String>) -> Self {
        Self {
            alignment: Alignment::Right,
            ..Self::left(header)
        }
    }

    pub fn max_width(mut self, width: usize) -> Self {
        self.max_width = Some(width);
        self
    }
}

/// A table with column metadata and rows of already-formatted cells.
pub struct Table {
    pub columns: Vec<TableColumn>,
    pub rows: Vec<Vec<String>>,
}

impl Table {
    pub fn new(columns: Vec<TableColumn>) -> Self {
        Self {
            columns,
            rows: Vec::new(),
        }
    }

    pub fn push_row(&mut self, row: Vec<String>) {
        self.rows.push(row);
    }

    /// Content width of each column: the widest cell, capped by `max_width`.
    pub fn compute_widths(&self) -> Vec<usize> {
        self.columns
            .iter()
            .enumerate()
            .map(|(idx, column)| {
                let widest = self
                    .rows
                    .iter()
                    .filter_map(|row| row.get(idx))
                    .map(|cell| display_width(cell))
                    .fold(display_width(&column.header), usize::max);
                column.max_width.map_or(widest, |max| widest.min(max))
            })
            .collect()
    }

    fn render_row(&self, row: &[String], widths: &[usize]) -> String {
        self.columns
            .iter()
            .zip(widths)
            .enumerate()
            .map(|(idx, (column, width))| {
                let text = row.get(idx).map(String::as_str).unwrap_or("");
                render_cell(text, *width, column.alignment)
            })
            .collect::<Vec<_>>()
            .join("  ")
            .trim_end()
            .to_string()
    }

    /// Header, rule, then one line per row.
    pub fn render(&self) -> String {
        let widths = self.compute_widths();
        let headers: Vec<String> = self.columns.iter().map(|c| c.header.clone()).collect();
        let mut lines = vec![
            self.render_row(&headers, &widths),
            horizontal_rule(&widths),
        ];
        lines.extend(self.rows.iter().map(|row| self.render_row(row, &widths)));
        lines.join("\n")
    }
}

/// Terminal columns taken by `ch`: two for Hangul, CJK, and emoji.
fn char_width(ch: char) -> usize {
    match ch as u32 {
        0x1100..=0x115F
        | 0x2E80..=0xA4CF
        | 0xAC00..=0xD7A3
        | 0xF900..=0xFAFF
        | 0xFF00..=0xFF60
        | 0x1F300..=0x1FAFF => 2,
        _ => 1,
    }
}

/// Visible width of `text`, skipping ANSI escape sequences.
pub fn display_width(text: &str) -> usize {
    let mut width = 0;
    let mut chars = text.chars();
    while let Some(ch) = chars.next() {
        if ch == '\u{1b}' {
            for next in chars.by_ref() {
                if next.is_ascii_alphabetic() {
                    break;
                }
            }
            continue;
        }
        width += char_width(ch);
    }
    width
}

fn truncate(text: &str, width: usize) -> String {
    if display_width(text) <= width {
        return text.to_string();
    }
    let mut kept = String::new();
    let mut used = 0;
    for ch in strip_ansi(text).chars() {
        let w = char_width(ch);
        if used + w + 1 > width {
            break;
        }
        kept.push(ch);
        used += w;
    }
    kept.push('…');
    kept
}

fn strip_ansi(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    let mut chars = text.chars();
    while let Some(ch) = chars.next() {
        if ch == '\u{1b}' {
            for next in chars.by_ref() {
                if next.is_ascii_alphabetic() {
                    break;
                }
            }
        } else {
            out.push(ch);
        }
    }
    out
}

/// Pads or truncates one cell to `width` columns.
pub fn render_cell(text: &str, width: usize, alignment: Alignment) -> String {
    let fitted = truncate(text, width);
    let padding = " ".repeat(width.saturating_sub(display_width(&fitted)));
    match alignment {
        Alignment::Left => format!("{fitted}{padding}"),
        Alignment::Right => format!("{padding}{fitted}"),
    }
}

fn horizontal_rule(widths: &[usize]) -> String {
    let total = widths.iter().sum::<usize>() + widths.len().saturating_sub(1) * 2;
    let ch = if current_preferences().plain_mode { '-' } else { '─' };
    ch.to_string().repeat(total)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn hangul_counts_double_width() {
        assert_eq!(display_width("우유"), 4);
        assert_eq!(display_width("milk"), 4);
        assert_eq!(display_width("\u{1b}[31mD-1\u{1b}[0m"), 3);
    }

    #[test]
    fn cells_are_padded_and_truncated() {
        assert_eq!(render_cell("ab", 4, Alignment::Left), "ab  ");
        assert_eq!(render_cell("ab", 4, Alignment::Right), "  ab");
        assert_eq!(render_cell("abcdef", 4, Alignment::Left), "abc…");
    }

    #[test]
    fn widths_follow_widest_cell() {
        let mut table = Table::new(vec![
            TableColumn::left("Name"),
            TableColumn::right("D").max_width(3),
        ]);
        table.push_row(vec!["소고기".into(), "D-10".into()]);
        assert_eq!(table.compute_widths(), vec![6, 3]);
        let rendered = table.render();
        assert_eq!(rendered.lines().count(), 3);
        assert!(rendered.lines().last().unwrap().starts_with("소고기"));
    }
}
