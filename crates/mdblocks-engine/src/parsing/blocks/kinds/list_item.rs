use std::sync::OnceLock;

use regex::Regex;

/// Which list a list item belongs to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ListKind {
    Bulleted,
    Numbered,
}

/// List item markers: bullets, ordinals and task boxes.
pub struct ListItem;

impl ListItem {
    pub const BULLETS: [&'static str; 3] = ["- ", "* ", "+ "];
    pub const TODO_OPEN: &'static str = "- [ ] ";
    pub const TODO_DONE: &'static str = "- [x] ";

    /// Parses a task line into `(checked, content)`.
    pub fn todo(line: &str) -> Option<(bool, &str)> {
        // Trimming the whole line first means `- [ ]` with nothing after it
        // is not a task.
        let t = line.trim();
        if let Some(rest) = t.strip_prefix(Self::TODO_OPEN) {
            Some((false, rest.trim()))
        } else {
            t.strip_prefix(Self::TODO_DONE).map(|rest| (true, rest.trim()))
        }
    }

    /// Parses a bullet or numbered item into `(kind, indent, content)`.
    ///
    /// Bullets are checked first. A numbered item's ordinal is discarded.
    pub fn parse(line: &str) -> Option<(ListKind, usize, &str)> {
        let t = line.trim();
        if let Some(rest) = Self::BULLETS.iter().find_map(|m| t.strip_prefix(m)) {
            return Some((ListKind::Bulleted, Self::indent(line), rest.trim()));
        }
        let m = ordinal_regex().find(line)?;
        Some((ListKind::Numbered, Self::indent(line), line[m.end()..].trim()))
    }

    /// Leading whitespace of the raw line, one column per character.
    pub fn indent(line: &str) -> usize {
        line.chars().take_while(|c| c.is_whitespace()).count()
    }
}

fn ordinal_regex() -> &'static Regex {
    static ORDINAL_REGEX: OnceLock<Regex> = OnceLock::new();
    ORDINAL_REGEX.get_or_init(|| Regex::new(r"^\s*\d+\.\s").expect("Invalid ordinal regex"))
}
