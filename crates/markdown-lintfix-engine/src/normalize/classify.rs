use regex::Regex;
use std::sync::OnceLock;

/// Structural role of a single line.
///
/// Classification only looks at the line itself. There is deliberately no
/// notion of being inside a code block, so an opening and a closing fence are
/// both just `CodeFence`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LineKind {
    Heading,
    ListItem,
    CodeFence,
    TableRow,
    Blank,
    Text,
}

pub const FENCE: &str = "```";

fn heading_regex() -> &'static Regex {
    static HEADING_REGEX: OnceLock<Regex> = OnceLock::new();
    HEADING_REGEX.get_or_init(|| Regex::new(r"^#{1,6}\s+").expect("Invalid heading regex"))
}

fn list_item_regex() -> &'static Regex {
    static LIST_ITEM_REGEX: OnceLock<Regex> = OnceLock::new();
    LIST_ITEM_REGEX.get_or_init(|| {
        Regex::new(r"^\s*[-*+]\s+|^\s*\d+\.\s+").expect("Invalid list item regex")
    })
}

fn heading_punctuation_regex() -> &'static Regex {
    static HEADING_PUNCTUATION_REGEX: OnceLock<Regex> = OnceLock::new();
    HEADING_PUNCTUATION_REGEX.get_or_init(|| {
        Regex::new(r"[:：!！]+\s*$").expect("Invalid heading punctuation regex")
    })
}

/// True when `text` opens with an ATX heading marker followed by whitespace.
pub fn is_heading(text: &str) -> bool {
    heading_regex().is_match(text)
}

/// True for unordered (`-`, `*`, `+`) and ordered (`1.`) list markers.
pub fn is_list_item(text: &str) -> bool {
    list_item_regex().is_match(text)
}

/// Classifies one line by its trimmed content. First match wins, in the
/// order heading, list item, fence, table row, blank.
pub fn classify(line: &str) -> LineKind {
    let trimmed = line.trim();
    if is_heading(trimmed) {
        LineKind::Heading
    } else if is_list_item(trimmed) {
        LineKind::ListItem
    } else if trimmed.starts_with(FENCE) {
        LineKind::CodeFence
    } else if trimmed.starts_with('|') {
        LineKind::TableRow
    } else if trimmed.is_empty() {
        LineKind::Blank
    } else {
        LineKind::Text
    }
}

/// Removes trailing colons and exclamation marks (ASCII and full-width) from
/// a heading. Lines that are not headings, including indented ones, are
/// returned as-is.
pub fn strip_heading_punctuation(line: &str) -> &str {
    if !is_heading(line) {
        return line;
    }
    match heading_punctuation_regex().find(line) {
        Some(m) => line[..m.start()].trim_end(),
        None => line,
    }
}
