//! Line-level fixes for common markdownlint complaints.
//!
//! Runs in two passes over a [`Document`]:
//!
//! 1. Each line is corrected (trailing whitespace, heading punctuation) and
//!    classified on its own, then blank separators are inserted around
//!    headings, lists, fences and tables based on the raw neighbouring lines.
//! 2. Runs of blank lines collapse to one and the end of file is trimmed to
//!    at most one trailing blank line.
//!
//! The order matters: insertion may produce doubled blanks that only the
//! second pass removes.

pub mod classify;

use crate::document::Document;
use classify::{LineKind, classify, is_heading, is_list_item, strip_heading_punctuation};

/// Raw neighbours of the line being processed, trimmed.
struct Context<'a> {
    prev: Option<&'a str>,
    next: Option<&'a str>,
}

impl<'a> Context<'a> {
    fn at(lines: &'a [String], index: usize) -> Self {
        let prev = index
            .checked_sub(1)
            .and_then(|i| lines.get(i))
            .map(|l| l.trim());
        let next = lines.get(index + 1).map(|l| l.trim());
        Self { prev, next }
    }

    /// Previous line exists and has content.
    fn prev_filled(&self) -> Option<&'a str> {
        self.prev.filter(|l| !l.is_empty())
    }

    /// Next line exists and has content.
    fn next_filled(&self) -> Option<&'a str> {
        self.next.filter(|l| !l.is_empty())
    }
}

/// Per-line correction: trailing whitespace, then heading punctuation.
pub fn correct_line(line: &str) -> String {
    strip_heading_punctuation(line.trim_end()).to_string()
}

/// Pass 1: correct every line and insert blank separators.
pub fn insert_spacing(lines: &[String]) -> Vec<String> {
    let mut out = Vec::with_capacity(lines.len() * 2);

    for (index, raw) in lines.iter().enumerate() {
        let line = correct_line(raw);
        let ctx = Context::at(lines, index);

        let (before, after) = match classify(&line) {
            LineKind::Heading => (
                ctx.prev_filled().is_some(),
                ctx.next_filled().is_some_and(|next| !is_heading(next)),
            ),
            LineKind::ListItem => (
                ctx.prev_filled().is_some_and(|prev| !is_list_item(prev)),
                ctx.next_filled().is_some_and(|next| !is_list_item(next)),
            ),
            LineKind::CodeFence => (ctx.prev_filled().is_some(), ctx.next_filled().is_some()),
            LineKind::TableRow => (
                ctx.prev_filled().is_some_and(|prev| !prev.contains('|')),
                ctx.next_filled().is_some_and(|next| !next.contains('|')),
            ),
            LineKind::Blank | LineKind::Text => (false, false),
        };

        if before {
            out.push(String::new());
        }
        out.push(line);
        if after {
            out.push(String::new());
        }
    }

    out
}

/// Pass 2: collapse blank runs and trim trailing blank lines to at most one.
pub fn collapse_blank_runs(lines: Vec<String>) -> Vec<String> {
    let mut out: Vec<String> = Vec::with_capacity(lines.len());
    let mut prev_blank = false;

    for line in lines {
        let blank = line.trim().is_empty();
        if blank && prev_blank {
            continue;
        }
        prev_blank = blank;
        out.push(line);
    }

    while out.len() > 1
        && out[out.len() - 1].trim().is_empty()
        && out[out.len() - 2].trim().is_empty()
    {
        out.pop();
    }

    out
}

/// Runs both passes over a document.
pub fn normalize_document(doc: &Document) -> Document {
    let spaced = insert_spacing(doc.lines());
    let inserted = spaced.len() - doc.len();
    let collapsed = collapse_blank_runs(spaced);
    log::trace!(
        "normalized {} lines: {} separators inserted, {} lines out",
        doc.len(),
        inserted,
        collapsed.len()
    );
    Document::from_lines(collapsed)
}

/// Normalizes Markdown source text. Non-empty output always ends with `\n`.
pub fn normalize_text(text: &str) -> String {
    normalize_document(&Document::from_text(text)).render()
}
