//! Property tests for the normalizer over documents built from typical
//! Markdown line shapes.

use markdown_lintfix_engine::normalize_text;
use proptest::prelude::*;

const LINE_SHAPES: &[&str] = &[
    "plain text",
    "trailing spaces   ",
    "",
    "   ",
    "\t",
    "# Heading",
    "## Section：",
    "### Done!",
    "  # indented heading:",
    "- item",
    "* star item",
    "  + nested item",
    "1. first",
    "10. tenth",
    "```",
    "```rust",
    "| a | b |",
    "|---|---|",
    "text with | pipe",
    "- list | with pipe",
    "> quote",
    "---",
    "crlf line\r",
];

fn document_strategy() -> impl Strategy<Value = String> {
    (
        prop::collection::vec(prop::sample::select(LINE_SHAPES), 0..40),
        any::<bool>(),
    )
        .prop_map(|(lines, trailing_newline)| {
            let mut text = lines.join("\n");
            if trailing_newline && !lines.is_empty() {
                text.push('\n');
            }
            text
        })
}

proptest! {
    #[test]
    fn normalizing_twice_changes_nothing(input in document_strategy()) {
        let once = normalize_text(&input);
        let twice = normalize_text(&once);
        prop_assert_eq!(once, twice);
    }

    #[test]
    fn no_line_has_trailing_whitespace(input in document_strategy()) {
        let out = normalize_text(&input);
        for line in out.lines() {
            prop_assert_eq!(line, line.trim_end());
        }
    }

    #[test]
    fn never_two_blank_lines_in_a_row(input in document_strategy()) {
        let out = normalize_text(&input);
        let lines: Vec<&str> = out.split_inclusive('\n').collect();
        for pair in lines.windows(2) {
            prop_assert!(
                !(pair[0].trim().is_empty() && pair[1].trim().is_empty()),
                "adjacent blank lines in {:?}",
                out
            );
        }
    }

    #[test]
    fn output_ends_with_single_newline(input in document_strategy()) {
        let out = normalize_text(&input);
        if !out.is_empty() {
            prop_assert!(out.ends_with('\n'));
            prop_assert!(!out.ends_with("\n\n\n"));
        }
    }

    #[test]
    fn non_blank_content_is_preserved_in_order(input in document_strategy()) {
        let out = normalize_text(&input);
        let content = |text: &str| -> Vec<String> {
            text.lines()
                .map(|l| l.trim().trim_end_matches([':', '：', '!', '！']).trim().to_string())
                .filter(|l| !l.is_empty())
                .collect()
        };
        prop_assert_eq!(content(&input), content(&out));
    }
}
