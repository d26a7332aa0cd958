use glob::{MatchOptions, Pattern};
use std::path::Path;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Invalid glob pattern {pattern}: {source}")]
    InvalidPattern {
        pattern: String,
        source: glob::PatternError,
    },
}

/// Fixed settings that decide which files a run touches.
///
/// There is no config file: the tool is meant to be dropped into a project
/// and run with zero arguments, so the values live here.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FixConfig {
    /// File extension without the leading dot.
    pub extension: String,
    /// Any relative path containing one of these fragments is skipped.
    pub exclude_fragments: Vec<String>,
}

impl Default for FixConfig {
    fn default() -> Self {
        Self {
            extension: "md".to_string(),
            exclude_fragments: vec![
                "node_modules/".to_string(),
                "test-results/".to_string(),
                "playwright-report/".to_string(),
            ],
        }
    }
}

impl FixConfig {
    /// Top-level and recursive patterns, relative to a search root.
    pub fn relative_patterns(&self) -> Vec<String> {
        vec![
            format!("*.{}", self.extension),
            format!("**/*.{}", self.extension),
        ]
    }

    /// Absolute glob patterns rooted at `root`.
    ///
    /// The root is escaped so directory names containing `[` or `*` are
    /// matched literally.
    pub fn glob_patterns(&self, root: &Path) -> Result<Vec<String>, ConfigError> {
        let escaped_root = Pattern::escape(&root.to_string_lossy());
        self.relative_patterns()
            .into_iter()
            .map(|relative| {
                let pattern = format!("{}/{relative}", escaped_root.trim_end_matches('/'));
                Pattern::new(&pattern)
                    .map(|_| pattern.clone())
                    .map_err(|source| ConfigError::InvalidPattern { pattern, source })
            })
            .collect()
    }

    /// Options matching conventional shell globbing: wildcards never match a
    /// leading dot or a path separator.
    pub fn match_options(&self) -> MatchOptions {
        MatchOptions {
            case_sensitive: true,
            require_literal_separator: true,
            require_literal_leading_dot: true,
        }
    }

    /// Whether a `/`-separated relative path falls under an excluded fragment.
    pub fn is_excluded(&self, relative_path: &str) -> bool {
        self.exclude_fragments
            .iter()
            .any(|fragment| relative_path.contains(fragment.as_str()))
    }
}
