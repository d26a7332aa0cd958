use crate::normalize::normalize_text;
use markdown_lintfix_config::FixConfig;
use relative_path::{RelativePath, RelativePathBuf};
use std::collections::BTreeSet;
use std::fs;
use std::path::{Path, PathBuf};

#[derive(Debug, thiserror::Error)]
pub enum FixError {
    #[error("failed to read {path}: {source}")]
    Read {
        path: PathBuf,
        source: std::io::Error,
    },
    #[error("failed to write {path}: {source}")]
    Write {
        path: PathBuf,
        source: std::io::Error,
    },
}

/// Result of fixing a single file.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FixOutcome {
    Changed,
    Unchanged,
}

/// Find Markdown files under `root`, top level and nested.
///
/// Returns paths relative to `root`, deduplicated and sorted, with excluded
/// fragments filtered out. Never fails: entries that cannot be read are
/// skipped.
pub fn discover_markdown_files(root: &Path, config: &FixConfig) -> Vec<RelativePathBuf> {
    let patterns = match config.glob_patterns(root) {
        Ok(patterns) => patterns,
        Err(e) => {
            log::error!("{e}");
            return Vec::new();
        }
    };

    let mut found = BTreeSet::new();
    for pattern in &patterns {
        let entries = match glob::glob_with(pattern, config.match_options()) {
            Ok(entries) => entries,
            Err(e) => {
                log::error!("Invalid glob pattern {pattern}: {e}");
                continue;
            }
        };

        for entry in entries {
            let path = match entry {
                Ok(path) => path,
                Err(e) => {
                    log::warn!("Skipping unreadable entry: {e}");
                    continue;
                }
            };
            if !path.is_file() {
                continue;
            }
            if let Some(relative) = to_relative(root, &path) {
                found.insert(relative);
            }
        }
    }

    found
        .into_iter()
        .filter(|relative| {
            let excluded = config.is_excluded(relative.as_str());
            if excluded {
                log::debug!("Excluded {relative}");
            }
            !excluded
        })
        .collect()
}

fn to_relative(root: &Path, path: &Path) -> Option<RelativePathBuf> {
    let stripped = path.strip_prefix(root).unwrap_or(path);
    match RelativePathBuf::from_path(stripped) {
        Ok(relative) => Some(relative),
        Err(e) => {
            log::warn!("Skipping {}: {e}", path.display());
            None
        }
    }
}

/// Read, normalize and overwrite one file.
pub fn fix_file(relative_path: &RelativePath, root: &Path) -> Result<FixOutcome, FixError> {
    let absolute_path = relative_path.to_path(root);

    let original = fs::read_to_string(&absolute_path).map_err(|source| FixError::Read {
        path: absolute_path.clone(),
        source,
    })?;

    let fixed = normalize_text(&original);

    fs::write(&absolute_path, &fixed).map_err(|source| FixError::Write {
        path: absolute_path.clone(),
        source,
    })?;

    if fixed == original {
        Ok(FixOutcome::Unchanged)
    } else {
        Ok(FixOutcome::Changed)
    }
}
