use crate::io::{FixError, FixOutcome, discover_markdown_files, fix_file};
use markdown_lintfix_config::FixConfig;
use relative_path::{RelativePath, RelativePathBuf};
use std::path::Path;

/// Progress notifications from [`run_batch`], in the order they happen.
#[derive(Debug)]
pub enum BatchEvent<'a> {
    Started,
    Discovered { count: usize },
    Processing { path: &'a RelativePath },
    Failed { path: &'a RelativePath, error: &'a FixError },
    Finished { report: &'a BatchReport },
}

/// A file that could not be fixed, with the error message.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FileFailure {
    pub path: RelativePathBuf,
    pub message: String,
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct BatchReport {
    pub discovered: usize,
    pub changed: usize,
    pub unchanged: usize,
    pub failures: Vec<FileFailure>,
}

impl BatchReport {
    pub fn failed(&self) -> usize {
        self.failures.len()
    }
}

/// Fix every Markdown file under `root`, one at a time.
///
/// A failing file is reported through `on_event` and recorded in the report;
/// it never stops the rest of the batch.
pub fn run_batch(
    root: &Path,
    config: &FixConfig,
    mut on_event: impl FnMut(BatchEvent<'_>),
) -> BatchReport {
    on_event(BatchEvent::Started);

    let files = discover_markdown_files(root, config);
    on_event(BatchEvent::Discovered { count: files.len() });

    let mut report = BatchReport {
        discovered: files.len(),
        ..BatchReport::default()
    };

    for path in &files {
        on_event(BatchEvent::Processing {
            path: path.as_relative_path(),
        });
        match fix_file(path, root) {
            Ok(FixOutcome::Changed) => {
                log::debug!("Rewrote {path}");
                report.changed += 1;
            }
            Ok(FixOutcome::Unchanged) => report.unchanged += 1,
            Err(error) => {
                on_event(BatchEvent::Failed {
                    path: path.as_relative_path(),
                    error: &error,
                });
                report.failures.push(FileFailure {
                    path: path.clone(),
                    message: error.to_string(),
                });
            }
        }
    }

    on_event(BatchEvent::Finished { report: &report });
    report
}
