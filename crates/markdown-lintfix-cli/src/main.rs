use anyhow::{Context, Result};
use markdown_lintfix_config::FixConfig;
use markdown_lintfix_engine::{BatchEvent, run_batch};
use std::env;

fn main() -> Result<()> {
    env_logger::Builder::new()
        .filter_level(log::LevelFilter::Warn)
        .parse_default_env()
        .init();

    if env::args().len() > 1 {
        log::warn!("markdown-lintfix takes no arguments; ignoring them");
    }

    let root = env::current_dir().context("Failed to determine the working directory")?;
    log::debug!("Searching {}", root.display());

    let config = FixConfig::default();
    run_batch(&root, &config, print_event);

    // Per-file failures are reported above; the run itself always succeeds.
    Ok(())
}

fn print_event(event: BatchEvent<'_>) {
    match event {
        BatchEvent::Failed { .. } => eprintln!("{}", describe(&event)),
        _ => println!("{}", describe(&event)),
    }
}

/// One console line per batch event.
fn describe(event: &BatchEvent<'_>) -> String {
    match event {
        BatchEvent::Started => "🔧 Fixing Markdown formatting issues...".to_string(),
        BatchEvent::Discovered { count } => {
            format!("Found {count} Markdown files to process")
        }
        BatchEvent::Processing { path } => format!("processing file: {path}"),
        BatchEvent::Failed { path, error } => format!("error processing {path}: {error}"),
        BatchEvent::Finished { report } => format!(
            "{} changed, {} unchanged, {} failed\n✅ Markdown formatting fixes complete!",
            report.changed,
            report.unchanged,
            report.failed()
        ),
    }
}
