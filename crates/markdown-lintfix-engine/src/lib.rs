pub mod batch;
pub mod document;
pub mod io;
pub mod normalize;

#[cfg(test)]
pub mod tests;

// Re-export key types for easier usage
pub use batch::*;
pub use document::Document;
pub use io::{FixError, FixOutcome, discover_markdown_files, fix_file};
pub use normalize::{classify::LineKind, normalize_document, normalize_text};
