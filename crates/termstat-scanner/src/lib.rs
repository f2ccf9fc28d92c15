//! File walking with gitignore support and source-file selection.

mod scanner;
mod selection;

pub use scanner::{Scanner, source_path};
pub use selection::Selection;
