pub mod formatter;
pub mod notifier;

pub use formatter::{RootRow, format_roots};
pub use notifier::StderrNotifier;
