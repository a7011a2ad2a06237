use quickcd_core::{Notice, Notifier};

/// Prints notices on stderr so stdout stays usable by scripts.
#[derive(Debug, Default, Clone, Copy)]
pub struct StderrNotifier;

impl Notifier for StderrNotifier {
    fn notify(&self, notice: Notice) {
        tracing::debug!("notice: {:?}", notice);
        eprintln!("quickcd: {notice}");
    }
}
