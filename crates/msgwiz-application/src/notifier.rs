//! User notification seam.

use async_trait::async_trait;

/// Blocking user interaction needed by the use cases.
///
/// Front ends implement this with a modal dialog or a terminal prompt; both
/// methods return only once the user has acknowledged or answered.
#[async_trait]
pub trait Notifier: Send + Sync {
    /// Shows `message` and waits for acknowledgement.
    async fn alert(&self, message: &str);

    /// Asks a yes/no question.
    async fn confirm(&self, message: &str) -> bool;
}

/// Headless notifier: alerts go to the log, confirmations get a fixed answer.
#[derive(Debug, Clone, Copy, Default)]
pub struct TracingNotifier {
    assume_yes: bool,
}

impl TracingNotifier {
    pub fn new(assume_yes: bool) -> Self {
        Self { assume_yes }
    }
}

#[async_trait]
impl Notifier for TracingNotifier {
    async fn alert(&self, message: &str) {
        tracing::warn!("[Notifier] {}", message);
    }

    async fn confirm(&self, message: &str) -> bool {
        tracing::info!(answer = self.assume_yes, "[Notifier] {}", message);
        self.assume_yes
    }
}
