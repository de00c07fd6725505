//! Terminal notifier.

use async_trait::async_trait;
use colored::Colorize;

use msgwiz_application::Notifier;

/// Prints alerts and asks confirmations on stdin.
///
/// Only used between REPL reads, so stdin is not contended with rustyline.
pub struct ConsoleNotifier {
    read_line: fn() -> std::io::Result<String>,
}

fn stdin_line() -> std::io::Result<String> {
    let mut input = String::new();
    std::io::stdin().read_line(&mut input)?;
    Ok(input)
}

impl Default for ConsoleNotifier {
    fn default() -> Self {
        Self { read_line: stdin_line }
    }
}

impl ConsoleNotifier {
    async fn read_answer(&self) -> Option<String> {
        tokio::task::spawn_blocking(self.read_line).await.ok()?.ok()
    }
}

#[async_trait]
impl Notifier for ConsoleNotifier {
    async fn alert(&self, message: &str) {
        for line in message.lines() {
            eprintln!("{}", line.red().bold());
        }
        eprintln!("{}", "Press Enter to continue.".bright_black());
        let _ = self.read_answer().await;
    }

    async fn confirm(&self, message: &str) -> bool {
        println!("{}", format!("{message} (yes/no)").bright_yellow());
        self.read_answer()
            .await
            .is_some_and(|input| matches!(input.trim().to_ascii_lowercase().as_str(), "y" | "yes"))
    }
}
