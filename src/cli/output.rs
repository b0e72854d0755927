use std::time::Duration;

use colored::Colorize;
use indicatif::{ProgressBar, ProgressStyle};

/// Print a warning message.
pub fn warning(msg: &str) {
    eprintln!("  {} {}", "⚠".yellow(), msg);
}

/// Print an error message.
pub fn error(msg: &str) {
    eprintln!("  {} {}", "✗".red(), msg);
}

/// Print a diagnostic line, only when `enabled`.
pub fn debug(enabled: bool, msg: &str) {
    if enabled {
        eprintln!("  {} {}", "·".dimmed(), msg.dimmed());
    }
}

/// Print a header line.
pub fn header(msg: &str) {
    eprintln!("\n{}", msg.bold());
}

/// Start a spinner on stderr. Hidden automatically when stderr is not a terminal.
pub fn spinner(msg: &str) -> ProgressBar {
    let sp = ProgressBar::new_spinner();
    sp.set_style(
        ProgressStyle::with_template("  {spinner} {msg}")
            .unwrap_or_else(|_| ProgressStyle::default_spinner()),
    );
    sp.set_message(msg.to_string());
    sp.enable_steady_tick(Duration::from_millis(100));
    sp
}

/// Clear a spinner so following output starts on a clean line.
pub fn finish_spinner(sp: ProgressBar) {
    sp.finish_and_clear();
}
