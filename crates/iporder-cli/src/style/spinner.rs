//! Spinner helpers using indicatif.

use std::time::Duration;

use indicatif::{ProgressBar, ProgressDrawTarget, ProgressStyle};

const SPINNER_TICKS: &[&str] = &["· ", "• ", "● ", "• "];

/// Creates a new spinner with a message.
///
/// Draws to stderr, and hides itself when stderr is not a terminal.
pub fn create_spinner(msg: &str) -> ProgressBar {
    let pb = ProgressBar::with_draw_target(None, ProgressDrawTarget::stderr());

    if let Ok(style) = ProgressStyle::default_spinner()
        .tick_strings(SPINNER_TICKS)
        .template("{spinner:.cyan} {msg}")
    {
        pb.set_style(style);
    }

    pb.set_message(msg.to_string());
    pb.enable_steady_tick(Duration::from_millis(120));

    pb
}

/// Finishes a spinner with an error message.
pub fn finish_error(pb: &ProgressBar, msg: &str) {
    if let Ok(style) = ProgressStyle::default_spinner().template("✗ {msg}") {
        pb.set_style(style);
    }
    pb.finish_with_message(msg.to_string());
}

/// Finishes a spinner and clears it from the terminal.
pub fn finish_and_clear(pb: &ProgressBar) {
    pb.finish_and_clear();
}
