//! Status lines printed by the commands.
//!
//! Every line starts with a short tag (`[ ok ]`, `[warn]`, ...) so output
//! stays readable with colors off and in log captures. Failures go to
//! stderr, everything else to stdout.

use super::colors::{Paint, Tone};

/// Kind of a status line.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Status {
    /// The step completed.
    Ok,
    /// Something was passed over but the command continues.
    Skipped,
    /// Nothing failed, but the result may not be what was expected.
    Warn,
    /// The command failed.
    Failed,
    /// A suggested next step.
    Next,
}

impl Status {
    fn tag(self) -> String {
        match self {
            Status::Ok => "[ ok ]".paint(Tone::Good),
            Status::Skipped => "[skip]".paint(Tone::Caution),
            Status::Warn => "[warn]".paint(Tone::Caution),
            Status::Failed => "[fail]".paint(Tone::Bad),
            Status::Next => "[next]".paint(Tone::Quiet),
        }
    }
}

/// Formats one status line without printing it.
pub fn status_line(status: Status, msg: &str) -> String {
    match status {
        Status::Next => format!("{} {}", status.tag(), msg.paint(Tone::Quiet)),
        _ => format!("{} {msg}", status.tag()),
    }
}

/// Prints a status line to the stream that fits its kind.
pub fn print_status(status: Status, msg: &str) {
    let line = status_line(status, msg);
    if status == Status::Failed {
        eprintln!("{line}");
    } else {
        println!("{line}");
    }
}

const FIELD_WIDTH: usize = 16;

/// Formats an indented `name: value` pair with aligned values.
pub fn field_line(name: &str, value: &str) -> String {
    let label = format!("{name}:");
    format!("  {} {value}", format!("{label:<FIELD_WIDTH$}").paint(Tone::Quiet))
}

pub fn print_field(name: &str, value: &str) {
    println!("{}", field_line(name, value));
}

/// Prints a shell command the user can run next.
pub fn print_command(cmd: &str) {
    println!("    $ {}", cmd.paint(Tone::Path));
}
