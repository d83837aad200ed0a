//! Version command implementation.

use crate::style::colors::{Paint, Tone};

const VERSION: &str = env!("CARGO_PKG_VERSION");

pub fn run() {
    println!("{} {}", "iporder".paint(Tone::Title), VERSION);
    println!();
    println!("Reorders SQLite device tables by IPv4 address.");
    println!();
    println!("Build info:");
    println!("  Target:       {}", std::env::consts::ARCH);
    println!("  OS:           {}", std::env::consts::OS);
    println!("  SQLite:       {}", iporder::sqlite_version());
}
