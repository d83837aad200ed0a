//! Terminal palette.
//!
//! Colors are on unless `--no-color` was passed or the terminal cannot show
//! them; `main` decides once at startup through [`set_enabled`].

use std::fmt::Display;
use std::sync::atomic::{AtomicBool, Ordering};

use owo_colors::{OwoColorize, Style};

static ENABLED: AtomicBool = AtomicBool::new(true);

pub fn set_enabled(on: bool) {
    ENABLED.store(on, Ordering::Relaxed);
}

pub fn enabled() -> bool {
    ENABLED.load(Ordering::Relaxed)
}

/// What a piece of text means, which decides its color.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Tone {
    Good,
    Bad,
    Caution,
    Quiet,
    Title,
    /// File paths, table names and commands.
    Path,
}

impl Tone {
    fn style(self) -> Style {
        match self {
            Tone::Good => Style::new().green().bold(),
            Tone::Bad => Style::new().red().bold(),
            Tone::Caution => Style::new().yellow(),
            Tone::Quiet => Style::new().dimmed(),
            Tone::Title => Style::new().bold(),
            Tone::Path => Style::new().blue(),
        }
    }
}

/// Renders any displayable value in a [`Tone`].
pub trait Paint: Display + Sized {
    fn paint(&self, tone: Tone) -> String {
        if enabled() {
            self.style(tone.style()).to_string()
        } else {
            self.to_string()
        }
    }
}

impl<T: Display> Paint for T {}
