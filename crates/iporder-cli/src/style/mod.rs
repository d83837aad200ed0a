//! Terminal output: palette, status lines, tables and the spinner.

pub mod colors;
pub mod output;
pub mod spinner;
pub mod table;

pub use output::*;
pub use spinner::*;
pub use table::*;
