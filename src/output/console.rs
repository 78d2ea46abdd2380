//! Best-effort colored console output.

use std::io::{self, Write};

use crate::fmt::{Color, level_color};
use crate::level::Level;

/// Writes one rendered line to stdout, wrapped in the level's color and a
/// reset code. Write failures are swallowed; the console is an advisory
/// channel, not a durability one.
pub(crate) fn write(text: &str, level: Level) {
    let mut out = io::stdout().lock();
    let _ = write!(out, "{}{text}{}", level_color(level).code(), Color::Default.code());
    let _ = out.flush();
}
