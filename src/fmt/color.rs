//! ANSI color codes for console output.

use crate::level::Level;

/// The ANSI colors the console sink can emit. `Default` resets styling.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Color {
    Default,

    Black,
    Red,
    Green,
    Yellow,
    Blue,
    Purple,
    Cyan,
    White,

    BackgroundBlack,
    BackgroundRed,
    BackgroundGreen,
    BackgroundYellow,
    BackgroundBlue,
    BackgroundPurple,
    BackgroundCyan,
    BackgroundWhite,
}

impl Color {
    /// Returns the escape sequence for this color.
    #[must_use]
    pub const fn code(self) -> &'static str {
        match self {
            Self::Default => "\x1B[00m",

            Self::Black => "\x1B[30m",
            Self::Red => "\x1B[31m",
            Self::Green => "\x1B[32m",
            Self::Yellow => "\x1B[33m",
            Self::Blue => "\x1B[34m",
            Self::Purple => "\x1B[35m",
            Self::Cyan => "\x1B[36m",
            Self::White => "\x1B[37m",

            Self::BackgroundBlack => "\x1B[40m",
            Self::BackgroundRed => "\x1B[41m",
            Self::BackgroundGreen => "\x1B[42m",
            Self::BackgroundYellow => "\x1B[43m",
            Self::BackgroundBlue => "\x1B[44m",
            Self::BackgroundPurple => "\x1B[45m",
            Self::BackgroundCyan => "\x1B[46m",
            Self::BackgroundWhite => "\x1B[47m",
        }
    }
}

/// Returns the console color for a level.
#[must_use]
pub const fn level_color(level: Level) -> Color {
    match level {
        Level::Info => Color::Blue,
        Level::Success => Color::Green,
        Level::Error => Color::Red,
        Level::Warning => Color::Yellow,
        Level::Debug => Color::Purple,
    }
}
