//! Per-call and session-wide gating of which sinks receive a record.
//!
//! The three gates are evaluated independently; a record may reach any
//! combination of console, file, and extra sinks.

use std::collections::HashSet;
use std::fmt;
use std::str::FromStr;

use crate::level::Level;

/// Sink selection, used both as the per-call destination hint and as the
/// session-wide verbosity mode.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Destination {
    /// Only the log file.
    FileOnly,
    /// Only the console.
    ConsoleOnly,
    /// File, console, and extra sinks.
    #[default]
    FileAndConsole,
}

impl Destination {
    /// Returns the canonical config-file spelling.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::FileOnly => "file_only",
            Self::ConsoleOnly => "console_only",
            Self::FileAndConsole => "file_and_console",
        }
    }
}

impl fmt::Display for Destination {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Error returned when parsing an invalid destination string.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParseDestinationError(String);

impl fmt::Display for ParseDestinationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "unknown destination: '{}'", self.0)
    }
}

impl std::error::Error for ParseDestinationError {}

impl FromStr for Destination {
    type Err = ParseDestinationError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "file_only" | "file" => Ok(Self::FileOnly),
            "console_only" | "console" => Ok(Self::ConsoleOnly),
            "file_and_console" | "all" => Ok(Self::FileAndConsole),
            _ => Err(ParseDestinationError(s.to_string())),
        }
    }
}

/// True when a record is shown on the console: neither the call nor the
/// session may be file-only, and the record's level must be enabled.
///
/// An empty level set suppresses console output entirely.
#[must_use]
pub fn console_enabled(
    dest: Destination,
    mode: Destination,
    level: Level,
    enabled: &HashSet<Level>,
) -> bool {
    dest != Destination::FileOnly && mode != Destination::FileOnly && enabled.contains(&level)
}

/// True when a record is written to the log file: neither the call nor the
/// session may be console-only. The enabled-level set does not apply here.
#[must_use]
pub fn file_enabled(dest: Destination, mode: Destination) -> bool {
    dest != Destination::ConsoleOnly && mode != Destination::ConsoleOnly
}

/// True when a record is forwarded to the extra sinks. Both the call-site
/// hint and the session mode must request full fan-out; extra sinks are an
/// opt-in broadcast channel, not a default one.
#[must_use]
pub fn extra_enabled(dest: Destination, mode: Destination) -> bool {
    dest == Destination::FileAndConsole && mode == Destination::FileAndConsole
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn destination_from_str() {
        assert_eq!(
            "file_only".parse::<Destination>().unwrap(),
            Destination::FileOnly
        );
        assert_eq!(
            "CONSOLE".parse::<Destination>().unwrap(),
            Destination::ConsoleOnly
        );
        assert_eq!(
            "file_and_console".parse::<Destination>().unwrap(),
            Destination::FileAndConsole
        );
        assert!("sometimes".parse::<Destination>().is_err());
    }

    #[test]
    fn extra_gate_requires_both_sides() {
        assert!(extra_enabled(
            Destination::FileAndConsole,
            Destination::FileAndConsole
        ));
        assert!(!extra_enabled(
            Destination::FileAndConsole,
            Destination::FileOnly
        ));
        assert!(!extra_enabled(
            Destination::FileOnly,
            Destination::FileAndConsole
        ));
    }
}
