//! Severity levels carried by every log record.

use std::fmt;
use std::str::FromStr;

/// Log severity. Unlike threshold-style loggers there is no ordering between
/// levels; visibility is controlled by the session's enabled-level set.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Level {
    /// Normal operational messages.
    #[default]
    Info,
    /// Operations that completed as intended.
    Success,
    /// Failures.
    Error,
    /// Non-fatal anomalies.
    Warning,
    /// Development-time diagnostics.
    Debug,
}

impl Level {
    /// Returns the display name substituted for the `%t` directive.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Info => "INFO",
            Self::Success => "SUCCESS",
            Self::Error => "ERROR",
            Self::Warning => "WARNING",
            Self::Debug => "DEBUG",
        }
    }

    /// Returns all levels, in display order.
    #[must_use]
    pub const fn all() -> [Self; 5] {
        [
            Self::Info,
            Self::Success,
            Self::Error,
            Self::Warning,
            Self::Debug,
        ]
    }
}

impl fmt::Display for Level {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Error returned when parsing an invalid level string.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParseLevelError(String);

impl fmt::Display for ParseLevelError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "unknown log level: '{}'", self.0)
    }
}

impl std::error::Error for ParseLevelError {}

impl FromStr for Level {
    type Err = ParseLevelError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "info" => Ok(Self::Info),
            "success" | "ok" => Ok(Self::Success),
            "error" | "err" => Ok(Self::Error),
            "warning" | "warn" => Ok(Self::Warning),
            "debug" => Ok(Self::Debug),
            _ => Err(ParseLevelError(s.to_string())),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn level_display() {
        assert_eq!(Level::Info.to_string(), "INFO");
        assert_eq!(Level::Success.to_string(), "SUCCESS");
        assert_eq!(Level::Error.to_string(), "ERROR");
        assert_eq!(Level::Warning.to_string(), "WARNING");
        assert_eq!(Level::Debug.to_string(), "DEBUG");
    }

    #[test]
    fn level_from_str() {
        assert_eq!("info".parse::<Level>().unwrap(), Level::Info);
        assert_eq!("SUCCESS".parse::<Level>().unwrap(), Level::Success);
        assert_eq!("warn".parse::<Level>().unwrap(), Level::Warning);
        assert_eq!("err".parse::<Level>().unwrap(), Level::Error);
    }

    #[test]
    fn level_from_str_invalid() {
        assert!("fatal".parse::<Level>().is_err());
    }

    #[test]
    fn level_default() {
        assert_eq!(Level::default(), Level::Info);
    }
}
