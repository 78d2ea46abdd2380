//! Session configuration, fixed when a session is built.

use std::collections::HashSet;

use crate::filter::Destination;
use crate::fmt::FormatTemplate;
use crate::level::Level;

/// Default console template: `[trace]<TAB>content`.
pub const CONSOLE_TEMPLATE: &str = "[%T]\t%C";
/// Default file template: `[seq-clock-level]<TAB>[trace]<TAB>content`.
pub const FILE_TEMPLATE: &str = "[%n-%h-%t]\t[%T]\t%C";
/// Default extra-sink template: `[seq-level]<TAB>[trace]<TAB>content`.
pub const EXTRA_TEMPLATE: &str = "[%n-%t]\t[%T]\t%C";

/// Default log directory, relative to the working directory.
pub const LOG_DIR: &str = "logs";
/// Default project name used in log file names.
pub const PROJECT: &str = "project";

/// One rendering template per sink family.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Templates {
    /// Template for console lines.
    pub console: FormatTemplate,
    /// Template for file lines.
    pub file: FormatTemplate,
    /// Template for extra-sink lines.
    pub extra: FormatTemplate,
}

impl Default for Templates {
    fn default() -> Self {
        Self {
            console: FormatTemplate::parse(CONSOLE_TEMPLATE),
            file: FormatTemplate::parse(FILE_TEMPLATE),
            extra: FormatTemplate::parse(EXTRA_TEMPLATE),
        }
    }
}

/// Immutable configuration of a [`Session`](crate::Session).
///
/// Defaults to full verbosity: every sink family eligible, all five levels
/// enabled, traces shown.
#[derive(Debug, Clone)]
pub struct SessionConfig {
    /// Session-wide verbosity mode, combined with each call's hint.
    pub mode: Destination,
    /// Levels eligible for console output.
    pub levels: HashSet<Level>,
    /// When false, `%T` renders as the empty string.
    pub show_trace: bool,
    /// Directory the session file is created in; `~` is expanded.
    pub log_dir: String,
    /// Project name prefixed to the session file name.
    pub project: String,
    /// Per-sink rendering templates.
    pub templates: Templates,
}

impl Default for SessionConfig {
    fn default() -> Self {
        Self {
            mode: Destination::FileAndConsole,
            levels: Level::all().into_iter().collect(),
            show_trace: true,
            log_dir: LOG_DIR.to_string(),
            project: PROJECT.to_string(),
            templates: Templates::default(),
        }
    }
}
