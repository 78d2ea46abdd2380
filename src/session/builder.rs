//! Stepwise construction of a [`Session`].

use super::{Session, SessionConfig};
use crate::filter::Destination;
use crate::fmt::FormatTemplate;
use crate::level::Level;

/// Builder for a [`Session`]. Every setter has a default; `build()` yields an
/// uninitialized session that must be opened with [`Session::init`].
#[derive(Debug, Default)]
pub struct SessionBuilder {
    config: SessionConfig,
}

impl SessionBuilder {
    /// Creates a builder with full-verbosity defaults.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the session-wide verbosity mode.
    #[must_use]
    pub const fn mode(mut self, mode: Destination) -> Self {
        self.config.mode = mode;
        self
    }

    /// Replaces the set of console-enabled levels.
    #[must_use]
    pub fn levels(mut self, levels: impl IntoIterator<Item = Level>) -> Self {
        self.config.levels = levels.into_iter().collect();
        self
    }

    /// Shows or hides the `%T` call-site trace.
    #[must_use]
    pub const fn show_trace(mut self, show: bool) -> Self {
        self.config.show_trace = show;
        self
    }

    /// Sets the log directory. A leading `~` is expanded at `init`.
    #[must_use]
    pub fn log_dir(mut self, dir: impl Into<String>) -> Self {
        self.config.log_dir = dir.into();
        self
    }

    /// Sets the project name used in the session file name.
    #[must_use]
    pub fn project(mut self, project: impl Into<String>) -> Self {
        self.config.project = project.into();
        self
    }

    /// Sets the console rendering template.
    #[must_use]
    pub fn console_template(mut self, template: &str) -> Self {
        self.config.templates.console = FormatTemplate::parse(template);
        self
    }

    /// Sets the file rendering template.
    #[must_use]
    pub fn file_template(mut self, template: &str) -> Self {
        self.config.templates.file = FormatTemplate::parse(template);
        self
    }

    /// Sets the extra-sink rendering template.
    #[must_use]
    pub fn extra_template(mut self, template: &str) -> Self {
        self.config.templates.extra = FormatTemplate::parse(template);
        self
    }

    /// Builds the session. No file is opened until [`Session::init`].
    #[must_use]
    pub fn build(self) -> Session {
        Session::with_config(self.config)
    }
}
