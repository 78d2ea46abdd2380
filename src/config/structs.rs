//! Serde schema for the optional TOML configuration file.
//!
//! Every field defaults, so an empty file (or no file at all) yields a
//! session identical to `SessionConfig::default()`.

use serde::Deserialize;

use crate::session;

/// `[general]` — verbosity and trace display.
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct GeneralConfig {
    /// Verbosity mode: `file_only`, `console_only`, or `file_and_console`.
    pub mode: String,
    /// Console-enabled levels, lowercase names.
    pub levels: Vec<String>,
    /// Whether `%T` renders the call-site trace.
    pub show_trace: bool,
}

impl Default for GeneralConfig {
    fn default() -> Self {
        Self {
            mode: "file_and_console".to_string(),
            levels: vec![
                "info".to_string(),
                "success".to_string(),
                "error".to_string(),
                "warning".to_string(),
                "debug".to_string(),
            ],
            show_trace: true,
        }
    }
}

/// `[file]` — where the session file lives.
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct FileConfig {
    /// Log directory; `~` is expanded.
    pub dir: String,
    /// Project name prefixed to the file name.
    pub project: String,
}

impl Default for FileConfig {
    fn default() -> Self {
        Self {
            dir: session::LOG_DIR.to_string(),
            project: session::PROJECT.to_string(),
        }
    }
}

/// `[templates]` — one directive template per sink family.
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct TemplatesConfig {
    /// Console template.
    pub console: String,
    /// File template.
    pub file: String,
    /// Extra-sink template.
    pub extra: String,
}

impl Default for TemplatesConfig {
    fn default() -> Self {
        Self {
            console: session::CONSOLE_TEMPLATE.to_string(),
            file: session::FILE_TEMPLATE.to_string(),
            extra: session::EXTRA_TEMPLATE.to_string(),
        }
    }
}
