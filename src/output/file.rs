//! The per-session log file.

use std::fs::File;
use std::io::{self, Write};
use std::path::{Path, PathBuf};

use crate::error::Error;
use crate::fmt;

/// The session's log file handle. One is created per `init` and dropped on
/// `exit`; the file name carries the session's start date.
#[derive(Debug)]
pub(crate) struct LogFile {
    inner: File,
}

impl LogFile {
    /// Creates `<dir>/<project>_log_<date>.log`, truncating any file that
    /// already has that name.
    pub(crate) fn create(dir: &Path, project: &str) -> Result<Self, Error> {
        let path = dir.join(format!("{project}_log_{}.log", fmt::current_date()));
        Ok(Self {
            inner: File::create(path)?,
        })
    }

    /// Appends one rendered line and flushes, so every record is durable up
    /// to the OS page cache before the call returns.
    pub(crate) fn append(&mut self, text: &str) -> io::Result<()> {
        self.inner.write_all(text.as_bytes())?;
        self.inner.flush()
    }
}

/// Expands a configured log directory, resolving a leading `~`.
pub(crate) fn resolve_dir(dir: &str) -> PathBuf {
    PathBuf::from(shellexpand::tilde(dir).as_ref())
}
