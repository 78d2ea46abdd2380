//! The concrete sinks a rendered record can reach: the console, the session
//! log file, and externally-owned extra streams.

pub(crate) mod console;
pub(crate) mod file;

use std::io::Write;
use std::sync::{Arc, Mutex};

use crate::level::Level;

/// One log call's worth of data, created per call and rendered once per
/// applicable sink. Timestamps are sampled by the template engine at render
/// time rather than stored here.
#[derive(Debug, Clone)]
pub struct LogRecord {
    /// Sequence number rendered for `%n`; assigned under the session lock
    /// for file-bound records.
    pub sequence: u64,
    /// Severity.
    pub level: Level,
    /// Call-site identifier rendered for `%T`; empty when the session hides
    /// traces.
    pub trace: String,
    /// Message body, non-empty and ending in exactly one newline.
    pub content: String,
}

/// An externally-owned writable stream registered with a session. The session
/// shares the handle and never closes it; callers keep their own clone to
/// inspect or reuse the stream.
pub type ExtraSink = Arc<Mutex<dyn Write + Send>>;
