//! The log session: lifecycle state machine, record dispatch, and the lock
//! discipline around the shared file handle and sequence counter.
//!
//! A session is an explicit object rather than a process-wide global, so
//! tests and embedders can run isolated sessions side by side.

mod builder;
mod config;

pub use builder::SessionBuilder;
pub use config::{
    CONSOLE_TEMPLATE, EXTRA_TEMPLATE, FILE_TEMPLATE, LOG_DIR, PROJECT, SessionConfig, Templates,
};

use std::fmt::Display;
use std::fs;
use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::{Mutex, MutexGuard, PoisonError};

use crate::config::Config;
use crate::error::Error;
use crate::filter::{self, Destination};
use crate::fmt;
use crate::level::Level;
use crate::output::console;
use crate::output::file::{LogFile, resolve_dir};
use crate::output::{ExtraSink, LogRecord};

/// Everything the session lock guards: the file handle, the open flag, and
/// the extra-sink list. This is the only lock in the crate.
#[derive(Default)]
struct Shared {
    file: Option<LogFile>,
    sinks: Vec<ExtraSink>,
    open: bool,
}

/// A logging session.
///
/// Lifecycle: built (uninitialized), opened with [`Session::init`], closed
/// with [`Session::exit`]. Log calls outside the open window are reported as
/// console-only records, never raised; a logging subsystem failing must not
/// crash its host. All log operations take `&self` and are safe to call from
/// any number of threads.
pub struct Session {
    config: SessionConfig,
    shared: Mutex<Shared>,
    /// Mutated only while `shared` is held; read without the lock when a
    /// console-only rendering needs `%n`.
    counter: AtomicU64,
}

impl Session {
    /// Returns a builder with full-verbosity defaults.
    #[must_use]
    pub fn builder() -> SessionBuilder {
        SessionBuilder::new()
    }

    /// Creates a session with default configuration.
    #[must_use]
    pub fn new() -> Self {
        SessionBuilder::new().build()
    }

    pub(crate) fn with_config(config: SessionConfig) -> Self {
        Self {
            config,
            shared: Mutex::new(Shared::default()),
            counter: AtomicU64::new(0),
        }
    }

    /// Builds a session from a loaded [`Config`], falling back to defaults
    /// for values the file leaves unset or malformed.
    #[must_use]
    pub fn from_config(config: &Config) -> Self {
        Self::builder()
            .mode(config.parse_mode())
            .levels(config.parse_levels())
            .show_trace(config.general.show_trace)
            .log_dir(config.file.dir.clone())
            .project(config.file.project.clone())
            .console_template(&config.templates.console)
            .file_template(&config.templates.file)
            .extra_template(&config.templates.extra)
            .build()
    }

    /// Returns the session configuration.
    #[must_use]
    pub const fn config(&self) -> &SessionConfig {
        &self.config
    }

    /// True between a successful `init` and the matching `exit`.
    #[must_use]
    pub fn is_open(&self) -> bool {
        self.shared().open
    }

    /// Number of registered extra sinks.
    #[must_use]
    pub fn sink_count(&self) -> usize {
        self.shared().sinks.len()
    }

    /// Opens the session: creates the log directory if absent, opens a fresh
    /// session file named `<project>_log_<date>.log`, resets the sequence
    /// counter, and writes the session-start record (file-only, exempt from
    /// filtering and from the counter). A newly created directory is
    /// additionally announced with a warning record.
    ///
    /// Calling `init` on an open session reports a console-only warning and
    /// changes nothing. After `exit`, a fresh `init` reopens a new file.
    ///
    /// # Errors
    /// Returns the I/O error when the session file cannot be opened; without
    /// it no record could ever persist, so this is fatal to the session.
    /// Directory-creation failure is only a warning and the open is still
    /// attempted.
    pub fn init(&self) -> Result<(), Error> {
        let mut shared = self.shared();
        if shared.open {
            drop(shared);
            self.report(Level::Warning, "log session already initialized");
            return Ok(());
        }

        let dir = resolve_dir(&self.config.log_dir);
        let mut dir_created = false;
        if !dir.exists() {
            match fs::create_dir_all(&dir) {
                Ok(()) => dir_created = true,
                // Console-only reports never take the session lock, so
                // reporting while holding it is fine.
                Err(e) => self.report(
                    Level::Warning,
                    &format!("could not create log directory {}: {e}", dir.display()),
                ),
            }
        }

        shared.file = Some(LogFile::create(&dir, &self.config.project)?);
        shared.open = true;
        self.counter.store(0, Ordering::Relaxed);
        self.session_record(&mut shared, "session start");
        drop(shared);

        if dir_created {
            self.log(
                Level::Warning,
                Destination::FileAndConsole,
                module_path!(),
                &[&"log directory created"],
            );
        }
        Ok(())
    }

    /// Closes the session: writes the session-end record (file-only,
    /// uncounted) and closes the file. Registered extra sinks are kept for a
    /// later re-`init`.
    ///
    /// Calling `exit` on a session that is not open reports a console-only
    /// error and performs no I/O.
    pub fn exit(&self) {
        let mut shared = self.shared();
        if !shared.open {
            drop(shared);
            self.report(Level::Error, "init the log session before exit");
            return;
        }
        self.session_record(&mut shared, "session end");
        shared.file = None;
        shared.open = false;
    }

    /// Registers an externally-owned extra sink. Sinks receive records in
    /// registration order, survive `exit` and re-`init`, and are never
    /// closed by the session.
    pub fn add_sink(&self, sink: ExtraSink) {
        self.shared().sinks.push(sink);
    }

    /// Concatenates `parts` into one message body and routes the record per
    /// the session mode and the call's destination hint. Fire-and-forget:
    /// never returns an error to the caller.
    pub fn log(&self, level: Level, dest: Destination, trace: &str, parts: &[&dyn Display]) {
        self.dispatch(level, dest, trace, fmt::concat(parts));
    }

    /// Logs at [`Level::Info`].
    pub fn info(&self, dest: Destination, trace: &str, parts: &[&dyn Display]) {
        self.log(Level::Info, dest, trace, parts);
    }

    /// Logs at [`Level::Success`].
    pub fn success(&self, dest: Destination, trace: &str, parts: &[&dyn Display]) {
        self.log(Level::Success, dest, trace, parts);
    }

    /// Logs at [`Level::Error`].
    pub fn error(&self, dest: Destination, trace: &str, parts: &[&dyn Display]) {
        self.log(Level::Error, dest, trace, parts);
    }

    /// Logs at [`Level::Warning`].
    pub fn warning(&self, dest: Destination, trace: &str, parts: &[&dyn Display]) {
        self.log(Level::Warning, dest, trace, parts);
    }

    /// Logs at [`Level::Debug`].
    pub fn debug(&self, dest: Destination, trace: &str, parts: &[&dyn Display]) {
        self.log(Level::Debug, dest, trace, parts);
    }

    /// Core routing. The console write happens outside the session lock and
    /// may interleave with other threads; the file and extra-sink writes of
    /// one record happen under a single lock acquisition, so file order
    /// equals lock-acquisition order and `%n` agrees between the file and
    /// extra renderings of the same record.
    fn dispatch(&self, level: Level, dest: Destination, trace: &str, mut content: String) {
        while content.ends_with('\n') {
            content.pop();
        }
        content.push('\n');

        let config = &self.config;
        let mut record = LogRecord {
            sequence: self.counter.load(Ordering::Relaxed),
            level,
            trace: if config.show_trace {
                trace.to_string()
            } else {
                String::new()
            },
            content,
        };

        if filter::console_enabled(dest, config.mode, level, &config.levels) {
            console::write(&config.templates.console.render(&record), level);
        }

        if filter::file_enabled(dest, config.mode) {
            let mut shared = self.shared();
            record.sequence = self.counter.load(Ordering::Relaxed);
            let line = config.templates.file.render(&record);
            let written = if let Some(file) = shared.file.as_mut() {
                file.append(&line).is_ok()
            } else {
                if !shared.open {
                    self.report(Level::Error, "init the log session before logging");
                }
                false
            };

            if filter::extra_enabled(dest, config.mode) {
                let line = config.templates.extra.render(&record);
                for sink in &shared.sinks {
                    // One failing sink must not block the ones after it.
                    let mut sink = sink.lock().unwrap_or_else(PoisonError::into_inner);
                    let _ = sink.write_all(line.as_bytes());
                    let _ = sink.flush();
                }
            }

            // Counts only writes that found the file open and succeeded, so
            // sequence numbers of persisted records stay gap-free.
            if written {
                self.counter.store(record.sequence + 1, Ordering::Relaxed);
            }
        }
    }

    /// Writes the session start/end record directly to the file, bypassing
    /// the filter gates and the sequence counter.
    fn session_record(&self, shared: &mut Shared, content: &str) {
        let record = LogRecord {
            sequence: self.counter.load(Ordering::Relaxed),
            level: Level::Info,
            trace: if self.config.show_trace {
                module_path!().to_string()
            } else {
                String::new()
            },
            content: format!("{content}\n"),
        };
        if let Some(file) = shared.file.as_mut() {
            let _ = file.append(&self.config.templates.file.render(&record));
        }
    }

    /// Reports a configuration mistake (double init, exit before init, log
    /// call outside the open window) as a console-only record.
    fn report(&self, level: Level, message: &str) {
        self.log(level, Destination::ConsoleOnly, module_path!(), &[&message]);
    }

    fn shared(&self) -> MutexGuard<'_, Shared> {
        // Recover from poisoning; a panicked holder must not disable logging
        // for every other thread.
        self.shared.lock().unwrap_or_else(PoisonError::into_inner)
    }
}

impl Default for Session {
    fn default() -> Self {
        Self::new()
    }
}
