//! `tracelog` - Embeddable session-scoped logging.
//!
//! Routes leveled, formatted messages to the console, one log file per
//! session, and any number of extra output streams, under a single session
//! configuration:
//! - Directive templates (`%T`, `%C`, `%n`, `%t`, time fields) per sink family
//! - Per-call destination hints combined with a session-wide verbosity mode
//! - Call-site traces captured by the logging macros
//! - Safe concurrent use from multiple threads; file writes are serialized
//!   and carry gap-free sequence numbers
//!
//! # Example
//!
//! ```no_run
//! use tracelog::{Destination, Session};
//!
//! let session = Session::builder()
//!     .log_dir("logs")
//!     .project("demo")
//!     .build();
//! session.init().expect("open log file");
//!
//! tracelog::info!(session, Destination::FileAndConsole, "listening on port ", 8080);
//! tracelog::error!(session, Destination::ConsoleOnly, "connection refused");
//!
//! session.exit();
//! ```
//!
//! Log calls never return errors; failures are reported as console-only
//! records or swallowed. Only [`Session::init`] and config loading are
//! fallible.

pub mod config;
mod error;
pub mod filter;
pub mod fmt;
pub mod level;
mod macros;
pub mod output;
pub mod session;

// Re-exports for convenience
pub use config::Config;
pub use error::Error;
pub use filter::Destination;
pub use fmt::{Color, FormatTemplate};
pub use level::Level;
pub use output::{ExtraSink, LogRecord};
pub use session::{Session, SessionBuilder, SessionConfig};
