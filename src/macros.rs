//! Per-level logging macros.
//!
//! The macros capture the call site as `module:line` at the expansion point
//! and accept any number of display-able message parts, concatenated without
//! a separator:
//!
//! ```no_run
//! # let session = tracelog::Session::new();
//! tracelog::info!(session, tracelog::Destination::FileAndConsole, "port ", 8080, " ready");
//! ```

/// Expands to the `module:line` call-site label.
#[doc(hidden)]
#[macro_export]
macro_rules! callsite {
    () => {
        concat!(module_path!(), ":", line!())
    };
}

/// Logs at [`Level::Info`](crate::Level::Info).
#[macro_export]
macro_rules! info {
    ($session:expr, $dest:expr, $($arg:expr),+ $(,)?) => {
        ($session).info($dest, $crate::callsite!(), &[$(&$arg as &dyn ::core::fmt::Display),+])
    };
}

/// Logs at [`Level::Success`](crate::Level::Success).
#[macro_export]
macro_rules! success {
    ($session:expr, $dest:expr, $($arg:expr),+ $(,)?) => {
        ($session).success($dest, $crate::callsite!(), &[$(&$arg as &dyn ::core::fmt::Display),+])
    };
}

/// Logs at [`Level::Error`](crate::Level::Error).
#[macro_export]
macro_rules! error {
    ($session:expr, $dest:expr, $($arg:expr),+ $(,)?) => {
        ($session).error($dest, $crate::callsite!(), &[$(&$arg as &dyn ::core::fmt::Display),+])
    };
}

/// Logs at [`Level::Warning`](crate::Level::Warning).
#[macro_export]
macro_rules! warning {
    ($session:expr, $dest:expr, $($arg:expr),+ $(,)?) => {
        ($session).warning($dest, $crate::callsite!(), &[$(&$arg as &dyn ::core::fmt::Display),+])
    };
}

/// Logs at [`Level::Debug`](crate::Level::Debug).
#[macro_export]
macro_rules! debug {
    ($session:expr, $dest:expr, $($arg:expr),+ $(,)?) => {
        ($session).debug($dest, $crate::callsite!(), &[$(&$arg as &dyn ::core::fmt::Display),+])
    };
}
