//! Tests for the sink gating rules.

use std::collections::HashSet;

use tracelog::filter::{console_enabled, extra_enabled, file_enabled};
use tracelog::{Destination, Level};

const DESTS: [Destination; 3] = [
    Destination::FileOnly,
    Destination::ConsoleOnly,
    Destination::FileAndConsole,
];

#[test]
fn file_gate_law() {
    for dest in DESTS {
        for mode in DESTS {
            let expected =
                !(dest == Destination::ConsoleOnly || mode == Destination::ConsoleOnly);
            assert_eq!(file_enabled(dest, mode), expected, "{dest} / {mode}");
        }
    }
}

#[test]
fn console_gate_law() {
    let all: HashSet<Level> = Level::all().into_iter().collect();
    for dest in DESTS {
        for mode in DESTS {
            for level in Level::all() {
                let expected = !(dest == Destination::FileOnly || mode == Destination::FileOnly);
                assert_eq!(
                    console_enabled(dest, mode, level, &all),
                    expected,
                    "{dest} / {mode} / {level}"
                );
            }
        }
    }
}

#[test]
fn console_gate_respects_level_set() {
    let enabled = HashSet::from([Level::Error]);
    let dest = Destination::FileAndConsole;
    let mode = Destination::FileAndConsole;
    assert!(console_enabled(dest, mode, Level::Error, &enabled));
    assert!(!console_enabled(dest, mode, Level::Info, &enabled));
}

#[test]
fn empty_level_set_suppresses_console_only() {
    let empty = HashSet::new();
    for dest in DESTS {
        for mode in DESTS {
            for level in Level::all() {
                assert!(!console_enabled(dest, mode, level, &empty));
            }
            // File and extra gates are unaffected by the level set.
            assert_eq!(
                file_enabled(dest, mode),
                !(dest == Destination::ConsoleOnly || mode == Destination::ConsoleOnly)
            );
        }
    }
}

#[test]
fn extra_gate_is_strict() {
    for dest in DESTS {
        for mode in DESTS {
            let expected = dest == Destination::FileAndConsole
                && mode == Destination::FileAndConsole;
            assert_eq!(extra_enabled(dest, mode), expected, "{dest} / {mode}");
        }
    }
}
