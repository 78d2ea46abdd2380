//! Concurrency tests: cross-thread ordering and sequence-number integrity.

use std::fs;
use std::path::{Path, PathBuf};
use std::sync::Arc;
use std::thread;
use std::time::Duration;

use regex::Regex;
use tempfile::TempDir;
use tracelog::{Destination, Session};

fn single_log_file(dir: &Path) -> PathBuf {
    let mut entries: Vec<_> = fs::read_dir(dir)
        .unwrap()
        .map(|entry| entry.unwrap().path())
        .collect();
    assert_eq!(entries.len(), 1, "expected exactly one log file");
    entries.pop().unwrap()
}

#[test]
fn two_threads_write_in_order() {
    let tmp = TempDir::new().unwrap();
    let dir = tmp.path().join("logs");
    let session = Arc::new(
        Session::builder()
            .log_dir(dir.to_string_lossy())
            .project("threads")
            .build(),
    );
    session.init().unwrap();

    let first = {
        let session = Arc::clone(&session);
        thread::spawn(move || {
            tracelog::info!(session, Destination::FileAndConsole, "test");
            thread::sleep(Duration::from_millis(200));
        })
    };
    let second = {
        let session = Arc::clone(&session);
        thread::spawn(move || {
            thread::sleep(Duration::from_millis(400));
            tracelog::debug!(session, Destination::FileAndConsole, "test");
        })
    };
    first.join().unwrap();
    second.join().unwrap();
    session.exit();

    let content = fs::read_to_string(single_log_file(&dir)).unwrap();
    let lines: Vec<&str> = content.lines().collect();
    assert_eq!(lines.len(), 5, "unexpected file contents: {content:?}");

    let info = Regex::new(r"-INFO\]\t\[[^\]]+\]\ttest$").unwrap();
    let debug = Regex::new(r"-DEBUG\]\t\[[^\]]+\]\ttest$").unwrap();
    assert!(info.is_match(lines[2]), "line 3 is not the INFO record: {:?}", lines[2]);
    assert!(debug.is_match(lines[3]), "line 4 is not the DEBUG record: {:?}", lines[3]);
}

#[test]
fn concurrent_sequence_numbers_are_gap_free() {
    const THREADS: usize = 8;

    let tmp = TempDir::new().unwrap();
    let dir = tmp.path().join("logs");
    fs::create_dir_all(&dir).unwrap();
    let session = Arc::new(
        Session::builder()
            .log_dir(dir.to_string_lossy())
            .project("seq")
            .build(),
    );
    session.init().unwrap();

    let handles: Vec<_> = (0..THREADS)
        .map(|worker| {
            let session = Arc::clone(&session);
            thread::spawn(move || {
                tracelog::info!(session, Destination::FileOnly, "worker ", worker);
            })
        })
        .collect();
    for handle in handles {
        handle.join().unwrap();
    }
    session.exit();

    let content = fs::read_to_string(single_log_file(&dir)).unwrap();
    let lines: Vec<&str> = content.lines().collect();
    assert_eq!(lines.len(), THREADS + 2);

    // File order equals lock-acquisition order, so the persisted sequence
    // numbers must be exactly 0..THREADS in file order.
    let re = Regex::new(r"^\[(\d+)-").unwrap();
    let seqs: Vec<u64> = lines[1..=THREADS]
        .iter()
        .map(|line| re.captures(line).unwrap()[1].parse().unwrap())
        .collect();
    assert_eq!(seqs, (0..THREADS as u64).collect::<Vec<_>>());
}
