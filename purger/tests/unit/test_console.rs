//! Console reporter tests

use std::fs;

use tempfile::NamedTempFile;

use vercel_purge::app::console::ConsoleReporter;
use vercel_purge::errors::PurgeError;
use vercel_purge::purge::reporter::Reporter;

fn reporter() -> (ConsoleReporter, NamedTempFile, NamedTempFile) {
    let out = NamedTempFile::new().unwrap();
    let err = NamedTempFile::new().unwrap();
    let reporter = ConsoleReporter::new(
        Box::new(out.reopen().unwrap()),
        Box::new(err.reopen().unwrap()),
    );
    (reporter, out, err)
}

#[test]
fn test_success_printed_once_on_stdout() {
    let (reporter, out, err) = reporter();

    reporter.success(&["a".to_string(), "b".to_string()]);

    let printed = fs::read_to_string(out.path()).unwrap();
    assert_eq!(printed.lines().count(), 1);
    assert!(printed.contains("Success! There are all deleted deployments which ids are a,b"));
    assert!(fs::read_to_string(err.path()).unwrap().is_empty());
}

#[test]
fn test_failure_printed_once_on_stderr() {
    let (reporter, out, err) = reporter();

    reporter.fail(&PurgeError::DeletionFailed {
        ids: vec!["b".to_string()],
    });

    let printed = fs::read_to_string(err.path()).unwrap();
    assert_eq!(printed.lines().count(), 2);
    assert_eq!(printed.matches("ids are b").count(), 1);
    assert!(fs::read_to_string(out.path()).unwrap().is_empty());
}
