//! GitHub Actions adapter tests

use std::collections::HashMap;
use std::fs;
use std::io::Write;

use secrecy::ExposeSecret;
use tempfile::NamedTempFile;

use vercel_purge::app::actions::{ActionInputs, ActionsReporter};
use vercel_purge::app::options::PurgeOptions;
use vercel_purge::errors::PurgeError;
use vercel_purge::purge::reporter::Reporter;

fn env(pairs: &[(&str, &str)]) -> HashMap<String, String> {
    pairs
        .iter()
        .map(|(k, v)| (k.to_string(), v.to_string()))
        .collect()
}

fn event_file(payload: &str) -> NamedTempFile {
    let mut file = NamedTempFile::new().unwrap();
    file.write_all(payload.as_bytes()).unwrap();
    file
}

#[test]
fn test_resolve_from_inputs() {
    let vars = env(&[
        ("GITHUB_EVENT_NAME", "delete"),
        ("INPUT_TARGET-BRANCH", "feature/x"),
        ("INPUT_VERCEL-TOKEN", "tok"),
        ("INPUT_VERCEL-PROJECT-ID", "prj_1"),
    ]);

    let inputs = ActionInputs::resolve(|k| vars.get(k).cloned()).unwrap();

    assert_eq!(inputs.target_branch, "feature/x");
    assert_eq!(inputs.token.expose_secret(), "tok");
    assert_eq!(inputs.project_id, "prj_1");

    let options = inputs.into_options(PurgeOptions::default());
    assert_eq!(options.target_branch, "feature/x");
    assert_eq!(options.page_size, 100);
}

#[test]
fn test_branch_defaults_to_event_payload() {
    let payload = event_file(r#"{"ref": "feature/y", "ref_type": "branch", "pusher_type": "user"}"#);
    let path = payload.path().to_string_lossy().to_string();
    let vars = env(&[
        ("GITHUB_EVENT_NAME", "delete"),
        ("GITHUB_EVENT_PATH", path.as_str()),
        ("INPUT_VERCEL_TOKEN", "tok"),
    ]);

    let inputs = ActionInputs::resolve(|k| vars.get(k).cloned()).unwrap();

    assert_eq!(inputs.target_branch, "feature/y");
    assert_eq!(inputs.project_id, "");
}

#[test]
fn test_rejects_other_events() {
    let vars = env(&[
        ("GITHUB_EVENT_NAME", "push"),
        ("INPUT_TARGET-BRANCH", "feature/x"),
        ("INPUT_VERCEL-TOKEN", "tok"),
    ]);

    let err = ActionInputs::resolve(|k| vars.get(k).cloned()).unwrap_err();

    match err {
        PurgeError::WrongTriggerEvent { expected, actual } => {
            assert_eq!(expected, "delete");
            assert_eq!(actual, "push");
        }
        other => panic!("unexpected error: {other}"),
    }
}

#[test]
fn test_rejects_tag_deletion() {
    let payload = event_file(r#"{"ref": "v1.0.0", "ref_type": "tag"}"#);
    let path = payload.path().to_string_lossy().to_string();
    let vars = env(&[
        ("GITHUB_EVENT_NAME", "delete"),
        ("GITHUB_EVENT_PATH", path.as_str()),
        ("INPUT_VERCEL-TOKEN", "tok"),
    ]);

    let err = ActionInputs::resolve(|k| vars.get(k).cloned()).unwrap_err();

    assert!(matches!(err, PurgeError::WrongTriggerEvent { .. }));
}

#[test]
fn test_token_is_required() {
    let vars = env(&[
        ("GITHUB_EVENT_NAME", "delete"),
        ("INPUT_TARGET-BRANCH", "feature/x"),
    ]);

    let err = ActionInputs::resolve(|k| vars.get(k).cloned()).unwrap_err();

    assert!(matches!(err, PurgeError::ConfigError(_)));
}

#[test]
fn test_reporter_writes_commands_and_output() {
    let log = NamedTempFile::new().unwrap();
    let output = NamedTempFile::new().unwrap();
    let reporter = ActionsReporter::new(
        Box::new(log.reopen().unwrap()),
        Some(output.path().to_path_buf()),
    );

    reporter.info("Target branch is feature/x.");
    reporter.error("Status code is 500\nwhen deleting");
    reporter.success(&["a".to_string(), "b".to_string()]);
    reporter.fail(&PurgeError::DeletionFailed {
        ids: vec!["c".to_string()],
    });

    let lines = fs::read_to_string(log.path()).unwrap();
    let lines: Vec<&str> = lines.lines().collect();
    assert_eq!(lines[0], "Target branch is feature/x.");
    assert_eq!(lines[1], "::error::Status code is 500%0Awhen deleting");
    assert_eq!(
        lines[2],
        "Success! There are all deleted deployments which ids are a,b"
    );
    assert!(lines[3].starts_with("::error::There are some deployments"));
    assert!(lines[3].ends_with("ids are c"));

    let outputs = fs::read_to_string(output.path()).unwrap();
    assert_eq!(outputs, "deleted-ids=a,b\n");
}
