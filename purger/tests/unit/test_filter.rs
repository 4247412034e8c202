//! Filter unit tests

use serde_json::json;
use vercel_purge::models::deployment::Deployment;
use vercel_purge::purge::filter::{select_for_deletion, should_delete};

fn deployment(uid: &str, branch: Option<&str>, state: &str) -> Deployment {
    let mut value = json!({
        "uid": uid,
        "name": "web",
        "url": format!("{uid}.vercel.app"),
        "created": 1_700_000_000_000_i64,
        "state": state,
        "type": "LAMBDAS",
        "creator": { "uid": "usr_1" },
        "inspectorUrl": null,
    });
    if let Some(branch) = branch {
        value["meta"] = json!({ "githubCommitRef": branch, "githubCommitSha": "abc123" });
    }
    serde_json::from_value(value).unwrap()
}

#[test]
fn test_matches_branch_and_state() {
    let deployments = vec![
        deployment("a", Some("feature/x"), "READY"),
        deployment("b", Some("main"), "READY"),
        deployment("c", Some("feature/x"), "ERROR"),
    ];

    assert_eq!(select_for_deletion(&deployments, "feature/x"), vec!["a"]);
}

#[test]
fn test_all_active_states_match() {
    let deployments = vec![
        deployment("building", Some("dev"), "BUILDING"),
        deployment("init", Some("dev"), "INITIALIZING"),
        deployment("queued", Some("dev"), "QUEUED"),
        deployment("ready", Some("dev"), "READY"),
        deployment("error", Some("dev"), "ERROR"),
        deployment("canceled", Some("dev"), "CANCELED"),
    ];

    assert_eq!(
        select_for_deletion(&deployments, "dev"),
        vec!["building", "init", "queued", "ready"]
    );
}

#[test]
fn test_branch_match_is_exact() {
    let deployments = vec![
        deployment("upper", Some("Feature/X"), "READY"),
        deployment("prefix", Some("feature/x-2"), "READY"),
        deployment("suffix", Some("old/feature/x"), "READY"),
        deployment("none", None, "READY"),
    ];

    assert!(select_for_deletion(&deployments, "feature/x").is_empty());
}

#[test]
fn test_missing_state_never_matches() {
    let no_state: Deployment = serde_json::from_value(json!({
        "uid": "legacy",
        "meta": { "githubCommitRef": "feature/x" },
    }))
    .unwrap();

    assert!(!should_delete(&no_state, "feature/x"));
}

#[test]
fn test_selection_is_deterministic_and_ordered() {
    let deployments = vec![
        deployment("z", Some("feature/x"), "QUEUED"),
        deployment("m", Some("feature/x"), "READY"),
        deployment("a", Some("feature/x"), "BUILDING"),
    ];

    let first = select_for_deletion(&deployments, "feature/x");
    let second = select_for_deletion(&deployments, "feature/x");
    assert_eq!(first, vec!["z", "m", "a"]);
    assert_eq!(first, second);
}
