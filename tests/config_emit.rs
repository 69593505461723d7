//! Config emission properties across every profile.

use rfdocs::emit::emit;
use rfdocs::profile::{profiles, resolve, Selector, DOCS_SERVER_ARGS, DOCS_SERVER_COMMAND};
use rfdocs::RfDocsError;
use serde_json::{json, Value};
use std::fs;

fn read_json(path: &std::path::Path) -> Value {
    let text = fs::read_to_string(path).expect("read emitted file");
    serde_json::from_str(&text).expect("emitted file is valid JSON")
}

fn docs_entry() -> Value {
    json!({
        "command": DOCS_SERVER_COMMAND,
        "args": DOCS_SERVER_ARGS,
    })
}

#[test]
fn simplified_profile_scenario() {
    let temp = tempfile::tempdir().expect("create tempdir");
    let root = temp.path().join("proj");

    let path = emit(&resolve("vscode").unwrap(), &root).expect("emit");

    assert_eq!(path, root.join(".vscode").join("mcp.json"));
    assert_eq!(
        read_json(&path),
        serde_json::from_str::<Value>(
            r#"{"docs":{"command":"/usr/bin/docker","args":["exec","-i","rf-docs-mcp","python","/app/rf_docs_server.py"]}}"#
        )
        .unwrap()
    );
}

#[test]
fn standard_profiles_wrap_docs_entry() {
    let temp = tempfile::tempdir().expect("create tempdir");

    for profile in profiles().filter(|p| !p.uses_simplified_schema()) {
        let path = emit(&profile, temp.path()).expect("emit");
        let value = read_json(&path);

        let top = value.as_object().expect("object");
        assert_eq!(top.keys().collect::<Vec<_>>(), vec!["mcpServers"], "{}", profile.selector);

        let servers = top["mcpServers"].as_object().expect("servers object");
        assert_eq!(servers["docs"], docs_entry());

        let expected_keys = if profile.extra_settings.is_some() { 2 } else { 1 };
        assert_eq!(servers.len(), expected_keys, "{}", profile.selector);
    }
}

#[test]
fn extra_fragment_sits_next_to_docs() {
    let temp = tempfile::tempdir().expect("create tempdir");

    let path = emit(&Selector::Cline.profile(), temp.path()).expect("emit");

    assert_eq!(path, temp.path().join(".cline").join("mcp_settings.json"));
    assert_eq!(
        read_json(&path),
        json!({
            "mcpServers": {
                "docs": docs_entry(),
                "rf-mcp": {"command": "uvx", "args": ["rf-mcp"]}
            }
        })
    );
}

#[test]
fn claude_profile_writes_to_project_root() {
    let temp = tempfile::tempdir().expect("create tempdir");

    let path = emit(&Selector::Claude.profile(), temp.path()).expect("emit");

    assert_eq!(path, temp.path().join(".mcp.json"));
}

#[test]
fn emit_is_idempotent() {
    let temp = tempfile::tempdir().expect("create tempdir");

    for profile in profiles() {
        let first_path = emit(&profile, temp.path()).expect("first emit");
        let first = fs::read(&first_path).expect("read first");
        let second_path = emit(&profile, temp.path()).expect("second emit");
        let second = fs::read(&second_path).expect("read second");

        assert_eq!(first_path, second_path);
        assert_eq!(first, second, "{} output changed between runs", profile.selector);
    }
}

#[test]
fn every_profile_lands_in_a_distinct_file() {
    let temp = tempfile::tempdir().expect("create tempdir");

    let mut paths: Vec<_> = profiles()
        .map(|p| emit(&p, temp.path()).expect("emit"))
        .collect();
    paths.sort();
    paths.dedup();

    assert_eq!(paths.len(), Selector::ALL.len());
}

#[test]
fn unknown_selector_has_no_side_effects() {
    let temp = tempfile::tempdir().expect("create tempdir");

    let err = resolve("sublime").unwrap_err();

    assert!(matches!(err, RfDocsError::UnknownSelector { .. }));
    assert!(err.to_string().ends_with("(valid selectors: claude, cursor, vscode, cline)"));
    assert_eq!(fs::read_dir(temp.path()).unwrap().count(), 0);
}
