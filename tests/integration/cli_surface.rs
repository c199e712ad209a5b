//! Integration tests for CLI routing and configuration

use pathwalk::cli::{Commands, RunContext};
use pathwalk::error::ApiError;
use serde_json::json;
use std::fs;
use std::path::PathBuf;
use tempfile::TempDir;

fn write_demo_literal(dir: &TempDir) -> PathBuf {
    let literal = json!({
        "home": {
            "_META_TYPE": "dir",
            "docs": {
                "_META_TYPE": "dir",
                "readme.txt": {
                    "_META_TYPE": "file",
                    "_META_FILE_CONTENTS": "hello from docs"
                },
                "notes.txt": {
                    "_META_TYPE": "file",
                    "_META_FILE_CONTENTS": "scratch"
                }
            }
        }
    });
    let path = dir.path().join("fs.json");
    fs::write(&path, literal.to_string()).unwrap();
    path
}

#[tokio::test]
async fn test_ls_json_listing() {
    let dir = TempDir::new().unwrap();
    let literal = write_demo_literal(&dir);
    let ctx = RunContext::new(Some(literal), "/", dir.path(), None).unwrap();

    let out = ctx
        .execute(&Commands::Ls {
            path: Some("/home/docs".to_string()),
            format: "json".to_string(),
        })
        .await
        .unwrap();

    let rows: serde_json::Value = serde_json::from_str(&out).unwrap();
    assert_eq!(rows[0]["name"], "readme.txt");
    assert_eq!(rows[0]["kind"], "file");
    assert_eq!(rows[1]["name"], "notes.txt");
}

#[tokio::test]
async fn test_resolve_json_shape() {
    let dir = TempDir::new().unwrap();
    let literal = write_demo_literal(&dir);
    let ctx = RunContext::new(Some(literal), "/", dir.path(), None).unwrap();

    let out = ctx
        .execute(&Commands::Resolve {
            path: "/home/docs/readme.txt".to_string(),
            format: "json".to_string(),
        })
        .await
        .unwrap();

    let node: serde_json::Value = serde_json::from_str(&out).unwrap();
    assert_eq!(node["path"], "/home/docs/readme.txt");
    assert_eq!(node["kind"], "file");
    assert_eq!(node["contents"], "hello from docs");
}

#[tokio::test]
async fn test_complete_command() {
    let dir = TempDir::new().unwrap();
    let literal = write_demo_literal(&dir);
    let ctx = RunContext::new(Some(literal), "/home/docs", dir.path(), None).unwrap();

    let out = ctx
        .execute(&Commands::Complete {
            partial: "re".to_string(),
        })
        .await
        .unwrap();
    assert_eq!(out, "readme.txt");

    let out = ctx
        .execute(&Commands::Complete {
            partial: "../docs/n".to_string(),
        })
        .await
        .unwrap();
    assert_eq!(out, "notes.txt");
}

#[tokio::test]
async fn test_tree_command_renders_subtree() {
    let dir = TempDir::new().unwrap();
    let literal = write_demo_literal(&dir);
    let ctx = RunContext::new(Some(literal), "/", dir.path(), None).unwrap();

    let out = ctx
        .execute(&Commands::Tree {
            path: Some("/home".to_string()),
        })
        .await
        .unwrap();

    let lines: Vec<&str> = out.lines().collect();
    assert_eq!(lines[0], "home/");
    assert_eq!(lines[1], "  docs/");
    assert_eq!(lines[2], "    readme.txt");
}

#[tokio::test]
async fn test_config_file_supplies_literal_and_meta_keys() {
    let dir = TempDir::new().unwrap();

    let literal = json!({
        "inbox": {
            "@type": "dir",
            "hello.txt": { "@type": "file", "@body": "hey" }
        }
    });
    let literal_path = dir.path().join("mail.json");
    fs::write(&literal_path, literal.to_string()).unwrap();

    let config_path = dir.path().join("pathwalk.toml");
    fs::write(
        &config_path,
        format!(
            r#"
[tree]
literal = "{}"
meta_prefix = "@"
type_key = "@type"
contents_key = "@body"
"#,
            literal_path.display()
        ),
    )
    .unwrap();

    let ctx = RunContext::new(None, "/", dir.path(), Some(config_path)).unwrap();
    let out = ctx
        .execute(&Commands::Cat {
            path: "/inbox/hello.txt".to_string(),
        })
        .await
        .unwrap();
    assert_eq!(out, "hey");
}

#[test]
fn test_missing_literal_is_a_config_error() {
    let dir = TempDir::new().unwrap();
    let err = RunContext::new(None, "/", dir.path(), None).unwrap_err();
    assert!(matches!(err, ApiError::ConfigError(_)));
}

#[test]
fn test_absent_literal_file_is_a_tree_error() {
    let dir = TempDir::new().unwrap();
    let missing = dir.path().join("missing.json");
    let err = RunContext::new(Some(missing), "/", dir.path(), None).unwrap_err();
    assert!(matches!(err, ApiError::TreeError(_)));
}
