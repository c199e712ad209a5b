//! Integration tests for the async node source boundary

use pathwalk::api::{KindTag, NodeSource, TreeSource};
use pathwalk::tree::builder::Tree;
use serde_json::json;

fn demo_source() -> TreeSource {
    TreeSource::new(Tree::from_literal(&json!({
        "srv": {
            "_META_TYPE": "dir",
            "www": {
                "_META_TYPE": "dir",
                "index.html": {
                    "_META_TYPE": "file",
                    "_META_FILE_CONTENTS": "<html></html>"
                }
            }
        }
    })))
}

#[tokio::test]
async fn test_boundary_resolution_and_inspection() {
    let source = demo_source();
    let root = source.root().await;

    let index = source.resolve(root, "/srv/www/index.html").await.unwrap();
    let snapshot = source.get(index).await.unwrap();

    assert_eq!(snapshot.kind, KindTag::File);
    assert_eq!(snapshot.name, "index.html");
    assert_eq!(snapshot.contents.as_deref(), Some("<html></html>"));
}

#[tokio::test]
async fn test_boundary_absence_is_a_value_not_a_panic() {
    let source = demo_source();
    let root = source.root().await;

    assert!(source.resolve(root, "/srv/missing").await.is_none());
    assert!(source.resolve(root, "..").await.is_none());
}

#[tokio::test]
async fn test_snapshot_children_match_children_call() {
    let source = demo_source();
    let root = source.root().await;
    let www = source.resolve(root, "srv/www").await.unwrap();

    let snapshot = source.get(www).await.unwrap();
    let ids = source.children(www).await;
    assert_eq!(snapshot.children.len(), ids.len());

    for (name, id) in snapshot.children.iter().zip(ids) {
        let child = source.get(id).await.unwrap();
        assert_eq!(&child.name, name);
        assert_eq!(child.parent, Some(www));
    }
}

/// Concurrent tasks over a shared source see one immutable hierarchy
#[tokio::test(flavor = "multi_thread", worker_threads = 4)]
async fn test_shared_source_across_tasks() {
    let source = demo_source();
    let root = source.root().await;
    let expected = source.resolve(root, "/srv/www/index.html").await;

    let mut handles = Vec::new();
    for _ in 0..16 {
        let source = source.clone();
        handles.push(tokio::spawn(async move {
            let root = source.root().await;
            source.resolve(root, "/srv/www/index.html").await
        }));
    }

    for handle in handles {
        assert_eq!(handle.await.unwrap(), expected);
    }
}

/// Dropping a future before awaiting leaves the source fully usable
#[tokio::test]
async fn test_abandoned_call_does_not_wedge_the_source() {
    let source = demo_source();
    let root = source.root().await;

    {
        let _abandoned = source.resolve(root, "/srv/www");
        // never awaited; caller lost interest
    }

    assert!(source.resolve(root, "/srv/www").await.is_some());
}
