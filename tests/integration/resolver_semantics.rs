//! Integration tests for path resolution semantics

use pathwalk::resolver::{list_children, resolve};
use pathwalk::tree::builder::Tree;
use pathwalk::types::NodeId;
use serde_json::json;

fn demo_tree() -> Tree {
    Tree::from_literal(&json!({
        "home": {
            "_META_TYPE": "dir",
            "docs": {
                "_META_TYPE": "dir",
                "readme.txt": {
                    "_META_TYPE": "file",
                    "_META_FILE_CONTENTS": "hi"
                }
            }
        }
    }))
}

fn at(tree: &Tree, path: &str) -> NodeId {
    resolve(tree, tree.root_id, path).unwrap()
}

/// Every reachable node resolves the empty path to itself
#[test]
fn test_empty_path_identity_for_all_nodes() {
    let tree = demo_tree();
    for (id, _) in tree.iter() {
        assert_eq!(resolve(&tree, id, ""), Some(id));
        assert_eq!(resolve(&tree, id, "."), Some(id));
    }
}

/// Every node with a parent resolves ".." to it; root does not
#[test]
fn test_dotdot_matches_parent_links() {
    let tree = demo_tree();
    for (id, node) in tree.iter() {
        assert_eq!(resolve(&tree, id, ".."), node.parent);
    }
    assert_eq!(resolve(&tree, tree.root_id, ".."), None);
}

/// Recorded paths resolve back to their own node
#[test]
fn test_build_resolve_round_trip() {
    let tree = demo_tree();
    for (id, node) in tree.iter() {
        if node.parent.is_some() {
            assert_eq!(resolve(&tree, tree.root_id, &node.path), Some(id));
        }
    }
}

/// Scenario: file read, listing, and upward navigation around /home/docs
#[test]
fn test_file_and_directory_scenario() {
    let tree = demo_tree();

    let file = at(&tree, "/home/docs/readme.txt");
    assert_eq!(tree.get(file).unwrap().contents(), Some("hi"));

    assert!(list_children(&tree, file).is_empty());

    let docs = at(&tree, "/home/docs");
    assert_eq!(resolve(&tree, file, ".."), Some(docs));
}

/// Scenario: unknown top-level name fails
#[test]
fn test_unknown_name_is_absent() {
    let tree = demo_tree();
    assert_eq!(resolve(&tree, tree.root_id, "/nope"), None);
}

/// Scenario: relative traversal via the parent arrives at the same file
#[test]
fn test_relative_and_absolute_paths_agree() {
    let tree = demo_tree();
    let docs = at(&tree, "/home/docs");
    assert_eq!(
        resolve(&tree, docs, "../docs/readme.txt"),
        Some(at(&tree, "/home/docs/readme.txt"))
    );
}

/// Absolute paths resolve the same from any origin
#[test]
fn test_absolute_paths_ignore_origin() {
    let tree = demo_tree();
    let expected = resolve(&tree, tree.root_id, "home/docs");
    for (id, _) in tree.iter() {
        assert_eq!(resolve(&tree, id, "/home/docs"), expected);
    }
}

/// Doubled and trailing slashes collapse
#[test]
fn test_segment_collapsing() {
    let tree = demo_tree();
    let origin = at(&tree, "/home");
    assert_eq!(
        resolve(&tree, origin, "docs//readme.txt/"),
        resolve(&tree, origin, "docs/readme.txt")
    );
}

/// Repeated resolution neither changes results nor the tree
#[test]
fn test_resolution_is_pure() {
    let tree = demo_tree();
    let before: Vec<String> = tree.iter().map(|(_, n)| n.path.clone()).collect();

    let docs = at(&tree, "/home/docs");
    let first = resolve(&tree, docs, "../docs/readme.txt");
    let second = resolve(&tree, docs, "../docs/readme.txt");
    assert_eq!(first, second);

    let after: Vec<String> = tree.iter().map(|(_, n)| n.path.clone()).collect();
    assert_eq!(before, after);
}
