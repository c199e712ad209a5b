//! Path resolution over built trees
//!
//! Resolves slash-delimited paths from an origin node, honoring `.` (self),
//! `..` (parent), and absolute vs. relative anchoring. Resolution is pure:
//! it never mutates the tree or any current-node pointer, never panics, and
//! signals every failure as absence. Hosts that track a working directory
//! own that pointer themselves.

use crate::tree::builder::Tree;
use crate::tree::node::NodeKind;
use crate::tree::path;
use crate::types::NodeId;
use tracing::{debug, instrument, trace};

/// Resolve a path string to a node id
///
/// An empty path resolves immediately to `origin`. An absolute path (leading
/// `/`) is resolved from the root regardless of `origin`. Empty segments are
/// dropped, so `//a//b/` resolves like `a/b`. A `..` at the root fails the
/// whole resolution rather than clamping.
#[instrument(skip(tree))]
pub fn resolve(tree: &Tree, origin: NodeId, path_str: &str) -> Option<NodeId> {
    if path_str.is_empty() {
        return Some(origin);
    }

    let segments = path::split_segments(path_str);
    let start = if path::is_absolute(path_str) {
        tree.root_id
    } else {
        origin
    };
    debug!(start, segment_count = segments.len(), "Resolving path");

    let mut current = start;
    for segment in segments {
        current = match step(tree, current, segment) {
            Some(next) => next,
            None => {
                trace!(segment, "Segment did not resolve");
                return None;
            }
        };
    }
    Some(current)
}

/// Consume a single segment from the current node
fn step(tree: &Tree, current: NodeId, segment: &str) -> Option<NodeId> {
    match segment {
        "." => Some(current),
        ".." => tree.find_parent(current),
        name => {
            let wanted = path::normalize_name(name);
            match &tree.get(current)?.kind {
                NodeKind::Directory { children } => children
                    .iter()
                    .find(|(child_name, _)| *child_name == wanted)
                    .map(|(_, id)| *id),
                // Files and untyped nodes have no children to descend into
                _ => None,
            }
        }
    }
}

/// Ordered children of a node
///
/// Empty for files and untyped nodes; that is a normal result, not an error.
pub fn list_children(tree: &Tree, node: NodeId) -> Vec<NodeId> {
    tree.get_children(node)
}

/// Completion candidates for a partial path
///
/// The partial is split at its last `/` into a directory part and a name
/// prefix; the directory part is resolved from `origin` and its children
/// filtered by the prefix, preserving child order. No candidates when the
/// directory part does not resolve.
pub fn complete(tree: &Tree, origin: NodeId, partial: &str) -> Vec<String> {
    let (dir_part, prefix) = match partial.rfind('/') {
        Some(idx) => partial.split_at(idx + 1),
        None => ("", partial),
    };

    let base = match resolve(tree, origin, dir_part) {
        Some(base) => base,
        None => return vec![],
    };

    let wanted = path::normalize_name(prefix);
    list_children(tree, base)
        .into_iter()
        .filter_map(|id| tree.get(id))
        .filter(|node| node.name.starts_with(&wanted))
        .map(|node| node.name.clone())
        .collect()
}
