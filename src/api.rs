//! Node Source Boundary
//!
//! Asynchronous boundary between the resolver core and its hosts. Every
//! operation is an `async fn` that delivers exactly one result (a node or
//! absence) to its caller, modeling a backing store that may suspend; a
//! remote directory service can stand in for the in-memory tree as long as
//! it honors the same contract. There is no cancellation token: callers may
//! abandon interest by dropping the future, but the source never delivers
//! twice or not at all.

use crate::resolver;
use crate::tree::builder::Tree;
use crate::tree::node::{Node, NodeKind};
use crate::types::NodeId;
use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::sync::Arc;

/// Node kind tag carried across the boundary
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum KindTag {
    File,
    Directory,
    Untyped,
}

impl std::fmt::Display for KindTag {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            KindTag::File => write!(f, "file"),
            KindTag::Directory => write!(f, "dir"),
            KindTag::Untyped => write!(f, "untyped"),
        }
    }
}

/// Boundary node shape
///
/// A detached, serializable view of one node: identity, linkage, kind, and
/// (for files) contents. Hosts inspect `kind` themselves to distinguish
/// "not found" from "found the wrong kind".
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct NodeSnapshot {
    pub node_id: NodeId,
    pub name: String,
    pub path: String,
    pub kind: KindTag,
    pub parent: Option<NodeId>,
    /// Ordered child names; empty for non-directories
    pub children: Vec<String>,
    /// File contents; None for non-files
    pub contents: Option<String>,
    pub metadata: BTreeMap<String, String>,
}

impl NodeSnapshot {
    fn from_node(id: NodeId, node: &Node) -> Self {
        let kind = match &node.kind {
            NodeKind::File { .. } => KindTag::File,
            NodeKind::Directory { .. } => KindTag::Directory,
            NodeKind::Untyped => KindTag::Untyped,
        };
        NodeSnapshot {
            node_id: id,
            name: node.name.clone(),
            path: node.path.clone(),
            kind,
            parent: node.parent,
            children: node.child_names().iter().map(|s| s.to_string()).collect(),
            contents: node.contents().map(|s| s.to_string()),
            metadata: node.metadata.clone(),
        }
    }
}

/// Node source interface
///
/// The two resolver operations plus node inspection, as consumed by
/// command and completion hosts.
#[async_trait]
pub trait NodeSource: Send + Sync {
    /// Root node id of the backing hierarchy
    async fn root(&self) -> NodeId;

    /// Fetch a snapshot of a node; None for unknown ids
    async fn get(&self, node: NodeId) -> Option<NodeSnapshot>;

    /// Resolve a path string from an origin node to a node id, or absence
    async fn resolve(&self, origin: NodeId, path: &str) -> Option<NodeId>;

    /// Ordered children of a node; empty for files (not an error)
    async fn children(&self, node: NodeId) -> Vec<NodeId>;

    /// Completion candidates for a partial path, in child order
    async fn complete(&self, origin: NodeId, partial: &str) -> Vec<String>;
}

/// In-memory node source over an immutable built tree
///
/// Completes synchronously; the async surface exists for contract parity
/// with remote-backed sources. Cloning shares the underlying tree.
#[derive(Clone, Debug)]
pub struct TreeSource {
    tree: Arc<Tree>,
}

impl TreeSource {
    pub fn new(tree: Tree) -> Self {
        Self {
            tree: Arc::new(tree),
        }
    }

    pub fn shared(tree: Arc<Tree>) -> Self {
        Self { tree }
    }

    /// Direct access to the backing tree
    pub fn tree(&self) -> &Tree {
        &self.tree
    }
}

#[async_trait]
impl NodeSource for TreeSource {
    async fn root(&self) -> NodeId {
        self.tree.root_id
    }

    async fn get(&self, node: NodeId) -> Option<NodeSnapshot> {
        self.tree
            .get(node)
            .map(|n| NodeSnapshot::from_node(node, n))
    }

    async fn resolve(&self, origin: NodeId, path: &str) -> Option<NodeId> {
        resolver::resolve(&self.tree, origin, path)
    }

    async fn children(&self, node: NodeId) -> Vec<NodeId> {
        resolver::list_children(&self.tree, node)
    }

    async fn complete(&self, origin: NodeId, partial: &str) -> Vec<String> {
        resolver::complete(&self.tree, origin, partial)
    }
}
