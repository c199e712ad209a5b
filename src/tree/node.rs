//! Tree node types

use crate::types::NodeId;
use std::collections::BTreeMap;

/// A single entry in the hierarchy
#[derive(Debug, Clone)]
pub struct Node {
    /// Local segment name; empty only for the synthetic root
    pub name: String,
    /// Absolute slash-delimited path from root; root is "/"
    pub path: String,
    /// Enclosing node; None only for root
    pub parent: Option<NodeId>,
    /// Kind, decided once at build time
    pub kind: NodeKind,
    /// Reserved-prefix metadata carried from the literal, minus the
    /// recognized type and contents markers
    pub metadata: BTreeMap<String, String>,
}

/// Node kind
#[derive(Debug, Clone)]
pub enum NodeKind {
    File {
        contents: String,
    },
    Directory {
        children: Vec<(String, NodeId)>, // (name, node_id) in literal key order
    },
    /// Literal carried no recognized type marker; never recursed into
    Untyped,
}

impl Node {
    pub fn is_directory(&self) -> bool {
        matches!(self.kind, NodeKind::Directory { .. })
    }

    pub fn is_file(&self) -> bool {
        matches!(self.kind, NodeKind::File { .. })
    }

    /// File contents, None for non-file nodes
    pub fn contents(&self) -> Option<&str> {
        match &self.kind {
            NodeKind::File { contents } => Some(contents),
            _ => None,
        }
    }

    /// Ordered child names; empty for non-directory nodes
    pub fn child_names(&self) -> Vec<&str> {
        match &self.kind {
            NodeKind::Directory { children } => {
                children.iter().map(|(name, _)| name.as_str()).collect()
            }
            _ => vec![],
        }
    }

    /// Ordered child ids; empty for non-directory nodes
    pub fn child_ids(&self) -> Vec<NodeId> {
        match &self.kind {
            NodeKind::Directory { children } => children.iter().map(|(_, id)| *id).collect(),
            _ => vec![],
        }
    }
}
