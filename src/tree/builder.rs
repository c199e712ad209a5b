//! Tree builder for materializing node trees from literal descriptions
//!
//! A literal is a nested JSON mapping whose keys are either reserved
//! metadata keys (type and contents markers) or child names mapping to the
//! child's own literal. Construction is total: literals with missing or
//! unrecognized type markers become untyped nodes rather than errors.

use crate::error::TreeError;
use crate::tree::node::{Node, NodeKind};
use crate::tree::path;
use crate::types::NodeId;
use serde_json::Value;
use std::collections::BTreeMap;
use std::path::Path;
use std::time::Instant;
use tracing::{debug, info, instrument, trace, warn};

/// Reserved metadata key names used to partition literal keys
///
/// Any literal key starting with `prefix` is metadata, not a child name,
/// even when it is neither of the two recognized markers. The exact names
/// are an integration detail with the host, so all of them are overridable.
#[derive(Debug, Clone)]
pub struct MetaKeys {
    pub prefix: String,
    pub type_key: String,
    pub contents_key: String,
    pub dir_value: String,
    pub file_value: String,
}

impl Default for MetaKeys {
    fn default() -> Self {
        Self {
            prefix: "_META".to_string(),
            type_key: "_META_TYPE".to_string(),
            contents_key: "_META_FILE_CONTENTS".to_string(),
            dir_value: "dir".to_string(),
            file_value: "file".to_string(),
        }
    }
}

impl MetaKeys {
    /// Case-sensitive reserved-prefix test
    pub fn is_meta_key(&self, key: &str) -> bool {
        key.starts_with(&self.prefix)
    }
}

/// Complete node tree
///
/// Arena of nodes addressed by `NodeId`; immutable after build.
#[derive(Debug, Clone)]
pub struct Tree {
    /// Root node id
    pub root_id: NodeId,
    nodes: Vec<Node>,
}

impl Tree {
    /// Look up a node by id
    pub fn get(&self, id: NodeId) -> Option<&Node> {
        self.nodes.get(id)
    }

    /// The synthetic root node
    pub fn root(&self) -> &Node {
        &self.nodes[self.root_id]
    }

    /// Find the parent id for a given node
    ///
    /// Returns None if the node is the root or not found.
    pub fn find_parent(&self, id: NodeId) -> Option<NodeId> {
        self.nodes.get(id).and_then(|node| node.parent)
    }

    /// Get all children ids for a given node, in literal key order
    ///
    /// Returns an empty vector if the node is a file, untyped, or not found.
    pub fn get_children(&self, id: NodeId) -> Vec<NodeId> {
        match self.nodes.get(id) {
            Some(node) => node.child_ids(),
            None => vec![],
        }
    }

    /// Total node count, root included
    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }

    /// Iterate over all nodes with their ids
    pub fn iter(&self) -> impl Iterator<Item = (NodeId, &Node)> {
        self.nodes.iter().enumerate()
    }

    /// Build a tree from a literal with default metadata keys
    pub fn from_literal(literal: &Value) -> Tree {
        TreeBuilder::new().build(literal)
    }

    /// Read a JSON literal from a file and build a tree from it
    pub fn load(path: &Path) -> Result<Tree, TreeError> {
        let text = std::fs::read_to_string(path)?;
        let literal: Value = serde_json::from_str(&text)
            .map_err(|e| TreeError::InvalidLiteral(format!("{}: {}", path.display(), e)))?;
        Ok(Tree::from_literal(&literal))
    }
}

/// Tree builder for materializing node trees
pub struct TreeBuilder {
    meta: MetaKeys,
}

impl TreeBuilder {
    /// Create a builder with the default metadata key names
    pub fn new() -> Self {
        Self {
            meta: MetaKeys::default(),
        }
    }

    /// Override the metadata key names used to partition literal keys
    pub fn with_meta_keys(mut self, meta: MetaKeys) -> Self {
        self.meta = meta;
        self
    }

    /// Build the complete tree from a literal description
    ///
    /// The top-level literal describes the children of the synthetic root,
    /// which is always a directory with name "" and path "/". Recursion
    /// descends only into children explicitly typed as directories.
    #[instrument(skip(self, literal))]
    pub fn build(&self, literal: &Value) -> Tree {
        let start = Instant::now();

        let mut nodes = vec![Node {
            name: String::new(),
            path: "/".to_string(),
            parent: None,
            kind: NodeKind::Directory {
                children: Vec::new(),
            },
            metadata: self.collect_metadata(literal),
        }];
        let root_id: NodeId = 0;

        if literal.as_object().is_none() {
            warn!("Top-level literal is not an object; tree has no children");
        }
        self.build_children(&mut nodes, root_id, literal);

        let duration = start.elapsed();
        info!(
            node_count = nodes.len(),
            duration_us = duration.as_micros() as u64,
            "Tree build completed"
        );

        Tree { root_id, nodes }
    }

    /// Recursively construct child nodes for every non-metadata key
    fn build_children(&self, nodes: &mut Vec<Node>, parent_id: NodeId, literal: &Value) {
        let object = match literal.as_object() {
            Some(object) => object,
            None => return,
        };

        for (key, value) in object {
            if self.meta.is_meta_key(key) {
                continue;
            }

            let name = path::normalize_name(key);
            let child_path = path::join(&nodes[parent_id].path, &name);
            let kind = self.classify(&child_path, value);
            let recurse = matches!(kind, NodeKind::Directory { .. });

            let child_id = nodes.len();
            trace!(path = %child_path, "Constructed node");
            nodes.push(Node {
                name: name.clone(),
                path: child_path,
                parent: Some(parent_id),
                kind,
                metadata: self.collect_metadata(value),
            });

            match &mut nodes[parent_id].kind {
                NodeKind::Directory { children } => children.push((name, child_id)),
                // Unreachable: recursion only descends into directories
                _ => {}
            }

            if recurse {
                self.build_children(nodes, child_id, value);
            }
        }
    }

    /// Decide a node's kind from its literal's type marker
    fn classify(&self, child_path: &str, value: &Value) -> NodeKind {
        let object = match value.as_object() {
            Some(object) => object,
            None => {
                debug!(path = %child_path, "Literal value is not an object; node is untyped");
                return NodeKind::Untyped;
            }
        };

        match object.get(&self.meta.type_key).and_then(Value::as_str) {
            Some(marker) if marker == self.meta.dir_value => NodeKind::Directory {
                children: Vec::new(),
            },
            Some(marker) if marker == self.meta.file_value => {
                let contents = object
                    .get(&self.meta.contents_key)
                    .and_then(Value::as_str)
                    .unwrap_or_default()
                    .to_string();
                NodeKind::File { contents }
            }
            Some(marker) => {
                warn!(path = %child_path, marker, "Unrecognized type marker; node is untyped");
                NodeKind::Untyped
            }
            None => NodeKind::Untyped,
        }
    }

    /// Carry reserved-prefix metadata onto the node, minus the two
    /// recognized markers (those become kind and contents). Non-string
    /// metadata values are skipped.
    fn collect_metadata(&self, literal: &Value) -> BTreeMap<String, String> {
        let mut metadata = BTreeMap::new();
        let object = match literal.as_object() {
            Some(object) => object,
            None => return metadata,
        };

        for (key, value) in object {
            if !self.meta.is_meta_key(key)
                || *key == self.meta.type_key
                || *key == self.meta.contents_key
            {
                continue;
            }
            match value.as_str() {
                Some(text) => {
                    metadata.insert(key.clone(), text.to_string());
                }
                None => trace!(key = %key, "Skipping non-string metadata value"),
            }
        }
        metadata
    }
}

impl Default for TreeBuilder {
    fn default() -> Self {
        Self::new()
    }
}
