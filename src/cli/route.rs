//! CLI route: single route table and run context. Dispatches to the node
//! source and presentation.

use crate::api::{KindTag, NodeSnapshot, NodeSource, TreeSource};
use crate::cli::parse::Commands;
use crate::cli::presentation::{
    format_completion, format_listing_json, format_listing_text, format_node_json,
    format_node_text, format_subtree_text,
};
use crate::config::ConfigLoader;
use crate::error::ApiError;
use crate::resolver;
use crate::tree::builder::TreeBuilder;
use crate::types::NodeId;
use std::path::{Path, PathBuf};
use tracing::info;

/// Runtime context for CLI execution: the node source and the host-held
/// current node. The current node is resolved once from `--cwd`; the core
/// never touches it.
#[derive(Debug)]
pub struct RunContext {
    source: TreeSource,
    cwd: NodeId,
}

impl RunContext {
    /// Reference to the underlying node source.
    pub fn source(&self) -> &TreeSource {
        &self.source
    }

    /// The resolved current node.
    pub fn cwd(&self) -> NodeId {
        self.cwd
    }

    /// Create a run context from CLI inputs. The tree literal path comes
    /// from the flag when given, otherwise from configuration.
    pub fn new(
        tree_file: Option<PathBuf>,
        cwd: &str,
        workspace_root: &Path,
        config_path: Option<PathBuf>,
    ) -> Result<Self, ApiError> {
        let config = if let Some(ref cfg_path) = config_path {
            ConfigLoader::load_from_file(cfg_path)?
        } else {
            ConfigLoader::load(workspace_root)?
        };

        let literal_path = tree_file
            .or_else(|| config.tree.literal.clone())
            .ok_or_else(|| {
                ApiError::ConfigError(
                    "No tree literal specified (use --tree or set tree.literal)".to_string(),
                )
            })?;

        let text = std::fs::read_to_string(&literal_path)
            .map_err(|e| ApiError::TreeError(crate::error::TreeError::IoError(e)))?;
        let literal: serde_json::Value = serde_json::from_str(&text).map_err(|e| {
            ApiError::TreeError(crate::error::TreeError::InvalidLiteral(format!(
                "{}: {}",
                literal_path.display(),
                e
            )))
        })?;

        let tree = TreeBuilder::new()
            .with_meta_keys(config.tree.meta_keys())
            .build(&literal);
        info!(
            literal = %literal_path.display(),
            node_count = tree.len(),
            "Tree materialized"
        );

        let cwd_id = resolver::resolve(&tree, tree.root_id, cwd)
            .ok_or_else(|| ApiError::NotFound(cwd.to_string()))?;

        Ok(Self {
            source: TreeSource::new(tree),
            cwd: cwd_id,
        })
    }

    /// Execute a parsed command, returning its rendered output.
    pub async fn execute(&self, command: &Commands) -> Result<String, ApiError> {
        match command {
            Commands::Resolve { path, format } => {
                let snapshot = self.resolve_snapshot(path).await?;
                if format == "json" {
                    format_node_json(&snapshot)
                } else {
                    Ok(format_node_text(&snapshot))
                }
            }
            Commands::Ls { path, format } => {
                let target = path.as_deref().unwrap_or("");
                let snapshot = self.resolve_snapshot(target).await?;
                let mut rows: Vec<NodeSnapshot> = Vec::new();
                for child in self.source.children(snapshot.node_id).await {
                    if let Some(row) = self.source.get(child).await {
                        rows.push(row);
                    }
                }
                if format == "json" {
                    format_listing_json(&rows)
                } else {
                    Ok(format_listing_text(&rows))
                }
            }
            Commands::Cat { path } => {
                let snapshot = self.resolve_snapshot(path).await?;
                match snapshot.kind {
                    KindTag::File => Ok(snapshot.contents.unwrap_or_default()),
                    KindTag::Directory => Err(ApiError::IsADirectory(path.clone())),
                    // Untyped nodes carry no contents to read
                    KindTag::Untyped => Err(ApiError::NotFound(path.clone())),
                }
            }
            Commands::Complete { partial } => {
                let candidates = self.source.complete(self.cwd, partial).await;
                Ok(format_completion(&candidates))
            }
            Commands::Tree { path } => {
                let target = path.as_deref().unwrap_or("");
                let snapshot = self.resolve_snapshot(target).await?;
                Ok(format_subtree_text(self.source.tree(), snapshot.node_id))
            }
        }
    }

    /// Resolve a path from the current node and fetch its snapshot,
    /// mapping absence to the host's not-found error.
    async fn resolve_snapshot(&self, path: &str) -> Result<NodeSnapshot, ApiError> {
        let id = self
            .source
            .resolve(self.cwd, path)
            .await
            .ok_or_else(|| ApiError::NotFound(display_path(path)))?;
        self.source
            .get(id)
            .await
            .ok_or_else(|| ApiError::NotFound(display_path(path)))
    }
}

fn display_path(path: &str) -> String {
    if path.is_empty() {
        ".".to_string()
    } else {
        path.to_string()
    }
}
