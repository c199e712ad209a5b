//! CLI presentation: node, listing, completion, and subtree formatters.

use crate::api::{KindTag, NodeSnapshot};
use crate::error::{ApiError, TreeError};
use crate::tree::builder::Tree;
use crate::types::NodeId;
use comfy_table::Table;
use owo_colors::OwoColorize;

/// Format a resolved node as human-readable text.
pub fn format_node_text(snapshot: &NodeSnapshot) -> String {
    let mut out = String::new();
    out.push_str(&format!("Path: {}\n", snapshot.path));
    out.push_str(&format!("Kind: {}\n", snapshot.kind));
    if let Some(parent) = snapshot.parent {
        out.push_str(&format!("Parent: #{}\n", parent));
    }
    match snapshot.kind {
        KindTag::Directory => {
            out.push_str(&format!("Children: {}\n", snapshot.children.len()));
        }
        KindTag::File => {
            let size = snapshot.contents.as_deref().unwrap_or("").len();
            out.push_str(&format!("Size: {} bytes\n", size));
        }
        KindTag::Untyped => {}
    }
    out
}

/// Format a resolved node as pretty JSON.
pub fn format_node_json(snapshot: &NodeSnapshot) -> Result<String, ApiError> {
    serde_json::to_string_pretty(snapshot)
        .map_err(|e| ApiError::TreeError(TreeError::InvalidLiteral(e.to_string())))
}

/// Format a child listing as a table (name, kind, size).
/// Directory names are styled; size is byte length for files and entry
/// count for directories.
pub fn format_listing_text(rows: &[NodeSnapshot]) -> String {
    if rows.is_empty() {
        return "(no children)".to_string();
    }
    let mut table = Table::new();
    table.load_preset(comfy_table::presets::UTF8_FULL);
    table.set_header(vec!["Name", "Kind", "Size"]);
    for row in rows {
        let name = match row.kind {
            KindTag::Directory => format!("{}", row.name.bold().blue()),
            _ => row.name.clone(),
        };
        let size = match row.kind {
            KindTag::File => format!(
                "{} bytes",
                row.contents.as_deref().unwrap_or("").len()
            ),
            KindTag::Directory => format!("{} entries", row.children.len()),
            KindTag::Untyped => "-".to_string(),
        };
        table.add_row(vec![name, row.kind.to_string(), size]);
    }
    table.to_string()
}

/// Format a child listing as a JSON array.
pub fn format_listing_json(rows: &[NodeSnapshot]) -> Result<String, ApiError> {
    let arr: Vec<serde_json::Value> = rows
        .iter()
        .map(|row| {
            serde_json::json!({
                "name": row.name,
                "path": row.path,
                "kind": row.kind,
            })
        })
        .collect();
    serde_json::to_string_pretty(&arr)
        .map_err(|e| ApiError::TreeError(TreeError::InvalidLiteral(e.to_string())))
}

/// Format completion candidates, one per line.
pub fn format_completion(candidates: &[String]) -> String {
    candidates.join("\n")
}

/// Format a subtree as an indented listing; directories carry a `/` suffix.
pub fn format_subtree_text(tree: &Tree, root: NodeId) -> String {
    let mut out = String::new();
    render_subtree(tree, root, 0, &mut out);
    out
}

fn render_subtree(tree: &Tree, id: NodeId, depth: usize, out: &mut String) {
    let node = match tree.get(id) {
        Some(node) => node,
        None => return,
    };
    let label = if node.name.is_empty() {
        "/"
    } else {
        node.name.as_str()
    };
    let suffix = if node.is_directory() && !node.name.is_empty() {
        "/"
    } else {
        ""
    };
    out.push_str(&format!("{}{}{}\n", "  ".repeat(depth), label, suffix));
    for child in tree.get_children(id) {
        render_subtree(tree, child, depth + 1, out);
    }
}
