//! Node Tree
//!
//! Represents a hierarchy of named nodes (files and directories) as an arena
//! addressed by `NodeId`, built once from a tag-annotated literal description.

pub mod builder;
pub mod node;
pub mod path;
