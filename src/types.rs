//! Core types for the pathwalk resolver.

/// NodeId: stable arena index of a node within a built tree
pub type NodeId = usize;
