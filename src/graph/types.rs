//! Core types for graph representation.

/// A unique identifier for a node in a [`Digraph`](super::Digraph).
/// Ids are assigned in first-insertion order starting at 0.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct NodeId(pub usize);

/// A wire as a graph node.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Node {
    /// Node name (the wire name)
    pub name: String,
    /// Explicit display label; `None` displays the name
    pub label: Option<String>,
}

impl Node {
    /// The text shown for this node.
    pub fn display_label(&self) -> &str {
        self.label.as_deref().unwrap_or(&self.name)
    }
}

/// A directed edge from an operand wire to a gate output.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Edge {
    pub from: NodeId,
    pub to: NodeId,
}
