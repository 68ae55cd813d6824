//! In-memory directed graph.

use std::collections::HashMap;

use super::types::{Edge, Node, NodeId};
use super::{build_graph, GraphBuilder};
use crate::dsl::CircuitAst;

/// A directed graph of wires, ready for rendering.
#[derive(Debug, Clone, Default)]
pub struct Digraph {
    /// Nodes in first-insertion order
    nodes: Vec<Node>,

    /// Mapping from node names to node IDs
    node_map: HashMap<String, NodeId>,

    /// Edges in insertion order, duplicates included
    edges: Vec<Edge>,
}

impl Digraph {
    /// Create an empty graph.
    pub fn new() -> Self {
        Self::default()
    }

    /// Build a graph from a parsed circuit.
    pub fn from_ast(ast: &CircuitAst) -> Self {
        let mut graph = Self::new();
        build_graph(ast, &mut graph);
        graph
    }

    /// Get the ID for `name`, creating an unlabeled node if it is new.
    fn intern(&mut self, name: &str) -> NodeId {
        if let Some(&id) = self.node_map.get(name) {
            return id;
        }
        let id = NodeId(self.nodes.len());
        self.nodes.push(Node {
            name: name.to_string(),
            label: None,
        });
        self.node_map.insert(name.to_string(), id);
        id
    }

    /// Number of distinct nodes.
    pub fn node_count(&self) -> usize {
        self.nodes.len()
    }

    /// Number of edges, duplicates included.
    pub fn edge_count(&self) -> usize {
        self.edges.len()
    }

    /// Whether a node with this name exists.
    pub fn contains_node(&self, name: &str) -> bool {
        self.node_map.contains_key(name)
    }

    /// Find a node ID by name.
    pub fn find_node(&self, name: &str) -> Option<NodeId> {
        self.node_map.get(name).copied()
    }

    /// Get a node by ID.
    pub fn node(&self, id: NodeId) -> &Node {
        &self.nodes[id.0]
    }

    /// Display label of a node, or `None` if the node does not exist.
    pub fn label(&self, name: &str) -> Option<&str> {
        self.find_node(name).map(|id| self.node(id).display_label())
    }

    /// All nodes in first-insertion order.
    pub fn nodes(&self) -> &[Node] {
        &self.nodes
    }

    /// All edges in insertion order.
    pub fn edges(&self) -> &[Edge] {
        &self.edges
    }

    /// Edges as `(from, to)` name pairs.
    pub fn edge_names(&self) -> impl Iterator<Item = (&str, &str)> + '_ {
        self.edges
            .iter()
            .map(|e| (self.node(e.from).name.as_str(), self.node(e.to).name.as_str()))
    }
}

impl GraphBuilder for Digraph {
    fn add_node(&mut self, name: &str, label: Option<&str>) {
        let id = self.intern(name);
        if let Some(label) = label {
            self.nodes[id.0].label = Some(label.to_string());
        }
    }

    fn add_edge(&mut self, from: &str, to: &str) {
        let from = self.intern(from);
        let to = self.intern(to);
        self.edges.push(Edge { from, to });
    }
}
