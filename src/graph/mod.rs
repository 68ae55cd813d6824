//! Graph representation of a parsed circuit.
//!
//! Every wire becomes a node. Every gate labels its output wire's node with
//! `"<output> <op>"` and draws one edge from each operand into it.
//! [`build_graph`] drives any [`GraphBuilder`]; [`Digraph`] is the in-memory
//! implementation handed to the renderer.

mod digraph;
pub mod dot;
mod types;

pub use digraph::Digraph;
pub use types::*;

use log::debug;

use crate::dsl::CircuitAst;

/// Sink for graph construction calls.
pub trait GraphBuilder {
    /// Register a node. Idempotent by `name`; a `label` replaces any earlier
    /// label, `None` keeps it (and otherwise displays the name).
    fn add_node(&mut self, name: &str, label: Option<&str>);

    /// Add a directed edge. Duplicates are kept; unknown endpoints become
    /// unlabeled nodes.
    fn add_edge(&mut self, from: &str, to: &str);
}

/// Translate a circuit into graph construction calls.
///
/// Operands are not checked against the declared wires and cycles are not
/// detected.
pub fn build_graph<B: GraphBuilder + ?Sized>(ast: &CircuitAst, builder: &mut B) {
    for wire in &ast.wires {
        builder.add_node(&wire.name, None);
    }

    for gate in &ast.gates {
        builder.add_node(&gate.output, Some(gate.label().as_str()));
        for input in gate.inputs() {
            builder.add_edge(input, &gate.output);
        }
    }

    debug!(
        "built graph from {} wires and {} gates",
        ast.wires.len(),
        ast.gates.len()
    );
}

#[cfg(test)]
mod tests {
    use std::collections::HashSet;

    use super::*;
    use crate::dsl::parse;

    #[derive(Debug, PartialEq)]
    enum Call {
        Node(String, Option<String>),
        Edge(String, String),
    }

    #[derive(Default)]
    struct Recorder {
        calls: Vec<Call>,
    }

    impl GraphBuilder for Recorder {
        fn add_node(&mut self, name: &str, label: Option<&str>) {
            self.calls
                .push(Call::Node(name.to_string(), label.map(str::to_string)));
        }

        fn add_edge(&mut self, from: &str, to: &str) {
            self.calls.push(Call::Edge(from.to_string(), to.to_string()));
        }
    }

    const HALF_ADDER: &str = "x00: 1\ny00: 1\n\nx00 XOR y00 -> z00\nx00 AND y00 -> z01\n";

    #[test]
    fn test_builder_calls() {
        let ast = parse("x00: 1\nx01: 0\n\nx00 AND x01 -> z00\n").unwrap();
        let mut recorder = Recorder::default();
        build_graph(&ast, &mut recorder);

        assert_eq!(
            recorder.calls,
            vec![
                Call::Node("x00".to_string(), None),
                Call::Node("x01".to_string(), None),
                Call::Node("z00".to_string(), Some("z00 AND".to_string())),
                Call::Edge("x00".to_string(), "z00".to_string()),
                Call::Edge("x01".to_string(), "z00".to_string()),
            ]
        );
    }

    #[test]
    fn test_single_gate_scenario() {
        let ast = parse("x00: 1\nx01: 0\n\nx00 AND x01 -> z00\n").unwrap();
        let graph = Digraph::from_ast(&ast);

        let names: Vec<&str> = graph.nodes().iter().map(|n| n.name.as_str()).collect();
        assert_eq!(names, vec!["x00", "x01", "z00"]);
        assert_eq!(graph.label("z00"), Some("z00 AND"));
        let edges: Vec<_> = graph.edge_names().collect();
        assert_eq!(edges, vec![("x00", "z00"), ("x01", "z00")]);
    }

    #[test]
    fn test_node_and_edge_counts() {
        let ast = parse(HALF_ADDER).unwrap();
        let graph = Digraph::from_ast(&ast);

        let unique: HashSet<&str> = ast
            .wires
            .iter()
            .map(|w| w.name.as_str())
            .chain(ast.gates.iter().map(|g| g.output.as_str()))
            .collect();
        assert_eq!(graph.node_count(), unique.len());
        assert_eq!(graph.edge_count(), 2 * ast.gates.len());
    }

    #[test]
    fn test_wires_only() {
        let ast = parse("x00: 1\ny00: 0\n\n").unwrap();
        let graph = Digraph::from_ast(&ast);
        assert_eq!(graph.node_count(), 2);
        assert_eq!(graph.edge_count(), 0);
    }

    #[test]
    fn test_redeclared_wire_not_duplicated() {
        let ast = parse("x00: 1\nx00: 0\nz00: 0\n\nx00 OR x00 -> z00\n").unwrap();
        let graph = Digraph::from_ast(&ast);
        assert_eq!(graph.node_count(), 2);
        assert_eq!(graph.label("z00"), Some("z00 OR"));
        assert_eq!(graph.edge_count(), 2);
    }

    #[test]
    fn test_undeclared_input_becomes_node() {
        let ast = parse("x00: 1\n\nx00 AND ghost -> z00\n").unwrap();
        let graph = Digraph::from_ast(&ast);
        assert!(graph.contains_node("ghost"));
        assert_eq!(graph.label("ghost"), Some("ghost"));
        assert!(graph.edge_names().any(|e| e == ("ghost", "z00")));
    }

    #[test]
    fn test_cyclic_circuit() {
        let ast = parse("\na AND b -> c\nc OR a -> b\n").unwrap();
        let graph = Digraph::from_ast(&ast);
        assert_eq!(graph.node_count(), 3);
        assert_eq!(graph.edge_count(), 4);
    }
}
