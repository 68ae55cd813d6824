//! # Gateviz
//!
//! Draw gate-level logic circuits with Graphviz.
//!
//! This library provides:
//! - A parser for a two-section circuit description (wire values, then gates)
//! - A directed graph of wires with gate outputs labeled by their operator
//! - DOT serialization and rendering through the Graphviz `dot` executable
//!
//! ## Architecture
//!
//! - [`dsl`] - Parser for the circuit description
//! - [`graph`] - Graph construction and DOT output
//! - [`render`] - The [`Renderer`] seam and the Graphviz-backed renderer
//!
//! ## Usage
//!
//! ```bash
//! gateviz < circuit.txt        # writes Digraph.gv and Digraph.gv.pdf
//! ```
//!
//! ```
//! use gateviz::{dsl, graph::dot::to_dot, Digraph};
//!
//! let ast = dsl::parse("x00: 1\nx01: 0\n\nx00 AND x01 -> z00\n").unwrap();
//! let graph = Digraph::from_ast(&ast);
//! assert_eq!(graph.label("z00"), Some("z00 AND"));
//! assert!(to_dot(&graph).contains("x01 -> z00"));
//! ```

pub mod dsl;
pub mod error;
pub mod graph;
pub mod render;

// Re-export main types for convenience
pub use error::{GatevizError, Result};
pub use graph::{Digraph, GraphBuilder};
pub use render::{GraphvizRenderer, RenderOptions, Renderer};
