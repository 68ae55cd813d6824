//! Graphviz DOT serialization.

use std::fmt::Write;

use super::Digraph;

/// Keywords that must be quoted when used as IDs (case-insensitive).
const KEYWORDS: [&str; 6] = ["node", "edge", "graph", "digraph", "subgraph", "strict"];

/// Serialize a graph as DOT source.
///
/// Node statements come first in insertion order, then edges. A node
/// whose label is just its name gets no `label` attribute.
pub fn to_dot(graph: &Digraph) -> String {
    let mut out = String::from("digraph {\n");

    for node in graph.nodes() {
        match &node.label {
            Some(label) if *label != node.name => {
                let _ = writeln!(out, "\t{} [label={}]", quote(&node.name), quote(label));
            }
            _ => {
                let _ = writeln!(out, "\t{}", quote(&node.name));
            }
        }
    }

    for (from, to) in graph.edge_names() {
        let _ = writeln!(out, "\t{} -> {}", quote(from), quote(to));
    }

    out.push_str("}\n");
    out
}

/// Quote `id` unless it is a plain DOT identifier or numeral.
pub fn quote(id: &str) -> String {
    if is_bare_id(id) {
        return id.to_string();
    }

    let mut quoted = String::with_capacity(id.len() + 2);
    quoted.push('"');
    for ch in id.chars() {
        if ch == '"' || ch == '\\' {
            quoted.push('\\');
        }
        quoted.push(ch);
    }
    quoted.push('"');
    quoted
}

fn is_bare_id(id: &str) -> bool {
    if KEYWORDS.iter().any(|k| k.eq_ignore_ascii_case(id)) {
        return false;
    }
    is_identifier(id) || is_numeral(id)
}

fn is_identifier(id: &str) -> bool {
    let mut chars = id.chars();
    match chars.next() {
        Some(c) if c.is_ascii_alphabetic() || c == '_' => {}
        _ => return false,
    }
    chars.all(|c| c.is_ascii_alphanumeric() || c == '_')
}

fn is_numeral(id: &str) -> bool {
    let digits = id.strip_prefix('-').unwrap_or(id);
    if digits.is_empty() || digits == "." {
        return false;
    }
    let mut seen_dot = false;
    digits.chars().all(|c| match c {
        '0'..='9' => true,
        '.' if !seen_dot => {
            seen_dot = true;
            true
        }
        _ => false,
    })
}
