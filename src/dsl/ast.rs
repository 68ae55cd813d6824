//! Abstract Syntax Tree types for the circuit description.

/// Complete AST representation of a parsed circuit.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CircuitAst {
    /// Wire declarations from the first section, in input order
    pub wires: Vec<WireDecl>,
    /// Gate declarations from the second section, in input order
    pub gates: Vec<GateDecl>,
}

impl CircuitAst {
    /// Create a new empty circuit AST.
    pub fn new() -> Self {
        Self::default()
    }
}

/// A wire initialization record (`x00: 1`).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WireDecl {
    /// Wire name
    pub name: String,
    /// Initial value token, kept verbatim and never interpreted
    pub value: String,
    /// Source line number for error reporting
    pub line: usize,
}

/// A two-input gate record (`x00 AND y00 -> z00`).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GateDecl {
    /// First operand wire
    pub lhs: String,
    /// Operator token (`AND`, `OR`, `XOR`, ...)
    pub op: String,
    /// Second operand wire
    pub rhs: String,
    /// Output wire, which also identifies the gate
    pub output: String,
    /// Source line number for error reporting
    pub line: usize,
}

impl GateDecl {
    /// Operand wires in declaration order.
    pub fn inputs(&self) -> [&str; 2] {
        [&self.lhs, &self.rhs]
    }

    /// Display label for the gate's output node: `"<output> <op>"`.
    pub fn label(&self) -> String {
        format!("{} {}", self.output, self.op)
    }
}
