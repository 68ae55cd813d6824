//! Parser for the two-section circuit description.

use std::io::BufRead;

use log::debug;

use super::ast::*;
use crate::error::{GatevizError, Result};

/// Separator between a wire name and its initial value.
const WIRE_SEPARATOR: &str = ": ";

/// Parse one wire declaration: `<name>: <value>`.
///
/// Trailing whitespace is ignored. The line must contain the separator
/// exactly once.
pub fn parse_wire_line(line_no: usize, line: &str) -> Result<WireDecl> {
    let trimmed = line.trim_end();
    let mut parts = trimmed.split(WIRE_SEPARATOR);

    match (parts.next(), parts.next(), parts.next()) {
        (Some(name), Some(value), None) => Ok(WireDecl {
            name: name.to_string(),
            value: value.to_string(),
            line: line_no,
        }),
        _ => Err(GatevizError::malformed_wire(line_no, trimmed)),
    }
}

/// Parse one gate declaration: `<in1> <op> <in2> -> <out>`.
///
/// The fourth token is the arrow and is not checked.
pub fn parse_gate_line(line_no: usize, line: &str) -> Result<GateDecl> {
    let tokens: Vec<&str> = line.split_whitespace().collect();

    let &[lhs, op, rhs, _arrow, output] = tokens.as_slice() else {
        return Err(GatevizError::malformed_gate(line_no, line.trim_end()));
    };

    Ok(GateDecl {
        lhs: lhs.to_string(),
        op: op.to_string(),
        rhs: rhs.to_string(),
        output: output.to_string(),
        line: line_no,
    })
}

/// Which part of the input the parser is in.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Section {
    Wires,
    Gates,
}

/// Line-driven parser that accumulates a [`CircuitAst`].
#[derive(Debug)]
pub struct Parser {
    ast: CircuitAst,
    section: Section,
    line_no: usize,
}

impl Parser {
    /// Create a parser positioned at the start of the wire section.
    pub fn new() -> Self {
        Self {
            ast: CircuitAst::new(),
            section: Section::Wires,
            line_no: 0,
        }
    }

    /// Feed the next input line (without its line terminator).
    pub fn feed(&mut self, line: &str) -> Result<()> {
        self.line_no += 1;

        match self.section {
            Section::Wires => {
                if line.trim_end().is_empty() {
                    debug!(
                        "wire section ended at line {} ({} wires)",
                        self.line_no,
                        self.ast.wires.len()
                    );
                    self.section = Section::Gates;
                    return Ok(());
                }
                let wire = parse_wire_line(self.line_no, line)?;
                self.ast.wires.push(wire);
            }
            Section::Gates => {
                let gate = parse_gate_line(self.line_no, line)?;
                self.ast.gates.push(gate);
            }
        }

        Ok(())
    }

    /// Parse every line of a string.
    pub fn parse_str(mut self, input: &str) -> Result<CircuitAst> {
        for line in input.lines() {
            self.feed(line)?;
        }
        Ok(self.finish())
    }

    /// Parse every line of a buffered reader.
    pub fn parse_reader<R: BufRead>(mut self, reader: R) -> Result<CircuitAst> {
        for line in reader.lines() {
            let line = line.map_err(|source| GatevizError::InputRead { source })?;
            self.feed(&line)?;
        }
        Ok(self.finish())
    }

    /// Finish parsing and return the accumulated AST.
    ///
    /// Reaching the end while still in the wire section is not an error;
    /// the circuit simply has no gates.
    pub fn finish(self) -> CircuitAst {
        if self.section == Section::Wires {
            debug!("input ended inside the wire section; no gates declared");
        }
        debug!(
            "parsed {} wires and {} gates from {} lines",
            self.ast.wires.len(),
            self.ast.gates.len(),
            self.line_no
        );
        self.ast
    }
}

impl Default for Parser {
    fn default() -> Self {
        Self::new()
    }
}
