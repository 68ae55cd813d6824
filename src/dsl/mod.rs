//! Parser for gate-level circuit descriptions.
//!
//! The input is line-oriented and split into two sections by the first
//! blank line.
//!
//! # Grammar Overview
//!
//! ```text
//! circuit  = { wire } [ blank { gate } ]
//! wire     = name ": " value
//! gate     = name op name arrow name
//! blank    = { whitespace }
//! ```
//!
//! A wire line is split on the literal `": "` and must yield exactly two
//! parts. A gate line is split on whitespace and must yield exactly five
//! tokens; the fourth (the arrow) is not inspected. Any other line shape
//! is a malformed-input error and aborts parsing.
//!
//! If the input ends before a blank line, every line is a wire and the
//! circuit has no gates.
//!
//! # Example
//!
//! ```text
//! x00: 1
//! x01: 0
//! y00: 1
//!
//! x00 AND y00 -> z00
//! x01 XOR z00 -> z01
//! ```

mod ast;
mod parser;

pub use ast::*;
pub use parser::{parse_gate_line, parse_wire_line, Parser};

use std::io::BufRead;

use crate::error::Result;

/// Parse a circuit description string into an AST.
pub fn parse(input: &str) -> Result<CircuitAst> {
    Parser::new().parse_str(input)
}

/// Parse a circuit description from a buffered reader (typically stdin).
pub fn parse_reader<R: BufRead>(reader: R) -> Result<CircuitAst> {
    Parser::new().parse_reader(reader)
}

/// Parse a circuit description file.
pub fn parse_file(path: &std::path::Path) -> Result<CircuitAst> {
    let file = std::fs::File::open(path).map_err(|e| crate::error::GatevizError::FileRead {
        path: path.display().to_string(),
        source: e,
    })?;
    parse_reader(std::io::BufReader::new(file))
}
