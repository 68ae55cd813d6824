//! Error types for gateviz.
//!
//! This module provides a unified error type [`GatevizError`] that covers
//! malformed circuit input, I/O on the input and output files, and failures
//! of the external Graphviz renderer.

use std::process::ExitStatus;

use thiserror::Error;

/// Result type alias using [`GatevizError`].
pub type Result<T> = std::result::Result<T, GatevizError>;

/// Unified error type for all gateviz operations.
#[derive(Error, Debug)]
pub enum GatevizError {
    // ============ Malformed Input ============
    /// A wire declaration that is not `<name>: <value>`
    #[error("Malformed wire declaration at line {line}: {text:?} (expected '<name>: <value>')")]
    MalformedWire { line: usize, text: String },

    /// A gate declaration that is not `<in1> <op> <in2> -> <out>`
    #[error("Malformed gate declaration at line {line}: {text:?} (expected '<in1> <op> <in2> -> <out>')")]
    MalformedGate { line: usize, text: String },

    // ============ I/O Errors ============
    /// Error reading the circuit from a stream
    #[error("Failed to read circuit input: {source}")]
    InputRead {
        #[source]
        source: std::io::Error,
    },

    /// Error opening the circuit file
    #[error("Failed to read circuit file '{path}': {source}")]
    FileRead {
        path: String,
        #[source]
        source: std::io::Error,
    },

    /// Error writing the DOT source file
    #[error("Failed to write graph source '{path}': {source}")]
    SourceWrite {
        path: String,
        #[source]
        source: std::io::Error,
    },

    // ============ Renderer Errors ============
    /// The Graphviz executable could not be started
    #[error("Failed to run renderer '{program}': {source}")]
    RendererSpawn {
        program: String,
        #[source]
        source: std::io::Error,
    },

    /// The Graphviz executable ran but reported failure
    #[error("Renderer '{program}' failed ({status}): {stderr}")]
    RendererFailed {
        program: String,
        status: ExitStatus,
        stderr: String,
    },
}

impl GatevizError {
    /// Create a malformed wire declaration error
    pub fn malformed_wire(line: usize, text: impl Into<String>) -> Self {
        Self::MalformedWire {
            line,
            text: text.into(),
        }
    }

    /// Create a malformed gate declaration error
    pub fn malformed_gate(line: usize, text: impl Into<String>) -> Self {
        Self::MalformedGate {
            line,
            text: text.into(),
        }
    }

    /// Whether this error belongs to the malformed-input class.
    pub fn is_malformed_input(&self) -> bool {
        matches!(self, Self::MalformedWire { .. } | Self::MalformedGate { .. })
    }
}
