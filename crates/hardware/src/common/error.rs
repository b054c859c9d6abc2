//! Simulation Error Definitions.
//!
//! This module defines the error taxonomy for the simulator. It provides:
//! 1. **Fatal Errors:** `SimError` covers unreadable inputs, internal invariant
//!    violations inside the pipeline, and output failures. Any of these aborts the run.
//! 2. **Recoverable Errors:** `ParseError` describes a single malformed input line;
//!    loaders skip the line and continue.
//! 3. **Capacity Errors:** `QueueFull` hands a rejected instruction back to the caller.

use std::io;
use std::path::PathBuf;

use thiserror::Error;

use crate::isa::instruction::{Instruction, Opcode};

/// Fatal simulator errors.
///
/// None of these are retried. Input-side variants are raised before the first
/// cycle; pipeline-side variants indicate a bug in the engine rather than bad input,
/// since the loaders reject anything that could trigger them.
#[derive(Debug, Error)]
pub enum SimError {
    /// An input stream could not be opened or read.
    #[error("could not read '{}': {source}", path.display())]
    SourceUnavailable {
        /// Path that failed to open.
        path: PathBuf,
        /// Underlying I/O failure.
        #[source]
        source: io::Error,
    },

    /// The load stage computed an address outside data memory.
    #[error("load into R{rd} computed address {address}, outside data memory (0-{max})")]
    LoadAddressOutOfRange {
        /// Destination register of the faulting load.
        rd: usize,
        /// Effective address that was computed.
        address: i32,
        /// Highest valid address.
        max: usize,
    },

    /// An opcode reached a stage that cannot execute it.
    #[error("opcode {opcode} reached the {stage} stage")]
    UnexpectedOpcode {
        /// The offending opcode.
        opcode: Opcode,
        /// Name of the stage that received it.
        stage: &'static str,
    },

    /// The pipeline failed to drain within the configured cycle budget.
    #[error("pipeline did not drain within {limit} cycles")]
    CycleLimitExceeded {
        /// Configured cycle limit.
        limit: u64,
    },

    /// Writing a snapshot to the output stream failed.
    #[error("failed to write simulation output: {0}")]
    Output(#[from] io::Error),

    /// The configuration document could not be parsed.
    #[error("invalid configuration: {0}")]
    Config(#[from] serde_json::Error),
}

/// A single malformed line in one of the input streams.
///
/// Loaders log the error, record the line as rejected, and move on.
#[derive(Clone, Debug, PartialEq, Eq, Error)]
pub enum ParseError {
    /// The line is not wrapped in `<` and `>`.
    #[error("expected a <...> tuple, found '{0}'")]
    MissingBrackets(String),

    /// The tuple has the wrong number of comma-separated fields.
    #[error("expected {expected} fields, found {found}")]
    FieldCount {
        /// Number of fields the format requires.
        expected: usize,
        /// Number of fields present.
        found: usize,
    },

    /// The opcode mnemonic is not one of ADD, SUB, AND, OR, LD.
    #[error("unknown opcode '{0}'")]
    UnknownOpcode(String),

    /// The register name is not `R0`-`R7`.
    #[error("invalid register '{0}'")]
    InvalidRegister(String),

    /// The memory address is not 0-7.
    #[error("invalid memory address '{0}'")]
    InvalidAddress(String),

    /// The initial value is not a 32-bit integer.
    #[error("invalid integer value '{0}'")]
    InvalidValue(String),
}

/// Returned by [`InstructionQueue::push`](crate::core::arch::queue::InstructionQueue::push)
/// when the queue is at capacity. Carries the rejected instruction back to the caller.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Error)]
#[error("instruction queue full (capacity {capacity}), dropped {instruction}")]
pub struct QueueFull {
    /// The instruction that did not fit.
    pub instruction: Instruction,
    /// Capacity of the queue that rejected it.
    pub capacity: usize,
}
