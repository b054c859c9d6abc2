//! Instruction Set Definitions.
//!
//! Contains the opcode set and the textual instruction format the simulator
//! consumes. Instructions are never encoded to binary; the bracketed tuple
//! `<OPCODE,Rd,Rs,Rt>` is the only representation.
//!
//! # Opcodes
//!
//! * `ADD`, `SUB`, `AND`, `OR`: register-register ALU operations.
//! * `LD`: load from data memory at `Rs + Rt`.

/// Opcodes and the decoded instruction type.
pub mod instruction;

/// Bracketed tuple syntax shared by all input streams.
pub mod tuple;

pub use instruction::{AluOp, Instruction, Opcode};
