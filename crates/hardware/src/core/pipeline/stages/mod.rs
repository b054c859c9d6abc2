//! Pipeline stage implementations.
//!
//! This module contains one function per pipeline stage. Each takes the whole
//! machine by `&mut Cpu`, consumes its input buffer with `take()` and fills the
//! buffer downstream of it. It includes:
//! 1. **Decode:** Hazard check, queue pop, operand read and busy-flag claim.
//! 2. **Issue:** Routes the decoded instruction to the ALU or load path.
//! 3. **Execute:** ALU operations.
//! 4. **Memory:** Effective address calculation and the data memory read.
//! 5. **Writeback:** Commits both result slots to the register file.

/// Instruction decode stage implementation.
pub mod decode;

/// ALU execute stage implementation.
pub mod execute;

/// Issue split into the ALU and load paths.
pub mod issue;

/// Address calculation and load stage implementation.
pub mod memory;

/// Writeback stage implementation.
pub mod writeback;

/// Decode stage entry point.
pub use decode::decode_stage;
/// ALU stage entry point.
pub use execute::alu_stage;
/// Issue stage entry points.
pub use issue::{issue_alu_stage, issue_load_stage};
/// Address calculation and load stage entry points.
pub use memory::{address_stage, load_stage};
/// Writeback stage entry point.
pub use writeback::writeback_stage;
