//! Architectural state components.
//!
//! This module contains the storage elements of the machine outside the
//! pipeline buffers. It includes the following modules:
//! 1. **Data Memory:** The eight-word data memory read by the load stage.
//! 2. **Instruction Queue:** The bounded FIFO of instructions awaiting decode.
//!
//! The register file lives in [`crate::common::reg`].

/// Data memory implementation.
pub mod memory;

/// Instruction queue implementation.
pub mod queue;
