//! Execution units and functional components.
//!
//! This module contains the functional units used by the pipeline stages.
//! The only unit the machine has is the integer ALU, shared by the ALU stage
//! and the address calculation stage.

/// Arithmetic Logic Unit for integer operations.
pub mod alu;
