//! Core processor implementation.
//!
//! This module contains the machine state (register file, data memory and
//! instruction queue), the ALU, and the pipeline that moves instructions
//! between them.

/// Architectural storage (data memory, instruction queue).
pub mod arch;

/// CPU state container.
pub mod cpu;

/// Instruction pipeline implementation (engine, stages, latches, hazards).
pub mod pipeline;

/// Execution units (ALU).
pub mod units;

pub use self::cpu::Cpu;
