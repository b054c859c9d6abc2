//! Five-buffer pipeline simulator library.
//!
//! This crate implements a cycle-accurate simulator of a small register machine
//! whose in-order front end feeds an ALU path and a load path that share one
//! writeback stage. It provides the following:
//! 1. **Core:** Register file with busy flags, data memory, instruction queue,
//!    pipeline buffers, and the stages that move instructions between them.
//! 2. **ISA:** The `ADD`/`SUB`/`AND`/`OR`/`LD` opcode set and its text format.
//! 3. **Simulation:** Input loaders, the cycle driver, per-cycle snapshots and sinks.
//! 4. **Support:** Configuration, error types and statistics.
//!
//! # Examples
//!
//! ```
//! use mipsim_core::sim::loader::{InitialState, Program};
//! use mipsim_core::sim::VecSink;
//! use mipsim_core::{Config, Simulator};
//!
//! let program = Program::parse("<ADD,R1,R2,R3>");
//! let state = InitialState::parse_registers("<R2,3>\n<R3,4>");
//! let mut sim = Simulator::with_state(&Config::default(), program, state);
//!
//! let mut sink = VecSink::new();
//! let cycles = sim.run(&mut sink).unwrap();
//!
//! assert_eq!(cycles, 4);
//! assert_eq!(sim.cpu.regs.read(1), 7);
//! ```

/// Common types and constants (registers, errors, machine dimensions).
pub mod common;
/// Simulator configuration (defaults and hierarchical config structures).
pub mod config;
/// CPU core (state, pipeline, execution units).
pub mod core;
/// Instruction set (opcodes, instruction format).
pub mod isa;
/// Input loading, cycle driver and snapshot output.
pub mod sim;
/// Simulation statistics collection and reporting.
pub mod stats;

/// Root configuration type; use `Config::default()` or load from JSON.
pub use crate::config::Config;
/// Machine state container; holds registers, memory, queue, buffers and stats.
pub use crate::core::Cpu;
/// Cycle driver; construct with `Simulator::with_state` or `Simulator::from_config`.
pub use crate::sim::Simulator;
