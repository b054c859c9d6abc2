//! Instruction pipeline implementation.
//!
//! This module contains the five-buffer pipeline. It includes the following components:
//! 1. **Engine:** The per-cycle driver that runs every stage in reverse order.
//! 2. **Hazards:** The register-busy interlock checked at decode.
//! 3. **Latches:** Inter-stage buffers (decode, ALU, load, address, result).
//! 4. **Stages:** Decode, issue, ALU, address calculation, load and writeback.
//! 5. **Traits:** Common interface for pipeline buffers.

/// Per-cycle stage sequencing.
pub mod engine;

/// Register-busy hazard detection.
pub mod hazards;

/// Inter-stage pipeline buffers.
pub mod latches;

/// Pipeline stage implementations.
pub mod stages;

/// Traits for pipeline buffers.
pub mod traits;
