//! Common utilities and types used throughout the pipeline simulator.
//!
//! This module provides fundamental building blocks that are shared across all components
//! of the simulator. It includes:
//! 1. **Constants:** Machine dimensions and default file names.
//! 2. **Error Handling:** Fatal simulation errors and recoverable per-line parse errors.
//! 3. **Register Management:** The eight-entry register file with busy flags.

/// Common constants used throughout the simulator.
pub mod constants;

/// Error types for fatal and recoverable conditions.
pub mod error;

/// Register file implementation.
pub mod reg;

pub use constants::{DATA_MEMORY_WORDS, NUM_REGS};
pub use error::{ParseError, QueueFull, SimError};
pub use reg::{Register, RegisterFile};
