//! Global Machine Constants.
//!
//! This module defines the fixed dimensions of the simulated machine and the
//! defaults used when no configuration overrides them. It includes:
//! 1. **Architectural Sizes:** Register file and data memory dimensions.
//! 2. **Pipeline Sizes:** Instruction queue capacity and result slot count.
//! 3. **Simulation Constants:** Watchdog limits and default input/output file names.

/// Number of general-purpose registers (`R0`-`R7`).
pub const NUM_REGS: usize = 8;

/// Number of integer words in data memory (addresses 0-7).
pub const DATA_MEMORY_WORDS: usize = 8;

/// Default capacity of the instruction queue.
pub const INSTRUCTION_QUEUE_CAPACITY: usize = 16;

/// Default upper bound on simulated cycles before the run is aborted.
///
/// A well-formed program drains in roughly `instructions * 6` cycles at worst,
/// so this is only ever reached by an engine bug.
pub const DEFAULT_MAX_CYCLES: u64 = 10_000;

/// Default program input file.
pub const DEFAULT_INSTRUCTION_FILE: &str = "instructions.txt";

/// Default initial register state file.
pub const DEFAULT_REGISTER_FILE: &str = "registers.txt";

/// Default initial data memory file.
pub const DEFAULT_DATA_MEMORY_FILE: &str = "datamemory.txt";

/// Default per-cycle dump output file.
pub const DEFAULT_OUTPUT_FILE: &str = "simulation.txt";

/// Register-name prefix used in every text format (`R3`).
pub const REGISTER_PREFIX: char = 'R';
