//! Simulation driver, input loading and output.
//!
//! Provides the loaders that build the initial machine from text, the driver
//! that runs it, and the snapshot types and sinks that record each cycle.

/// Text input parsing and initial state.
pub mod loader;

/// Cycle driver.
pub mod simulator;

/// Snapshot consumers.
pub mod sink;

/// Per-cycle state copies and the dump format.
pub mod snapshot;

pub use simulator::Simulator;
pub use sink::{TraceSink, VecSink, WriterSink};
pub use snapshot::Snapshot;
