//! Simulator: owns the CPU and drives it cycle by cycle.
//!
//! This module wires the loaders, the cycle engine and the snapshot sinks together:
//! 1. **Construction:** Builds a `Cpu` from configuration and fills the queue,
//!    registers and memory from parsed inputs.
//! 2. **Stepping:** One `tick` is one clock cycle of every stage.
//! 3. **Running:** Emits a snapshot before the first cycle and after every cycle
//!    until the queue and all buffers are empty.

use tracing::{info, warn};

use crate::common::error::SimError;
use crate::config::Config;
use crate::core::Cpu;
use crate::sim::loader::{self, InitialState, Program};
use crate::sim::sink::TraceSink;
use crate::sim::snapshot::Snapshot;
use crate::stats::SimStats;

/// Top-level simulator.
#[derive(Clone, Debug)]
pub struct Simulator {
    /// Machine state (registers, memory, queue, buffers, stats).
    pub cpu: Cpu,
    max_cycles: u64,
}

impl Simulator {
    /// Creates a simulator with an empty program and zeroed state.
    pub fn new(config: &Config) -> Self {
        Self {
            cpu: Cpu::new(config),
            max_cycles: config.general.max_cycles,
        }
    }

    /// Creates a simulator loaded with `program` and `state`.
    ///
    /// Instructions that do not fit in the queue are dropped, logged and counted
    /// in [`SimStats::dropped_instructions`]. Rejected input lines are counted in
    /// [`SimStats::skipped_lines`].
    pub fn with_state(config: &Config, program: Program, state: InitialState) -> Self {
        let mut sim = Self::new(config);
        sim.cpu.regs = state.registers;
        sim.cpu.dmem = state.memory;
        sim.cpu.stats.skipped_lines = (program.rejected.len() + state.rejected.len()) as u64;

        for inst in program.instructions {
            if let Err(full) = sim.cpu.queue.push(inst) {
                warn!(%full, "dropping instruction");
                sim.cpu.stats.dropped_instructions += 1;
            }
        }
        sim
    }

    /// Reads the input files named in `config.io` and builds a simulator from them.
    pub fn from_config(config: &Config) -> Result<Self, SimError> {
        let (program, state) = loader::load_inputs(&config.io)?;
        Ok(Self::with_state(config, program, state))
    }

    /// Advances one clock cycle.
    pub fn tick(&mut self) -> Result<(), SimError> {
        self.cpu.tick()
    }

    /// Returns `true` once the queue and every buffer are empty.
    pub fn is_drained(&self) -> bool {
        self.cpu.is_drained()
    }

    /// Cycles simulated so far; also the current step number.
    pub const fn cycles(&self) -> u64 {
        self.cpu.stats.cycles
    }

    /// Captures the current state.
    pub fn snapshot(&self) -> Snapshot {
        Snapshot::capture(self.cycles(), &self.cpu)
    }

    /// Performance counters.
    pub const fn stats(&self) -> &SimStats {
        &self.cpu.stats
    }

    /// Advances one cycle and returns the resulting snapshot, or `None` if the
    /// pipeline was already drained.
    pub fn step(&mut self) -> Result<Option<Snapshot>, SimError> {
        if self.is_drained() {
            return Ok(None);
        }
        self.tick()?;
        Ok(Some(self.snapshot()))
    }

    /// Runs until drained, handing every snapshot to `sink`.
    ///
    /// # Returns
    ///
    /// The number of cycles simulated, or the first fatal error. Exceeding the
    /// configured cycle budget is [`SimError::CycleLimitExceeded`].
    pub fn run<S: TraceSink + ?Sized>(&mut self, sink: &mut S) -> Result<u64, SimError> {
        info!(queued = self.cpu.queue.len(), "simulation start");
        sink.record(&self.snapshot())?;

        while !self.is_drained() {
            if self.cycles() >= self.max_cycles {
                return Err(SimError::CycleLimitExceeded {
                    limit: self.max_cycles,
                });
            }
            self.tick()?;
            sink.record(&self.snapshot())?;
        }

        info!(cycles = self.cycles(), "simulation complete");
        Ok(self.cycles())
    }
}
