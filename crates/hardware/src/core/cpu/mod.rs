//! CPU State Definition and Initialization.
//!
//! This module defines the central `Cpu` structure, which serves as the container for the
//! entire machine state. It holds:
//! 1. **Architectural State:** The register file (values and busy flags) and data memory.
//! 2. **Front End:** The bounded instruction queue feeding decode.
//! 3. **Pipeline State:** Every inter-stage buffer.
//! 4. **Statistics:** Counters updated by the stages as they run.
//!
//! Stage functions receive `&mut Cpu`; nothing else owns machine state.

use crate::common::RegisterFile;
use crate::common::error::SimError;
use crate::config::Config;
use crate::core::arch::memory::DataMemory;
use crate::core::arch::queue::InstructionQueue;
use crate::core::pipeline::engine;
use crate::core::pipeline::latches::PipelineLatches;
use crate::core::pipeline::traits::PipelineLatch;
use crate::stats::SimStats;

/// Main CPU structure containing all machine state.
#[derive(Clone, Debug)]
pub struct Cpu {
    /// General purpose registers with busy flags.
    pub regs: RegisterFile,
    /// Eight-word data memory.
    pub dmem: DataMemory,
    /// Instructions not yet decoded, oldest first.
    pub queue: InstructionQueue,
    /// Inter-stage buffers.
    pub latches: PipelineLatches,
    /// Performance counters.
    pub stats: SimStats,
    /// When set, decode also stalls on a busy destination register.
    pub stall_on_busy_destination: bool,
}

impl Cpu {
    /// Creates an idle CPU: zeroed registers and memory, empty queue and buffers.
    ///
    /// # Arguments
    ///
    /// * `config` - Supplies the queue capacity and hazard policy.
    pub fn new(config: &Config) -> Self {
        Self {
            regs: RegisterFile::new(),
            dmem: DataMemory::new(),
            queue: InstructionQueue::new(config.pipeline.queue_capacity),
            latches: PipelineLatches::default(),
            stats: SimStats::default(),
            stall_on_busy_destination: config.pipeline.stall_on_busy_destination,
        }
    }

    /// Advances the pipeline by one cycle.
    pub fn tick(&mut self) -> Result<(), SimError> {
        engine::tick(self)
    }

    /// Returns `true` once the queue and every buffer are empty.
    pub fn is_drained(&self) -> bool {
        self.queue.is_empty() && self.latches.is_empty()
    }
}
