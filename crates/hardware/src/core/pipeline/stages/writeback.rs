//! Writeback Stage.
//!
//! This module implements the final stage of the pipeline. It commits results
//! to the register file and releases the destination busy flags. The load slot
//! is drained before the ALU slot; when both are occupied, both retire in the
//! same cycle.

use tracing::trace;

use crate::core::Cpu;

/// Executes the writeback stage.
///
/// # Arguments
///
/// * `cpu` - Mutable reference to the CPU state
///
/// # Behavior
///
/// - Writes the load slot's value to its destination and clears its busy flag
/// - Then does the same for the ALU slot
/// - Empties every slot it commits
/// - Updates retirement statistics
pub fn writeback_stage(cpu: &mut Cpu) {
    let load = cpu.latches.result.load.take();
    let alu = cpu.latches.result.alu.take();

    if let Some(r) = load {
        trace!(rd = r.rd, value = r.value, "writeback load");
        cpu.regs.commit(r.rd, r.value);
        cpu.stats.retired_load += 1;
    }

    if let Some(r) = alu {
        trace!(rd = r.rd, value = r.value, "writeback alu");
        cpu.regs.commit(r.rd, r.value);
        cpu.stats.retired_alu += 1;
    }

    if load.is_some() && alu.is_some() {
        cpu.stats.dual_writebacks += 1;
    }
}
