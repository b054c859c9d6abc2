//! Instruction Decode Stage.
//!
//! This module implements the decode stage. It performs the following:
//! 1. **Hazard Check:** Leaves the queue head in place while it would read (or,
//!    by default, rewrite) a register that is still owed a result.
//! 2. **Operand Read:** Resolves both source values from the register file at the
//!    moment the instruction leaves the queue.
//! 3. **Destination Claim:** Marks the destination busy so younger readers stall.

use tracing::{debug, trace};

use crate::core::Cpu;
use crate::core::pipeline::hazards::decode_hazard;
use crate::core::pipeline::latches::IssueEntry;

/// Executes the decode stage.
///
/// Pops at most one instruction per cycle. A stalled instruction stays at the
/// head of the queue and is retried next cycle; the stall is counted in
/// [`SimStats::decode_stalls`](crate::stats::SimStats::decode_stalls).
///
/// Because decode runs last in the cycle, it already sees the busy flags
/// cleared by this cycle's writeback and the decode buffer emptied by this
/// cycle's issue.
///
/// # Arguments
///
/// * `cpu` - Mutable reference to the CPU state
pub fn decode_stage(cpu: &mut Cpu) {
    let Some(&inst) = cpu.queue.front() else {
        return;
    };

    if let Some(hazard) = decode_hazard(&inst, &cpu.regs, cpu.stall_on_busy_destination) {
        debug!(%inst, %hazard, "decode stall");
        cpu.stats.decode_stalls += 1;
        return;
    }

    let _ = cpu.queue.pop();

    // Sources are read before the destination is claimed: an instruction
    // naming its own destination as a source sees the old value.
    let entry = IssueEntry {
        opcode: inst.opcode,
        rd: inst.rd,
        v1: cpu.regs.read(inst.rs),
        v2: cpu.regs.read(inst.rt),
    };
    cpu.regs.set_busy(inst.rd);

    trace!(%inst, v1 = entry.v1, v2 = entry.v2, "decode");
    cpu.stats.decoded += 1;
    cpu.latches.decode = Some(entry);
}
