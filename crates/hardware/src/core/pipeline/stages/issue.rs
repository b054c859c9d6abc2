//! Issue Split.
//!
//! Routes the decoded instruction to one of the two execution paths. Neither
//! function ever stalls: both downstream buffers are drained earlier in the
//! same cycle.

use tracing::trace;

use crate::core::Cpu;

/// Moves a load from the decode buffer into the load buffer.
///
/// Leaves the decode buffer untouched when it holds an ALU instruction.
pub fn issue_load_stage(cpu: &mut Cpu) {
    if let Some(entry) = cpu.latches.decode.take_if(|e| e.opcode.is_load()) {
        trace!(rd = entry.rd, "issue load");
        cpu.latches.load = Some(entry);
    }
}

/// Moves an ALU instruction from the decode buffer into the ALU buffer.
///
/// Leaves the decode buffer untouched when it holds a load.
pub fn issue_alu_stage(cpu: &mut Cpu) {
    if let Some(entry) = cpu.latches.decode.take_if(|e| !e.opcode.is_load()) {
        trace!(opcode = %entry.opcode, rd = entry.rd, "issue alu");
        cpu.latches.alu = Some(entry);
    }
}
