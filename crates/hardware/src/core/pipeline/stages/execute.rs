//! ALU Execute Stage.

use tracing::trace;

use crate::common::error::SimError;
use crate::core::Cpu;
use crate::core::pipeline::latches::ResultEntry;
use crate::core::units::alu::Alu;

/// Executes the ALU stage.
///
/// Consumes the ALU buffer and deposits `{rd, value}` into the ALU result slot.
///
/// # Arguments
///
/// * `cpu` - Mutable reference to the CPU state
///
/// # Returns
///
/// [`SimError::UnexpectedOpcode`] if a load reached the ALU path, which issue
/// never allows.
pub fn alu_stage(cpu: &mut Cpu) -> Result<(), SimError> {
    let Some(entry) = cpu.latches.alu.take() else {
        return Ok(());
    };

    let op = entry.opcode.alu_op().ok_or(SimError::UnexpectedOpcode {
        opcode: entry.opcode,
        stage: "alu",
    })?;
    let value = Alu::execute(op, entry.v1, entry.v2);

    trace!(opcode = %entry.opcode, rd = entry.rd, v1 = entry.v1, v2 = entry.v2, value, "alu");
    cpu.latches.result.alu = Some(ResultEntry {
        rd: entry.rd,
        value,
    });
    Ok(())
}
