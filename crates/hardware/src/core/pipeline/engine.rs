//! Cycle Engine.
//!
//! Advances the whole pipeline by one clock cycle. Stages run in reverse
//! pipeline order so that each stage consumes what its upstream neighbour
//! produced in the *previous* cycle:
//!
//! 1. **Writeback:** frees both result slots and clears busy flags.
//! 2. **Load:** address buffer to the load result slot.
//! 3. **ALU:** ALU buffer to the ALU result slot.
//! 4. **Address:** load buffer to the address buffer.
//! 5. **Issue:** decode buffer to the load buffer, then to the ALU buffer.
//! 6. **Decode:** queue head to the decode buffer.
//!
//! Running writeback first means a register released this cycle is visible to
//! this cycle's decode.

use crate::common::error::SimError;
use crate::core::Cpu;
use crate::core::pipeline::stages::{
    address_stage, alu_stage, decode_stage, issue_alu_stage, issue_load_stage, load_stage,
    writeback_stage,
};

/// Runs one cycle of every stage.
///
/// # Arguments
///
/// * `cpu` - Mutable reference to the CPU state
///
/// # Returns
///
/// The first fatal stage error, if any. State is left as the failing stage
/// found it.
pub fn tick(cpu: &mut Cpu) -> Result<(), SimError> {
    writeback_stage(cpu);
    load_stage(cpu)?;
    alu_stage(cpu)?;
    address_stage(cpu);
    issue_load_stage(cpu);
    issue_alu_stage(cpu);
    decode_stage(cpu);

    cpu.stats.cycles += 1;
    Ok(())
}
