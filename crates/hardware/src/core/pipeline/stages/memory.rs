//! Load Path Stages.
//!
//! This module implements the two stages of the load path:
//! 1. **Address Calculation:** `address = v1 + v2`, wrapping on overflow.
//! 2. **Load:** Reads data memory at the computed address into the load result slot.
//!
//! Both stages always empty their input buffer, so a load spends exactly one
//! cycle in each.

use tracing::trace;

use crate::common::constants::DATA_MEMORY_WORDS;
use crate::common::error::SimError;
use crate::core::Cpu;
use crate::core::pipeline::latches::{AddressEntry, ResultEntry};
use crate::core::units::alu::Alu;
use crate::isa::AluOp;

/// Computes the effective address of the load in the load buffer.
///
/// # Arguments
///
/// * `cpu` - Mutable reference to the CPU state
pub fn address_stage(cpu: &mut Cpu) {
    let Some(entry) = cpu.latches.load.take() else {
        return;
    };

    let address = Alu::execute(AluOp::Add, entry.v1, entry.v2);
    trace!(rd = entry.rd, address, "address");
    cpu.latches.address = Some(AddressEntry {
        rd: entry.rd,
        address,
    });
}

/// Reads data memory for the load in the address buffer.
///
/// # Arguments
///
/// * `cpu` - Mutable reference to the CPU state
///
/// # Returns
///
/// [`SimError::LoadAddressOutOfRange`] if the effective address is negative or
/// past the last data memory word.
pub fn load_stage(cpu: &mut Cpu) -> Result<(), SimError> {
    let Some(entry) = cpu.latches.address.take() else {
        return Ok(());
    };

    let value = cpu
        .dmem
        .read(entry.address)
        .ok_or(SimError::LoadAddressOutOfRange {
            rd: entry.rd,
            address: entry.address,
            max: DATA_MEMORY_WORDS - 1,
        })?;

    trace!(rd = entry.rd, address = entry.address, value, "load");
    cpu.latches.result.load = Some(ResultEntry {
        rd: entry.rd,
        value,
    });
    Ok(())
}
