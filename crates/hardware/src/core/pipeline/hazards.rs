//! Register-Busy Hazard Detection.
//!
//! This module implements the only interlock the pipeline has. It provides:
//! 1. **Source Check:** An instruction may not leave the queue while either of its
//!    source registers has a write pending (read-after-write).
//! 2. **Destination Check:** Optionally, an instruction may not leave the queue while
//!    its destination already has a write pending (write-after-write). This keeps
//!    at most one in-flight writer per register, so a busy flag always names exactly
//!    one producer.
//!
//! There is no forwarding: a stalled instruction waits for writeback to clear the flag.

use std::fmt;

use crate::common::reg::RegisterFile;
use crate::isa::Instruction;

/// Reason decode cannot issue the head instruction this cycle.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Hazard {
    /// A source register is waiting on an in-flight producer.
    SourceBusy(usize),
    /// The destination register already has an in-flight producer.
    DestinationBusy(usize),
}

impl fmt::Display for Hazard {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::SourceBusy(r) => write!(f, "source R{r} busy"),
            Self::DestinationBusy(r) => write!(f, "destination R{r} busy"),
        }
    }
}

/// Checks whether `inst` must stall at decode.
///
/// # Arguments
///
/// * `inst` - The instruction at the head of the queue.
/// * `regs` - The register file, whose busy flags reflect every in-flight destination.
/// * `check_destination` - Also stall when the destination is busy.
///
/// # Returns
///
/// `None` if the instruction may decode, otherwise the first hazard found
/// (sources are checked before the destination).
///
/// # Examples
///
/// ```
/// use mipsim_core::common::RegisterFile;
/// use mipsim_core::core::pipeline::hazards::{decode_hazard, Hazard};
/// use mipsim_core::isa::{Instruction, Opcode};
///
/// let mut regs = RegisterFile::new();
/// regs.set_busy(1);
///
/// // add R4, R1, R5 reads R1 while it is still owed a result
/// let dependent = Instruction::new(Opcode::Add, 4, 1, 5);
/// assert_eq!(decode_hazard(&dependent, &regs, true), Some(Hazard::SourceBusy(1)));
///
/// // add R1, R2, R3 rewrites R1 while the first write is in flight
/// let rewrite = Instruction::new(Opcode::Add, 1, 2, 3);
/// assert_eq!(decode_hazard(&rewrite, &regs, true), Some(Hazard::DestinationBusy(1)));
/// assert_eq!(decode_hazard(&rewrite, &regs, false), None);
/// ```
pub fn decode_hazard(
    inst: &Instruction,
    regs: &RegisterFile,
    check_destination: bool,
) -> Option<Hazard> {
    if let Some(&src) = inst.sources().iter().find(|&&r| regs.is_busy(r)) {
        return Some(Hazard::SourceBusy(src));
    }

    if check_destination && regs.is_busy(inst.rd) {
        return Some(Hazard::DestinationBusy(inst.rd));
    }

    None
}
