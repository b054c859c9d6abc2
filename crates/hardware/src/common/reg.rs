//! Register File with Busy Flags.
//!
//! This module provides the `RegisterFile` struct holding the eight architectural
//! registers. It provides:
//! 1. **Storage:** An integer value per register.
//! 2. **Hazard State:** A busy flag per register, set when decode claims the register
//!    as a pending destination and cleared when writeback commits into it.
//! 3. **Observability:** Read-only iteration for snapshots and debugging.

use crate::common::constants::NUM_REGS;

/// A single architectural register.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct Register {
    /// Current committed value.
    pub value: i32,
    /// Set while an in-flight instruction owes this register a result.
    pub busy: bool,
}

/// The eight-entry register file.
///
/// Values only change through [`commit`](Self::commit) once simulation starts;
/// [`write`](Self::write) exists for loading the initial state.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct RegisterFile {
    regs: [Register; NUM_REGS],
}

impl RegisterFile {
    /// Creates a register file with every register zero and not busy.
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a register file from initial values, all registers not busy.
    pub fn from_values(values: [i32; NUM_REGS]) -> Self {
        Self {
            regs: values.map(|value| Register { value, busy: false }),
        }
    }

    /// Reads the committed value of register `idx`.
    ///
    /// # Panics
    ///
    /// Panics if `idx >= NUM_REGS`. Register indices are validated when
    /// instructions are parsed.
    pub fn read(&self, idx: usize) -> i32 {
        self.regs[idx].value
    }

    /// Overwrites the value of register `idx` without touching its busy flag.
    ///
    /// Used to load initial state before the first cycle.
    pub fn write(&mut self, idx: usize, val: i32) {
        self.regs[idx].value = val;
    }

    /// Returns whether register `idx` has a write pending.
    pub fn is_busy(&self, idx: usize) -> bool {
        self.regs[idx].busy
    }

    /// Claims register `idx` as the destination of an in-flight instruction.
    pub fn set_busy(&mut self, idx: usize) {
        self.regs[idx].busy = true;
    }

    /// Commits a result into register `idx` and releases its busy flag.
    pub fn commit(&mut self, idx: usize, val: i32) {
        self.regs[idx] = Register {
            value: val,
            busy: false,
        };
    }

    /// Returns a copy of register `idx`.
    pub fn get(&self, idx: usize) -> Register {
        self.regs[idx]
    }

    /// Returns all registers in index order.
    pub fn registers(&self) -> [Register; NUM_REGS] {
        self.regs
    }

    /// Number of registers currently marked busy.
    pub fn busy_count(&self) -> usize {
        self.regs.iter().filter(|r| r.busy).count()
    }

    /// Iterates over the registers in index order.
    pub fn iter(&self) -> impl Iterator<Item = &Register> {
        self.regs.iter()
    }
}
