//! Per-Cycle State Snapshots.
//!
//! A [`Snapshot`] is an owned copy of everything an observer can see after a
//! cycle: the queue, every buffer, the register file and data memory. Its
//! `Display` renders the traditional eight-line dump:
//!
//! ```text
//! STEP 1:
//! INM:<LD,R4,R5,R6>
//! INB:<ADD,R1,3,4>
//! AIB:
//! LIB:
//! ADB:
//! REB:
//! RGF:<R0,0>,<R1,0>,<R2,3>,<R3,4>,<R4,0>,<R5,0>,<R6,0>,<R7,0>
//! DAM:<0,0>,<1,0>,<2,0>,<3,0>,<4,0>,<5,0>,<6,0>,<7,0>
//! ```
//!
//! Queue entries print register names; buffer entries print the operand values
//! resolved at decode. An empty buffer prints only its label.

use std::fmt;

use crate::common::constants::{DATA_MEMORY_WORDS, NUM_REGS};
use crate::common::reg::Register;
use crate::core::Cpu;
use crate::core::pipeline::latches::{AddressEntry, IssueEntry, PipelineLatches, ResultEntry};
use crate::isa::Instruction;

impl fmt::Display for IssueEntry {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "<{},R{},{},{}>", self.opcode, self.rd, self.v1, self.v2)
    }
}

impl fmt::Display for AddressEntry {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "<R{},{}>", self.rd, self.address)
    }
}

impl fmt::Display for ResultEntry {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "<R{},{}>", self.rd, self.value)
    }
}

/// Writes `label:` followed by the items separated by commas, and a newline.
fn write_row<T: fmt::Display>(
    f: &mut fmt::Formatter<'_>,
    label: &str,
    items: impl IntoIterator<Item = T>,
) -> fmt::Result {
    write!(f, "{label}:")?;
    for (i, item) in items.into_iter().enumerate() {
        if i > 0 {
            f.write_str(",")?;
        }
        write!(f, "{item}")?;
    }
    writeln!(f)
}

/// Read-only copy of the machine after a given step.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Snapshot {
    /// Step number; step 0 is the state before the first cycle.
    pub step: u64,
    /// Queued instructions, oldest first.
    pub queue: Vec<Instruction>,
    /// Every inter-stage buffer.
    pub latches: PipelineLatches,
    /// Register values and busy flags.
    pub registers: [Register; NUM_REGS],
    /// Data memory words.
    pub memory: [i32; DATA_MEMORY_WORDS],
}

impl Snapshot {
    /// Captures the current state of `cpu` as step `step`.
    pub fn capture(step: u64, cpu: &Cpu) -> Self {
        Self {
            step,
            queue: cpu.queue.iter().copied().collect(),
            latches: cpu.latches.clone(),
            registers: cpu.regs.registers(),
            memory: cpu.dmem.words(),
        }
    }

    /// Register values in index order.
    pub fn register_values(&self) -> [i32; NUM_REGS] {
        self.registers.map(|r| r.value)
    }

    /// Indices of registers marked busy.
    pub fn busy_registers(&self) -> Vec<usize> {
        self.registers
            .iter()
            .enumerate()
            .filter(|(_, r)| r.busy)
            .map(|(i, _)| i)
            .collect()
    }
}

impl fmt::Display for Snapshot {
    /// Renders the eight-line dump, each line newline-terminated.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "STEP {}:", self.step)?;
        write_row(f, "INM", &self.queue)?;
        write_row(f, "INB", self.latches.decode)?;
        write_row(f, "AIB", self.latches.alu)?;
        write_row(f, "LIB", self.latches.load)?;
        write_row(f, "ADB", self.latches.address)?;
        write_row(f, "REB", self.latches.result.entries())?;
        write_row(
            f,
            "RGF",
            self.registers
                .iter()
                .enumerate()
                .map(|(i, r)| format!("<R{i},{}>", r.value)),
        )?;
        write_row(
            f,
            "DAM",
            self.memory
                .iter()
                .enumerate()
                .map(|(i, v)| format!("<{i},{v}>")),
        )
    }
}
