//! Pipeline latch structures for inter-stage communication.
//!
//! This module defines the entry types carried between the pipeline stages:
//! Queue → Decode buffer → {ALU buffer | Load buffer → Address buffer} → Result buffer.
//!
//! 1. **Instruction Flow:** Every buffer is an owned `Option`, moved out by the
//!    consuming stage with `take()`, so no entry is ever aliased by two stages.
//! 2. **Operand Capture:** Source values are resolved once at decode and carried
//!    by value; later stages never re-read the register file.
//! 3. **Dual Completion:** The result buffer has one slot per completion path so a
//!    load and an ALU result can retire in the same cycle.

use crate::core::pipeline::traits::PipelineLatch;
use crate::isa::Opcode;

/// Entry in the decode, ALU and load buffers.
///
/// An instruction after decode: opcode, destination, and both source values
/// as they were in the register file when it left the queue.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct IssueEntry {
    /// Operation to perform.
    pub opcode: Opcode,
    /// Destination register index.
    pub rd: usize,
    /// Value read from the first source register.
    pub v1: i32,
    /// Value read from the second source register.
    pub v2: i32,
}

/// Entry in the address buffer (address calculation to load).
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct AddressEntry {
    /// Destination register index.
    pub rd: usize,
    /// Effective data memory address.
    pub address: i32,
}

/// Entry in one of the result slots (awaiting writeback).
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct ResultEntry {
    /// Destination register index.
    pub rd: usize,
    /// Value to commit.
    pub value: i32,
}

/// The two-slot result buffer feeding writeback.
///
/// Writeback drains `load` before `alu`; both may retire in one cycle.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct ResultBuffer {
    /// Slot written by the load stage.
    pub load: Option<ResultEntry>,
    /// Slot written by the ALU stage.
    pub alu: Option<ResultEntry>,
}

impl ResultBuffer {
    /// Occupied slots in writeback priority order (load first).
    pub fn entries(&self) -> impl Iterator<Item = &ResultEntry> {
        self.load.iter().chain(self.alu.iter())
    }
}

impl PipelineLatch for ResultBuffer {
    fn flush(&mut self) {
        self.load = None;
        self.alu = None;
    }

    fn is_empty(&self) -> bool {
        self.load.is_none() && self.alu.is_none()
    }
}

/// Every buffer between the instruction queue and the register file.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct PipelineLatches {
    /// Decode buffer (INB): decode → issue.
    pub decode: Option<IssueEntry>,
    /// ALU buffer (AIB): issue → ALU.
    pub alu: Option<IssueEntry>,
    /// Load buffer (LIB): issue → address calculation.
    pub load: Option<IssueEntry>,
    /// Address buffer (ADB): address calculation → load.
    pub address: Option<AddressEntry>,
    /// Result buffer (REB): ALU / load → writeback.
    pub result: ResultBuffer,
}

impl PipelineLatches {
    /// Destination registers of every in-flight instruction, in pipeline order
    /// from youngest (decode) to oldest (result buffer).
    pub fn pending_destinations(&self) -> Vec<usize> {
        let issue = [self.decode, self.alu, self.load];
        issue
            .iter()
            .flatten()
            .map(|e| e.rd)
            .chain(self.address.iter().map(|e| e.rd))
            .chain(self.result.entries().map(|e| e.rd))
            .collect()
    }
}

impl PipelineLatch for PipelineLatches {
    fn flush(&mut self) {
        self.decode.flush();
        self.alu.flush();
        self.load.flush();
        self.address.flush();
        self.result.flush();
    }

    fn is_empty(&self) -> bool {
        self.decode.is_empty()
            && self.alu.is_empty()
            && self.load.is_empty()
            && self.address.is_empty()
            && self.result.is_empty()
    }
}
