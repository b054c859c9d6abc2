//! Instruction Queue.
//!
//! Bounded FIFO holding parsed instructions until decode pops them.
//!
//! The queue is filled once, before the first cycle. A push beyond capacity is
//! rejected and the instruction is handed back inside [`QueueFull`]; the caller
//! decides how to report it. Nothing is dropped silently.

use std::collections::VecDeque;

use crate::common::error::QueueFull;
use crate::isa::Instruction;

/// FIFO instruction queue with a fixed capacity.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct InstructionQueue {
    entries: VecDeque<Instruction>,
    capacity: usize,
}

impl InstructionQueue {
    /// Creates an empty queue that holds at most `capacity` instructions.
    pub fn new(capacity: usize) -> Self {
        Self {
            entries: VecDeque::with_capacity(capacity),
            capacity,
        }
    }

    /// Appends an instruction at the rear.
    ///
    /// # Errors
    ///
    /// Returns [`QueueFull`] carrying the instruction if the queue is at capacity.
    pub fn push(&mut self, instruction: Instruction) -> Result<(), QueueFull> {
        if self.is_full() {
            return Err(QueueFull {
                instruction,
                capacity: self.capacity,
            });
        }
        self.entries.push_back(instruction);
        Ok(())
    }

    /// Removes and returns the head instruction.
    pub fn pop(&mut self) -> Option<Instruction> {
        self.entries.pop_front()
    }

    /// Returns the head instruction without removing it.
    pub fn front(&self) -> Option<&Instruction> {
        self.entries.front()
    }

    /// Number of queued instructions.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Returns `true` if no instructions are queued.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Returns `true` if a push would be rejected.
    pub fn is_full(&self) -> bool {
        self.entries.len() >= self.capacity
    }

    /// Maximum number of instructions the queue accepts.
    pub const fn capacity(&self) -> usize {
        self.capacity
    }

    /// Iterates from head to tail.
    pub fn iter(&self) -> impl Iterator<Item = &Instruction> {
        self.entries.iter()
    }
}
