//! Data Memory.
//!
//! This module implements the flat data memory of the machine. It performs the following:
//! 1. **Storage:** Maintains eight signed 32-bit words, addressed 0-7.
//! 2. **Bounds Reporting:** Reads return `None` for addresses outside the array so
//!    the load stage can raise a fatal error instead of reading garbage.

use crate::common::constants::DATA_MEMORY_WORDS;

/// Word-addressed data memory.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct DataMemory {
    words: [i32; DATA_MEMORY_WORDS],
}

impl DataMemory {
    /// Creates a zero-filled data memory.
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a data memory from initial contents.
    pub const fn from_words(words: [i32; DATA_MEMORY_WORDS]) -> Self {
        Self { words }
    }

    /// Reads the word at `addr`, or `None` if the address is out of range.
    ///
    /// Addresses are computed as signed sums, so negative values are possible
    /// and simply out of range.
    pub fn read(&self, addr: i32) -> Option<i32> {
        usize::try_from(addr)
            .ok()
            .and_then(|a| self.words.get(a).copied())
    }

    /// Writes the word at `addr` (used to load initial state).
    ///
    /// # Panics
    ///
    /// Panics if `addr >= DATA_MEMORY_WORDS`. Addresses are validated by the loader.
    pub fn write(&mut self, addr: usize, val: i32) {
        self.words[addr] = val;
    }

    /// Returns the full memory contents in address order.
    pub const fn words(&self) -> [i32; DATA_MEMORY_WORDS] {
        self.words
    }
}
