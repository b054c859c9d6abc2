//! Input Loader and Initial State.
//!
//! This module turns the three text inputs into machine state. It performs:
//! 1. **Program loading:** Parses `<OPCODE,Rd,Rs,Rt>` lines into instructions.
//! 2. **State loading:** Parses `<Rn,value>` register lines and `<addr,value>` memory lines.
//! 3. **Line recovery:** Blank lines are ignored; malformed lines are logged, recorded
//!    as rejected, and skipped. Only an unreadable file is fatal.

use std::fs;
use std::path::Path;

use tracing::warn;

use crate::common::constants::DATA_MEMORY_WORDS;
use crate::common::error::{ParseError, SimError};
use crate::common::reg::RegisterFile;
use crate::config::IoConfig;
use crate::core::arch::memory::DataMemory;
use crate::isa::Instruction;
use crate::isa::tuple;

/// Number of fields in a register or memory line.
const STATE_FIELDS: usize = 2;

/// Which input a rejected line came from.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum InputKind {
    /// The program file.
    Instructions,
    /// The initial register file.
    Registers,
    /// The initial data memory.
    DataMemory,
}

/// A malformed input line that was skipped.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct RejectedLine {
    /// Input the line came from.
    pub kind: InputKind,
    /// One-based line number.
    pub line: usize,
    /// The line as read, without its terminator.
    pub text: String,
    /// Why it was rejected.
    pub error: ParseError,
}

/// Runs `parse` over every non-blank line of `text`, collecting successes in
/// order and recording failures.
fn parse_lines<T>(
    text: &str,
    kind: InputKind,
    rejected: &mut Vec<RejectedLine>,
    mut parse: impl FnMut(&str) -> Result<T, ParseError>,
) -> Vec<T> {
    let mut out = Vec::new();
    for (idx, raw) in text.lines().enumerate() {
        if raw.trim().is_empty() {
            continue;
        }
        match parse(raw) {
            Ok(item) => out.push(item),
            Err(error) => {
                warn!(?kind, line = idx + 1, text = raw.trim_end(), %error, "skipping input line");
                rejected.push(RejectedLine {
                    kind,
                    line: idx + 1,
                    text: raw.trim_end().to_owned(),
                    error,
                });
            }
        }
    }
    out
}

/// A parsed program.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Program {
    /// Well-formed instructions in file order.
    pub instructions: Vec<Instruction>,
    /// Lines that failed to parse.
    pub rejected: Vec<RejectedLine>,
}

impl Program {
    /// Parses program text, one instruction per line.
    ///
    /// # Examples
    ///
    /// ```
    /// use mipsim_core::sim::loader::Program;
    ///
    /// let program = Program::parse("<ADD,R1,R2,R3>\n\n<MUL,R1,R2,R3>\n<LD,R4,R1,R0>\n");
    /// assert_eq!(program.instructions.len(), 2);
    /// assert_eq!(program.rejected.len(), 1);
    /// assert_eq!(program.rejected[0].line, 3);
    /// ```
    pub fn parse(text: &str) -> Self {
        let mut rejected = Vec::new();
        let instructions = parse_lines(
            text,
            InputKind::Instructions,
            &mut rejected,
            str::parse::<Instruction>,
        );
        Self {
            instructions,
            rejected,
        }
    }
}

/// Initial register and data memory contents.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct InitialState {
    /// Register values; every register starts not busy.
    pub registers: RegisterFile,
    /// Data memory words.
    pub memory: DataMemory,
    /// Lines from either input that failed to parse.
    pub rejected: Vec<RejectedLine>,
}

impl InitialState {
    /// Parses register and memory text. Unmentioned cells stay zero; a cell
    /// mentioned twice keeps the later value.
    pub fn parse(registers: &str, memory: &str) -> Self {
        let mut state = Self::default();
        state.apply_registers(registers);
        state.apply_memory(memory);
        state
    }

    /// Parses only register text, with zeroed memory.
    pub fn parse_registers(text: &str) -> Self {
        let mut state = Self::default();
        state.apply_registers(text);
        state
    }

    /// Parses only memory text, with zeroed registers.
    pub fn parse_memory(text: &str) -> Self {
        let mut state = Self::default();
        state.apply_memory(text);
        state
    }

    fn apply_registers(&mut self, text: &str) {
        let entries = parse_lines(text, InputKind::Registers, &mut self.rejected, |line| {
            let f = tuple::fields(line, STATE_FIELDS)?;
            Ok((tuple::register(f[0])?, tuple::value(f[1])?))
        });
        for (idx, value) in entries {
            self.registers.write(idx, value);
        }
    }

    fn apply_memory(&mut self, text: &str) {
        let entries = parse_lines(text, InputKind::DataMemory, &mut self.rejected, |line| {
            let f = tuple::fields(line, STATE_FIELDS)?;
            let addr = f[0]
                .parse::<usize>()
                .ok()
                .filter(|&a| a < DATA_MEMORY_WORDS)
                .ok_or_else(|| ParseError::InvalidAddress(f[0].to_owned()))?;
            Ok((addr, tuple::value(f[1])?))
        });
        for (addr, value) in entries {
            self.memory.write(addr, value);
        }
    }
}

/// Reads an entire input file.
///
/// # Returns
///
/// [`SimError::SourceUnavailable`] naming `path` if it cannot be read.
pub fn read_source(path: &Path) -> Result<String, SimError> {
    fs::read_to_string(path).map_err(|source| SimError::SourceUnavailable {
        path: path.to_path_buf(),
        source,
    })
}

/// Reads and parses the program, register and memory files named by `io`.
pub fn load_inputs(io: &IoConfig) -> Result<(Program, InitialState), SimError> {
    let program = Program::parse(&read_source(&io.instructions)?);
    let registers = read_source(&io.registers)?;
    let memory = read_source(&io.data_memory)?;
    Ok((program, InitialState::parse(&registers, &memory)))
}
