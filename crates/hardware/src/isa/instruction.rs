//! Opcodes and Instructions.
//!
//! This module defines the closed opcode set and the instruction type that flows
//! through the instruction queue. It provides:
//! 1. **Opcode Classification:** Which opcodes take the ALU path and which the load path.
//! 2. **Parsing:** `FromStr` for the `<OPCODE,Rd,Rs,Rt>` program format.
//! 3. **Formatting:** `Display` producing the same tuple form, used by snapshots.

use std::fmt;
use std::str::FromStr;

use crate::common::error::ParseError;
use crate::isa::tuple;

/// Number of fields in a program line.
const PROGRAM_FIELDS: usize = 4;

/// Instruction opcodes.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Opcode {
    /// `Rd = Rs + Rt`.
    Add,
    /// `Rd = Rs - Rt`.
    Sub,
    /// `Rd = Rs & Rt`.
    And,
    /// `Rd = Rs | Rt`.
    Or,
    /// `Rd = MEM[Rs + Rt]`.
    Ld,
}

/// Operations the ALU can perform.
///
/// A strict subset of [`Opcode`]: the load opcode never reaches the ALU stage,
/// and the address calculation stage reuses [`AluOp::Add`].
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum AluOp {
    /// Wrapping addition.
    Add,
    /// Wrapping subtraction.
    Sub,
    /// Bitwise AND.
    And,
    /// Bitwise OR.
    Or,
}

impl Opcode {
    /// Every opcode, in mnemonic table order.
    pub const ALL: [Self; 5] = [Self::Add, Self::Sub, Self::And, Self::Or, Self::Ld];

    /// Returns the assembler mnemonic.
    pub const fn mnemonic(self) -> &'static str {
        match self {
            Self::Add => "ADD",
            Self::Sub => "SUB",
            Self::And => "AND",
            Self::Or => "OR",
            Self::Ld => "LD",
        }
    }

    /// Returns `true` for opcodes routed to the load path at issue.
    pub const fn is_load(self) -> bool {
        matches!(self, Self::Ld)
    }

    /// Maps the opcode to its ALU operation, or `None` for loads.
    pub const fn alu_op(self) -> Option<AluOp> {
        match self {
            Self::Add => Some(AluOp::Add),
            Self::Sub => Some(AluOp::Sub),
            Self::And => Some(AluOp::And),
            Self::Or => Some(AluOp::Or),
            Self::Ld => None,
        }
    }
}

impl fmt::Display for Opcode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.mnemonic())
    }
}

impl FromStr for Opcode {
    type Err = ParseError;

    /// Mnemonics are matched exactly (upper case).
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|op| op.mnemonic() == s)
            .ok_or_else(|| ParseError::UnknownOpcode(s.to_owned()))
    }
}

/// A parsed instruction awaiting issue.
///
/// Register fields are indices into the register file and are guaranteed in
/// range by every constructor path that goes through parsing.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Instruction {
    /// Operation to perform.
    pub opcode: Opcode,
    /// Destination register index.
    pub rd: usize,
    /// First source register index (first address summand for `LD`).
    pub rs: usize,
    /// Second source register index (second address summand for `LD`).
    pub rt: usize,
}

impl Instruction {
    /// Creates an instruction from its fields.
    pub const fn new(opcode: Opcode, rd: usize, rs: usize, rt: usize) -> Self {
        Self { opcode, rd, rs, rt }
    }

    /// Both source register indices.
    pub const fn sources(&self) -> [usize; 2] {
        [self.rs, self.rt]
    }
}

impl FromStr for Instruction {
    type Err = ParseError;

    /// Parses `<OPCODE,Rd,Rs,Rt>`.
    ///
    /// # Examples
    ///
    /// ```
    /// use mipsim_core::isa::{Instruction, Opcode};
    ///
    /// let inst: Instruction = "<LD,R1,R2,R3>".parse().unwrap();
    /// assert_eq!(inst, Instruction::new(Opcode::Ld, 1, 2, 3));
    /// assert!("<MUL,R1,R2,R3>".parse::<Instruction>().is_err());
    /// ```
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let f = tuple::fields(s, PROGRAM_FIELDS)?;
        Ok(Self {
            opcode: f[0].parse()?,
            rd: tuple::register(f[1])?,
            rs: tuple::register(f[2])?,
            rt: tuple::register(f[3])?,
        })
    }
}

impl fmt::Display for Instruction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "<{},R{},R{},R{}>",
            self.opcode, self.rd, self.rs, self.rt
        )
    }
}
