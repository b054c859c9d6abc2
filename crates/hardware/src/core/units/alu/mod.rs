//! Arithmetic Logic Unit (ALU).
//!
//! This module implements the integer ALU used by the ALU stage for
//! register-register operations and by the address calculation stage for
//! effective-address sums. All arithmetic wraps on 32-bit overflow.
//!
//! Operations are organized into submodules by category:
//! - [`arithmetic`]: Add, Sub
//! - [`logic`]:      And, Or

/// Integer arithmetic operations (add, subtract).
pub mod arithmetic;

/// Bitwise logical operations (and, or).
pub mod logic;

use crate::isa::AluOp;

/// Arithmetic Logic Unit (ALU) for integer operations.
#[derive(Debug)]
pub struct Alu;

impl Alu {
    /// Executes an integer ALU operation.
    ///
    /// # Arguments
    ///
    /// * `op` - The ALU operation to perform
    /// * `a`  - First operand
    /// * `b`  - Second operand
    ///
    /// # Returns
    ///
    /// The 32-bit result. Overflow wraps.
    ///
    /// # Examples
    ///
    /// ```
    /// use mipsim_core::core::units::alu::Alu;
    /// use mipsim_core::isa::AluOp;
    ///
    /// assert_eq!(Alu::execute(AluOp::Add, 3, 4), 7);
    /// assert_eq!(Alu::execute(AluOp::Sub, 3, 4), -1);
    /// assert_eq!(Alu::execute(AluOp::And, 0b1100, 0b1010), 0b1000);
    /// assert_eq!(Alu::execute(AluOp::Or, 0b1100, 0b1010), 0b1110);
    /// assert_eq!(Alu::execute(AluOp::Add, i32::MAX, 1), i32::MIN);
    /// ```
    pub fn execute(op: AluOp, a: i32, b: i32) -> i32 {
        match op {
            AluOp::Add | AluOp::Sub => arithmetic::execute(op, a, b),
            AluOp::And | AluOp::Or => logic::execute(op, a, b),
        }
    }
}
