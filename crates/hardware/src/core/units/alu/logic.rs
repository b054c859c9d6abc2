//! ALU logical operations.
//!
//! Bitwise AND and OR over the full 32-bit operands.

use crate::isa::AluOp;

/// Executes a logical operation. Returns `0` for non-logic opcodes.
pub fn execute(op: AluOp, a: i32, b: i32) -> i32 {
    match op {
        AluOp::And => a & b,
        AluOp::Or => a | b,
        AluOp::Add | AluOp::Sub => 0,
    }
}
