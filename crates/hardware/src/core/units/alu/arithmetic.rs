//! ALU arithmetic operations.
//!
//! Addition and subtraction on 32-bit two's complement values. Overflow wraps
//! silently; the machine has no overflow exception.

use crate::isa::AluOp;

/// Executes an arithmetic operation.
///
/// Returns `0` for non-arithmetic opcodes; [`Alu::execute`](super::Alu::execute)
/// never routes those here.
pub fn execute(op: AluOp, a: i32, b: i32) -> i32 {
    match op {
        AluOp::Add => a.wrapping_add(b),
        AluOp::Sub => a.wrapping_sub(b),
        AluOp::And | AluOp::Or => 0,
    }
}
