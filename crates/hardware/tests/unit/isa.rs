//! # Instruction Format Tests
//!
//! Parsing of `<OPCODE,Rd,Rs,Rt>` lines, including whitespace and case
//! tolerance, and the reverse formatting used by the dump.

use mipsim_core::common::ParseError;
use mipsim_core::isa::{Instruction, Opcode};
use rstest::rstest;

#[rstest]
#[case("<ADD,R1,R2,R3>", Instruction::new(Opcode::Add, 1, 2, 3))]
#[case("<SUB,R0,R7,R0>", Instruction::new(Opcode::Sub, 0, 7, 0))]
#[case("<AND,R4,R4,R4>", Instruction::new(Opcode::And, 4, 4, 4))]
#[case("<OR,R5,R6,R7>", Instruction::new(Opcode::Or, 5, 6, 7))]
#[case("<LD,R1,R2,R3>", Instruction::new(Opcode::Ld, 1, 2, 3))]
#[case("  <LD , r1 , r2 , r3>  ", Instruction::new(Opcode::Ld, 1, 2, 3))]
#[case("<ADD,R1,R2,R3>\r", Instruction::new(Opcode::Add, 1, 2, 3))]
fn test_parse_valid(#[case] line: &str, #[case] expected: Instruction) {
    assert_eq!(line.parse::<Instruction>(), Ok(expected));
}

#[rstest]
#[case("ADD,R1,R2,R3", ParseError::MissingBrackets("ADD,R1,R2,R3".into()))]
#[case("<ADD,R1,R2,R3", ParseError::MissingBrackets("<ADD,R1,R2,R3".into()))]
#[case("<ADD,R1,R2>", ParseError::FieldCount { expected: 4, found: 3 })]
#[case("<ADD,R1,R2,R3,R4>", ParseError::FieldCount { expected: 4, found: 5 })]
#[case("<MUL,R1,R2,R3>", ParseError::UnknownOpcode("MUL".into()))]
#[case("<add,R1,R2,R3>", ParseError::UnknownOpcode("add".into()))]
#[case("<ADD,R8,R2,R3>", ParseError::InvalidRegister("R8".into()))]
#[case("<ADD,R1,X2,R3>", ParseError::InvalidRegister("X2".into()))]
#[case("<ADD,R1,R2,R03>", ParseError::InvalidRegister("R03".into()))]
fn test_parse_invalid(#[case] line: &str, #[case] expected: ParseError) {
    assert_eq!(line.parse::<Instruction>(), Err(expected));
}

#[test]
fn test_display_roundtrip() {
    for op in Opcode::ALL {
        let inst = Instruction::new(op, 7, 0, 3);
        assert_eq!(inst.to_string().parse::<Instruction>(), Ok(inst));
    }
}
