//! # Cycle Engine Tests
//!
//! Stage ordering within one cycle: writeback runs first, decode last.

use mipsim_core::core::pipeline::engine::tick;
use mipsim_core::core::pipeline::latches::ResultEntry;
use mipsim_core::core::pipeline::traits::PipelineLatch;
use mipsim_core::isa::{Instruction, Opcode};

use crate::common::builder::latches::IssueEntryBuilder;
use crate::common::harness::TestContext;

#[test]
fn test_writeback_release_visible_to_same_cycle_decode() {
    let mut ctx = TestContext::new();
    let cpu = ctx.cpu_mut();
    cpu.regs.set_busy(1);
    cpu.latches.result.alu = Some(ResultEntry { rd: 1, value: 7 });
    cpu.queue.push(Instruction::new(Opcode::Add, 4, 1, 5)).unwrap();

    tick(cpu).unwrap();

    let decoded = cpu.latches.decode.expect("dependent should decode");
    assert_eq!(decoded.v1, 7);
    assert_eq!(cpu.stats.decode_stalls, 0);
}

#[test]
fn test_issue_frees_decode_buffer_for_same_cycle_decode() {
    let mut ctx = TestContext::new();
    let cpu = ctx.cpu_mut();
    cpu.latches.decode = Some(IssueEntryBuilder::new(Opcode::Sub).rd(2).build());
    cpu.regs.set_busy(2);
    cpu.queue.push(Instruction::new(Opcode::Or, 3, 0, 0)).unwrap();

    tick(cpu).unwrap();

    assert_eq!(cpu.latches.alu.map(|e| e.rd), Some(2));
    assert_eq!(cpu.latches.decode.map(|e| e.rd), Some(3));
    assert!(cpu.queue.is_empty());
}

#[test]
fn test_each_buffer_advances_at_most_one_stage() {
    let mut ctx = TestContext::new();
    let cpu = ctx.cpu_mut();
    cpu.latches.load = Some(IssueEntryBuilder::new(Opcode::Ld).rd(6).operands(1, 1).build());
    cpu.regs.set_busy(6);

    tick(cpu).unwrap();
    assert!(cpu.latches.result.is_empty());
    assert_eq!(cpu.latches.address.map(|e| e.address), Some(2));

    tick(cpu).unwrap();
    assert_eq!(cpu.latches.result.load, Some(ResultEntry { rd: 6, value: 0 }));
    assert!(cpu.regs.is_busy(6));

    tick(cpu).unwrap();
    assert!(cpu.is_drained());
    assert!(!cpu.regs.is_busy(6));
    assert_eq!(cpu.stats.cycles, 3);
}
