//! # Stage Tests
//!
//! Each stage in isolation, driven through the public stage functions.

use mipsim_core::common::SimError;
use mipsim_core::core::pipeline::latches::{AddressEntry, ResultEntry};
use mipsim_core::core::pipeline::stages::{
    address_stage, alu_stage, decode_stage, issue_alu_stage, issue_load_stage, load_stage,
    writeback_stage,
};
use mipsim_core::isa::{Instruction, Opcode};
use pretty_assertions::assert_eq;

use crate::common::builder::latches::IssueEntryBuilder;
use crate::common::harness::TestContext;

// ══════════════════════════════════════════════════════════
// Decode
// ══════════════════════════════════════════════════════════

#[test]
fn test_decode_one_per_cycle() {
    let mut ctx = TestContext::from_text("<ADD,R1,R2,R3>\n<SUB,R4,R5,R6>", "<R2,3>\n<R3,4>", "");
    decode_stage(ctx.cpu_mut());

    assert_eq!(ctx.cpu().queue.len(), 1);
    assert_eq!(
        ctx.cpu().latches.decode,
        Some(IssueEntryBuilder::new(Opcode::Add).rd(1).operands(3, 4).build())
    );
}

#[test]
fn test_decode_waw_policy() {
    let mut ctx = TestContext::from_text("<ADD,R1,R2,R3>", "", "");
    ctx.cpu_mut().regs.set_busy(1);

    decode_stage(ctx.cpu_mut());
    assert!(ctx.cpu().latches.decode.is_none());

    ctx.cpu_mut().stall_on_busy_destination = false;
    decode_stage(ctx.cpu_mut());
    assert!(ctx.cpu().latches.decode.is_some());
}

#[test]
fn test_decode_head_blocks_independent_followers() {
    let mut ctx = TestContext::from_text("<ADD,R4,R1,R5>\n<OR,R6,R0,R0>", "", "");
    ctx.cpu_mut().regs.set_busy(1);

    decode_stage(ctx.cpu_mut());

    assert_eq!(ctx.cpu().queue.len(), 2);
    assert_eq!(
        ctx.cpu().queue.front(),
        Some(&Instruction::new(Opcode::Add, 4, 1, 5))
    );
}

// ══════════════════════════════════════════════════════════
// Issue
// ══════════════════════════════════════════════════════════

#[test]
fn test_issue_split_by_opcode() {
    let mut ctx = TestContext::new();
    let ld = IssueEntryBuilder::new(Opcode::Ld).rd(2).operands(1, 1).build();
    ctx.cpu_mut().latches.decode = Some(ld);

    issue_load_stage(ctx.cpu_mut());
    issue_alu_stage(ctx.cpu_mut());

    assert_eq!(ctx.cpu().latches.load, Some(ld));
    assert!(ctx.cpu().latches.alu.is_none());
    assert!(ctx.cpu().latches.decode.is_none());
}

// ══════════════════════════════════════════════════════════
// ALU / Address / Load
// ══════════════════════════════════════════════════════════

#[test]
fn test_alu_deposits_into_alu_slot_only() {
    let mut ctx = TestContext::new();
    ctx.cpu_mut().latches.alu = Some(IssueEntryBuilder::new(Opcode::Or).rd(3).operands(4, 1).build());

    alu_stage(ctx.cpu_mut()).unwrap();

    assert_eq!(ctx.cpu().latches.result.alu, Some(ResultEntry { rd: 3, value: 5 }));
    assert!(ctx.cpu().latches.result.load.is_none());
}

#[test]
fn test_alu_rejects_load() {
    let mut ctx = TestContext::new();
    ctx.cpu_mut().latches.alu = Some(IssueEntryBuilder::new(Opcode::Ld).build());

    let err = alu_stage(ctx.cpu_mut()).unwrap_err();
    assert_eq!(err.to_string(), "opcode LD reached the alu stage");
}

#[test]
fn test_address_wraps() {
    let mut ctx = TestContext::new();
    ctx.cpu_mut().latches.load = Some(
        IssueEntryBuilder::new(Opcode::Ld)
            .rd(1)
            .operands(i32::MAX, 1)
            .build(),
    );

    address_stage(ctx.cpu_mut());

    assert_eq!(
        ctx.cpu().latches.address,
        Some(AddressEntry {
            rd: 1,
            address: i32::MIN
        })
    );
}

#[test]
fn test_load_reads_data_memory() {
    let mut ctx = TestContext::new();
    ctx.set_mem(7, -42);
    ctx.cpu_mut().latches.address = Some(AddressEntry { rd: 0, address: 7 });

    load_stage(ctx.cpu_mut()).unwrap();

    assert_eq!(ctx.cpu().latches.result.load, Some(ResultEntry { rd: 0, value: -42 }));
    assert!(ctx.cpu().latches.address.is_none());
}

#[test]
fn test_load_out_of_range_message() {
    let mut ctx = TestContext::new();
    ctx.cpu_mut().latches.address = Some(AddressEntry { rd: 1, address: 10 });

    let err = load_stage(ctx.cpu_mut()).unwrap_err();
    assert!(matches!(
        err,
        SimError::LoadAddressOutOfRange {
            rd: 1,
            address: 10,
            max: 7
        }
    ));
    assert_eq!(
        err.to_string(),
        "load into R1 computed address 10, outside data memory (0-7)"
    );
}

// ══════════════════════════════════════════════════════════
// Writeback
// ══════════════════════════════════════════════════════════

#[test]
fn test_writeback_single_slot() {
    let mut ctx = TestContext::new();
    ctx.cpu_mut().regs.set_busy(4);
    ctx.cpu_mut().latches.result.load = Some(ResultEntry { rd: 4, value: 99 });

    writeback_stage(ctx.cpu_mut());

    assert_eq!(ctx.get_reg(4), 99);
    assert!(!ctx.cpu().regs.is_busy(4));
    assert_eq!(ctx.cpu().stats.retired_load, 1);
    assert_eq!(ctx.cpu().stats.dual_writebacks, 0);
}
