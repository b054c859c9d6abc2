//! # Sink and Dump Format Tests
//!
//! The exact text written for a whole run, snapshot delivery order, and
//! propagation of sink failures.

use mipsim_core::common::SimError;
use mipsim_core::sim::{TraceSink, WriterSink};
use mockall::Sequence;
use pretty_assertions::assert_eq;

use crate::common::builder::program::ProgramBuilder;
use crate::common::harness::TestContext;
use crate::common::mocks::sink::{BrokenWriter, MockSink};

const EMPTY_DAM: &str = "DAM:<0,0>,<1,0>,<2,0>,<3,0>,<4,0>,<5,0>,<6,0>,<7,0>";

#[test]
fn test_single_add_dump() {
    let program = ProgramBuilder::new().add(1, 2, 3).build();
    let mut ctx = TestContext::from_text(&program, "<R2,3>\n<R3,4>", "");
    let mut sink = WriterSink::new(Vec::new());

    let cycles = ctx.sim.run(&mut sink).unwrap();
    assert_eq!(sink.written(), cycles + 1);
    let text = String::from_utf8(sink.into_inner().unwrap()).unwrap();

    let before = "RGF:<R0,0>,<R1,0>,<R2,3>,<R3,4>,<R4,0>,<R5,0>,<R6,0>,<R7,0>";
    let after = "RGF:<R0,0>,<R1,7>,<R2,3>,<R3,4>,<R4,0>,<R5,0>,<R6,0>,<R7,0>";
    let expected = [
        "STEP 0:",
        "INM:<ADD,R1,R2,R3>",
        "INB:",
        "AIB:",
        "LIB:",
        "ADB:",
        "REB:",
        before,
        EMPTY_DAM,
        "",
        "STEP 1:",
        "INM:",
        "INB:<ADD,R1,3,4>",
        "AIB:",
        "LIB:",
        "ADB:",
        "REB:",
        before,
        EMPTY_DAM,
        "",
        "STEP 2:",
        "INM:",
        "INB:",
        "AIB:<ADD,R1,3,4>",
        "LIB:",
        "ADB:",
        "REB:",
        before,
        EMPTY_DAM,
        "",
        "STEP 3:",
        "INM:",
        "INB:",
        "AIB:",
        "LIB:",
        "ADB:",
        "REB:<R1,7>",
        before,
        EMPTY_DAM,
        "",
        "STEP 4:",
        "INM:",
        "INB:",
        "AIB:",
        "LIB:",
        "ADB:",
        "REB:",
        after,
        EMPTY_DAM,
    ]
    .join("\n")
        + "\n";

    assert_eq!(text, expected);
}

#[test]
fn test_load_dump_shows_address_and_memory() {
    let program = ProgramBuilder::new().ld(1, 2, 3).build();
    let mut ctx = TestContext::from_text(&program, "<R2,2>\n<R3,1>", "<3,99>");
    let mut sink = WriterSink::new(Vec::new());

    let _ = ctx.sim.run(&mut sink).unwrap();
    let text = String::from_utf8(sink.into_inner().unwrap()).unwrap();
    let steps: Vec<&str> = text.split("\n\n").collect();

    assert_eq!(steps.len(), 6);
    assert!(steps[2].contains("LIB:<LD,R1,2,1>"));
    assert!(steps[3].contains("ADB:<R1,3>"));
    assert!(steps[4].contains("REB:<R1,99>"));
    assert!(steps[5].ends_with("DAM:<0,0>,<1,0>,<2,0>,<3,99>,<4,0>,<5,0>,<6,0>,<7,0>\n"));
}

#[test]
fn test_mock_sink_receives_steps_in_order() {
    let program = ProgramBuilder::new().or(1, 0, 0).build();
    let mut ctx = TestContext::from_text(&program, "", "");

    let mut mock = MockSink::new();
    let mut seq = Sequence::new();
    for step in 0..=4 {
        let _ = mock
            .expect_record()
            .withf(move |s| s.step == step)
            .times(1)
            .in_sequence(&mut seq)
            .returning(|_| Ok(()));
    }

    assert_eq!(ctx.sim.run(&mut mock).unwrap(), 4);
}

#[test]
fn test_sink_error_aborts_run() {
    let program = ProgramBuilder::new().add(1, 2, 3).build();
    let mut ctx = TestContext::from_text(&program, "", "");

    let mut mock = MockSink::new();
    let _ = mock.expect_record().times(2).returning(|s| {
        if s.step == 0 {
            Ok(())
        } else {
            Err(SimError::Output(std::io::Error::other("closed")))
        }
    });

    let err = ctx.sim.run(&mut mock).unwrap_err();
    assert!(matches!(err, SimError::Output(_)));
    assert_eq!(ctx.sim.cycles(), 1);
}

#[test]
fn test_writer_failure_is_output_error() {
    let mut ctx = TestContext::new();
    let mut sink = WriterSink::new(BrokenWriter);

    let err = ctx.sim.run(&mut sink).unwrap_err();
    assert!(matches!(err, SimError::Output(_)));
}

#[test]
fn test_dyn_sink() {
    let program = ProgramBuilder::new().and(3, 3, 3).build();
    let mut ctx = TestContext::from_text(&program, "", "");
    let mut inner = WriterSink::new(Vec::new());
    let sink: &mut dyn TraceSink = &mut inner;

    assert_eq!(ctx.sim.run(sink).unwrap(), 4);
    assert_eq!(inner.written(), 5);
}
