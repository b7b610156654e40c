//! The concrete end-to-end programs a correct machine must run.

use std::io::Cursor;

use um::prelude::*;
use um::testgen::ProgramBuilder;

#[test]
fn hello_byte() {
    let words = ProgramBuilder::new()
        .load_immediate(1, b'B' as u32)
        .three(Opcode::Output, 0, 0, 1)
        .halt()
        .build();

    let mut vm = Interpreter::new(words, Cursor::new(Vec::new()), Vec::new());
    assert_eq!(vm.run().unwrap(), ProgramState::Halted);
    assert_eq!(vm.stdout().as_slice(), &[b'B']);
}

#[test]
fn arithmetic_round_trip() {
    // 3 + 4 = 7, 4 + 3 = 7, 7 / 7 = 1. Output '1' by adding the ASCII '0'
    // offset via a LoadImmediate/Add pair.
    let words = ProgramBuilder::new()
        .load_immediate(1, 3)
        .load_immediate(2, 4)
        .three(Opcode::Add, 3, 1, 2)
        .three(Opcode::Add, 4, 2, 1)
        .three(Opcode::Divide, 5, 3, 4)
        .load_immediate(6, b'0' as u32)
        .three(Opcode::Add, 7, 5, 6)
        .three(Opcode::Output, 0, 0, 7)
        .halt()
        .build();

    let mut vm = Interpreter::new(words, Cursor::new(Vec::new()), Vec::new());
    assert_eq!(vm.run().unwrap(), ProgramState::Halted);
    assert_eq!(vm.stdout().as_slice(), b"1");
}

#[test]
fn map_store_load() {
    let words = ProgramBuilder::new()
        .load_immediate(3, 5) // size for Map Segment
        .three(Opcode::MapSegment, 0, 1, 3) // r1 <- map(5)
        .load_immediate(2, 3) // offset
        .load_immediate(4, b'P' as u32) // value
        .three(Opcode::SegmentedStore, 1, 2, 4)
        .three(Opcode::SegmentedLoad, 5, 1, 2)
        .three(Opcode::Output, 0, 0, 5)
        .halt()
        .build();

    let mut vm = Interpreter::new(words, Cursor::new(Vec::new()), Vec::new());
    assert_eq!(vm.run().unwrap(), ProgramState::Halted);
    assert_eq!(vm.stdout().as_slice(), &[b'P']);
}

#[test]
fn self_modify_via_load_program() {
    // Segment 0 maps a 2-word segment, populates it with [Output r1; Halt],
    // then LoadProgram installs it at segment 0 and jumps to its start.
    let output = um::instruction::encode_three(Opcode::Output, 0, 0, 1);
    let halt = um::instruction::encode_three(Opcode::Halt, 0, 0, 0);

    let words = ProgramBuilder::new()
        .load_immediate(1, b'Q' as u32) // byte to emit, survives the jump
        .load_immediate(3, 2) // size for Map Segment
        .three(Opcode::MapSegment, 0, 2, 3) // r2 <- map(2)
        .load_immediate(4, 0)
        .load_immediate(5, output)
        .three(Opcode::SegmentedStore, 2, 4, 5) // segment[r2][0] <- Output r1
        .load_immediate(4, 1)
        .load_immediate(5, halt)
        .three(Opcode::SegmentedStore, 2, 4, 5) // segment[r2][1] <- Halt
        .load_immediate(6, 0) // target pc
        .three(Opcode::LoadProgram, 0, 2, 6)
        .build();

    let mut vm = Interpreter::new(words, Cursor::new(Vec::new()), Vec::new());
    assert_eq!(vm.run().unwrap(), ProgramState::Halted);
    assert_eq!(vm.stdout().as_slice(), &[b'Q']);
}

#[test]
fn eof_sentinel_then_output_overflow_is_a_program_error() {
    let words = ProgramBuilder::new()
        .three(Opcode::Input, 0, 0, 1)
        .three(Opcode::Output, 0, 0, 1)
        .halt()
        .build();

    let mut vm = Interpreter::new(words, Cursor::new(Vec::new()), Vec::new());
    let err = vm.run().unwrap_err();
    assert!(matches!(err, UmError::Program(ProgramError::OutputOverflow(0xFFFF_FFFF))));
}

#[test]
fn identifier_reuse() {
    let mut mem = SegmentedMemory::with_segment_zero(vec![0]);
    let ids: Vec<SegmentId> = (0..5).map(|_| mem.map(1)).collect();

    mem.unmap(ids[1]).unwrap();
    mem.unmap(ids[3]).unwrap();

    let new_a = mem.map(1);
    let new_b = mem.map(1);

    assert!([ids[1], ids[3]].contains(&new_a));
    assert!([ids[1], ids[3]].contains(&new_b));
    assert_ne!(new_a, new_b);
}
