//! Assembles canonical instruction streams for tests.
//!
//! This is the "unit-test generator" collaborator: it only emits program
//! images via [`crate::instruction::encode_three`] and
//! [`crate::instruction::encode_load_immediate`], never decodes anything —
//! keeping it a pure producer the interpreter itself never calls.

use crate::instruction::{encode_load_immediate, encode_three, Opcode, RegisterId, Word};

/// A program image under construction, one instruction word at a time.
#[derive(Debug, Default, Clone)]
pub struct ProgramBuilder {
    words: Vec<Word>,
}

impl ProgramBuilder {
    /// An empty program image.
    pub fn new() -> Self {
        Self::default()
    }

    /// Append a three-register instruction.
    pub fn three(mut self, op: Opcode, a: RegisterId, b: RegisterId, c: RegisterId) -> Self {
        self.words.push(encode_three(op, a, b, c));
        self
    }

    /// Append a `LoadImmediate` instruction.
    pub fn load_immediate(mut self, a: RegisterId, value: Word) -> Self {
        self.words.push(encode_load_immediate(a, value));
        self
    }

    /// Append `Halt`.
    pub fn halt(self) -> Self {
        self.three(Opcode::Halt, 0, 0, 0)
    }

    /// Consume the builder, returning the assembled word stream (this is
    /// what becomes the initial contents of segment 0).
    pub fn build(self) -> Vec<Word> {
        self.words
    }

    /// Assemble the program as a big-endian byte image, the format
    /// [`crate::loader::load_bytes`] expects.
    pub fn build_bytes(self) -> Vec<u8> {
        self.words.iter().flat_map(|w| w.to_be_bytes()).collect()
    }
}
