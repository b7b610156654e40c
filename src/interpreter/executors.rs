//! The dispatch table: routes a decoded instruction to its handler and
//! advances (or replaces) the program counter.

use std::io::{Read, Write};

use crate::error::UmError;
use crate::instruction::{Instruction, Opcode};
use crate::interpreter::{Interpreter, ProgramState};

impl<R, W> Interpreter<R, W>
where
    R: Read,
    W: Write,
{
    pub(super) fn dispatch(&mut self, instruction: Instruction) -> Result<Option<ProgramState>, UmError> {
        let (op, a, b, c) = match instruction {
            Instruction::LoadImmediate { a, value } => {
                self.load_immediate(a, value);
                self.pc = self.pc.wrapping_add(1);
                return Ok(None);
            }
            Instruction::ThreeRegister { op, a, b, c } => (op, a, b, c),
        };

        tracing::trace!(pc = self.pc, ?op, a, b, c, "dispatch");

        match op {
            Opcode::ConditionalMove => self.conditional_move(a, b, c),
            Opcode::SegmentedLoad => self.segmented_load(a, b, c)?,
            Opcode::SegmentedStore => self.segmented_store(a, b, c)?,
            Opcode::Add => self.add(a, b, c),
            Opcode::Multiply => self.multiply(a, b, c),
            Opcode::Divide => self.divide(a, b, c)?,
            Opcode::Nand => self.nand(a, b, c),
            Opcode::Halt => {
                return Ok(Some(ProgramState::Halted));
            }
            Opcode::MapSegment => self.map_segment(b, c),
            Opcode::UnmapSegment => self.unmap_segment(c)?,
            Opcode::Output => self.output(c)?,
            Opcode::Input => self.input(c)?,
            Opcode::LoadProgram => {
                // Sets `pc` explicitly; must not be post-incremented.
                self.load_program(b, c)?;
                return Ok(None);
            }
            Opcode::LoadImmediate => unreachable!("handled by the LoadImmediate variant above"),
        }

        self.pc = self.pc.wrapping_add(1);
        Ok(None)
    }
}
