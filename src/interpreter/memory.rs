//! Segment-operation handlers: `Map Segment`, `Unmap Segment`, `Segmented
//! Load`, `Segmented Store`.

use std::io::{Read, Write};

use crate::error::UmError;
use crate::instruction::RegisterId;
use crate::interpreter::Interpreter;

impl<R, W> Interpreter<R, W>
where
    R: Read,
    W: Write,
{
    /// `rA <- memory[rB][rC]`
    pub(super) fn segmented_load(&mut self, a: RegisterId, b: RegisterId, c: RegisterId) -> Result<(), UmError> {
        let id = self.registers.get(b);
        let offset = self.registers.get(c);
        let value = self.memory.load_word(id, offset).map_err(crate::error::ProgramError::from)?;
        self.registers.set(a, value);
        Ok(())
    }

    /// `memory[rA][rB] <- rC`
    pub(super) fn segmented_store(&mut self, a: RegisterId, b: RegisterId, c: RegisterId) -> Result<(), UmError> {
        let id = self.registers.get(a);
        let offset = self.registers.get(b);
        let value = self.registers.get(c);
        self.memory
            .store_word(id, offset, value)
            .map_err(crate::error::ProgramError::from)?;
        Ok(())
    }

    /// `rB <- map(rC)`: allocates a zeroed segment of length `rC`.
    pub(super) fn map_segment(&mut self, b: RegisterId, c: RegisterId) {
        let size = self.registers.get(c);
        let id = self.memory.map(size);
        self.registers.set(b, id);
    }

    /// `unmap(rC)`
    pub(super) fn unmap_segment(&mut self, c: RegisterId) -> Result<(), UmError> {
        let id = self.registers.get(c);
        self.memory.unmap(id).map_err(crate::error::ProgramError::from)?;
        Ok(())
    }
}
