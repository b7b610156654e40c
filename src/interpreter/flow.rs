//! `Load Program`: the self-modifying control-transfer instruction.

use std::io::{Read, Write};

use crate::error::UmError;
use crate::instruction::RegisterId;
use crate::interpreter::Interpreter;

impl<R, W> Interpreter<R, W>
where
    R: Read,
    W: Write,
{
    /// If `rB != 0`, deep-copies segment `rB` and installs it at segment 0,
    /// releasing the previous segment 0. In all cases sets `pc <- rC`.
    ///
    /// `rB == 0` is the hot path — a branch within the currently running
    /// program — and must not touch the duplication path at all.
    pub(super) fn load_program(&mut self, b: RegisterId, c: RegisterId) -> Result<(), UmError> {
        let source = self.registers.get(b);

        if source != 0 {
            let duplicate = self.memory.duplicate(source).map_err(crate::error::ProgramError::from)?;
            self.memory.replace_zero(duplicate);
        }

        self.pc = self.registers.get(c);
        Ok(())
    }
}
