//! Arithmetic, bitwise, and conditional-move handlers.

use std::io::{Read, Write};

use crate::error::{ProgramError, UmError};
use crate::instruction::{RegisterId, Word};
use crate::interpreter::Interpreter;

impl<R, W> Interpreter<R, W>
where
    R: Read,
    W: Write,
{
    /// `if rC != 0 then rA <- rB`
    pub(super) fn conditional_move(&mut self, a: RegisterId, b: RegisterId, c: RegisterId) {
        if self.registers.get(c) != 0 {
            self.registers.set(a, self.registers.get(b));
        }
    }

    /// `rA <- (rB + rC) mod 2^32`
    pub(super) fn add(&mut self, a: RegisterId, b: RegisterId, c: RegisterId) {
        let result = self.registers.get(b).wrapping_add(self.registers.get(c));
        self.registers.set(a, result);
    }

    /// `rA <- (rB * rC) mod 2^32`
    pub(super) fn multiply(&mut self, a: RegisterId, b: RegisterId, c: RegisterId) {
        let result = self.registers.get(b).wrapping_mul(self.registers.get(c));
        self.registers.set(a, result);
    }

    /// `rA <- rB / rC` (unsigned). A zero divisor is a program error.
    pub(super) fn divide(&mut self, a: RegisterId, b: RegisterId, c: RegisterId) -> Result<(), UmError> {
        let divisor = self.registers.get(c);
        if divisor == 0 {
            return Err(UmError::Program(ProgramError::DivideByZero));
        }

        self.registers.set(a, self.registers.get(b) / divisor);
        Ok(())
    }

    /// `rA <- ~(rB & rC)`
    pub(super) fn nand(&mut self, a: RegisterId, b: RegisterId, c: RegisterId) {
        let result = !(self.registers.get(b) & self.registers.get(c));
        self.registers.set(a, result);
    }

    /// `rA <- value` (the 25-bit immediate carried by the instruction).
    pub(super) fn load_immediate(&mut self, a: RegisterId, value: Word) {
        self.registers.set(a, value);
    }
}
