//! Error types produced by the loader, codec and interpreter.

use std::io;
use thiserror::Error;

use crate::memory::SegmentId;

/// Top-level error returned by the crate's public entry points.
///
/// Mirrors the three places a run can fail: reading the program image,
/// decoding a fetched word, and executing an instruction.
#[derive(Debug, Error)]
pub enum UmError {
    /// The program image could not be read.
    #[error("failed to load program image: {0}")]
    Loader(#[from] LoaderError),
    /// A fetched word did not decode into a valid instruction.
    #[error("invalid instruction: {0}")]
    Decode(#[from] DecodeError),
    /// Execution hit a condition the machine cannot recover from.
    #[error("program error: {0}")]
    Program(#[from] ProgramError),
    /// The host's stdin/stdout could not service an `Input`/`Output` opcode.
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),
}

/// Failures while reading a program image from disk.
#[derive(Debug, Error)]
pub enum LoaderError {
    /// The file could not be opened or read.
    #[error("cannot read program file: {0}")]
    Io(#[from] io::Error),
    /// The file size was not a multiple of the word size.
    #[error("program file size {size} is not a multiple of {word_size}")]
    MisalignedSize {
        /// Size of the file in bytes.
        size: u64,
        /// Expected word size in bytes (always 4).
        word_size: u64,
    },
}

/// A fetched word whose top nibble names no instruction.
#[derive(Debug, Error, Clone, Copy, PartialEq, Eq)]
#[error("opcode {0:#x} is not a valid instruction")]
pub struct DecodeError(pub u8);

/// Conditions that halt execution with a nonzero exit status.
#[derive(Debug, Error)]
pub enum ProgramError {
    /// `Divide` was executed with a zero divisor.
    #[error("division by zero")]
    DivideByZero,
    /// `Output` was asked to emit a value outside a byte's range.
    #[error("output value {0} does not fit in a byte")]
    OutputOverflow(u32),
    /// A segment operation touched memory it should not have.
    #[error(transparent)]
    Memory(#[from] MemoryError),
    /// The program counter ran past the end of segment 0.
    #[error("program counter {pc} is out of range (segment 0 has length {len})")]
    ProgramCounterOutOfRange {
        /// The out-of-range program counter.
        pc: u32,
        /// Length of segment 0 at the time of the fetch.
        len: usize,
    },
}

/// Failures reported by the segmented memory model.
#[derive(Debug, Error, Clone, Copy, PartialEq, Eq)]
pub enum MemoryError {
    /// An operation referenced a segment identifier that is not currently mapped.
    #[error("segment {0} is not mapped")]
    UnmappedSegment(SegmentId),
    /// A load or store referenced an offset beyond the segment's length.
    #[error("offset {offset} is out of bounds for segment {id} (length {len})")]
    OutOfBounds {
        /// The segment that was accessed.
        id: SegmentId,
        /// The offset that was requested.
        offset: u32,
        /// The segment's length.
        len: usize,
    },
    /// Segment 0 can never be unmapped.
    #[error("segment 0 cannot be unmapped")]
    UnmapZero,
    /// The identifier named by an `Unmap Segment` instruction is already free.
    #[error("segment {0} is already unmapped")]
    AlreadyUnmapped(SegmentId),
}
