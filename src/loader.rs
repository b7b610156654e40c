//! Reads a program image from disk into the initial contents of segment 0.

use std::fs;
use std::path::Path;

use crate::error::LoaderError;
use crate::instruction::Word;

const WORD_SIZE: u64 = 4;

/// Read `path` as a sequence of big-endian 32-bit words.
///
/// The file's byte length becomes the word count of the returned segment;
/// there is no header or padding. Fails if the file cannot be read or its
/// size is not a multiple of 4 bytes.
pub fn load_file(path: impl AsRef<Path>) -> Result<Vec<Word>, LoaderError> {
    let bytes = fs::read(path)?;
    load_bytes(&bytes)
}

/// Decode an in-memory byte buffer the same way [`load_file`] would.
pub fn load_bytes(bytes: &[u8]) -> Result<Vec<Word>, LoaderError> {
    let size = bytes.len() as u64;
    if size % WORD_SIZE != 0 {
        return Err(LoaderError::MisalignedSize {
            size,
            word_size: WORD_SIZE,
        });
    }

    Ok(bytes
        .chunks_exact(WORD_SIZE as usize)
        .map(|chunk| Word::from_be_bytes([chunk[0], chunk[1], chunk[2], chunk[3]]))
        .collect())
}
