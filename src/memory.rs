//! Segmented memory: allocation, release, read/write, and duplication of
//! segments, with identifier reuse.

use crate::error::MemoryError;
use crate::instruction::Word;

/// A segment identifier. Identifier `0` is always mapped while the machine
/// runs.
pub type SegmentId = u32;

/// A mapping from segment identifiers to word arrays, plus the pool of
/// freed identifiers available for reuse.
///
/// Storage is a dense vector indexed by id, with `None` marking a freed
/// slot; the freed pool is a side stack of those same indices, drawn LIFO.
#[derive(Debug, Clone, Default)]
pub struct SegmentedMemory {
    segments: Vec<Option<Vec<Word>>>,
    freed: Vec<SegmentId>,
}

impl SegmentedMemory {
    /// An empty memory with no segments mapped.
    pub fn new() -> Self {
        Self::default()
    }

    /// A memory whose segment 0 is `segment`, as produced by the loader at
    /// startup. Segment 0 is always mapped for the remainder of the run.
    pub fn with_segment_zero(segment: Vec<Word>) -> Self {
        Self {
            segments: vec![Some(segment)],
            freed: Vec::new(),
        }
    }

    /// Allocate a new zero-initialized segment of `size` words, returning
    /// its identifier. Reuses a freed identifier when one is available.
    pub fn map(&mut self, size: Word) -> SegmentId {
        let segment = vec![0; size as usize];

        if let Some(id) = self.freed.pop() {
            self.segments[id as usize] = Some(segment);
            id
        } else {
            let id = self.segments.len() as SegmentId;
            self.segments.push(Some(segment));
            id
        }
    }

    /// Release a segment, returning its identifier to the freed pool.
    ///
    /// # Errors
    /// Returns [`MemoryError::UnmapZero`] for `id == 0`,
    /// [`MemoryError::AlreadyUnmapped`] if `id` is already free, and
    /// [`MemoryError::UnmappedSegment`] if `id` was never mapped.
    pub fn unmap(&mut self, id: SegmentId) -> Result<(), MemoryError> {
        if id == 0 {
            return Err(MemoryError::UnmapZero);
        }

        match self.segments.get_mut(id as usize) {
            None => Err(MemoryError::UnmappedSegment(id)),
            Some(slot @ Some(_)) => {
                *slot = None;
                self.freed.push(id);
                Ok(())
            }
            Some(None) => Err(MemoryError::AlreadyUnmapped(id)),
        }
    }

    /// Read a word from a segment.
    pub fn load_word(&self, id: SegmentId, offset: Word) -> Result<Word, MemoryError> {
        let segment = self.segment(id)?;
        segment
            .get(offset as usize)
            .copied()
            .ok_or(MemoryError::OutOfBounds {
                id,
                offset,
                len: segment.len(),
            })
    }

    /// Write a word into a segment.
    pub fn store_word(&mut self, id: SegmentId, offset: Word, value: Word) -> Result<(), MemoryError> {
        let len = self.segment(id)?.len();
        let slot = self
            .segments
            .get_mut(id as usize)
            .and_then(|s| s.as_mut())
            .and_then(|s| s.get_mut(offset as usize))
            .ok_or(MemoryError::OutOfBounds { id, offset, len })?;

        *slot = value;
        Ok(())
    }

    /// Return a fresh copy of the segment at `id`.
    pub fn duplicate(&self, id: SegmentId) -> Result<Vec<Word>, MemoryError> {
        self.segment(id).map(|segment| segment.clone())
    }

    /// Atomically release the current segment 0 and install `new_segment`
    /// in its place.
    pub fn replace_zero(&mut self, new_segment: Vec<Word>) {
        self.segments[0] = Some(new_segment);
    }

    /// Length of the segment at `id`, or a [`MemoryError`] if it isn't
    /// mapped.
    pub fn segment_len(&self, id: SegmentId) -> Result<usize, MemoryError> {
        self.segment(id).map(Vec::len)
    }

    fn segment(&self, id: SegmentId) -> Result<&Vec<Word>, MemoryError> {
        self.segments
            .get(id as usize)
            .and_then(|s| s.as_ref())
            .ok_or(MemoryError::UnmappedSegment(id))
    }
}
