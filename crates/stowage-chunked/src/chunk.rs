//! Fixed-capacity chunks of a chunked buffer.
//!
//! A [`Chunk`] is a zero-filled byte block with a fill counter and the
//! absolute offset of its first byte in the logical stream. Chunks only
//! grow by bumping the fill counter; they are never shrunk or reused.

use std::fmt;

/// One fixed-capacity block of a [`ChunkedBuffer`](crate::ChunkedBuffer).
pub struct Chunk {
    /// Backing storage, allocated to full capacity and zeroed at creation.
    data: Box<[u8]>,
    /// Absolute offset of `data[0]` in the logical stream.
    start: usize,
    /// Number of valid bytes.
    len: usize,
}

impl Chunk {
    /// Create an empty chunk beginning at absolute offset `start`.
    pub fn new(start: usize, capacity: usize) -> Self {
        Self {
            data: vec![0; capacity].into_boxed_slice(),
            start,
            len: 0,
        }
    }

    /// Absolute offset of the first byte.
    pub fn start(&self) -> usize {
        self.start
    }

    /// Absolute offset one past the last valid byte.
    pub fn end(&self) -> usize {
        self.start + self.len
    }

    /// Number of valid bytes.
    pub fn len(&self) -> usize {
        self.len
    }

    /// Whether the chunk holds no data yet.
    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// Total capacity in bytes.
    pub fn capacity(&self) -> usize {
        self.data.len()
    }

    /// Bytes that can still be appended.
    pub fn remaining(&self) -> usize {
        self.data.len() - self.len
    }

    /// The valid bytes.
    pub fn bytes(&self) -> &[u8] {
        &self.data[..self.len]
    }

    /// Bump-allocate `n` bytes and return them.
    ///
    /// # Panics
    ///
    /// Panics if fewer than `n` bytes remain.
    pub(crate) fn reserve(&mut self, n: usize) -> &mut [u8] {
        let begin = self.len;
        self.len += n;
        &mut self.data[begin..self.len]
    }

    /// Append as much of `src` as fits, returning the number of bytes taken.
    pub(crate) fn fill_from(&mut self, src: &[u8]) -> usize {
        let n = self.remaining().min(src.len());
        self.reserve(n).copy_from_slice(&src[..n]);
        n
    }

    /// Append up to `n` zero bytes, returning the number appended.
    pub(crate) fn fill_zeros(&mut self, n: usize) -> usize {
        let n = self.remaining().min(n);
        self.reserve(n).fill(0);
        n
    }

    /// Valid bytes `[offset, offset + len)`, relative to this chunk.
    pub(crate) fn slice(&self, offset: usize, len: usize) -> &[u8] {
        &self.bytes()[offset..offset + len]
    }

    /// Mutable view of valid bytes `[offset, offset + len)`, relative to
    /// this chunk.
    pub(crate) fn slice_mut(&mut self, offset: usize, len: usize) -> &mut [u8] {
        &mut self.data[..self.len][offset..offset + len]
    }
}

impl fmt::Debug for Chunk {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Chunk")
            .field("start", &self.start)
            .field("len", &self.len)
            .field("capacity", &self.capacity())
            .finish()
    }
}
