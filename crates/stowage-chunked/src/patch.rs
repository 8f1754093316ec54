//! Random-access reads and writes at absolute offsets.
//!
//! Patch operations reach into data that has already been written,
//! typically to fill in a forward reference once its target is known.
//! They never extend the buffer, never allocate and never move either
//! cursor.

use stowage_core::{BufferError, BufferResult};

use crate::buffer::ChunkedBuffer;

impl ChunkedBuffer {
    /// Copy `out.len()` bytes starting at absolute `offset` into `out`.
    ///
    /// # Errors
    ///
    /// [`BufferError::OutOfRange`] if the range reaches past
    /// [`len`](Self::len). `out` is left untouched.
    pub fn patch_read(&self, offset: usize, out: &mut [u8]) -> BufferResult<()> {
        self.check_range(offset, out.len())?;
        let mut index = self.chunk_for(offset);
        let mut pos = offset;
        let mut filled = 0;
        while filled < out.len() {
            let chunk = &self.chunks[index];
            let within = pos - chunk.start();
            let n = (chunk.len() - within).min(out.len() - filled);
            out[filled..filled + n].copy_from_slice(chunk.slice(within, n));
            filled += n;
            pos += n;
            index += 1;
        }
        Ok(())
    }

    /// Overwrite `data.len()` bytes starting at absolute `offset`.
    ///
    /// # Errors
    ///
    /// [`BufferError::OutOfRange`] if the range reaches past
    /// [`len`](Self::len). Nothing is written in that case.
    pub fn patch_write(&mut self, offset: usize, data: &[u8]) -> BufferResult<()> {
        self.check_range(offset, data.len())?;
        let mut index = self.chunk_for(offset);
        let mut pos = offset;
        let mut rest = data;
        while !rest.is_empty() {
            let chunk = &mut self.chunks[index];
            let within = pos - chunk.start();
            let n = (chunk.len() - within).min(rest.len());
            chunk.slice_mut(within, n).copy_from_slice(&rest[..n]);
            rest = &rest[n..];
            pos += n;
            index += 1;
        }
        Ok(())
    }

    fn check_range(&self, offset: usize, len: usize) -> BufferResult<()> {
        match offset.checked_add(len) {
            Some(end) if end <= self.total => Ok(()),
            _ => {
                tracing::debug!(offset, len, total = self.total, "patch out of range");
                Err(BufferError::OutOfRange {
                    offset,
                    len,
                    total: self.total,
                })
            }
        }
    }

    /// Index of the chunk holding absolute byte `offset`.
    ///
    /// Chunk ends are non-decreasing, so the first chunk ending past
    /// `offset` can be found by binary search.
    fn chunk_for(&self, offset: usize) -> usize {
        self.chunks.partition_point(|chunk| chunk.end() <= offset)
    }
}
