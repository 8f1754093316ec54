//! Positions inside a chunk list.

/// A position in a [`ChunkedBuffer`](crate::ChunkedBuffer): a chunk index
/// plus a byte offset within that chunk.
///
/// Cursors refer to chunks by index rather than by reference. Chunks are
/// never freed individually, so an index stays valid for the life of the
/// buffer (until `clear`).
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, PartialOrd, Ord)]
pub struct Cursor {
    /// Index of the chunk in the chain.
    pub chunk: usize,
    /// Byte offset within that chunk.
    pub offset: usize,
}

impl Cursor {
    /// Cursor at `offset` bytes into chunk `chunk`.
    pub fn new(chunk: usize, offset: usize) -> Self {
        Self { chunk, offset }
    }

    /// First byte of the chunk after this one.
    pub(crate) fn next_chunk(self) -> Self {
        Self::new(self.chunk + 1, 0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_is_start_of_stream() {
        assert_eq!(Cursor::default(), Cursor::new(0, 0));
    }

    #[test]
    fn ordering_is_chunk_then_offset() {
        assert!(Cursor::new(0, 7) < Cursor::new(1, 0));
        assert!(Cursor::new(2, 1) > Cursor::new(2, 0));
        assert_eq!(Cursor::new(3, 5).next_chunk(), Cursor::new(4, 0));
    }
}
