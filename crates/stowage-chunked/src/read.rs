//! Sequential reads through the independent read cursor.
//!
//! Reading never affects the write cursor or the data. Running out of
//! data is reported as `None`, not as an error; only [`read_exact`]
//! fails, and only when asked for more bytes than remain.
//!
//! [`read_exact`]: ChunkedBuffer::read_exact

use stowage_core::{BufferError, BufferResult};

use crate::buffer::ChunkedBuffer;
use crate::cursor::Cursor;

impl ChunkedBuffer {
    /// Move the read cursor back to the start of the stream.
    pub fn rewind(&mut self) {
        self.read = Cursor::default();
    }

    /// The read cursor as a chunk/offset pair.
    pub fn read_cursor(&self) -> Cursor {
        self.read
    }

    /// Absolute offset of the read cursor in the stream.
    pub fn read_position(&self) -> usize {
        self.chunks[self.read.chunk].start() + self.read.offset
    }

    /// Bytes between the read cursor and the end of the stream.
    pub fn remaining(&self) -> usize {
        self.total - self.read_position()
    }

    /// Return the next record of `element_size` bytes and advance past it.
    ///
    /// Returns `None` once no whole record remains. Records are expected
    /// to have been written with [`write_struct`](Self::write_struct) at
    /// the same element size; trailing bytes of a chunk too short to hold
    /// a record are skipped.
    pub fn read_struct(&mut self) -> Option<&[u8]> {
        let size = self.config.element_size;
        while self.chunks[self.read.chunk].len() - self.read.offset < size {
            if self.read.chunk + 1 == self.chunks.len() {
                return None;
            }
            self.read = self.read.next_chunk();
        }
        let Cursor { chunk, offset } = self.read;
        self.read.offset += size;
        Some(self.chunks[chunk].slice(offset, size))
    }

    /// Return every remaining byte of the current chunk and advance past
    /// them.
    ///
    /// The span is never empty and never crosses a chunk boundary, so
    /// it can be shorter than [`remaining`](Self::remaining). Returns
    /// `None` at the end of the stream.
    pub fn read_bytes(&mut self) -> Option<&[u8]> {
        while self.read.offset == self.chunks[self.read.chunk].len() {
            if self.read.chunk + 1 == self.chunks.len() {
                return None;
            }
            self.read = self.read.next_chunk();
        }
        let Cursor { chunk, offset } = self.read;
        let end = self.chunks[chunk].len();
        self.read.offset = end;
        Some(self.chunks[chunk].slice(offset, end - offset))
    }

    /// Copy exactly `out.len()` bytes from the read cursor into `out`,
    /// crossing chunk boundaries as needed.
    ///
    /// # Errors
    ///
    /// [`BufferError::OutOfRange`] if fewer bytes remain. Neither `out`
    /// nor the cursor is touched in that case.
    pub fn read_exact(&mut self, out: &mut [u8]) -> BufferResult<()> {
        let position = self.read_position();
        if out.len() > self.total - position {
            tracing::debug!(
                offset = position,
                len = out.len(),
                total = self.total,
                "sequential read past end of buffer"
            );
            return Err(BufferError::OutOfRange {
                offset: position,
                len: out.len(),
                total: self.total,
            });
        }

        let mut filled = 0;
        while filled < out.len() {
            let chunk = &self.chunks[self.read.chunk];
            let available = chunk.len() - self.read.offset;
            if available == 0 {
                self.read = self.read.next_chunk();
                continue;
            }
            let n = available.min(out.len() - filled);
            out[filled..filled + n].copy_from_slice(chunk.slice(self.read.offset, n));
            self.read.offset += n;
            filled += n;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use stowage_core::ChunkConfig;

    use super::*;

    fn buffer(chunk_size: usize, element_size: usize) -> ChunkedBuffer {
        ChunkedBuffer::with_config(ChunkConfig::new(element_size).with_chunk_size(chunk_size))
            .unwrap()
    }

    #[test]
    fn hello_world_across_a_boundary() {
        let mut buf = buffer(8, 1);
        buf.write_bytes(b"HELLO");
        buf.write_bytes(b" WORLD");
        buf.rewind();
        let mut out = [0u8; 11];
        buf.read_exact(&mut out).unwrap();
        assert_eq!(&out, b"HELLO WORLD");
        assert_eq!(buf.remaining(), 0);
    }

    #[test]
    fn structs_round_trip_in_order() {
        let mut buf = buffer(10, 4);
        for i in 0..7u32 {
            buf.write_struct().copy_from_slice(&i.to_le_bytes());
        }
        buf.rewind();
        for i in 0..7u32 {
            let record = buf.read_struct().expect("record present");
            assert_eq!(record, i.to_le_bytes());
        }
        assert!(buf.read_struct().is_none());
        // End of data is sticky until rewind.
        assert!(buf.read_struct().is_none());
        buf.rewind();
        assert_eq!(buf.read_struct(), Some(&0u32.to_le_bytes()[..]));
    }

    #[test]
    fn read_struct_on_empty_buffer_is_end_of_data() {
        let mut buf = buffer(8, 2);
        assert!(buf.read_struct().is_none());
        assert!(buf.read_bytes().is_none());
        assert_eq!(buf.read_position(), 0);
    }

    #[test]
    fn read_struct_skips_abandoned_room() {
        let mut buf = buffer(8, 4);
        buf.write_struct().copy_from_slice(b"AAAA");
        buf.write_struct().copy_from_slice(b"BBBB");
        buf.write_struct().copy_from_slice(b"CCCC");
        buf.rewind();
        assert_eq!(buf.read_struct(), Some(&b"AAAA"[..]));
        assert_eq!(buf.read_struct(), Some(&b"BBBB"[..]));
        assert_eq!(buf.read_struct(), Some(&b"CCCC"[..]));
        assert_eq!(buf.read_position(), 12);
        assert!(buf.read_struct().is_none());
    }

    #[test]
    fn read_bytes_returns_chunk_spans() {
        let mut buf = buffer(8, 1);
        buf.write_bytes(b"0123456789abcdefXYZ");
        buf.rewind();
        assert_eq!(buf.read_bytes(), Some(&b"01234567"[..]));
        assert_eq!(buf.read_bytes(), Some(&b"89abcdef"[..]));
        assert_eq!(buf.read_bytes(), Some(&b"XYZ"[..]));
        assert_eq!(buf.read_bytes(), None);
    }

    #[test]
    fn read_bytes_resumes_mid_chunk() {
        let mut buf = buffer(8, 1);
        buf.write_bytes(b"abcdefghij");
        buf.rewind();
        let mut head = [0u8; 3];
        buf.read_exact(&mut head).unwrap();
        assert_eq!(buf.read_bytes(), Some(&b"defgh"[..]));
        assert_eq!(buf.read_position(), 8);
    }

    #[test]
    fn reads_pick_up_later_writes() {
        let mut buf = buffer(8, 1);
        buf.write_bytes(b"ab");
        buf.rewind();
        assert_eq!(buf.read_bytes(), Some(&b"ab"[..]));
        assert_eq!(buf.read_bytes(), None);
        buf.write_bytes(b"cdefghij");
        assert_eq!(buf.read_bytes(), Some(&b"cdefgh"[..]));
        assert_eq!(buf.read_bytes(), Some(&b"ij"[..]));
    }

    #[test]
    fn read_exact_past_end_leaves_cursor() {
        let mut buf = buffer(4, 1);
        buf.write_bytes(b"abcdef");
        buf.rewind();
        let mut two = [0u8; 2];
        buf.read_exact(&mut two).unwrap();

        let mut out = [0xffu8; 5];
        let err = buf.read_exact(&mut out).unwrap_err();
        assert_eq!(
            err,
            BufferError::OutOfRange {
                offset: 2,
                len: 5,
                total: 6
            }
        );
        assert_eq!(out, [0xff; 5]);
        assert_eq!(buf.read_position(), 2);

        let mut rest = [0u8; 4];
        buf.read_exact(&mut rest).unwrap();
        assert_eq!(&rest, b"cdef");
    }

    #[test]
    fn read_exact_zero_length_at_end() {
        let mut buf = buffer(4, 1);
        buf.write_bytes(b"abcd");
        buf.rewind();
        let mut all = [0u8; 4];
        buf.read_exact(&mut all).unwrap();
        buf.read_exact(&mut []).unwrap();
        assert_eq!(buf.remaining(), 0);
    }

    #[test]
    fn rewind_does_not_touch_writes() {
        let mut buf = buffer(4, 1);
        buf.write_bytes(b"abcdef");
        let cursor = buf.write_cursor();
        buf.rewind();
        assert_eq!(buf.write_cursor(), cursor);
        assert_eq!(buf.read_cursor(), Cursor::new(0, 0));
        assert_eq!(buf.len(), 6);
    }

    #[test]
    fn boundary_sizes_round_trip() {
        let capacity = 16;
        let mut buf = buffer(capacity, 1);
        let mut expected = Vec::new();
        for (n, len) in [capacity + 1, capacity * 2 + 5, 1].into_iter().enumerate() {
            let data: Vec<u8> = (0..len).map(|i| (i * 7 + n) as u8).collect();
            buf.write_bytes(&data);
            expected.extend_from_slice(&data);
        }
        buf.rewind();
        let mut out = vec![0u8; expected.len()];
        buf.read_exact(&mut out).unwrap();
        assert_eq!(out, expected);
    }

    #[cfg(not(miri))]
    mod proptests {
        use super::*;
        use proptest::prelude::*;

        proptest! {
            #[test]
            fn byte_writes_round_trip(
                chunk_size in 1usize..64,
                writes in proptest::collection::vec(
                    proptest::collection::vec(any::<u8>(), 0..100),
                    0..20,
                ),
            ) {
                let mut buf = buffer(chunk_size, 1);
                let mut expected = Vec::new();
                for data in &writes {
                    buf.write_bytes(data);
                    expected.extend_from_slice(data);
                }
                buf.rewind();
                let mut out = vec![0u8; expected.len()];
                buf.read_exact(&mut out).unwrap();
                prop_assert_eq!(out, expected);
            }

            #[test]
            fn read_bytes_concatenates_to_stream(
                chunk_size in 1usize..64,
                data in proptest::collection::vec(any::<u8>(), 0..500),
            ) {
                let mut buf = buffer(chunk_size, 1);
                buf.write_bytes(&data);
                buf.rewind();
                let mut out = Vec::new();
                while let Some(span) = buf.read_bytes() {
                    prop_assert!(!span.is_empty());
                    prop_assert!(span.len() <= chunk_size);
                    out.extend_from_slice(span);
                }
                prop_assert_eq!(out, data);
            }

            #[test]
            fn struct_writes_round_trip(
                element_size in 1usize..16,
                extra in 0usize..32,
                count in 0usize..100,
            ) {
                let mut buf = buffer(element_size + extra, element_size);
                for i in 0..count {
                    buf.write_struct().fill(i as u8);
                }
                prop_assert_eq!(buf.len(), count * element_size);
                buf.rewind();
                for i in 0..count {
                    let record = buf.read_struct();
                    prop_assert!(record.is_some());
                    prop_assert!(record.unwrap().iter().all(|&b| b == i as u8));
                }
                prop_assert!(buf.read_struct().is_none());
            }
        }
    }
}
