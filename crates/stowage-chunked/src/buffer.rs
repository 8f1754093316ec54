//! The chunked buffer handle: construction, appends and serialization.
//!
//! Sequential reads live in [`crate::read`], absolute-offset patching in
//! [`crate::patch`].

use std::io::{self, Write};

use stowage_core::{BufferResult, ChunkConfig};

use crate::chunk::Chunk;
use crate::cursor::Cursor;

/// A growable byte stream stored as a list of fixed-capacity chunks.
///
/// # Examples
///
/// ```
/// use stowage_chunked::ChunkedBuffer;
///
/// let mut section = ChunkedBuffer::new(1).unwrap();
/// section.write_bytes(b"\xe8");
/// let fixup = section.len();
/// section.write_bytes(&[0; 4]); // placeholder for a forward reference
/// section.write_bytes(b"\xc3");
///
/// // Later, once the target is known:
/// section.patch_write(fixup, &0x10i32.to_le_bytes()).unwrap();
///
/// let mut out = Vec::new();
/// section.serialize(&mut out).unwrap();
/// assert_eq!(out, [0xe8, 0x10, 0, 0, 0, 0xc3]);
/// ```
#[derive(Debug)]
pub struct ChunkedBuffer {
    pub(crate) config: ChunkConfig,
    /// The chain, ordered by `start` with no gaps. Never empty.
    pub(crate) chunks: Vec<Chunk>,
    /// Logical length of the stream.
    pub(crate) total: usize,
    /// Independent read position, moved only by sequential reads.
    pub(crate) read: Cursor,
}

impl ChunkedBuffer {
    /// Create an empty buffer for records of `element_size` bytes, using
    /// the default chunk size.
    ///
    /// Pass 1 for a plain byte stream.
    pub fn new(element_size: usize) -> BufferResult<Self> {
        Self::with_config(ChunkConfig::new(element_size))
    }

    /// Create an empty buffer with explicit sizing.
    ///
    /// Allocates one zero-filled chunk.
    pub fn with_config(config: ChunkConfig) -> BufferResult<Self> {
        config.validate()?;
        Ok(Self {
            chunks: vec![Chunk::new(0, config.chunk_capacity())],
            config,
            total: 0,
            read: Cursor::default(),
        })
    }

    /// The sizing this buffer was built with.
    pub fn config(&self) -> &ChunkConfig {
        &self.config
    }

    /// Size of the records handled by `write_struct` and `read_struct`.
    pub fn element_size(&self) -> usize {
        self.config.element_size
    }

    /// Capacity of every chunk in bytes.
    pub fn chunk_capacity(&self) -> usize {
        self.config.chunk_capacity()
    }

    /// Logical length of the stream written so far.
    pub fn len(&self) -> usize {
        self.total
    }

    /// Whether nothing has been written.
    pub fn is_empty(&self) -> bool {
        self.total == 0
    }

    /// Number of chunks in the chain.
    pub fn chunk_count(&self) -> usize {
        self.chunks.len()
    }

    /// Bytes allocated for chunk storage, including unused room.
    pub fn memory_bytes(&self) -> usize {
        self.chunks.iter().map(Chunk::capacity).sum()
    }

    /// Where the next write will land: the tail chunk and its fill.
    pub fn write_cursor(&self) -> Cursor {
        let last = self.chunks.len() - 1;
        Cursor::new(last, self.chunks[last].len())
    }

    /// The chunks in stream order.
    pub fn chunk_list(&self) -> &[Chunk] {
        &self.chunks
    }

    /// The valid bytes of each chunk, in stream order.
    ///
    /// Concatenated, they form the whole logical stream.
    pub fn chunks(&self) -> impl Iterator<Item = &[u8]> + '_ {
        self.chunks
            .iter()
            .map(Chunk::bytes)
            .filter(|bytes| !bytes.is_empty())
    }

    /// Copy the whole stream into one contiguous vector.
    pub fn to_vec(&self) -> Vec<u8> {
        let mut out = Vec::with_capacity(self.total);
        for bytes in self.chunks() {
            out.extend_from_slice(bytes);
        }
        out
    }

    /// Reserve one record of `element_size` bytes and return it for the
    /// caller to fill.
    ///
    /// A record never straddles two chunks: if the tail chunk lacks room
    /// for a whole record, that room is abandoned and a new chunk begins
    /// at the current end of the stream. The returned region is zeroed.
    pub fn write_struct(&mut self) -> &mut [u8] {
        let size = self.config.element_size;
        let room = self.tail().remaining();
        if room < size {
            if room > 0 {
                tracing::trace!(abandoned = room, "record does not fit in tail chunk");
            }
            self.push_chunk();
        }
        self.total += size;
        self.tail_mut().reserve(size)
    }

    /// Append raw bytes, filling the tail chunk before spilling into new
    /// ones.
    pub fn write_bytes(&mut self, data: &[u8]) {
        let mut rest = data;
        loop {
            let taken = self.tail_mut().fill_from(rest);
            self.total += taken;
            rest = &rest[taken..];
            if rest.is_empty() {
                break;
            }
            self.push_chunk();
        }
    }

    /// Append `len` zero bytes, e.g. for alignment padding or space to be
    /// patched later.
    pub fn write_zeros(&mut self, len: usize) {
        let mut rest = len;
        loop {
            let taken = self.tail_mut().fill_zeros(rest);
            self.total += taken;
            rest -= taken;
            if rest == 0 {
                break;
            }
            self.push_chunk();
        }
    }

    /// Write every valid byte, chunk by chunk, to `sink`.
    ///
    /// Neither cursor moves.
    pub fn serialize<W: Write>(&self, mut sink: W) -> io::Result<()> {
        for bytes in self.chunks() {
            sink.write_all(bytes)?;
        }
        Ok(())
    }

    /// Drop every chunk and start over with a single empty one.
    pub fn clear(&mut self) {
        tracing::trace!(
            chunks = self.chunks.len(),
            len = self.total,
            "clearing chunked buffer"
        );
        self.chunks.clear();
        self.chunks.push(Chunk::new(0, self.config.chunk_capacity()));
        self.total = 0;
        self.read = Cursor::default();
    }

    fn tail(&self) -> &Chunk {
        &self.chunks[self.chunks.len() - 1]
    }

    fn tail_mut(&mut self) -> &mut Chunk {
        let last = self.chunks.len() - 1;
        &mut self.chunks[last]
    }

    fn push_chunk(&mut self) {
        let start = self.tail().end();
        let capacity = self.config.chunk_capacity();
        tracing::trace!(chunk = self.chunks.len(), start, capacity, "allocating chunk");
        self.chunks.push(Chunk::new(start, capacity));
    }
}

impl Write for ChunkedBuffer {
    fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
        self.write_bytes(buf);
        Ok(buf.len())
    }

    fn flush(&mut self) -> io::Result<()> {
        Ok(())
    }
}
