//! Chunked sequential buffer for incrementally built byte streams.
//!
//! [`ChunkedBuffer`] accumulates a logical byte stream in a list of
//! fixed-capacity chunks, so no single allocation ever has to hold the
//! whole stream. It supports:
//!
//! - **Appends:** whole records ([`write_struct`]) or raw bytes
//!   ([`write_bytes`]) at the write cursor.
//! - **Sequential reads:** records, contiguous spans or exact-length
//!   copies from an independent read cursor, reset with [`rewind`].
//! - **Patching:** reads and writes at absolute offsets inside the data
//!   already written, e.g. to resolve a forward reference.
//! - **Serialization:** the whole stream to any [`std::io::Write`] sink.
//!
//! # Architecture
//!
//! ```text
//! ChunkedBuffer
//! ├── ChunkConfig (chunk capacity, element size)
//! ├── chunks: Vec<Chunk>   start₀=0, startᵢ₊₁ = startᵢ + lenᵢ
//! ├── write cursor         always (last chunk, its fill)
//! └── read cursor          (chunk index, offset), moved only by reads
//! ```
//!
//! Records are never split across chunks: when the tail chunk cannot
//! hold another whole record, its leftover room is abandoned and a new
//! chunk starts where the data ends. Raw byte writes fill every chunk
//! to capacity.
//!
//! [`write_struct`]: ChunkedBuffer::write_struct
//! [`write_bytes`]: ChunkedBuffer::write_bytes
//! [`rewind`]: ChunkedBuffer::rewind

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![forbid(unsafe_code)]

pub mod buffer;
pub mod chunk;
pub mod cursor;
pub mod patch;
pub mod read;

pub use buffer::ChunkedBuffer;
pub use chunk::Chunk;
pub use cursor::Cursor;
pub use stowage_core::{BufferError, BufferResult, ChunkConfig, ConfigError};
