//! Container fixtures and a flat reference model.
//!
//! - [`toy_sparse`] / [`small_buffer`] build containers with tiny node and
//!   chunk sizes.
//! - [`ReferenceStream`] is a plain `Vec<u8>` that applies the same writes
//!   and patches as a `ChunkedBuffer`, so the two can be compared after
//!   any operation sequence.
//! - [`BufferOp`] + [`apply`] drive both from one script.

use stowage_chunked::{BufferResult, ChunkedBuffer};
use stowage_sparse::SparseArray;

use crate::{small_chunk_config, toy_sparse_config};

/// Empty `i32` sparse array with leaf size 4 and fan-out 4.
pub fn toy_sparse() -> SparseArray<i32> {
    SparseArray::with_config(toy_sparse_config()).expect("toy config is valid")
}

/// Empty chunked buffer with the given chunk and record size.
///
/// # Panics
///
/// Panics if the sizes are invalid.
pub fn small_buffer(chunk_size: usize, element_size: usize) -> ChunkedBuffer {
    ChunkedBuffer::with_config(small_chunk_config(chunk_size, element_size))
        .expect("fixture chunk config is valid")
}

/// A flat model of the logical stream of a `ChunkedBuffer`.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct ReferenceStream {
    bytes: Vec<u8>,
}

impl ReferenceStream {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn write_bytes(&mut self, data: &[u8]) {
        self.bytes.extend_from_slice(data);
    }

    /// Returns `false`, changing nothing, if the range is past the end.
    pub fn patch_write(&mut self, offset: usize, data: &[u8]) -> bool {
        match offset.checked_add(data.len()) {
            Some(end) if end <= self.bytes.len() => {
                self.bytes[offset..end].copy_from_slice(data);
                true
            }
            _ => false,
        }
    }

    pub fn len(&self) -> usize {
        self.bytes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.bytes.is_empty()
    }

    pub fn bytes(&self) -> &[u8] {
        &self.bytes
    }
}

/// One step of a scripted buffer session.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum BufferOp {
    /// `write_struct`, filled with these bytes (must be `element_size` long).
    Struct(Vec<u8>),
    /// `write_bytes`.
    Bytes(Vec<u8>),
    /// `write_zeros`.
    Zeros(usize),
    /// `patch_write`.
    Patch { offset: usize, data: Vec<u8> },
}

/// Apply `op` to both the buffer and the model.
///
/// Returns the buffer's result for patches (`Ok(())` for appends).
pub fn apply(
    op: &BufferOp,
    buffer: &mut ChunkedBuffer,
    model: &mut ReferenceStream,
) -> BufferResult<()> {
    match op {
        BufferOp::Struct(record) => {
            buffer.write_struct().copy_from_slice(record);
            model.write_bytes(record);
            Ok(())
        }
        BufferOp::Bytes(data) => {
            buffer.write_bytes(data);
            model.write_bytes(data);
            Ok(())
        }
        BufferOp::Zeros(len) => {
            buffer.write_zeros(*len);
            model.write_bytes(&vec![0; *len]);
            Ok(())
        }
        BufferOp::Patch { offset, data } => {
            let result = buffer.patch_write(*offset, data);
            let applied = model.patch_write(*offset, data);
            debug_assert_eq!(result.is_ok(), applied);
            result
        }
    }
}
