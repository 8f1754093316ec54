//! Stowage: growth-on-demand containers for an assembler toolchain.
//!
//! This is the top-level facade crate that re-exports the public API from
//! the Stowage sub-crates. Two independent containers are provided:
//!
//! - [`SparseArray`](sparse::SparseArray): maps arbitrary `u64` keys
//!   (segment numbers, symbol indices) to integers, reading zero where
//!   nothing was written.
//! - [`ChunkedBuffer`](chunked::ChunkedBuffer): accumulates an output
//!   section's bytes, lets earlier bytes be patched once forward
//!   references resolve, and serializes the finished section.
//!
//! # Quick start
//!
//! ```rust
//! use stowage::prelude::*;
//!
//! // Where each segment's data starts in the output file.
//! let mut segment_base: SparseArray<u32> = SparseArray::new();
//! segment_base.set(0x20, 0x1000);
//!
//! // Emit `jmp rel32` with a forward reference, then resolve it.
//! let mut text = ChunkedBuffer::new(1).unwrap();
//! text.write_bytes(&[0xe9]);
//! let fixup = text.len();
//! text.write_zeros(4);
//! text.write_bytes(&[0x90; 3]);
//! let target = text.len() as i32;
//! let rel = target - (fixup as i32 + 4);
//! text.patch_write(fixup, &rel.to_le_bytes()).unwrap();
//!
//! let mut file = Vec::new();
//! text.serialize(&mut file).unwrap();
//! assert_eq!(file, [0xe9, 3, 0, 0, 0, 0x90, 0x90, 0x90]);
//! assert_eq!(segment_base.get(0x20), 0x1000);
//! assert_eq!(segment_base.get(0x21), 0);
//! ```
//!
//! # Modules
//!
//! | Module | Sub-crate | Contents |
//! |--------|-----------|----------|
//! | [`types`] | `stowage-core` | Configs, errors, the `Word` trait |
//! | [`sparse`] | `stowage-sparse` | `SparseArray` |
//! | [`chunked`] | `stowage-chunked` | `ChunkedBuffer`, `Chunk`, `Cursor` |

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![forbid(unsafe_code)]

/// Configuration, error types and the `Word` trait (`stowage-core`).
pub use stowage_core as types;

/// Sparse integer arrays (`stowage-sparse`).
pub use stowage_sparse as sparse;

/// Chunked sequential buffers (`stowage-chunked`).
///
/// [`chunked::ChunkedBuffer`] is also available in the [`prelude`].
pub use stowage_chunked as chunked;

/// Common imports for typical Stowage usage.
///
/// ```rust
/// use stowage::prelude::*;
/// ```
pub mod prelude {
    // Containers
    pub use stowage_chunked::{ChunkedBuffer, Cursor};
    pub use stowage_sparse::SparseArray;

    // Configuration
    pub use stowage_core::{ChunkConfig, SparseConfig, Word};

    // Errors
    pub use stowage_core::{BufferError, BufferResult, ConfigError};
}
