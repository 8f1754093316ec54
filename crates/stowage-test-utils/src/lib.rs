//! Test utilities and reference models for Stowage development.
//!
//! Provides small container configurations that make chunk and level
//! boundaries easy to hit, deterministic byte patterns, and a flat
//! [`ReferenceStream`] model to check a `ChunkedBuffer` against.

#![forbid(unsafe_code)]
#![allow(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]

pub mod fixtures;

pub use fixtures::{apply, small_buffer, toy_sparse, BufferOp, ReferenceStream};

use stowage_core::{ChunkConfig, SparseConfig};

/// Sparse tree shape with leaf size 4 and fan-out 4.
///
/// Capacity grows 4 → 16 → 64 → 256 as levels are added.
pub fn toy_sparse_config() -> SparseConfig {
    SparseConfig::new(4, 4)
}

/// Chunk sizing with a tiny chunk so writes cross boundaries quickly.
pub fn small_chunk_config(chunk_size: usize, element_size: usize) -> ChunkConfig {
    ChunkConfig::new(element_size).with_chunk_size(chunk_size)
}

/// Deterministic pseudo-random bytes.
///
/// The same `(len, seed)` always yields the same bytes.
pub fn pattern(len: usize, seed: u64) -> Vec<u8> {
    let mut state = seed ^ 0x9E37_79B9_7F4A_7C15;
    (0..len)
        .map(|_| {
            // xorshift64
            state ^= state << 13;
            state ^= state >> 7;
            state ^= state << 17;
            (state >> 24) as u8
        })
        .collect()
}

/// Deterministic scattered indices in `0..bound`.
pub fn scattered_indices(count: usize, bound: u64, seed: u64) -> Vec<u64> {
    pattern(count * 8, seed)
        .chunks_exact(8)
        .map(|bytes| {
            let mut word = [0u8; 8];
            word.copy_from_slice(bytes);
            u64::from_le_bytes(word) % bound.max(1)
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn pattern_is_deterministic() {
        assert_eq!(pattern(64, 7), pattern(64, 7));
        assert_ne!(pattern(64, 7), pattern(64, 8));
        assert_eq!(pattern(0, 1).len(), 0);
    }

    #[test]
    fn scattered_indices_respect_bound() {
        let indices = scattered_indices(100, 1000, 3);
        assert_eq!(indices.len(), 100);
        assert!(indices.iter().all(|&i| i < 1000));
    }
}
