//! Benchmark workloads for the Stowage containers.
//!
//! - [`symbol_table_keys`]: deterministic sparse keys shaped like symbol
//!   and segment numbers (a dense prefix plus scattered outliers)
//! - [`section_profile`]: an instruction-stream-like script of record
//!   writes, byte writes and fix-up sites
//! - [`replay_section`]: build a [`ChunkedBuffer`] from such a script

#![forbid(unsafe_code)]
#![deny(rustdoc::broken_intra_doc_links)]

use stowage_chunked::{BufferResult, ChunkedBuffer};
use stowage_core::ChunkConfig;
use stowage_test_utils::{pattern, scattered_indices};

/// Keys for a symbol-table style workload.
///
/// `dense` consecutive keys from zero followed by `sparse` keys scattered
/// over `0..bound`.
pub fn symbol_table_keys(dense: u64, sparse: usize, bound: u64, seed: u64) -> Vec<u64> {
    let mut keys: Vec<u64> = (0..dense).collect();
    keys.extend(scattered_indices(sparse, bound, seed));
    keys
}

/// One emitted item in a section profile.
#[derive(Clone, Debug)]
pub enum Emit {
    /// Opcode or data bytes.
    Bytes(Vec<u8>),
    /// A 4-byte placeholder to be patched once its target is known.
    Fixup,
}

/// Build a script of `items` emitted items, roughly one fix-up in four.
pub fn section_profile(items: usize, seed: u64) -> Vec<Emit> {
    let lengths = pattern(items, seed);
    lengths
        .iter()
        .enumerate()
        .map(|(i, &len)| {
            if len % 4 == 0 {
                Emit::Fixup
            } else {
                Emit::Bytes(pattern(usize::from(len % 15) + 1, i as u64))
            }
        })
        .collect()
}

/// Emit `profile` into a fresh byte buffer, then patch every fix-up site
/// with the final section length.
///
/// Returns the buffer and the fix-up offsets.
pub fn replay_section(
    profile: &[Emit],
    chunk_size: usize,
) -> BufferResult<(ChunkedBuffer, Vec<usize>)> {
    let mut section = ChunkedBuffer::with_config(ChunkConfig::new(1).with_chunk_size(chunk_size))?;
    let mut sites = Vec::new();
    for item in profile {
        match item {
            Emit::Bytes(bytes) => section.write_bytes(bytes),
            Emit::Fixup => {
                sites.push(section.len());
                section.write_zeros(4);
            }
        }
    }
    let target = (section.len() as u32).to_le_bytes();
    for &site in &sites {
        section.patch_write(site, &target)?;
    }
    Ok((section, sites))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn replayed_section_has_patched_sites() {
        let profile = section_profile(200, 1);
        let (section, sites) = replay_section(&profile, 64).unwrap();
        let expected = (section.len() as u32).to_le_bytes();
        for site in sites {
            let mut slot = [0u8; 4];
            section.patch_read(site, &mut slot).unwrap();
            assert_eq!(slot, expected);
        }
    }

    #[test]
    fn symbol_keys_start_dense() {
        let keys = symbol_table_keys(10, 5, 1 << 30, 2);
        assert_eq!(keys.len(), 15);
        assert_eq!(&keys[..10], &(0..10).collect::<Vec<u64>>()[..]);
    }
}
