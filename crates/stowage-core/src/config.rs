//! Container configuration parameters.
//!
//! Both configs are plain structs with public fields. Constructors that
//! can fail call `validate()`; all values are immutable once a container
//! has been built from them.

use crate::error::ConfigError;

/// Shape of a sparse array tree.
///
/// A leaf holds `leaf_size` integer slots; a branch holds `fan_out` child
/// slots. One child slot of a level-`L` branch spans [`stepsize(L)`]
/// logical indices.
///
/// [`stepsize(L)`]: SparseConfig::stepsize
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct SparseConfig {
    /// Number of integer slots in each leaf node.
    ///
    /// Default: 4096. Must be non-zero.
    pub leaf_size: u32,

    /// Number of child slots in each branch node.
    ///
    /// Default: 1024. Must be at least 2.
    pub fan_out: u32,
}

impl SparseConfig {
    /// Default leaf size in slots.
    pub const DEFAULT_LEAF_SIZE: u32 = 4096;

    /// Default branch fan-out.
    pub const DEFAULT_FAN_OUT: u32 = 1024;

    /// Create a config with the given leaf size and fan-out.
    ///
    /// Not validated here; containers call [`validate`](Self::validate).
    pub fn new(leaf_size: u32, fan_out: u32) -> Self {
        Self { leaf_size, fan_out }
    }

    /// Check that the tree can hold data and grow.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.leaf_size == 0 {
            return Err(ConfigError::ZeroLeafSize);
        }
        if self.fan_out < 2 {
            return Err(ConfigError::FanOutTooSmall {
                fan_out: self.fan_out,
            });
        }
        Ok(())
    }

    /// Number of logical indices spanned by one slot of a node at `level`.
    ///
    /// `stepsize(0) = 1`, `stepsize(1) = leaf_size`, and every further
    /// level multiplies by `fan_out`. Returns `None` when the value does
    /// not fit in a `u64`, in which case the slot spans every index.
    pub fn stepsize(&self, level: u32) -> Option<u64> {
        if level == 0 {
            return Some(1);
        }
        let mut step = u64::from(self.leaf_size);
        for _ in 1..level {
            step = step.checked_mul(u64::from(self.fan_out))?;
        }
        Some(step)
    }

    /// Number of slots in a node at `level`.
    pub fn slots(&self, level: u32) -> u32 {
        if level == 0 {
            self.leaf_size
        } else {
            self.fan_out
        }
    }

    /// Number of logical indices covered by a tree rooted at `level`.
    ///
    /// `None` means the capacity exceeds `u64::MAX`.
    pub fn capacity(&self, level: u32) -> Option<u64> {
        self.stepsize(level)?.checked_mul(u64::from(self.slots(level)))
    }
}

impl Default for SparseConfig {
    fn default() -> Self {
        Self::new(Self::DEFAULT_LEAF_SIZE, Self::DEFAULT_FAN_OUT)
    }
}

/// Sizing for a chunked sequential buffer.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct ChunkConfig {
    /// Nominal size of each chunk in bytes.
    ///
    /// Default: 8192. The usable capacity is rounded down to a whole
    /// number of records, see [`chunk_capacity`](Self::chunk_capacity).
    pub chunk_size: usize,

    /// Size in bytes of the records written by `write_struct` and read
    /// by `read_struct`. Use 1 for a plain byte stream.
    pub element_size: usize,
}

impl ChunkConfig {
    /// Default chunk size in bytes.
    pub const DEFAULT_CHUNK_SIZE: usize = 8192;

    /// Create a config for records of `element_size` bytes.
    ///
    /// Uses the default chunk size.
    pub fn new(element_size: usize) -> Self {
        Self {
            chunk_size: Self::DEFAULT_CHUNK_SIZE,
            element_size,
        }
    }

    /// Override the nominal chunk size.
    pub fn with_chunk_size(mut self, chunk_size: usize) -> Self {
        self.chunk_size = chunk_size;
        self
    }

    /// Check that at least one record fits in a chunk.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.element_size == 0 {
            return Err(ConfigError::ZeroElementSize);
        }
        if self.chunk_size == 0 {
            return Err(ConfigError::ZeroChunkSize);
        }
        if self.element_size > self.chunk_size {
            return Err(ConfigError::ElementLargerThanChunk {
                element_size: self.element_size,
                chunk_size: self.chunk_size,
            });
        }
        Ok(())
    }

    /// Effective capacity of each chunk in bytes.
    ///
    /// The chunk size rounded down to a multiple of the element size.
    /// Only meaningful for a validated config.
    pub fn chunk_capacity(&self) -> usize {
        self.chunk_size - self.chunk_size % self.element_size.max(1)
    }
}

impl Default for ChunkConfig {
    fn default() -> Self {
        Self::new(1)
    }
}
