//! Error types for container construction and access.
//!
//! Allocation is treated as infallible, so nothing here reports memory
//! exhaustion. The only failures are caller-contract violations: invalid
//! construction parameters and out-of-range byte access. Running out of
//! data during sequential reads is not an error and is signalled with
//! `None` by the read operations instead.

use std::error::Error;
use std::fmt;

/// Result type for chunked buffer operations.
pub type BufferResult<T> = Result<T, BufferError>;

/// Invalid container configuration.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum ConfigError {
    /// A sparse array leaf must hold at least one slot.
    ZeroLeafSize,
    /// A sparse array branch must have at least two children, or the
    /// tree could never grow past its first leaf.
    FanOutTooSmall {
        /// The rejected fan-out.
        fan_out: u32,
    },
    /// Records must be at least one byte long.
    ZeroElementSize,
    /// Chunks must hold at least one byte.
    ZeroChunkSize,
    /// A record would not fit in a single chunk.
    ElementLargerThanChunk {
        /// The requested record size in bytes.
        element_size: usize,
        /// The configured chunk size in bytes.
        chunk_size: usize,
    },
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::ZeroLeafSize => write!(f, "sparse array leaf size must be non-zero"),
            Self::FanOutTooSmall { fan_out } => {
                write!(f, "sparse array fan-out {fan_out} is too small (minimum 2)")
            }
            Self::ZeroElementSize => write!(f, "element size must be non-zero"),
            Self::ZeroChunkSize => write!(f, "chunk size must be non-zero"),
            Self::ElementLargerThanChunk {
                element_size,
                chunk_size,
            } => {
                write!(
                    f,
                    "element size {element_size} exceeds chunk size {chunk_size}"
                )
            }
        }
    }
}

impl Error for ConfigError {}

/// Errors from chunked buffer operations.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum BufferError {
    /// The requested byte range reaches past the data written so far.
    ///
    /// Reported by `read_exact`, `patch_read` and `patch_write`. The
    /// buffer and its cursors are left untouched.
    OutOfRange {
        /// Absolute offset of the first requested byte.
        offset: usize,
        /// Number of bytes requested.
        len: usize,
        /// Logical length of the buffer at the time of the request.
        total: usize,
    },
    /// The buffer could not be constructed with the given parameters.
    Config(ConfigError),
}

impl fmt::Display for BufferError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::OutOfRange { offset, len, total } => {
                write!(
                    f,
                    "byte range out of bounds: offset {offset}, len {len}, buffer length {total}"
                )
            }
            Self::Config(e) => write!(f, "invalid buffer configuration: {e}"),
        }
    }
}

impl Error for BufferError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::Config(e) => Some(e),
            _ => None,
        }
    }
}

impl From<ConfigError> for BufferError {
    fn from(e: ConfigError) -> Self {
        Self::Config(e)
    }
}
