//! Core types shared by the Stowage containers.
//!
//! This is the leaf crate with zero internal dependencies. It defines
//! the configuration structs, error types and the [`Word`] trait used by
//! `stowage-sparse` and `stowage-chunked`.

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![forbid(unsafe_code)]

pub mod config;
pub mod error;
pub mod word;

pub use config::{ChunkConfig, SparseConfig};
pub use error::{BufferError, BufferResult, ConfigError};
pub use word::Word;
