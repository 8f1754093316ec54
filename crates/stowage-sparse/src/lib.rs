//! Sparse random-access array of fixed-width integers.
//!
//! [`SparseArray`] maps any `u64` index to an integer, reading back zero
//! for positions that were never written. Storage is a tree of
//! fixed-size nodes that is only allocated along the paths that have
//! actually been written, so a handful of writes at widely scattered
//! indices costs a handful of nodes.
//!
//! # Architecture
//!
//! ```text
//! SparseArray
//! ├── SparseConfig (leaf_size B, fan_out F)
//! └── root: Option<Box<Node>>
//!     ├── Node::Leaf   → [W; B]                 (level 0)
//!     └── Node::Branch → [Option<Box<Node>>; F] (level ≥ 1)
//! ```
//!
//! One slot of a level-`L` branch spans `B * F^(L-1)` indices. When a
//! write lands beyond the current capacity, the root is wrapped as child
//! 0 of a new root one level higher until the index is covered, so the
//! tree height only ever grows.

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![forbid(unsafe_code)]

pub mod array;
mod node;

pub use array::SparseArray;
pub use stowage_core::{ConfigError, SparseConfig, Word};
