//! The sparse array handle.

use std::fmt;

use stowage_core::{ConfigError, SparseConfig, Word};

use crate::node::Node;

/// A sparse, lazily grown array of fixed-width integers.
///
/// Reads of positions that were never written return `W::default()`
/// (zero). Writes allocate only the nodes on the path to the written
/// index, growing the tree upward first when the index lies beyond the
/// current capacity.
///
/// # Examples
///
/// ```
/// use stowage_sparse::SparseArray;
///
/// let mut symbols: SparseArray<i32> = SparseArray::new();
/// assert_eq!(symbols.get(1_000_000), 0);
///
/// symbols.set(1_000_000, 42);
/// symbols.set(3, -1);
/// assert_eq!(symbols.get(1_000_000), 42);
/// assert_eq!(symbols.get(3), -1);
/// assert_eq!(symbols.get(4), 0);
/// ```
pub struct SparseArray<W: Word = i64> {
    config: SparseConfig,
    root: Option<Box<Node<W>>>,
}

impl<W: Word> SparseArray<W> {
    /// Create an empty array with the default tree shape.
    ///
    /// No node is allocated until the first write.
    pub fn new() -> Self {
        Self {
            config: SparseConfig::default(),
            root: None,
        }
    }

    /// Create an empty array with a custom tree shape.
    pub fn with_config(config: SparseConfig) -> Result<Self, ConfigError> {
        config.validate()?;
        Ok(Self { config, root: None })
    }

    /// The tree shape this array was built with.
    pub fn config(&self) -> &SparseConfig {
        &self.config
    }

    /// Whether no write has happened since creation or the last [`clear`].
    ///
    /// [`clear`]: Self::clear
    pub fn is_empty(&self) -> bool {
        self.root.is_none()
    }

    /// Level of the root node, or `None` for an empty array.
    pub fn height(&self) -> Option<u32> {
        self.root.as_ref().map(|root| root.level())
    }

    /// Number of indices covered by the current tree.
    ///
    /// Zero for an empty array; saturates at `u64::MAX`.
    pub fn capacity(&self) -> u64 {
        match self.height() {
            Some(level) => self.config.capacity(level).unwrap_or(u64::MAX),
            None => 0,
        }
    }

    /// Number of nodes currently allocated.
    pub fn node_count(&self) -> usize {
        self.root.as_ref().map_or(0, |root| root.count())
    }

    /// Read the value at `index`.
    ///
    /// Returns zero when the array is empty, when `index` lies beyond the
    /// current capacity, or when no write ever touched its sub-range.
    pub fn get(&self, index: u64) -> W {
        let Some(root) = self.root.as_deref() else {
            return W::default();
        };
        if !self.covers(root.level(), index) {
            return W::default();
        }

        let mut node = root;
        let mut pos = index;
        loop {
            match node {
                Node::Leaf(slots) => return slots[pos as usize],
                Node::Branch(branch) => {
                    let (slot, rest) = branch.locate(pos);
                    match branch.children[slot].as_deref() {
                        Some(child) => {
                            node = child;
                            pos = rest;
                        }
                        None => return W::default(),
                    }
                }
            }
        }
    }

    /// Write `value` at `index`, growing the tree as needed.
    ///
    /// Rewriting an index whose leaf already exists allocates nothing.
    pub fn set(&mut self, index: u64, value: W) {
        let config = self.config;
        let mut root = match self.root.take() {
            Some(root) => root,
            None => {
                // First write: start at the lowest level that covers the index.
                let mut level = 0;
                while !self.covers(level, index) {
                    level += 1;
                }
                Node::boxed(&config, level)
            }
        };

        // Wrap the old root as child 0 until the index is covered.
        while !self.covers(root.level(), index) {
            let level = root.level() + 1;
            let mut parent = Node::boxed(&config, level);
            if let Node::Branch(branch) = &mut *parent {
                branch.children[0] = Some(root);
            }
            root = parent;
            tracing::trace!(
                level,
                capacity = config.capacity(level).unwrap_or(u64::MAX),
                "sparse array grew a level"
            );
        }

        let mut node: &mut Node<W> = &mut root;
        let mut pos = index;
        loop {
            match node {
                Node::Leaf(slots) => {
                    slots[pos as usize] = value;
                    break;
                }
                Node::Branch(branch) => {
                    let (slot, rest) = branch.locate(pos);
                    let child_level = branch.level - 1;
                    let child = branch.children[slot]
                        .get_or_insert_with(|| Node::boxed(&config, child_level));
                    node = &mut **child;
                    pos = rest;
                }
            }
        }

        self.root = Some(root);
    }

    /// Release every node, returning the array to its empty state.
    pub fn clear(&mut self) {
        if let Some(root) = self.root.take() {
            tracing::trace!(nodes = root.count(), "releasing sparse array");
        }
    }

    fn covers(&self, level: u32, index: u64) -> bool {
        self.config
            .capacity(level)
            .map_or(true, |capacity| index < capacity)
    }
}

impl<W: Word> Default for SparseArray<W> {
    fn default() -> Self {
        Self::new()
    }
}

impl<W: Word> fmt::Debug for SparseArray<W> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("SparseArray")
            .field("config", &self.config)
            .field("height", &self.height())
            .field("capacity", &self.capacity())
            .field("nodes", &self.node_count())
            .finish()
    }
}

impl<W: Word> Extend<(u64, W)> for SparseArray<W> {
    fn extend<I: IntoIterator<Item = (u64, W)>>(&mut self, iter: I) {
        for (index, value) in iter {
            self.set(index, value);
        }
    }
}

impl<W: Word> FromIterator<(u64, W)> for SparseArray<W> {
    fn from_iter<I: IntoIterator<Item = (u64, W)>>(iter: I) -> Self {
        let mut array = Self::new();
        array.extend(iter);
        array
    }
}
