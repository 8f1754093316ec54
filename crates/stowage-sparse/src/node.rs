//! Tree nodes for the sparse array.

use std::iter;

use stowage_core::{SparseConfig, Word};

/// A node of the sparse tree, tagged by its role.
///
/// The variant is chosen by level at construction and never changes.
pub(crate) enum Node<W> {
    /// Level 0: `leaf_size` integer slots, zero until written.
    Leaf(Box<[W]>),
    /// Level ≥ 1: `fan_out` child slots, empty until written through.
    Branch(Branch<W>),
}

pub(crate) struct Branch<W> {
    pub(crate) level: u32,
    /// Indices spanned by one child slot.
    pub(crate) step: u64,
    pub(crate) children: Box<[Option<Box<Node<W>>>]>,
}

impl<W: Word> Node<W> {
    /// Allocate a zeroed node at `level`.
    ///
    /// Callers only build levels whose child span fits in a `u64`: the
    /// root stops growing as soon as its capacity covers the index.
    pub(crate) fn boxed(config: &SparseConfig, level: u32) -> Box<Self> {
        tracing::trace!(level, "allocating sparse node");
        let node = if level == 0 {
            Node::Leaf(vec![W::default(); config.leaf_size as usize].into_boxed_slice())
        } else {
            Node::Branch(Branch {
                level,
                step: config.stepsize(level).unwrap_or(u64::MAX),
                children: iter::repeat_with(|| None)
                    .take(config.fan_out as usize)
                    .collect(),
            })
        };
        Box::new(node)
    }

    pub(crate) fn level(&self) -> u32 {
        match self {
            Node::Leaf(_) => 0,
            Node::Branch(branch) => branch.level,
        }
    }

    /// Number of allocated nodes in this subtree, including `self`.
    pub(crate) fn count(&self) -> usize {
        match self {
            Node::Leaf(_) => 1,
            Node::Branch(branch) => {
                1 + branch
                    .children
                    .iter()
                    .flatten()
                    .map(|child| child.count())
                    .sum::<usize>()
            }
        }
    }
}

impl<W> Branch<W> {
    /// Split `index` into a child slot and the position within that child.
    pub(crate) fn locate(&self, index: u64) -> (usize, u64) {
        ((index / self.step) as usize, index % self.step)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn leaf_is_zeroed() {
        let config = SparseConfig::new(4, 4);
        let node = Node::<i32>::boxed(&config, 0);
        match *node {
            Node::Leaf(ref slots) => assert_eq!(&slots[..], &[0, 0, 0, 0]),
            Node::Branch(_) => panic!("level 0 must be a leaf"),
        }
        assert_eq!(node.level(), 0);
        assert_eq!(node.count(), 1);
    }

    #[test]
    fn branch_has_empty_children_and_step() {
        let config = SparseConfig::new(4, 8);
        let node = Node::<i32>::boxed(&config, 2);
        match *node {
            Node::Branch(ref branch) => {
                assert_eq!(branch.level, 2);
                assert_eq!(branch.step, 32);
                assert_eq!(branch.children.len(), 8);
                assert!(branch.children.iter().all(Option::is_none));
                assert_eq!(branch.locate(70), (2, 6));
            }
            Node::Leaf(_) => panic!("level 2 must be a branch"),
        }
        assert_eq!(node.count(), 1);
    }
}
