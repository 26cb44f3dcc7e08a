// Handles are only ever issued by the tree types
#![cfg_attr(not(any(feature = "positional_tree", feature = "binary_tree")), allow(dead_code))]

use core::sync::atomic::{AtomicUsize, Ordering};
use generational_arena::Index;

/// The identity of a single tree instance, used to reject positions handed out by other trees.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub(crate) struct TreeId(usize);
impl TreeId {
    /// Issues an identity which no other tree created during the lifetime of the process has.
    ///
    /// Relies on `AtomicUsize::fetch_add`, which targets without atomic compare-and-swap do not provide.
    pub(crate) fn fresh() -> Self {
        static NEXT: AtomicUsize = AtomicUsize::new(0);
        Self(NEXT.fetch_add(1, Ordering::Relaxed))
    }
}

/// A handle to a node of a tree.
///
/// Positions are cheap to copy and do not borrow the tree, which means that they can be kept around while the tree is being mutated. In exchange, every operation which receives a position checks it first: if the node has since been deleted, or the position was handed out by a different tree, the operation fails with [`TreeError::InvalidPosition`].
///
/// Two positions are equal if and only if they refer to the same node of the same tree.
///
/// [`TreeError::InvalidPosition`]: enum.TreeError.html#variant.InvalidPosition " "
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub struct Position {
    tree: TreeId,
    index: Index,
}
impl Position {
    #[inline(always)]
    pub(crate) const fn new(tree: TreeId, index: Index) -> Self {
        Self { tree, index }
    }
    #[inline(always)]
    pub(crate) const fn index(self) -> Index {
        self.index
    }
    #[inline(always)]
    pub(crate) fn belongs_to(self, tree: TreeId) -> bool {
        self.tree == tree
    }
}
