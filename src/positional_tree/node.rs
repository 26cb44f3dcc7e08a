use alloc::vec::Vec;
use generational_arena::Index;

/// A node of a positional tree.
///
/// Links to other nodes are arena indices: the parent link does not own anything, and the children are owned by the arena rather than by their parent.
#[derive(Clone, Debug)]
pub(super) struct Node<E> {
    pub(super) value: E,
    pub(super) parent: Option<Index>,
    pub(super) children: Vec<Index>,
}
impl<E> Node<E> {
    /// Creates a node without a parent. There can only be one such node in a tree.
    #[inline(always)]
    pub(super) const fn root(value: E) -> Self {
        Self {
            value,
            parent: None,
            children: Vec::new(),
        }
    }
    /// Creates a childless node below the specified parent. The parent's child list is not touched.
    #[inline(always)]
    pub(super) const fn child(value: E, parent: Index) -> Self {
        Self {
            value,
            parent: Some(parent),
            children: Vec::new(),
        }
    }
}
