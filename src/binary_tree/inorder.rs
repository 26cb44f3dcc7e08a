use alloc::vec::Vec;
use core::{
    fmt::{self, Debug, Formatter},
    iter::FusedIterator,
};
use generational_arena::Index;
use super::BinaryTree;
use crate::{Position, Tree};

/// An inorder iterator over the positions of a binary tree.
///
/// Created by [`BinaryTree::inorder`] and [`BinaryTree::inorder_from`].
///
/// [`BinaryTree::inorder`]: struct.BinaryTree.html#method.inorder " "
/// [`BinaryTree::inorder_from`]: struct.BinaryTree.html#method.inorder_from " "
pub struct Inorder<'a, E> {
    tree: &'a BinaryTree<E>,
    /// Ancestors whose left subtree is being visited.
    stack: Vec<Index>,
    /// The next subtree to descend into along its left edge.
    descend: Option<Index>,
}
impl<'a, E> Inorder<'a, E> {
    pub(super) fn new(tree: &'a BinaryTree<E>, start: Option<Index>) -> Self {
        Self {
            tree,
            stack: Vec::new(),
            descend: start,
        }
    }
}
impl<E> Iterator for Inorder<'_, E> {
    type Item = Position;
    fn next(&mut self) -> Option<Self::Item> {
        while let Some(current) = self.descend.take() {
            self.stack.push(current);
            self.descend = self.tree.node_at(current).left;
        }
        let current = self.stack.pop()?;
        self.descend = self.tree.node_at(current).right;
        Some(self.tree.position(current))
    }
    fn size_hint(&self) -> (usize, Option<usize>) {
        let lower = self.stack.len() + usize::from(self.descend.is_some());
        (lower, Some(self.tree.len()))
    }
}
impl<E> FusedIterator for Inorder<'_, E> {}
impl<E> Debug for Inorder<'_, E> {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        f.debug_struct("Inorder")
            .field("stack", &self.stack)
            .field("descend", &self.descend)
            .finish()
    }
}
