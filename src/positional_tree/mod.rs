//! Positional trees, general trees which don't impose any restrictions on the number of child nodes that a node can have.
//!
//! Nodes are reached through [`Position`]s handed out by the tree when nodes are added and by the navigation methods of [`Tree`]. Positions stay valid until their node is deleted, no matter how the rest of the tree changes in the meantime.
//!
//! # Deletion
//! Deleting a node never deletes its descendants. Instead, its children take its place:
//! - the children of a non-root node are appended, in their original order, to the end of its parent's child list;
//! - a root with a single child is replaced by that child;
//! - a root without children leaves the tree empty;
//! - a root with more than one child cannot be deleted, since there would be no single node to take its place.
//!
//! # Example
//! ```rust
//! use lignite::{PositionalTree, Tree, TreeError};
//!
//! // Trees start out empty. The first node has to be added as the root:
//! let mut tree = PositionalTree::new();
//! assert!(tree.is_empty());
//! let root = tree.add_root("Root")?;
//!
//! // Every other node is added below an existing one:
//! let left = tree.add_child(root, "Left")?;
//! let right = tree.add_child(root, "Right")?;
//! tree.add_child(left, "Grandchild")?;
//! assert_eq!(tree.len(), 4);
//! assert_eq!(tree.height()?, 2);
//!
//! // Positions keep working after unrelated modifications...
//! tree.replace(right, "Also right")?;
//! assert_eq!(tree.element(right)?, &"Also right");
//! // ...but not after their node is gone:
//! tree.delete(right)?;
//! assert_eq!(tree.element(right), Err(TreeError::InvalidPosition));
//! # Ok::<(), TreeError>(())
//! ```
//!
//! [`Position`]: ../struct.Position.html " "
//! [`Tree`]: ../trait.Tree.html " "

use alloc::collections::VecDeque;
use core::mem;
use arrayvec::ArrayVec;
use generational_arena::{Arena, Index};
use log::{debug, trace};
use crate::{
    position::TreeId,
    traversal::Elements,
    util::corrupted,
    Position,
    Result,
    Tree,
    TreeError,
};

mod node;
use node::Node;

/// A general tree addressed through positions.
///
/// See the [module-level documentation] for more.
///
/// [module-level documentation]: index.html " "
#[derive(Debug)]
pub struct PositionalTree<E> {
    arena: Arena<Node<E>>,
    root: Option<Index>,
    id: TreeId,
}
impl<E> PositionalTree<E> {
    /// Creates an empty tree.
    ///
    /// # Example
    /// ```rust
    /// # use lignite::{PositionalTree, Tree};
    /// let tree = PositionalTree::<u32>::new();
    /// assert!(tree.is_empty());
    /// assert_eq!(tree.root(), None);
    /// ```
    #[inline]
    pub fn new() -> Self {
        Self {
            arena: Arena::new(),
            root: None,
            id: TreeId::fresh(),
        }
    }
    /// Creates an empty tree with preallocated space for the specified number of nodes.
    ///
    /// # Example
    /// ```rust
    /// # use lignite::{PositionalTree, Tree};
    /// // Let's create a tree, but with some preallocated space for more nodes:
    /// let mut tree = PositionalTree::with_capacity(5);
    /// // Capacity does not affect the actual nodes:
    /// assert!(tree.is_empty());
    ///
    /// // Not until we create them ourselves:
    /// let root = tree.add_root("Variable Names")?;
    /// for name in ["Foo", "Bar", "Baz", "Quux"] {
    ///     tree.add_child(root, name)?;
    /// }
    /// // The arena has not had to grow to this point.
    /// assert_eq!(tree.len(), 5);
    /// # Ok::<(), lignite::TreeError>(())
    /// ```
    #[inline]
    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            arena: Arena::with_capacity(capacity),
            root: None,
            id: TreeId::fresh(),
        }
    }
    /// Returns the number of nodes the tree can hold without reallocating, counting slots freed by deletion.
    #[inline]
    pub fn capacity(&self) -> usize {
        self.arena.capacity()
    }
    /// Reserves space for at least `additional` more nodes. Slots freed by deletion count towards that space.
    #[inline]
    pub fn reserve(&mut self, additional: usize) {
        // The arena appends `additional` fresh slots no matter how many free ones it has
        let free = self.arena.capacity() - self.arena.len();
        let shortfall = additional.saturating_sub(free);
        if shortfall > 0 {
            self.arena.reserve(shortfall);
        }
    }
    /// Returns `true` if the position refers to a live node of this tree, `false` otherwise.
    #[inline]
    pub fn contains(&self, position: Position) -> bool {
        self.node(position).is_ok()
    }
    /// Returns a *mutable* reference to the element stored in the node.
    ///
    /// # Errors
    /// Fails with `InvalidPosition` if the position does not refer to a live node of this tree.
    #[inline]
    pub fn element_mut(&mut self, position: Position) -> Result<&mut E> {
        self.node_mut(position).map(|node| &mut node.value)
    }

    /// Places the element at the root of the tree, which has to be empty, and returns its position.
    ///
    /// # Errors
    /// Fails with `TreeNotEmpty` if the tree already has a root.
    pub fn add_root(&mut self, value: E) -> Result<Position> {
        if self.root.is_some() {
            return Err(TreeError::TreeNotEmpty);
        }
        let root = self.arena.insert(Node::root(value));
        self.root = Some(root);
        trace!("added root {:?}", root);
        Ok(self.position(root))
    }
    /// Creates a new last child of the node, storing the element in it, and returns its position.
    ///
    /// # Errors
    /// Will fail in the following scenarios:
    /// - The tree is empty, which is reported as `TreeEmpty` to point out that `add_root` needs to be called first.
    /// - The position does not refer to a live node of this tree (`InvalidPosition`).
    ///
    /// # Example
    /// ```rust
    /// # use lignite::{PositionalTree, Tree};
    /// let mut tree = PositionalTree::new();
    /// let root = tree.add_root(0)?;
    /// let first = tree.add_child(root, 1)?;
    /// let second = tree.add_child(root, 2)?;
    ///
    /// // Children are kept in the order they were added in:
    /// assert_eq!(tree.children(root)?.collect::<Vec<_>>(), [first, second]);
    /// assert_eq!(tree.parent(second)?, Some(root));
    /// # Ok::<(), lignite::TreeError>(())
    /// ```
    pub fn add_child(&mut self, position: Position, value: E) -> Result<Position> {
        if self.root.is_none() {
            return Err(TreeError::TreeEmpty);
        }
        let parent = position.index();
        self.node(position)?;
        let child = self.arena.insert(Node::child(value, parent));
        self.node_at_mut(parent).children.push(child);
        trace!("added child {:?} to {:?}", child, parent);
        Ok(self.position(child))
    }
    /// Replaces the element stored in the node, returning the old one. The structure of the tree does not change.
    ///
    /// # Errors
    /// Fails with `InvalidPosition` if the position does not refer to a live node of this tree.
    pub fn replace(&mut self, position: Position, value: E) -> Result<E> {
        let old = mem::replace(self.element_mut(position)?, value);
        trace!("replaced element of {:?}", position.index());
        Ok(old)
    }
    /// Deletes the node, handing its children over to its parent, and returns its element.
    ///
    /// If the node is not the root, its children are appended to the end of its parent's child list, after the parent's other children and in their original order. If it's the root, its only child becomes the new root, or the tree becomes empty if there were no children. The position, and every copy of it, becomes invalid.
    ///
    /// # Errors
    /// Will fail in the following scenarios:
    /// - The position does not refer to a live node of this tree (`InvalidPosition`).
    /// - The node is the root and has more than one child (`MultipleChildrenRootDeletion`), which would leave no single node to take its place. The tree is left untouched.
    ///
    /// # Example
    /// ```rust
    /// # use lignite::{PositionalTree, Tree};
    /// let mut tree = PositionalTree::new();
    /// let root = tree.add_root('a')?;
    /// let b = tree.add_child(root, 'b')?;
    /// let c = tree.add_child(b, 'c')?;
    /// let d = tree.add_child(root, 'd')?;
    ///
    /// assert_eq!(tree.delete(b)?, 'b');
    /// // `c` moved up, after `d`:
    /// assert_eq!(tree.children(root)?.collect::<Vec<_>>(), [d, c]);
    /// assert_eq!(tree.parent(c)?, Some(root));
    /// # Ok::<(), lignite::TreeError>(())
    /// ```
    pub fn delete(&mut self, position: Position) -> Result<E> {
        let target = self.node(position)?;
        if target.parent.is_none() && target.children.len() > 1 {
            return Err(TreeError::MultipleChildrenRootDeletion);
        }
        let index = position.index();
        let node = self
            .arena
            .remove(index)
            .unwrap_or_else(|| corrupted("checked node vanished from the arena"));
        match node.parent {
            None => {
                self.root = node.children.first().copied();
                if let Some(new_root) = self.root {
                    self.node_at_mut(new_root).parent = None;
                    debug!("promoted {:?} to root in place of {:?}", new_root, index);
                }
            }
            Some(parent) => {
                for &child in &node.children {
                    self.node_at_mut(child).parent = Some(parent);
                }
                let siblings = &mut self.node_at_mut(parent).children;
                match siblings.iter().position(|&sibling| sibling == index) {
                    Some(slot) => {
                        siblings.remove(slot);
                    }
                    None => corrupted("node missing from its parent's child list"),
                }
                siblings.extend_from_slice(&node.children);
                if !node.children.is_empty() {
                    debug!(
                        "spliced {} children of {:?} into {:?}",
                        node.children.len(),
                        index,
                        parent,
                    );
                }
            }
        }
        trace!("deleted {:?}", index);
        Ok(node.value)
    }
    /// Attaches the two trees below the leaf node, in order, and returns the positions their roots ended up at.
    ///
    /// The root of `first` becomes the first child of the node and the root of `second` becomes the next one; an empty tree does not add a child. Both trees are left empty, since all of their nodes are moved into this tree; positions into them do not carry over. The size of this tree grows by the sum of their sizes.
    ///
    /// # Errors
    /// Will fail in the following scenarios:
    /// - The position does not refer to a live node of this tree (`InvalidPosition`).
    /// - The node has children (`NotLeaf`).
    ///
    /// Neither this tree nor the attached ones are modified in case of an error.
    ///
    /// # Example
    /// ```rust
    /// # use lignite::{PositionalTree, Tree};
    /// let mut left = PositionalTree::new();
    /// let left_root = left.add_root(1)?;
    /// left.add_child(left_root, 3)?;
    /// let mut right = PositionalTree::new();
    /// right.add_root(2)?;
    ///
    /// let mut tree = PositionalTree::new();
    /// let root = tree.add_root(0)?;
    /// let grafted = tree.attach(root, &mut left, &mut right)?;
    ///
    /// assert!(left.is_empty() && right.is_empty());
    /// assert_eq!(tree.len(), 4);
    /// assert_eq!(tree.children(root)?.collect::<Vec<_>>(), grafted.as_slice());
    /// assert_eq!(tree.elements().copied().collect::<Vec<_>>(), [0, 1, 3, 2]);
    /// # Ok::<(), lignite::TreeError>(())
    /// ```
    pub fn attach(
        &mut self,
        position: Position,
        first: &mut Self,
        second: &mut Self,
    ) -> Result<ArrayVec<[Position; 2]>> {
        if !self.node(position)?.children.is_empty() {
            return Err(TreeError::NotLeaf);
        }
        let mut grafted = ArrayVec::new();
        for source in [first, second] {
            if let Some(root) = self.graft(position.index(), source) {
                grafted.push(self.position(root));
            }
        }
        trace!("attached {} trees to {:?}", grafted.len(), position.index());
        Ok(grafted)
    }

    /// Moves every node of `source` into this tree, with the root of `source` becoming the last child of `parent`. Returns the new index of that root, or `None` if `source` was empty.
    fn graft(&mut self, parent: Index, source: &mut Self) -> Option<Index> {
        let source_root = source.root.take()?;
        let moved = source.arena.len();
        self.reserve(moved);
        // Breadth-first, so that siblings get appended to their new parent in their original order
        let mut pending = VecDeque::with_capacity(moved);
        pending.push_back((source_root, parent));
        let mut grafted_root = None;
        while let Some((old, new_parent)) = pending.pop_front() {
            let node = source
                .arena
                .remove(old)
                .unwrap_or_else(|| corrupted("child link points outside of the arena"));
            let new = self.arena.insert(Node::child(node.value, new_parent));
            self.node_at_mut(new_parent).children.push(new);
            grafted_root.get_or_insert(new);
            pending.extend(node.children.into_iter().map(|child| (child, new)));
        }
        source.arena.clear();
        debug!("grafted {} nodes below {:?}", moved, parent);
        grafted_root
    }
    #[inline]
    fn position(&self, index: Index) -> Position {
        Position::new(self.id, index)
    }
    fn node(&self, position: Position) -> Result<&Node<E>> {
        if !position.belongs_to(self.id) {
            return Err(TreeError::InvalidPosition);
        }
        self.arena
            .get(position.index())
            .ok_or(TreeError::InvalidPosition)
    }
    fn node_mut(&mut self, position: Position) -> Result<&mut Node<E>> {
        if !position.belongs_to(self.id) {
            return Err(TreeError::InvalidPosition);
        }
        self.arena
            .get_mut(position.index())
            .ok_or(TreeError::InvalidPosition)
    }
    /// Fetches a node reached through another node's links.
    fn node_at_mut(&mut self, index: Index) -> &mut Node<E> {
        self.arena
            .get_mut(index)
            .unwrap_or_else(|| corrupted("link points outside of the arena"))
    }
}
impl<E> Tree for PositionalTree<E> {
    type Element = E;
    type Position = Position;

    #[inline]
    fn root(&self) -> Option<Position> {
        self.root.map(|root| self.position(root))
    }
    #[inline]
    fn parent(&self, position: Position) -> Result<Option<Position>> {
        Ok(self.node(position)?.parent.map(|parent| self.position(parent)))
    }
    #[inline]
    fn num_children(&self, position: Position) -> Result<usize> {
        Ok(self.node(position)?.children.len())
    }
    #[inline]
    fn nth_child(&self, position: Position, n: usize) -> Result<Option<Position>> {
        Ok(self
            .node(position)?
            .children
            .get(n)
            .map(|&child| self.position(child)))
    }
    #[inline(always)]
    fn len(&self) -> usize {
        self.arena.len()
    }
    #[inline]
    fn element(&self, position: Position) -> Result<&E> {
        self.node(position).map(|node| &node.value)
    }
}
impl<E> Default for PositionalTree<E> {
    #[inline(always)]
    fn default() -> Self {
        Self::new()
    }
}
/// Clones the whole tree. The clone is a different tree: positions of the original are invalid in it and vice versa.
impl<E: Clone> Clone for PositionalTree<E> {
    fn clone(&self) -> Self {
        Self {
            arena: self.arena.clone(),
            root: self.root,
            id: TreeId::fresh(),
        }
    }
}
impl<'a, E> IntoIterator for &'a PositionalTree<E> {
    type Item = &'a E;
    type IntoIter = Elements<'a, PositionalTree<E>>;
    #[inline(always)]
    fn into_iter(self) -> Self::IntoIter {
        self.elements()
    }
}

#[cfg(test)]
mod tests;
