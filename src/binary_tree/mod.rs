//! Binary trees, trees where every node has at most a left and a right child.
//!
//! A binary tree is navigated through [`Position`]s just like a [`PositionalTree`], and implements [`Tree`] as well, with the left child always coming before the right one. On top of that, it knows which side each child hangs on: [`left`], [`right`] and [`sibling`] navigate by sides, and [`inorder`] visits the nodes in symmetric order.
//!
//! # Deletion
//! Deleting a node never deletes its descendants. A node with one child is replaced by that child, which takes over its side of the parent (or becomes the root), and a leaf simply disappears. A node with two children cannot be deleted, since there would be no single node to take its place.
//!
//! # Example
//! ```rust
//! use lignite::{BinaryTree, Tree};
//!
//! // An expression tree for (3 + 4) * 5:
//! let mut tree = BinaryTree::new();
//! let times = tree.add_root("*")?;
//! let plus = tree.add_left(times, "+")?;
//! tree.add_left(plus, "3")?;
//! tree.add_right(plus, "4")?;
//! let five = tree.add_right(times, "5")?;
//!
//! let infix = tree.inorder().map(|position| tree.element(position).copied()).collect::<Result<String, _>>()?;
//! assert_eq!(infix, "3+4*5");
//! let postfix = tree.postorder().map(|position| tree.element(position).copied()).collect::<Result<String, _>>()?;
//! assert_eq!(postfix, "34+5*");
//! assert_eq!(tree.sibling(five)?, Some(plus));
//! # Ok::<(), lignite::TreeError>(())
//! ```
//!
//! [`Position`]: ../struct.Position.html " "
//! [`PositionalTree`]: ../positional_tree/struct.PositionalTree.html " "
//! [`Tree`]: ../trait.Tree.html " "
//! [`left`]: struct.BinaryTree.html#method.left " "
//! [`right`]: struct.BinaryTree.html#method.right " "
//! [`sibling`]: struct.BinaryTree.html#method.sibling " "
//! [`inorder`]: struct.BinaryTree.html#method.inorder " "

use alloc::vec::Vec;
use core::mem;
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
use node::{Node, Side};

mod inorder;
pub use inorder::Inorder;

/// A binary tree addressed through positions.
///
/// See the [module-level documentation] for more.
///
/// [module-level documentation]: index.html " "
#[derive(Debug)]
pub struct BinaryTree<E> {
    arena: Arena<Node<E>>,
    root: Option<Index>,
    id: TreeId,
}
impl<E> BinaryTree<E> {
    /// Creates an empty binary tree.
    #[inline]
    pub fn new() -> Self {
        Self {
            arena: Arena::new(),
            root: None,
            id: TreeId::fresh(),
        }
    }
    /// Creates an empty binary tree with preallocated space for the specified number of nodes.
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
    /// Returns the position of the left child of the node, or `None` if there's no left child.
    #[inline]
    pub fn left(&self, position: Position) -> Result<Option<Position>> {
        self.child(position, Side::Left)
    }
    /// Returns the position of the right child of the node, or `None` if there's no right child.
    #[inline]
    pub fn right(&self, position: Position) -> Result<Option<Position>> {
        self.child(position, Side::Right)
    }
    /// Returns the position of the other child of the node's parent, or `None` if the node is the root or an only child.
    ///
    /// # Example
    /// ```rust
    /// # use lignite::BinaryTree;
    /// let mut tree = BinaryTree::new();
    /// let root = tree.add_root(0)?;
    /// let left = tree.add_left(root, 1)?;
    /// assert_eq!(tree.sibling(left)?, None);
    /// let right = tree.add_right(root, 2)?;
    /// assert_eq!(tree.sibling(left)?, Some(right));
    /// assert_eq!(tree.sibling(right)?, Some(left));
    /// assert_eq!(tree.sibling(root)?, None);
    /// # Ok::<(), lignite::TreeError>(())
    /// ```
    pub fn sibling(&self, position: Position) -> Result<Option<Position>> {
        let parent = match self.node(position)?.parent {
            Some(parent) => self.node_at(parent),
            None => return Ok(None),
        };
        let side = parent
            .side_of(position.index())
            .unwrap_or_else(|| corrupted("node missing from its parent's child slots"));
        Ok(parent
            .child(side.opposite())
            .map(|sibling| self.position(sibling)))
    }
    /// Returns an iterator over the positions of the tree in *inorder*: the left subtree of every node is visited before it, and the right subtree after it.
    #[inline]
    pub fn inorder(&self) -> Inorder<'_, E> {
        Inorder::new(self, self.root)
    }
    /// Returns an inorder iterator over the subtree rooted at the node.
    ///
    /// # Errors
    /// Fails with `InvalidPosition` if the position does not refer to a live node of this tree.
    #[inline]
    pub fn inorder_from(&self, position: Position) -> Result<Inorder<'_, E>> {
        self.node(position)?;
        Ok(Inorder::new(self, Some(position.index())))
    }

    /// Places the element at the root of the tree, which has to be empty, and returns its position.
    ///
    /// # Errors
    /// Fails with `TreeNotEmpty` if the tree already has a root.
    pub fn add_root(&mut self, value: E) -> Result<Position> {
        if self.root.is_some() {
            return Err(TreeError::TreeNotEmpty);
        }
        let root = self.arena.insert(Node::new(value, None));
        self.root = Some(root);
        trace!("added root {:?}", root);
        Ok(self.position(root))
    }
    /// Creates a left child for the node, storing the element in it, and returns its position.
    ///
    /// # Errors
    /// Will fail in the following scenarios:
    /// - The position does not refer to a live node of this tree (`InvalidPosition`).
    /// - The node already has a left child (`ChildExists`).
    #[inline]
    pub fn add_left(&mut self, position: Position, value: E) -> Result<Position> {
        self.add_child(position, Side::Left, value)
    }
    /// Creates a right child for the node, storing the element in it, and returns its position.
    ///
    /// # Errors
    /// Will fail in the following scenarios:
    /// - The position does not refer to a live node of this tree (`InvalidPosition`).
    /// - The node already has a right child (`ChildExists`).
    #[inline]
    pub fn add_right(&mut self, position: Position, value: E) -> Result<Position> {
        self.add_child(position, Side::Right, value)
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
    /// Deletes the node, replacing it with its only child if it has one, and returns its element.
    ///
    /// The child takes the place of the node on the same side of the node's parent, or becomes the root if the node was the root. The position, and every copy of it, becomes invalid.
    ///
    /// # Errors
    /// Will fail in the following scenarios:
    /// - The position does not refer to a live node of this tree (`InvalidPosition`).
    /// - The node has two children (`TwoChildren`). The tree is left untouched.
    ///
    /// # Example
    /// ```rust
    /// # use lignite::{BinaryTree, Tree, TreeError};
    /// let mut tree = BinaryTree::new();
    /// let root = tree.add_root('a')?;
    /// let b = tree.add_left(root, 'b')?;
    /// let c = tree.add_right(b, 'c')?;
    /// tree.add_right(root, 'd')?;
    ///
    /// assert_eq!(tree.delete(root), Err(TreeError::TwoChildren));
    /// assert_eq!(tree.delete(b)?, 'b');
    /// // `c` took the left slot of the root, even though it used to be a right child:
    /// assert_eq!(tree.left(root)?, Some(c));
    /// assert_eq!(tree.parent(c)?, Some(root));
    /// # Ok::<(), TreeError>(())
    /// ```
    pub fn delete(&mut self, position: Position) -> Result<E> {
        if self.node(position)?.children().len() == 2 {
            return Err(TreeError::TwoChildren);
        }
        let index = position.index();
        let node = self
            .arena
            .remove(index)
            .unwrap_or_else(|| corrupted("checked node vanished from the arena"));
        let heir = node.left.or(node.right);
        if let Some(heir) = heir {
            self.node_at_mut(heir).parent = node.parent;
        }
        match node.parent {
            None => {
                self.root = heir;
                if let Some(heir) = heir {
                    debug!("promoted {:?} to root in place of {:?}", heir, index);
                }
            }
            Some(parent) => {
                let parent_node = self.node_at_mut(parent);
                let side = parent_node
                    .side_of(index)
                    .unwrap_or_else(|| corrupted("node missing from its parent's child slots"));
                *parent_node.child_mut(side) = heir;
                if let Some(heir) = heir {
                    debug!("moved {:?} up into the place of {:?}", heir, index);
                }
            }
        }
        trace!("deleted {:?}", index);
        Ok(node.value)
    }
    /// Attaches the two trees below the leaf node, the root of `left` as its left child and the root of `right` as its right child, and returns the positions they ended up at.
    ///
    /// An empty tree leaves its side empty. Both trees are left empty, since all of their nodes are moved into this tree; positions into them do not carry over. The size of this tree grows by the sum of their sizes.
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
    /// # use lignite::{BinaryTree, Tree};
    /// let mut left = BinaryTree::new();
    /// left.add_root(1)?;
    /// let mut right = BinaryTree::new();
    ///
    /// let mut tree = BinaryTree::new();
    /// let root = tree.add_root(0)?;
    /// let (grafted_left, grafted_right) = tree.attach(root, &mut left, &mut right)?;
    ///
    /// assert!(left.is_empty());
    /// assert_eq!(tree.left(root)?, grafted_left);
    /// assert_eq!(grafted_right, None);
    /// assert_eq!(tree.len(), 2);
    /// # Ok::<(), lignite::TreeError>(())
    /// ```
    pub fn attach(
        &mut self,
        position: Position,
        left: &mut Self,
        right: &mut Self,
    ) -> Result<(Option<Position>, Option<Position>)> {
        if !self.node(position)?.is_leaf() {
            return Err(TreeError::NotLeaf);
        }
        let index = position.index();
        let left = self
            .graft(index, Side::Left, left)
            .map(|root| self.position(root));
        let right = self
            .graft(index, Side::Right, right)
            .map(|root| self.position(root));
        trace!("attached subtrees to {:?}", index);
        Ok((left, right))
    }

    fn child(&self, position: Position, side: Side) -> Result<Option<Position>> {
        Ok(self
            .node(position)?
            .child(side)
            .map(|child| self.position(child)))
    }
    fn add_child(&mut self, position: Position, side: Side, value: E) -> Result<Position> {
        if self.node(position)?.child(side).is_some() {
            return Err(TreeError::ChildExists);
        }
        let parent = position.index();
        let child = self.arena.insert(Node::new(value, Some(parent)));
        *self.node_at_mut(parent).child_mut(side) = Some(child);
        trace!("added {:?} child {:?} to {:?}", side, child, parent);
        Ok(self.position(child))
    }
    /// Moves every node of `source` into this tree, with the root of `source` becoming the child of `parent` on the specified side. Returns the new index of that root, or `None` if `source` was empty.
    fn graft(&mut self, parent: Index, side: Side, source: &mut Self) -> Option<Index> {
        let source_root = source.root.take()?;
        let moved = source.arena.len();
        self.reserve(moved);
        let mut pending = Vec::with_capacity(moved);
        pending.push((source_root, parent, side));
        let mut grafted_root = None;
        while let Some((old, new_parent, side)) = pending.pop() {
            let node = source
                .arena
                .remove(old)
                .unwrap_or_else(|| corrupted("child link points outside of the arena"));
            let new = self.arena.insert(Node::new(node.value, Some(new_parent)));
            *self.node_at_mut(new_parent).child_mut(side) = Some(new);
            grafted_root.get_or_insert(new);
            pending.extend(node.left.map(|child| (child, new, Side::Left)));
            pending.extend(node.right.map(|child| (child, new, Side::Right)));
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
    fn node_at(&self, index: Index) -> &Node<E> {
        self.arena
            .get(index)
            .unwrap_or_else(|| corrupted("link points outside of the arena"))
    }
    fn node_at_mut(&mut self, index: Index) -> &mut Node<E> {
        self.arena
            .get_mut(index)
            .unwrap_or_else(|| corrupted("link points outside of the arena"))
    }
}
impl<E> Tree for BinaryTree<E> {
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
        Ok(self.node(position)?.children().len())
    }
    #[inline]
    fn nth_child(&self, position: Position, n: usize) -> Result<Option<Position>> {
        Ok(self
            .node(position)?
            .children()
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
impl<E> Default for BinaryTree<E> {
    #[inline(always)]
    fn default() -> Self {
        Self::new()
    }
}
/// Clones the whole tree. The clone is a different tree: positions of the original are invalid in it and vice versa.
impl<E: Clone> Clone for BinaryTree<E> {
    fn clone(&self) -> Self {
        Self {
            arena: self.arena.clone(),
            root: self.root,
            id: TreeId::fresh(),
        }
    }
}
impl<'a, E> IntoIterator for &'a BinaryTree<E> {
    type Item = &'a E;
    type IntoIter = Elements<'a, BinaryTree<E>>;
    #[inline(always)]
    fn into_iter(self) -> Self::IntoIter {
        self.elements()
    }
}
