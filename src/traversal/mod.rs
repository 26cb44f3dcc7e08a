//! Everything related to traversing trees in general.
//!
//! The module is home to the following items:
//! - [`Children`] — an iterator over the children of a single node, used by all of the algorithms below
//! - [`Preorder`], [`Postorder`] and [`BreadthFirst`] — *lazy iterators over the positions of a tree*, returned by the corresponding methods of [`Tree`]
//! - [`Elements`] — an iterator mapping positions to the elements stored in them
//! - Implementations of ubiquitous algorithms for trees (see the [`algorithms`] module for more)
//!
//! All iterators here only rely on the navigation primitives of [`Tree`], which is why they work for every tree type. They keep their work list (a stack for depth-first orders, a queue for breadth-first) on the heap instead of recursing, so deep trees do not exhaust the call stack. Every call to a traversal method returns a fresh iterator; since the iterators borrow the tree, it cannot be modified while a traversal is in progress.
//!
//! # Example
//! ```rust
//! use lignite::{PositionalTree, Tree};
//!
//! let mut tree = PositionalTree::new();
//! let r = tree.add_root('R')?;
//! let a = tree.add_child(r, 'A')?;
//! tree.add_child(a, 'C')?;
//! tree.add_child(r, 'B')?;
//!
//! let spell = |order: &mut dyn Iterator<Item = lignite::Position>| {
//!     order.map(|position| *tree.element(position).unwrap()).collect::<String>()
//! };
//! assert_eq!(spell(&mut tree.preorder()), "RACB");
//! assert_eq!(spell(&mut tree.postorder()), "CABR");
//! assert_eq!(spell(&mut tree.breadth_first()), "RABC");
//! # Ok::<(), lignite::TreeError>(())
//! ```
//!
//! [`algorithms`]: algorithms/index.html " "
//! [`Tree`]: ../trait.Tree.html " "
//! [`Children`]: struct.Children.html " "
//! [`Preorder`]: struct.Preorder.html " "
//! [`Postorder`]: struct.Postorder.html " "
//! [`BreadthFirst`]: struct.BreadthFirst.html " "
//! [`Elements`]: struct.Elements.html " "

pub mod algorithms;

use alloc::{collections::VecDeque, vec::Vec};
use core::{
    fmt::{self, Debug, Formatter},
    iter::FusedIterator,
};
use crate::{Result, Tree};

/// An iterator over the positions of the children of a node, in child order.
///
/// Created by [`Tree::children`].
///
/// [`Tree::children`]: ../trait.Tree.html#method.children " "
pub struct Children<'a, T: Tree + ?Sized> {
    tree: &'a T,
    parent: T::Position,
    front: usize,
    back: usize,
}
impl<'a, T: Tree + ?Sized> Children<'a, T> {
    /// Creates an iterator over the children of the specified node.
    ///
    /// # Errors
    /// Fails with `InvalidPosition` if the position does not refer to a live node of the tree.
    pub fn new(tree: &'a T, parent: T::Position) -> Result<Self> {
        let back = tree.num_children(parent)?;
        Ok(Self {
            tree,
            parent,
            front: 0,
            back,
        })
    }
    /// Children of a node which the traversal has already reached through the tree itself.
    fn of_reached(tree: &'a T, parent: T::Position) -> Self {
        // A reached position is live for as long as the tree is borrowed
        Self::new(tree, parent).unwrap_or(Self {
            tree,
            parent,
            front: 0,
            back: 0,
        })
    }
}
impl<T: Tree + ?Sized> Iterator for Children<'_, T> {
    type Item = T::Position;
    fn next(&mut self) -> Option<Self::Item> {
        if self.front == self.back {
            return None;
        }
        let child = self.tree.nth_child(self.parent, self.front).ok().flatten();
        self.front += 1;
        child
    }
    fn size_hint(&self) -> (usize, Option<usize>) {
        let remaining = self.back - self.front;
        (remaining, Some(remaining))
    }
}
impl<T: Tree + ?Sized> DoubleEndedIterator for Children<'_, T> {
    fn next_back(&mut self) -> Option<Self::Item> {
        if self.front == self.back {
            return None;
        }
        self.back -= 1;
        self.tree.nth_child(self.parent, self.back).ok().flatten()
    }
}
impl<T: Tree + ?Sized> ExactSizeIterator for Children<'_, T> {}
impl<T: Tree + ?Sized> FusedIterator for Children<'_, T> {}
impl<T: Tree + ?Sized> Clone for Children<'_, T> {
    fn clone(&self) -> Self {
        Self {
            tree: self.tree,
            parent: self.parent,
            front: self.front,
            back: self.back,
        }
    }
}
impl<T: Tree + ?Sized> Debug for Children<'_, T> {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        f.debug_struct("Children")
            .field("parent", &self.parent)
            .field("front", &self.front)
            .field("back", &self.back)
            .finish()
    }
}

/// A preorder iterator over the positions of a tree.
///
/// Created by [`Tree::preorder`] and [`Tree::preorder_from`].
///
/// [`Tree::preorder`]: ../trait.Tree.html#method.preorder " "
/// [`Tree::preorder_from`]: ../trait.Tree.html#method.preorder_from " "
pub struct Preorder<'a, T: Tree + ?Sized> {
    tree: &'a T,
    stack: Vec<T::Position>,
}
impl<'a, T: Tree + ?Sized> Preorder<'a, T> {
    /// Creates a preorder iterator over the subtree rooted at `start`, or an empty iterator if `start` is `None`.
    ///
    /// The starting position is not checked; prefer [`Tree::preorder_from`] if it came from outside of the tree.
    ///
    /// [`Tree::preorder_from`]: ../trait.Tree.html#method.preorder_from " "
    pub fn new(tree: &'a T, start: Option<T::Position>) -> Self {
        Self {
            tree,
            stack: start.into_iter().collect(),
        }
    }
}
impl<T: Tree + ?Sized> Iterator for Preorder<'_, T> {
    type Item = T::Position;
    fn next(&mut self) -> Option<Self::Item> {
        let current = self.stack.pop()?;
        // Reversed so that the first child ends up on top
        self.stack
            .extend(Children::of_reached(self.tree, current).rev());
        Some(current)
    }
    fn size_hint(&self) -> (usize, Option<usize>) {
        (self.stack.len(), Some(self.tree.len()))
    }
}
impl<T: Tree + ?Sized> FusedIterator for Preorder<'_, T> {}
impl<T: Tree + ?Sized> Debug for Preorder<'_, T> {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        f.debug_struct("Preorder")
            .field("stack", &self.stack)
            .finish()
    }
}

/// A postorder iterator over the positions of a tree.
///
/// Created by [`Tree::postorder`] and [`Tree::postorder_from`].
///
/// [`Tree::postorder`]: ../trait.Tree.html#method.postorder " "
/// [`Tree::postorder_from`]: ../trait.Tree.html#method.postorder_from " "
pub struct Postorder<'a, T: Tree + ?Sized> {
    tree: &'a T,
    /// Positions along with whether their children have already been put on the stack.
    stack: Vec<(T::Position, bool)>,
}
impl<'a, T: Tree + ?Sized> Postorder<'a, T> {
    /// Creates a postorder iterator over the subtree rooted at `start`, or an empty iterator if `start` is `None`.
    ///
    /// The starting position is not checked; prefer [`Tree::postorder_from`] if it came from outside of the tree.
    ///
    /// [`Tree::postorder_from`]: ../trait.Tree.html#method.postorder_from " "
    pub fn new(tree: &'a T, start: Option<T::Position>) -> Self {
        Self {
            tree,
            stack: start.into_iter().map(|position| (position, false)).collect(),
        }
    }
}
impl<T: Tree + ?Sized> Iterator for Postorder<'_, T> {
    type Item = T::Position;
    fn next(&mut self) -> Option<Self::Item> {
        while let Some((current, expanded)) = self.stack.pop() {
            if expanded {
                return Some(current);
            }
            self.stack.push((current, true));
            self.stack.extend(
                Children::of_reached(self.tree, current)
                    .rev()
                    .map(|child| (child, false)),
            );
        }
        None
    }
    fn size_hint(&self) -> (usize, Option<usize>) {
        (self.stack.len(), Some(self.tree.len()))
    }
}
impl<T: Tree + ?Sized> FusedIterator for Postorder<'_, T> {}
impl<T: Tree + ?Sized> Debug for Postorder<'_, T> {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        f.debug_struct("Postorder")
            .field("stack", &self.stack)
            .finish()
    }
}

/// A breadth-first (level-order) iterator over the positions of a tree.
///
/// Created by [`Tree::breadth_first`] and [`Tree::breadth_first_from`].
///
/// [`Tree::breadth_first`]: ../trait.Tree.html#method.breadth_first " "
/// [`Tree::breadth_first_from`]: ../trait.Tree.html#method.breadth_first_from " "
pub struct BreadthFirst<'a, T: Tree + ?Sized> {
    tree: &'a T,
    fringe: VecDeque<T::Position>,
}
impl<'a, T: Tree + ?Sized> BreadthFirst<'a, T> {
    /// Creates a breadth-first iterator over the subtree rooted at `start`, or an empty iterator if `start` is `None`.
    ///
    /// The starting position is not checked; prefer [`Tree::breadth_first_from`] if it came from outside of the tree.
    ///
    /// [`Tree::breadth_first_from`]: ../trait.Tree.html#method.breadth_first_from " "
    pub fn new(tree: &'a T, start: Option<T::Position>) -> Self {
        Self {
            tree,
            fringe: start.into_iter().collect(),
        }
    }
}
impl<T: Tree + ?Sized> Iterator for BreadthFirst<'_, T> {
    type Item = T::Position;
    fn next(&mut self) -> Option<Self::Item> {
        let current = self.fringe.pop_front()?;
        self.fringe
            .extend(Children::of_reached(self.tree, current));
        Some(current)
    }
    fn size_hint(&self) -> (usize, Option<usize>) {
        (self.fringe.len(), Some(self.tree.len()))
    }
}
impl<T: Tree + ?Sized> FusedIterator for BreadthFirst<'_, T> {}
impl<T: Tree + ?Sized> Debug for BreadthFirst<'_, T> {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        f.debug_struct("BreadthFirst")
            .field("fringe", &self.fringe)
            .finish()
    }
}

/// An iterator over references to the elements of a tree, visiting the positions produced by another iterator.
///
/// Created by [`Tree::elements`].
///
/// [`Tree::elements`]: ../trait.Tree.html#method.elements " "
pub struct Elements<'a, T: Tree + ?Sized, I = Preorder<'a, T>> {
    tree: &'a T,
    positions: I,
}
impl<'a, T, I> Elements<'a, T, I>
where
    T: Tree + ?Sized,
    I: Iterator<Item = T::Position>,
{
    /// Wraps an iterator over positions of the tree into an iterator over the elements stored in them.
    pub fn new(tree: &'a T, positions: I) -> Self {
        Self { tree, positions }
    }
}
impl<'a, T, I> Iterator for Elements<'a, T, I>
where
    T: Tree + ?Sized,
    I: Iterator<Item = T::Position>,
{
    type Item = &'a T::Element;
    fn next(&mut self) -> Option<Self::Item> {
        let tree = self.tree;
        self.positions
            .by_ref()
            .find_map(|position| tree.element(position).ok())
    }
    fn size_hint(&self) -> (usize, Option<usize>) {
        self.positions.size_hint()
    }
}
impl<'a, T, I> FusedIterator for Elements<'a, T, I>
where
    T: Tree + ?Sized,
    I: FusedIterator<Item = T::Position>,
{
}
impl<T, I> Debug for Elements<'_, T, I>
where
    T: Tree + ?Sized,
    I: Debug,
{
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        f.debug_struct("Elements")
            .field("positions", &self.positions)
            .finish()
    }
}
