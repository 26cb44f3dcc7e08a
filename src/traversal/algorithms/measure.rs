use alloc::collections::VecDeque;
use crate::{traversal::Children, Result, Tree, TreeError};

/// Returns the number of levels separating the node from the root of the tree.
///
/// Walks up the parent links instead of recursing, so the cost is linear in the depth of the node.
///
/// # Errors
/// Fails with `InvalidPosition` if the position does not refer to a live node of the tree.
pub fn depth<T: Tree + ?Sized>(tree: &T, position: T::Position) -> Result<usize> {
    let mut depth = 0;
    let mut current = tree.parent(position)?;
    while let Some(ancestor) = current {
        depth += 1;
        current = tree.parent(ancestor)?;
    }
    Ok(depth)
}

/// Returns the height of the subtree rooted at the node: 0 for a leaf, otherwise one more than the greatest height among its children.
///
/// The subtree is walked level by level, and the height is the deepest level reached.
///
/// # Errors
/// Fails with `InvalidPosition` if the position does not refer to a live node of the tree.
pub fn height_of<T: Tree + ?Sized>(tree: &T, position: T::Position) -> Result<usize> {
    let mut fringe = VecDeque::new();
    fringe.push_back((Children::new(tree, position)?, 1));
    let mut height = 0;
    while let Some((children, level)) = fringe.pop_front() {
        for child in children {
            height = height.max(level);
            fringe.push_back((Children::of_reached(tree, child), level + 1));
        }
    }
    Ok(height)
}

/// Returns the height of the whole tree, i.e. the height of its root.
///
/// # Errors
/// Fails with `TreeEmpty` if the tree has no root.
pub fn height<T: Tree + ?Sized>(tree: &T) -> Result<usize> {
    let root = tree.root().ok_or(TreeError::TreeEmpty)?;
    height_of(tree, root)
}
