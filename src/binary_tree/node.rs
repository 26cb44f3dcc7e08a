use arrayvec::ArrayVec;
use generational_arena::Index;

/// Which of the two child slots of a binary tree node is meant.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub(super) enum Side {
    Left,
    Right,
}
impl Side {
    #[inline]
    pub(super) const fn opposite(self) -> Self {
        match self {
            Self::Left => Self::Right,
            Self::Right => Self::Left,
        }
    }
}

/// A node of a binary tree.
#[derive(Clone, Debug)]
pub(super) struct Node<E> {
    pub(super) value: E,
    pub(super) parent: Option<Index>,
    pub(super) left: Option<Index>,
    pub(super) right: Option<Index>,
}
impl<E> Node<E> {
    #[inline(always)]
    pub(super) const fn new(value: E, parent: Option<Index>) -> Self {
        Self {
            value,
            parent,
            left: None,
            right: None,
        }
    }
    #[inline]
    pub(super) const fn child(&self, side: Side) -> Option<Index> {
        match side {
            Side::Left => self.left,
            Side::Right => self.right,
        }
    }
    #[inline]
    pub(super) fn child_mut(&mut self, side: Side) -> &mut Option<Index> {
        match side {
            Side::Left => &mut self.left,
            Side::Right => &mut self.right,
        }
    }
    /// Returns the side on which the specified node hangs below this one, or `None` if it's not a child of this node.
    #[inline]
    pub(super) fn side_of(&self, child: Index) -> Option<Side> {
        if self.left == Some(child) {
            Some(Side::Left)
        } else if self.right == Some(child) {
            Some(Side::Right)
        } else {
            None
        }
    }
    /// Returns the present children, left one first.
    #[inline]
    pub(super) fn children(&self) -> ArrayVec<[Index; 2]> {
        self.left.into_iter().chain(self.right).collect()
    }
    #[inline]
    pub(super) const fn is_leaf(&self) -> bool {
        self.left.is_none() && self.right.is_none()
    }
}
