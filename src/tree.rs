use core::fmt::Debug;
use crate::{
    traversal::{algorithms, BreadthFirst, Children, Elements, Postorder, Preorder},
    Result,
};

/// Tree-like data structures navigated through positions.
///
/// Implementors only provide the navigation primitives: the root, the parent and the ordered children of a node, the number of nodes and access to a node's element. Every other query and all traversal algorithms are provided in terms of those.
///
/// Every method which receives a position is required to check it and fail with [`TreeError::InvalidPosition`] if the position does not refer to a live node of this tree.
///
/// [`TreeError::InvalidPosition`]: enum.TreeError.html#variant.InvalidPosition " "
pub trait Tree {
    /// The data payload of the nodes.
    type Element;
    /// The handle used to address the tree's nodes.
    type Position: Copy + Debug + Eq;

    /// Returns the position of the root node, or `None` if the tree is empty.
    fn root(&self) -> Option<Self::Position>;
    /// Returns the position of the parent of the node, or `None` if it's the root node.
    fn parent(&self, position: Self::Position) -> Result<Option<Self::Position>>;
    /// Returns the number of children of the node.
    fn num_children(&self, position: Self::Position) -> Result<usize>;
    /// Returns the position of the `n`-th child of the node in child order, or `None` if there are `n` or fewer children.
    fn nth_child(&self, position: Self::Position, n: usize) -> Result<Option<Self::Position>>;
    /// Returns the total number of nodes in the tree.
    fn len(&self) -> usize;
    /// Returns a reference to the element stored in the node.
    fn element(&self, position: Self::Position) -> Result<&Self::Element>;

    /// Returns `true` if the tree has no nodes, `false` otherwise.
    #[inline]
    fn is_empty(&self) -> bool {
        self.len() == 0
    }
    /// Returns `true` if the node is the root node, `false` otherwise.
    #[inline]
    fn is_root(&self, position: Self::Position) -> Result<bool> {
        self.parent(position).map(|parent| parent.is_none())
    }
    /// Returns `true` if the node is a *leaf*, i.e. does not have child nodes; `false` otherwise.
    #[inline]
    fn is_leaf(&self, position: Self::Position) -> Result<bool> {
        self.num_children(position).map(|num| num == 0)
    }
    /// Returns an iterator over the positions of the children of the node, in child order.
    #[inline]
    fn children(&self, position: Self::Position) -> Result<Children<'_, Self>> {
        Children::new(self, position)
    }
    /// Returns the number of levels separating the node from the root. The root itself has depth 0.
    ///
    /// Runs in time linear in the depth of the node.
    #[inline]
    fn depth(&self, position: Self::Position) -> Result<usize> {
        algorithms::depth(self, position)
    }
    /// Returns the height of the whole tree, i.e. the height of its root.
    ///
    /// # Errors
    /// Fails with `TreeEmpty` if the tree has no root, since the height of an empty tree is not defined.
    #[inline]
    fn height(&self) -> Result<usize> {
        algorithms::height(self)
    }
    /// Returns the height of the subtree rooted at the node: 0 for a leaf, otherwise one more than the greatest height among its children.
    ///
    /// Runs in time linear in the size of the subtree.
    #[inline]
    fn height_of(&self, position: Self::Position) -> Result<usize> {
        algorithms::height_of(self, position)
    }
    /// Returns an iterator over the positions of the tree in *preorder*: every node is visited before its children, children in child order.
    #[inline]
    fn preorder(&self) -> Preorder<'_, Self> {
        Preorder::new(self, self.root())
    }
    /// Returns a preorder iterator over the subtree rooted at the node.
    #[inline]
    fn preorder_from(&self, position: Self::Position) -> Result<Preorder<'_, Self>> {
        self.num_children(position)?;
        Ok(Preorder::new(self, Some(position)))
    }
    /// Returns an iterator over the positions of the tree in *postorder*: every node is visited after its children, children in child order.
    #[inline]
    fn postorder(&self) -> Postorder<'_, Self> {
        Postorder::new(self, self.root())
    }
    /// Returns a postorder iterator over the subtree rooted at the node.
    #[inline]
    fn postorder_from(&self, position: Self::Position) -> Result<Postorder<'_, Self>> {
        self.num_children(position)?;
        Ok(Postorder::new(self, Some(position)))
    }
    /// Returns an iterator over the positions of the tree in *breadth-first* order: the root, then all nodes of depth 1 in child order, then all nodes of depth 2 and so on.
    #[inline]
    fn breadth_first(&self) -> BreadthFirst<'_, Self> {
        BreadthFirst::new(self, self.root())
    }
    /// Returns a breadth-first iterator over the subtree rooted at the node.
    #[inline]
    fn breadth_first_from(&self, position: Self::Position) -> Result<BreadthFirst<'_, Self>> {
        self.num_children(position)?;
        Ok(BreadthFirst::new(self, Some(position)))
    }
    /// Returns an iterator over all positions of the tree. Same as [`preorder`].
    ///
    /// [`preorder`]: #method.preorder " "
    #[inline(always)]
    fn positions(&self) -> Preorder<'_, Self> {
        self.preorder()
    }
    /// Returns an iterator over references to all elements of the tree, in the order of [`positions`].
    ///
    /// [`positions`]: #method.positions " "
    #[inline]
    fn elements(&self) -> Elements<'_, Self> {
        Elements::new(self, self.positions())
    }
}
