use super::*;
use alloc::vec::Vec;
use rstest::rstest;

/// Root 1 with children 2 and 3, where 2 has children 4 and 5.
fn sample() -> (PositionalTree<i32>, [Position; 5]) {
    let mut tree = PositionalTree::new();
    let one = tree.add_root(1).expect("empty tree");
    let two = tree.add_child(one, 2).expect("live node");
    let four = tree.add_child(two, 4).expect("live node");
    let five = tree.add_child(two, 5).expect("live node");
    let three = tree.add_child(one, 3).expect("live node");
    (tree, [one, two, three, four, five])
}

/// A tree of `len` nodes where every node is the only child of the previous one.
fn chain(len: usize) -> PositionalTree<usize> {
    let mut tree = PositionalTree::new();
    let mut last = None;
    for value in 0..len {
        last = Some(match last {
            None => tree.add_root(value),
            Some(parent) => tree.add_child(parent, value),
        }
        .expect("valid insertion"));
    }
    tree
}

fn values<T: Copy>(tree: &PositionalTree<T>, order: impl Iterator<Item = Position>) -> Vec<T> {
    order
        .map(|position| *tree.element(position).expect("traversals yield live positions"))
        .collect()
}

#[test]
fn empty_tree() {
    let tree = PositionalTree::<i32>::new();
    assert!(tree.is_empty());
    assert_eq!(tree.len(), 0);
    assert_eq!(tree.root(), None);
    assert_eq!(tree.height(), Err(TreeError::TreeEmpty));
    assert_eq!(tree.preorder().count(), 0);
    assert_eq!(tree.postorder().count(), 0);
    assert_eq!(tree.breadth_first().count(), 0);
    assert_eq!(tree.elements().count(), 0);
}

#[test]
fn root_insertion() {
    let mut tree = PositionalTree::new();
    let root = tree.add_root("root").expect("empty tree");
    assert_eq!(tree.root(), Some(root));
    assert_eq!(tree.is_root(root), Ok(true));
    assert_eq!(tree.is_leaf(root), Ok(true));
    assert_eq!(tree.parent(root), Ok(None));
    assert_eq!(tree.len(), 1);

    assert_eq!(tree.add_root("another"), Err(TreeError::TreeNotEmpty));
    assert_eq!(tree.len(), 1);
    assert_eq!(tree.element(root), Ok(&"root"));
}

#[test]
fn child_insertion_needs_a_root() {
    let mut other = PositionalTree::new();
    let foreign = other.add_root(0).expect("empty tree");

    let mut tree = PositionalTree::new();
    assert_eq!(tree.add_child(foreign, 1), Err(TreeError::TreeEmpty));
    assert!(tree.is_empty());
}

#[test]
fn foreign_positions_are_rejected() {
    let (mut tree, _) = sample();
    let mut other = PositionalTree::new();
    let foreign = other.add_root(10).expect("empty tree");

    assert_eq!(tree.parent(foreign), Err(TreeError::InvalidPosition));
    assert_eq!(tree.num_children(foreign), Err(TreeError::InvalidPosition));
    assert_eq!(tree.element(foreign), Err(TreeError::InvalidPosition));
    assert_eq!(tree.add_child(foreign, 11), Err(TreeError::InvalidPosition));
    assert_eq!(tree.replace(foreign, 12), Err(TreeError::InvalidPosition));
    assert_eq!(tree.delete(foreign), Err(TreeError::InvalidPosition));
    assert!(tree.children(foreign).is_err());
    assert!(!tree.contains(foreign));
    assert_eq!(tree.len(), 5);
}

#[test]
fn navigation() {
    let (tree, [one, two, three, four, five]) = sample();
    assert_eq!(tree.len(), 5);
    assert_eq!(tree.root(), Some(one));
    assert_eq!(tree.num_children(one), Ok(2));
    assert_eq!(tree.children(one).expect("live node").collect::<Vec<_>>(), [two, three]);
    assert_eq!(tree.children(two).expect("live node").collect::<Vec<_>>(), [four, five]);
    assert_eq!(tree.nth_child(two, 2), Ok(None));
    assert_eq!(tree.is_leaf(three), Ok(true));
    assert_eq!(tree.is_leaf(two), Ok(false));
    assert_eq!(tree.is_root(four), Ok(false));

    for position in tree.positions().filter(|&position| position != one) {
        let parent = tree
            .parent(position)
            .expect("live node")
            .expect("only the root has no parent");
        let occurrences = tree
            .children(parent)
            .expect("live node")
            .filter(|&child| child == position)
            .count();
        assert_eq!(occurrences, 1);
    }
}

#[test]
fn traversal_orders() {
    let mut tree = PositionalTree::new();
    let r = tree.add_root('R').expect("empty tree");
    let a = tree.add_child(r, 'A').expect("live node");
    tree.add_child(a, 'C').expect("live node");
    tree.add_child(r, 'B').expect("live node");

    assert_eq!(values(&tree, tree.preorder()), ['R', 'A', 'C', 'B']);
    assert_eq!(values(&tree, tree.postorder()), ['C', 'A', 'B', 'R']);
    assert_eq!(values(&tree, tree.breadth_first()), ['R', 'A', 'B', 'C']);
    assert_eq!(tree.positions().collect::<Vec<_>>(), tree.preorder().collect::<Vec<_>>());
    // Every call starts over
    assert_eq!(tree.preorder().count(), 4);
    assert_eq!(tree.preorder().count(), 4);

    assert_eq!(values(&tree, tree.preorder_from(a).expect("live node")), ['A', 'C']);
    assert_eq!(values(&tree, tree.postorder_from(a).expect("live node")), ['C', 'A']);
}

#[test]
fn depth_and_height() {
    let (tree, [one, two, three, four, _]) = sample();
    assert_eq!(tree.height(), Ok(2));
    assert_eq!(tree.height_of(two), Ok(1));
    assert_eq!(tree.height_of(three), Ok(0));
    assert_eq!(tree.depth(one), Ok(0));
    assert_eq!(tree.depth(four), Ok(2));

    let tree = chain(4);
    let deepest = tree.preorder().last().expect("non-empty tree");
    assert_eq!(tree.depth(deepest), Ok(3));
    assert_eq!(tree.height(), Ok(3));
}

#[test]
fn deep_trees_do_not_recurse() {
    let tree = chain(100_000);
    assert_eq!(tree.preorder().count(), 100_000);
    assert_eq!(tree.postorder().count(), 100_000);
    assert_eq!(tree.height(), Ok(99_999));
    let deepest = tree.breadth_first().last().expect("non-empty tree");
    assert_eq!(tree.depth(deepest), Ok(99_999));
}

#[test]
fn replacing_elements() {
    let (mut tree, [_, two, ..]) = sample();
    assert_eq!(tree.replace(two, 20), Ok(2));
    *tree.element_mut(two).expect("live node") += 2;
    assert_eq!(tree.element(two), Ok(&22));
    assert_eq!(values(&tree, tree.preorder()), [1, 22, 4, 5, 3]);
}

#[test]
fn deletion_splices_children_into_parent() {
    let (mut tree, [one, two, three, four, five]) = sample();
    assert_eq!(values(&tree, tree.preorder()), [1, 2, 4, 5, 3]);

    assert_eq!(tree.delete(two), Ok(2));
    assert_eq!(tree.len(), 4);
    assert_eq!(
        tree.children(one).expect("live node").collect::<Vec<_>>(),
        [three, four, five],
    );
    assert_eq!(values(&tree, tree.children(one).expect("live node")), [3, 4, 5]);
    assert_eq!(tree.parent(four), Ok(Some(one)));
    assert_eq!(tree.parent(five), Ok(Some(one)));
    assert_eq!(tree.element(two), Err(TreeError::InvalidPosition));
}

#[test]
fn spliced_children_go_after_existing_siblings() {
    let mut tree = PositionalTree::new();
    let root = tree.add_root('r').expect("empty tree");
    let first = tree.add_child(root, 'a').expect("live node");
    tree.add_child(root, 'b').expect("live node");
    tree.add_child(first, 'x').expect("live node");
    tree.add_child(first, 'y').expect("live node");
    tree.add_child(root, 'c').expect("live node");

    tree.delete(first).expect("live node");
    assert_eq!(values(&tree, tree.children(root).expect("live node")), ['b', 'c', 'x', 'y']);
}

#[test]
fn deleting_a_leaf() {
    let (mut tree, [_, two, _, four, five]) = sample();
    assert_eq!(tree.delete(four), Ok(4));
    assert_eq!(tree.len(), 4);
    assert_eq!(tree.children(two).expect("live node").collect::<Vec<_>>(), [five]);
}

#[test]
fn deleting_the_root() {
    let mut tree = PositionalTree::new();
    let root = tree.add_root(1).expect("empty tree");
    let child = tree.add_child(root, 2).expect("live node");
    let grandchild = tree.add_child(child, 3).expect("live node");

    assert_eq!(tree.delete(root), Ok(1));
    assert_eq!(tree.root(), Some(child));
    assert_eq!(tree.parent(child), Ok(None));
    assert_eq!(tree.is_root(child), Ok(true));
    assert_eq!(tree.depth(grandchild), Ok(1));

    tree.delete(grandchild).expect("live node");
    assert_eq!(tree.delete(child), Ok(2));
    assert!(tree.is_empty());
    assert_eq!(tree.root(), None);

    // The tree is reusable once emptied
    let new_root = tree.add_root(7).expect("empty tree");
    assert_eq!(tree.root(), Some(new_root));
}

#[test]
fn deleting_a_root_with_multiple_children_fails() {
    let (mut tree, [one, ..]) = sample();
    let before = tree.preorder().collect::<Vec<_>>();
    assert_eq!(tree.delete(one), Err(TreeError::MultipleChildrenRootDeletion));
    assert_eq!(tree.len(), 5);
    assert_eq!(tree.root(), Some(one));
    assert_eq!(tree.preorder().collect::<Vec<_>>(), before);
}

#[test]
fn reused_slots_do_not_revive_positions() {
    let (mut tree, [_, two, _, four, _]) = sample();
    tree.delete(four).expect("live node");
    let replacement = tree.add_child(two, 40).expect("live node");
    assert_ne!(replacement, four);
    assert!(!tree.contains(four));
    assert_eq!(tree.element(four), Err(TreeError::InvalidPosition));
    assert_eq!(tree.element(replacement), Ok(&40));
}

#[test]
fn size_tracks_insertions_and_deletions() {
    let mut tree = PositionalTree::new();
    let root = tree.add_root(0).expect("empty tree");
    let mut expected = 1;
    let mut live = Vec::new();
    for value in 1..=50 {
        let parent = live.get(value % 7).copied().unwrap_or(root);
        live.push(tree.add_child(parent, value).expect("live node"));
        expected += 1;
        if value % 3 == 0 {
            let victim = live.remove(value % live.len());
            tree.delete(victim).expect("live node");
            expected -= 1;
        }
        assert_eq!(tree.len(), expected);
        assert_eq!(tree.preorder().count(), expected);
    }
}

#[rstest]
#[case(0, 0)]
#[case(3, 0)]
#[case(0, 2)]
#[case(4, 5)]
fn attach_moves_whole_trees(#[case] first_len: usize, #[case] second_len: usize) {
    let mut first = chain(first_len);
    let mut second = chain(second_len);
    let mut tree = PositionalTree::new();
    let target = tree.add_root(usize::MAX).expect("empty tree");
    let first_root = first.root();

    let grafted = tree
        .attach(target, &mut first, &mut second)
        .expect("target is a leaf");

    let expected_children = usize::from(first_len > 0) + usize::from(second_len > 0);
    assert_eq!(grafted.len(), expected_children);
    assert_eq!(tree.num_children(target), Ok(expected_children));
    assert_eq!(tree.len(), 1 + first_len + second_len);
    assert!(first.is_empty() && second.is_empty());
    assert_eq!(first.root(), None);
    if let Some(old_root) = first_root {
        assert_eq!(first.element(old_root), Err(TreeError::InvalidPosition));
        assert_eq!(tree.element(old_root), Err(TreeError::InvalidPosition));
    }
    assert_eq!(
        tree.children(target).expect("live node").collect::<Vec<_>>(),
        grafted.as_slice(),
    );
    assert_eq!(tree.height(), Ok(first_len.max(second_len)));
}

#[test]
fn attach_keeps_child_order() {
    let (mut first, _) = sample();
    let mut second = PositionalTree::new();
    second.add_root(9).expect("empty tree");

    let mut tree = PositionalTree::new();
    let root = tree.add_root(0).expect("empty tree");
    tree.attach(root, &mut first, &mut second).expect("root is a leaf");
    assert_eq!(values(&tree, tree.preorder()), [0, 1, 2, 4, 5, 3, 9]);
    assert_eq!(values(&tree, tree.breadth_first()), [0, 1, 9, 2, 3, 4, 5]);
}

#[test]
fn attach_needs_a_leaf() {
    let (mut tree, [_, two, ..]) = sample();
    let (mut first, _) = sample();
    let mut second = PositionalTree::new();
    second.add_root(6).expect("empty tree");
    assert_eq!(
        tree.attach(two, &mut first, &mut second),
        Err(TreeError::NotLeaf),
    );
    assert_eq!(first.len(), 5);
    assert_eq!(second.len(), 1);
    assert_eq!(tree.len(), 5);
}

#[test]
fn attach_and_delete_cycles_reuse_freed_slots() {
    let mut tree = PositionalTree::new();
    let root = tree.add_root(usize::MAX).expect("empty tree");
    let leaf = tree.add_child(root, 0).expect("live node");
    let mut empty = PositionalTree::new();
    let mut peak = 0;
    for _ in 0..100 {
        let mut grafted = chain(100);
        tree.attach(leaf, &mut grafted, &mut empty).expect("leaf stays a leaf");
        assert_eq!(tree.len(), 102);
        // Each deletion splices the only grandchild into `leaf`, which keeps at most one child
        while let Some(child) = tree.nth_child(leaf, 0).expect("live node") {
            tree.delete(child).expect("live node");
        }
        assert_eq!(tree.len(), 2);
        if peak == 0 {
            peak = tree.capacity();
        }
        assert_eq!(tree.capacity(), peak);
    }
    assert!(peak < 200);
}

#[test]
fn reserve_counts_freed_slots() {
    let (mut tree, [_, two, ..]) = sample();
    tree.delete(two).expect("live node");
    let capacity = tree.capacity();
    tree.reserve(capacity - tree.len());
    assert_eq!(tree.capacity(), capacity);
    tree.reserve(capacity - tree.len() + 3);
    assert_eq!(tree.capacity(), capacity + 3);
}

#[test]
fn clones_are_separate_trees() {
    let (tree, [one, two, ..]) = sample();
    let mut copy = tree.clone();
    assert_eq!(copy.len(), tree.len());
    assert_eq!(values(&copy, copy.preorder()), values(&tree, tree.preorder()));
    assert_eq!(copy.element(two), Err(TreeError::InvalidPosition));

    let copy_root = copy.root().expect("non-empty tree");
    assert_ne!(copy_root, one);
    copy.replace(copy_root, 100).expect("live node");
    assert_eq!(tree.element(one), Ok(&1));
}

#[test]
fn iterating_by_reference() {
    let (tree, _) = sample();
    let mut total = 0;
    for value in &tree {
        total += value;
    }
    assert_eq!(total, 15);
    assert_eq!(tree.elements().copied().collect::<Vec<_>>(), [1, 2, 4, 5, 3]);
}
