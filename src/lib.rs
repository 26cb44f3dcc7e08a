//! Implements arena-allocated trees with position-based navigation and interfaces to work with them.
//!
//! # Overview
//! Lignite implements trees using a technique called ["arena-allocated trees"][arena tree blog post], described by Ben Lovy. The nodes live in one backing storage, a [generational arena], and instead of using pointers to link parents and children, indices into the arena are used. Parents do not own their children and children do not point back into their parents' memory, so there are no reference cycles and both upward and downward navigation stay O(1).
//!
//! Nodes are addressed from the outside through [`Position`]s: small `Copy` handles which remember both the node and the tree instance they were handed out by. Every operation which takes a position checks it before touching the tree, so using a position of a deleted node or of a different tree is reported as [`TreeError::InvalidPosition`] rather than silently reading the wrong node. The generational arena makes sure that a slot reused by a later insertion can never revive an old position.
//!
//! # Trees
//! - [`PositionalTree`] — a general tree, one which doesn't impose any restrictions on the number of child nodes that a node can have. Deleting an inner node splices its children into its parent.
//! - [`BinaryTree`] — a tree which allows at most a left and a right child for every node.
//!
//! Both implement [`Tree`], the trait of navigation primitives. Everything that can be derived from those primitives, such as depth, height and the preorder, postorder and breadth-first traversals, is implemented once in terms of that trait (see the [`traversal`] module).
//!
//! # Example
//! ```rust
//! use lignite::{PositionalTree, Tree};
//!
//! let mut tree = PositionalTree::new();
//! let root = tree.add_root(1)?;
//! let two = tree.add_child(root, 2)?;
//! tree.add_child(two, 4)?;
//! tree.add_child(two, 5)?;
//! tree.add_child(root, 3)?;
//!
//! assert_eq!(tree.elements().copied().collect::<Vec<_>>(), [1, 2, 4, 5, 3]);
//!
//! // Deleting a node hands its children over to its parent, after the ones it already had:
//! assert_eq!(tree.delete(two)?, 2);
//! assert_eq!(tree.len(), 4);
//! let below_root = tree
//!     .children(root)?
//!     .map(|child| tree.element(child).copied())
//!     .collect::<Result<Vec<_>, _>>()?;
//! assert_eq!(below_root, [3, 4, 5]);
//! # Ok::<(), lignite::TreeError>(())
//! ```
//!
//! # Feature flags
//! - `std` (**enabled by default**) — enables the full standard library, disabling `no_std` for the crate. The crate always requires `alloc`.
//! - `positional_tree` (**enabled by default**) — the [`PositionalTree`] type.
//! - `binary_tree` (**enabled by default**) — the [`BinaryTree`] type.
//! - `doc_cfg` — annotates feature-gated items in the documentation. **Requires a nightly compiler.**
//!
//! Every tree instance takes its identity from a global atomic counter, so the crate needs a target with atomic compare-and-swap on pointer-sized integers. Targets without it, such as `thumbv6m-none-eabi`, are not supported.
//!
//! # Logging
//! Structural mutations are reported through the [`log`] facade: insertions, replacements, deletions and attachments at the `trace` level, root promotion, child splicing and subtree grafting at the `debug` level. The crate never installs a logger.
//!
//! [generational arena]: https://docs.rs/generational-arena " "
//! [`log`]: https://docs.rs/log " "
//! [arena tree blog post]: https://dev.to/deciduously/no-more-tears-no-more-knots-arena-allocated-trees-in-rust-44k6 " "

#![warn(
    rust_2018_idioms,
    clippy::cargo,
    clippy::nursery,
    missing_copy_implementations,
    missing_debug_implementations,
    missing_docs,
    unused_qualifications,
    variant_size_differences,
    clippy::cast_lossless,
    clippy::checked_conversions,
    clippy::copy_iterator,
    clippy::explicit_iter_loop,
    clippy::explicit_into_iter_loop,
    clippy::filter_map_next,
    clippy::map_flatten,
    clippy::map_unwrap_or,
    clippy::implicit_saturating_sub,
    clippy::inefficient_to_string,
    clippy::items_after_statements,
    clippy::let_unit_value,
    clippy::macro_use_imports,
    clippy::match_same_arms,
    clippy::match_wildcard_for_single_variants,
    clippy::mut_mut,
    clippy::needless_continue,
    clippy::needless_pass_by_value,
    clippy::option_option,
    clippy::range_plus_one,
    clippy::range_minus_one,
    clippy::redundant_closure_for_method_calls,
    clippy::same_functions_in_if_condition,
    clippy::similar_names,
    clippy::single_match_else,
    clippy::too_many_lines,
    clippy::type_repetition_in_bounds,
    clippy::trivially_copy_pass_by_ref,
    clippy::unnested_or_patterns,
    clippy::unused_self,
    clippy::used_underscore_binding,
    clippy::clone_on_ref_ptr,
    clippy::dbg_macro,
    clippy::get_unwrap,
    clippy::rest_pat_in_fully_bound_structs,
    clippy::unneeded_field_pattern,
    clippy::unwrap_used, // Only .expect() allowed
    clippy::use_debug,
)]
#![deny(
    anonymous_parameters,
    bare_trait_objects,
    unsafe_code,
    clippy::exit,
)]
#![allow(clippy::use_self)]
#![cfg_attr(not(feature = "std"), no_std)]
#![cfg_attr(feature = "doc_cfg", feature(doc_cfg))]

extern crate alloc;

mod position;
pub use position::Position;

mod tree;
pub use tree::Tree;

pub mod traversal;

#[cfg(feature = "positional_tree")]
#[cfg_attr(feature = "doc_cfg", doc(cfg(feature = "positional_tree")))]
pub mod positional_tree;
#[cfg(feature = "positional_tree")]
#[cfg_attr(feature = "doc_cfg", doc(cfg(feature = "positional_tree")))]
pub use positional_tree::PositionalTree;

#[cfg(feature = "binary_tree")]
#[cfg_attr(feature = "doc_cfg", doc(cfg(feature = "binary_tree")))]
pub mod binary_tree;
#[cfg(feature = "binary_tree")]
#[cfg_attr(feature = "doc_cfg", doc(cfg(feature = "binary_tree")))]
pub use binary_tree::BinaryTree;

/// A prelude for using Lignite, containing the most used types for glob-importing.
pub mod prelude {
    #[doc(no_inline)]
    pub use crate::{Position, Tree, TreeError};
    #[cfg(feature = "positional_tree")]
    #[cfg_attr(feature = "doc_cfg", doc(cfg(feature = "positional_tree")))]
    #[doc(no_inline)]
    pub use crate::positional_tree::PositionalTree;
    #[cfg(feature = "binary_tree")]
    #[cfg_attr(feature = "doc_cfg", doc(cfg(feature = "binary_tree")))]
    #[doc(no_inline)]
    pub use crate::binary_tree::BinaryTree;
}

#[cfg(any(feature = "positional_tree", feature = "binary_tree"))]
pub(crate) mod util;

/// The error type returned by fallible tree operations.
///
/// Every operation checks all of its preconditions before mutating anything, so a returned error always means that the tree is exactly as it was before the call.
///
/// There is no variant for attaching trees of mismatching element types: `attach` only accepts trees of the same type as the target, which is checked at compile time.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash, thiserror::Error)]
pub enum TreeError {
    /// The position does not refer to a live node of this tree: it was handed out by another tree, or its node has been deleted or moved out by `attach`.
    #[error("the position does not refer to a live node of this tree")]
    InvalidPosition,
    /// A root was added to a tree which already had one.
    #[error("the tree already has a root node")]
    TreeNotEmpty,
    /// The operation requires a root node, but the tree is empty.
    #[error("the tree is empty")]
    TreeEmpty,
    /// The root was requested to be deleted while having more than one child, which leaves no single node to be promoted into its place.
    #[error("cannot delete a root node which has more than one child")]
    MultipleChildrenRootDeletion,
    /// Subtrees can only be attached to leaf nodes.
    #[error("the node is not a leaf")]
    NotLeaf,
    /// A binary tree node already has a child on the requested side.
    #[error("the node already has a child on that side")]
    ChildExists,
    /// A binary tree node with two children was requested to be deleted, which leaves no single node to be promoted into its place.
    #[error("cannot delete a node which has two children")]
    TwoChildren,
}

/// The result type used by tree operations.
pub type Result<T> = core::result::Result<T, TreeError>;
