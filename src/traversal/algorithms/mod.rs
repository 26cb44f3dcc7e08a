//! Ubiquitous algorithms for trees.
//!
//! This includes:
//! - Depth of a node
//! - Height of a node or of the whole tree
//!
//! All of them are generic over [`Tree`] and are also available as provided methods of that trait.
//!
//! [`Tree`]: ../../trait.Tree.html " "

mod measure;
pub use measure::*;
