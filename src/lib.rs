//! This crate exposes a self-balancing Binary Search Tree (an AVL tree)
//! storing unique, ordered keys.
//!
//! ## AVL Tree
//!
//! A Binary Search Tree is defined recursively using the notion of a `Node`.
//! Each `Node` stores a key and may have a left and a right child. The ordering
//! invariants of a BST are:
//!
//! 1. For every `Node`, all the `Node`s in its left subtree have a key less
//!    than its own key.
//! 2. For every `Node`, all the `Node`s in its right subtree have a key greater
//!    than its own key.
//!
//! An AVL tree adds a balance invariant on top of those: for every `Node`, the
//! heights of its left and right subtrees differ by at most one. The tree
//! restores that invariant after every insertion and deletion using constant
//! time "rotations" along the path that was modified. This keeps the height of
//! the tree at `O(lg N)` so lookups, insertions and deletions all take
//! `O(lg N)`.
//!
//! Trees holding a known, sorted set of keys can also be built directly in
//! `O(N)` (see [`Tree::from_sorted`] and [`Tree::from_inclusive_range`]).
//!
//! # Examples
//!
//! ```
//! use avl::{Traversal, Tree};
//!
//! let mut tree = Tree::from_inclusive_range(1, 7).unwrap();
//! assert_eq!(tree.traverse(Traversal::PreOrder), [&4, &2, &1, &3, &6, &5, &7]);
//!
//! tree.delete(&4);
//! assert!(!tree.contains(&4));
//! assert_eq!(tree.traverse(Traversal::InOrder), [&1, &2, &3, &5, &6, &7]);
//! ```

#![deny(missing_docs, clippy::clone_on_ref_ptr)]

mod build;
mod error;
mod node;
mod observer;
#[cfg(test)]
mod test;
mod traversal;
mod tree;

pub use build::BuildStrategy;
pub use error::InvalidArgument;
pub use observer::{Direction, LogRotationKeys, LogRotations, RotationObserver};
pub use traversal::Traversal;
pub use tree::Tree;
