//! The owning handle of an AVL tree.
//!
//! # Examples
//!
//! ```
//! use avl::{Traversal, Tree};
//!
//! let mut tree = Tree::new();
//!
//! // Nothing in here yet.
//! assert!(tree.is_empty());
//! assert!(!tree.contains(&1));
//!
//! tree.add(1);
//! assert!(tree.contains(&1));
//!
//! // Adding a key that is already there does nothing.
//! assert!(!tree.add(1));
//! assert_eq!(tree.len(), 1);
//!
//! // Neither does deleting a key that isn't there.
//! assert!(!tree.delete(&2));
//!
//! assert!(tree.delete(&1));
//! assert!(tree.traverse(Traversal::InOrder).is_empty());
//! ```

use std::borrow::Borrow;
use std::fmt;

use crate::error::InvalidArgument;
use crate::node::{self, height, Link, Placement};
use crate::observer::{LogRotations, RotationObserver};
use crate::traversal::Traversal;

/// A self-balancing Binary Search Tree (specifically, an AVL tree) of unique
/// keys. This can be used for adding, finding, and deleting keys and for
/// visiting them in in-order, pre-order or post-order.
#[derive(Clone)]
pub struct Tree<K> {
    pub(crate) root: Link<K>,
    pub(crate) len: usize,
}

impl<K> Default for Tree<K> {
    fn default() -> Self {
        Self::new()
    }
}

impl<K> fmt::Debug for Tree<K>
where
    K: fmt::Debug,
{
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Tree")
            .field("len", &self.len)
            .field("height", &self.height())
            .field("keys", &self.traverse(Traversal::InOrder))
            .finish()
    }
}

impl<K> Tree<K> {
    /// Generate a new, empty `Tree`.
    pub const fn new() -> Self {
        Self { root: None, len: 0 }
    }

    /// Returns `true` if the tree holds no keys.
    pub fn is_empty(&self) -> bool {
        self.root.is_none()
    }

    /// Returns the number of keys in the tree.
    pub fn len(&self) -> usize {
        self.len
    }

    /// Returns the number of levels in the tree. An empty tree has a height of
    /// 0 and a tree with a single key has a height of 1.
    pub fn height(&self) -> usize {
        height(&self.root)
    }

    /// Returns `true` if the tree holds `key`.
    ///
    /// # Examples
    ///
    /// ```
    /// use avl::Tree;
    ///
    /// let tree: Tree<String> = ["b", "a"].iter().map(|s| s.to_string()).collect();
    ///
    /// assert!(tree.contains("a"));
    /// assert!(!tree.contains("c"));
    /// ```
    pub fn contains<Q>(&self, key: &Q) -> bool
    where
        K: Borrow<Q>,
        Q: Ord + ?Sized,
    {
        node::find(&self.root, key).is_some()
    }

    /// Adds `key` to the tree, rebalancing on the way back up to the root.
    /// Returns `false`, leaving the tree unchanged, if the key was already
    /// present.
    ///
    /// Rotations are reported as `trace` records through [`LogRotations`].
    ///
    /// # Examples
    ///
    /// ```
    /// use avl::Tree;
    ///
    /// let mut tree = Tree::new();
    ///
    /// assert!(tree.add(1));
    /// assert!(!tree.add(1));
    /// assert!(tree.contains(&1));
    /// ```
    pub fn add(&mut self, key: K) -> bool
    where
        K: Ord,
    {
        self.add_observed(key, &mut LogRotations)
    }

    /// Like [`Tree::add`] but reports every rotation to `observer`.
    pub fn add_observed<O>(&mut self, key: K, observer: &mut O) -> bool
    where
        K: Ord,
        O: RotationObserver<K>,
    {
        let (root, placement) = node::insert(self.root.take(), key, observer);
        self.root = Some(root);

        let added = placement != Placement::Duplicate;
        if added {
            self.len += 1;
        }
        added
    }

    /// Adds a key that may be missing, e.g. one parsed from user input.
    ///
    /// # Errors
    ///
    /// [`InvalidArgument::MissingKey`] if `key` is `None`. The tree is left
    /// unchanged.
    ///
    /// # Examples
    ///
    /// ```
    /// use avl::{InvalidArgument, Tree};
    ///
    /// let mut tree = Tree::<i32>::new();
    ///
    /// assert_eq!(tree.try_add("5".parse().ok()), Ok(true));
    /// assert_eq!(
    ///     tree.try_add("five".parse::<i32>().ok()),
    ///     Err(InvalidArgument::MissingKey)
    /// );
    /// assert_eq!(tree.len(), 1);
    /// ```
    pub fn try_add(&mut self, key: Option<K>) -> Result<bool, InvalidArgument>
    where
        K: Ord,
    {
        let key = key.ok_or(InvalidArgument::MissingKey)?;
        Ok(self.add(key))
    }

    /// Deletes `key` from the tree, rebalancing on the way back up to the root.
    /// Returns `false`, leaving the tree unchanged, if the key wasn't present.
    ///
    /// Rotations are reported as `trace` records through [`LogRotations`].
    ///
    /// # Examples
    ///
    /// ```
    /// use avl::Tree;
    ///
    /// let mut tree: Tree<_> = (1..=3).collect();
    ///
    /// assert!(tree.delete(&2));
    /// assert!(!tree.delete(&2));
    /// assert!(!tree.contains(&2));
    /// ```
    pub fn delete<Q>(&mut self, key: &Q) -> bool
    where
        K: Borrow<Q>,
        Q: Ord + ?Sized,
    {
        self.delete_observed(key, &mut LogRotations)
    }

    /// Like [`Tree::delete`] but reports every rotation to `observer`.
    pub fn delete_observed<Q, O>(&mut self, key: &Q, observer: &mut O) -> bool
    where
        K: Borrow<Q>,
        Q: Ord + ?Sized,
        O: RotationObserver<K>,
    {
        let (root, removed) = node::delete(self.root.take(), key, observer);
        self.root = root;

        if removed {
            self.len -= 1;
        }
        removed
    }

    /// Collects references to every key in the given `order`.
    ///
    /// # Examples
    ///
    /// ```
    /// use avl::{Traversal, Tree};
    ///
    /// let tree: Tree<_> = [2, 1, 3].into_iter().collect();
    ///
    /// assert_eq!(tree.traverse(Traversal::InOrder), [&1, &2, &3]);
    /// assert_eq!(tree.traverse(Traversal::PreOrder), [&2, &1, &3]);
    /// assert_eq!(tree.traverse(Traversal::PostOrder), [&1, &3, &2]);
    /// ```
    pub fn traverse(&self, order: Traversal) -> Vec<&K> {
        order.collect(&self.root, self.len)
    }

    /// Panics if any ordering, height or balance invariant is broken or if the
    /// cached length is wrong.
    #[doc(hidden)]
    pub fn assert_invariants(&self)
    where
        K: Ord,
    {
        let len = assert_invariants_at(&self.root, None, None);
        assert_eq!(len, self.len, "cached length is stale");
    }
}

/// Checks the subtree at `link` holds keys strictly between `lower` and
/// `upper` and returns how many it holds.
fn assert_invariants_at<K: Ord>(link: &Link<K>, lower: Option<&K>, upper: Option<&K>) -> usize {
    let Some(node) = link else {
        return 0;
    };

    if let Some(lower) = lower {
        assert!(node.key > *lower, "key is not greater than its ancestors");
    }
    if let Some(upper) = upper {
        assert!(node.key < *upper, "key is not less than its ancestors");
    }

    let left_height = height(&node.left);
    let right_height = height(&node.right);
    assert_eq!(node.height, left_height.max(right_height) + 1);
    assert!(left_height.abs_diff(right_height) <= 1, "node is unbalanced");

    1 + assert_invariants_at(&node.left, lower, Some(&node.key))
        + assert_invariants_at(&node.right, Some(&node.key), upper)
}

impl<K: Ord> Extend<K> for Tree<K> {
    fn extend<I: IntoIterator<Item = K>>(&mut self, keys: I) {
        for key in keys {
            self.add(key);
        }
    }
}

impl<K: Ord> FromIterator<K> for Tree<K> {
    fn from_iter<I: IntoIterator<Item = K>>(keys: I) -> Self {
        let mut tree = Self::new();
        tree.extend(keys);
        tree
    }
}
