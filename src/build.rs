//! Building whole trees out of keys that are already sorted.

use std::ops::RangeInclusive;

use crate::error::InvalidArgument;
use crate::node::{Link, Node};
use crate::tree::Tree;

/// How [`Tree::from_inclusive_range_with`] populates a tree.
///
/// Both strategies produce a valid AVL tree holding the same keys but the
/// shapes of the trees may differ.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Hash)]
pub enum BuildStrategy {
    /// Insert the middle key of the range, then recursively the middle keys of
    /// the lower and upper halves, rebalancing as ordinary insertions do.
    /// `O(N lg N)`.
    Incremental,
    /// Link nodes bottom-up around the middle of each sub-range, computing
    /// heights as the recursion unwinds and never rotating. `O(N)`, and the
    /// result has the minimum possible height.
    #[default]
    Direct,
}

impl<K> Tree<K> {
    /// Builds a tree from keys that are strictly ascending, in `O(N)`.
    ///
    /// # Errors
    ///
    /// [`InvalidArgument::NotAscending`] if any key is not greater than the key
    /// before it.
    ///
    /// # Examples
    ///
    /// ```
    /// use avl::{InvalidArgument, Traversal, Tree};
    ///
    /// let tree = Tree::from_sorted(["a", "b", "c"]).unwrap();
    /// assert_eq!(tree.traverse(Traversal::PreOrder), [&"b", &"a", &"c"]);
    ///
    /// assert_eq!(
    ///     Tree::from_sorted([1, 3, 3]).unwrap_err(),
    ///     InvalidArgument::NotAscending { index: 2 }
    /// );
    /// ```
    pub fn from_sorted<I>(keys: I) -> Result<Self, InvalidArgument>
    where
        I: IntoIterator<Item = K>,
        K: Ord,
    {
        let keys: Vec<K> = keys.into_iter().collect();
        if let Some(index) = keys.windows(2).position(|pair| pair[0] >= pair[1]) {
            return Err(InvalidArgument::NotAscending { index: index + 1 });
        }

        Ok(Self::build_direct(keys))
    }

    /// Like [`Tree::from_sorted`] for input that may have missing elements.
    ///
    /// # Errors
    ///
    /// [`InvalidArgument::MissingElement`] for the first `None` in `keys`,
    /// otherwise whatever [`Tree::from_sorted`] returns.
    pub fn try_from_sorted<I>(keys: I) -> Result<Self, InvalidArgument>
    where
        I: IntoIterator<Item = Option<K>>,
        K: Ord,
    {
        let keys = keys
            .into_iter()
            .enumerate()
            .map(|(index, key)| key.ok_or(InvalidArgument::MissingElement { index }))
            .collect::<Result<Vec<_>, _>>()?;

        Self::from_sorted(keys)
    }

    /// Builds a tree holding every integer from `min` to `max`, inclusive,
    /// using [`BuildStrategy::Direct`].
    ///
    /// # Errors
    ///
    /// [`InvalidArgument::ReversedRange`] if `max < min`.
    ///
    /// # Examples
    ///
    /// ```
    /// use avl::{InvalidArgument, Tree};
    ///
    /// let tree = Tree::from_inclusive_range(1, 7).unwrap();
    /// assert_eq!(tree.len(), 7);
    /// assert_eq!(tree.height(), 3);
    ///
    /// assert_eq!(
    ///     Tree::from_inclusive_range(7, 1).unwrap_err(),
    ///     InvalidArgument::ReversedRange
    /// );
    /// ```
    pub fn from_inclusive_range(min: K, max: K) -> Result<Self, InvalidArgument>
    where
        K: Ord + Copy,
        RangeInclusive<K>: Iterator<Item = K>,
    {
        Self::from_inclusive_range_with(min, max, BuildStrategy::Direct)
    }

    /// Builds a tree holding every integer from `min` to `max`, inclusive,
    /// using the given `strategy`.
    ///
    /// # Errors
    ///
    /// [`InvalidArgument::ReversedRange`] if `max < min`.
    pub fn from_inclusive_range_with(
        min: K,
        max: K,
        strategy: BuildStrategy,
    ) -> Result<Self, InvalidArgument>
    where
        K: Ord + Copy,
        RangeInclusive<K>: Iterator<Item = K>,
    {
        if max < min {
            return Err(InvalidArgument::ReversedRange);
        }

        let keys: Vec<K> = (min..=max).collect();
        let tree = match strategy {
            BuildStrategy::Direct => Self::build_direct(keys),
            BuildStrategy::Incremental => {
                let mut tree = Self::new();
                tree.add_middles_first(&keys);
                tree
            }
        };

        log::debug!(
            "built {} keys into a tree of height {} ({strategy:?})",
            tree.len(),
            tree.height()
        );
        Ok(tree)
    }

    /// Adds the middle key of `keys` and then recurses on either half.
    fn add_middles_first(&mut self, keys: &[K])
    where
        K: Ord + Copy,
    {
        if keys.is_empty() {
            return;
        }

        let mid = (keys.len() - 1) / 2;
        self.add(keys[mid]);
        self.add_middles_first(&keys[..mid]);
        self.add_middles_first(&keys[mid + 1..]);
    }

    /// Links already-sorted `keys` into a tree without comparing or rotating.
    fn build_direct(keys: Vec<K>) -> Self {
        let len = keys.len();
        let root = build_balanced(&mut keys.into_iter(), len);

        Self { root, len }
    }
}

/// Builds a subtree of the next `len` keys. The root is the middle key (the
/// lower middle for even lengths), matching a split of `lo..=hi` at
/// `lo + (hi - lo) / 2`.
fn build_balanced<K, I>(keys: &mut I, len: usize) -> Link<K>
where
    I: Iterator<Item = K>,
{
    if len == 0 {
        return None;
    }

    let left_len = (len - 1) / 2;
    let left = build_balanced(keys, left_len);
    let key = keys.next()?;
    let right = build_balanced(keys, len - 1 - left_len);

    Some(Node::with_children(key, left, right))
}
