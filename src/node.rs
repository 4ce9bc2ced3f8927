//! The recursive half of the tree. Every function here takes ownership of a
//! subtree and hands back its (possibly rotated) replacement so parents only
//! ever have to store whatever they get back.

use std::borrow::Borrow;
use std::cmp::Ordering;

use crate::observer::{Direction, RotationObserver};

/// An owned, possibly empty, subtree.
pub(crate) type Link<K> = Option<Box<Node<K>>>;

#[derive(Clone)]
pub(crate) struct Node<K> {
    pub(crate) key: K,
    pub(crate) left: Link<K>,
    pub(crate) right: Link<K>,

    /// How many levels are in the subtree rooted at this node.
    /// A node with no children has a height of 1.
    pub(crate) height: usize,
}

/// Where a key ended up relative to the root of the subtree it was inserted
/// into.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub(crate) enum Placement {
    /// The key was already present so nothing changed.
    Duplicate,
    /// The subtree was empty and is now a single leaf holding the key.
    Root,
    /// The key went into the left or right subtree of the root.
    Below(Direction),
}

/// The height of a subtree. Empty subtrees have a height of 0.
pub(crate) fn height<K>(link: &Link<K>) -> usize {
    link.as_ref().map_or(0, |n| n.height)
}

/// The balance factor of a subtree. Empty subtrees are balanced.
fn balance_factor<K>(link: &Link<K>) -> isize {
    link.as_ref().map_or(0, |n| n.balance_factor())
}

impl<K> Node<K> {
    pub(crate) fn new_boxed(key: K) -> Box<Self> {
        Box::new(Self {
            height: 1,
            key,
            left: None,
            right: None,
        })
    }

    /// Builds a node over two existing subtrees, computing its height from
    /// theirs. The caller is responsible for the subtrees being ordered and
    /// balanced relative to `key`.
    pub(crate) fn with_children(key: K, left: Link<K>, right: Link<K>) -> Box<Self> {
        let mut node = Self::new_boxed(key);
        node.left = left;
        node.right = right;
        node.fix_height();
        node
    }

    fn child_mut(&mut self, side: Direction) -> &mut Link<K> {
        match side {
            Direction::Left => &mut self.left,
            Direction::Right => &mut self.right,
        }
    }

    /// Adjusts the height of `self` to be the max of its children's heights + 1.
    fn fix_height(&mut self) {
        self.height = height(&self.left).max(height(&self.right)) + 1;
    }

    /// The height of the left subtree minus the height of the right subtree.
    /// See [the Wikipedia page][wiki] for more details.
    ///
    /// [wiki]: https://en.wikipedia.org/wiki/AVL_tree#Balance_factor
    pub(crate) fn balance_factor(&self) -> isize {
        height(&self.left) as isize - height(&self.right) as isize
    }

    /// Rotate self to the right. This moves the left child up vertically and
    /// self down vertically. Used to rebalance the tree when the left child is
    /// too tall. As such, it must only be called when there _is_ a left child.
    ///
    /// ## Panics
    ///
    /// When called on a node without a left child.
    ///
    /// # Diagram
    ///
    /// ```text
    ///        y                      x
    ///       / \                    / \
    ///      x   c    rotate ->     a   y
    ///     / \                        / \
    ///    a   b                      b   c
    /// ```
    ///
    /// Only `x` and `y` change so only their heights are recomputed, `y` first
    /// since `x` now sits above it.
    fn rotate_right<O>(mut self: Box<Self>, observer: &mut O) -> Box<Self>
    where
        O: RotationObserver<K>,
    {
        let mut new_root = self.left.take().expect("Rotate right => left child");
        self.left = new_root.right.take();
        self.fix_height();
        observer.rotated(&self.key, Direction::Right);

        new_root.right = Some(self);
        new_root.fix_height();
        new_root
    }

    /// Mirror image of [`Node::rotate_right`]: the right child moves up.
    ///
    /// ## Panics
    ///
    /// When called on a node without a right child.
    fn rotate_left<O>(mut self: Box<Self>, observer: &mut O) -> Box<Self>
    where
        O: RotationObserver<K>,
    {
        let mut new_root = self.right.take().expect("Rotate left => right child");
        self.right = new_root.left.take();
        self.fix_height();
        observer.rotated(&self.key, Direction::Left);

        new_root.left = Some(self);
        new_root.fix_height();
        new_root
    }

    /// Restores the AVL invariant at `self` after an insertion went below it.
    /// `child_placement` says where the key went relative to the child it was
    /// inserted under, which tells us whether the new key is on the outside
    /// (single rotation) or the inside (double rotation) of the heavy side.
    fn rebalance_after_insert<O>(
        mut self: Box<Self>,
        child_placement: Placement,
        observer: &mut O,
    ) -> Box<Self>
    where
        O: RotationObserver<K>,
    {
        self.fix_height();
        let node = match self.balance_factor() {
            bf if bf > 1 => {
                if child_placement != Placement::Below(Direction::Left) {
                    self.left = self.left.take().map(|left| left.rotate_left(observer));
                }
                self.rotate_right(observer)
            }
            bf if bf < -1 => {
                if child_placement != Placement::Below(Direction::Right) {
                    self.right = self.right.take().map(|right| right.rotate_right(observer));
                }
                self.rotate_left(observer)
            }
            _ => self,
        };

        node.debug_assert_balanced();
        node
    }

    /// Restores the AVL invariant at `self` after a deletion below it. There is
    /// no new key to look at so the heavy child's own balance factor decides
    /// between a single and a double rotation.
    fn rebalance_after_delete<O>(mut self: Box<Self>, observer: &mut O) -> Box<Self>
    where
        O: RotationObserver<K>,
    {
        self.fix_height();
        let node = match self.balance_factor() {
            bf if bf > 1 => {
                if balance_factor(&self.left) < 0 {
                    self.left = self.left.take().map(|left| left.rotate_left(observer));
                }
                self.rotate_right(observer)
            }
            bf if bf < -1 => {
                if balance_factor(&self.right) > 0 {
                    self.right = self.right.take().map(|right| right.rotate_right(observer));
                }
                self.rotate_left(observer)
            }
            _ => self,
        };

        node.debug_assert_balanced();
        node
    }

    fn debug_assert_balanced(&self) {
        if cfg!(debug_assertions) {
            let left_height = height(&self.left);
            let right_height = height(&self.right);
            assert_eq!(self.height, left_height.max(right_height) + 1);
            assert!(left_height.abs_diff(right_height) <= 1);
        }
    }
}

/// Finds the key in `link` equal to `key`, walking down from the root.
pub(crate) fn find<'a, K, Q>(mut link: &'a Link<K>, key: &Q) -> Option<&'a K>
where
    K: Borrow<Q>,
    Q: Ord + ?Sized,
{
    while let Some(node) = link {
        link = match key.cmp(node.key.borrow()) {
            Ordering::Less => &node.left,
            Ordering::Equal => return Some(&node.key),
            Ordering::Greater => &node.right,
        };
    }

    None
}

/// Inserts `key` into the subtree and returns the new subtree root. If the key
/// is already present the subtree is handed back untouched.
pub(crate) fn insert<K, O>(link: Link<K>, key: K, observer: &mut O) -> (Box<Node<K>>, Placement)
where
    K: Ord,
    O: RotationObserver<K>,
{
    let mut node = match link {
        Some(node) => node,
        None => return (Node::new_boxed(key), Placement::Root),
    };

    let side = match key.cmp(&node.key) {
        Ordering::Less => Direction::Left,
        Ordering::Equal => return (node, Placement::Duplicate),
        Ordering::Greater => Direction::Right,
    };

    let child = node.child_mut(side).take();
    let (child, child_placement) = insert(child, key, observer);
    *node.child_mut(side) = Some(child);

    if child_placement == Placement::Duplicate {
        return (node, Placement::Duplicate);
    }

    if cfg!(debug_assertions) {
        if let Some(left) = &node.left {
            assert!(node.key > left.key);
        }
        if let Some(right) = &node.right {
            assert!(node.key < right.key);
        }
    }

    (
        node.rebalance_after_insert(child_placement, observer),
        Placement::Below(side),
    )
}

/// Deletes the node holding `key` from the subtree. Returns the new subtree
/// root and whether anything was removed.
pub(crate) fn delete<K, Q, O>(link: Link<K>, key: &Q, observer: &mut O) -> (Link<K>, bool)
where
    K: Borrow<Q>,
    Q: Ord + ?Sized,
    O: RotationObserver<K>,
{
    let mut node = match link {
        Some(node) => node,
        None => return (None, false),
    };

    let side = match key.cmp(node.key.borrow()) {
        Ordering::Less => Direction::Left,
        Ordering::Greater => Direction::Right,
        Ordering::Equal => {
            return match (node.left.take(), node.right.take()) {
                (None, right) => (right, true),
                (left, None) => (left, true),

                // With two children the in-order successor (the smallest key
                // in the right subtree) takes this node's place.
                (Some(left), Some(right)) => {
                    let (right, successor) = take_min(right, observer);
                    node.key = successor;
                    node.left = Some(left);
                    node.right = right;
                    (Some(node.rebalance_after_delete(observer)), true)
                }
            };
        }
    };

    let child = node.child_mut(side).take();
    let (child, removed) = delete(child, key, observer);
    *node.child_mut(side) = child;

    if removed {
        (Some(node.rebalance_after_delete(observer)), true)
    } else {
        (Some(node), false)
    }
}

/// Removes the smallest node of the subtree by recursing to the left until
/// there is no left child. Returns the new subtree root and the removed key.
fn take_min<K, O>(mut node: Box<Node<K>>, observer: &mut O) -> (Link<K>, K)
where
    O: RotationObserver<K>,
{
    match node.left.take() {
        None => {
            let Node { key, right, .. } = *node;
            (right, key)
        }
        Some(left) => {
            let (left, min) = take_min(left, observer);
            node.left = left;
            (Some(node.rebalance_after_delete(observer)), min)
        }
    }
}
