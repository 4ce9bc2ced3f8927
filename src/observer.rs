//! Hooks for watching the tree rebalance itself.

use std::fmt;

/// Which way a rotation moves the nodes around its pivot.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub enum Direction {
    /// The pivot's right child moves up and the pivot becomes its left child.
    Left,
    /// The pivot's left child moves up and the pivot becomes its right child.
    Right,
}

impl fmt::Display for Direction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Left => f.write_str("left"),
            Self::Right => f.write_str("right"),
        }
    }
}

/// Receives an event every time the tree performs a rotation.
///
/// A double rotation is reported as two single rotations: first the one
/// around the child, then the one around the unbalanced node.
///
/// # Examples
///
/// ```
/// use avl::{Direction, Tree};
///
/// let mut tree = Tree::new();
/// let mut rotations = Vec::new();
///
/// tree.add_observed(1, &mut rotations);
/// tree.add_observed(2, &mut rotations);
/// tree.add_observed(3, &mut rotations);
///
/// assert_eq!(rotations, [(1, Direction::Left)]);
/// ```
pub trait RotationObserver<K> {
    /// Called after the subtree rooted at `pivot` was rotated in `direction`.
    fn rotated(&mut self, pivot: &K, direction: Direction);
}

/// Ignores every rotation.
impl<K> RotationObserver<K> for () {
    fn rotated(&mut self, _pivot: &K, _direction: Direction) {}
}

/// Records every rotation as a `(pivot, direction)` pair.
impl<K: Clone> RotationObserver<K> for Vec<(K, Direction)> {
    fn rotated(&mut self, pivot: &K, direction: Direction) {
        self.push((pivot.clone(), direction));
    }
}

impl<K, O> RotationObserver<K> for &mut O
where
    O: RotationObserver<K> + ?Sized,
{
    fn rotated(&mut self, pivot: &K, direction: Direction) {
        (**self).rotated(pivot, direction);
    }
}

/// Writes a `trace` record through the [`log`] facade for every rotation.
///
/// This is what [`Tree::add`](crate::Tree::add) and
/// [`Tree::delete`](crate::Tree::delete) use. Keys are only printed when they
/// implement `Debug`, see [`LogRotationKeys`].
#[derive(Copy, Clone, Debug, Default)]
pub struct LogRotations;

impl<K> RotationObserver<K> for LogRotations {
    fn rotated(&mut self, _pivot: &K, direction: Direction) {
        log::trace!("rebalanced subtree with a {direction} rotation");
    }
}

/// Like [`LogRotations`] but includes the pivot key in each record.
#[derive(Copy, Clone, Debug, Default)]
pub struct LogRotationKeys;

impl<K: fmt::Debug> RotationObserver<K> for LogRotationKeys {
    fn rotated(&mut self, pivot: &K, direction: Direction) {
        log::trace!("rebalanced subtree by rotating around {pivot:?} to the {direction}");
    }
}
