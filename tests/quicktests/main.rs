//! Property tests run against the public API only.

use quickcheck::{Arbitrary, Gen};

mod build;
mod tree;

/// An enum for the various kinds of "things" to do to
/// a tree in a quicktest.
#[derive(Copy, Clone, Debug)]
pub(crate) enum Op<K> {
    /// Add the K to the tree
    Add(K),
    /// Delete the K from the tree
    Delete(K),
}

impl<K> Arbitrary for Op<K>
where
    K: Arbitrary,
{
    fn arbitrary(g: &mut Gen) -> Self {
        if bool::arbitrary(g) {
            Op::Add(K::arbitrary(g))
        } else {
            Op::Delete(K::arbitrary(g))
        }
    }
}
