use quickcheck::{Arbitrary, Gen};

/// An enum for the various kinds of "things" to do to
/// a tree in a quicktest.
#[derive(Copy, Clone, Debug)]
pub(crate) enum Op<K> {
    /// Add the K to the tree
    Add(K),
    /// Delete the K from the tree
    Delete(K),
    /// Compare the in-order traversal against the model
    Traverse,
}

impl<K> Arbitrary for Op<K>
where
    K: Arbitrary,
{
    /// Tells quickcheck how to randomly choose an operation.
    /// Adds are weighted up so trees get deep enough to rotate.
    fn arbitrary(g: &mut Gen) -> Self {
        match g.choose(&[0, 0, 1, 2]).unwrap() {
            0 => Op::Add(K::arbitrary(g)),
            1 => Op::Delete(K::arbitrary(g)),
            2 => Op::Traverse,
            _ => unreachable!(),
        }
    }
}
