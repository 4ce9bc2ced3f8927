use avl::{Traversal, Tree};
use quickcheck_macros::quickcheck;

use std::collections::{BTreeSet, HashSet};

use crate::Op;

/// Applies a set of operations to a tree and a `BTreeSet`.
/// Returns `false` as soon as the tree disagrees with the set
/// or an AVL invariant is broken.
fn do_ops<K>(ops: &[Op<K>], tree: &mut Tree<K>, set: &mut BTreeSet<K>) -> bool
where
    K: Ord + Clone,
{
    for op in ops {
        let agrees = match op {
            Op::Add(k) => tree.add(k.clone()) == set.insert(k.clone()),
            Op::Delete(k) => tree.delete(k) == set.remove(k),
        };
        tree.assert_invariants();
        if !agrees {
            return false;
        }
    }

    true
}

#[quickcheck]
fn fuzz_multiple_operations_i8(ops: Vec<Op<i8>>) -> bool {
    let mut tree = Tree::new();
    let mut set = BTreeSet::new();

    do_ops(&ops, &mut tree, &mut set)
        && tree.len() == set.len()
        && tree.traverse(Traversal::InOrder).into_iter().eq(set.iter())
}

#[quickcheck]
fn in_order_is_sorted_and_unique(xs: Vec<i16>) -> bool {
    let tree: Tree<_> = xs.iter().copied().collect();
    let keys = tree.traverse(Traversal::InOrder);

    keys.windows(2).all(|pair| pair[0] < pair[1]) && keys.len() == tree.len()
}

#[quickcheck]
fn adding_again_is_a_no_op(xs: Vec<i8>) -> bool {
    let mut tree: Tree<_> = xs.iter().copied().collect();
    let before: Vec<i8> = tree.traverse(Traversal::PreOrder).into_iter().copied().collect();

    let added_any = xs.iter().any(|x| tree.add(*x));
    let after: Vec<i8> = tree.traverse(Traversal::PreOrder).into_iter().copied().collect();

    !added_any && before == after
}

#[quickcheck]
fn contains_not(xs: Vec<i8>, nots: Vec<i8>) -> bool {
    let tree: Tree<_> = xs.iter().copied().collect();
    let added: HashSet<_> = xs.into_iter().collect();
    let nots: HashSet<_> = nots.into_iter().collect();
    let mut nots = nots.difference(&added);

    nots.all(|x| !tree.contains(x))
}

#[quickcheck]
fn with_deletions(xs: Vec<i8>, deletes: Vec<i8>) -> bool {
    let mut tree: Tree<_> = xs.iter().copied().collect();
    for delete in &deletes {
        tree.delete(delete);
        tree.assert_invariants();
    }

    let mut still_present = xs;
    still_present.retain(|x| !deletes.contains(x));

    deletes.iter().all(|x| !tree.contains(x)) && still_present.iter().all(|x| tree.contains(x))
}

#[quickcheck]
fn deleting_absent_key_is_a_no_op(xs: Vec<i8>, absent: i8) -> bool {
    let mut tree: Tree<_> = xs.iter().copied().filter(|x| *x != absent).collect();
    let before: Vec<i8> = tree.traverse(Traversal::PreOrder).into_iter().copied().collect();

    let removed = tree.delete(&absent);
    let after: Vec<i8> = tree.traverse(Traversal::PreOrder).into_iter().copied().collect();

    !removed && before == after
}
