use avl::{BuildStrategy, Traversal, Tree};
use quickcheck_macros::quickcheck;

use std::collections::BTreeSet;

#[quickcheck]
fn from_sorted_round_trips(xs: BTreeSet<i32>) -> bool {
    let expected: Vec<i32> = xs.iter().copied().collect();
    let tree = Tree::from_sorted(xs).unwrap();
    tree.assert_invariants();

    tree.traverse(Traversal::InOrder).into_iter().copied().eq(expected)
}

#[quickcheck]
fn range_strategies_agree(min: i8, span: u8) -> bool {
    let min = i32::from(min);
    let max = min + i32::from(span);

    let direct = Tree::from_inclusive_range_with(min, max, BuildStrategy::Direct).unwrap();
    let incremental = Tree::from_inclusive_range_with(min, max, BuildStrategy::Incremental).unwrap();
    direct.assert_invariants();
    incremental.assert_invariants();

    direct.len() == usize::from(span) + 1
        && direct.traverse(Traversal::InOrder) == incremental.traverse(Traversal::InOrder)
        && direct.height() <= incremental.height()
}

#[quickcheck]
fn reversed_ranges_are_rejected(a: i16, b: i16) -> bool {
    let (min, max) = (a.max(b), a.min(b));

    Tree::from_inclusive_range(min, max).is_ok() == (min == max)
}
