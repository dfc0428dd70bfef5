use bst::Tree;
use quickcheck_macros::quickcheck;

use std::collections::{BTreeSet, HashSet};

use crate::Op;

/// Applies a set of operations to a tree and a `BTreeSet` model, checking every
/// observation against the model as it goes.
fn do_ops<K>(ops: &[Op<K>], tree: &mut Tree<K>, model: &mut BTreeSet<K>) -> bool
where
    K: Ord + Clone,
{
    for op in ops {
        let agrees = match op {
            Op::Insert(k) => {
                tree.insert(k.clone());
                model.insert(k.clone());
                tree.size() == model.len() && tree.is_empty() == model.is_empty()
            }
            Op::Search(k) => tree.search(k) == model.contains(k),
            Op::Traverse => tree.in_order().eq(model.iter()),
        };
        if !agrees {
            return false;
        }
    }

    true
}

/// Sorts a traversal so traversals in different orders can be compared as multisets.
fn sorted<'a>(keys: impl Iterator<Item = &'a i16>) -> Vec<i16> {
    let mut keys: Vec<_> = keys.copied().collect();
    keys.sort_unstable();
    keys
}

#[quickcheck]
fn fuzz_multiple_operations_i8(ops: Vec<Op<i8>>) -> bool {
    let mut tree = Tree::new();
    let mut model = BTreeSet::new();

    do_ops(&ops, &mut tree, &mut model)
}

#[quickcheck]
fn size_counts_distinct_keys(xs: Vec<i8>) -> bool {
    let tree: Tree<_> = xs.iter().copied().collect();
    let distinct: HashSet<_> = xs.into_iter().collect();

    tree.size() == distinct.len()
}

#[quickcheck]
fn in_order_is_sorted(xs: Vec<i16>) -> bool {
    let tree: Tree<_> = xs.into_iter().collect();
    let keys: Vec<_> = tree.in_order().collect();

    keys.windows(2).all(|w| w[0] < w[1])
}

#[quickcheck]
fn traversals_share_keys(xs: Vec<i16>) -> bool {
    let tree: Tree<_> = xs.into_iter().collect();
    let in_order: Vec<_> = tree.in_order().copied().collect();

    in_order.len() == tree.size()
        && sorted(tree.pre_order()) == in_order
        && sorted(tree.post_order()) == in_order
}

#[quickcheck]
fn contains(xs: Vec<i8>) -> bool {
    let tree: Tree<_> = xs.iter().copied().collect();

    xs.iter().all(|x| tree.search(x))
}

#[quickcheck]
fn contains_not(xs: Vec<i8>, nots: Vec<i8>) -> bool {
    let tree: Tree<_> = xs.iter().copied().collect();
    let added: HashSet<_> = xs.into_iter().collect();
    let nots: HashSet<_> = nots.into_iter().collect();
    let mut nots = nots.difference(&added);

    nots.all(|x| !tree.search(x))
}

#[quickcheck]
fn duplicate_insert_is_idempotent(xs: Vec<i8>, x: i8) -> bool {
    let mut tree: Tree<_> = xs.into_iter().collect();
    tree.insert(x);
    let once = (
        tree.size(),
        tree.pre_order().copied().collect::<Vec<_>>(),
        tree.in_order().copied().collect::<Vec<_>>(),
        tree.post_order().copied().collect::<Vec<_>>(),
    );

    tree.insert(x);
    let twice = (
        tree.size(),
        tree.pre_order().copied().collect::<Vec<_>>(),
        tree.in_order().copied().collect::<Vec<_>>(),
        tree.post_order().copied().collect::<Vec<_>>(),
    );

    once == twice && tree.search(&x)
}

#[quickcheck]
fn pre_order_rebuilds_same_tree(xs: Vec<i8>) -> bool {
    let tree: Tree<_> = xs.into_iter().collect();
    let rebuilt: Tree<_> = tree.pre_order().copied().collect();

    tree.pre_order().eq(rebuilt.pre_order()) && tree.post_order().eq(rebuilt.post_order())
}

#[quickcheck]
fn clone_is_independent(xs: Vec<i8>, x: i8) -> bool {
    let tree: Tree<_> = xs.into_iter().collect();
    let mut copy = tree.clone();
    let had = tree.search(&x);
    copy.insert(x);

    tree.search(&x) == had && copy.search(&x) && tree.pre_order().eq(tree.clone().pre_order())
}

#[test]
fn empty_tree() {
    let tree: Tree<String> = Tree::default();

    assert!(tree.is_empty());
    assert_eq!(tree.size(), 0);
    assert!(!tree.search(&"anything".to_string()));
    assert_eq!(tree.pre_order().count(), 0);
    assert_eq!(tree.in_order().count(), 0);
    assert_eq!(tree.post_order().count(), 0);
    assert_eq!(format!("{:?}", tree), "{}");
}

#[test]
fn sample_tree() {
    let mut tree = Tree::new();
    for key in [56, 30, 70, 60, 40, 95, 22, 11, 65, 16, 63, 67, 3] {
        tree.insert(key);
    }

    assert_eq!(tree.size(), 13);
    assert_eq!(
        tree.in_order().copied().collect::<Vec<_>>(),
        [3, 11, 16, 22, 30, 40, 56, 60, 63, 65, 67, 70, 95]
    );
    assert!(tree.search(&63));
    assert!(!tree.search(&100));
}

#[test]
fn skewed_tree() {
    let mut tree = Tree::new();
    tree.extend([1, 2, 3, 4, 5]);

    assert_eq!(tree.height(), 5);
    assert_eq!(tree.in_order().copied().collect::<Vec<_>>(), [1, 2, 3, 4, 5]);
    assert_eq!(tree.pre_order().copied().collect::<Vec<_>>(), [1, 2, 3, 4, 5]);
    assert_eq!(tree.post_order().copied().collect::<Vec<_>>(), [5, 4, 3, 2, 1]);
}

#[test]
fn traversals_restart() {
    let tree: Tree<_> = ["m", "c", "x"].into_iter().collect();

    let first: Vec<_> = tree.post_order().collect();
    let second: Vec<_> = tree.post_order().collect();
    assert_eq!(first, second);
    assert_eq!(first, [&"c", &"x", &"m"]);
}
