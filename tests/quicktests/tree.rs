use balanced_bst::{Node, Order, Tree};
use quickcheck_macros::quickcheck;

use std::collections::{BTreeSet, HashMap, HashSet};

use crate::Op;

/// Applies a set of operations to a tree and a set.
/// This way we can ensure that after a random smattering of inserts
/// and deletes we have the same values in both.
fn do_ops<V>(ops: &[Op<V>], bst: &mut Tree<V>, set: &mut BTreeSet<V>)
where
    V: Ord + Clone,
{
    for op in ops {
        match op {
            Op::Insert(v) => {
                bst.insert(v.clone());
                set.insert(v.clone());
            }
            Op::Delete(v) => {
                bst.delete(v);
                set.remove(v);
            }
            Op::Rebalance => bst.rebalance(),
        }
    }
}

/// Whether every node's value sits strictly between the bounds inherited from
/// its ancestors.
fn is_bst<V: Ord>(node: Option<&Node<V>>, low: Option<&V>, high: Option<&V>) -> bool {
    let Some(node) = node else {
        return true;
    };
    let data = node.data();

    low.map_or(true, |low| low < data)
        && high.map_or(true, |high| data < high)
        && is_bst(node.left(), low, Some(data))
        && is_bst(node.right(), Some(data), high)
}

/// Collects the values visited by `in_order`.
fn in_order_values(tree: &Tree<i8>) -> Vec<i8> {
    let mut values = Vec::new();
    tree.in_order(Some(&mut |node: &Node<i8>| values.push(*node.data())))
        .unwrap();
    values
}

#[quickcheck]
fn fuzz_multiple_operations_i8(ops: Vec<Op<i8>>) -> bool {
    let mut tree = Tree::new();
    let mut set = BTreeSet::new();

    do_ops(&ops, &mut tree, &mut set);
    is_bst(tree.root(), None, None)
        && tree.len() == set.len()
        && set.iter().all(|x| tree.find(x).map(Node::data) == Some(x))
}

#[quickcheck]
fn build_then_in_order_is_strictly_ascending(xs: Vec<i8>) -> bool {
    let tree = Tree::build(xs.clone());
    let expected: BTreeSet<_> = xs.into_iter().collect();

    in_order_values(&tree).into_iter().eq(expected)
}

#[quickcheck]
fn build_is_balanced(xs: Vec<i8>) -> bool {
    let tree: Tree<_> = xs.into_iter().collect();
    tree.is_balanced() && is_bst(tree.root(), None, None)
}

#[quickcheck]
fn insert_absent_adds_one_leaf(xs: Vec<i8>, x: i8) -> bool {
    let mut tree = Tree::build(xs);
    if tree.contains(&x) {
        return true;
    }
    let len = tree.len();

    tree.insert(x);
    let node = tree.find(&x);
    node.map_or(false, Node::is_leaf)
        && node.map(Node::data) == Some(&x)
        && tree.len() == len + 1
        && is_bst(tree.root(), None, None)
}

#[quickcheck]
fn insert_present_changes_nothing(xs: Vec<i8>, ops: Vec<Op<i8>>) -> bool {
    let mut tree = Tree::build(xs);
    do_ops(&ops, &mut tree, &mut BTreeSet::new());
    let before = tree.clone();

    for x in before.values() {
        tree.insert(*x);
    }
    tree == before
}

#[quickcheck]
fn delete_keeps_everything_else(xs: Vec<i8>, deletes: Vec<i8>) -> bool {
    let mut tree = Tree::build(xs.iter().copied());
    for delete in &deletes {
        tree.delete(delete);
    }

    let deleted: HashSet<_> = deletes.into_iter().collect();
    deleted.iter().all(|x| tree.find(x).is_none())
        && xs
            .iter()
            .filter(|x| !deleted.contains(*x))
            .all(|x| tree.contains(x))
        && is_bst(tree.root(), None, None)
}

#[quickcheck]
fn delete_absent_changes_nothing(xs: Vec<i8>, x: i8) -> bool {
    let mut tree = Tree::build(xs);
    tree.delete(&x);
    let before = tree.clone();

    tree.delete(&x);
    tree == before
}

#[quickcheck]
fn rebalance_keeps_values_and_balances(ops: Vec<Op<i8>>) -> bool {
    let mut tree = Tree::new();
    do_ops(&ops, &mut tree, &mut BTreeSet::new());
    let before: Vec<_> = tree.values().copied().collect();

    tree.rebalance();
    tree.is_balanced() && tree.values().copied().eq(before)
}

#[quickcheck]
fn depth_of_every_node_matches_level_order(xs: Vec<i8>) -> bool {
    let tree = Tree::build(xs);

    // Walk level by level, remembering how deep each node was found.
    let mut expected = HashMap::new();
    let mut level: Vec<&Node<i8>> = tree.root().into_iter().collect();
    let mut depth = 0;
    while !level.is_empty() {
        for node in &level {
            expected.insert(*node.data(), depth);
        }
        level = level
            .iter()
            .flat_map(|node| node.left().into_iter().chain(node.right()))
            .collect();
        depth += 1;
    }

    tree.traverse(Order::Level)
        .all(|node| Some(&tree.depth(node)) == expected.get(node.data()))
}
