//! The building block of a [`Tree`][crate::Tree].
//!
//! A `Node` stores one value and owns its two children outright, so every
//! node has exactly one parent and the graph can never contain a cycle.
//! Nodes are handed out read-only: the tree is the only thing that can
//! rearrange them.

use crate::traverse::{Order, Traverse};

/// An owned, possibly absent, child.
pub(crate) type Link<T> = Option<Box<Node<T>>>;

/// A single value in the tree along with the subtrees hanging off of it.
///
/// All values in the `left` subtree are smaller than `data` and all values in
/// the `right` subtree are larger.
///
/// The derived `Clone`, `Debug` and `PartialEq` recurse once per level, so
/// on a very tall subtree prefer the [`Tree`][crate::Tree] implementations,
/// which don't.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Node<T> {
    pub(crate) data: T,
    pub(crate) left: Link<T>,
    pub(crate) right: Link<T>,
}

impl<T> Node<T> {
    /// A childless node holding `data`.
    pub(crate) fn new_boxed(data: T) -> Box<Self> {
        Box::new(Self {
            data,
            left: None,
            right: None,
        })
    }

    /// The value stored in this node.
    pub fn data(&self) -> &T {
        &self.data
    }

    /// The root of the left subtree, if there is one.
    pub fn left(&self) -> Option<&Self> {
        self.left.as_deref()
    }

    /// The root of the right subtree, if there is one.
    pub fn right(&self) -> Option<&Self> {
        self.right.as_deref()
    }

    /// Whether this node has no children.
    pub fn is_leaf(&self) -> bool {
        self.left.is_none() && self.right.is_none()
    }

    /// The number of edges on the longest path from this node down to a
    /// leaf. A leaf has a height of 0.
    ///
    /// This is recomputed on every call and costs `O(size of subtree)`.
    pub fn height(&self) -> isize {
        height(self.left()).max(height(self.right())) + 1
    }

    /// Lazily walks the subtree rooted at this node in the given order.
    ///
    /// # Examples
    ///
    /// ```
    /// use balanced_bst::{Order, Tree};
    ///
    /// let tree = Tree::build(vec![1, 2, 3, 4, 5, 6, 7]);
    /// let two = tree.find(&2).unwrap();
    ///
    /// let subtree: Vec<_> = two.traverse(Order::Post).map(|n| *n.data()).collect();
    /// assert_eq!(subtree, [1, 3, 2]);
    /// ```
    pub fn traverse(&self, order: Order) -> Traverse<'_, T> {
        Traverse::new(Some(self), order)
    }

    /// Detaches the smallest node of the subtree behind `link` and returns
    /// its value. The detached node never has a left child so its right child
    /// takes its place.
    pub(crate) fn take_min(link: &mut Link<T>) -> Option<T> {
        let node = link.as_mut()?;
        if node.left.is_some() {
            return Self::take_min(&mut node.left);
        }

        let node = link.take()?;
        let Node { data, right, .. } = *node;
        *link = right;
        Some(data)
    }
}

/// The height of a possibly absent node. By convention an absent node has a
/// height of -1, which makes a leaf's height 0.
///
/// # Examples
///
/// ```
/// use balanced_bst::{height, Tree};
///
/// let tree = Tree::build(vec![1, 2, 3]);
///
/// assert_eq!(height(tree.root()), 1);
/// assert_eq!(height(tree.find(&3)), 0);
/// assert_eq!(height(tree.find(&42)), -1);
/// ```
pub fn height<T>(node: Option<&Node<T>>) -> isize {
    node.map_or(-1, Node::height)
}

/// Whether, for every node in the subtree, the heights of the left and right
/// subtrees differ by at most one. An absent subtree is balanced.
///
/// Stops at the first node that breaks the rule.
pub fn is_balanced<T>(node: Option<&Node<T>>) -> bool {
    balanced_height(node).is_some()
}

/// The height of `node` when its subtree is balanced. Heights are computed
/// bottom up once so the whole check is `O(n)`.
fn balanced_height<T>(node: Option<&Node<T>>) -> Option<isize> {
    let Some(node) = node else {
        return Some(-1);
    };

    let left = balanced_height(node.left())?;
    let right = balanced_height(node.right())?;
    if (left - right).abs() > 1 {
        return None;
    }

    Some(left.max(right) + 1)
}

#[cfg(test)]
mod tests {
    use super::*;

    /// Hand builds a node so shapes that `Tree::build` never produces can be
    /// checked.
    fn node(data: i32, left: Link<i32>, right: Link<i32>) -> Link<i32> {
        Some(Box::new(Node { data, left, right }))
    }

    fn leaf(data: i32) -> Link<i32> {
        node(data, None, None)
    }

    #[test]
    fn leaf_has_height_zero() {
        let leaf = leaf(1);
        assert_eq!(height(leaf.as_deref()), 0);
        assert!(leaf.as_deref().map_or(false, Node::is_leaf));
    }

    #[test]
    fn absent_has_height_minus_one() {
        assert_eq!(height::<i32>(None), -1);
    }

    #[test]
    fn height_follows_the_longest_path() {
        let root = node(5, node(3, leaf(1), None), leaf(7));
        let root = root.as_deref();

        assert_eq!(height(root), 2);
        assert_eq!(height(root.and_then(Node::left)), 1);
        assert_eq!(height(root.and_then(Node::right)), 0);
    }

    #[test]
    fn absent_is_balanced() {
        assert!(is_balanced::<i32>(None));
    }

    #[test]
    fn one_level_of_difference_is_balanced() {
        let root = node(5, node(3, leaf(1), None), leaf(7));
        assert!(is_balanced(root.as_deref()));
    }

    #[test]
    fn chain_is_not_balanced() {
        let root = node(1, None, node(2, None, leaf(3)));
        assert!(!is_balanced(root.as_deref()));
    }

    #[test]
    fn imbalance_below_the_root_is_found() {
        // The root's subtrees have equal heights but its left child doesn't.
        let left = node(4, node(2, leaf(1), None), None);
        let right = node(8, node(7, leaf(6), None), None);
        let root = node(5, left, right);
        let root = root.as_deref();

        assert_eq!(
            height(root.and_then(Node::left)),
            height(root.and_then(Node::right))
        );
        assert!(!is_balanced(root));
    }

    #[test]
    fn take_min_promotes_right_child() {
        let mut root = node(5, node(2, None, leaf(3)), leaf(7));

        assert_eq!(Node::take_min(&mut root), Some(2));

        let root = root.as_deref().unwrap();
        assert_eq!(root.left().map(Node::data), Some(&3));
        assert_eq!(root.right().map(Node::data), Some(&7));
    }

    #[test]
    fn take_min_of_root_without_left_child() {
        let mut root = node(5, None, leaf(7));

        assert_eq!(Node::take_min(&mut root), Some(5));
        assert_eq!(root.as_deref().map(Node::data), Some(&7));
        assert_eq!(Node::take_min(&mut root), Some(7));
        assert_eq!(Node::take_min(&mut root), None);
    }
}
