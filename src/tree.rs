//! A Binary Search Tree that is balanced when it is built and rebalanced
//! only on request.
//!
//! Inserting and deleting never rotate nodes the way an AVL or red-black
//! tree would. Instead [`Tree::rebalance`] throws away the node graph and
//! builds a new one from the sorted values, which is exactly how
//! [`Tree::build`] constructs a tree in the first place.
//!
//! # Examples
//!
//! ```
//! use balanced_bst::Tree;
//!
//! let mut tree = Tree::build(vec![1, 7, 4, 23, 8, 9, 4, 3, 5, 7, 9, 67, 6345, 324, 6]);
//!
//! // Duplicates are dropped and the middle value becomes the root.
//! assert_eq!(tree.len(), 12);
//! assert_eq!(tree.root().map(|root| *root.data()), Some(8));
//! assert!(tree.is_balanced());
//!
//! // Lopsided inserts unbalance it...
//! for x in 7000..7005 {
//!     tree.insert(x);
//! }
//! assert!(!tree.is_balanced());
//!
//! // ...until it's rebuilt.
//! tree.rebalance();
//! assert!(tree.is_balanced());
//! assert_eq!(tree.len(), 17);
//! ```

use std::cmp::Ordering;
use std::fmt;

use tracing::{debug, instrument, trace};

use crate::node::{self, Link, Node};
use crate::traverse::Order;

/// A Binary Search Tree of unique values.
///
/// `Clone`, `PartialEq`, `Debug` and `Drop` walk the nodes with an explicit
/// stack, so they work on trees of any shape. Two trees are equal when they
/// hold the same values in the same shape.
pub struct Tree<T> {
    root: Link<T>,
    len: usize,
}

impl<T> Default for Tree<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T: Clone> Clone for Tree<T> {
    // Children come before their parent in post order, so by the time a node
    // is copied its copied subtrees are on top of `built`, right above left.
    fn clone(&self) -> Self {
        let mut built: Vec<Box<Node<T>>> = Vec::new();
        for node in self.traverse(Order::Post) {
            let right = node.right.as_ref().and_then(|_| built.pop());
            let left = node.left.as_ref().and_then(|_| built.pop());
            built.push(Box::new(Node {
                data: node.data.clone(),
                left,
                right,
            }));
        }

        Self {
            root: built.pop(),
            len: self.len,
        }
    }
}

impl<T: PartialEq> PartialEq for Tree<T> {
    // A pre-order walk that also records which children are present pins
    // down the shape.
    fn eq(&self, other: &Self) -> bool {
        self.len == other.len
            && self
                .traverse(Order::Pre)
                .zip(other.traverse(Order::Pre))
                .all(|(a, b)| {
                    a.data == b.data
                        && a.left.is_some() == b.left.is_some()
                        && a.right.is_some() == b.right.is_some()
                })
    }
}

impl<T: Eq> Eq for Tree<T> {}

impl<T: fmt::Debug> fmt::Debug for Tree<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let pre_order: Vec<_> = self.traverse(Order::Pre).map(Node::data).collect();
        f.debug_struct("Tree")
            .field("len", &self.len)
            .field("pre_order", &pre_order)
            .finish()
    }
}

impl<T> Drop for Tree<T> {
    // Boxes drop their children recursively, which overflows the stack for a
    // long enough chain, so take the nodes apart one at a time instead.
    fn drop(&mut self) {
        let mut pending: Vec<_> = self.root.take().into_iter().collect();
        while let Some(mut node) = pending.pop() {
            pending.extend(node.left.take());
            pending.extend(node.right.take());
        }
    }
}

impl<T> Tree<T> {
    /// Generates a new, empty `Tree`.
    pub fn new() -> Self {
        Self { root: None, len: 0 }
    }

    /// Builds a height-balanced tree out of `values`. Duplicates are dropped
    /// and the order of `values` doesn't matter.
    ///
    /// Every subtree is rooted at the middle of its sorted values, at index
    /// `len / 2`, so a subtree with an even number of values has one more
    /// value on its left than on its right.
    ///
    /// # Examples
    ///
    /// ```
    /// use balanced_bst::Tree;
    ///
    /// let tree = Tree::build(vec![4, 2, 3, 1, 2]);
    ///
    /// assert_eq!(tree.root().map(|root| *root.data()), Some(3));
    /// assert_eq!(tree.values().copied().collect::<Vec<_>>(), [1, 2, 3, 4]);
    /// ```
    #[instrument(level = "debug", skip_all, fields(len))]
    pub fn build<I>(values: I) -> Self
    where
        I: IntoIterator<Item = T>,
        T: Ord,
    {
        let mut values: Vec<T> = values.into_iter().collect();
        values.sort_unstable();
        values.dedup();
        tracing::Span::current().record("len", values.len());

        Self::from_sorted(values)
    }

    /// Builds from values that are already sorted and unique.
    fn from_sorted(values: Vec<T>) -> Self {
        let len = values.len();
        let root = Self::build_balanced(len, &mut values.into_iter());
        Self { root, len }
    }

    /// Builds a subtree out of the next `len` values of `values`. The left
    /// subtree is built first so the values are consumed in order and the
    /// middle one lands in the root.
    fn build_balanced(len: usize, values: &mut impl Iterator<Item = T>) -> Link<T> {
        if len == 0 {
            return None;
        }

        let mid = len / 2;
        let left = Self::build_balanced(mid, values);
        let data = values.next()?;
        let right = Self::build_balanced(len - mid - 1, values);

        Some(Box::new(Node { data, left, right }))
    }

    /// The root node, absent when the tree is empty.
    pub fn root(&self) -> Option<&Node<T>> {
        self.root.as_deref()
    }

    /// How many values are stored.
    pub fn len(&self) -> usize {
        self.len
    }

    /// Whether no values are stored.
    pub fn is_empty(&self) -> bool {
        self.root.is_none()
    }

    pub(crate) fn take_root(&mut self) -> Link<T> {
        self.len = 0;
        self.root.take()
    }

    /// Adds `value` as a new leaf unless it is already present. Returns
    /// whether the tree changed. The tree is not rebalanced.
    ///
    /// # Examples
    ///
    /// ```
    /// use balanced_bst::Tree;
    ///
    /// let mut tree = Tree::new();
    ///
    /// assert!(tree.insert(1));
    /// assert!(!tree.insert(1));
    /// assert_eq!(tree.len(), 1);
    /// ```
    pub fn insert(&mut self, value: T) -> bool
    where
        T: Ord,
    {
        let mut link = &mut self.root;
        while let Some(node) = link {
            link = match value.cmp(&node.data) {
                Ordering::Less => &mut node.left,
                Ordering::Greater => &mut node.right,
                Ordering::Equal => {
                    trace!("insert found an existing value");
                    return false;
                }
            };
        }

        *link = Some(Node::new_boxed(value));
        self.len += 1;
        true
    }

    /// Removes `value` from the tree if it is present. Returns whether the
    /// tree changed. The tree is not rebalanced.
    ///
    /// A node with two children takes the value of its in-order successor,
    /// the smallest value in its right subtree, and that successor's node is
    /// removed instead.
    ///
    /// # Examples
    ///
    /// ```
    /// use balanced_bst::Tree;
    ///
    /// let mut tree = Tree::build(vec![1, 2, 3]);
    ///
    /// assert!(tree.delete(&2));
    /// assert!(!tree.delete(&2));
    /// assert_eq!(tree.root().map(|root| *root.data()), Some(3));
    /// ```
    pub fn delete(&mut self, value: &T) -> bool
    where
        T: Ord,
    {
        let deleted = Self::delete_from(&mut self.root, value);
        if deleted {
            self.len -= 1;
        } else {
            trace!("delete found no matching value");
        }
        deleted
    }

    fn delete_from(link: &mut Link<T>, value: &T) -> bool
    where
        T: Ord,
    {
        let Some(node) = link else {
            return false;
        };

        match value.cmp(&node.data) {
            Ordering::Less => Self::delete_from(&mut node.left, value),
            Ordering::Greater => Self::delete_from(&mut node.right, value),
            Ordering::Equal => {
                match (node.left.take(), node.right.take()) {
                    (None, right) => *link = right,
                    (left, None) => *link = left,
                    (left, mut right) => {
                        if let Some(successor) = Node::take_min(&mut right) {
                            node.data = successor;
                        }
                        node.left = left;
                        node.right = right;
                    }
                }
                true
            }
        }
    }

    /// The node holding `value`, if there is one. Takes `O(height)`
    /// comparisons.
    ///
    /// # Examples
    ///
    /// ```
    /// use balanced_bst::Tree;
    ///
    /// let tree = Tree::build(vec![1, 2, 3]);
    ///
    /// assert_eq!(tree.find(&3).map(|node| *node.data()), Some(3));
    /// assert!(tree.find(&42).is_none());
    /// ```
    pub fn find(&self, value: &T) -> Option<&Node<T>>
    where
        T: Ord,
    {
        let mut current = self.root();
        while let Some(node) = current {
            current = match value.cmp(&node.data) {
                Ordering::Less => node.left(),
                Ordering::Greater => node.right(),
                Ordering::Equal => return Some(node),
            };
        }
        None
    }

    /// Whether `value` is stored in the tree.
    pub fn contains(&self, value: &T) -> bool
    where
        T: Ord,
    {
        self.find(value).is_some()
    }

    /// The height of the root: -1 for an empty tree, 0 for a lone root.
    pub fn height(&self) -> isize {
        node::height(self.root())
    }

    /// The number of edges between the root and the node holding the same
    /// value as `node`, or -1 if no such node is found.
    ///
    /// # Examples
    ///
    /// ```
    /// use balanced_bst::Tree;
    ///
    /// let tree = Tree::build(1..=7);
    /// let one = tree.find(&1).unwrap();
    ///
    /// assert_eq!(tree.depth(one), 2);
    /// assert_eq!(tree.depth(tree.root().unwrap()), 0);
    /// ```
    pub fn depth(&self, node: &Node<T>) -> isize
    where
        T: Ord,
    {
        Self::depth_from(node, self.root())
    }

    /// The number of edges from `root` down to the node holding the same
    /// value as `node`, or -1 if no such node is found.
    ///
    /// The search is guided by `node`'s value, not its identity. A node
    /// taken from another tree is looked up by value too.
    pub fn depth_from(node: &Node<T>, root: Option<&Node<T>>) -> isize
    where
        T: Ord,
    {
        let mut current = root;
        let mut depth = 0;
        while let Some(candidate) = current {
            current = match node.data.cmp(&candidate.data) {
                Ordering::Less => candidate.left(),
                Ordering::Greater => candidate.right(),
                Ordering::Equal => return depth,
            };
            depth += 1;
        }
        -1
    }

    /// Whether the heights of the left and right subtrees of every node
    /// differ by at most one.
    pub fn is_balanced(&self) -> bool {
        node::is_balanced(self.root())
    }

    /// Rebuilds the tree from its sorted values, leaving it height-balanced
    /// with the same values. Every existing node is discarded.
    #[instrument(level = "debug", skip_all, fields(len = self.len))]
    pub fn rebalance(&mut self) {
        let values: Vec<T> = std::mem::take(self).into_iter().collect();
        *self = Self::from_sorted(values);
        debug!(len = self.len, "rebalanced");
    }
}

impl<T: Ord> FromIterator<T> for Tree<T> {
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        Self::build(iter)
    }
}

impl<T: Ord> Extend<T> for Tree<T> {
    /// Inserts every value one at a time. The tree is not rebalanced.
    fn extend<I: IntoIterator<Item = T>>(&mut self, iter: I) {
        for value in iter {
            self.insert(value);
        }
    }
}
