//! Walking the tree.
//!
//! Every traversal is driven by [`Traverse`], an iterator that keeps its
//! pending work in an explicit stack (depth first) or queue (breadth first)
//! instead of on the call stack, so walking a badly unbalanced tree can't
//! overflow. The callback flavoured methods on [`Tree`] are thin wrappers
//! around it.

use std::collections::VecDeque;
use std::iter::FusedIterator;

use crate::error::{Error, Result};
use crate::node::{Link, Node};
use crate::tree::Tree;

/// The order in which a traversal visits nodes.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Order {
    /// Node, then left subtree, then right subtree.
    Pre,
    /// Left subtree, then node, then right subtree. Yields ascending values.
    In,
    /// Left subtree, then right subtree, then node.
    Post,
    /// Breadth first, level by level, left to right.
    Level,
}

/// A one-shot walk over a subtree. Created by [`Tree::traverse`],
/// [`Tree::iter`] and [`Node::traverse`].
#[derive(Debug)]
pub struct Traverse<'a, T> {
    order: Order,
    pending: VecDeque<Step<'a, T>>,
}

/// Work still to be done by a [`Traverse`].
#[derive(Debug)]
enum Step<'a, T> {
    /// The whole subtree rooted here hasn't been looked at yet.
    Expand(&'a Node<T>),
    /// The node itself is due to be yielded.
    Yield(&'a Node<T>),
}

impl<'a, T> Traverse<'a, T> {
    pub(crate) fn new(start: Option<&'a Node<T>>, order: Order) -> Self {
        Self {
            order,
            pending: start.map(Step::Expand).into_iter().collect(),
        }
    }

    /// Pushes the children of `node` as unexpanded subtrees. Depth first
    /// orders use `pending` as a stack so `right` goes in first to come out
    /// last.
    fn push_children(&mut self, node: &'a Node<T>) {
        if self.order == Order::Level {
            self.pending.extend(node.left().map(Step::Expand));
            self.pending.extend(node.right().map(Step::Expand));
        } else {
            self.pending.extend(node.right().map(Step::Expand));
            self.pending.extend(node.left().map(Step::Expand));
        }
    }
}

impl<'a, T> Iterator for Traverse<'a, T> {
    type Item = &'a Node<T>;

    fn next(&mut self) -> Option<Self::Item> {
        loop {
            let step = match self.order {
                Order::Level => self.pending.pop_front()?,
                Order::Pre | Order::In | Order::Post => self.pending.pop_back()?,
            };
            let node = match step {
                Step::Yield(node) => return Some(node),
                Step::Expand(node) => node,
            };

            // Whatever is pushed last is popped first.
            match self.order {
                Order::Pre | Order::Level => {
                    self.push_children(node);
                    return Some(node);
                }
                Order::In => {
                    self.pending.extend(node.right().map(Step::Expand));
                    self.pending.push_back(Step::Yield(node));
                    self.pending.extend(node.left().map(Step::Expand));
                }
                Order::Post => {
                    self.pending.push_back(Step::Yield(node));
                    self.push_children(node);
                }
            }
        }
    }
}

impl<T> FusedIterator for Traverse<'_, T> {}

/// Consumes a [`Tree`], yielding its values in ascending order.
#[derive(Debug)]
pub struct IntoIter<T> {
    /// Nodes whose value and right subtree are still to come. Their left
    /// subtrees have already been moved onto the stack above them.
    stack: Vec<Box<Node<T>>>,
    remaining: usize,
}

impl<T> IntoIter<T> {
    pub(crate) fn new(root: Link<T>, len: usize) -> Self {
        let mut iter = Self {
            stack: Vec::new(),
            remaining: len,
        };
        iter.push_left_spine(root);
        iter
    }

    fn push_left_spine(&mut self, mut link: Link<T>) {
        while let Some(mut node) = link {
            link = node.left.take();
            self.stack.push(node);
        }
    }
}

impl<T> Iterator for IntoIter<T> {
    type Item = T;

    fn next(&mut self) -> Option<T> {
        let node = self.stack.pop()?;
        let Node { data, right, .. } = *node;
        self.push_left_spine(right);
        self.remaining = self.remaining.saturating_sub(1);
        Some(data)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (self.remaining, Some(self.remaining))
    }
}

impl<T> ExactSizeIterator for IntoIter<T> {}
impl<T> FusedIterator for IntoIter<T> {}

impl<T> Drop for IntoIter<T> {
    // Drain what's left one node at a time instead of letting each box drop
    // its whole subtree recursively.
    fn drop(&mut self) {
        for _ in self.by_ref() {}
    }
}

/// A traversal visitor. `None` is rejected with [`Error::InvalidArgument`].
pub type Visitor<'v, T> = Option<&'v mut dyn FnMut(&Node<T>)>;

impl<T> Tree<T> {
    /// Lazily walks the whole tree in the given order.
    ///
    /// # Examples
    ///
    /// ```
    /// use balanced_bst::{Order, Tree};
    ///
    /// let tree = Tree::build(vec![1, 2, 3]);
    /// let levels: Vec<_> = tree.traverse(Order::Level).map(|n| *n.data()).collect();
    ///
    /// assert_eq!(levels, [2, 1, 3]);
    /// ```
    pub fn traverse(&self, order: Order) -> Traverse<'_, T> {
        Traverse::new(self.root(), order)
    }

    /// Lazily walks the tree in order, i.e. in ascending order of values.
    pub fn iter(&self) -> Traverse<'_, T> {
        self.traverse(Order::In)
    }

    /// The values of the tree in ascending order.
    pub fn values(&self) -> impl Iterator<Item = &T> + '_ {
        self.iter().map(Node::data)
    }

    /// Calls `visit` on every node, each node before its subtrees.
    ///
    /// # Errors
    ///
    /// [`Error::InvalidArgument`] if `visit` is `None`.
    pub fn pre_order(&self, visit: Visitor<'_, T>) -> Result<()> {
        walk("pre_order", self.root(), Order::Pre, visit)
    }

    /// Like [`pre_order`][Self::pre_order] but only over the subtree rooted
    /// at `start`. An absent `start` visits nothing.
    ///
    /// # Errors
    ///
    /// [`Error::InvalidArgument`] if `visit` is `None`.
    pub fn pre_order_from(&self, start: Option<&Node<T>>, visit: Visitor<'_, T>) -> Result<()> {
        walk("pre_order", start, Order::Pre, visit)
    }

    /// Calls `visit` on every node in ascending order of values.
    ///
    /// # Errors
    ///
    /// [`Error::InvalidArgument`] if `visit` is `None`.
    ///
    /// # Examples
    ///
    /// ```
    /// use balanced_bst::{Error, Node, Tree};
    ///
    /// let tree = Tree::build(vec![3, 1, 2]);
    ///
    /// let mut seen = Vec::new();
    /// tree.in_order(Some(&mut |node: &Node<i32>| seen.push(*node.data())))
    ///     .unwrap();
    /// assert_eq!(seen, [1, 2, 3]);
    ///
    /// assert_eq!(tree.in_order(None), Err(Error::InvalidArgument("in_order")));
    /// ```
    pub fn in_order(&self, visit: Visitor<'_, T>) -> Result<()> {
        walk("in_order", self.root(), Order::In, visit)
    }

    /// Like [`in_order`][Self::in_order] but only over the subtree rooted at
    /// `start`. An absent `start` visits nothing.
    ///
    /// # Errors
    ///
    /// [`Error::InvalidArgument`] if `visit` is `None`.
    pub fn in_order_from(&self, start: Option<&Node<T>>, visit: Visitor<'_, T>) -> Result<()> {
        walk("in_order", start, Order::In, visit)
    }

    /// Calls `visit` on every node, each node after its subtrees.
    ///
    /// # Errors
    ///
    /// [`Error::InvalidArgument`] if `visit` is `None`.
    pub fn post_order(&self, visit: Visitor<'_, T>) -> Result<()> {
        walk("post_order", self.root(), Order::Post, visit)
    }

    /// Like [`post_order`][Self::post_order] but only over the subtree rooted
    /// at `start`. An absent `start` visits nothing.
    ///
    /// # Errors
    ///
    /// [`Error::InvalidArgument`] if `visit` is `None`.
    pub fn post_order_from(&self, start: Option<&Node<T>>, visit: Visitor<'_, T>) -> Result<()> {
        walk("post_order", start, Order::Post, visit)
    }

    /// Calls `visit` on every node breadth first, starting at the root and
    /// going left to right within a level. An empty tree visits nothing.
    ///
    /// # Errors
    ///
    /// [`Error::InvalidArgument`] if `visit` is `None`.
    pub fn level_order(&self, visit: Visitor<'_, T>) -> Result<()> {
        walk("level_order", self.root(), Order::Level, visit)
    }
}

fn walk<T>(
    name: &'static str,
    start: Option<&Node<T>>,
    order: Order,
    visit: Visitor<'_, T>,
) -> Result<()> {
    let visit = visit.ok_or(Error::InvalidArgument(name))?;
    Traverse::new(start, order).for_each(visit);
    Ok(())
}

impl<'a, T> IntoIterator for &'a Tree<T> {
    type Item = &'a T;
    type IntoIter = std::iter::Map<Traverse<'a, T>, fn(&'a Node<T>) -> &'a T>;

    fn into_iter(self) -> Self::IntoIter {
        let data: fn(&'a Node<T>) -> &'a T = Node::data;
        self.iter().map(data)
    }
}

impl<T> IntoIterator for Tree<T> {
    type Item = T;
    type IntoIter = IntoIter<T>;

    fn into_iter(mut self) -> IntoIter<T> {
        let len = self.len();
        IntoIter::new(self.take_root(), len)
    }
}
