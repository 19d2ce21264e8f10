//! A Binary Search Tree (BST) over ordered values that is built balanced
//! and rebalanced on demand.
//!
//! ## Binary Search Tree
//!
//! A Binary Search Tree is a data structure supporting operations to
//! insert, find, and delete stored values. BSTs are typically defined
//! recursively using the notion of a `Node`. A `Node` stores a value and
//! has up to two child `Node`s. The most important invariants of a BST are:
//!
//! 1. For every `Node` in a BST, all the `Node`s in its left subtree have a
//!    value less than its own value.
//! 2. For every `Node` in a BST, all the `Node`s in its right subtree have a
//!    value greater than its own value.
//!
//! > Note that some `Node`s have no children. These `Node`s are called "leaf nodes".
//!
//! Searching for a value takes `O(height)`, so a tree is only fast while it is
//! short. A tree whose subtrees never differ in height by more than one level
//! is called "balanced" and has a height of `O(lg N)`.
//!
//! ## This tree
//!
//! [`Tree::build`] sorts and deduplicates its input and then picks the middle
//! value as the root, recursively, which always produces a balanced tree.
//! [`Tree::insert`] and [`Tree::delete`] are plain BST operations and can
//! leave the tree lopsided. [`Tree::is_balanced`] reports whether that has
//! happened and [`Tree::rebalance`] rebuilds the tree from its sorted values.
//!
//! ```
//! use balanced_bst::{Order, Tree};
//!
//! let mut tree = Tree::build(vec![3, 1, 2, 3]);
//! assert_eq!(tree.len(), 3);
//!
//! let levels: Vec<_> = tree.traverse(Order::Level).map(|n| *n.data()).collect();
//! assert_eq!(levels, [2, 1, 3]);
//!
//! tree.insert(4);
//! tree.insert(5);
//! assert!(!tree.is_balanced());
//!
//! tree.rebalance();
//! assert!(tree.is_balanced());
//! assert_eq!(tree.values().copied().collect::<Vec<_>>(), [1, 2, 3, 4, 5]);
//! ```

#![deny(missing_docs, clippy::clone_on_ref_ptr)]

mod display;
pub mod error;
pub mod node;
pub mod traverse;
pub mod tree;


pub use error::{Error, Result};
pub use node::{height, is_balanced, Node};
pub use traverse::{IntoIter, Order, Traverse, Visitor};
pub use tree::Tree;
