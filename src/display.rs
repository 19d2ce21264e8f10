//! Text diagrams of trees.
//!
//! The tree is drawn on its side with the root on the left and larger values
//! towards the top:
//!
//! ```text
//! │   ┌── 3
//! └── 2
//!     └── 1
//! ```

use std::fmt;

use crate::node::Node;
use crate::tree::Tree;

impl<T: fmt::Display> fmt::Display for Tree<T> {
    /// Draws the whole tree. An empty tree draws nothing.
    ///
    /// # Examples
    ///
    /// ```
    /// use balanced_bst::Tree;
    ///
    /// let tree = Tree::build(vec![1, 2, 3]);
    ///
    /// assert_eq!(tree.to_string(), "│   ┌── 3\n└── 2\n    └── 1\n");
    /// ```
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.root() {
            Some(root) => fmt::Display::fmt(root, f),
            None => Ok(()),
        }
    }
}

impl<T: fmt::Display> fmt::Display for Node<T> {
    /// Draws the subtree rooted at this node.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        draw(f, self, &mut String::new(), true)
    }
}

/// Draws `node` and its subtrees with every line starting with `prefix`.
/// The right subtree goes above the node and the left subtree below so that
/// reading top to bottom gives descending values.
///
/// `prefix` is grown and shrunk in place while recursing.
fn draw<T: fmt::Display>(
    f: &mut fmt::Formatter<'_>,
    node: &Node<T>,
    prefix: &mut String,
    is_left: bool,
) -> fmt::Result {
    if let Some(right) = node.right() {
        with_extension(prefix, if is_left { "│   " } else { "    " }, |prefix| {
            draw(f, right, prefix, false)
        })?;
    }

    let connector = if is_left { "└── " } else { "┌── " };
    writeln!(f, "{prefix}{connector}{}", node.data())?;

    if let Some(left) = node.left() {
        with_extension(prefix, if is_left { "    " } else { "│   " }, |prefix| {
            draw(f, left, prefix, true)
        })?;
    }

    Ok(())
}

fn with_extension<R>(prefix: &mut String, extension: &str, f: impl FnOnce(&mut String) -> R) -> R {
    let len = prefix.len();
    prefix.push_str(extension);
    let result = f(prefix);
    prefix.truncate(len);
    result
}
