//! Lazy depth-first walks over a [`Tree`](crate::Tree).
//!
//! Each iterator borrows the tree and keeps its own stack of pending nodes, so
//! memory use is bounded by the tree's height and a degenerate chain cannot
//! overflow the call stack. Calling the traversal method again starts a fresh
//! walk from the root.
//!
//! # Examples
//!
//! ```
//! use bst::Tree;
//!
//! let tree: Tree<_> = [2, 1, 3].into_iter().collect();
//!
//! let mut walk = tree.in_order();
//! assert_eq!(walk.next(), Some(&1));
//!
//! // A new walk restarts from the smallest key.
//! assert_eq!(tree.in_order().next(), Some(&1));
//! assert_eq!(walk.collect::<Vec<_>>(), [&2, &3]);
//! ```

use std::iter::FusedIterator;

use crate::tree::Node;

/// Iterator over a tree's keys in pre-order (node, left, right).
///
/// Created by [`Tree::pre_order`](crate::Tree::pre_order).
pub struct PreOrder<'a, K> {
    stack: Vec<&'a Node<K>>,
}

/// Manual implementation of `Clone` so `K` doesn't need to be `Clone` just to copy the
/// references on the stack.
impl<K> Clone for PreOrder<'_, K> {
    fn clone(&self) -> Self {
        Self {
            stack: self.stack.clone(),
        }
    }
}

impl<'a, K> PreOrder<'a, K> {
    pub(crate) fn new(root: Option<&'a Node<K>>) -> Self {
        Self {
            stack: root.into_iter().collect(),
        }
    }
}

impl<'a, K> Iterator for PreOrder<'a, K> {
    type Item = &'a K;

    fn next(&mut self) -> Option<Self::Item> {
        let node = self.stack.pop()?;
        // Right goes on first so the left subtree is finished before it.
        self.stack.extend(node.right.as_deref());
        self.stack.extend(node.left.as_deref());
        Some(&node.key)
    }
}

impl<K> FusedIterator for PreOrder<'_, K> {}

/// Iterator over a tree's keys in in-order (left, node, right), i.e. ascending.
///
/// Created by [`Tree::in_order`](crate::Tree::in_order).
pub struct InOrder<'a, K> {
    /// Nodes whose left subtree is being walked. The top is the next node to yield.
    stack: Vec<&'a Node<K>>,
}

impl<K> Clone for InOrder<'_, K> {
    fn clone(&self) -> Self {
        Self {
            stack: self.stack.clone(),
        }
    }
}

impl<'a, K> InOrder<'a, K> {
    pub(crate) fn new(root: Option<&'a Node<K>>) -> Self {
        let mut iter = Self { stack: Vec::new() };
        iter.push_left_spine(root);
        iter
    }

    /// Pushes `node` and every left descendant reached by following left children.
    fn push_left_spine(&mut self, mut node: Option<&'a Node<K>>) {
        while let Some(n) = node {
            self.stack.push(n);
            node = n.left.as_deref();
        }
    }
}

impl<'a, K> Iterator for InOrder<'a, K> {
    type Item = &'a K;

    fn next(&mut self) -> Option<Self::Item> {
        let node = self.stack.pop()?;
        self.push_left_spine(node.right.as_deref());
        Some(&node.key)
    }
}

impl<K> FusedIterator for InOrder<'_, K> {}

/// A pending step of a post-order walk.
enum Visit<'a, K> {
    /// Both subtrees still need to be walked before the node.
    Expand(&'a Node<K>),
    /// Both subtrees are done, the node itself is next.
    Emit(&'a Node<K>),
}

impl<K> Clone for Visit<'_, K> {
    fn clone(&self) -> Self {
        *self
    }
}
impl<K> Copy for Visit<'_, K> {}

/// Iterator over a tree's keys in post-order (left, right, node).
///
/// Created by [`Tree::post_order`](crate::Tree::post_order).
pub struct PostOrder<'a, K> {
    stack: Vec<Visit<'a, K>>,
}

impl<K> Clone for PostOrder<'_, K> {
    fn clone(&self) -> Self {
        Self {
            stack: self.stack.clone(),
        }
    }
}

impl<'a, K> PostOrder<'a, K> {
    pub(crate) fn new(root: Option<&'a Node<K>>) -> Self {
        Self {
            stack: root.map(Visit::Expand).into_iter().collect(),
        }
    }
}

impl<'a, K> Iterator for PostOrder<'a, K> {
    type Item = &'a K;

    fn next(&mut self) -> Option<Self::Item> {
        loop {
            match self.stack.pop()? {
                Visit::Emit(node) => return Some(&node.key),
                Visit::Expand(node) => {
                    // Pushed in reverse: the node waits under its right subtree, which waits
                    // under its left subtree.
                    self.stack.push(Visit::Emit(node));
                    self.stack.extend(node.right.as_deref().map(Visit::Expand));
                    self.stack.extend(node.left.as_deref().map(Visit::Expand));
                }
            }
        }
    }
}

impl<K> FusedIterator for PostOrder<'_, K> {}
