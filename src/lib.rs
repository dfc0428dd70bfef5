//! This crate exposes a plain, unbalanced Binary Search Tree (BST) over any
//! totally-ordered key, mostly for educational purposes.
//!
//! ## Binary Search Tree
//!
//! A Binary Search Tree is a data structure supporting operations to
//! insert and find stored keys. BSTs are typically defined recursively using
//! the notion of a `Node`. A `Node` stores the key that was inserted and will
//! sometimes have child `Node`s. The most important invariants of a BST are:
//!
//! 1. For every `Node` in a BST, all the `Node`s in its left subtree have a
//!    key less than its own key.
//! 2. For every `Node` in a BST, all the `Node`s in its right subtree have a
//!    key greater than its own key.
//!
//! > Note that some `Node`s have no children. These `Node`s are called "leaf nodes".
//!
//! Searching for keys in the tree takes `O(height)` (where `height` is defined as
//! the longest path from the root `Node` to a leaf `Node`). This tree never
//! rebalances, so its height depends entirely on insertion order: inserting
//! already-sorted keys produces a chain where `height == N`. Every walk over
//! the tree therefore keeps its own heap-allocated stack instead of recursing.
//!
//! BSTs also naturally support sorted iteration by visiting the left subtree,
//! then the subtree root, then the right subtree. See [`Tree::in_order`].
//!
//! # Examples
//!
//! ```
//! use bst::Tree;
//!
//! let tree: Tree<i32> = [56, 30, 70, 60, 40].into_iter().collect();
//!
//! assert_eq!(tree.size(), 5);
//! assert!(tree.search(&60));
//! assert_eq!(tree.pre_order().copied().collect::<Vec<_>>(), [56, 30, 40, 70, 60]);
//! assert_eq!(tree.in_order().copied().collect::<Vec<_>>(), [30, 40, 56, 60, 70]);
//! assert_eq!(tree.post_order().copied().collect::<Vec<_>>(), [40, 30, 60, 70, 56]);
//! ```

#![deny(missing_docs, clippy::clone_on_ref_ptr)]
#![forbid(unsafe_code)]

pub mod iter;
mod tree;

pub use iter::{InOrder, PostOrder, PreOrder};
pub use tree::Tree;
