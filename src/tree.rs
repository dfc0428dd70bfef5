use std::cmp::Ordering;
use std::fmt;

use crate::iter::{InOrder, PostOrder, PreOrder};

/// An unbalanced Binary Search Tree holding distinct keys. This can be used for
/// inserting keys, checking whether a key is present, and walking the keys in
/// pre-, in-, or post-order.
///
/// Inserting a key that compares equal to one already in the tree is silently
/// ignored.
///
/// # Examples
///
/// ```
/// use bst::Tree;
///
/// let mut tree = Tree::new();
///
/// // Nothing in here yet.
/// assert!(tree.is_empty());
/// assert!(!tree.search(&1));
///
/// tree.insert(1);
/// assert!(tree.search(&1));
///
/// // Inserting the same key again changes nothing.
/// tree.insert(1);
/// assert_eq!(tree.size(), 1);
/// ```
pub struct Tree<K> {
    root: Link<K>,
}

/// An owning pointer to a child subtree. `None` marks the empty spot below a leaf.
pub(crate) type Link<K> = Option<Box<Node<K>>>;

/// A `Node` owns its key and up to two children. Keys never change once the node
/// has been created.
pub(crate) struct Node<K> {
    pub(crate) key: K,
    pub(crate) left: Link<K>,
    pub(crate) right: Link<K>,
}

impl<K> Node<K> {
    fn new_boxed(key: K) -> Box<Self> {
        Box::new(Self {
            key,
            left: None,
            right: None,
        })
    }
}

impl<K> Default for Tree<K> {
    fn default() -> Self {
        Self::new()
    }
}

impl<K> Drop for Tree<K> {
    // Dropping a `Box<Node>` recursively drops its children, which would overflow the stack on
    // a long chain. Detach every child first so each node is dropped as a leaf.
    fn drop(&mut self) {
        let mut stack: Vec<Box<Node<K>>> = self.root.take().into_iter().collect();
        while let Some(mut node) = stack.pop() {
            stack.extend(node.left.take());
            stack.extend(node.right.take());
        }
    }
}

/// Replays the pre-order sequence into a new tree. A parent is always inserted
/// before its descendants so the copy has exactly the same shape. Each replayed
/// insert walks down from the root, so cloning takes `O(N * height)`.
impl<K> Clone for Tree<K>
where
    K: Ord + Clone,
{
    fn clone(&self) -> Self {
        self.pre_order().cloned().collect()
    }
}

impl<K> fmt::Debug for Tree<K>
where
    K: fmt::Debug,
{
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_set().entries(self.in_order()).finish()
    }
}

impl<K> FromIterator<K> for Tree<K>
where
    K: Ord,
{
    fn from_iter<I: IntoIterator<Item = K>>(iter: I) -> Self {
        let mut tree = Self::new();
        tree.extend(iter);
        tree
    }
}

impl<K> Extend<K> for Tree<K>
where
    K: Ord,
{
    fn extend<I: IntoIterator<Item = K>>(&mut self, iter: I) {
        for key in iter {
            self.insert(key);
        }
    }
}

impl<'a, K> IntoIterator for &'a Tree<K> {
    type Item = &'a K;
    type IntoIter = InOrder<'a, K>;

    fn into_iter(self) -> Self::IntoIter {
        self.in_order()
    }
}

impl<K> Tree<K> {
    /// Generates a new, empty `Tree`.
    pub fn new() -> Self {
        Self { root: None }
    }

    /// Returns `true` if no key has been inserted yet.
    ///
    /// # Examples
    ///
    /// ```
    /// use bst::Tree;
    ///
    /// let mut tree = Tree::new();
    /// assert!(tree.is_empty());
    ///
    /// tree.insert("a");
    /// assert!(!tree.is_empty());
    /// ```
    pub fn is_empty(&self) -> bool {
        self.root.is_none()
    }

    /// Inserts the given key into the tree. The new node always becomes a leaf; existing nodes
    /// are never moved.
    ///
    /// If a key comparing equal to `key` is already stored, nothing happens: the stored key is
    /// kept and `key` is dropped. Callers cannot tell the two cases apart.
    ///
    /// # Examples
    ///
    /// ```
    /// use bst::Tree;
    ///
    /// let mut tree = Tree::new();
    /// tree.insert(2);
    /// tree.insert(1);
    /// tree.insert(2);
    ///
    /// assert_eq!(tree.size(), 2);
    /// assert_eq!(tree.pre_order().collect::<Vec<_>>(), [&2, &1]);
    /// ```
    pub fn insert(&mut self, key: K)
    where
        K: Ord,
    {
        if self.root.is_none() {
            log::trace!("inserting root node");
        }

        let mut link = &mut self.root;
        while let Some(node) = link {
            link = match key.cmp(&node.key) {
                Ordering::Less => &mut node.left,
                Ordering::Greater => &mut node.right,
                Ordering::Equal => {
                    log::trace!("key already present, dropping duplicate insert");
                    return;
                }
            };
        }
        *link = Some(Node::new_boxed(key));
    }

    /// Returns whether a key comparing equal to `key` is stored in the tree. This follows a
    /// single root-to-leaf path so it takes `O(height)`.
    ///
    /// # Examples
    ///
    /// ```
    /// use bst::Tree;
    ///
    /// let mut tree = Tree::new();
    /// tree.insert(1);
    ///
    /// assert!(tree.search(&1));
    /// assert!(!tree.search(&42));
    /// ```
    pub fn search(&self, key: &K) -> bool
    where
        K: Ord,
    {
        let mut link = &self.root;
        while let Some(node) = link {
            link = match key.cmp(&node.key) {
                Ordering::Less => &node.left,
                Ordering::Greater => &node.right,
                Ordering::Equal => return true,
            };
        }
        false
    }

    /// Counts the nodes in the tree. No count is cached, so this walks every node.
    ///
    /// # Examples
    ///
    /// ```
    /// use bst::Tree;
    ///
    /// let tree: Tree<_> = [3, 1, 2, 3, 1].into_iter().collect();
    /// assert_eq!(tree.size(), 3);
    /// ```
    pub fn size(&self) -> usize {
        self.pre_order().count()
    }

    /// Gets the number of levels on the longest path from the root to a leaf. An empty tree has
    /// a height of 0 and a lone root has a height of 1.
    ///
    /// # Examples
    ///
    /// ```
    /// use bst::Tree;
    ///
    /// // Sorted input degenerates into a chain.
    /// let tree: Tree<_> = (1..=5).collect();
    /// assert_eq!(tree.height(), 5);
    /// ```
    pub fn height(&self) -> usize {
        let mut height = 0;
        let mut stack: Vec<(&Node<K>, usize)> =
            self.root.as_deref().map(|n| (n, 1)).into_iter().collect();
        while let Some((node, depth)) = stack.pop() {
            height = height.max(depth);
            stack.extend(node.left.as_deref().map(|n| (n, depth + 1)));
            stack.extend(node.right.as_deref().map(|n| (n, depth + 1)));
        }
        height
    }

    /// Walks the keys visiting each node before its left subtree and then its right subtree.
    /// Inserting the yielded keys into an empty tree rebuilds this exact shape.
    ///
    /// # Examples
    ///
    /// ```
    /// use bst::Tree;
    ///
    /// let tree: Tree<_> = [2, 1, 3].into_iter().collect();
    /// assert_eq!(tree.pre_order().collect::<Vec<_>>(), [&2, &1, &3]);
    /// ```
    pub fn pre_order(&self) -> PreOrder<'_, K> {
        PreOrder::new(self.root.as_deref())
    }

    /// Walks the keys visiting the left subtree, then each node, then its right subtree. This
    /// yields the keys in ascending order.
    ///
    /// # Examples
    ///
    /// ```
    /// use bst::Tree;
    ///
    /// let tree: Tree<_> = [2, 1, 3].into_iter().collect();
    /// assert_eq!(tree.in_order().collect::<Vec<_>>(), [&1, &2, &3]);
    /// ```
    pub fn in_order(&self) -> InOrder<'_, K> {
        InOrder::new(self.root.as_deref())
    }

    /// Walks the keys visiting the left subtree, then the right subtree, then each node. The
    /// root is always yielded last.
    ///
    /// # Examples
    ///
    /// ```
    /// use bst::Tree;
    ///
    /// let tree: Tree<_> = [2, 1, 3].into_iter().collect();
    /// assert_eq!(tree.post_order().collect::<Vec<_>>(), [&1, &3, &2]);
    /// ```
    pub fn post_order(&self) -> PostOrder<'_, K> {
        PostOrder::new(self.root.as_deref())
    }

    #[cfg(test)]
    pub(crate) fn root(&self) -> Option<&Node<K>> {
        self.root.as_deref()
    }
}
