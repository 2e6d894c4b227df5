//! Persistent (immutable) binary tree.
//!
//! This module provides [`BinaryTree`], a recursive binary tree that is never
//! modified after construction, together with its pure structural queries.
//!
//! # Overview
//!
//! A tree is either [`BinaryTree::Empty`] or a [`BinaryTree::Node`] holding a
//! key and two subtrees. A *leaf* is a node whose subtrees are both empty.
//!
//! | Operation           | Empty tree          | Complexity |
//! |---------------------|---------------------|------------|
//! | `key`               | `Err(EmptyTree)`    | O(1)       |
//! | `left` / `right`    | `Err(EmptyTree)`    | O(1)       |
//! | `is_empty`          | `true`              | O(1)       |
//! | `is_leaf`           | `Err(EmptyTree)`    | O(1)       |
//! | `height`            | `0`                 | O(n)       |
//! | `size`              | `0`                 | O(n)       |
//! | `sum`               | `0`                 | O(n)       |
//! | `minimum`/`maximum` | `Err(EmptyTree)`    | O(n)       |
//! | `to_display_string` | `"*"`               | O(n)       |
//! | `equals`            | string comparison   | O(n + m)   |
//!
//! # Examples
//!
//! ```rust
//! use bintree::persistent::BinaryTree;
//!
//! //     2
//! //    / \
//! //   4   7
//! //      / \
//! //     9   4
//! let tree = BinaryTree::node(
//!     2,
//!     BinaryTree::leaf(4),
//!     BinaryTree::node(7, BinaryTree::leaf(9), BinaryTree::leaf(4)),
//! );
//!
//! assert_eq!(tree.height(), 3);
//! assert_eq!(tree.size(), 5);
//! assert_eq!(tree.minimum(), Ok(&2));
//! assert_eq!(tree.maximum(), Ok(&9));
//! assert_eq!(tree, BinaryTree::example());
//! ```
//!
//! # Serialization
//!
//! Keys are written depth-first (root, left, right) separated by `" <-> "`.
//! The empty tree is written `*`. A leaf is written as its key alone, while an
//! internal node writes both subtrees, including `*` for a missing child:
//!
//! ```text
//! leaf 5                       => "5"
//! 5 with only a left leaf 3    => "5 <-> 3 <-> *"
//! ```

use std::fmt;
use std::iter::Sum;

use smallvec::{SmallVec, smallvec};

use super::{ReferenceCounter, TreeError};

/// Separator written between keys by `to_display_string`.
const SEPARATOR: &str = " <-> ";

/// Serialized form of the empty tree.
const EMPTY_MARKER: &str = "*";

/// Number of pending nodes kept inline before a worklist spills to the heap.
const WORKLIST_INLINE_CAPACITY: usize = 32;

/// A node of a [`BinaryTree`]: a key and its two subtrees.
///
/// Fields are private and there is no mutable accessor, so a node never
/// changes once built.
pub struct Node<T> {
    key: T,
    left: BinaryTree<T>,
    right: BinaryTree<T>,
}

impl<T> Node<T> {
    /// Creates a node from a key and two subtrees.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use bintree::persistent::{BinaryTree, Node};
    ///
    /// let node = Node::new(5, BinaryTree::Empty, BinaryTree::leaf(7));
    /// assert_eq!(node.key(), &5);
    /// assert!(node.left().is_empty());
    /// ```
    #[inline]
    #[must_use]
    pub const fn new(key: T, left: BinaryTree<T>, right: BinaryTree<T>) -> Self {
        Self { key, left, right }
    }

    /// Returns the key stored in this node.
    #[inline]
    #[must_use]
    pub const fn key(&self) -> &T {
        &self.key
    }

    /// Returns the left subtree.
    #[inline]
    #[must_use]
    pub const fn left(&self) -> &BinaryTree<T> {
        &self.left
    }

    /// Returns the right subtree.
    #[inline]
    #[must_use]
    pub const fn right(&self) -> &BinaryTree<T> {
        &self.right
    }

    /// Returns `true` if both subtrees are empty.
    #[inline]
    #[must_use]
    pub const fn is_leaf(&self) -> bool {
        self.left.is_empty() && self.right.is_empty()
    }
}

/// A persistent (immutable) binary tree.
///
/// Subtrees are shared through a reference counter, so [`Clone`] is O(1) and
/// building a tree from existing ones never copies them.
///
/// Equality compares serialized forms (see [`BinaryTree::equals`]).
///
/// # Examples
///
/// ```rust
/// use bintree::persistent::BinaryTree;
///
/// let empty: BinaryTree<i64> = BinaryTree::Empty;
/// assert!(empty.is_empty());
/// assert_eq!(empty.height(), 0);
/// assert_eq!(empty.to_display_string(), "*");
///
/// let leaf = BinaryTree::leaf(5);
/// assert_eq!(leaf.is_leaf(), Ok(true));
/// ```
pub enum BinaryTree<T> {
    /// The empty tree, also used for a missing child.
    Empty,
    /// A node with a key and two subtrees.
    Node(ReferenceCounter<Node<T>>),
}

impl<T> BinaryTree<T> {
    /// The empty tree.
    pub const EMPTY: Self = Self::Empty;

    /// Creates a tree whose root holds `key` with the given subtrees.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use bintree::persistent::BinaryTree;
    ///
    /// let tree = BinaryTree::node(5, BinaryTree::leaf(3), BinaryTree::Empty);
    /// assert_eq!(tree.key(), Ok(&5));
    /// assert_eq!(tree.size(), 2);
    /// ```
    #[inline]
    #[must_use]
    pub fn node(key: T, left: Self, right: Self) -> Self {
        Self::Node(ReferenceCounter::new(Node::new(key, left, right)))
    }

    /// Creates a leaf holding `key`.
    #[inline]
    #[must_use]
    pub fn leaf(key: T) -> Self {
        Self::node(key, Self::Empty, Self::Empty)
    }

    /// Returns the root node, or `None` for the empty tree.
    #[inline]
    #[must_use]
    pub fn as_node(&self) -> Option<&Node<T>> {
        match self {
            Self::Empty => None,
            Self::Node(node) => Some(&**node),
        }
    }

    fn into_shared_node(self) -> Option<ReferenceCounter<Node<T>>> {
        match self {
            Self::Empty => None,
            Self::Node(node) => Some(node),
        }
    }

    fn require_node(&self, operation: &'static str) -> Result<&Node<T>, TreeError> {
        self.as_node().ok_or_else(|| {
            tracing::trace!(operation, "binary tree precondition violated: tree is empty");
            TreeError::EmptyTree
        })
    }

    fn preorder(&self) -> PreorderNodes<'_, T> {
        PreorderNodes {
            worklist: self.as_node().into_iter().collect(),
        }
    }

    /// Returns the key at the root.
    ///
    /// # Errors
    ///
    /// Returns [`TreeError::EmptyTree`] if the tree is empty.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use bintree::persistent::{BinaryTree, TreeError};
    ///
    /// assert_eq!(BinaryTree::leaf(5).key(), Ok(&5));
    /// assert_eq!(BinaryTree::<i64>::Empty.key(), Err(TreeError::EmptyTree));
    /// ```
    #[inline]
    pub fn key(&self) -> Result<&T, TreeError> {
        self.require_node("key").map(Node::key)
    }

    /// Returns the left subtree.
    ///
    /// # Errors
    ///
    /// Returns [`TreeError::EmptyTree`] if the tree is empty.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use bintree::persistent::BinaryTree;
    ///
    /// let tree = BinaryTree::node(5, BinaryTree::leaf(3), BinaryTree::Empty);
    /// assert_eq!(tree.left().map(BinaryTree::to_display_string), Ok("3".to_string()));
    /// ```
    #[inline]
    pub fn left(&self) -> Result<&Self, TreeError> {
        self.require_node("left").map(Node::left)
    }

    /// Returns the right subtree.
    ///
    /// # Errors
    ///
    /// Returns [`TreeError::EmptyTree`] if the tree is empty.
    #[inline]
    pub fn right(&self) -> Result<&Self, TreeError> {
        self.require_node("right").map(Node::right)
    }

    /// Returns `true` if this is the empty tree.
    #[inline]
    #[must_use]
    pub const fn is_empty(&self) -> bool {
        matches!(self, Self::Empty)
    }

    /// Returns `true` if the root has no children.
    ///
    /// # Errors
    ///
    /// Returns [`TreeError::EmptyTree`] if the tree is empty: the empty tree
    /// is not a node, so it is neither a leaf nor an internal node.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use bintree::persistent::BinaryTree;
    ///
    /// assert_eq!(BinaryTree::leaf(5).is_leaf(), Ok(true));
    /// assert_eq!(BinaryTree::node(5, BinaryTree::leaf(3), BinaryTree::Empty).is_leaf(), Ok(false));
    /// assert!(BinaryTree::<i64>::Empty.is_leaf().is_err());
    /// ```
    #[inline]
    pub fn is_leaf(&self) -> Result<bool, TreeError> {
        self.require_node("is_leaf").map(Node::is_leaf)
    }

    /// Returns the number of nodes on the longest path from the root to a leaf.
    ///
    /// The empty tree has height 0 and a leaf has height 1.
    ///
    /// # Complexity
    ///
    /// O(n) time. Uses an explicit worklist, so very tall trees do not grow
    /// the call stack.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use bintree::persistent::BinaryTree;
    ///
    /// assert_eq!(BinaryTree::<i64>::Empty.height(), 0);
    /// assert_eq!(BinaryTree::example().height(), 3);
    /// ```
    #[must_use]
    pub fn height(&self) -> usize {
        let mut worklist: SmallVec<[(&Node<T>, usize); WORKLIST_INLINE_CAPACITY]> =
            self.as_node().map(|root| (root, 1)).into_iter().collect();
        let mut height = 0;

        while let Some((node, depth)) = worklist.pop() {
            height = height.max(depth);
            worklist.extend(
                [&node.left, &node.right]
                    .into_iter()
                    .filter_map(Self::as_node)
                    .map(|child| (child, depth + 1)),
            );
        }
        height
    }

    /// Returns the number of nodes in the tree.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use bintree::persistent::BinaryTree;
    ///
    /// assert_eq!(BinaryTree::<i64>::Empty.size(), 0);
    /// assert_eq!(BinaryTree::example().size(), 5);
    /// ```
    #[must_use]
    pub fn size(&self) -> usize {
        self.preorder().count()
    }

    /// Returns the sum of all keys; the empty tree sums to zero.
    ///
    /// # Panics
    ///
    /// Overflow behaves as `T`'s [`Sum`] does: for primitive integers it
    /// panics in debug builds and wraps in release builds.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use bintree::persistent::BinaryTree;
    ///
    /// assert_eq!(BinaryTree::<i64>::Empty.sum(), 0);
    /// assert_eq!(BinaryTree::example().sum(), 26);
    /// ```
    #[must_use]
    pub fn sum(&self) -> T
    where
        T: Clone + Sum<T>,
    {
        self.preorder().map(|node| node.key.clone()).sum()
    }

    /// Returns the smallest key in the tree.
    ///
    /// Empty subtrees contribute nothing to the comparison.
    ///
    /// # Errors
    ///
    /// Returns [`TreeError::EmptyTree`] if the tree is empty.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use bintree::persistent::{BinaryTree, TreeError};
    ///
    /// assert_eq!(BinaryTree::example().minimum(), Ok(&2));
    /// assert_eq!(BinaryTree::<i64>::Empty.minimum(), Err(TreeError::EmptyTree));
    /// ```
    pub fn minimum(&self) -> Result<&T, TreeError>
    where
        T: Ord,
    {
        let root = self.require_node("minimum")?;
        Ok(self.preorder().map(Node::key).fold(&root.key, Ord::min))
    }

    /// Returns the largest key in the tree.
    ///
    /// Empty subtrees contribute nothing to the comparison.
    ///
    /// # Errors
    ///
    /// Returns [`TreeError::EmptyTree`] if the tree is empty.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use bintree::persistent::BinaryTree;
    ///
    /// assert_eq!(BinaryTree::example().maximum(), Ok(&9));
    /// ```
    pub fn maximum(&self) -> Result<&T, TreeError>
    where
        T: Ord,
    {
        let root = self.require_node("maximum")?;
        Ok(self.preorder().map(Node::key).fold(&root.key, Ord::max))
    }
}

impl<T: fmt::Display> BinaryTree<T> {
    /// Serializes every key depth-first (root, left, right), separated by
    /// `" <-> "`.
    ///
    /// The empty tree is `"*"` and a leaf is its key alone. An internal node
    /// always writes both subtrees, so a missing child shows up as `"*"`.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use bintree::persistent::BinaryTree;
    ///
    /// assert_eq!(BinaryTree::example().to_display_string(), "2 <-> 4 <-> 7 <-> 9 <-> 4");
    /// assert_eq!(BinaryTree::<i64>::Empty.to_display_string(), "*");
    /// assert_eq!(BinaryTree::node(5, BinaryTree::leaf(3), BinaryTree::Empty).to_display_string(), "5 <-> 3 <-> *");
    /// ```
    #[must_use]
    pub fn to_display_string(&self) -> String {
        self.to_string()
    }

    /// Returns `true` if both trees serialize to the same string.
    ///
    /// This compares [`to_display_string`](Self::to_display_string) outputs,
    /// not shapes: two trees are equal exactly when their serializations are.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use bintree::persistent::BinaryTree;
    ///
    /// assert!(BinaryTree::example().equals(&BinaryTree::example()));
    ///
    /// let other = BinaryTree::node(2, BinaryTree::leaf(4), BinaryTree::Empty);
    /// assert!(!BinaryTree::example().equals(&other));
    /// ```
    #[must_use]
    pub fn equals(&self, other: &Self) -> bool {
        self.to_display_string() == other.to_display_string()
    }
}

impl BinaryTree<i64> {
    /// Returns the reference tree used throughout the documentation and tests.
    ///
    /// ```text
    ///     2
    ///    / \
    ///   4   7
    ///      / \
    ///     9   4
    /// ```
    ///
    /// # Examples
    ///
    /// ```rust
    /// use bintree::persistent::BinaryTree;
    ///
    /// assert_eq!(
    ///     format!("{:?}", BinaryTree::example()),
    ///     "(2, (4, (), ()), (7, (9, (), ()), (4, (), ())))"
    /// );
    /// ```
    #[must_use]
    pub fn example() -> Self {
        Self::node(
            2,
            Self::leaf(4),
            Self::node(7, Self::leaf(9), Self::leaf(4)),
        )
    }
}

// =============================================================================
// Traversal
// =============================================================================

/// Depth-first walk over the nodes of a tree, root first, then left, then
/// right.
struct PreorderNodes<'a, T> {
    worklist: SmallVec<[&'a Node<T>; WORKLIST_INLINE_CAPACITY]>,
}

impl<'a, T> Iterator for PreorderNodes<'a, T> {
    type Item = &'a Node<T>;

    fn next(&mut self) -> Option<Self::Item> {
        let node = self.worklist.pop()?;
        // Right goes first so that left is visited first.
        self.worklist.extend(
            [&node.right, &node.left]
                .into_iter()
                .filter_map(BinaryTree::as_node),
        );
        Some(node)
    }
}

// =============================================================================
// Standard Trait Implementations
// =============================================================================

impl<T> Clone for BinaryTree<T> {
    fn clone(&self) -> Self {
        match self {
            Self::Empty => Self::Empty,
            Self::Node(node) => Self::Node(ReferenceCounter::clone(node)),
        }
    }
}

impl<T> Default for BinaryTree<T> {
    #[inline]
    fn default() -> Self {
        Self::Empty
    }
}

/// Releases subtrees iteratively so that dropping a very tall tree does not
/// overflow the stack.
impl<T> Drop for Node<T> {
    fn drop(&mut self) {
        let mut pending: SmallVec<[ReferenceCounter<Self>; WORKLIST_INLINE_CAPACITY]> =
            SmallVec::new();
        pending.extend(
            [
                std::mem::take(&mut self.left),
                std::mem::take(&mut self.right),
            ]
            .into_iter()
            .filter_map(BinaryTree::into_shared_node),
        );

        while let Some(shared) = pending.pop() {
            // Still shared with another tree: that tree keeps the subtree alive.
            if let Ok(mut node) = ReferenceCounter::try_unwrap(shared) {
                pending.extend(
                    [
                        std::mem::take(&mut node.left),
                        std::mem::take(&mut node.right),
                    ]
                    .into_iter()
                    .filter_map(BinaryTree::into_shared_node),
                );
            }
        }
    }
}

impl<T: fmt::Display> fmt::Display for BinaryTree<T> {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        write_tokens(
            formatter,
            smallvec![Token::Tree(self)],
            |key, formatter| write!(formatter, "{key}"),
            push_display_tokens,
        )
    }
}

impl<T: fmt::Display> PartialEq for BinaryTree<T> {
    fn eq(&self, other: &Self) -> bool {
        self.equals(other)
    }
}

impl<T: fmt::Display> Eq for BinaryTree<T> {}

/// Formats a node as the tuple `(key, left, right)`, always on one line.
impl<T: fmt::Debug> fmt::Debug for Node<T> {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut pending = SmallVec::new();
        push_debug_node_tokens(self, &mut pending);
        write_tokens(
            formatter,
            pending,
            |key, formatter| fmt::Debug::fmt(key, formatter),
            push_debug_tokens,
        )
    }
}

/// Formats the empty tree as `()` and a node as `(key, left, right)`.
impl<T: fmt::Debug> fmt::Debug for BinaryTree<T> {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        write_tokens(
            formatter,
            smallvec![Token::Tree(self)],
            |key, formatter| fmt::Debug::fmt(key, formatter),
            push_debug_tokens,
        )
    }
}

// =============================================================================
// Formatting
// =============================================================================

/// A pending piece of formatted output.
enum Token<'a, T> {
    Text(&'static str),
    Key(&'a T),
    Tree(&'a BinaryTree<T>),
}

type TokenStack<'a, T> = SmallVec<[Token<'a, T>; WORKLIST_INLINE_CAPACITY]>;

/// Writes tokens in stack order, expanding subtrees with `expand`.
///
/// Subtrees are expanded on an explicit stack, so formatting a very tall
/// tree does not grow the call stack.
fn write_tokens<'a, T>(
    formatter: &mut fmt::Formatter<'_>,
    mut pending: TokenStack<'a, T>,
    write_key: impl Fn(&T, &mut fmt::Formatter<'_>) -> fmt::Result,
    expand: fn(&'a BinaryTree<T>, &mut TokenStack<'a, T>),
) -> fmt::Result {
    while let Some(token) = pending.pop() {
        match token {
            Token::Text(text) => formatter.write_str(text)?,
            Token::Key(key) => write_key(key, formatter)?,
            Token::Tree(tree) => expand(tree, &mut pending),
        }
    }
    Ok(())
}

// Tokens are pushed in reverse so that they pop in output order.

fn push_display_tokens<'a, T>(tree: &'a BinaryTree<T>, pending: &mut TokenStack<'a, T>) {
    match tree {
        BinaryTree::Empty => pending.push(Token::Text(EMPTY_MARKER)),
        BinaryTree::Node(node) if node.is_leaf() => pending.push(Token::Key(&node.key)),
        BinaryTree::Node(node) => pending.extend([
            Token::Tree(&node.right),
            Token::Text(SEPARATOR),
            Token::Tree(&node.left),
            Token::Text(SEPARATOR),
            Token::Key(&node.key),
        ]),
    }
}

fn push_debug_tokens<'a, T>(tree: &'a BinaryTree<T>, pending: &mut TokenStack<'a, T>) {
    match tree {
        BinaryTree::Empty => pending.push(Token::Text("()")),
        BinaryTree::Node(node) => push_debug_node_tokens(node, pending),
    }
}

fn push_debug_node_tokens<'a, T>(node: &'a Node<T>, pending: &mut TokenStack<'a, T>) {
    pending.extend([
        Token::Text(")"),
        Token::Tree(&node.right),
        Token::Text(", "),
        Token::Tree(&node.left),
        Token::Text(", "),
        Token::Key(&node.key),
        Token::Text("("),
    ]);
}

// =============================================================================
// Thread Safety
// =============================================================================

#[cfg(feature = "arc")]
static_assertions::assert_impl_all!(BinaryTree<i64>: Send, Sync);

#[cfg(not(feature = "arc"))]
static_assertions::assert_not_impl_any!(BinaryTree<i64>: Send, Sync);

// =============================================================================
// Tests
// =============================================================================
