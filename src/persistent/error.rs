//! Error types for binary tree operations.

/// Represents a precondition violation on a [`BinaryTree`](super::BinaryTree).
///
/// Every operation that needs a node (`key`, `left`, `right`, `is_leaf`,
/// `minimum`, `maximum`) returns this error when it is given the empty tree.
/// No default value is ever substituted.
///
/// # Examples
///
/// ```rust
/// use bintree::persistent::{BinaryTree, TreeError};
///
/// let empty: BinaryTree<i64> = BinaryTree::Empty;
/// assert_eq!(empty.key(), Err(TreeError::EmptyTree));
/// assert_eq!(format!("{}", TreeError::EmptyTree), "the binary tree is empty");
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, thiserror::Error)]
pub enum TreeError {
    /// The tree was empty where a node was required.
    #[error("the binary tree is empty")]
    EmptyTree,
}
