//! Persistent (immutable) binary tree.
//!
//! This module provides [`BinaryTree`], a recursively defined binary tree
//! whose nodes are never modified once built:
//!
//! - [`BinaryTree`]: the tree value, either `Empty` or a `Node`
//! - [`Node`]: a key together with its left and right subtrees
//! - [`TreeError`]: the precondition violation returned when an operation
//!   that needs a node receives the empty tree
//!
//! # Structural Sharing
//!
//! Children are held behind a reference counter, so building a new tree out
//! of existing ones never copies them:
//!
//! ```rust
//! use bintree::persistent::BinaryTree;
//!
//! let left = BinaryTree::leaf(4);
//! let tree = BinaryTree::node(2, left.clone(), BinaryTree::Empty);
//!
//! // `left` is still usable and unchanged
//! assert_eq!(left.to_display_string(), "4");
//! assert_eq!(tree.to_display_string(), "2 <-> 4 <-> *");
//! ```

// =============================================================================
// Reference Counter Type Alias
// =============================================================================

/// Reference-counted smart pointer type.
///
/// When the `arc` feature is enabled, this is `std::sync::Arc`,
/// which is thread-safe but has slightly higher overhead.
///
/// When the `arc` feature is disabled (default), this is `std::rc::Rc`,
/// which is faster but not thread-safe.
#[cfg(feature = "arc")]
pub(crate) type ReferenceCounter<T> = std::sync::Arc<T>;

#[cfg(not(feature = "arc"))]
pub(crate) type ReferenceCounter<T> = std::rc::Rc<T>;

mod error;
mod tree;

pub use error::TreeError;
pub use tree::BinaryTree;
pub use tree::Node;

// =============================================================================
// Tests
// =============================================================================
