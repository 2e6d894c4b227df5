//! # bintree
//!
//! An immutable binary tree with a small family of pure structural queries.
//!
//! ## Overview
//!
//! A [`BinaryTree`](persistent::BinaryTree) is either empty or a node holding
//! a key and two child trees. Trees are never modified after construction:
//! building a bigger tree reuses the smaller ones through structural sharing.
//!
//! - **Accessors**: `key`, `left`, `right`, `is_empty`, `is_leaf`
//! - **Queries**: `height`, `size`, `sum`, `minimum`, `maximum`
//! - **Serialization**: `to_display_string` (also available through `Display`)
//! - **Equality**: `equals` (also available through `PartialEq`)
//!
//! ## Feature Flags
//!
//! - `arc`: share children through `Arc` instead of `Rc`, making trees
//!   `Send + Sync` when their keys are
//!
//! ## Example
//!
//! ```rust
//! use bintree::prelude::*;
//!
//! let tree = BinaryTree::example();
//! assert_eq!(tree.height(), 3);
//! assert_eq!(tree.size(), 5);
//! assert_eq!(tree.sum(), 26);
//! assert_eq!(tree.to_display_string(), "2 <-> 4 <-> 7 <-> 9 <-> 4");
//! ```

#![forbid(unsafe_code)]
#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![warn(clippy::nursery)]

/// Prelude module for convenient imports.
///
/// ```rust
/// use bintree::prelude::*;
/// ```
pub mod prelude {
    pub use crate::persistent::*;
}

pub mod persistent;
