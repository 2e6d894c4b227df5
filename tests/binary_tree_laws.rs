//! Property-based tests for BinaryTree.
//!
//! These tests verify the structural invariants that every query must
//! satisfy on arbitrary trees.

use bintree::persistent::BinaryTree;
use proptest::prelude::*;

// =============================================================================
// Strategy for generating BinaryTree
// =============================================================================

/// Generates a `BinaryTree<i64>` of bounded depth, empty subtrees included.
fn binary_tree_strategy() -> impl Strategy<Value = BinaryTree<i64>> {
    let leaf = prop_oneof![
        1 => Just(BinaryTree::Empty),
        3 => (-1_000_i64..1_000).prop_map(BinaryTree::leaf),
    ];
    leaf.prop_recursive(8, 64, 2, |inner| {
        (-1_000_i64..1_000, inner.clone(), inner)
            .prop_map(|(key, left, right)| BinaryTree::node(key, left, right))
    })
}

/// Generates a non-empty `BinaryTree<i64>`.
fn non_empty_tree() -> impl Strategy<Value = BinaryTree<i64>> {
    binary_tree_strategy().prop_filter("non-empty", |tree| !tree.is_empty())
}

/// Reference height computed by plain structural recursion.
fn recursive_height(tree: &BinaryTree<i64>) -> usize {
    tree.as_node().map_or(0, |node| {
        1 + recursive_height(node.left()).max(recursive_height(node.right()))
    })
}

proptest! {
    // =========================================================================
    // Recursive Definitions
    // =========================================================================

    #[test]
    fn prop_height_matches_recursive_definition(tree in binary_tree_strategy()) {
        prop_assert_eq!(tree.height(), recursive_height(&tree));
    }

    #[test]
    fn prop_size_of_node_is_one_plus_children(key in any::<i64>(), left in binary_tree_strategy(), right in binary_tree_strategy()) {
        let tree = BinaryTree::node(key, left.clone(), right.clone());
        prop_assert_eq!(tree.size(), 1 + left.size() + right.size());
    }

    #[test]
    fn prop_sum_of_node_is_key_plus_children(key in -1_000_i64..1_000, left in binary_tree_strategy(), right in binary_tree_strategy()) {
        let tree = BinaryTree::node(key, left.clone(), right.clone());
        prop_assert_eq!(tree.sum(), key + left.sum() + right.sum());
    }

    #[test]
    fn prop_display_of_internal_node(key in any::<i64>(), left in non_empty_tree(), right in binary_tree_strategy()) {
        let tree = BinaryTree::node(key, left.clone(), right.clone());
        prop_assert_eq!(
            tree.to_display_string(),
            format!("{key} <-> {} <-> {}", left.to_display_string(), right.to_display_string())
        );
    }

    #[test]
    fn prop_display_of_leaf_is_key(key in any::<i64>()) {
        prop_assert_eq!(BinaryTree::leaf(key).to_display_string(), key.to_string());
    }

    // =========================================================================
    // Bounds
    // =========================================================================

    #[test]
    fn prop_non_empty_tree_bounds(tree in non_empty_tree()) {
        prop_assert!(tree.height() >= 1);
        prop_assert!(tree.size() >= 1);
        prop_assert!(tree.height() <= tree.size());
        prop_assert!(tree.minimum()? <= tree.maximum()?);
    }

    #[test]
    fn prop_minimum_and_maximum_bound_root_key(tree in non_empty_tree()) {
        let key = tree.key()?;
        prop_assert!(tree.minimum()? <= key);
        prop_assert!(key <= tree.maximum()?);
    }

    #[test]
    fn prop_empty_tree_iff_height_zero(tree in binary_tree_strategy()) {
        prop_assert_eq!(tree.is_empty(), tree.height() == 0);
        prop_assert_eq!(tree.is_empty(), tree.size() == 0);
    }

    // =========================================================================
    // Equality and Purity
    // =========================================================================

    #[test]
    fn prop_equals_is_reflexive(tree in binary_tree_strategy()) {
        prop_assert!(tree.equals(&tree));
        prop_assert!(tree.equals(&tree.clone()));
    }

    #[test]
    fn prop_equals_is_display_equality(left in binary_tree_strategy(), right in binary_tree_strategy()) {
        prop_assert_eq!(
            left.equals(&right),
            left.to_display_string() == right.to_display_string()
        );
    }

    #[test]
    fn prop_queries_are_pure(tree in binary_tree_strategy()) {
        let before = format!("{tree:?}");
        prop_assert_eq!(tree.height(), tree.height());
        prop_assert_eq!(tree.size(), tree.size());
        prop_assert_eq!(tree.sum(), tree.sum());
        prop_assert_eq!(tree.to_display_string(), tree.to_display_string());
        prop_assert_eq!(tree.minimum(), tree.minimum());
        prop_assert_eq!(format!("{tree:?}"), before);
    }

    #[test]
    fn prop_subtrees_survive_parent_construction(key in any::<i64>(), left in binary_tree_strategy(), right in binary_tree_strategy()) {
        let left_before = left.to_display_string();
        let right_before = right.to_display_string();
        let tree = BinaryTree::node(key, left.clone(), right.clone());
        drop(tree);
        prop_assert_eq!(left.to_display_string(), left_before);
        prop_assert_eq!(right.to_display_string(), right_before);
    }
}
