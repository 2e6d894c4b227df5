//! Integration tests for sharing a BinaryTree across threads.
//!
//! With the `arc` feature enabled, subtrees are held behind `Arc` and a tree
//! can be read from several threads without synchronization.

#![cfg(feature = "arc")]

use bintree::persistent::BinaryTree;
use rstest::rstest;
use std::thread;

#[rstest]
fn test_concurrent_queries_on_shared_tree() {
    let tree = BinaryTree::example();

    let handles: Vec<_> = (0..4)
        .map(|_| {
            let tree_clone = tree.clone();
            thread::spawn(move || {
                (
                    tree_clone.height(),
                    tree_clone.size(),
                    tree_clone.sum(),
                    tree_clone.to_display_string(),
                )
            })
        })
        .collect();

    for handle in handles {
        let (height, size, sum, display) = handle.join().expect("Thread panicked");
        assert_eq!(height, 3);
        assert_eq!(size, 5);
        assert_eq!(sum, 26);
        assert_eq!(display, "2 <-> 4 <-> 7 <-> 9 <-> 4");
    }
}

#[rstest]
fn test_cross_thread_structural_sharing() {
    let subtree = BinaryTree::node(7, BinaryTree::leaf(9), BinaryTree::leaf(4));

    let handles: Vec<_> = (0..4_i64)
        .map(|index| {
            let subtree_clone = subtree.clone();
            thread::spawn(move || BinaryTree::node(index, BinaryTree::leaf(4), subtree_clone))
        })
        .collect();

    for (index, handle) in (0..4_i64).zip(handles) {
        let tree = handle.join().expect("Thread panicked");
        assert_eq!(tree.key(), Ok(&index));
        assert_eq!(tree.maximum(), Ok(&9));
    }

    // Original should still be unchanged
    assert_eq!(subtree.to_display_string(), "7 <-> 9 <-> 4");
}
