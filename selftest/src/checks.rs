//! The documented input/output pairs, as runnable checks.

use anyhow::{Context, ensure};
use bintree::persistent::{BinaryTree, TreeError};

/// A named check over the library API.
pub struct Check {
    pub name: &'static str,
    run: fn() -> anyhow::Result<()>,
}

/// Outcome of a run.
#[derive(Debug, Default)]
pub struct Report {
    pub passed: usize,
    pub failed: Vec<&'static str>,
}

fn empty() -> BinaryTree<i64> {
    BinaryTree::Empty
}

fn expect_empty_tree_error<T: PartialEq + std::fmt::Debug>(
    result: Result<T, TreeError>,
) -> anyhow::Result<()> {
    ensure!(
        result == Err(TreeError::EmptyTree),
        "expected an empty tree error, got {result:?}"
    );
    Ok(())
}

/// Every check, in documentation order.
pub fn all() -> Vec<Check> {
    vec![
        Check {
            name: "key",
            run: || {
                let key = BinaryTree::leaf(5).key().copied()?;
                ensure!(key == 5, "key was {key}");
                expect_empty_tree_error(empty().key())
            },
        },
        Check {
            name: "left",
            run: || {
                let tree = BinaryTree::node(5, BinaryTree::leaf(3), BinaryTree::Empty);
                let left = format!("{:?}", tree.left()?);
                ensure!(left == "(3, (), ())", "left was {left}");
                expect_empty_tree_error(empty().left().map(|_| ()))
            },
        },
        Check {
            name: "right",
            run: || {
                let tree = BinaryTree::node(5, BinaryTree::Empty, BinaryTree::leaf(7));
                let right = format!("{:?}", tree.right()?);
                ensure!(right == "(7, (), ())", "right was {right}");
                expect_empty_tree_error(empty().right().map(|_| ()))
            },
        },
        Check {
            name: "is_empty",
            run: || {
                ensure!(empty().is_empty(), "empty tree reported non-empty");
                ensure!(!BinaryTree::leaf(5).is_empty(), "leaf reported empty");
                Ok(())
            },
        },
        Check {
            name: "is_leaf",
            run: || {
                ensure!(BinaryTree::leaf(5).is_leaf()?, "leaf not reported as leaf");
                let branch = BinaryTree::node(5, BinaryTree::leaf(3), BinaryTree::Empty);
                ensure!(!branch.is_leaf()?, "branch reported as leaf");
                Ok(())
            },
        },
        Check {
            name: "example",
            run: || {
                let debug = format!("{:?}", BinaryTree::example());
                ensure!(
                    debug == "(2, (4, (), ()), (7, (9, (), ()), (4, (), ())))",
                    "example was {debug}"
                );
                Ok(())
            },
        },
        Check {
            name: "height",
            run: || {
                ensure!(empty().height() == 0, "height of empty tree");
                let height = BinaryTree::example().height();
                ensure!(height == 3, "height of example was {height}");
                Ok(())
            },
        },
        Check {
            name: "size",
            run: || {
                ensure!(empty().size() == 0, "size of empty tree");
                let size = BinaryTree::example().size();
                ensure!(size == 5, "size of example was {size}");
                Ok(())
            },
        },
        Check {
            name: "sum",
            run: || {
                ensure!(empty().sum() == 0, "sum of empty tree");
                let sum = BinaryTree::example().sum();
                ensure!(sum == 26, "sum of example was {sum}");
                Ok(())
            },
        },
        Check {
            name: "to_display_string",
            run: || {
                let display = BinaryTree::example().to_display_string();
                ensure!(display == "2 <-> 4 <-> 7 <-> 9 <-> 4", "example was {display}");
                ensure!(empty().to_display_string() == "*", "empty tree serialization");
                Ok(())
            },
        },
        Check {
            name: "minimum",
            run: || {
                let minimum = *BinaryTree::example()
                    .minimum()
                    .context("minimum of example")?;
                ensure!(minimum == 2, "minimum of example was {minimum}");
                expect_empty_tree_error(empty().minimum())
            },
        },
        Check {
            name: "maximum",
            run: || {
                let maximum = *BinaryTree::example()
                    .maximum()
                    .context("maximum of example")?;
                ensure!(maximum == 9, "maximum of example was {maximum}");
                expect_empty_tree_error(empty().maximum())
            },
        },
        Check {
            name: "equals",
            run: || {
                let example = BinaryTree::example();
                ensure!(
                    example.equals(&BinaryTree::example()),
                    "independent copies of the example differ"
                );
                let truncated = BinaryTree::node(2, BinaryTree::leaf(4), BinaryTree::Empty);
                ensure!(!example.equals(&truncated), "truncated example compared equal");
                Ok(())
            },
        },
    ]
}

/// Runs each check, logging its outcome.
pub fn run(checks: &[Check]) -> Report {
    let mut report = Report::default();
    for check in checks {
        match (check.run)() {
            Ok(()) => {
                tracing::info!(check = check.name, "ok");
                report.passed += 1;
            }
            Err(error) => {
                tracing::error!(check = check.name, "FAILED: {error:#}");
                report.failed.push(check.name);
            }
        }
    }
    report
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    fn test_all_checks_pass() {
        let checks = all();
        let report = run(&checks);
        assert!(report.failed.is_empty(), "failed: {:?}", report.failed);
        assert_eq!(report.passed, checks.len());
    }

    #[rstest]
    fn test_failing_check_is_reported() {
        let checks = [Check {
            name: "broken",
            run: || {
                ensure!(BinaryTree::<i64>::Empty.size() == 1, "size of empty tree");
                Ok(())
            },
        }];
        let report = run(&checks);
        assert_eq!(report.passed, 0);
        assert_eq!(report.failed, vec!["broken"]);
    }

    #[rstest]
    fn test_check_names_are_unique() {
        let mut names: Vec<_> = all().iter().map(|check| check.name).collect();
        let total = names.len();
        names.sort_unstable();
        names.dedup();
        assert_eq!(names.len(), total);
    }
}
