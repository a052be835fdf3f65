//! Common test utilities for the valency test suite.

#![allow(dead_code)]

use valency::{ExecutionTree, Label, LabelSet, Node, ScriptedOutcomes, TreeConfig};

/// First `count` letters of the alphabet as actor identifiers.
pub fn actors(count: usize) -> Vec<char> {
    ('A'..='Z').take(count).collect()
}

/// Build and classify a tree with a fixed outcome script.
pub fn scripted_tree(actors: &[char], budget: u32, script: &[usize]) -> ExecutionTree {
    let config = TreeConfig::new(actors.iter().copied()).with_budget(budget);
    let mut outcomes = ScriptedOutcomes::new(script.iter().copied());
    let mut tree = ExecutionTree::with_outcomes(config, &mut outcomes).expect("valid config");
    tree.assign_labels();
    tree
}

/// Snapshot of every node's labels, in pre-order.
pub fn label_snapshot(root: &Node) -> Vec<LabelSet> {
    root.iter().map(|node| node.labels().clone()).collect()
}

/// Check the structural label invariants of a classified tree.
///
/// Returns a description of the first violation found.
pub fn check_label_invariants(tree: &ExecutionTree) -> Result<(), String> {
    for node in tree.nodes() {
        let path = node.path().to_string();
        let labels = node.labels();
        let is_root = node.path().is_root();

        if labels.contains(Label::Initial) != is_root {
            return Err(format!("INITIAL misplaced at '{path}'"));
        }

        if node.is_leaf() {
            let expected = if is_root {
                LabelSet::from([Label::Initial, Label::Final])
            } else {
                LabelSet::from([Label::Final])
            };
            if labels != &expected {
                return Err(format!("leaf '{path}' labeled {labels}"));
            }
            continue;
        }

        let univalent = labels.contains(Label::Univalent);
        let bivalent = labels.contains(Label::Bivalent);
        if univalent == bivalent {
            return Err(format!("internal node '{path}' labeled {labels}"));
        }
        if labels.contains(Label::Final) {
            return Err(format!("internal node '{path}' marked FINAL"));
        }

        if labels.contains(Label::Critical) {
            if !bivalent {
                return Err(format!("critical node '{path}' is not bivalent"));
            }
            if node.children().iter().any(|c| c.has_label(Label::Bivalent)) {
                return Err(format!("critical node '{path}' has a bivalent child"));
            }
        } else if bivalent && node.children().iter().all(|c| !c.has_label(Label::Bivalent)) {
            return Err(format!("bivalent node '{path}' should be critical"));
        }
    }
    Ok(())
}
