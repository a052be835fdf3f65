//! Scenario tests for generation and classification of execution trees

mod common;

use std::collections::HashSet;

use common::{actors, check_label_invariants, label_snapshot, scripted_tree};
use valency::{
    Classification, Error, ExecutionTree, Label, LabelSet, Outcome, TreeConfig,
    analysis::{LabelCensus, ResourceEstimate},
};

mod two_actors_one_step {
    use super::*;

    #[test]
    fn produces_both_interleavings() {
        let tree = ExecutionTree::new(['A', 'B'], 1, 0).unwrap();
        assert_eq!(tree.root().children().len(), 2);

        let paths: Vec<String> = tree.leaves().map(|l| l.path().to_string()).collect();
        assert_eq!(paths, vec!["AB", "BA"]);
    }

    #[test]
    fn agreeing_leaves_make_univalent_root() {
        let tree = scripted_tree(&['A', 'B'], 1, &[1, 1]);
        assert_eq!(
            tree.root().labels(),
            &LabelSet::from([Label::Initial, Label::Univalent])
        );
        assert_eq!(tree.decision_value(), Some(Outcome::new(1)));
        check_label_invariants(&tree).unwrap();
    }

    #[test]
    fn disagreeing_leaves_make_critical_root() {
        let tree = scripted_tree(&['A', 'B'], 1, &[0, 1]);
        assert_eq!(
            tree.root().labels(),
            &LabelSet::from([Label::Initial, Label::Bivalent, Label::Critical])
        );
        assert_eq!(tree.decision_value(), None);
        for child in tree.root().children() {
            assert!(child.has_label(Label::Univalent));
        }
        check_label_invariants(&tree).unwrap();
    }

    #[test]
    fn seeds_reach_both_root_classifications() {
        let mut seen_univalent = false;
        let mut seen_critical = false;

        for seed in 0..64 {
            let mut tree = ExecutionTree::new(['A', 'B'], 1, seed).unwrap();
            match tree.assign_labels() {
                Classification::Univalent(_) => seen_univalent = true,
                Classification::Bivalent { critical } => {
                    assert!(critical, "root with two leaf chains is critical when bivalent");
                    seen_critical = true;
                }
                Classification::Final(_) => panic!("root has children"),
            }
            check_label_invariants(&tree).unwrap();
        }

        assert!(seen_univalent, "no seed produced agreeing outcomes");
        assert!(seen_critical, "no seed produced disagreeing outcomes");
    }
}

#[test]
fn single_actor_forms_univalent_chain() {
    let mut tree = ExecutionTree::new(['A'], 2, 17).unwrap();
    tree.assign_labels();

    let root = tree.root();
    assert_eq!(root.children().len(), 1);
    let middle = &root.children()[0];
    assert_eq!(middle.path().to_string(), "A");
    assert_eq!(middle.children().len(), 1);
    let leaf = &middle.children()[0];
    assert_eq!(leaf.path().to_string(), "AA");
    assert!(leaf.is_leaf());

    assert_eq!(
        root.labels(),
        &LabelSet::from([Label::Initial, Label::Univalent])
    );
    assert_eq!(root.decision_value(), leaf.outcome());
    assert_eq!(leaf.labels(), &LabelSet::from([Label::Final]));
}

#[test]
fn invalid_inputs_raise_invalid_configuration() {
    let empty: Vec<char> = Vec::new();
    assert!(matches!(
        ExecutionTree::new(empty, 1, 0),
        Err(Error::InvalidConfiguration { .. })
    ));
    assert!(matches!(
        ExecutionTree::new(['A', 'B'], 0, 0),
        Err(Error::InvalidConfiguration { .. })
    ));
    assert!(matches!(
        ExecutionTree::new(['A', 'A'], 1, 0),
        Err(Error::InvalidConfiguration { .. })
    ));
}

#[test]
fn leaf_count_is_multinomial() {
    for (count, budget, expected) in [(1, 3, 1), (2, 2, 6), (3, 1, 6), (2, 3, 20), (3, 2, 90)] {
        let tree = ExecutionTree::new(actors(count), budget, 1).unwrap();
        let leaves: Vec<String> = tree.leaves().map(|l| l.path().to_string()).collect();
        assert_eq!(leaves.len(), expected, "{count} actors x {budget}");

        let distinct: HashSet<&String> = leaves.iter().collect();
        assert_eq!(distinct.len(), expected);
        for leaf in tree.leaves() {
            for actor in tree.actors() {
                assert_eq!(leaf.path().count_of(*actor), budget as usize);
            }
        }

        let estimate = ResourceEstimate::for_shape(count, budget);
        assert_eq!(estimate.leaves, Some(expected as u128));
        assert_eq!(estimate.nodes, Some(tree.nodes().count() as u128));
    }
}

#[test]
fn resource_use_grows_combinatorially() {
    let node_counts: Vec<u128> = (1..=4)
        .map(|budget| {
            ResourceEstimate::for_shape(3, budget)
                .nodes
                .expect("fits in u128")
        })
        .collect();
    for pair in node_counts.windows(2) {
        assert!(pair[1] > pair[0] * 10, "growth too slow: {node_counts:?}");
    }
    assert!(ResourceEstimate::for_shape(5, 5).is_large());
}

#[test]
fn decision_value_is_stable_across_classification() {
    let config = TreeConfig::new(['A', 'B', 'C']).with_budget(2).with_seed(21);
    let mut tree = ExecutionTree::from_config(config).unwrap();

    let before: Vec<Option<Outcome>> = tree.nodes().map(|n| n.decision_value()).collect();
    let again: Vec<Option<Outcome>> = tree.nodes().map(|n| n.decision_value()).collect();
    assert_eq!(before, again);

    tree.assign_labels();
    let after: Vec<Option<Outcome>> = tree.nodes().map(|n| n.decision_value()).collect();
    assert_eq!(before, after);

    for (node, value) in tree.nodes().zip(&after) {
        let univalent_like = node.has_label(Label::Univalent) || node.has_label(Label::Final);
        assert_eq!(univalent_like, value.is_some(), "at '{}'", node.path());
    }
}

#[test]
fn assigning_labels_twice_matches_once() {
    let mut tree = ExecutionTree::new(['A', 'B', 'C'], 2, 5).unwrap();
    tree.assign_labels();
    let once = label_snapshot(tree.root());
    let census_once = LabelCensus::of(&tree);

    tree.assign_labels();
    assert_eq!(label_snapshot(tree.root()), once);
    assert_eq!(LabelCensus::of(&tree), census_once);
}

#[test]
fn same_seed_reproduces_tree() {
    let build = |seed| {
        let mut tree = ExecutionTree::new(['A', 'B'], 3, seed).unwrap();
        tree.assign_labels();
        let outcomes: Vec<_> = tree.leaves().map(|l| l.outcome()).collect();
        (outcomes, label_snapshot(tree.root()))
    };
    assert_eq!(build(42), build(42));
}

#[test]
fn larger_trees_satisfy_label_invariants() {
    for seed in [0, 1, 2, 3] {
        let mut tree = ExecutionTree::new(['A', 'B', 'C'], 2, seed).unwrap();
        tree.assign_labels();
        check_label_invariants(&tree).unwrap();

        let census = LabelCensus::of(&tree);
        assert_eq!(census.count(Label::Final), census.leaves);
        assert_eq!(
            census.count(Label::Univalent) + census.count(Label::Bivalent),
            census.internal
        );
        assert_eq!(census.critical_paths.len(), census.count(Label::Critical));
    }
}
