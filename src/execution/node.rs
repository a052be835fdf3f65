//! Tree nodes and semantic labels

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::identifiers::{ExecutionPath, Outcome};

/// Semantic tag attached to a node.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum Label {
    /// The root of the tree
    Initial,
    /// A completed execution
    Final,
    /// Every reachable completion agrees on one decision value
    Univalent,
    /// Reachable completions disagree
    Bivalent,
    /// Bivalent, with no bivalent child
    Critical,
}

impl Label {
    pub const ALL: [Label; 5] = [
        Label::Initial,
        Label::Final,
        Label::Univalent,
        Label::Bivalent,
        Label::Critical,
    ];

    pub fn as_str(self) -> &'static str {
        match self {
            Label::Initial => "INITIAL",
            Label::Final => "FINAL",
            Label::Univalent => "UNIVALENT",
            Label::Bivalent => "BIVALENT",
            Label::Critical => "CRITICAL",
        }
    }

    /// Labels assigned by classification, as opposed to at construction.
    pub fn is_derived(self) -> bool {
        !matches!(self, Label::Initial)
    }
}

impl fmt::Display for Label {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Insertion-ordered set of labels.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct LabelSet(Vec<Label>);

impl LabelSet {
    pub fn new() -> Self {
        Self(Vec::new())
    }

    /// Add a label, returning `false` if it was already present.
    pub fn insert(&mut self, label: Label) -> bool {
        if self.contains(label) {
            return false;
        }
        self.0.push(label);
        true
    }

    pub fn contains(&self, label: Label) -> bool {
        self.0.contains(&label)
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = Label> + '_ {
        self.0.iter().copied()
    }

    /// Drop every label produced by a previous classification pass.
    pub(crate) fn clear_derived(&mut self) {
        self.0.retain(|label| !label.is_derived());
    }
}

impl fmt::Display for LabelSet {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("[")?;
        for (i, label) in self.0.iter().enumerate() {
            if i > 0 {
                f.write_str(", ")?;
            }
            write!(f, "{label}")?;
        }
        f.write_str("]")
    }
}

impl<const N: usize> From<[Label; N]> for LabelSet {
    fn from(labels: [Label; N]) -> Self {
        let mut set = LabelSet::new();
        for label in labels {
            set.insert(label);
        }
        set
    }
}

#[derive(Debug, Clone)]
pub(crate) enum Body {
    Leaf(Outcome),
    Branch(Vec<Node>),
}

/// A position in the execution tree.
///
/// Leaves carry the outcome of a completed execution; internal nodes carry
/// one child per actor that still had budget left at this position.
#[derive(Debug, Clone)]
pub struct Node {
    path: ExecutionPath,
    pub(crate) body: Body,
    pub(crate) labels: LabelSet,
}

impl Node {
    pub(crate) fn leaf(path: ExecutionPath, outcome: Outcome) -> Self {
        Self {
            path,
            body: Body::Leaf(outcome),
            labels: LabelSet::new(),
        }
    }

    pub(crate) fn branch(path: ExecutionPath, children: Vec<Node>) -> Self {
        debug_assert!(!children.is_empty(), "internal nodes have children");
        Self {
            path,
            body: Body::Branch(children),
            labels: LabelSet::new(),
        }
    }

    pub fn path(&self) -> &ExecutionPath {
        &self.path
    }

    /// Outcome stored on a leaf; `None` for internal nodes.
    pub fn outcome(&self) -> Option<Outcome> {
        match self.body {
            Body::Leaf(outcome) => Some(outcome),
            Body::Branch(_) => None,
        }
    }

    pub fn children(&self) -> &[Node] {
        match &self.body {
            Body::Leaf(_) => &[],
            Body::Branch(children) => children,
        }
    }

    pub fn is_leaf(&self) -> bool {
        matches!(self.body, Body::Leaf(_))
    }

    pub fn labels(&self) -> &LabelSet {
        &self.labels
    }

    pub fn has_label(&self, label: Label) -> bool {
        self.labels.contains(label)
    }

    /// Unique decision value reachable from this node, if there is one.
    ///
    /// See [`crate::execution::classifier::decision_value`].
    pub fn decision_value(&self) -> Option<Outcome> {
        super::classifier::decision_value(self)
    }

    /// Iterate over this node and all descendants in pre-order.
    pub fn iter(&self) -> Nodes<'_> {
        Nodes { stack: vec![self] }
    }

    /// Iterate over the leaves below (or at) this node, left to right.
    pub fn leaves(&self) -> impl Iterator<Item = &Node> {
        self.iter().filter(|node| node.is_leaf())
    }
}

/// Pre-order iterator over a subtree.
pub struct Nodes<'a> {
    stack: Vec<&'a Node>,
}

impl<'a> Iterator for Nodes<'a> {
    type Item = &'a Node;

    fn next(&mut self) -> Option<Self::Item> {
        let node = self.stack.pop()?;
        self.stack.extend(node.children().iter().rev());
        Some(node)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample() -> Node {
        Node::branch(
            ExecutionPath::root(),
            vec![
                Node::leaf("A".into(), Outcome::new(0)),
                Node::branch("B".into(), vec![Node::leaf("BA".into(), Outcome::new(1))]),
            ],
        )
    }

    #[test]
    fn label_set_rejects_duplicates_and_keeps_order() {
        let mut labels = LabelSet::new();
        assert!(labels.insert(Label::Initial));
        assert!(labels.insert(Label::Bivalent));
        assert!(!labels.insert(Label::Initial));
        assert_eq!(labels.len(), 2);
        assert_eq!(labels.to_string(), "[INITIAL, BIVALENT]");

        labels.clear_derived();
        assert_eq!(labels, LabelSet::from([Label::Initial]));
    }

    #[test]
    fn preorder_iteration_visits_every_node() {
        let root = sample();
        let paths: Vec<String> = root.iter().map(|node| node.path().to_string()).collect();
        assert_eq!(paths, vec!["", "A", "B", "BA"]);

        let leaves: Vec<_> = root.leaves().map(|node| node.outcome()).collect();
        assert_eq!(leaves, vec![Some(Outcome::new(0)), Some(Outcome::new(1))]);
    }

    #[test]
    fn outcome_is_present_only_on_leaves() {
        let root = sample();
        assert!(!root.is_leaf());
        assert_eq!(root.outcome(), None);
        assert_eq!(root.children().len(), 2);
        assert!(root.children()[0].children().is_empty());
    }
}
