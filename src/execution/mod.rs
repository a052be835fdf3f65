//! Interleaving trees and their valency classification

pub mod classifier;
pub mod generator;
pub mod node;
pub mod tree;

pub use classifier::{Classification, classify, decision_value, reachable_outcomes};
pub use generator::{OutcomeSource, ScriptedOutcomes, SeededOutcomes, generate};
pub use node::{Label, LabelSet, Node, Nodes};
pub use tree::ExecutionTree;
