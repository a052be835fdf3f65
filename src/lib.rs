//! Valency analysis of actor interleavings
//!
//! This crate provides:
//! - Generation of every interleaving of a set of actors, each acting a fixed
//!   number of times, as a tree with random outcomes at the leaves
//! - Post-order classification of nodes as final, univalent, bivalent or
//!   critical, following the bivalence argument for asynchronous consensus
//! - Size estimates, label statistics and a textual tree dump

pub mod analysis;
pub mod cli;
pub mod config;
pub mod error;
pub mod execution;
pub mod identifiers;
pub mod report;

pub use config::TreeConfig;
pub use error::{Error, Result};
pub use execution::{
    Classification, ExecutionTree, Label, LabelSet, Node, OutcomeSource, ScriptedOutcomes,
    SeededOutcomes,
};
pub use identifiers::{ActorId, ExecutionPath, Outcome};
