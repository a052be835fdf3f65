//! Analysis tools for execution trees
//!
//! This module provides size estimates computed before generation and label
//! statistics over classified trees.

pub mod census;
pub mod estimate;

pub use census::LabelCensus;
pub use estimate::{LARGE_TREE_NODES, ResourceEstimate};
