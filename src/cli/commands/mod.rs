//! Subcommands of the valency CLI

pub mod census;
pub mod dump;

use anyhow::Result;
use tracing::info;

use crate::{
    analysis::ResourceEstimate, cli::output::create_spinner, config::TreeConfig,
    execution::ExecutionTree,
};

/// Generate and classify the tree for `config`, showing a spinner when the
/// tree is large.
pub(crate) fn build_labeled_tree(config: TreeConfig, progress: bool) -> Result<ExecutionTree> {
    let estimate = ResourceEstimate::for_shape(config.actors.len(), config.budget);
    let spinner = if progress && estimate.is_large() {
        Some(create_spinner(&format!(
            "Generating {} nodes...",
            estimate.describe_nodes()
        ))?)
    } else {
        None
    };

    let mut tree = ExecutionTree::from_config(config)?;
    if let Some(pb) = &spinner {
        pb.set_message("Classifying...");
    }
    let classification = tree.assign_labels();
    if let Some(pb) = spinner {
        pb.finish_and_clear();
    }

    info!(
        actors = tree.actors().len(),
        budget = tree.budget(),
        seed = tree.seed(),
        ?classification,
        "tree ready"
    );
    Ok(tree)
}
