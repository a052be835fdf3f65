//! Census command - Summarize labels over the classified tree

use anyhow::Result;
use clap::Parser;
use serde::Serialize;

use super::build_labeled_tree;
use crate::{
    analysis::{LabelCensus, ResourceEstimate},
    cli::{
        config::TreeArgs,
        output::{format_number, print_kv, print_section, print_subsection},
    },
    config::TreeConfig,
    execution::Label,
};

#[derive(Parser, Debug)]
#[command(about = "Count labels across the classified tree")]
pub struct CensusArgs {
    #[command(flatten)]
    pub tree: TreeArgs,

    /// Emit JSON instead of a table
    #[arg(long)]
    pub json: bool,

    /// Maximum number of critical paths to list
    #[arg(long, default_value_t = 10)]
    pub show_critical: usize,
}

#[derive(Serialize)]
struct CensusReport<'a> {
    config: &'a TreeConfig,
    estimate: ResourceEstimate,
    census: &'a LabelCensus,
}

pub fn execute(args: CensusArgs) -> Result<()> {
    let config = args.tree.resolve()?;
    let estimate = ResourceEstimate::for_shape(config.actors.len(), config.budget);
    let tree = build_labeled_tree(config, !args.json)?;
    let census = LabelCensus::of(&tree);

    if args.json {
        let report = CensusReport {
            config: tree.config(),
            estimate,
            census: &census,
        };
        println!("{}", serde_json::to_string_pretty(&report)?);
        return Ok(());
    }

    let actors: String = tree.actors().iter().map(|a| a.as_char()).collect();
    print_section("Execution Tree Census");
    print_kv("Actors", &actors);
    print_kv("Budget", &tree.budget().to_string());
    print_kv("Seed", &tree.seed().to_string());
    print_kv("Nodes", &format_number(census.nodes as u128));
    print_kv("Leaves", &format_number(census.leaves as u128));
    print_kv("Max depth", &census.max_depth.to_string());
    print_kv(
        "Root decision",
        &census
            .root_decision
            .map_or_else(|| "none (bivalent)".to_string(), |v| v.to_string()),
    );

    print_subsection("Labels");
    for label in Label::ALL {
        print_kv(label.as_str(), &format_number(census.count(label) as u128));
    }

    print_subsection("Outcomes");
    for (outcome, leaves) in &census.outcome_histogram {
        print_kv(&format!("value {outcome}"), &format_number(*leaves as u128));
    }

    if !census.critical_paths.is_empty() {
        print_subsection("Critical paths");
        for path in census.critical_paths.iter().take(args.show_critical) {
            let shown = if path.is_empty() { "ε" } else { path.as_str() };
            println!("  {shown}");
        }
        let hidden = census.critical_paths.len().saturating_sub(args.show_critical);
        if hidden > 0 {
            println!("  ... and {hidden} more");
        }
    }

    Ok(())
}
