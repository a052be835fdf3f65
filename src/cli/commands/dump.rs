//! Dump command - Print the classified execution tree

use std::io::{self, Write};

use anyhow::Result;
use clap::Parser;

use super::build_labeled_tree;
use crate::{
    cli::config::TreeArgs,
    report::{RenderOptions, render_tree},
};

#[derive(Parser, Debug)]
#[command(about = "Print the classified execution tree")]
pub struct DumpArgs {
    #[command(flatten)]
    pub tree: TreeArgs,

    /// Omit label sets from the output
    #[arg(long)]
    pub no_labels: bool,

    /// Only print nodes up to this depth
    #[arg(long)]
    pub depth: Option<usize>,

    /// Hide the progress spinner
    #[arg(long)]
    pub quiet: bool,
}

pub fn execute(args: DumpArgs) -> Result<()> {
    let config = args.tree.resolve()?;
    let tree = build_labeled_tree(config, !args.quiet)?;

    let options = RenderOptions {
        show_labels: !args.no_labels,
        max_depth: args.depth,
    };
    let mut rendered = String::new();
    render_tree(tree.root(), options, &mut rendered)?;

    let mut stdout = io::stdout().lock();
    stdout.write_all(rendered.as_bytes())?;
    stdout.flush()?;
    Ok(())
}
