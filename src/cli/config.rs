//! Tree configuration shared across CLI commands

use std::path::PathBuf;

use anyhow::{Context, Result, bail};
use clap::Args;

use crate::{config::TreeConfig, identifiers::parse_actors};

/// Flags describing which tree to build
#[derive(Args, Debug, Clone, Default)]
pub struct TreeArgs {
    /// Actor identifiers, one character each (e.g. "ABC" or "A,B,C")
    #[arg(long, short = 'a')]
    pub actors: Option<String>,

    /// Number of actions each actor performs
    #[arg(long, short = 'n')]
    pub budget: Option<u32>,

    /// Random seed for leaf outcomes
    #[arg(long, short = 's')]
    pub seed: Option<u64>,

    /// JSON configuration file; flags override its values
    #[arg(long, short = 'c')]
    pub config: Option<PathBuf>,
}

impl TreeArgs {
    /// Merge the configuration file (if any) with command-line flags.
    pub fn resolve(&self) -> Result<TreeConfig> {
        let mut config = match &self.config {
            Some(path) => TreeConfig::from_json_file(path)
                .with_context(|| format!("loading configuration from {}", path.display()))?,
            None => TreeConfig::new(Vec::<char>::new()),
        };

        if let Some(actors) = &self.actors {
            config.actors = parse_actors(actors);
        }
        if let Some(budget) = self.budget {
            config.budget = budget;
        }
        if let Some(seed) = self.seed {
            config.seed = seed;
        }

        if config.actors.is_empty() {
            bail!("No actors given. Use --actors (e.g. --actors AB) or a configuration file");
        }
        config.validate()?;
        Ok(config)
    }
}
