pub mod toml_config;

use crate::core::Announcement;
use crate::utils::error::Result;
use clap::Parser;
use std::path::PathBuf;
use toml_config::{FileConfig, ResolvedConfig};

#[derive(Debug, Clone, Default, Parser)]
#[command(name = "pdbench-status")]
#[command(version)]
#[command(about = "Prints where the Prisoner's Dilemma Benchmark is being served")]
pub struct CliConfig {
    /// Optional TOML file overriding the announcement text or port
    #[arg(short, long)]
    pub config: Option<PathBuf>,

    #[arg(short, long, help = "Enable verbose output")]
    pub verbose: bool,
}

impl CliConfig {
    pub fn resolve(&self) -> Result<ResolvedConfig> {
        let file_config = match &self.config {
            Some(path) => {
                tracing::debug!("Loading configuration from: {}", path.display());
                FileConfig::from_file(path)?
            }
            None => FileConfig::default(),
        };

        Ok(file_config.apply(Announcement::default()))
    }
}
