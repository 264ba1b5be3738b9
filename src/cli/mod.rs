pub mod completions;
pub mod fill;
pub mod init;
pub mod probe;

use clap::{Parser, Subcommand};

/// inkfill - Border-aware flood fill for line-art images
#[derive(Parser, Debug)]
#[command(name = "inkfill")]
#[command(version, about, long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Fill regions of an image, one click at a time
    Fill(fill::FillArgs),

    /// Report the region a click would fill without writing anything
    Probe(probe::ProbeArgs),

    /// Write a default inkfill.yaml
    Init(init::InitArgs),

    /// Generate shell completions
    Completions(completions::CompletionsArgs),
}
