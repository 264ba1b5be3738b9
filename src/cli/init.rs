//! Init command implementation.
//!
//! Writes an `inkfill.yaml` holding the default background and thresholds,
//! ready to be tuned for a particular line-art style.

use std::fs;
use std::path::PathBuf;

use clap::Args;

use crate::config::{Config, CONFIG_FILENAME};
use crate::error::{FillError, Result};
use crate::output::{display_path, Printer};

/// Write a default inkfill.yaml
#[derive(Args, Debug)]
pub struct InitArgs {
    /// Directory to write into (default: current directory)
    #[arg(default_value = ".")]
    pub path: PathBuf,

    /// Overwrite an existing inkfill.yaml
    #[arg(long)]
    pub force: bool,
}

const HEADER: &str = "\
# inkfill configuration
#
# background: painted under transparent pixels before filling
# policy.opaque_alpha: alpha above this counts as opaque
# policy.dark_channel: R, G and B all below this counts as dark
#   (opaque + dark = outline, never filled)
# policy.tolerance: channels closer than this belong to the same region
";

pub fn run(args: InitArgs, printer: &Printer) -> Result<()> {
    let config_path = args.path.join(CONFIG_FILENAME);

    if config_path.exists() && !args.force {
        return Err(FillError::Io {
            path: config_path,
            message: format!("{} already exists (use --force to overwrite)", CONFIG_FILENAME),
        });
    }

    let yaml = format!("{}{}", HEADER, Config::default().to_yaml()?);

    fs::write(&config_path, &yaml).map_err(|e| FillError::Io {
        path: config_path.clone(),
        message: format!("Failed to write config: {}", e),
    })?;

    printer.status("Created", &display_path(&config_path));

    Ok(())
}
