//! Probe command implementation.
//!
//! Reports what a click would do without writing anything: whether the
//! seed is on an outline, and how large the region is.

use std::path::PathBuf;

use clap::Args;
use serde::Serialize;

use crate::config::Config;
use crate::error::{FillError, Result};
use crate::fill::{probe, RegionReport};
use crate::output::{display_path, plural, Printer};
use crate::raster::{as_buffer, load_canvas};
use crate::viewport::{Click, DisplaySize, Viewport};

/// Report the region a click would fill without writing anything
#[derive(Args, Debug)]
pub struct ProbeArgs {
    /// Image to inspect
    #[arg(required = true)]
    pub input: PathBuf,

    /// Click position as X,Y (repeatable)
    #[arg(long = "at", required = true, value_name = "X,Y")]
    pub clicks: Vec<Click>,

    /// Size the image is displayed at, as WxH; clicks are in this space
    #[arg(long, value_name = "WxH")]
    pub display: Option<DisplaySize>,

    /// Config file (default: ./inkfill.yaml if present)
    #[arg(long)]
    pub config: Option<PathBuf>,

    /// Print JSON to stdout instead of status lines
    #[arg(long)]
    pub json: bool,
}

/// Serializable form of a region report.
#[derive(Debug, Serialize, PartialEq, Eq)]
pub struct ProbeEntry {
    pub x: u32,
    pub y: u32,
    pub colour: String,
    pub border: bool,
    pub pixels: usize,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub bounds: Option<[u32; 4]>,
}

impl From<&RegionReport> for ProbeEntry {
    fn from(report: &RegionReport) -> Self {
        Self {
            x: report.seed.x,
            y: report.seed.y,
            colour: report.seed_colour.to_string(),
            border: report.border_locked,
            pixels: report.pixels,
            bounds: report
                .bounds
                .map(|b| [b.min.x, b.min.y, b.width(), b.height()]),
        }
    }
}

pub fn run(args: ProbeArgs, printer: &Printer) -> Result<Vec<ProbeEntry>> {
    let cwd = std::env::current_dir().unwrap_or_else(|_| PathBuf::from("."));
    let (config, _) = Config::discover(args.config.as_deref(), &cwd)?;

    let mut canvas = load_canvas(&args.input, config.background)?;
    let (width, height) = canvas.dimensions();
    let viewport = match args.display {
        Some(display) => Viewport::for_display(display, width, height)?,
        None => Viewport::native(width, height)?,
    };

    let buffer = as_buffer(&mut canvas)?;
    let mut entries = Vec::with_capacity(args.clicks.len());
    for &click in &args.clicks {
        let seed = viewport.locate(click)?;
        let report = probe(&buffer, seed, &config.policy);

        if !args.json {
            if report.border_locked {
                printer.notice(
                    "Outline",
                    &format!("{} {} in {}", seed, report.seed_colour, display_path(&args.input)),
                );
            } else {
                printer.info(
                    "Region",
                    &format!(
                        "{} {} {}",
                        seed,
                        report.seed_colour,
                        printer.dim(&format!("({})", plural(report.pixels, "pixel", "pixels")))
                    ),
                );
            }
        }
        entries.push(ProbeEntry::from(&report));
    }

    if args.json {
        let json = serde_json::to_string_pretty(&entries).map_err(|e| FillError::Parse {
            message: format!("Failed to serialize report: {}", e),
            help: None,
        })?;
        println!("{}", json);
    }

    Ok(entries)
}
