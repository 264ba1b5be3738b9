//! Fill command implementation.
//!
//! Loads an image, replays one or more clicks against it and writes the
//! result. Every click is validated before the first one is applied, so a
//! bad position leaves no half-coloured output behind.

use std::path::{Path, PathBuf};

use clap::Args;

use crate::config::Config;
use crate::error::Result;
use crate::fill::{fill_region, FillOutcome};
use crate::output::{display_path, plural, Printer};
use crate::raster::{as_buffer, load_canvas, write_image};
use crate::types::{Colour, Point};
use crate::viewport::{Click, DisplaySize, Viewport};

/// Fill regions of an image, one click at a time
#[derive(Args, Debug)]
pub struct FillArgs {
    /// Image to colour
    #[arg(required = true)]
    pub input: PathBuf,

    /// Click position as X,Y (repeat for several clicks, applied in order)
    #[arg(long = "at", required = true, value_name = "X,Y")]
    pub clicks: Vec<Click>,

    /// Fill colour as #RRGGBB
    #[arg(long, short)]
    pub colour: Colour,

    /// Output file (default: <input>.filled.png next to the input)
    #[arg(long, short)]
    pub output: Option<PathBuf>,

    /// Size the image is displayed at, as WxH; clicks are in this space
    #[arg(long, value_name = "WxH")]
    pub display: Option<DisplaySize>,

    /// Config file (default: ./inkfill.yaml if present)
    #[arg(long)]
    pub config: Option<PathBuf>,
}

/// Totals for a fill run.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct FillSummary {
    pub filled: usize,
    pub skipped: usize,
    pub pixels: usize,
}

pub fn run(args: FillArgs, printer: &Printer) -> Result<FillSummary> {
    let cwd = std::env::current_dir().unwrap_or_else(|_| PathBuf::from("."));
    let (config, config_path) = Config::discover(args.config.as_deref(), &cwd)?;
    if let Some(path) = &config_path {
        printer.info("Using", &display_path(path));
    }

    let mut canvas = load_canvas(&args.input, config.background)?;
    let (width, height) = canvas.dimensions();
    printer.status(
        "Loaded",
        &format!(
            "{} {}",
            display_path(&args.input),
            printer.dim(&format!("({}x{})", width, height))
        ),
    );

    let viewport = match args.display {
        Some(display) => Viewport::for_display(display, width, height)?,
        None => Viewport::native(width, height)?,
    };
    let seeds = args
        .clicks
        .iter()
        .map(|&click| viewport.locate(click))
        .collect::<Result<Vec<Point>>>()?;

    let mut summary = FillSummary::default();
    {
        let mut buffer = as_buffer(&mut canvas)?;
        for seed in seeds {
            match fill_region(&mut buffer, seed, args.colour, &config.policy) {
                FillOutcome::Filled { pixels } => {
                    summary.filled += 1;
                    summary.pixels += pixels;
                    let count = plural(pixels, "pixel", "pixels");
                    printer.status(
                        "Filled",
                        &format!("{} at {} with {}", count, seed, args.colour),
                    );
                }
                FillOutcome::BorderLocked => {
                    summary.skipped += 1;
                    printer.notice("Skipped", &format!("{} is on an outline", seed));
                }
            }
        }
    }

    let output = args.output.clone().unwrap_or_else(|| default_output(&args.input));
    write_image(&canvas, &output)?;
    printer.status("Wrote", &display_path(&output));

    Ok(summary)
}

/// `page.png` -> `page.filled.png` in the same directory.
fn default_output(input: &Path) -> PathBuf {
    let stem = input
        .file_stem()
        .and_then(|s| s.to_str())
        .unwrap_or("canvas");
    input.with_file_name(format!("{}.filled.png", stem))
}
