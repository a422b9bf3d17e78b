//! `lithophane`: convert an image into a printable STL.
//!
//! ```text
//! lithophane photo.jpg -w 100 -d 3 -o 0.5 -f 2
//! lithophane photo.jpg --cylinder --ascii --output mug.stl
//! ```
//!
//! Logging goes to stderr; set `RUST_LOG` or pass `-v` for stage details.

use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Parser;
use litho::prelude::*;
use litho::default_output_path;
use tracing::info;
use tracing_subscriber::EnvFilter;

/// Convert an image into a lithophane STL
#[derive(Parser)]
#[command(name = "lithophane")]
#[command(about = "Generate a lithophane STL from an image", long_about = None)]
#[command(version)]
struct Cli {
    /// Input image (PNG, JPEG, BMP, GIF, TIFF)
    image_path: PathBuf,

    /// Width of the lithophane in mm [default: image width in pixels]
    #[arg(short, long)]
    width: Option<f64>,

    /// Maximum relief thickness in mm
    #[arg(short, long, default_value_t = 3.0)]
    depth: f64,

    /// Minimum base thickness in mm
    #[arg(short, long, default_value_t = 0.5)]
    offset: f64,

    /// Full-thickness frame width in mm
    #[arg(short, long, default_value_t = 0.0)]
    frame: f64,

    /// Spatial resolution in mm per sample
    #[arg(long, default_value_t = litho::relief::DEFAULT_RESOLUTION_MM)]
    resolution: f64,

    /// Resampling filter
    #[arg(long, value_enum, default_value_t = ResampleFilter::Triangle)]
    filter: ResampleFilter,

    /// Wrap the lithophane around a cylinder
    #[arg(long)]
    cylinder: bool,

    /// Write ASCII STL instead of binary
    #[arg(long)]
    ascii: bool,

    /// Output path [default: input path with .stl extension]
    #[arg(long)]
    output: Option<PathBuf>,

    /// Enable debug logging
    #[arg(short, long)]
    verbose: bool,
}

impl Cli {
    fn params(&self) -> LithophaneParams {
        let mut relief = ReliefParams::default()
            .with_depth(self.depth)
            .with_offset(self.offset)
            .with_frame(self.frame)
            .with_resolution(self.resolution)
            .with_filter(self.filter);
        relief.width_mm = self.width;

        let projection = if self.cylinder {
            Projection::cylindrical()
        } else {
            Projection::Planar
        };

        LithophaneParams { relief, projection }
    }
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    let default_level = if cli.verbose { "debug" } else { "info" };
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level)),
        )
        .with_writer(std::io::stderr)
        .init();

    let output = cli
        .output
        .clone()
        .unwrap_or_else(|| default_output_path(&cli.image_path));

    let stats = image_to_stl(&cli.image_path, &output, &cli.params(), !cli.ascii)
        .with_context(|| format!("failed to convert {}", cli.image_path.display()))?;

    if let Some(radius) = stats.cylinder_radius {
        println!("Cylinder radius: {radius:.3} mm");
    }
    info!(
        "Wrote {} triangles ({}x{} grid) to {}",
        stats.triangle_count,
        stats.grid_rows,
        stats.grid_cols,
        output.display()
    );

    Ok(())
}
