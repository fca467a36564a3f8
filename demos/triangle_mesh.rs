//! Smoothed surface triangulated over the sampling grid.
//!
//! Try `--keys uy` to label the vertices and switch primitive mode.

mod common;

use clap::Parser;
use depthmesh_core::VisualizerConfig;

fn main() -> anyhow::Result<()> {
    common::init_logging();

    let args = common::Args::parse();
    let config = common::load_config(&args, VisualizerConfig::triangle_mesh())?;
    if common::print_config(&args, &config)? {
        return Ok(());
    }

    common::run(&args, config)
}
