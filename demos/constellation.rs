//! Vertices joined by line segments when they are close enough.

mod common;

use clap::Parser;
use depthmesh_core::VisualizerConfig;

fn main() -> anyhow::Result<()> {
    common::init_logging();

    let args = common::Args::parse();
    let config = common::load_config(&args, VisualizerConfig::constellation())?;
    if common::print_config(&args, &config)? {
        return Ok(());
    }

    common::run(&args, config)
}
