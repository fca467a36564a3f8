//! Orange point cloud, one mesh per sampled row.
//!
//! Dropouts are removed while the filter (f) is on.

mod common;

use clap::Parser;
use depthmesh_core::VisualizerConfig;

fn main() -> anyhow::Result<()> {
    common::init_logging();

    let args = common::Args::parse();
    let config = common::load_config(&args, VisualizerConfig::scan_lines())?;
    if common::print_config(&args, &config)? {
        return Ok(());
    }

    common::run(&args, config)
}
