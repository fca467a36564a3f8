//! Average distance of the centre of the frame, reported as a ball radius.
//!
//! Stands in for the physics toy: each frame prints the radius the ball would
//! take and the grey level of the depth swatch.

mod common;

use clap::Parser;
use depthmesh_algorithms::DepthProbe;
use depthmesh_core::{DepthSource, Error, VisualizerConfig};

fn main() -> anyhow::Result<()> {
    common::init_logging();

    let args = common::Args::parse();
    let config = common::load_config(&args, VisualizerConfig::default())?;
    if common::print_config(&args, &config)? {
        return Ok(());
    }

    let probe = DepthProbe::default();
    let mut source = common::open_source(&args, &config)?;
    source.start()?;

    for frame_index in 0..args.frames {
        let frame = match source.wait_for_frame(common::frame_timeout(&args)) {
            Ok(frame) => frame,
            Err(Error::Disconnected(reason)) => {
                log::info!("source disconnected: {}", reason);
                break;
            }
            Err(e) if e.is_recoverable() => {
                log::warn!("skipping frame: {}", e);
                continue;
            }
            Err(e) => return Err(e.into()),
        };

        match probe.measure(&frame)? {
            Some(reading) => println!(
                "frame {}: {:.3} m over {}/{} samples, radius {:.1}, shade {}",
                frame_index,
                reading.average_distance,
                reading.valid_samples,
                reading.total_samples,
                reading.mapped,
                reading.shade()
            ),
            None => println!("frame {}: no valid samples", frame_index),
        }
    }

    Ok(())
}
