//! Command line, configuration and frame loop shared by the demos

use anyhow::Context;
use clap::Parser;
use depthmesh_core::{DepthSource, Error, VisualizerConfig};
use depthmesh_io::{ReplayDepthSource, SyntheticDepthSource};
use depthmesh_visualization::{
    point_labels, status_lines, ControlAction, ControlSurface, DrawCounts, FrameLoop,
    RecordingRenderer,
};
use std::fs;
use std::path::{Path, PathBuf};
use std::time::Duration;

#[derive(Debug, Parser)]
#[command(author, version, about)]
pub struct Args {
    /// JSON configuration; the demo's preset is used if omitted
    #[arg(long)]
    pub config: Option<PathBuf>,

    /// Replay a JSON recording instead of the synthetic camera
    #[arg(long)]
    pub replay: Option<PathBuf>,

    /// Loop the recording given with --replay
    #[arg(long)]
    pub looping: bool,

    /// Seed of the synthetic camera
    #[arg(long, default_value_t = 0)]
    pub seed: u64,

    /// Probability that a synthetic sample reports no return
    #[arg(long, default_value_t = 0.02)]
    pub dropout: f64,

    /// Frames to run before exiting
    #[arg(long, default_value_t = 30)]
    pub frames: usize,

    /// Key presses, one applied before each frame (e.g. "mmf")
    #[arg(long, default_value = "")]
    pub keys: String,

    /// Frame wait in milliseconds
    #[arg(long, default_value_t = 500)]
    pub timeout_ms: u64,

    /// Override the sampling step of the configuration
    #[arg(long)]
    pub step_size: Option<usize>,

    /// Override the connect distance of the configuration
    #[arg(long)]
    pub connect_distance: Option<f32>,

    /// Print the effective configuration as JSON and exit
    #[arg(long)]
    pub print_config: bool,
}

fn load_json_file<T: serde::de::DeserializeOwned>(path: &Path) -> anyhow::Result<T> {
    let data = fs::read_to_string(path)
        .with_context(|| format!("failed to read {}", path.display()))?;
    let value = serde_json::from_str(&data)
        .with_context(|| format!("failed to parse {}", path.display()))?;
    Ok(value)
}

/// `env_logger` at `info` unless `RUST_LOG` says otherwise
pub fn init_logging() {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();
}

/// The configuration file if given, otherwise `preset`, with command line overrides applied
pub fn load_config(args: &Args, preset: VisualizerConfig) -> anyhow::Result<VisualizerConfig> {
    let mut config = match &args.config {
        Some(path) => load_json_file(path)?,
        None => preset,
    };
    if let Some(step_size) = args.step_size {
        config.grid.step_size = step_size;
    }
    if let Some(connect_distance) = args.connect_distance {
        config.connect_distance = connect_distance;
    }
    config.validate().context("invalid configuration")?;
    Ok(config)
}

/// Print the configuration when asked to; returns `true` if the demo should exit
pub fn print_config(args: &Args, config: &VisualizerConfig) -> anyhow::Result<bool> {
    if args.print_config {
        println!("{}", serde_json::to_string_pretty(config)?);
    }
    Ok(args.print_config)
}

pub fn open_source(args: &Args, config: &VisualizerConfig) -> anyhow::Result<Box<dyn DepthSource>> {
    let source: Box<dyn DepthSource> = match &args.replay {
        Some(path) => Box::new(
            ReplayDepthSource::from_file(path)
                .with_context(|| format!("failed to load recording {}", path.display()))?
                .looping(args.looping),
        ),
        None => Box::new(
            SyntheticDepthSource::new(config.grid.frame_width, config.grid.frame_height, args.seed)
                .with_dropout_probability(args.dropout),
        ),
    };
    Ok(source)
}

pub fn frame_timeout(args: &Args) -> Duration {
    Duration::from_millis(args.timeout_ms)
}

/// Run the frame loop, applying one scripted key press per frame
///
/// Configuration errors and timeouts are logged and skipped; the loop ends
/// early when the source disconnects.
#[allow(dead_code)]
pub fn run(args: &Args, mut config: VisualizerConfig) -> anyhow::Result<()> {
    let source = open_source(args, &config)?;
    let mut frame_loop =
        FrameLoop::new(source, RecordingRenderer::default()).with_timeout(frame_timeout(args));
    frame_loop.start()?;

    let mut keys = args.keys.chars();
    for _ in 0..args.frames {
        if let Some(key) = keys.next() {
            match ControlAction::from_char(key) {
                Some(action) => config.apply(action),
                None => log::warn!("no binding for key {:?}", key),
            }
        }

        match frame_loop.step(&config) {
            Ok(stats) => log::debug!("{:?}", stats),
            Err(Error::Disconnected(reason)) => {
                log::info!("source disconnected: {}", reason);
                break;
            }
            Err(e) if e.is_recoverable() => {
                log::warn!("skipping frame: {}", e);
            }
            Err(e) => return Err(e.into()),
        }
    }

    let renderer = frame_loop.renderer();
    let last = DrawCounts::of(renderer.last_frame());
    println!(
        "{} frames drawn, last frame {} meshes / {} vertices / {} indices",
        renderer.frames_drawn(),
        last.meshes,
        last.vertices,
        last.indices
    );
    for line in status_lines(&config) {
        println!("{}", line);
    }
    for label in point_labels(renderer.last_frame(), &config) {
        println!("{}", label.text);
    }
    Ok(())
}
