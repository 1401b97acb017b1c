//! Range slider CLI: replay, render, and mapping commands.
//!
//! Commands:
//! - `replay`: feed a JSON pointer script through a configured slider and
//!   print every response plus `valueChanged` payloads as JSON lines
//! - `render`: print the render plan for a configuration and layout
//! - `map`: convert a value to a thumb position or a position to a value
//! - `config`: print the default configuration as TOML
//!
//! Logs go to stderr (`RUST_LOG=rangeslider_core=trace` to see drag steps);
//! stdout carries only JSON/TOML.

mod script;

use std::path::{Path, PathBuf};

use anyhow::{bail, Context, Result};
use clap::{Parser, Subcommand};
use serde::Serialize;
use tracing_subscriber::EnvFilter;

use rangeslider_core::{RangeSelection, RangeSlider, SliderConfig};

use crate::script::Script;

#[derive(Parser)]
#[command(
    name = "rangeslider",
    about = "Range slider CLI: drive the dual-thumb control from scripts"
)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Replay a JSON pointer script and print each step as a JSON line.
    Replay {
        /// Path to the pointer script.
        script: PathBuf,

        #[command(flatten)]
        slider: SliderArgs,

        /// Also print the final render plan.
        #[arg(long, default_value_t = false)]
        render: bool,
    },
    /// Print the render plan as pretty JSON.
    Render {
        #[command(flatten)]
        slider: SliderArgs,

        /// Override the configured lower value.
        #[arg(long)]
        lower: Option<f64>,

        /// Override the configured upper value.
        #[arg(long)]
        upper: Option<f64>,
    },
    /// Convert between values and thumb-centre positions.
    Map {
        #[command(flatten)]
        slider: SliderArgs,

        /// Value to convert to a position.
        #[arg(long, conflicts_with = "position")]
        value: Option<f64>,

        /// Position (pixels) to convert to a value.
        #[arg(long)]
        position: Option<f64>,
    },
    /// Print the default slider configuration as TOML.
    Config,
}

/// Configuration and layout shared by every slider command.
#[derive(clap::Args)]
struct SliderArgs {
    /// Path to a TOML slider config. Defaults to the built-in configuration.
    #[arg(long)]
    config: Option<PathBuf>,

    /// Control width in pixels.
    #[arg(long)]
    width: Option<f64>,

    /// Control height in pixels (also the thumb diameter).
    #[arg(long)]
    height: Option<f64>,
}

const DEFAULT_WIDTH: f64 = 300.0;
const DEFAULT_HEIGHT: f64 = 30.0;

#[derive(Serialize)]
struct ReplaySummary {
    selection: RangeSelection,
    value_changed_count: usize,
    #[serde(skip_serializing_if = "Option::is_none")]
    render: Option<rangeslider_core::RenderPlan>,
}

#[derive(Serialize)]
struct MapResult {
    #[serde(skip_serializing_if = "Option::is_none")]
    value: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    position: Option<f64>,
    gap_between_thumbs: f64,
}

fn main() -> Result<()> {
    init_logging();
    let cli = Cli::parse();

    match cli.command {
        Commands::Replay {
            script,
            slider,
            render,
        } => run_replay(&script, &slider, render),
        Commands::Render {
            slider,
            lower,
            upper,
        } => run_render(&slider, lower, upper),
        Commands::Map {
            slider,
            value,
            position,
        } => run_map(&slider, value, position),
        Commands::Config => {
            print!("{}", SliderConfig::default().to_toml_string()?);
            Ok(())
        }
    }
}

fn init_logging() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}

/// Build a slider from `--config` and lay it out, preferring explicit
/// dimensions, then the fallback (e.g. from a script), then defaults.
fn build_slider(args: &SliderArgs, fallback: (Option<f64>, Option<f64>)) -> Result<RangeSlider> {
    let config = match &args.config {
        Some(path) => load_config(path)?,
        None => SliderConfig::default(),
    };
    let mut slider = config.build().context("invalid slider configuration")?;
    let width = args.width.or(fallback.0).unwrap_or(DEFAULT_WIDTH);
    let height = args.height.or(fallback.1).unwrap_or(DEFAULT_HEIGHT);
    slider.on_bounds_changed(width, height);
    Ok(slider)
}

fn load_config(path: &Path) -> Result<SliderConfig> {
    SliderConfig::load(path).with_context(|| format!("load slider config {}", path.display()))
}

fn run_replay(script_path: &Path, args: &SliderArgs, render: bool) -> Result<()> {
    let script = Script::load(script_path)?;
    let mut slider = build_slider(args, (script.width, script.height))?;

    let steps = script::replay(&mut slider, &script.events);
    for step in &steps {
        println!("{}", serde_json::to_string(step)?);
    }

    let summary = ReplaySummary {
        selection: slider.selection(),
        value_changed_count: steps
            .iter()
            .filter(|s| s.response.value_changed().is_some())
            .count(),
        render: render.then(|| slider.render()),
    };
    println!("{}", serde_json::to_string(&summary)?);
    Ok(())
}

fn run_render(args: &SliderArgs, lower: Option<f64>, upper: Option<f64>) -> Result<()> {
    let mut slider = build_slider(args, (None, None))?;
    let current = slider.selection();
    slider.set_selection(lower.unwrap_or(current.lower), upper.unwrap_or(current.upper));
    println!("{}", serde_json::to_string_pretty(&slider.render())?);
    Ok(())
}

fn run_map(args: &SliderArgs, value: Option<f64>, position: Option<f64>) -> Result<()> {
    let slider = build_slider(args, (None, None))?;
    let result = match (value, position) {
        (Some(v), _) => MapResult {
            value: Some(v),
            position: Some(slider.position_for_value(v)),
            gap_between_thumbs: slider.gap_between_thumbs(),
        },
        (None, Some(p)) => MapResult {
            value: Some(slider.value_for_position(p)),
            position: Some(p),
            gap_between_thumbs: slider.gap_between_thumbs(),
        },
        (None, None) => bail!("one of --value or --position is required"),
    };
    println!("{}", serde_json::to_string(&result)?);
    Ok(())
}
