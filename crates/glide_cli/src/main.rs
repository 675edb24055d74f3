//! Glide CLI
//!
//! Samples eased animations described in TOML, and previews detours.

mod sample;

use anyhow::{bail, Context, Result};
use clap::{Args, Parser, Subcommand};
use glide_animation::{Animation, AnimationConfig, ManualClock};
use std::path::{Path, PathBuf};
use tracing_subscriber::EnvFilter;

use crate::sample::{render_table, sample, Sample};

#[derive(Parser)]
#[command(name = "glide", version, about = "Sample eased animations and their detours")]
struct Cli {
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Evaluate an animation at evenly spaced times
    Sample {
        /// Animation description (TOML)
        file: PathBuf,

        /// First sample time (defaults to the animation's start)
        #[arg(long)]
        from: Option<f64>,

        /// Last sample time (defaults to the end of the first pass)
        #[arg(long)]
        to: Option<f64>,

        #[command(flatten)]
        output: OutputArgs,
    },

    /// Redirect an animation at a given time and sample the detour
    Detour {
        /// Animation description (TOML)
        file: PathBuf,

        /// Absolute time of the detour
        #[arg(long)]
        at: f64,

        /// Target magnitude of the detour
        #[arg(long)]
        end: f32,

        /// Detour duration in seconds
        #[arg(long)]
        duration: f64,

        #[command(flatten)]
        output: OutputArgs,
    },
}

#[derive(Args)]
struct OutputArgs {
    /// Number of intervals between samples
    #[arg(long, default_value_t = 20)]
    steps: usize,

    /// Print samples as JSON instead of a table
    #[arg(long)]
    json: bool,
}

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();
    match cli.command {
        Command::Sample {
            file,
            from,
            to,
            output,
        } => {
            let animation = load(&file)?;
            let from = from.unwrap_or(animation.t0());
            let to = to.unwrap_or(animation.end_time());
            tracing::info!("Sampling {} from t={} to t={}", file.display(), from, to);
            print_samples(&sample(&animation, from, to, output.steps), output.json)
        }
        Command::Detour {
            file,
            at,
            end,
            duration,
            output,
        } => {
            let animation = load(&file)?;
            let Some(detour) = animation.detour(at, end, duration) else {
                bail!(
                    "no detour possible at t={} (animation starts at t={})",
                    at,
                    animation.t0()
                );
            };
            tracing::info!(
                "Detour from {} at t={} ends at {} (t={})",
                file.display(),
                at,
                detour.segments()[0].val1(),
                detour.end_time()
            );

            if !output.json {
                let description = detour
                    .to_config()
                    .to_toml_string()
                    .context("Failed to describe detour")?;
                println!("{description}");
            }
            print_samples(
                &sample(&detour, at, detour.end_time(), output.steps),
                output.json,
            )
        }
    }
}

/// Load a description; a missing `t0` starts the animation at time zero
fn load(path: &Path) -> Result<Animation> {
    let config = AnimationConfig::load(path)
        .with_context(|| format!("Failed to load {}", path.display()))?;
    if config.t0.is_none() {
        tracing::debug!("No t0 in {}, starting at 0", path.display());
    }
    config
        .build(&ManualClock::default())
        .with_context(|| format!("Invalid animation in {}", path.display()))
}

fn print_samples(samples: &[Sample], json: bool) -> Result<()> {
    if json {
        println!("{}", serde_json::to_string_pretty(samples)?);
    } else {
        print!("{}", render_table(samples));
    }
    Ok(())
}
