//! Lane Tracker - Offline Driver Entry Point

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use lane_cli::{init_logging, load_config, process_stream, read_frames};
use std::fs::File;
use std::io::{self, BufWriter, Write};
use std::path::PathBuf;
use tracing::{info, Level};

#[derive(Parser)]
#[command(name = "lane-track")]
#[command(about = "Track two lane boundaries through a recorded stream of Hough segments")]
#[command(version)]
struct Cli {
    /// Log level (trace, debug, info, warn, error)
    #[arg(long, global = true, default_value = "info")]
    log_level: Level,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Replay a segment stream and emit per-frame lane geometry.
    Run {
        /// JSON array of frames: {"segments": [[x1, y1, x2, y2], ...], "height", "width"}
        #[arg(long)]
        input: PathBuf,

        /// Tracker configuration file (TOML, JSON or YAML)
        #[arg(long)]
        config: Option<PathBuf>,

        /// Write JSON lines here instead of stdout
        #[arg(long)]
        output: Option<PathBuf>,

        /// Write one PNG overlay per frame into this directory
        #[arg(long)]
        overlay_dir: Option<PathBuf>,
    },

    /// Print the effective configuration as JSON.
    ShowConfig {
        /// Tracker configuration file (TOML, JSON or YAML)
        #[arg(long)]
        config: Option<PathBuf>,
    },
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    init_logging(cli.log_level)?;

    match cli.command {
        Commands::Run {
            input,
            config,
            output,
            overlay_dir,
        } => {
            info!("=== Lane Tracker v{} ===", env!("CARGO_PKG_VERSION"));

            let config = load_config(config.as_deref())?;
            let frames = read_frames(&input)?;
            info!(frames = frames.len(), input = %input.display(), "Loaded segment stream");

            let mut out: Box<dyn Write> = match &output {
                Some(path) => Box::new(BufWriter::new(
                    File::create(path)
                        .with_context(|| format!("Failed to create {}", path.display()))?,
                )),
                None => Box::new(BufWriter::new(io::stdout().lock())),
            };

            process_stream(config, &frames, &mut out, overlay_dir.as_deref())?;
        }
        Commands::ShowConfig { config } => {
            let config = load_config(config.as_deref())?;
            println!("{}", serde_json::to_string_pretty(&config)?);
        }
    }

    Ok(())
}
