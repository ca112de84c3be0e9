//! Win-expectancy CLI
//!
//! Thin front-end over `bb_core` for poking at the evaluator from a
//! shell: evaluate one situation, aggregate a timeline, or chart the
//! built-in demo game.

use std::fs;
use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};

#[derive(Parser)]
#[command(name = "bb_cli")]
#[command(about = "Evaluate baseball game situations", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Evaluate a single situation from an EvaluateRequest JSON file
    Evaluate {
        /// Input request JSON file path
        #[arg(long)]
        r#in: PathBuf,
    },

    /// Aggregate a game timeline from a TimelineRequest JSON file
    Timeline {
        /// Input request JSON file path
        #[arg(long)]
        r#in: PathBuf,
    },

    /// Aggregate the built-in demo game and print its timeline
    Demo,
}

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info")),
        )
        .init();

    let cli = Cli::parse();
    match cli.command {
        Commands::Evaluate { r#in } => {
            let request = fs::read_to_string(&r#in)
                .with_context(|| format!("reading {}", r#in.display()))?;
            let response = bb_core::evaluate_situation_json(&request)?;
            println!("{response}");
        }
        Commands::Timeline { r#in } => {
            let request = fs::read_to_string(&r#in)
                .with_context(|| format!("reading {}", r#in.display()))?;
            let response = bb_core::aggregate_timeline_json(&request)?;
            println!("{response}");
        }
        Commands::Demo => {
            let timeline = bb_core::aggregate_timeline(&bb_core::data::demo_game());
            println!("{}", serde_json::to_string_pretty(&timeline)?);
        }
    }
    Ok(())
}
