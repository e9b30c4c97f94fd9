mod game;
mod parse;
mod replay;
mod ui;

use std::time::Instant;

use clap::{Parser, Subcommand};
use num_format::{Locale, ToFormattedString};
use reversi_engine::perft;
use tracing_subscriber::EnvFilter;
use tracing_subscriber::filter::LevelFilter;

#[derive(Parser, Debug)]
#[command(name = "reversi", version, about = "Two-player Reversi on the terminal")]
struct Cli {
    #[command(subcommand)]
    command: Option<SubCommands>,

    /// Disable colored output
    #[arg(long, global = true)]
    no_color: bool,

    /// Log level written to stderr (overridden by RUST_LOG)
    #[arg(long, global = true, default_value = "warn")]
    log_level: LevelFilter,
}

#[derive(Debug, Subcommand)]
enum SubCommands {
    /// Play an interactive game (default)
    Play,
    /// Apply a move sequence like "d3c3c4" and print the final position
    Replay {
        #[arg()]
        moves: String,

        /// Print the final state as JSON
        #[arg(long)]
        json: bool,
    },
    /// Count the leaf nodes of the move tree from the initial position
    Perft {
        #[arg(value_parser = clap::value_parser!(u32).range(1..=20))]
        depth: u32,
    },
}

fn main() -> anyhow::Result<()> {
    let args = Cli::parse();
    init_logging(args.log_level);
    if args.no_color {
        colored::control::set_override(false);
    }

    match args.command.unwrap_or(SubCommands::Play) {
        SubCommands::Play => ui::ui_loop(),
        SubCommands::Replay { moves, json } => replay::replay(&moves, json),
        SubCommands::Perft { depth } => {
            run_perft(depth);
            Ok(())
        }
    }
}

fn init_logging(level: LevelFilter) {
    let filter = EnvFilter::builder()
        .with_default_directive(level.into())
        .from_env_lossy();
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}

fn run_perft(depth: u32) {
    for d in 1..=depth {
        let start = Instant::now();
        let nodes = perft::perft_root(d);
        let elapsed = start.elapsed();
        println!(
            "depth {d:>2}: {:>15} nodes  {:>8.3}s",
            nodes.to_formatted_string(&Locale::en),
            elapsed.as_secs_f64()
        );
    }
}
