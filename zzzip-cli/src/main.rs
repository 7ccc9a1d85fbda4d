//! zzzip CLI - 16-bit LZW text compression
//!
//! Compresses `.txt` files into `.zzz` code streams and back.

mod commands;
mod utils;

use clap::{Parser, Subcommand};
use commands::{cmd_compress, cmd_decompress, cmd_info, cmd_test};
use std::path::PathBuf;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};
use zzzip_lzw::CodeConfig;

#[derive(Parser)]
#[command(name = "zzzip")]
#[command(author, version, about = "LZW text compression into .zzz code streams")]
#[command(long_about = "
zzzip compresses plain text (printable ASCII, tab, CR, LF) with an adaptive
LZW dictionary and stores it as a sequence of 16-bit big-endian codes.

Examples:
  zzzip compress notes.txt
  zzzip compress notes.txt -o archive/notes.zzz
  zzzip decompress notes.txt.zzz
  zzzip test notes.txt.zzz
  zzzip info notes.txt.zzz --json
")]
struct Cli {
    /// Highest dictionary code (must match between compress and decompress)
    #[arg(long, global = true, default_value_t = u16::MAX)]
    max_code: u16,

    /// Show debug logging
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Compress a .txt file
    #[command(alias = "c")]
    Compress {
        /// Text file to compress
        input: PathBuf,

        /// Output file (defaults to INPUT.zzz)
        #[arg(short, long)]
        output: Option<PathBuf>,

        /// Overwrite an existing output file
        #[arg(short, long)]
        force: bool,

        /// Show progress bar
        #[arg(short = 'P', long)]
        progress: bool,
    },

    /// Decompress a .zzz file
    #[command(alias = "x")]
    Decompress {
        /// Compressed file
        input: PathBuf,

        /// Output file (defaults to INPUT without .zzz)
        #[arg(short, long)]
        output: Option<PathBuf>,

        /// Overwrite an existing output file
        #[arg(short, long)]
        force: bool,

        /// Show progress bar
        #[arg(short = 'P', long)]
        progress: bool,
    },

    /// Check that a compressed file decodes cleanly
    #[command(alias = "t")]
    Test {
        /// Compressed file to test
        input: PathBuf,
    },

    /// Show information about a compressed file
    #[command(alias = "i")]
    Info {
        /// Compressed file to inspect
        input: PathBuf,

        /// Output as JSON (machine-readable)
        #[arg(short, long)]
        json: bool,
    },
}

fn init_logging(verbose: bool) {
    let default = if verbose {
        "zzzip=debug,zzzip_lzw=debug"
    } else {
        "zzzip=info,zzzip_lzw=warn"
    };
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| default.into()),
        )
        .with(
            tracing_subscriber::fmt::layer()
                .with_target(false)
                .with_writer(std::io::stderr),
        )
        .init();
}

fn run(cli: Cli) -> anyhow::Result<()> {
    let config = CodeConfig::with_max_code(cli.max_code)?;

    match cli.command {
        Commands::Compress {
            input,
            output,
            force,
            progress,
        } => cmd_compress(&input, output, config, force, progress),
        Commands::Decompress {
            input,
            output,
            force,
            progress,
        } => cmd_decompress(&input, output, config, force, progress),
        Commands::Test { input } => cmd_test(&input, config),
        Commands::Info { input, json } => cmd_info(&input, config, json),
    }
}

fn main() {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    if let Err(e) = run(cli) {
        eprintln!("Error: {:#}", e);
        std::process::exit(1);
    }
}
