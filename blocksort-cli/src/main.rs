//! blocksort CLI - block-sorting compressor
//!
//! Compresses single files with the suffix-array BWT pipeline (SBM1) or the
//! entropy-only Huffman pipeline (HFN1).

mod commands;
mod utils;

use clap::{ArgAction, Parser, Subcommand, ValueEnum};
use commands::{cmd_compress, cmd_decompress, cmd_info, cmd_report};
use log::LevelFilter;
use simplelog::{ColorChoice, Config, TermLogger, TerminalMode};
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "blocksort")]
#[command(author, version, about = "Block-sorting compressor - BWT, MTF and Huffman")]
#[command(long_about = "
blocksort compresses whole files in memory.

Pipelines:
  full     sentinel + suffix array + BWT + move-to-front + Huffman (.sbm)
  entropy  Huffman over the raw bytes (.hfn)

Examples:
  blocksort compress notes.txt
  blocksort compress image.bin -p entropy -o image.hfn
  blocksort decompress notes.txt.sbm
  blocksort info notes.txt.sbm --json
  blocksort report notes.txt
")]
struct Cli {
    /// Increase log verbosity (-v info, -vv debug, -vvv trace)
    #[arg(short, long, action = ArgAction::Count, global = true)]
    verbose: u8,

    /// Disable logging
    #[arg(short, long, global = true, conflicts_with = "verbose")]
    quiet: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Compress a file
    #[command(alias = "c")]
    Compress {
        /// File to compress
        input: PathBuf,

        /// Output file (default: input plus .sbm or .hfn)
        #[arg(short, long)]
        output: Option<PathBuf>,

        /// Pipeline to use
        #[arg(short, long, value_enum, default_value = "auto")]
        pipeline: PipelineChoice,
    },

    /// Decompress a blob of either pipeline
    #[command(alias = "d")]
    Decompress {
        /// Blob to decompress
        input: PathBuf,

        /// Output file (default: input without its .sbm or .hfn extension)
        #[arg(short, long)]
        output: Option<PathBuf>,
    },

    /// Show the header of a blob
    #[command(alias = "i")]
    Info {
        /// Blob to inspect
        blob: PathBuf,

        /// Output as JSON (machine-readable)
        #[arg(short, long)]
        json: bool,
    },

    /// Compress a file with both pipelines and compare
    Report {
        /// File to measure
        input: PathBuf,

        /// Output as JSON (machine-readable)
        #[arg(short, long)]
        json: bool,
    },
}

/// Pipeline selection for `compress`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum, Default)]
pub enum PipelineChoice {
    /// Suffix-array BWT + MTF + Huffman
    Full,
    /// Huffman only
    Entropy,
    /// Full, falling back to entropy when no sentinel value is free
    #[default]
    Auto,
}

fn log_level(verbose: u8, quiet: bool) -> LevelFilter {
    if quiet {
        return LevelFilter::Off;
    }
    match verbose {
        0 => LevelFilter::Warn,
        1 => LevelFilter::Info,
        2 => LevelFilter::Debug,
        _ => LevelFilter::Trace,
    }
}

fn main() {
    let cli = Cli::parse();

    // Fails only if a logger is already installed
    let _ = TermLogger::init(
        log_level(cli.verbose, cli.quiet),
        Config::default(),
        TerminalMode::Stderr,
        ColorChoice::Auto,
    );

    let result = match cli.command {
        Commands::Compress {
            input,
            output,
            pipeline,
        } => cmd_compress(&input, output.as_deref(), pipeline),
        Commands::Decompress { input, output } => cmd_decompress(&input, output.as_deref()),
        Commands::Info { blob, json } => cmd_info(&blob, json),
        Commands::Report { input, json } => cmd_report(&input, json),
    };

    if let Err(e) = result {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn test_cli_definition() {
        Cli::command().debug_assert();
    }

    #[test]
    fn test_log_level() {
        assert_eq!(log_level(0, false), LevelFilter::Warn);
        assert_eq!(log_level(1, false), LevelFilter::Info);
        assert_eq!(log_level(2, false), LevelFilter::Debug);
        assert_eq!(log_level(7, false), LevelFilter::Trace);
        assert_eq!(log_level(0, true), LevelFilter::Off);
    }

    #[test]
    fn test_parse_compress() {
        let cli = Cli::parse_from(["blocksort", "-vv", "compress", "a.txt", "-p", "entropy"]);
        assert_eq!(cli.verbose, 2);
        match cli.command {
            Commands::Compress {
                input,
                output,
                pipeline,
            } => {
                assert_eq!(input, PathBuf::from("a.txt"));
                assert!(output.is_none());
                assert_eq!(pipeline, PipelineChoice::Entropy);
            }
            _ => panic!("expected compress"),
        }
    }
}
