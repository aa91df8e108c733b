// Copyright (C) 2025 Jeremy J. Carroll. See LICENSE for details.

//! Command-line harness: find every integer logarithm of one target.

use clap::Parser;
use intlog_search::LogResolver;
use simplelog::{ColorChoice, Config, LevelFilter, TermLogger, TerminalMode};
use std::process::ExitCode;

#[derive(Parser)]
#[command(name = "intlog", about = "Find all integer pairs (b, k) with b^k = x")]
struct Args {
    /// Target value (x); magnitude must be at least 2
    target: i64,

    /// Search downward from the cursor (negative bases) instead of upward
    #[arg(long)]
    descending: bool,

    /// Increase log verbosity (-v: debug, -vv: trace)
    #[arg(short, long, action = clap::ArgAction::Count)]
    verbose: u8,
}

fn main() -> ExitCode {
    let args = Args::parse();

    let level = match args.verbose {
        0 => LevelFilter::Info,
        1 => LevelFilter::Debug,
        _ => LevelFilter::Trace,
    };
    let _ = TermLogger::init(
        level,
        Config::default(),
        TerminalMode::Stderr,
        ColorChoice::Auto,
    );

    let mut resolver = match LogResolver::new(args.target) {
        Ok(resolver) => resolver,
        Err(error) => {
            eprintln!("{error}");
            return ExitCode::FAILURE;
        }
    };

    if args.descending {
        resolver.flip_direction();
    }

    let entries = resolver.find_all();
    if entries.is_empty() {
        log::info!("no integer logarithm bases for {}", args.target);
    }
    for entry in entries {
        println!("{entry}");
    }

    ExitCode::SUCCESS
}
