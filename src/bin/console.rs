//! LayerKV Console Binary
//!
//! Reads commands from a file or stdin and prints their output.

use std::fs::File;
use std::io::{self, BufReader};
use std::path::PathBuf;

use clap::Parser;
use layerkv::{Config, Session};
use tracing_subscriber::{fmt, EnvFilter};

/// LayerKV console
#[derive(Parser, Debug)]
#[command(name = "layerkv")]
#[command(about = "In-memory key-value store with nested transactions")]
#[command(version)]
struct Args {
    /// Command script to run (reads stdin when omitted)
    input: Option<PathBuf>,

    /// Echo each command before its output
    #[arg(short, long)]
    echo: bool,

    /// Log filter used when RUST_LOG is not set
    #[arg(short, long, default_value = "warn")]
    log_level: String,
}

fn main() {
    let args = Args::parse();

    // Logs go to stderr; stdout carries protocol output only
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(&args.log_level));

    fmt()
        .with_env_filter(filter)
        .with_target(true)
        .with_writer(io::stderr)
        .init();

    tracing::info!("LayerKV Console v{}", layerkv::VERSION);

    let config = Config::builder().echo_commands(args.echo).build();
    if let Err(e) = config.validate() {
        tracing::error!("Invalid configuration: {}", e);
        std::process::exit(2);
    }

    let mut session = Session::new(config);
    let stdout = io::stdout();
    let mut out = stdout.lock();

    let result = match &args.input {
        Some(path) => match File::open(path) {
            Ok(file) => session.run(BufReader::new(file), &mut out),
            Err(e) => {
                tracing::error!("Failed to open {}: {}", path.display(), e);
                std::process::exit(1);
            }
        },
        None => session.run(io::stdin().lock(), &mut out),
    };

    if let Err(e) = result {
        tracing::error!("Session error: {}", e);
        std::process::exit(1);
    }
}
