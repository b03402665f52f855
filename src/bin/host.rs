//! kagari Host Shim
//!
//! Drives one load → request → unload cycle against the emergency engine,
//! standing in for a real plugin host.

use std::io::Read;

use clap::Parser;
use kagari::{Config, Shiori};
use tracing_subscriber::{fmt, EnvFilter};

/// kagari host shim
#[derive(Parser, Debug)]
#[command(name = "kagari-host")]
#[command(about = "Emergency SHIORI response engine, driven from the command line")]
#[command(version)]
struct Args {
    /// Configuration root handed to load
    #[arg(short, long, default_value = "./")]
    root: String,

    /// Request file; reads stdin when omitted
    #[arg(short = 'f', long)]
    request_file: Option<String>,

    /// Override the Sender header value
    #[arg(long)]
    sender: Option<String>,
}

fn main() {
    // Initialize tracing/logging
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new("info,kagari=debug"));

    fmt()
        .with_env_filter(filter)
        .with_target(true)
        .with_writer(std::io::stderr)
        .init();

    let args = Args::parse();

    tracing::info!("kagari host v{}", kagari::VERSION);

    let mut builder = Config::builder();
    if let Some(sender) = args.sender {
        builder = builder.sender(sender);
    }
    let config = builder.build();

    let mut shiori = Shiori::new(config);
    shiori.load(args.root.as_bytes());

    let raw = match &args.request_file {
        Some(path) => match std::fs::read(path) {
            Ok(bytes) => bytes,
            Err(e) => {
                tracing::error!("Failed to read {}: {}", path, e);
                std::process::exit(1);
            }
        },
        None => {
            let mut buf = Vec::new();
            if let Err(e) = std::io::stdin().read_to_end(&mut buf) {
                tracing::error!("Failed to read stdin: {}", e);
                std::process::exit(1);
            }
            buf
        }
    };

    let response = shiori.request(&raw);
    print!("{}", String::from_utf8_lossy(&response));

    shiori.unload();
}
