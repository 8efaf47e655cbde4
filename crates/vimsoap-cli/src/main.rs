#![forbid(unsafe_code)]

//! vimsoap CLI
//!
//! Decodes captured vim25 responses and prints the typed fault chain.

use anyhow::Result;
use clap::{Parser, Subcommand, ValueEnum};
use std::io::Write;
use std::path::PathBuf;

mod commands;

/// Inspect vim25 SOAP and JSON responses
#[derive(Parser, Debug)]
#[command(name = "vimsoap")]
#[command(author, version, about, long_about = None)]
struct Args {
    /// Decoder configuration file (TOML)
    #[arg(short, long, global = true, env = "VIMSOAP_CONFIG")]
    config: Option<PathBuf>,

    /// Increase log verbosity (-v, -vv, -vvv)
    #[arg(short, long, global = true, action = clap::ArgAction::Count)]
    verbose: u8,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Decode a captured response body
    Decode {
        /// File holding the response body
        file: PathBuf,

        /// Wire format; guessed from the file extension when omitted
        #[arg(short, long, value_enum)]
        format: Option<Format>,

        /// HTTP status the body was returned with
        #[arg(short, long, default_value_t = 200)]
        status: u16,
    },
    /// List the registered fault types and aliases
    Types,
    /// Print the effective decoder configuration
    Config,
}

/// Response body format.
#[derive(Clone, Copy, Debug, PartialEq, Eq, ValueEnum)]
pub enum Format {
    /// SOAP envelope
    Xml,
    /// vim25 JSON protocol
    Json,
}

fn init_tracing(verbose: u8) {
    let default = match verbose {
        0 => "warn",
        1 => "info,vimsoap=debug",
        2 => "debug",
        _ => "trace",
    };
    tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| default.into()),
        )
        .init();
}

fn main() -> Result<()> {
    let args = Args::parse();
    init_tracing(args.verbose);

    let config = commands::load_config(args.config.as_deref())?;
    let mut out = std::io::stdout().lock();

    match args.command {
        Command::Decode {
            file,
            format,
            status,
        } => commands::decode(&mut out, &config, &file, format, status)?,
        Command::Types => commands::types(&mut out, &config)?,
        Command::Config => commands::show_config(&mut out, &config)?,
    }

    out.flush()?;
    Ok(())
}
